//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! Spawned handlers send their result `UiEvent`s to `inbox_tx`; the loop
//! drains `inbox_rx` every frame alongside terminal input.

mod handlers;
mod inbox;

use std::io::Stdout;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use inbox::{UiEventReceiver, UiEventSender};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use social_core::api::ApiClient;
use social_core::config::Config;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Tick cadence while a request is in flight (spinner animation).
pub const FRAME_DURATION: Duration = Duration::from_millis(33);

/// Poll duration when idle.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Terminal state is restored on drop and on
/// panic.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    api: ApiClient,
    inbox_tx: UiEventSender,
    inbox_rx: UiEventReceiver,
    last_tick: Instant,
}

impl TuiRuntime {
    /// Creates a new TUI runtime. Must be called inside a tokio runtime.
    pub fn new(config: Config, media_root: PathBuf) -> Result<Self> {
        let api = ApiClient::from_config(&config)?;

        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();
        Ok(Self {
            terminal,
            state: AppState::new(config, media_root),
            api,
            inbox_tx,
            inbox_rx,
            last_tick: Instant::now(),
        })
    }

    /// Runs the main event loop until the user quits.
    pub fn run(&mut self) -> Result<()> {
        let mut dirty = true;

        while !self.state.should_quit {
            let events = self.collect_events()?;
            for event in events {
                dirty = true;
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| render::render(&self.state, frame))?;
                dirty = false;
            }
        }

        Ok(())
    }

    /// Drains the inbox, then waits for terminal input until the next tick.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        let tick_interval = if self.state.tasks.is_any_running() {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };
        let poll_duration = if events.is_empty() {
            tick_interval.saturating_sub(self.last_tick.elapsed())
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        // Only animate while something is running; idle ticks would just redraw.
        if self.last_tick.elapsed() >= tick_interval {
            self.last_tick = Instant::now();
            if self.state.tasks.is_any_running() {
                events.push(UiEvent::Tick);
            }
        }

        Ok(events)
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.should_quit = true;
            }
            UiEffect::OpenUrl { url } => {
                if let Err(e) = open::that(&url) {
                    warn!(%url, error = %e, "failed to open media URL");
                }
            }
            effect => {
                debug!(?effect, "spawning effect");
                let api = self.api.clone();
                let session = self.state.session.clone();
                let tx = self.inbox_tx.clone();
                tokio::spawn(async move {
                    if let Some(event) = handlers::perform(api, session, effect).await {
                        let _ = tx.send(event);
                    }
                });
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
