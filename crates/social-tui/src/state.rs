//! Application state composition.
//!
//! ```text
//! AppState
//! ├── session: Session       (token + confirmed user, in memory only)
//! ├── screen: Screen         (login screen or authenticated shell)
//! ├── auth: AuthState        (login form)
//! ├── feed: FeedState        (posts, selection)
//! ├── upload: UploadState    (picker, path, caption)
//! ├── task_seq: TaskSeq      (async task id generator)
//! └── tasks: Tasks           (in-flight request lifecycle)
//! ```

use std::path::PathBuf;

use social_core::config::Config;
use social_core::session::Session;

use crate::common::{TaskSeq, Tasks};
use crate::features::auth::AuthState;
use crate::features::feed::FeedState;
use crate::features::upload::UploadState;

/// Views reachable from the sidebar once logged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Feed,
    Upload,
}

impl View {
    pub fn title(self) -> &'static str {
        match self {
            View::Feed => "Feed",
            View::Upload => "New Post",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Unauthenticated,
    Authenticated(View),
}

pub struct AppState {
    pub config: Config,
    /// Directory scanned by the upload picker.
    pub media_root: PathBuf,
    pub session: Session,
    pub screen: Screen,
    pub auth: AuthState,
    pub feed: FeedState,
    pub upload: UploadState,
    pub task_seq: TaskSeq,
    pub tasks: Tasks,
    pub should_quit: bool,
    pub spinner_frame: usize,
}

impl AppState {
    pub fn new(config: Config, media_root: PathBuf) -> Self {
        Self {
            config,
            media_root,
            session: Session::default(),
            screen: Screen::Unauthenticated,
            auth: AuthState::default(),
            feed: FeedState::default(),
            upload: UploadState::default(),
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
            should_quit: false,
            spinner_frame: 0,
        }
    }

    /// The active view, or `None` on the login screen.
    pub fn view(&self) -> Option<View> {
        match self.screen {
            Screen::Unauthenticated => None,
            Screen::Authenticated(view) => Some(view),
        }
    }

    /// Drops everything tied to the current account.
    pub fn reset_session(&mut self) {
        self.session.clear();
        self.screen = Screen::Unauthenticated;
        self.auth = AuthState::default();
        self.feed = FeedState::default();
        self.upload = UploadState::default();
        self.tasks.clear_all();
    }
}
