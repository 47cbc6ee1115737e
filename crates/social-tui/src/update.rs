//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use std::path::PathBuf;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use social_core::api::ApiError;
use social_core::auth::{Credentials, LoginOutcome, apply_login};
use social_core::models::PostId;
use tracing::{debug, info};

use crate::common::{Notice, TaskId, TaskKind};
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::auth::{self, AuthAction, AuthState};
use crate::features::feed::{self, FeedAction, FeedState};
use crate::features::upload::{self, POSTED_MESSAGE, UploadAction, UploadState};
use crate::state::{AppState, Screen, View};

pub const LOGGED_IN_MESSAGE: &str = "Logged in successfully";

/// The main reducer function.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.spinner_frame = app.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::LoginFinished { task, result } => {
            if !finish(app, TaskKind::Auth, task) {
                return vec![];
            }
            handle_login_finished(app, result)
        }
        UiEvent::RegisterFinished { task, result } => {
            if finish(app, TaskKind::Auth, task) {
                auth::handle_register_result(&mut app.auth, result);
            }
            vec![]
        }
        UiEvent::FeedLoaded { task, result } => {
            if finish(app, TaskKind::Feed, task) {
                feed::handle_feed_loaded(&mut app.feed, result);
            }
            vec![]
        }
        UiEvent::PostDeleted { task, result } => {
            if finish(app, TaskKind::Delete, task)
                && feed::handle_post_deleted(&mut app.feed, result)
            {
                return start_feed_load(app);
            }
            vec![]
        }
        UiEvent::PostUploaded { task, result } => {
            if !finish(app, TaskKind::Upload, task) {
                return vec![];
            }
            match result {
                Ok(()) => {
                    app.upload = UploadState::default();
                    app.feed.notice = Some(Notice::success(POSTED_MESSAGE));
                    app.screen = Screen::Authenticated(View::Feed);
                    start_feed_load(app)
                }
                Err(e) => {
                    upload::handle_upload_failed(&mut app.upload, &e);
                    vec![]
                }
            }
        }
        UiEvent::MediaDiscovered { task, files } => {
            if finish(app, TaskKind::MediaDiscovery, task) {
                upload::handle_media_discovered(&mut app.upload, files);
            }
            vec![]
        }
    }
}

/// Accepts a result only if its task is still the active one.
fn finish(app: &mut AppState, kind: TaskKind, task: TaskId) -> bool {
    let accepted = app.tasks.state_mut(kind).finish_if_active(task);
    if !accepted {
        debug!(?kind, ?task, "dropping stale result");
    }
    accepted
}

fn start_task(app: &mut AppState, kind: TaskKind) -> TaskId {
    let id = app.task_seq.next_id();
    app.tasks.state_mut(kind).on_started(id);
    id
}

fn handle_login_finished(
    app: &mut AppState,
    result: Result<LoginOutcome, ApiError>,
) -> Vec<UiEffect> {
    let outcome = match result {
        Ok(outcome) => outcome,
        Err(e) => {
            auth::handle_login_failure(&mut app.auth, &e);
            return vec![];
        }
    };

    match apply_login(&mut app.session, outcome, app.config.auth.partial_login) {
        Ok(user) => {
            info!(email = %user.email, "logged in");
            app.auth = AuthState::default();
            app.feed = FeedState::default();
            app.upload = UploadState::default();
            app.feed.notice = Some(Notice::success(LOGGED_IN_MESSAGE));
            app.screen = Screen::Authenticated(View::Feed);
            start_feed_load(app)
        }
        Err(e) => {
            auth::handle_login_failure(&mut app.auth, &e);
            vec![]
        }
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Paste(text) => {
            if !app.tasks.is_busy() {
                handle_paste(app, &text);
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_paste(app: &mut AppState, text: &str) {
    match app.screen {
        Screen::Unauthenticated => auth::handle_paste(&mut app.auth, text),
        Screen::Authenticated(View::Upload) => upload::handle_paste(&mut app.upload, text),
        Screen::Authenticated(View::Feed) => {}
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.kind != KeyEventKind::Press {
        return vec![];
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return vec![UiEffect::Quit];
    }
    // One action at a time: input waits for the request in flight.
    if app.tasks.is_busy() {
        return vec![];
    }

    match app.screen {
        Screen::Unauthenticated => match auth::handle_key(&mut app.auth, key) {
            AuthAction::None => vec![],
            AuthAction::Login(credentials) => start_login(app, credentials),
            AuthAction::Register(credentials) => start_register(app, credentials),
        },
        Screen::Authenticated(view) => handle_shell_key(app, view, key),
    }
}

fn handle_shell_key(app: &mut AppState, view: View, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::F(1) => return navigate(app, View::Feed),
        KeyCode::F(2) => return navigate(app, View::Upload),
        KeyCode::Char('1') if alt => return navigate(app, View::Feed),
        KeyCode::Char('2') if alt => return navigate(app, View::Upload),
        KeyCode::Char('l') if ctrl => {
            logout(app);
            return vec![];
        }
        _ => {}
    }

    match view {
        View::Feed => match feed::handle_key(&mut app.feed, key) {
            FeedAction::None => vec![],
            FeedAction::Reload => start_feed_load(app),
            FeedAction::Delete(id) => start_delete(app, id),
            FeedAction::Open(url) => vec![UiEffect::OpenUrl { url }],
        },
        View::Upload => {
            if key.code == KeyCode::Esc {
                return navigate(app, View::Feed);
            }
            match upload::handle_key(&mut app.upload, &app.media_root, key) {
                UploadAction::None => vec![],
                UploadAction::Submit { path, caption } => start_upload(app, path, caption),
            }
        }
    }
}

/// Switches views. Each activation fetches afresh.
pub fn navigate(app: &mut AppState, view: View) -> Vec<UiEffect> {
    if !app.session.is_authenticated() {
        return vec![];
    }
    app.screen = Screen::Authenticated(view);
    match view {
        View::Feed => {
            app.feed = FeedState::default();
            start_feed_load(app)
        }
        View::Upload => {
            app.upload = UploadState {
                discovering: true,
                ..UploadState::default()
            };
            let task = start_task(app, TaskKind::MediaDiscovery);
            vec![UiEffect::DiscoverMedia {
                task,
                root: app.media_root.clone(),
            }]
        }
    }
}

pub fn logout(app: &mut AppState) {
    info!("logged out");
    app.reset_session();
}

fn start_login(app: &mut AppState, credentials: Credentials) -> Vec<UiEffect> {
    let task = start_task(app, TaskKind::Auth);
    vec![UiEffect::Login { task, credentials }]
}

fn start_register(app: &mut AppState, credentials: Credentials) -> Vec<UiEffect> {
    let task = start_task(app, TaskKind::Auth);
    vec![UiEffect::Register { task, credentials }]
}

fn start_feed_load(app: &mut AppState) -> Vec<UiEffect> {
    if !app.session.is_authenticated() {
        return vec![];
    }
    let task = start_task(app, TaskKind::Feed);
    vec![UiEffect::LoadFeed { task }]
}

fn start_delete(app: &mut AppState, id: PostId) -> Vec<UiEffect> {
    let task = start_task(app, TaskKind::Delete);
    vec![UiEffect::DeletePost { task, id }]
}

fn start_upload(
    app: &mut AppState,
    path: PathBuf,
    caption: Option<String>,
) -> Vec<UiEffect> {
    let task = start_task(app, TaskKind::Upload);
    vec![UiEffect::UploadPost {
        task,
        path,
        caption,
    }]
}

#[cfg(test)]
mod tests {
    use social_core::api::Failure;
    use social_core::config::{Config, PartialLoginPolicy};
    use social_core::models::{FileType, Post, User};

    use super::*;
    use crate::features::auth::AuthFocus;
    use crate::features::upload::UploadFocus;

    fn app() -> AppState {
        AppState::new(Config::default(), PathBuf::from("/media"))
    }

    fn key(code: KeyCode) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn ctrl(ch: char) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(
            KeyCode::Char(ch),
            KeyModifiers::CONTROL,
        )))
    }

    fn type_str(app: &mut AppState, text: &str) {
        for ch in text.chars() {
            update(app, key(KeyCode::Char(ch)));
        }
    }

    fn logged_in() -> AppState {
        let mut app = app();
        app.session.set("tok".into(), User::new("bob@example.com"));
        app.screen = Screen::Authenticated(View::Feed);
        app
    }

    fn post(id: i64, is_owner: bool) -> Post {
        Post {
            id: PostId::Number(id),
            email: "bob@example.com".to_string(),
            created_at: "2024-03-15T10:30:00Z".to_string(),
            caption: None,
            file_type: FileType::Image,
            url: format!("http://cdn/{id}.png"),
            is_owner,
        }
    }

    fn login_task(effects: &[UiEffect]) -> TaskId {
        match effects {
            [UiEffect::Login { task, .. }] => *task,
            other => panic!("expected login effect, got {other:?}"),
        }
    }

    fn feed_task(effects: &[UiEffect]) -> TaskId {
        match effects {
            [UiEffect::LoadFeed { task }] => *task,
            other => panic!("expected feed load, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_credentials_never_emit_requests() {
        for (email, password) in [("", ""), ("bob@example.com", ""), ("", "secret123")] {
            let mut app = app();
            type_str(&mut app, email);
            update(&mut app, key(KeyCode::Tab));
            type_str(&mut app, password);

            for focus in [AuthFocus::Password, AuthFocus::Login, AuthFocus::SignUp] {
                app.auth.focus = focus;
                assert!(update(&mut app, key(KeyCode::Enter)).is_empty());
            }
            assert!(!app.tasks.is_busy());
        }
    }

    #[test]
    fn test_login_success_enters_feed() {
        let mut app = app();
        type_str(&mut app, "bob@example.com");
        update(&mut app, key(KeyCode::Enter));
        type_str(&mut app, "secret123");
        let task = login_task(&update(&mut app, key(KeyCode::Enter)));

        // Input is ignored while the request is in flight.
        assert!(update(&mut app, key(KeyCode::Char('x'))).is_empty());
        assert_eq!(app.auth.password.value(), "secret123");

        let effects = update(
            &mut app,
            UiEvent::LoginFinished {
                task,
                result: Ok(LoginOutcome::Authenticated {
                    token: "tok".into(),
                    user: User::new("bob@example.com"),
                }),
            },
        );
        feed_task(&effects);
        assert_eq!(app.screen, Screen::Authenticated(View::Feed));
        assert_eq!(app.session.token(), Some("tok"));
        assert_eq!(app.feed.notice, Some(Notice::success(LOGGED_IN_MESSAGE)));
        assert!(app.auth.password.is_empty());
    }

    #[test]
    fn test_user_fetch_failure_stays_logged_out() {
        for policy in [PartialLoginPolicy::Discard, PartialLoginPolicy::Retain] {
            let mut app = app();
            app.config.auth.partial_login = policy;
            app.auth.email.set("bob@example.com");
            app.auth.password.set("secret123");
            app.auth.focus = AuthFocus::Login;
            let task = login_task(&update(&mut app, key(KeyCode::Enter)));

            let effects = update(
                &mut app,
                UiEvent::LoginFinished {
                    task,
                    result: Ok(LoginOutcome::UserFetchFailed {
                        token: "tok".into(),
                        error: ApiError::CurrentUser(Failure::Status {
                            status: 500,
                            body: String::new(),
                        }),
                    }),
                },
            );

            assert!(effects.is_empty());
            assert_eq!(app.screen, Screen::Unauthenticated);
            assert!(!app.session.is_authenticated());
            assert_eq!(
                app.auth.notice,
                Some(Notice::error("Failed to get user info"))
            );
            let expected_token = match policy {
                PartialLoginPolicy::Discard => None,
                PartialLoginPolicy::Retain => Some("tok"),
            };
            assert_eq!(app.session.token(), expected_token);
        }
    }

    #[test]
    fn test_upload_without_file_emits_nothing() {
        let mut app = logged_in();
        update(&mut app, key(KeyCode::F(2)));
        app.tasks.clear_all();
        app.upload.caption.set("hello");
        app.upload.focus = UploadFocus::Share;

        assert!(update(&mut app, key(KeyCode::Enter)).is_empty());
        assert!(update(&mut app, ctrl('s')).is_empty());
    }

    #[test]
    fn test_upload_success_returns_to_feed() {
        let mut app = logged_in();
        let effects = update(&mut app, key(KeyCode::F(2)));
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::DiscoverMedia { root, .. }] if root == &PathBuf::from("/media")
        ));
        assert_eq!(app.screen, Screen::Authenticated(View::Upload));

        app.upload.path.set("cat.jpg");
        app.upload.caption.set("hello");
        let effects = update(&mut app, ctrl('s'));
        let task = match effects.as_slice() {
            [UiEffect::UploadPost {
                task,
                path,
                caption,
            }] => {
                assert_eq!(path, &PathBuf::from("/media/cat.jpg"));
                assert_eq!(caption.as_deref(), Some("hello"));
                *task
            }
            other => panic!("expected upload, got {other:?}"),
        };

        let effects = update(&mut app, UiEvent::PostUploaded { task, result: Ok(()) });
        feed_task(&effects);
        assert_eq!(app.screen, Screen::Authenticated(View::Feed));
        assert_eq!(app.feed.notice, Some(Notice::success(POSTED_MESSAGE)));
        assert!(app.upload.path.is_empty());
    }

    #[test]
    fn test_failed_upload_stays_on_form() {
        let mut app = logged_in();
        app.screen = Screen::Authenticated(View::Upload);
        app.upload.path.set("/tmp/missing.png");
        let effects = update(&mut app, ctrl('s'));
        let [UiEffect::UploadPost { task, .. }] = effects.as_slice() else {
            panic!("expected upload, got {effects:?}");
        };

        let effects = update(
            &mut app,
            UiEvent::PostUploaded {
                task: *task,
                result: Err(ApiError::Upload(Failure::Local("not found".into()))),
            },
        );
        assert!(effects.is_empty());
        assert_eq!(app.screen, Screen::Authenticated(View::Upload));
        assert_eq!(app.upload.notice, Some(Notice::error("Upload failed")));
        assert_eq!(app.upload.path.value(), "/tmp/missing.png");
    }

    #[test]
    fn test_delete_then_reload() {
        let mut app = logged_in();
        app.feed.replace_posts(vec![post(1, true)]);

        let effects = update(&mut app, key(KeyCode::Char('d')));
        let [UiEffect::DeletePost { task, id }] = effects.as_slice() else {
            panic!("expected delete, got {effects:?}");
        };
        assert_eq!(id, &PostId::Number(1));

        let effects = update(
            &mut app,
            UiEvent::PostDeleted {
                task: *task,
                result: Ok(()),
            },
        );
        feed_task(&effects);
    }

    #[test]
    fn test_logout_blocks_navigation() {
        let mut app = logged_in();
        let task = feed_task(&update(&mut app, key(KeyCode::Char('r'))));

        update(&mut app, ctrl('l'));
        // Logout is refused while the feed request is in flight.
        assert_eq!(app.screen, Screen::Authenticated(View::Feed));

        update(
            &mut app,
            UiEvent::FeedLoaded {
                task,
                result: Ok(vec![post(1, false)]),
            },
        );
        update(&mut app, ctrl('l'));

        assert_eq!(app.screen, Screen::Unauthenticated);
        assert!(app.session.get().is_none());
        assert!(app.feed.posts.is_empty());

        assert!(navigate(&mut app, View::Feed).is_empty());
        assert!(navigate(&mut app, View::Upload).is_empty());
        assert!(update(&mut app, key(KeyCode::F(1))).is_empty());
        assert_eq!(app.screen, Screen::Unauthenticated);
    }

    #[test]
    fn test_results_after_logout_are_dropped() {
        let mut app = logged_in();
        let effects = update(&mut app, key(KeyCode::F(2)));
        let [UiEffect::DiscoverMedia { task, .. }] = effects.as_slice() else {
            panic!("expected discovery, got {effects:?}");
        };
        let task = *task;

        logout(&mut app);
        update(
            &mut app,
            UiEvent::MediaDiscovered {
                task,
                files: vec![PathBuf::from("a.png")],
            },
        );
        assert!(app.upload.files.is_empty());

        let effects = update(
            &mut app,
            UiEvent::FeedLoaded {
                task: TaskId(99),
                result: Ok(vec![post(1, true)]),
            },
        );
        assert!(effects.is_empty());
        assert!(app.feed.posts.is_empty());
    }

    #[test]
    fn test_ctrl_c_quits_even_when_busy() {
        let mut app = app();
        app.tasks.state_mut(TaskKind::Auth).on_started(TaskId(1));
        assert_eq!(update(&mut app, ctrl('c')), vec![UiEffect::Quit]);
    }

    #[test]
    fn test_register_keeps_login_screen() {
        let mut app = app();
        app.auth.email.set("bob@example.com");
        app.auth.password.set("secret123");
        app.auth.focus = AuthFocus::SignUp;
        let effects = update(&mut app, key(KeyCode::Enter));
        let [UiEffect::Register { task, credentials }] = effects.as_slice() else {
            panic!("expected register, got {effects:?}");
        };
        assert_eq!(credentials, &Credentials::new("bob@example.com", "secret123"));

        update(
            &mut app,
            UiEvent::RegisterFinished {
                task: *task,
                result: Ok(()),
            },
        );
        assert_eq!(app.screen, Screen::Unauthenticated);
        assert!(app.session.get().is_none());
        assert_eq!(app.auth.focus, AuthFocus::Login);
    }
}
