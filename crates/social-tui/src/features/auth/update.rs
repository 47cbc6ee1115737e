//! Auth feature reducer.
//!
//! Key handling for the login form plus result processing for sign-up and
//! failed logins. Successful logins touch the session and navigation, so the
//! top-level reducer handles them.

use crossterm::event::{KeyCode, KeyEvent};
use social_core::api::ApiError;
use social_core::auth::Credentials;

use super::state::{AuthFocus, AuthState};
use crate::common::Notice;

pub const REGISTERED_MESSAGE: &str = "Account created. You can log in now.";

/// What the form asks the reducer to do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthAction {
    None,
    Login(Credentials),
    Register(Credentials),
}

pub fn handle_key(auth: &mut AuthState, key: KeyEvent) -> AuthAction {
    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            auth.focus = auth.focus.next();
            AuthAction::None
        }
        KeyCode::BackTab | KeyCode::Up => {
            auth.focus = auth.focus.prev();
            AuthAction::None
        }
        KeyCode::Enter => submit(auth),
        _ => {
            if let Some(field) = auth.focused_field_mut() {
                field.input(key);
            }
            AuthAction::None
        }
    }
}

pub fn handle_paste(auth: &mut AuthState, text: &str) {
    if let Some(field) = auth.focused_field_mut() {
        field.insert_str(text);
    }
}

fn submit(auth: &mut AuthState) -> AuthAction {
    if auth.focus == AuthFocus::Email {
        auth.focus = AuthFocus::Password;
        return AuthAction::None;
    }
    if !auth.can_submit() {
        return AuthAction::None;
    }

    auth.notice = None;
    match auth.focus {
        AuthFocus::SignUp => AuthAction::Register(auth.credentials()),
        _ => AuthAction::Login(auth.credentials()),
    }
}

pub fn handle_register_result(auth: &mut AuthState, result: Result<(), ApiError>) {
    auth.notice = Some(match result {
        Ok(()) => {
            auth.focus = AuthFocus::Login;
            Notice::success(REGISTERED_MESSAGE)
        }
        Err(e) => Notice::error(e.to_string()),
    });
}

pub fn handle_login_failure(auth: &mut AuthState, error: &ApiError) {
    auth.notice = Some(Notice::error(error.to_string()));
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use social_core::api::Failure;

    use super::*;

    fn press(auth: &mut AuthState, code: KeyCode) -> AuthAction {
        handle_key(auth, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str(auth: &mut AuthState, text: &str) {
        for ch in text.chars() {
            press(auth, KeyCode::Char(ch));
        }
    }

    #[test]
    fn test_enter_on_email_moves_to_password() {
        let mut auth = AuthState::default();
        type_str(&mut auth, "bob@example.com");
        assert_eq!(press(&mut auth, KeyCode::Enter), AuthAction::None);
        assert_eq!(auth.focus, AuthFocus::Password);

        type_str(&mut auth, "secret123");
        assert_eq!(
            press(&mut auth, KeyCode::Enter),
            AuthAction::Login(Credentials::new("bob@example.com", "secret123"))
        );
    }

    #[test]
    fn test_incomplete_form_is_inert() {
        let mut auth = AuthState::default();
        type_str(&mut auth, "bob@example.com");

        for focus in [AuthFocus::Password, AuthFocus::Login, AuthFocus::SignUp] {
            auth.focus = focus;
            assert_eq!(press(&mut auth, KeyCode::Enter), AuthAction::None);
        }

        auth.email.clear();
        auth.password.set("secret123");
        auth.focus = AuthFocus::Login;
        assert_eq!(press(&mut auth, KeyCode::Enter), AuthAction::None);
    }

    #[test]
    fn test_sign_up_button_registers() {
        let mut auth = AuthState::default();
        auth.email.set("bob@example.com");
        auth.password.set("secret123");
        auth.notice = Some(Notice::error("old"));
        auth.focus = AuthFocus::SignUp;

        assert_eq!(
            press(&mut auth, KeyCode::Enter),
            AuthAction::Register(Credentials::new("bob@example.com", "secret123"))
        );
        assert!(auth.notice.is_none());
    }

    #[test]
    fn test_focus_wraps_both_ways() {
        let mut auth = AuthState::default();
        press(&mut auth, KeyCode::BackTab);
        assert_eq!(auth.focus, AuthFocus::SignUp);
        press(&mut auth, KeyCode::Tab);
        assert_eq!(auth.focus, AuthFocus::Email);
    }

    #[test]
    fn test_buttons_ignore_typing() {
        let mut auth = AuthState {
            focus: AuthFocus::Login,
            ..AuthState::default()
        };
        type_str(&mut auth, "abc");
        assert!(auth.email.is_empty());
        assert!(auth.password.is_empty());
    }

    #[test]
    fn test_register_results() {
        let mut auth = AuthState::default();
        handle_register_result(&mut auth, Ok(()));
        assert_eq!(auth.notice, Some(Notice::success(REGISTERED_MESSAGE)));

        handle_register_result(
            &mut auth,
            Err(ApiError::registration(Failure::Status {
                status: 400,
                body: r#"{"detail":"REGISTER_USER_ALREADY_EXISTS"}"#.to_string(),
            })),
        );
        assert_eq!(
            auth.notice,
            Some(Notice::error(
                "Registration failed: REGISTER_USER_ALREADY_EXISTS"
            ))
        );
    }
}
