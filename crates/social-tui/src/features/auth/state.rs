use social_core::auth::Credentials;

use crate::common::{Notice, TextField};

/// Focusable controls on the login screen, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthFocus {
    #[default]
    Email,
    Password,
    Login,
    SignUp,
}

impl AuthFocus {
    const ORDER: [AuthFocus; 4] = [
        AuthFocus::Email,
        AuthFocus::Password,
        AuthFocus::Login,
        AuthFocus::SignUp,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Login form state. Reset on logout and after a successful login.
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub email: TextField,
    pub password: TextField,
    pub focus: AuthFocus,
    pub notice: Option<Notice>,
}

impl AuthState {
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.value(), self.password.value())
    }

    /// Login and sign-up stay inert until both fields are filled.
    pub fn can_submit(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut TextField> {
        match self.focus {
            AuthFocus::Email => Some(&mut self.email),
            AuthFocus::Password => Some(&mut self.password),
            AuthFocus::Login | AuthFocus::SignUp => None,
        }
    }
}
