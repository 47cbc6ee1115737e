//! In-memory credential store.
//!
//! A `Session` lives for one running client and is never persisted. A user
//! is only ever held alongside a token; a token may briefly exist without a
//! user between login and the `/users/me` call.

use crate::models::User;

#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Option<String>,
    user: Option<User>,
}

/// Borrowed view of a populated session.
#[derive(Debug, Clone, Copy)]
pub struct Credentials<'a> {
    pub token: &'a str,
    pub user: Option<&'a User>,
}

impl Session {
    /// Populates the session in one step.
    pub fn set(&mut self, token: String, user: User) {
        self.token = Some(token);
        self.user = Some(user);
    }

    /// Stores a freshly issued token. Any previously confirmed user is
    /// dropped, since it belonged to the old token.
    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
        self.user = None;
    }

    /// Confirms the user for the current token.
    ///
    /// Returns `false` (and stores nothing) when there is no token.
    pub fn set_user(&mut self, user: User) -> bool {
        if self.token.is_none() {
            return false;
        }
        self.user = Some(user);
        true
    }

    /// Tears the session down entirely.
    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
    }

    pub fn get(&self) -> Option<Credentials<'_>> {
        self.token.as_deref().map(|token| Credentials {
            token,
            user: self.user.as_ref(),
        })
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// True once a user has been confirmed for the token.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
