//! Login and registration sequences.
//!
//! Login is two calls: exchange credentials for a token, then confirm the
//! identity with `/users/me`. [`login`] runs both against a staged session
//! and reports what happened; [`apply_login`] commits the outcome to the
//! live session.

use std::fmt;

use tracing::{info, warn};

use crate::api::{ApiClient, ApiError, Failure};
use crate::config::PartialLoginPolicy;
use crate::models::User;
use crate::session::Session;

const INCOMPLETE_CREDENTIALS: &str = "Enter both email and password to proceed";

/// Email and password as typed. No trimming.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Both fields are non-empty.
    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }
}

/// Result of a login whose credentials were accepted.
#[derive(Debug, Clone)]
pub enum LoginOutcome {
    Authenticated { token: String, user: User },
    /// Token issued, but `/users/me` failed.
    UserFetchFailed { token: String, error: ApiError },
}

/// Runs the login sequence without touching the live session.
///
/// Returns `Err` when the credentials are refused (or incomplete, in which
/// case no request is made).
pub async fn login(api: &ApiClient, credentials: &Credentials) -> Result<LoginOutcome, ApiError> {
    if !credentials.is_complete() {
        return Err(ApiError::Login(Failure::Local(
            INCOMPLETE_CREDENTIALS.to_string(),
        )));
    }

    let token = api
        .login(&credentials.email, &credentials.password)
        .await
        .inspect_err(|e| warn!(failure = %e.failure(), "login rejected"))?;

    let mut staged = Session::default();
    staged.set_token(token.clone());

    match api.current_user(&staged).await {
        Ok(user) => Ok(LoginOutcome::Authenticated { token, user }),
        Err(error) => {
            warn!(failure = %error.failure(), "token issued but user lookup failed");
            Ok(LoginOutcome::UserFetchFailed { token, error })
        }
    }
}

/// Commits a login outcome to `session`.
///
/// On a failed user lookup the session never ends up authenticated: with
/// [`PartialLoginPolicy::Discard`] it is cleared, with
/// [`PartialLoginPolicy::Retain`] it keeps the token and no user.
pub fn apply_login(
    session: &mut Session,
    outcome: LoginOutcome,
    policy: PartialLoginPolicy,
) -> Result<User, ApiError> {
    match outcome {
        LoginOutcome::Authenticated { token, user } => {
            session.set(token, user.clone());
            info!("session established");
            Ok(user)
        }
        LoginOutcome::UserFetchFailed { token, error } => {
            match policy {
                PartialLoginPolicy::Discard => session.clear(),
                PartialLoginPolicy::Retain => session.set_token(token),
            }
            info!(?policy, "login incomplete");
            Err(error)
        }
    }
}

/// Creates an account. The caller stays logged out.
pub async fn register(api: &ApiClient, credentials: &Credentials) -> Result<(), ApiError> {
    if !credentials.is_complete() {
        return Err(ApiError::registration(Failure::Local(
            INCOMPLETE_CREDENTIALS.to_string(),
        )));
    }

    api.register(&credentials.email, &credentials.password)
        .await
        .inspect(|_| info!("account created"))
        .inspect_err(|e| warn!(failure = %e.failure(), "registration rejected"))
}
