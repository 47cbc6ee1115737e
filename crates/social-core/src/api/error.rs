//! Typed failures of backend calls.
//!
//! Every variant renders as the message shown to the user. The underlying
//! cause (status and body, transport error, ...) stays reachable through
//! [`ApiError::failure`] for logs and diagnostics.

use std::fmt;

use serde_json::Value;

/// Fallback registration detail when the body carries none.
pub const GENERIC_REGISTRATION_DETAIL: &str = "Registration failed";

/// Coarse error category, one per user-facing flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Auth,
    Registration,
    Feed,
    Upload,
    Delete,
}

/// What actually went wrong underneath an [`ApiError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// Backend answered with an unexpected status.
    Status { status: u16, body: String },
    /// Request never got a response (connection refused, DNS, ...).
    Transport(String),
    /// Response arrived but could not be decoded.
    Decode(String),
    /// Refused on the client before any request was made.
    Local(String),
}

impl Failure {
    pub(crate) fn transport(err: &reqwest::Error) -> Self {
        Failure::Transport(err.to_string())
    }

    pub(crate) fn decode(err: &reqwest::Error) -> Self {
        Failure::Decode(err.to_string())
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Failure::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Status { status, body } if body.is_empty() => write!(f, "HTTP {status}"),
            Failure::Status { status, body } => write!(f, "HTTP {status}: {body}"),
            Failure::Transport(msg) => write!(f, "transport error: {msg}"),
            Failure::Decode(msg) => write!(f, "invalid response: {msg}"),
            Failure::Local(msg) => f.write_str(msg),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid email or password")]
    Login(Failure),

    #[error("Failed to get user info")]
    CurrentUser(Failure),

    #[error("Registration failed: {detail}")]
    Registration { detail: String, failure: Failure },

    #[error("Failed to load feed")]
    Feed(Failure),

    #[error("Upload failed")]
    Upload(Failure),

    #[error("Failed to delete")]
    Delete(Failure),
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Login(_) | ApiError::CurrentUser(_) => ErrorKind::Auth,
            ApiError::Registration { .. } => ErrorKind::Registration,
            ApiError::Feed(_) => ErrorKind::Feed,
            ApiError::Upload(_) => ErrorKind::Upload,
            ApiError::Delete(_) => ErrorKind::Delete,
        }
    }

    pub fn failure(&self) -> &Failure {
        match self {
            ApiError::Login(f)
            | ApiError::CurrentUser(f)
            | ApiError::Feed(f)
            | ApiError::Upload(f)
            | ApiError::Delete(f) => f,
            ApiError::Registration { failure, .. } => failure,
        }
    }

    /// Builds a registration error, pulling the detail out of `failure`'s body.
    pub fn registration(failure: Failure) -> Self {
        let detail = match &failure {
            Failure::Status { body, .. } => registration_detail(body),
            Failure::Local(msg) => msg.clone(),
            _ => GENERIC_REGISTRATION_DETAIL.to_string(),
        };
        ApiError::Registration { detail, failure }
    }
}

/// Extracts a readable message from a registration error body.
///
/// Accepts `{"detail": "..."}`, `{"detail": {"reason": "..."}}`, or any other
/// JSON `detail` (rendered compactly).
pub fn registration_detail(body: &str) -> String {
    let Ok(json) = serde_json::from_str::<Value>(body) else {
        return GENERIC_REGISTRATION_DETAIL.to_string();
    };

    match json.get("detail") {
        Some(Value::String(detail)) => detail.clone(),
        Some(Value::Null) | None => GENERIC_REGISTRATION_DETAIL.to_string(),
        Some(detail) => {
            if let Some(reason) = detail.get("reason").and_then(Value::as_str) {
                reason.to_string()
            } else {
                detail.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(status: u16, body: &str) -> Failure {
        Failure::Status {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_messages_are_user_facing() {
        assert_eq!(
            ApiError::Login(status(400, "")).to_string(),
            "Invalid email or password"
        );
        assert_eq!(
            ApiError::CurrentUser(status(401, "")).to_string(),
            "Failed to get user info"
        );
        assert_eq!(ApiError::Feed(status(500, "")).to_string(), "Failed to load feed");
        assert_eq!(ApiError::Upload(status(413, "")).to_string(), "Upload failed");
        assert_eq!(ApiError::Delete(status(403, "")).to_string(), "Failed to delete");
    }

    #[test]
    fn test_kinds() {
        assert_eq!(ApiError::CurrentUser(status(401, "")).kind(), ErrorKind::Auth);
        assert_eq!(
            ApiError::registration(status(400, "")).kind(),
            ErrorKind::Registration
        );
        assert_eq!(ApiError::Delete(status(404, "")).kind(), ErrorKind::Delete);
    }

    #[test]
    fn test_registration_detail_string() {
        let err = ApiError::registration(status(400, r#"{"detail":"REGISTER_USER_ALREADY_EXISTS"}"#));
        assert_eq!(
            err.to_string(),
            "Registration failed: REGISTER_USER_ALREADY_EXISTS"
        );
        assert_eq!(err.failure().status(), Some(400));
    }

    #[test]
    fn test_registration_detail_reason_object() {
        let body = r#"{"detail":{"code":"REGISTER_INVALID_PASSWORD","reason":"Password too short"}}"#;
        assert_eq!(registration_detail(body), "Password too short");
    }

    #[test]
    fn test_registration_detail_other_json_is_compact() {
        let body = r#"{"detail": [ {"loc": ["body","email"]} ]}"#;
        assert_eq!(registration_detail(body), r#"[{"loc":["body","email"]}]"#);
    }

    #[test]
    fn test_registration_detail_falls_back() {
        assert_eq!(registration_detail(""), "Registration failed");
        assert_eq!(registration_detail("<html>oops</html>"), "Registration failed");
        assert_eq!(registration_detail(r#"{"message":"x"}"#), "Registration failed");
        assert_eq!(
            ApiError::registration(Failure::Transport("refused".into())).to_string(),
            "Registration failed: Registration failed"
        );
    }
}
