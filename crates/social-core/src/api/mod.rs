//! HTTP client for the Simple Social backend.
//!
//! Every call takes the current [`Session`] explicitly and attaches
//! `Authorization: Bearer <token>` only when a token is present. Nothing is
//! retried; failures come back as a typed [`ApiError`].

mod error;

use anyhow::Result;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use tracing::{debug, warn};

pub use self::error::{ApiError, ErrorKind, Failure, GENERIC_REGISTRATION_DETAIL, registration_detail};
use crate::config::Config;
use crate::media::UploadRequest;
use crate::models::{FeedResponse, Post, PostId, TokenResponse, User};
use crate::session::Session;

const LOGIN_PATH: &str = "/auth/jwt/login";
const REGISTER_PATH: &str = "/auth/register";
const CURRENT_USER_PATH: &str = "/users/me";
const FEED_PATH: &str = "/feed";
const UPLOAD_PATH: &str = "/upload";

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct RegisterBody<'a> {
    email: &'a str,
    password: &'a str,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Builds a client for the base URL resolved from env and config.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.api_base_url()?))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str, session: Option<&Session>) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match session.and_then(Session::token) {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Exchanges credentials for an access token.
    ///
    /// The backend expects the form field `username` to carry the email.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let response = self
            .request(Method::POST, LOGIN_PATH, None)
            .form(&[("username", email), ("password", password)])
            .send()
            .await;
        let response = expect_status(LOGIN_PATH, response, StatusCode::OK)
            .await
            .map_err(ApiError::Login)?;

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Login(Failure::decode(&e)))?;
        Ok(token.access_token)
    }

    /// Creates an account. Does not log in.
    pub async fn register(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let response = self
            .request(Method::POST, REGISTER_PATH, None)
            .json(&RegisterBody { email, password })
            .send()
            .await;
        expect_status(REGISTER_PATH, response, StatusCode::CREATED)
            .await
            .map_err(ApiError::registration)?;
        Ok(())
    }

    /// Fetches the user the session's token belongs to.
    pub async fn current_user(&self, session: &Session) -> Result<User, ApiError> {
        let response = self
            .request(Method::GET, CURRENT_USER_PATH, Some(session))
            .send()
            .await;
        let response = expect_status(CURRENT_USER_PATH, response, StatusCode::OK)
            .await
            .map_err(ApiError::CurrentUser)?;

        response
            .json()
            .await
            .map_err(|e| ApiError::CurrentUser(Failure::decode(&e)))
    }

    /// Fetches the whole feed in backend order.
    pub async fn feed(&self, session: &Session) -> Result<Vec<Post>, ApiError> {
        let response = self
            .request(Method::GET, FEED_PATH, Some(session))
            .send()
            .await;
        let response = expect_status(FEED_PATH, response, StatusCode::OK)
            .await
            .map_err(ApiError::Feed)?;

        let feed: FeedResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Feed(Failure::decode(&e)))?;
        Ok(feed.posts)
    }

    /// Publishes a post as a multipart `file` + `caption` submission.
    pub async fn upload_post(
        &self,
        session: &Session,
        request: UploadRequest,
    ) -> Result<(), ApiError> {
        let UploadRequest { file, caption } = request;
        let part = reqwest::multipart::Part::bytes(file.bytes)
            .file_name(file.name)
            .mime_str(file.kind.mime_type())
            .map_err(|e| ApiError::Upload(Failure::Local(e.to_string())))?;
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("caption", caption.unwrap_or_default());

        let response = self
            .request(Method::POST, UPLOAD_PATH, Some(session))
            .multipart(form)
            .send()
            .await;
        expect_status(UPLOAD_PATH, response, StatusCode::OK)
            .await
            .map_err(ApiError::Upload)?;
        Ok(())
    }

    pub async fn delete_post(&self, session: &Session, id: &PostId) -> Result<(), ApiError> {
        let path = format!("/posts/{id}");
        let response = self
            .request(Method::DELETE, &path, Some(session))
            .send()
            .await;
        expect_status(&path, response, StatusCode::OK)
            .await
            .map_err(ApiError::Delete)?;
        Ok(())
    }
}

/// Accepts exactly `expected`; anything else becomes a [`Failure`].
async fn expect_status(
    path: &str,
    response: reqwest::Result<Response>,
    expected: StatusCode,
) -> Result<Response, Failure> {
    let response = response.map_err(|e| {
        warn!(path, error = %e, "request failed");
        Failure::transport(&e)
    })?;

    let status = response.status();
    debug!(path, status = status.as_u16(), "response");
    if status == expected {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    warn!(path, status = status.as_u16(), "unexpected status");
    Err(Failure::Status {
        status: status.as_u16(),
        body,
    })
}
