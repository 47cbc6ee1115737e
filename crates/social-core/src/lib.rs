//! Core library for the Simple Social client (config, session, API client, auth flow).

pub mod api;
pub mod auth;
pub mod config;
pub mod dates;
pub mod logging;
pub mod media;
pub mod models;
pub mod session;
