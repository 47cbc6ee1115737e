//! UI event types.
//!
//! Everything the reducer reacts to arrives as a `UiEvent`: terminal input,
//! the periodic tick, and the results of requests spawned by the runtime.
//! Results carry the `TaskId` they were started with so the reducer can drop
//! anything that is no longer current (for example after logout).

use std::path::PathBuf;

use crossterm::event::Event as CrosstermEvent;
use social_core::api::ApiError;
use social_core::auth::LoginOutcome;
use social_core::models::Post;

use crate::common::TaskId;

#[derive(Debug)]
pub enum UiEvent {
    /// Animation / render cadence.
    Tick,

    /// Raw terminal input.
    Terminal(CrosstermEvent),

    /// Login sequence finished (credentials refused, or token plus user lookup).
    LoginFinished {
        task: TaskId,
        result: Result<LoginOutcome, ApiError>,
    },

    RegisterFinished {
        task: TaskId,
        result: Result<(), ApiError>,
    },

    FeedLoaded {
        task: TaskId,
        result: Result<Vec<Post>, ApiError>,
    },

    PostDeleted {
        task: TaskId,
        result: Result<(), ApiError>,
    },

    PostUploaded {
        task: TaskId,
        result: Result<(), ApiError>,
    },

    /// Upload picker candidates, relative to the media root.
    MediaDiscovered { task: TaskId, files: Vec<PathBuf> },
}
