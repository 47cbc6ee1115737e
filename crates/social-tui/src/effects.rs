//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! The reducer never performs I/O itself; every network call and file read
//! happens in the runtime's handlers.

use std::path::PathBuf;

use social_core::auth::Credentials;
use social_core::models::PostId;

use crate::common::TaskId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Exchange credentials for a token, then fetch the current user.
    Login {
        task: TaskId,
        credentials: Credentials,
    },

    /// Create an account (no login).
    Register {
        task: TaskId,
        credentials: Credentials,
    },

    /// Fetch the full feed.
    LoadFeed { task: TaskId },

    DeletePost { task: TaskId, id: PostId },

    /// Read `path` and submit it with the caption.
    UploadPost {
        task: TaskId,
        path: PathBuf,
        caption: Option<String>,
    },

    /// Scan the media root for uploadable files.
    DiscoverMedia { task: TaskId, root: PathBuf },

    /// Open a media URL with the system handler.
    OpenUrl { url: String },
}
