//! Upload view: pick a media file, add a caption, share.

mod render;
mod state;
mod update;

pub use render::{UPLOAD_HINT, render_upload, upload_lines};
pub use state::{UploadFocus, UploadState};
pub use update::{
    POSTED_MESSAGE, UploadAction, handle_key, handle_media_discovered, handle_paste,
    handle_upload_failed,
};
