//! Feed view: the post list with owner-only delete.

mod render;
mod state;
mod update;

pub use render::{EMPTY_FEED_MESSAGE, feed_lines, post_lines, render_feed};
pub use state::{FeedState, PostCard};
pub use update::{
    DELETED_MESSAGE, FeedAction, handle_feed_loaded, handle_key, handle_post_deleted,
};
