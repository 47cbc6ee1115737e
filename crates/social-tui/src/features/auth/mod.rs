//! Login / sign-up screen.

mod render;
mod state;
mod update;

pub use render::{LOGIN_HINT, login_lines, render_login};
pub use state::{AuthFocus, AuthState};
pub use update::{
    AuthAction, REGISTERED_MESSAGE, handle_key, handle_login_failure, handle_paste,
    handle_register_result,
};
