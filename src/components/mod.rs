//! UI Components
//!
//! Reusable Leptos components.

mod new_post_form;
mod notice_bar;
mod post_list;
mod shell;
mod status;
mod user_list;

pub use new_post_form::NewPostForm;
pub use notice_bar::NoticeBar;
pub use post_list::{PostCard, PostList};
pub use shell::{Header, Shell, Sidebar};
pub use status::{ErrorMessage, LoadingIndicator};
pub use user_list::{UserCard, UserList};
