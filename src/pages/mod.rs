//! Routed Pages

mod new_post;
mod not_found;
mod post;
mod posts;
mod users;

pub use new_post::NewPostPage;
pub use not_found::NotFoundPage;
pub use post::PostPage;
pub use posts::PostsPage;
pub use users::UsersPage;
