//! Domain entities - the core business objects.

mod lifecycle;
mod post;
mod slug;
mod user;

pub use lifecycle::Lifecycle;
pub use post::{NewPost, Post, PostDraft, PostFilter, Visibility, publish_stamp};
pub use slug::slugify;
pub use user::{NewUser, User};
