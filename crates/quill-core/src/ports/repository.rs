use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{NewPost, NewUser, Post, PostFilter, User, Visibility};
use crate::error::RepoError;

/// Credential store. Soft-deleted users are invisible to every method.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepoError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError>;

    /// Number of active users carrying the admin flag.
    async fn count_admins(&self) -> Result<u64, RepoError>;

    /// Fails with `RepoError::Constraint` when the username is taken.
    async fn insert(&self, user: NewUser) -> Result<User, RepoError>;
}

/// Post store. Soft-deleted posts are invisible to every method.
///
/// Returned posts carry their resolved author.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Newest first.
    async fn list(&self, filter: PostFilter) -> Result<Vec<Post>, RepoError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError>;

    async fn find_by_slug(
        &self,
        slug: &str,
        visibility: Visibility,
    ) -> Result<Option<Post>, RepoError>;

    /// Fails with `RepoError::Constraint` when the slug is taken.
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Persist the editable fields of `post`, including its slug and publish state.
    async fn update(&self, post: Post) -> Result<Post, RepoError>;

    /// Tombstone a post. `RepoError::NotFound` when there is no active post with `id`.
    async fn soft_delete(&self, id: i32, at: DateTime<Utc>) -> Result<(), RepoError>;
}
