use std::sync::Arc;

use chrono::Utc;

use super::AdminCapability;
use crate::domain::{Post, PostDraft, PostFilter, Visibility};
use crate::error::{DomainError, RepoError};
use crate::ports::PostRepository;

/// Post reads for everyone, post writes for holders of an [`AdminCapability`].
pub struct PostService {
    posts: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    pub async fn list(&self, filter: PostFilter) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.list(filter).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Post", id))
    }

    /// Drafts are only visible to admins; everyone else gets `NotFound`.
    pub async fn get_by_slug(
        &self,
        slug: &str,
        requester_is_admin: bool,
    ) -> Result<Post, DomainError> {
        self.posts
            .find_by_slug(slug, Visibility::for_requester(requester_is_admin))
            .await?
            .ok_or_else(|| DomainError::not_found("Post", slug))
    }

    pub async fn create(
        &self,
        admin: &AdminCapability,
        draft: PostDraft,
    ) -> Result<Post, DomainError> {
        draft.validate()?;

        let new_post = draft.into_new_post(admin.user_id(), Utc::now());
        let slug = new_post.slug.clone();

        let post = self
            .posts
            .insert(new_post)
            .await
            .map_err(|e| slug_conflict(e, &slug))?;

        tracing::info!(post_id = post.id, slug = %post.slug, published = post.published, "Post created");
        Ok(post)
    }

    pub async fn update(
        &self,
        _admin: &AdminCapability,
        id: i32,
        draft: PostDraft,
    ) -> Result<Post, DomainError> {
        let mut post = self.get_by_id(id).await?;
        draft.validate()?;

        let was_published = post.published;
        post.apply(draft, Utc::now());
        let slug = post.slug.clone();

        let post = self.posts.update(post).await.map_err(|e| match e {
            RepoError::NotFound => DomainError::not_found("Post", id),
            other => slug_conflict(other, &slug),
        })?;

        if !was_published && post.published {
            tracing::info!(post_id = post.id, "Post published");
        }
        Ok(post)
    }

    pub async fn delete(&self, _admin: &AdminCapability, id: i32) -> Result<(), DomainError> {
        self.posts
            .soft_delete(id, Utc::now())
            .await
            .map_err(|e| match e {
                RepoError::NotFound => DomainError::not_found("Post", id),
                other => other.into(),
            })?;

        tracing::info!(post_id = id, "Post deleted");
        Ok(())
    }
}

fn slug_conflict(err: RepoError, slug: &str) -> DomainError {
    match err {
        RepoError::Constraint(_) => {
            DomainError::Conflict(format!("A post with slug '{slug}' already exists"))
        }
        other => other.into(),
    }
}
