use chrono::{DateTime, Utc};

use super::{Lifecycle, User, slugify};
use crate::error::DomainError;

/// Post entity - a blog post, either a draft or published.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub author_id: i32,
    /// Resolved author, when the repository loaded it.
    pub author: Option<User>,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub lifecycle: Lifecycle,
}

impl Post {
    /// Apply an edit. Author and id never change; the slug follows the title.
    pub fn apply(&mut self, draft: PostDraft, now: DateTime<Utc>) {
        self.published_at = publish_stamp(self.published, draft.published, self.published_at, now);
        self.slug = slugify(&draft.title);
        self.title = draft.title;
        self.content = draft.content;
        self.excerpt = draft.excerpt;
        self.published = draft.published;
        self.updated_at = now;
    }
}

/// Publish timestamp after a change of the published flag.
///
/// Only a draft → published flip stamps `now`; every other transition keeps
/// the current value, so unpublishing never clears it.
pub fn publish_stamp(
    was_published: bool,
    published: bool,
    current: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    if !was_published && published {
        Some(now)
    } else {
        current
    }
}

/// The editable fields of a post, as submitted by an admin.
#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub published: bool,
}

impl PostDraft {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::Validation("title is required".to_string()));
        }
        if self.content.trim().is_empty() {
            return Err(DomainError::Validation("content is required".to_string()));
        }
        Ok(())
    }

    /// Turn a validated draft into an insertable post owned by `author_id`.
    pub fn into_new_post(self, author_id: i32, now: DateTime<Utc>) -> NewPost {
        NewPost {
            slug: slugify(&self.title),
            published_at: publish_stamp(false, self.published, None, now),
            title: self.title,
            content: self.content,
            excerpt: self.excerpt,
            author_id,
            published: self.published,
            created_at: now,
        }
    }
}

/// A post that has not been persisted yet.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub author_id: i32,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Listing filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostFilter {
    pub published_only: bool,
}

/// Which posts a requester may see when looking one up by slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    PublishedOnly,
    All,
}

impl Visibility {
    pub fn for_requester(is_admin: bool) -> Self {
        if is_admin {
            Visibility::All
        } else {
            Visibility::PublishedOnly
        }
    }

    pub fn allows(&self, post: &Post) -> bool {
        match self {
            Visibility::All => true,
            Visibility::PublishedOnly => post.published,
        }
    }
}
