//! In-memory port implementations for service tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Lifecycle, NewPost, NewUser, Post, PostFilter, User, Visibility};
use crate::error::RepoError;
use crate::ports::{
    AuthError, PasswordService, PostRepository, TokenClaims, TokenService, UserRepository,
};

/// Stores passwords as `hashed:<plain>`.
pub struct FakePasswordService;

impl PasswordService for FakePasswordService {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        Ok(format!("hashed:{password}"))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        Ok(hash.strip_prefix("hashed:") == Some(password))
    }
}

/// [`FakePasswordService`] that counts every hash and verify it performs.
#[derive(Default)]
pub struct CountingPasswordService {
    operations: AtomicUsize,
}

impl CountingPasswordService {
    pub fn operations(&self) -> usize {
        self.operations.load(Ordering::SeqCst)
    }
}

impl PasswordService for CountingPasswordService {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        self.operations.fetch_add(1, Ordering::SeqCst);
        FakePasswordService.hash(password)
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        self.operations.fetch_add(1, Ordering::SeqCst);
        FakePasswordService.verify(password, hash)
    }
}

/// Issues `token:<user_id>:<username>`.
pub struct FakeTokenService;

impl TokenService for FakeTokenService {
    fn generate_token(
        &self,
        user_id: i32,
        username: &str,
        roles: Vec<String>,
    ) -> Result<String, AuthError> {
        Ok(format!("token:{user_id}:{username}:{}", roles.join(",")))
    }

    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let mut parts = token.splitn(4, ':');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some("token"), Some(id), Some(username), Some(roles)) => Ok(TokenClaims {
                user_id: id
                    .parse()
                    .map_err(|_| AuthError::InvalidToken("bad subject".to_string()))?,
                username: username.to_string(),
                roles: roles.split(',').map(str::to_string).collect(),
                exp: i64::MAX,
            }),
            _ => Err(AuthError::InvalidToken("malformed token".to_string())),
        }
    }

    fn expiration_seconds(&self) -> i64 {
        3600
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn tombstone(&self, id: i32) {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|u| u.id == id) {
            user.lifecycle = Lifecycle::Deleted(Utc::now());
        }
    }

    fn active(&self) -> Vec<User> {
        let users = self.users.lock().unwrap();
        users
            .iter()
            .filter(|u| u.lifecycle.is_active())
            .cloned()
            .collect()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepoError> {
        Ok(self.active().into_iter().find(|u| u.id == id))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        Ok(self.active().into_iter().find(|u| u.username == username))
    }

    async fn count_admins(&self) -> Result<u64, RepoError> {
        Ok(self.active().iter().filter(|u| u.is_admin).count() as u64)
    }

    async fn insert(&self, user: NewUser) -> Result<User, RepoError> {
        if self.active().iter().any(|u| u.username == user.username) {
            return Err(RepoError::Constraint("username already exists".to_string()));
        }

        let mut users = self.users.lock().unwrap();
        let now = Utc::now();
        let stored = User {
            id: users.len() as i32 + 1,
            username: user.username,
            password_hash: user.password_hash,
            is_admin: user.is_admin,
            created_at: now,
            updated_at: now,
            lifecycle: Lifecycle::Active,
        };
        users.push(stored.clone());
        Ok(stored)
    }
}

#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: Mutex<Vec<Post>>,
}

impl InMemoryPostRepository {
    /// Every stored row, tombstoned ones included.
    pub fn all_rows(&self) -> Vec<Post> {
        self.posts.lock().unwrap().clone()
    }

    fn active(&self) -> Vec<Post> {
        self.all_rows()
            .into_iter()
            .filter(|p| p.lifecycle.is_active())
            .collect()
    }

    fn slug_taken(&self, slug: &str, except: Option<i32>) -> bool {
        self.active()
            .iter()
            .any(|p| p.slug == slug && Some(p.id) != except)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self, filter: PostFilter) -> Result<Vec<Post>, RepoError> {
        let mut posts: Vec<Post> = self
            .active()
            .into_iter()
            .filter(|p| !filter.published_only || p.published)
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(posts)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        Ok(self.active().into_iter().find(|p| p.id == id))
    }

    async fn find_by_slug(
        &self,
        slug: &str,
        visibility: Visibility,
    ) -> Result<Option<Post>, RepoError> {
        Ok(self
            .active()
            .into_iter()
            .find(|p| p.slug == slug && visibility.allows(p)))
    }

    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        if self.slug_taken(&post.slug, None) {
            return Err(RepoError::Constraint("slug already exists".to_string()));
        }

        let mut posts = self.posts.lock().unwrap();
        let stored = Post {
            id: posts.len() as i32 + 1,
            title: post.title,
            slug: post.slug,
            content: post.content,
            excerpt: post.excerpt,
            author_id: post.author_id,
            author: None,
            published: post.published,
            published_at: post.published_at,
            created_at: post.created_at,
            updated_at: post.created_at,
            lifecycle: Lifecycle::Active,
        };
        posts.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        if self.slug_taken(&post.slug, Some(post.id)) {
            return Err(RepoError::Constraint("slug already exists".to_string()));
        }

        let mut posts = self.posts.lock().unwrap();
        let slot = posts
            .iter_mut()
            .find(|p| p.id == post.id && p.lifecycle.is_active())
            .ok_or(RepoError::NotFound)?;
        *slot = post.clone();
        Ok(post)
    }

    async fn soft_delete(&self, id: i32, at: DateTime<Utc>) -> Result<(), RepoError> {
        let mut posts = self.posts.lock().unwrap();
        let slot = posts
            .iter_mut()
            .find(|p| p.id == id && p.lifecycle.is_active())
            .ok_or(RepoError::NotFound)?;
        slot.lifecycle = Lifecycle::Deleted(at);
        Ok(())
    }
}
