//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to login.
///
/// Missing fields deserialize as empty strings so the handler can answer with
/// a problem document instead of a bare deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response containing an identity token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// A user's public information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /api/posts` and `PUT /api/posts/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PostRequest {
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub published: bool,
}

/// Query string of `GET /api/posts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPostsQuery {
    /// Only the literal `true` narrows the listing to published posts.
    pub published: Option<String>,
}

impl ListPostsQuery {
    pub fn published_only(&self) -> bool {
        self.published.as_deref() == Some("true")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub author_id: i32,
    pub author: Option<UserResponse>,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Confirmation payload of a deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_request_defaults() {
        let req: PostRequest = serde_json::from_str(r#"{"title":"Hi"}"#).unwrap();

        assert_eq!(req.title, "Hi");
        assert!(req.content.is_empty());
        assert!(req.excerpt.is_none());
        assert!(!req.published);
    }

    #[test]
    fn test_list_query_only_accepts_literal_true() {
        let query = |v: &str| ListPostsQuery {
            published: Some(v.to_string()),
        };

        assert!(query("true").published_only());
        assert!(!query("1").published_only());
        assert!(!ListPostsQuery::default().published_only());
    }
}
