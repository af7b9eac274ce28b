//! Post handlers.

use actix_web::{HttpResponse, web};

use quill_core::domain::{Post, PostDraft, PostFilter};
use quill_shared::ApiResponse;
use quill_shared::dto::{DeletedResponse, ListPostsQuery, PostRequest, PostResponse};

use super::auth::user_response;
use crate::middleware::auth::{Admin, OptionalIdentity};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn post_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        slug: post.slug,
        content: post.content,
        excerpt: post.excerpt,
        author_id: post.author_id,
        author: post.author.map(user_response),
        published: post.published,
        published_at: post.published_at,
        created_at: post.created_at,
        updated_at: post.updated_at,
    }
}

fn draft(req: PostRequest) -> PostDraft {
    PostDraft {
        title: req.title,
        content: req.content,
        excerpt: req.excerpt,
        published: req.published,
    }
}

/// GET /api/posts?published=true
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let filter = PostFilter {
        published_only: query.published_only(),
    };
    let posts = state.posts.list(filter).await?;

    Ok(HttpResponse::Ok().json(posts.into_iter().map(post_response).collect::<Vec<_>>()))
}

/// GET /api/posts/{id}
pub async fn get_post(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let post = state.posts.get_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post_response(post)))
}

/// GET /api/posts/slug/{slug}
///
/// Drafts are only visible to admins.
pub async fn get_post_by_slug(
    state: web::Data<AppState>,
    OptionalIdentity(viewer): OptionalIdentity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let is_admin = viewer.as_ref().is_some_and(|identity| identity.is_admin());
    let post = state.posts.get_by_slug(&path, is_admin).await?;

    Ok(HttpResponse::Ok().json(post_response(post)))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    Admin(admin): Admin,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let post = state.posts.create(&admin, draft(body.into_inner())).await?;
    Ok(HttpResponse::Created().json(post_response(post)))
}

/// PUT /api/posts/{id}
///
/// The body is only parsed once the post is known to exist, so an unknown id
/// is a 404 whatever was sent.
pub async fn update_post(
    state: web::Data<AppState>,
    Admin(admin): Admin,
    path: web::Path<i32>,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.posts.get_by_id(id).await?;

    let req: PostRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("Json deserialize error: {e}")))?;
    let post = state.posts.update(&admin, id, draft(req)).await?;
    Ok(HttpResponse::Ok().json(post_response(post)))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    Admin(admin): Admin,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.posts.delete(&admin, id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        DeletedResponse { id },
        "Post deleted successfully",
    )))
}
