//! Authentication handlers.

use actix_web::{HttpResponse, web};

use quill_core::domain::User;
use quill_shared::dto::{AuthResponse, LoginRequest, UserResponse};

use crate::middleware::auth::Authenticated;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

pub(crate) fn user_response(user: User) -> UserResponse {
    UserResponse {
        id: user.id,
        username: user.username,
        is_admin: user.is_admin,
        created_at: user.created_at,
        updated_at: user.updated_at,
    }
}

/// POST /api/auth/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if req.username.is_empty() || req.password.is_empty() {
        return Err(AppError::BadRequest(
            "Username and password are required".to_string(),
        ));
    }

    let issued = state.auth.login(&req.username, &req.password).await?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        token: issued.token,
        token_type: "Bearer".to_string(),
        expires_in: issued.expires_in.max(0) as u64,
    }))
}

/// GET /api/auth/me - Protected route
pub async fn me(Authenticated(identity): Authenticated) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(user_response(identity.into_user())))
}
