//! Authentication extractors.
//!
//! Tokens are checked against the user store on every request, so a token
//! whose user has since been removed stops working immediately.

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use futures::future::LocalBoxFuture;

use quill_core::services::{AdminCapability, AuthService, Identity};

use crate::middleware::error::AppError;
use crate::state::AppState;

/// Requires a valid bearer token for an existing user.
pub struct Authenticated(pub Identity);

/// Requires an authenticated admin.
pub struct Admin(pub AdminCapability);

/// Resolves the requester when a valid token is present, without failing.
pub struct OptionalIdentity(pub Option<Identity>);

fn bearer_token(req: &HttpRequest) -> Result<Option<String>, AppError> {
    let Some(value) = req.headers().get(header::AUTHORIZATION) else {
        return Ok(None);
    };

    let value = value
        .to_str()
        .map_err(|_| AppError::Unauthorized("Invalid authorization header".to_string()))?;

    value
        .strip_prefix("Bearer ")
        .map(|token| Some(token.trim().to_string()))
        .ok_or_else(|| AppError::Unauthorized("Expected Bearer token".to_string()))
}

fn app_state(req: &HttpRequest) -> Result<web::Data<AppState>, AppError> {
    req.app_data::<web::Data<AppState>>().cloned().ok_or_else(|| {
        AppError::Internal("AppState not registered with the application".to_string())
    })
}

async fn resolve(state: web::Data<AppState>, token: String) -> Result<Identity, AppError> {
    let identity = state.auth.authenticate(&token).await?;
    tracing::Span::current().record("user_id", identity.user_id());
    Ok(identity)
}

impl FromRequest for Authenticated {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let prepared = app_state(req).and_then(|state| Ok((state, bearer_token(req)?)));

        Box::pin(async move {
            let (state, token) = prepared?;
            let token = token.ok_or_else(|| {
                AppError::Unauthorized(
                    "Please provide a valid Bearer token in the Authorization header.".to_string(),
                )
            })?;
            resolve(state, token).await.map(Authenticated)
        })
    }
}

impl FromRequest for Admin {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let authenticated = Authenticated::from_request(req, payload);

        Box::pin(async move {
            let Authenticated(identity) = authenticated.await?;
            let capability = AuthService::authorize_admin(&identity).inspect_err(|_| {
                tracing::warn!(user_id = identity.user_id(), "Admin route denied");
            })?;
            Ok(Admin(capability))
        })
    }
}

impl FromRequest for OptionalIdentity {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = app_state(req);
        let token = bearer_token(req).ok().flatten();

        Box::pin(async move {
            let state = state?;
            let identity = match token {
                Some(token) => match resolve(state, token).await {
                    Ok(identity) => Some(identity),
                    // A bad token reads as anonymous; a failing store does not.
                    Err(AppError::Unauthorized(_)) => None,
                    Err(e) => return Err(e),
                },
                None => None,
            };
            Ok(OptionalIdentity(identity))
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::test::TestRequest;
    use quill_core::ports::TokenService;
    use quill_infra::database::connect;
    use quill_infra::{Argon2PasswordService, DatabaseConfig, JwtConfig, JwtTokenService};

    use super::*;

    fn jwt() -> JwtConfig {
        JwtConfig {
            secret: "extractor-test-secret".to_string(),
            ..JwtConfig::default()
        }
    }

    /// State over a database without tables, so every user lookup fails.
    async fn broken_store() -> AppState {
        let db = connect(&DatabaseConfig::in_memory()).await.unwrap();
        let passwords = Arc::new(Argon2PasswordService::with_params(1024, 1, 1).unwrap());
        AppState::new(db, jwt(), passwords)
    }

    async fn optional_identity(
        state: AppState,
        authorization: &str,
    ) -> Result<OptionalIdentity, AppError> {
        let req = TestRequest::default()
            .app_data(web::Data::new(state))
            .insert_header((header::AUTHORIZATION, authorization))
            .to_http_request();
        OptionalIdentity::from_request(&req, &mut Payload::None).await
    }

    #[actix_web::test]
    async fn test_optional_identity_treats_bad_token_as_anonymous() {
        let result = optional_identity(broken_store().await, "Bearer garbage").await;

        assert!(matches!(result, Ok(OptionalIdentity(None))));
    }

    #[actix_web::test]
    async fn test_optional_identity_propagates_storage_failure() {
        let token = JwtTokenService::new(jwt())
            .generate_token(1, "admin", vec!["admin".to_string()])
            .unwrap();

        let result = optional_identity(broken_store().await, &format!("Bearer {token}")).await;

        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
