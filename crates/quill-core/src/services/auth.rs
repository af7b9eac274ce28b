//! Login, token verification and the admin capability check.

use std::sync::Arc;

use crate::domain::{NewUser, User};
use crate::error::{DomainError, RepoError};
use crate::ports::{PasswordService, TokenService, UserRepository};

/// An authenticated requester: a valid token that maps to an existing user.
#[derive(Debug, Clone)]
pub struct Identity {
    user: User,
}

impl Identity {
    pub(crate) fn new(user: User) -> Self {
        Self { user }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn user_id(&self) -> i32 {
        self.user.id
    }

    pub fn is_admin(&self) -> bool {
        self.user.is_admin
    }

    pub fn into_user(self) -> User {
        self.user
    }
}

/// Proof that the requester passed the admin check.
///
/// Only [`AuthService::authorize_admin`] hands these out, and every mutating
/// post operation demands one.
#[derive(Debug, Clone)]
pub struct AdminCapability {
    user_id: i32,
}

impl AdminCapability {
    pub fn user_id(&self) -> i32 {
        self.user_id
    }
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_in: i64,
    pub user: User,
}

pub struct AuthService {
    users: Arc<dyn UserRepository>,
    passwords: Arc<dyn PasswordService>,
    tokens: Arc<dyn TokenService>,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        passwords: Arc<dyn PasswordService>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            users,
            passwords,
            tokens,
        }
    }

    /// Exchange a username and password for an identity token.
    ///
    /// An unknown user and a wrong password fail with the same error, and
    /// both pay for one password hash so response time does not tell them
    /// apart either.
    pub async fn login(&self, username: &str, password: &str) -> Result<IssuedToken, DomainError> {
        let Some(user) = self.users.find_by_username(username).await? else {
            // Result discarded; only the cost matters here.
            let _ = self.passwords.hash(password);
            tracing::debug!("Login rejected: unknown user");
            return Err(DomainError::InvalidCredentials);
        };

        if !self.passwords.verify(password, &user.password_hash)? {
            tracing::debug!(user_id = user.id, "Login rejected: wrong password");
            return Err(DomainError::InvalidCredentials);
        }

        let token = self
            .tokens
            .generate_token(user.id, &user.username, user.roles())
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        tracing::info!(user_id = user.id, "User logged in");

        Ok(IssuedToken {
            token,
            expires_in: self.tokens.expiration_seconds(),
            user,
        })
    }

    /// Resolve a bearer token to the user it was issued for.
    pub async fn authenticate(&self, token: &str) -> Result<Identity, DomainError> {
        let claims = self.tokens.validate_token(token)?;

        let user = self
            .users
            .find_by_id(claims.user_id)
            .await?
            .ok_or_else(|| DomainError::Unauthorized("User no longer exists".to_string()))?;

        Ok(Identity::new(user))
    }

    /// The stored admin flag decides, not the roles baked into the token.
    pub fn authorize_admin(identity: &Identity) -> Result<AdminCapability, DomainError> {
        if identity.is_admin() {
            Ok(AdminCapability {
                user_id: identity.user_id(),
            })
        } else {
            Err(DomainError::Forbidden)
        }
    }

    /// Create the bootstrap admin unless an active admin already exists.
    ///
    /// Returns the created user, or `None` when nothing had to be done.
    pub async fn ensure_admin(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError> {
        if self.users.count_admins().await? > 0 {
            return Ok(None);
        }

        let password_hash = self.passwords.hash(password)?;
        let admin = self
            .users
            .insert(NewUser {
                username: username.to_string(),
                password_hash,
                is_admin: true,
            })
            .await
            .map_err(|e| match e {
                RepoError::Constraint(_) => DomainError::Conflict(format!(
                    "cannot create admin '{username}': username is taken by a non-admin user"
                )),
                other => other.into(),
            })?;

        tracing::info!(user_id = admin.id, username = %admin.username, "Bootstrap admin created");
        Ok(Some(admin))
    }
}
