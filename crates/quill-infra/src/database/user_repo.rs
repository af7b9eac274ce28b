//! Credential store.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};

use quill_core::domain::{NewUser, User};
use quill_core::error::RepoError;
use quill_core::ports::UserRepository;

use super::base::{SqliteRepository, query_err, write_err};
use super::entity::user::{self, Entity as UserEntity};

/// SQLite user repository.
pub type SqliteUserRepository = SqliteRepository<UserEntity>;

fn active_users() -> sea_orm::Select<UserEntity> {
    UserEntity::find().filter(user::Column::DeletedAt.is_null())
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepoError> {
        let result = active_users()
            .filter(user::Column::Id.eq(id))
            .one(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.map(Into::into))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(username, "Finding user by username");

        let result = active_users()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.map(Into::into))
    }

    async fn count_admins(&self) -> Result<u64, RepoError> {
        active_users()
            .filter(user::Column::IsAdmin.eq(true))
            .count(&self.db)
            .await
            .map_err(query_err)
    }

    async fn insert(&self, new_user: NewUser) -> Result<User, RepoError> {
        let now = Utc::now().fixed_offset();

        let model = user::ActiveModel {
            username: Set(new_user.username),
            password_hash: Set(new_user.password_hash),
            is_admin: Set(new_user.is_admin),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(write_err)?;

        Ok(model.into())
    }
}
