//! Post store. Every query goes through [`active_posts`], so tombstoned rows
//! never leave this module.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Select, Set,
};

use quill_core::domain::{NewPost, Post, PostFilter, Visibility};
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

use super::base::{SqliteRepository, query_err, write_err};
use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity};

/// SQLite post repository.
pub type SqlitePostRepository = SqliteRepository<PostEntity>;

fn active_posts() -> Select<PostEntity> {
    PostEntity::find().filter(post::Column::DeletedAt.is_null())
}

fn with_author((model, author): (post::Model, Option<user::Model>)) -> Post {
    let mut post = Post::from(model);
    post.author = author.map(Into::into);
    post
}

#[async_trait]
impl PostRepository for SqlitePostRepository {
    async fn list(&self, filter: PostFilter) -> Result<Vec<Post>, RepoError> {
        let mut query = active_posts();
        if filter.published_only {
            query = query.filter(post::Column::Published.eq(true));
        }

        let rows = query
            .find_also_related(UserEntity)
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(rows.into_iter().map(with_author).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        let row = active_posts()
            .filter(post::Column::Id.eq(id))
            .find_also_related(UserEntity)
            .one(&self.db)
            .await
            .map_err(query_err)?;

        Ok(row.map(with_author))
    }

    async fn find_by_slug(
        &self,
        slug: &str,
        visibility: Visibility,
    ) -> Result<Option<Post>, RepoError> {
        let mut query = active_posts().filter(post::Column::Slug.eq(slug));
        if visibility == Visibility::PublishedOnly {
            query = query.filter(post::Column::Published.eq(true));
        }

        let row = query
            .find_also_related(UserEntity)
            .one(&self.db)
            .await
            .map_err(query_err)?;

        Ok(row.map(with_author))
    }

    async fn insert(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let created_at = new_post.created_at.fixed_offset();

        let model = post::ActiveModel {
            title: Set(new_post.title),
            slug: Set(new_post.slug),
            content: Set(new_post.content),
            excerpt: Set(new_post.excerpt),
            author_id: Set(new_post.author_id),
            published: Set(new_post.published),
            published_at: Set(new_post.published_at.map(|at| at.fixed_offset())),
            created_at: Set(created_at),
            updated_at: Set(created_at),
            deleted_at: Set(None),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(write_err)?;

        self.find_by_id(model.id).await?.ok_or(RepoError::NotFound)
    }

    async fn update(&self, edited: Post) -> Result<Post, RepoError> {
        let existing = active_posts()
            .filter(post::Column::Id.eq(edited.id))
            .one(&self.db)
            .await
            .map_err(query_err)?
            .ok_or(RepoError::NotFound)?;

        let mut model: post::ActiveModel = existing.into();
        model.title = Set(edited.title);
        model.slug = Set(edited.slug);
        model.content = Set(edited.content);
        model.excerpt = Set(edited.excerpt);
        model.published = Set(edited.published);
        model.published_at = Set(edited.published_at.map(|at| at.fixed_offset()));
        model.updated_at = Set(edited.updated_at.fixed_offset());
        model.update(&self.db).await.map_err(write_err)?;

        self.find_by_id(edited.id).await?.ok_or(RepoError::NotFound)
    }

    async fn soft_delete(&self, id: i32, at: DateTime<Utc>) -> Result<(), RepoError> {
        let at = at.fixed_offset();

        let result = PostEntity::update_many()
            .col_expr(post::Column::DeletedAt, Expr::value(at))
            .col_expr(post::Column::UpdatedAt, Expr::value(at))
            .filter(post::Column::Id.eq(id))
            .filter(post::Column::DeletedAt.is_null())
            .exec(&self.db)
            .await
            .map_err(query_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
