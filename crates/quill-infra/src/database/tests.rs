use chrono::{TimeDelta, Utc};
use migration::{Migrator, MigratorTrait};
use sea_orm::DbConn;

use quill_core::domain::{NewPost, NewUser, PostFilter, User, Visibility};
use quill_core::error::RepoError;
use quill_core::ports::{PostRepository, UserRepository};

use super::{DatabaseConfig, SqlitePostRepository, SqliteUserRepository, connect};

async fn migrated_db() -> DbConn {
    let db = connect(&DatabaseConfig::in_memory()).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

async fn seed_admin(db: &DbConn) -> User {
    SqliteUserRepository::new(db.clone())
        .insert(NewUser {
            username: "admin".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            is_admin: true,
        })
        .await
        .unwrap()
}

fn new_post(slug: &str, author_id: i32, published: bool) -> NewPost {
    let now = Utc::now();
    NewPost {
        title: slug.replace('-', " "),
        slug: slug.to_string(),
        content: "Content".to_string(),
        excerpt: None,
        author_id,
        published,
        published_at: published.then_some(now),
        created_at: now,
    }
}

#[tokio::test]
async fn test_user_insert_and_lookup() {
    let db = migrated_db().await;
    let users = SqliteUserRepository::new(db.clone());

    let admin = seed_admin(&db).await;

    let by_name = users.find_by_username("admin").await.unwrap().unwrap();
    let by_id = users.find_by_id(admin.id).await.unwrap().unwrap();
    assert_eq!(by_name.id, admin.id);
    assert_eq!(by_id.username, "admin");
    assert!(by_id.lifecycle.is_active());
    assert_eq!(users.count_admins().await.unwrap(), 1);
    assert!(users.find_by_username("nobody").await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_username_is_constraint_violation() {
    let db = migrated_db().await;
    seed_admin(&db).await;

    let err = SqliteUserRepository::new(db)
        .insert(NewUser {
            username: "admin".to_string(),
            password_hash: "x".to_string(),
            is_admin: false,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, RepoError::Constraint(_)));
}

#[tokio::test]
async fn test_post_insert_resolves_author() {
    let db = migrated_db().await;
    let admin = seed_admin(&db).await;
    let posts = SqlitePostRepository::new(db);

    let post = posts
        .insert(new_post("merhaba-dunya", admin.id, false))
        .await
        .unwrap();

    assert_eq!(post.slug, "merhaba-dunya");
    assert_eq!(post.author.as_ref().map(|a| a.id), Some(admin.id));
    assert!(post.published_at.is_none());
}

#[tokio::test]
async fn test_duplicate_slug_is_constraint_violation() {
    let db = migrated_db().await;
    let admin = seed_admin(&db).await;
    let posts = SqlitePostRepository::new(db);
    posts.insert(new_post("taken", admin.id, false)).await.unwrap();

    let err = posts
        .insert(new_post("taken", admin.id, true))
        .await
        .unwrap_err();

    assert!(matches!(err, RepoError::Constraint(_)));
}

#[tokio::test]
async fn test_list_orders_newest_first_and_filters() {
    let db = migrated_db().await;
    let admin = seed_admin(&db).await;
    let posts = SqlitePostRepository::new(db);

    let mut older = new_post("older", admin.id, true);
    older.created_at = Utc::now() - TimeDelta::hours(1);
    posts.insert(older).await.unwrap();
    posts.insert(new_post("draft", admin.id, false)).await.unwrap();
    posts.insert(new_post("newest", admin.id, true)).await.unwrap();

    let all = posts.list(PostFilter::default()).await.unwrap();
    let slugs: Vec<_> = all.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, ["newest", "draft", "older"]);
    assert!(all.iter().all(|p| p.author.is_some()));

    let published = posts
        .list(PostFilter {
            published_only: true,
        })
        .await
        .unwrap();
    let slugs: Vec<_> = published.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, ["newest", "older"]);
}

#[tokio::test]
async fn test_find_by_slug_respects_visibility() {
    let db = migrated_db().await;
    let admin = seed_admin(&db).await;
    let posts = SqlitePostRepository::new(db);
    posts.insert(new_post("secret", admin.id, false)).await.unwrap();

    let hidden = posts
        .find_by_slug("secret", Visibility::PublishedOnly)
        .await
        .unwrap();
    let visible = posts.find_by_slug("secret", Visibility::All).await.unwrap();

    assert!(hidden.is_none());
    assert!(visible.is_some());
}

#[tokio::test]
async fn test_update_persists_editable_fields() {
    let db = migrated_db().await;
    let admin = seed_admin(&db).await;
    let posts = SqlitePostRepository::new(db);
    let mut post = posts.insert(new_post("before", admin.id, false)).await.unwrap();

    let now = Utc::now();
    post.title = "After".to_string();
    post.slug = "after".to_string();
    post.excerpt = Some("summary".to_string());
    post.published = true;
    post.published_at = Some(now);
    post.updated_at = now;
    let updated = posts.update(post.clone()).await.unwrap();

    assert_eq!(updated.slug, "after");
    assert_eq!(updated.excerpt.as_deref(), Some("summary"));
    assert!(updated.published);
    assert_eq!(
        updated.published_at.map(|at| at.timestamp_micros()),
        Some(now.timestamp_micros())
    );
    assert_eq!(updated.created_at, post.created_at);
    assert!(posts.find_by_slug("before", Visibility::All).await.unwrap().is_none());
}

#[tokio::test]
async fn test_soft_delete_hides_post_and_frees_slug() {
    let db = migrated_db().await;
    let admin = seed_admin(&db).await;
    let posts = SqlitePostRepository::new(db);
    let post = posts.insert(new_post("ephemeral", admin.id, true)).await.unwrap();

    posts.soft_delete(post.id, Utc::now()).await.unwrap();

    assert!(posts.find_by_id(post.id).await.unwrap().is_none());
    assert!(posts.list(PostFilter::default()).await.unwrap().is_empty());
    assert!(matches!(
        posts.soft_delete(post.id, Utc::now()).await,
        Err(RepoError::NotFound)
    ));
    assert!(matches!(posts.update(post).await, Err(RepoError::NotFound)));

    let reborn = posts.insert(new_post("ephemeral", admin.id, true)).await;
    assert!(reborn.is_ok());
}
