use std::marker::PhantomData;

use sea_orm::{DbConn, DbErr, EntityTrait};

use quill_core::error::RepoError;

/// SeaORM-backed repository over a single entity.
///
/// Concrete repositories are aliases of this type with their port
/// implemented on top.
pub struct SqliteRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: DbConn,
    _entity: PhantomData<E>,
}

impl<E> SqliteRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

/// Map a read failure.
pub(crate) fn query_err(e: DbErr) -> RepoError {
    match e {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(e.to_string()),
        _ => RepoError::Query(e.to_string()),
    }
}

/// Map a write failure, surfacing unique-index violations as constraint errors.
pub(crate) fn write_err(e: DbErr) -> RepoError {
    let msg = e.to_string();
    let lower = msg.to_lowercase();

    if lower.contains("unique") || lower.contains("duplicate") {
        RepoError::Constraint(msg)
    } else {
        query_err(e)
    }
}
