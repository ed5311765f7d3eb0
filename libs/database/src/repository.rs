//! Generic repository helper over SeaORM entities with UUID primary keys.
//!
//! Domain repositories wrap a [`BaseRepository`] for primary-key lookups and
//! reach for [`BaseRepository::db`] when they need filtered queries or
//! transactions.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PrimaryKeyTrait};
use std::marker::PhantomData;
use uuid::Uuid;

/// Thin wrapper around a pooled connection, typed per entity.
pub struct BaseRepository<E: EntityTrait> {
    db: DatabaseConnection,
    _entity: PhantomData<E>,
}

impl<E: EntityTrait> BaseRepository<E> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    /// Access the underlying connection for custom queries and transactions.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl<E> BaseRepository<E>
where
    E: EntityTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<Uuid>,
{
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<E::Model>, DbErr> {
        E::find_by_id(id).one(&self.db).await
    }
}
