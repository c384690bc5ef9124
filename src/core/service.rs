//! Generic CRUD service contract shared by all resource types

use crate::core::entity::Entity;
use crate::core::error::AppError;
use crate::core::page::Page;
use crate::core::repository::Repository;
use async_trait::async_trait;
use futures::stream::BoxStream;

/// The reusable CRUD behavioral contract, implemented once per entity type.
///
/// Every provided method delegates straight to the backing [`Repository`];
/// concrete services only supply `repo()` and add no entity-specific logic
/// by default. The invoice service extends this contract with report
/// generation on top of the same delegation.
#[async_trait]
pub trait CrudService<T: Entity>: Send + Sync {
    /// The repository capability this service is bound to
    fn repo(&self) -> &dyn Repository<T>;

    /// Lazy sequence of all entities; empty when none exist. No ordering
    /// guarantee beyond store iteration order.
    fn find_all(&self) -> BoxStream<'_, Result<T, AppError>> {
        self.repo().find_all()
    }

    /// The entity if present, otherwise `Ok(None)`
    async fn find_by_id(&self, id: &str) -> Result<Option<T>, AppError> {
        self.repo().find_by_id(id).await
    }

    /// Persist a new entity; returns it with a store-assigned id. Field
    /// constraints are enforced upstream at the HTTP boundary, not here.
    async fn save(&self, entity: T) -> Result<T, AppError> {
        self.repo().create(entity).await
    }

    /// Full-replace the record at `id`; `Ok(None)` when `id` does not exist
    async fn update(&self, id: &str, entity: T) -> Result<Option<T>, AppError> {
        self.repo().update(id, entity).await
    }

    /// Delete by id. `true` iff a record was removed; repeated deletes of
    /// the same id return `false`.
    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        self.repo().delete_by_id(id).await
    }

    /// One page window plus the collection's total element count
    async fn get_page(&self, page: u64, size: u64) -> Result<Page<T>, AppError> {
        self.repo().find_page(page, size).await
    }
}
