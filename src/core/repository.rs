//! Repository capability trait for per-entity-type stores

use crate::core::entity::Entity;
use crate::core::error::AppError;
use crate::core::page::Page;
use async_trait::async_trait;
use futures::stream::BoxStream;

/// Per-entity-type store capability.
///
/// Implementations provide non-blocking access to one collection of `T`.
/// The backend is injected once and safe for concurrent independent calls;
/// no locking or transactional scope spans multiple repository calls.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Persist a new entity. Assigns a fresh store id (the entity's own id
    /// field, if any, is discarded) and returns the stored version.
    async fn create(&self, entity: T) -> Result<T, AppError>;

    /// Fetch an entity by id. `Ok(None)` when absent — absence is not an
    /// error at this boundary.
    async fn find_by_id(&self, id: &str) -> Result<Option<T>, AppError>;

    /// Lazy sequence over all entities, in store iteration order.
    fn find_all(&self) -> BoxStream<'_, Result<T, AppError>>;

    /// Full replace of the record at `id` with the supplied entity's fields.
    /// The supplied entity's own id is overwritten with `id`. Returns the
    /// updated entity, or `None` when `id` does not exist.
    async fn update(&self, id: &str, entity: T) -> Result<Option<T>, AppError>;

    /// Delete the record if present. `true` iff a record was removed; never
    /// fails solely because the id is absent.
    async fn delete_by_id(&self, id: &str) -> Result<bool, AppError>;

    /// Fetch one page window. The total element count is computed
    /// independently of the slice fetch.
    async fn find_page(&self, page: u64, size: u64) -> Result<Page<T>, AppError>;
}
