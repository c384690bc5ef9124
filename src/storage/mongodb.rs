//! MongoDB implementation of the repository capability.
//!
//! # Feature flag
//!
//! Gated behind `mongodb_backend`:
//! ```toml
//! [dependencies]
//! barkeep = { version = "0.1", features = ["mongodb_backend"] }
//! ```
//!
//! # Storage model
//!
//! Collection-per-entity-type: each `MongoRepository<T>` operates on the
//! collection named by `T::collection()` ("clients", "dishes", "invoices").
//!
//! # Serialization strategy
//!
//! Entities are serialized via `serde_json::Value` as an intermediate
//! format, then converted to BSON documents. Ids are opaque UUID strings
//! assigned at create time and stored under MongoDB's `_id` key; the
//! entity's `id` field is mapped to and from `_id` at the boundary.

use crate::core::entity::Entity;
use crate::core::error::AppError;
use crate::core::page::Page;
use crate::core::repository::Repository;
use async_trait::async_trait;
use futures::future;
use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};
use mongodb::Database;
use mongodb::bson::{Bson, Document, doc};
use uuid::Uuid;

fn storage_err(context: &str, e: impl std::fmt::Display) -> AppError {
    AppError::Storage(format!("{}: {}", context, e))
}

/// Convert a serde_json::Value (expected to be an Object) into a BSON
/// Document, renaming `id` → `_id` for MongoDB convention.
fn json_to_document(json: serde_json::Value) -> Result<Document, AppError> {
    let bson_val = mongodb::bson::to_bson(&json)
        .map_err(|e| storage_err("failed to convert JSON to BSON", e))?;

    let mut doc = match bson_val {
        Bson::Document(d) => d,
        _ => {
            return Err(AppError::Storage(
                "expected BSON document, got non-object".into(),
            ));
        }
    };

    if let Some(id) = doc.remove("id") {
        doc.insert("_id", id);
    }

    Ok(doc)
}

/// Convert a BSON Document back into a serde_json::Value, renaming
/// `_id` → `id` for the domain entity convention.
fn document_to_json(mut doc: Document) -> serde_json::Value {
    if let Some(id) = doc.remove("_id") {
        doc.insert("id", id);
    }

    Bson::Document(doc).into_relaxed_extjson()
}

/// Generic repository backed by MongoDB, one collection per entity type.
#[derive(Clone, Debug)]
pub struct MongoRepository<T> {
    database: Database,
    _marker: std::marker::PhantomData<T>,
}

impl<T> MongoRepository<T> {
    /// Create a new repository over the given database handle.
    pub fn new(database: Database) -> Self {
        Self {
            database,
            _marker: std::marker::PhantomData,
        }
    }
}

impl<T: Entity> MongoRepository<T> {
    fn collection(&self) -> mongodb::Collection<Document> {
        self.database.collection(T::collection())
    }

    fn entity_to_document(entity: &T) -> Result<Document, AppError> {
        let json = serde_json::to_value(entity)
            .map_err(|e| storage_err("failed to serialize entity", e))?;
        json_to_document(json)
    }

    fn document_to_entity(doc: Document) -> Result<T, AppError> {
        let json = document_to_json(doc);
        serde_json::from_value(json)
            .map_err(|e| storage_err("failed to deserialize entity from document", e))
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for MongoRepository<T> {
    /// Insert with a fresh store-assigned id and read back the stored
    /// version.
    async fn create(&self, mut entity: T) -> Result<T, AppError> {
        let id = Uuid::new_v4().to_string();
        entity.set_id(id.clone());

        let doc = Self::entity_to_document(&entity)?;
        self.collection()
            .insert_one(doc)
            .await
            .map_err(|e| storage_err("failed to create entity", e))?;

        let stored = self
            .collection()
            .find_one(doc! { "_id": &id })
            .await
            .map_err(|e| storage_err("failed to read back created entity", e))?
            .ok_or_else(|| AppError::Storage(format!("entity not found after insert: {}", id)))?;

        Self::document_to_entity(stored)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<T>, AppError> {
        let doc = self
            .collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| storage_err("failed to get entity", e))?;

        match doc {
            Some(d) => Ok(Some(Self::document_to_entity(d)?)),
            None => Ok(None),
        }
    }

    /// Lazy cursor over the whole collection. The cursor is opened on first
    /// poll, so errors from `find` surface as the first stream item.
    fn find_all(&self) -> BoxStream<'_, Result<T, AppError>> {
        let collection = self.collection();

        stream::once(async move { collection.find(doc! {}).await })
            .flat_map(|opened| match opened {
                Ok(cursor) => cursor
                    .map(|item| {
                        item.map_err(|e| storage_err("failed to read cursor", e))
                            .and_then(Self::document_to_entity)
                    })
                    .boxed(),
                Err(e) => {
                    stream::once(async move { Err(storage_err("failed to list entities", e)) })
                        .boxed()
                }
            })
            .boxed()
    }

    async fn update(&self, id: &str, mut entity: T) -> Result<Option<T>, AppError> {
        entity.set_id(id.to_string());
        let doc = Self::entity_to_document(&entity)?;

        let result = self
            .collection()
            .replace_one(doc! { "_id": id }, doc)
            .await
            .map_err(|e| storage_err("failed to update entity", e))?;

        if result.matched_count == 0 {
            return Ok(None);
        }

        let stored = self
            .collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| storage_err("failed to read back updated entity", e))?
            .ok_or_else(|| AppError::Storage(format!("entity not found after update: {}", id)))?;

        Ok(Some(Self::document_to_entity(stored)?))
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, AppError> {
        let result = self
            .collection()
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| storage_err("failed to delete entity", e))?;

        Ok(result.deleted_count > 0)
    }

    /// Slice fetch and total count issued concurrently; the count is
    /// independent of the window.
    async fn find_page(&self, page: u64, size: u64) -> Result<Page<T>, AppError> {
        let skip = page.saturating_mul(size);

        let count_fut = async {
            self.collection()
                .count_documents(doc! {})
                .await
                .map_err(|e| storage_err("failed to count entities", e))
        };
        let slice_fut = async {
            let cursor = self
                .collection()
                .find(doc! {})
                .skip(skip)
                .limit(size as i64)
                .await
                .map_err(|e| storage_err("failed to fetch page", e))?;
            cursor
                .try_collect::<Vec<Document>>()
                .await
                .map_err(|e| storage_err("failed to collect page", e))
        };

        let (total, docs) = future::try_join(count_fut, slice_fut).await?;

        let content = docs
            .into_iter()
            .map(Self::document_to_entity)
            .collect::<Result<Vec<T>, AppError>>()?;

        Ok(Page::new(content, page, size, total))
    }
}
