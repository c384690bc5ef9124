//! In-memory implementation of the repository capability for testing and
//! development

use crate::core::entity::Entity;
use crate::core::error::AppError;
use crate::core::page::Page;
use crate::core::repository::Repository;
use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

/// In-memory repository backed by an insertion-ordered vector.
///
/// Insertion order doubles as the store iteration order, which keeps
/// `find_all` and `find_page` deterministic. Uses RwLock for thread-safe
/// access.
#[derive(Clone)]
pub struct InMemoryRepository<T> {
    records: Arc<RwLock<Vec<T>>>,
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<T>>, AppError> {
        self.records
            .read()
            .map_err(|e| AppError::Storage(format!("failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<T>>, AppError> {
        self.records
            .write()
            .map_err(|e| AppError::Storage(format!("failed to acquire write lock: {}", e)))
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn create(&self, mut entity: T) -> Result<T, AppError> {
        entity.set_id(Uuid::new_v4().to_string());

        let mut records = self.write()?;
        records.push(entity.clone());

        Ok(entity)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<T>, AppError> {
        let records = self.read()?;
        Ok(records.iter().find(|r| r.id() == Some(id)).cloned())
    }

    fn find_all(&self) -> BoxStream<'_, Result<T, AppError>> {
        let snapshot = match self.read() {
            Ok(records) => records.clone(),
            Err(e) => return stream::once(async move { Err(e) }).boxed(),
        };
        stream::iter(snapshot.into_iter().map(Ok)).boxed()
    }

    async fn update(&self, id: &str, mut entity: T) -> Result<Option<T>, AppError> {
        entity.set_id(id.to_string());

        let mut records = self.write()?;
        match records.iter_mut().find(|r| r.id() == Some(id)) {
            Some(slot) => {
                *slot = entity.clone();
                Ok(Some(entity))
            }
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, AppError> {
        let mut records = self.write()?;
        let before = records.len();
        records.retain(|r| r.id() != Some(id));
        Ok(records.len() < before)
    }

    async fn find_page(&self, page: u64, size: u64) -> Result<Page<T>, AppError> {
        let records = self.read()?;
        let total = records.len() as u64;

        let start = page.saturating_mul(size) as usize;
        let content: Vec<T> = records
            .iter()
            .skip(start)
            .take(size as usize)
            .cloned()
            .collect();

        Ok(Page::new(content, page, size, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Client;
    use chrono::NaiveDate;
    use futures::TryStreamExt;

    fn client(first: &str, last: &str) -> Client {
        Client {
            id: None,
            first_name: first.into(),
            last_name: last.into(),
            birth_date: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            photo_url: None,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_fresh_id() {
        let repo = InMemoryRepository::new();

        let mut input = client("Ana", "Diaz");
        input.id = Some("caller-supplied".into());

        let created = repo.create(input).await.unwrap();
        let id = created.id().unwrap();
        assert_ne!(id, "caller-supplied");

        let found = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.first_name, "Ana");
    }

    #[tokio::test]
    async fn test_find_by_id_absent_is_none() {
        let repo: InMemoryRepository<Client> = InMemoryRepository::new();
        assert!(repo.find_by_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_replaces_whole_record() {
        let repo = InMemoryRepository::new();
        let created = repo.create(client("Ana", "Diaz")).await.unwrap();
        let id = created.id().unwrap().to_string();

        let mut replacement = client("Ana", "Reyes");
        replacement.photo_url = Some("https://cdn.example/ana.jpg".into());

        let updated = repo.update(&id, replacement).await.unwrap().unwrap();
        assert_eq!(updated.id(), Some(id.as_str()));
        assert_eq!(updated.last_name, "Reyes");

        let reread = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(reread.last_name, "Reyes");
        assert_eq!(
            reread.photo_url.as_deref(),
            Some("https://cdn.example/ana.jpg")
        );
    }

    #[tokio::test]
    async fn test_delete_reports_removal_once() {
        let repo = InMemoryRepository::new();
        let created = repo.create(client("Ana", "Diaz")).await.unwrap();
        let id = created.id().unwrap().to_string();

        assert!(repo.delete_by_id(&id).await.unwrap());
        assert!(!repo.delete_by_id(&id).await.unwrap());
        assert!(!repo.delete_by_id("never-existed").await.unwrap());
    }

    #[tokio::test]
    async fn test_find_all_preserves_insertion_order() {
        let repo = InMemoryRepository::new();
        repo.create(client("Ana", "Diaz")).await.unwrap();
        repo.create(client("Bruno", "Sosa")).await.unwrap();
        repo.create(client("Clara", "Vega")).await.unwrap();

        let all: Vec<Client> = repo.find_all().try_collect().await.unwrap();
        let names: Vec<&str> = all.iter().map(|c| c.first_name.as_str()).collect();
        assert_eq!(names, vec!["Ana", "Bruno", "Clara"]);
    }

    #[tokio::test]
    async fn test_page_windows_and_total() {
        let repo = InMemoryRepository::new();
        for first in ["Ana", "Bruno", "Clara", "Dario", "Elsa"] {
            repo.create(client(first, "X")).await.unwrap();
        }

        let first = repo.find_page(0, 2).await.unwrap();
        assert_eq!(first.content.len(), 2);
        assert_eq!(first.total_elements, 5);
        assert_eq!(first.content[0].first_name, "Ana");

        let second = repo.find_page(1, 2).await.unwrap();
        assert_eq!(second.content[0].first_name, "Clara");
        assert_eq!(second.total_elements, 5);

        let last = repo.find_page(2, 2).await.unwrap();
        assert_eq!(last.content.len(), 1);

        let past_end = repo.find_page(7, 2).await.unwrap();
        assert!(past_end.content.is_empty());
        assert_eq!(past_end.total_elements, 5);
    }
}
