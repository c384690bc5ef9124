//! Client service

use crate::core::error::AppError;
use crate::core::repository::Repository;
use crate::core::service::CrudService;
use crate::entities::Client;
use std::sync::Arc;

/// The generic CRUD contract bound to the client repository.
pub struct ClientService {
    repo: Arc<dyn Repository<Client>>,
}

impl ClientService {
    pub fn new(repo: Arc<dyn Repository<Client>>) -> Self {
        Self { repo }
    }

    /// Store the canonical URL handed back by the media-upload collaborator
    /// on the client's photo field. `Ok(None)` when the client is absent.
    pub async fn set_photo(&self, id: &str, url: String) -> Result<Option<Client>, AppError> {
        match self.repo.find_by_id(id).await? {
            Some(mut client) => {
                client.photo_url = Some(url);
                self.repo.update(id, client).await
            }
            None => Ok(None),
        }
    }
}

impl CrudService<Client> for ClientService {
    fn repo(&self) -> &dyn Repository<Client> {
        self.repo.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryRepository;
    use chrono::NaiveDate;

    fn service() -> ClientService {
        ClientService::new(Arc::new(InMemoryRepository::new()))
    }

    fn ana() -> Client {
        Client {
            id: None,
            first_name: "Ana".into(),
            last_name: "Diaz".into(),
            birth_date: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            photo_url: None,
        }
    }

    #[tokio::test]
    async fn test_set_photo_updates_record() {
        let service = service();
        let saved = service.save(ana()).await.unwrap();
        let id = saved.id.unwrap();

        let updated = service
            .set_photo(&id, "https://cdn.example/ana.jpg".into())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(
            updated.photo_url.as_deref(),
            Some("https://cdn.example/ana.jpg")
        );

        let reread = service.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(
            reread.photo_url.as_deref(),
            Some("https://cdn.example/ana.jpg")
        );
    }

    #[tokio::test]
    async fn test_set_photo_missing_client_is_empty() {
        let service = service();
        let result = service
            .set_photo("ghost", "https://cdn.example/x.jpg".into())
            .await
            .unwrap();
        assert!(result.is_none());
    }
}
