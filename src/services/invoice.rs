//! Invoice service: plain CRUD plus the report pipeline
//!
//! `generate_report` is the one place a service does more than delegate to
//! its repository: fetch the invoice, resolve its denormalized references
//! with a concurrent fan-out/join, and render the resolved aggregate into a
//! PDF.

use crate::core::entity::Entity;
use crate::core::error::AppError;
use crate::core::repository::Repository;
use crate::core::service::CrudService;
use crate::entities::{Client, Dish, Invoice, ResolvedInvoice, ResolvedLine};
use crate::report::ReportRenderer;
use futures::future;
use std::sync::Arc;

/// CRUD over invoices, extended with `generate_report`.
pub struct InvoiceService {
    invoices: Arc<dyn Repository<Invoice>>,
    clients: Arc<dyn Repository<Client>>,
    dishes: Arc<dyn Repository<Dish>>,
    renderer: ReportRenderer,
}

impl InvoiceService {
    pub fn new(
        invoices: Arc<dyn Repository<Invoice>>,
        clients: Arc<dyn Repository<Client>>,
        dishes: Arc<dyn Repository<Dish>>,
    ) -> Self {
        Self {
            invoices,
            clients,
            dishes,
            renderer: ReportRenderer::new(),
        }
    }

    /// Generate the PDF report for one invoice.
    ///
    /// Linear pipeline: fetch the invoice, resolve its references, render.
    /// Each stage depends on the prior succeeding; the failure kinds stay
    /// distinct ([`AppError::NotFound`] for a missing invoice,
    /// [`AppError::ReferenceResolution`] for a dangling reference,
    /// [`AppError::Render`] for a template failure).
    pub async fn generate_report(&self, id: &str) -> Result<Vec<u8>, AppError> {
        let invoice = self
            .invoices
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(Invoice::kind(), id))?;

        let resolved = self.resolve(id, &invoice).await?;
        let bytes = self.renderer.render(&resolved)?;

        tracing::debug!(invoice_id = %id, bytes = bytes.len(), "invoice report rendered");
        Ok(bytes)
    }

    /// Resolve every reference on the invoice into its full record.
    ///
    /// Fan-out/join: the client fetch and one dish fetch per line item are
    /// all issued concurrently and awaited together; none is ordered
    /// relative to another. Every missing reference is collected, so the
    /// error names all dangling ids rather than just the first.
    async fn resolve(&self, id: &str, invoice: &Invoice) -> Result<ResolvedInvoice, AppError> {
        let client_fetch = self.clients.find_by_id(&invoice.client.id);
        let dish_fetches = future::try_join_all(
            invoice
                .items
                .iter()
                .map(|item| self.dishes.find_by_id(&item.dish.id)),
        );

        let (client, dishes) = future::try_join(client_fetch, dish_fetches).await?;

        let mut missing: Vec<(&'static str, String)> = Vec::new();
        if client.is_none() {
            missing.push((Client::kind(), invoice.client.id.clone()));
        }

        let mut lines = Vec::with_capacity(invoice.items.len());
        for (item, dish) in invoice.items.iter().zip(dishes) {
            match dish {
                Some(dish) => lines.push(ResolvedLine {
                    dish,
                    quantity: item.quantity,
                }),
                None => missing.push((Dish::kind(), item.dish.id.clone())),
            }
        }

        match (client, missing.is_empty()) {
            (Some(client), true) => Ok(ResolvedInvoice {
                invoice_id: id.to_string(),
                client,
                lines,
            }),
            _ => Err(AppError::unresolved(missing)),
        }
    }
}

impl CrudService<Invoice> for InvoiceService {
    fn repo(&self) -> &dyn Repository<Invoice> {
        self.invoices.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{ClientRef, DishRef, InvoiceItem};
    use crate::storage::InMemoryRepository;
    use chrono::NaiveDate;

    struct Fixture {
        clients: Arc<InMemoryRepository<Client>>,
        dishes: Arc<InMemoryRepository<Dish>>,
        service: InvoiceService,
    }

    fn fixture() -> Fixture {
        let invoices = Arc::new(InMemoryRepository::new());
        let clients = Arc::new(InMemoryRepository::new());
        let dishes = Arc::new(InMemoryRepository::new());
        let service = InvoiceService::new(invoices, clients.clone(), dishes.clone());
        Fixture {
            clients,
            dishes,
            service,
        }
    }

    async fn seed_invoice(fx: &Fixture, quantities: &[u32]) -> String {
        let client = fx
            .clients
            .create(Client {
                id: None,
                first_name: "Ana".into(),
                last_name: "Diaz".into(),
                birth_date: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
                photo_url: None,
            })
            .await
            .unwrap();

        let mut items = Vec::new();
        for qty in quantities {
            let dish = fx
                .dishes
                .create(Dish {
                    id: None,
                    name: "Soup".into(),
                    price: 5.0,
                    active: true,
                })
                .await
                .unwrap();
            items.push(InvoiceItem {
                dish: DishRef {
                    id: dish.id.unwrap(),
                },
                quantity: *qty,
            });
        }

        let invoice = fx
            .service
            .save(Invoice {
                id: None,
                client: ClientRef {
                    id: client.id.unwrap(),
                },
                items,
            })
            .await
            .unwrap();
        invoice.id.unwrap()
    }

    #[tokio::test]
    async fn test_report_for_resolved_invoice_is_nonempty_pdf() {
        let fx = fixture();
        let id = seed_invoice(&fx, &[2]).await;

        let bytes = fx.service.generate_report(&id).await.unwrap();
        assert!(!bytes.is_empty());
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_missing_invoice_is_not_found() {
        let fx = fixture();
        let err = fx.service.generate_report("ghost").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { entity: "invoice", .. }));
    }

    #[tokio::test]
    async fn test_dangling_dish_fails_resolution() {
        let fx = fixture();
        let id = seed_invoice(&fx, &[2, 1]).await;

        // Delete one referenced dish after invoicing
        let invoice = fx.service.find_by_id(&id).await.unwrap().unwrap();
        let dangling = invoice.items[1].dish.id.clone();
        assert!(fx.dishes.delete_by_id(&dangling).await.unwrap());

        let err = fx.service.generate_report(&id).await.unwrap_err();
        match err {
            AppError::ReferenceResolution { refs } => {
                assert_eq!(refs, vec![format!("dish/{}", dangling)]);
            }
            other => panic!("expected resolution failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_all_dangling_refs_are_collected() {
        let fx = fixture();
        let id = seed_invoice(&fx, &[1, 1]).await;

        let invoice = fx.service.find_by_id(&id).await.unwrap().unwrap();
        fx.clients
            .delete_by_id(&invoice.client.id)
            .await
            .unwrap();
        for item in &invoice.items {
            fx.dishes.delete_by_id(&item.dish.id).await.unwrap();
        }

        let err = fx.service.generate_report(&id).await.unwrap_err();
        match err {
            AppError::ReferenceResolution { refs } => {
                // 1 client + 2 dishes, client first
                assert_eq!(refs.len(), 3);
                assert!(refs[0].starts_with("client/"));
                assert!(refs[1].starts_with("dish/"));
                assert!(refs[2].starts_with("dish/"));
            }
            other => panic!("expected resolution failure, got {:?}", other),
        }
    }
}
