//! HTTP surface: shared application state and the axum router

pub mod dtos;
pub mod handlers;

use crate::core::repository::Repository;
use crate::entities::{Client, Dish, Invoice};
use crate::services::{ClientService, DishService, InvoiceService};
use crate::storage::InMemoryRepository;
use axum::Router;
use axum::routing::{get, put};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub clients: Arc<ClientService>,
    pub dishes: Arc<DishService>,
    pub invoices: Arc<InvoiceService>,
}

impl AppState {
    /// Wire the services over the given repository capabilities. The invoice
    /// service additionally holds the client and dish repositories for
    /// reference resolution.
    pub fn new(
        clients: Arc<dyn Repository<Client>>,
        dishes: Arc<dyn Repository<Dish>>,
        invoices: Arc<dyn Repository<Invoice>>,
    ) -> Self {
        Self {
            clients: Arc::new(ClientService::new(clients.clone())),
            dishes: Arc::new(DishService::new(dishes.clone())),
            invoices: Arc::new(InvoiceService::new(invoices, clients, dishes)),
        }
    }

    /// State over fresh in-memory repositories, for development and tests
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryRepository::new()),
            Arc::new(InMemoryRepository::new()),
            Arc::new(InMemoryRepository::new()),
        )
    }
}

/// Build the application router: CRUD + pageable per resource, the invoice
/// report endpoint and a health check.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route(
            "/clients",
            get(handlers::clients::list).post(handlers::clients::create),
        )
        .route("/clients/pageable", get(handlers::clients::page))
        .route(
            "/clients/{id}",
            get(handlers::clients::get_by_id)
                .put(handlers::clients::update)
                .delete(handlers::clients::remove),
        )
        .route("/clients/{id}/photo", put(handlers::clients::set_photo))
        .route(
            "/dishes",
            get(handlers::dishes::list).post(handlers::dishes::create),
        )
        .route("/dishes/pageable", get(handlers::dishes::page))
        .route(
            "/dishes/{id}",
            get(handlers::dishes::get_by_id)
                .put(handlers::dishes::update)
                .delete(handlers::dishes::remove),
        )
        .route(
            "/invoices",
            get(handlers::invoices::list).post(handlers::invoices::create),
        )
        .route("/invoices/pageable", get(handlers::invoices::page))
        .route(
            "/invoices/generateReport/{id}",
            get(handlers::invoices::generate_report),
        )
        .route(
            "/invoices/{id}",
            get(handlers::invoices::get_by_id)
                .put(handlers::invoices::update)
                .delete(handlers::invoices::remove),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
