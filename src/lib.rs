//! # Barkeep
//!
//! A bar management backend exposing clients, dishes and invoices over a
//! REST API, backed by a document store accessed through non-blocking
//! repositories.
//!
//! ## Architecture
//!
//! - **Generic CRUD contract**: every resource type is served by the same
//!   [`core::CrudService`] trait, bound to a [`core::Repository`] capability.
//!   Concrete services add no entity-specific logic, with one exception:
//! - **Invoice reports**: [`services::InvoiceService`] resolves an invoice's
//!   denormalized references (owning client, one dish per line item) with a
//!   concurrent fan-out/join, then renders the resolved aggregate into a PDF
//!   via a bundled report template.
//! - **Pluggable storage**: an in-memory repository (default, used by tests)
//!   and a MongoDB repository behind the `mongodb_backend` feature.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use barkeep::prelude::*;
//!
//! let state = AppState::in_memory();
//! let app = build_router(state);
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod report;
pub mod server;
pub mod services;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        entity::Entity, error::AppError, page::Page, repository::Repository, service::CrudService,
    };

    // === Domain ===
    pub use crate::entities::{
        Client, ClientRef, Dish, DishRef, Invoice, InvoiceItem, ResolvedInvoice, ResolvedLine,
    };

    // === Services ===
    pub use crate::services::{ClientService, DishService, InvoiceService};

    // === Report ===
    pub use crate::report::ReportRenderer;

    // === Storage ===
    pub use crate::storage::InMemoryRepository;
    #[cfg(feature = "mongodb_backend")]
    pub use crate::storage::MongoRepository;

    // === Config ===
    pub use crate::config::AppConfig;

    // === Server ===
    pub use crate::server::{AppState, build_router};

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use chrono::NaiveDate;
    pub use serde::{Deserialize, Serialize};
}
