//! Domain entities: clients, dishes and invoices

pub mod client;
pub mod dish;
pub mod invoice;

pub use client::Client;
pub use dish::Dish;
pub use invoice::{ClientRef, DishRef, Invoice, InvoiceItem, ResolvedInvoice, ResolvedLine};
