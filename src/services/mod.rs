//! Concrete per-resource services bound to the generic CRUD contract

pub mod client;
pub mod dish;
pub mod invoice;

pub use client::ClientService;
pub use dish::DishService;
pub use invoice::InvoiceService;
