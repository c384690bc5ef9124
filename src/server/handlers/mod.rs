//! HTTP handlers, one module per resource

pub mod clients;
pub mod dishes;
pub mod health;
pub mod invoices;
