//! Core module containing the fundamental traits and types shared by all
//! resource types

pub mod entity;
pub mod error;
pub mod page;
pub mod repository;
pub mod service;

pub use entity::Entity;
pub use error::AppError;
pub use page::Page;
pub use repository::Repository;
pub use service::CrudService;
