//! Storage implementations of the repository capability

pub mod in_memory;
#[cfg(feature = "mongodb_backend")]
pub mod mongodb;

pub use in_memory::InMemoryRepository;
#[cfg(feature = "mongodb_backend")]
pub use mongodb::MongoRepository;
