//! Document store access.

mod config;
mod memory;

#[cfg(feature = "mongo")]
mod connections;
#[cfg(feature = "mongo")]
pub mod entity;
#[cfg(feature = "mongo")]
pub mod mongo_repo;

pub use config::DatabaseConfig;
pub use memory::InMemoryPostRepository;

#[cfg(feature = "mongo")]
pub use connections::DatabaseConnections;
#[cfg(feature = "mongo")]
pub use mongo_repo::MongoPostRepository;

#[cfg(feature = "mongo")]
#[cfg(test)]
mod tests;
