//! Persistence - MongoDB and in-memory repositories.

mod connections;
mod memory;

#[cfg(feature = "mongodb")]
mod mongo_base;
#[cfg(feature = "mongodb")]
pub mod mongo_repo;

#[cfg(feature = "mongodb")]
pub mod entity;

pub use memory::{InMemoryAuthorRepository, InMemoryBlogPostRepository};

pub use connections::{DEFAULT_DATABASE_NAME, DatabaseConfig};

#[cfg(feature = "mongodb")]
pub use connections::DatabaseConnections;

#[cfg(feature = "mongodb")]
pub use mongo_repo::{MongoAuthorRepository, MongoBlogPostRepository};

#[cfg(feature = "mongodb")]
#[cfg(test)]
mod tests;
