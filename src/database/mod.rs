pub mod models;
pub mod neo4j;
pub mod repositories;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use models::{PropertyValue, TokenRecord};
pub use neo4j::Neo4jClient;
pub use service::GraphDbService;
pub use store::{GraphError, TokenStore};
