use async_trait::async_trait;
use thiserror::Error;

use super::models::TokenRecord;

/// Failures talking to the graph store.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Connection, authentication or query execution failed.
    #[error("graph query failed: {0}")]
    Query(String),

    /// The store answered but the node properties could not be read.
    #[error("failed to decode node properties: {0}")]
    Decode(String),
}

impl From<neo4rs::Error> for GraphError {
    fn from(error: neo4rs::Error) -> Self {
        GraphError::Query(error.to_string())
    }
}

/// Lookup of token nodes by identifier.
///
/// Implementations are shared across all workers and must tolerate concurrent calls.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Returns the properties of the node matching `address`, or `None` when no node matches.
    async fn find_by_address(&self, address: &str) -> Result<Option<TokenRecord>, GraphError>;
}
