use anyhow::Result;
use std::sync::Arc;

use super::neo4j::Neo4jClient;
use super::repositories::TokenRepository;
use super::store::TokenStore;
use crate::config::Neo4jConfig;

/// Graph database service built once at startup and handed to the HTTP layer.
///
/// Request handlers only see the `TokenStore` it exposes, so they can be driven by
/// any other store in tests.
#[derive(Clone)]
pub struct GraphDbService {
    client: Arc<Neo4jClient>,
    token_repo: TokenRepository,
}

impl GraphDbService {
    /// Create a new graph database service from a config already checked by `Config::load`
    pub async fn new(config: &Neo4jConfig) -> Result<Self> {
        // Initialize Neo4j driver
        let client = Neo4jClient::init(config).await?;

        let token_repo = TokenRepository::new(client.clone(), config);

        Ok(Self { client, token_repo })
    }

    /// Get Neo4j client
    pub fn get_client(&self) -> &Neo4jClient {
        &self.client
    }

    /// Token store shared by all workers
    pub fn token_store(&self) -> Arc<dyn TokenStore> {
        Arc::new(self.token_repo.clone())
    }
}
