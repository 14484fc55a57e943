use crate::config::Neo4jConfig;
use anyhow::{anyhow, Result};
use log::{error, info};
use neo4rs::{query, ConfigBuilder, Graph};
use std::sync::Arc;

/// Neo4j client wrapper owning the driver's connection pool
#[derive(Clone)]
pub struct Neo4jClient {
    graph: Graph,
    database: Option<String>,
}

impl Neo4jClient {
    /// Initialize the Neo4j driver with configuration and verify connectivity
    pub async fn init(config: &Neo4jConfig) -> Result<Arc<Self>> {
        info!(
            "Connecting to Neo4j at {} as {} (database: {})",
            config.uri,
            config.username,
            config.database.as_deref().unwrap_or("<default>")
        );

        let mut builder = ConfigBuilder::default()
            .uri(config.uri.as_str())
            .user(config.username.as_str())
            .password(config.password.as_str())
            .max_connections(config.max_connections)
            .fetch_size(config.fetch_size);

        if let Some(database) = &config.database {
            builder = builder.db(database.as_str());
        }

        let driver_config = builder
            .build()
            .map_err(|e| anyhow!("Invalid Neo4j driver configuration: {}", e))?;

        let graph = Graph::connect(driver_config)
            .await
            .map_err(|e| anyhow!("Failed to create Neo4j driver: {}", e))?;

        let client = Arc::new(Self {
            graph,
            database: config.database.clone(),
        });

        // Test connection
        match client.ping().await {
            Ok(()) => info!("Successfully connected to Neo4j"),
            Err(e) => {
                error!("Failed to connect to Neo4j: {}", e);
                return Err(anyhow!("Failed to connect to Neo4j: {}", e));
            }
        }

        Ok(client)
    }

    /// Run a trivial round trip through the pool
    pub async fn ping(&self) -> Result<()> {
        let mut stream = self.graph.execute(query("RETURN 1 AS test")).await?;
        let row = stream
            .next()
            .await?
            .ok_or_else(|| anyhow!("connectivity check returned no rows"))?;
        let value: i64 = row
            .get("test")
            .map_err(|e| anyhow!("unexpected connectivity check result: {}", e))?;
        info!("Neo4j connection test successful: {}", value);
        Ok(())
    }

    /// Get the driver handle; cloning it shares the same pool
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn database(&self) -> Option<&str> {
        self.database.as_deref()
    }
}
