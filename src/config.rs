use anyhow::{anyhow, Result};
use log::{info, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use url::Url;

const SUPPORTED_SCHEMES: [&str; 6] = ["bolt", "bolt+s", "bolt+ssc", "neo4j", "neo4j+s", "neo4j+ssc"];

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub neo4j: Neo4jConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct Neo4jConfig {
    pub uri: String,
    pub username: String,
    pub password: String,
    /// Database name; `None` targets the server's default database.
    #[serde(default)]
    pub database: Option<String>,
    pub max_connections: usize,
    pub fetch_size: usize,
    /// Node label holding token records
    pub token_label: String,
    /// Property the requested identifier is matched against
    pub address_property: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub supports_credentials: bool,
    pub max_age: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8000,
            },
            neo4j: Neo4jConfig {
                uri: String::new(),
                username: String::new(),
                password: String::new(),
                database: None,
                max_connections: 16,
                fetch_size: 200,
                token_label: "Token".to_string(),
                address_property: "address".to_string(),
            },
            cors: CorsConfig {
                allowed_origins: vec!["http://localhost:3000".to_string()],
                allowed_methods: vec!["GET".to_string(), "POST".to_string()],
                allowed_headers: vec!["Accept".to_string(), "Content-Type".to_string()],
                supports_credentials: false,
                max_age: 3600,
            },
        }
    }
}

// Password stays out of logs; `main` prints the loaded config at startup.
impl fmt::Debug for Neo4jConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Neo4jConfig")
            .field("uri", &self.uri)
            .field("username", &self.username)
            .field("password", &"*".repeat(self.password.len()))
            .field("database", &self.database)
            .field("max_connections", &self.max_connections)
            .field("fetch_size", &self.fetch_size)
            .field("token_label", &self.token_label)
            .field("address_property", &self.address_property)
            .finish()
    }
}

impl Neo4jConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.uri.is_empty() {
            return Err(anyhow!("NEO4J_URI not configured"));
        }

        if self.username.is_empty() {
            return Err(anyhow!("NEO4J_USERNAME not configured"));
        }

        if self.password.is_empty() {
            return Err(anyhow!("NEO4J_PASSWORD not configured"));
        }

        let uri = Url::parse(&self.uri)
            .map_err(|e| anyhow!("Invalid Neo4j URI {}: {}", self.uri, e))?;
        if !SUPPORTED_SCHEMES.contains(&uri.scheme()) {
            return Err(anyhow!(
                "Unsupported Neo4j URI scheme '{}', expected one of {:?}",
                uri.scheme(),
                SUPPORTED_SCHEMES
            ));
        }

        if self.max_connections == 0 {
            return Err(anyhow!("Neo4j max_connections must be greater than zero"));
        }

        // Label and property are spliced into Cypher, so only plain identifiers pass.
        let identifier = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$")?;
        if !identifier.is_match(&self.token_label) {
            return Err(anyhow!("Invalid token label: {}", self.token_label));
        }
        if !identifier.is_match(&self.address_property) {
            return Err(anyhow!(
                "Invalid address property: {}",
                self.address_property
            ));
        }

        Ok(())
    }
}

impl Config {
    /// Load from `path` if it exists, then apply environment overrides and validate.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            info!("Loading config from {}", path.display());
            Self::load_from_file(path)?
        } else {
            warn!(
                "Config file {} not found, using defaults and environment",
                path.display()
            );
            Self::default()
        };

        config.apply_env();
        config.neo4j.validate()?;

        Ok(config)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(contents)?;
        config.neo4j.database = non_blank(config.neo4j.database);
        Ok(config)
    }

    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    /// Override fields with environment variables if present
    pub fn apply_env(&mut self) {
        if let Ok(host) = std::env::var("SERVER_HOST") {
            self.server.host = host;
        }

        if let Ok(port) = std::env::var("SERVER_PORT") {
            match port.parse::<u16>() {
                Ok(port_num) => self.server.port = port_num,
                Err(_) => warn!("Ignoring invalid SERVER_PORT: {}", port),
            }
        }

        if let Ok(uri) = std::env::var("NEO4J_URI") {
            self.neo4j.uri = uri;
        }

        if let Ok(username) = std::env::var("NEO4J_USERNAME") {
            self.neo4j.username = username;
        }

        if let Ok(password) = std::env::var("NEO4J_PASSWORD") {
            self.neo4j.password = password;
        }

        if let Ok(database) = std::env::var("NEO4J_DATABASE") {
            self.neo4j.database = non_blank(Some(database));
        }

        if let Ok(max) = std::env::var("NEO4J_MAX_CONNECTIONS") {
            match max.parse::<usize>() {
                Ok(max) => self.neo4j.max_connections = max,
                Err(_) => warn!("Ignoring invalid NEO4J_MAX_CONNECTIONS: {}", max),
            }
        }

        if let Ok(origins) = std::env::var("CORS_ORIGINS") {
            self.cors.allowed_origins = origins.split(',').map(|s| s.trim().to_string()).collect();
        }
    }
}

/// A blank database name, from file or environment, means the server default.
fn non_blank(database: Option<String>) -> Option<String> {
    database.filter(|db| !db.trim().is_empty())
}
