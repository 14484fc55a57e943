use crate::database::models::TokenRecord;
use crate::database::store::{GraphError, TokenStore};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Substitute store for handler and service tests
#[derive(Default)]
pub struct InMemoryTokenStore {
    tokens: HashMap<String, TokenRecord>,
    unavailable: bool,
    failing: HashSet<String>,
    lookups: AtomicUsize,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every lookup fails as if the database were down
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn with_token(mut self, address: &str, record: TokenRecord) -> Self {
        self.tokens.insert(address.to_string(), record);
        self
    }

    /// Lookups of `address` fail while other addresses still resolve
    pub fn with_failure(mut self, address: &str) -> Self {
        self.failing.insert(address.to_string());
        self
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenStore for InMemoryTokenStore {
    async fn find_by_address(&self, address: &str) -> Result<Option<TokenRecord>, GraphError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.unavailable || self.failing.contains(address) {
            return Err(GraphError::Query("connection refused".to_string()));
        }
        Ok(self.tokens.get(address).cloned())
    }
}
