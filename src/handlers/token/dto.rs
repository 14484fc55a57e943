use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{database::TokenRecord, errors::ApiError};

/// Upper bound on identifiers accepted in one request
pub const MAX_TOKEN_ADDRESSES: usize = 25;

/// Request body shared by POST /tokens and POST /token
#[derive(Debug, Deserialize)]
pub struct TokensRequest {
    pub token_addresses: Vec<String>,
}

impl TokensRequest {
    /// Identifiers are opaque; only the count is checked.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.token_addresses.is_empty() {
            return Err(ApiError::BadRequest(
                "At least one token address must be provided".to_string(),
            ));
        }

        if self.token_addresses.len() > MAX_TOKEN_ADDRESSES {
            return Err(ApiError::BadRequest(format!(
                "Maximum of {} token addresses allowed, got {}",
                MAX_TOKEN_ADDRESSES,
                self.token_addresses.len()
            )));
        }

        Ok(())
    }
}

/// Response model for token lookups
#[derive(Debug, Serialize, PartialEq)]
pub struct TokensResponse {
    /// Resolved identifiers only; a missing key means no node matched
    pub tokens_data: BTreeMap<String, TokenRecord>,
    pub count: usize,
}

impl TokensResponse {
    pub fn new(tokens_data: BTreeMap<String, TokenRecord>) -> Self {
        let count = tokens_data.len();
        Self { tokens_data, count }
    }
}
