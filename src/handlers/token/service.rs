use futures::future::try_join_all;
use log::debug;
use std::collections::{BTreeMap, HashSet};

use crate::{
    database::{GraphError, TokenStore},
    handlers::token::dto::TokensResponse,
};

/// Service layer for token lookups
pub struct TokenService;

impl TokenService {
    /// Look up every requested address and merge the hits into one response
    ///
    /// # Arguments
    /// * `store` - Token store to query
    /// * `addresses` - Validated identifiers, possibly with duplicates
    ///
    /// # Returns
    /// * `Ok(TokensResponse)` - Found tokens keyed by address; misses are omitted
    /// * `Err(GraphError)` - The first store failure; no partial result is returned
    pub async fn lookup_tokens(
        store: &dyn TokenStore,
        addresses: &[String],
    ) -> Result<TokensResponse, GraphError> {
        let unique = dedup_preserving_order(addresses);
        debug!(
            "Looking up {} distinct token addresses ({} requested)",
            unique.len(),
            addresses.len()
        );

        // try_join_all drops the remaining lookups as soon as one fails.
        let lookups = unique.into_iter().map(move |address| async move {
            let record = store.find_by_address(address).await?;
            Ok::<_, GraphError>((address, record))
        });
        let results = try_join_all(lookups).await?;

        let tokens_data: BTreeMap<_, _> = results
            .into_iter()
            .filter_map(|(address, record)| record.map(|r| (address.to_string(), r)))
            .collect();

        debug!("Resolved {} token records", tokens_data.len());
        Ok(TokensResponse::new(tokens_data))
    }
}

fn dedup_preserving_order(addresses: &[String]) -> Vec<&str> {
    let mut seen = HashSet::new();
    addresses
        .iter()
        .map(String::as_str)
        .filter(|address| seen.insert(*address))
        .collect()
}
