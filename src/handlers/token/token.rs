use actix_web::{web, HttpResponse};
use log::info;

use crate::{
    database::TokenStore,
    errors::ApiError,
    handlers::token::{dto::TokensRequest, service::TokenService},
};

/// POST /tokens - Returns token records for up to 25 addresses
///
/// # Arguments
/// * `store` - Token store shared by all workers
/// * `body` - TokensRequest with the addresses to resolve
///
/// # Returns
/// JSON object of TokensResponse; addresses without a node are omitted
pub async fn get_tokens_handler(
    store: web::Data<dyn TokenStore>,
    body: web::Json<TokensRequest>,
) -> Result<HttpResponse, ApiError> {
    info!("Handling POST /tokens request");
    lookup_tokens(store.get_ref(), body.into_inner()).await
}

/// POST /token - Kept for older single-token callers, same contract as POST /tokens
pub async fn get_token_handler(
    store: web::Data<dyn TokenStore>,
    body: web::Json<TokensRequest>,
) -> Result<HttpResponse, ApiError> {
    info!("Handling POST /token request");
    lookup_tokens(store.get_ref(), body.into_inner()).await
}

async fn lookup_tokens(
    store: &dyn TokenStore,
    request: TokensRequest,
) -> Result<HttpResponse, ApiError> {
    request.validate()?;

    let response = TokenService::lookup_tokens(store, &request.token_addresses).await?;
    info!(
        "Resolved {} of {} requested tokens",
        response.count,
        request.token_addresses.len()
    );
    Ok(HttpResponse::Ok().json(response))
}
