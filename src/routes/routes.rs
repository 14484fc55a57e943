use actix_web::{web, HttpResponse, Result};

use crate::errors::json_error_handler;
use crate::routes::token::configure_token_routes;

/// Liveness endpoint
async fn root() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({"message": "Token API is running"})))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("/", web::get().to(root))
        .configure(configure_token_routes);
}
