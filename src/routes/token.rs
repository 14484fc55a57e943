use actix_web::web;

use crate::handlers::token::{get_token_handler, get_tokens_handler};

pub fn configure_token_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/tokens", web::post().to(get_tokens_handler))
        .route("/token", web::post().to(get_token_handler));
}
