pub mod config;
pub mod database;
pub mod errors;
pub mod handlers;
pub mod routes;
