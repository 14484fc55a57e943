pub mod dto;
pub mod service;
pub mod token;

pub use dto::*;
pub use token::{get_token_handler, get_tokens_handler};
