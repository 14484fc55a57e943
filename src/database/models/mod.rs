pub mod token;

pub use token::{PropertyValue, TokenRecord};
