#[cfg(test)]
pub mod memory;
pub mod token;

#[cfg(test)]
pub use memory::InMemoryTokenStore;
pub use token::TokenRepository;
