//! Service implementations
//!
//! Data provider backends that satisfy [`crate::traits::DataProvider`].

pub mod in_memory;

#[cfg(test)]
mod tests;

pub use in_memory::{Dataset, InMemoryDataProvider};
