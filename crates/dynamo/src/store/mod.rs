//! The document store the manager delegates to.

mod client;
mod traits;

#[cfg(test)]
pub(crate) mod testing;

pub use client::DynamoStore;
pub use traits::DocumentStore;
