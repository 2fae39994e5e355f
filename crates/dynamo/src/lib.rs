//! Freshness-gated facade over DynamoDB document operations.
//!
//! [`DocumentManager`] runs the caller's freshness check before every call to
//! the underlying [`DocumentStore`]. [`shared`] exposes a lazily-created
//! process-wide manager for programs that only need one.

pub mod config;
pub mod error;
pub mod manager;
pub mod shared;
pub mod store;

pub use config::AwsConfig;
pub use docgate_core::freshness::{
    FreshnessCheck, FreshnessGate, FreshnessRefresh, GateError, TerminalError,
};
pub use error::{ManagerError, Result};
pub use manager::{DocumentManager, Item};
pub use store::{DocumentStore, DynamoStore};
