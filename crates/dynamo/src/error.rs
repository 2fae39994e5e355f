//! Facade error types.

use docgate_core::freshness::GateError;
use thiserror::Error;

/// Result type for manager operations, defaulting to the DynamoDB SDK error.
pub type Result<T, E = aws_sdk_dynamodb::Error> = std::result::Result<T, ManagerError<E>>;

/// Errors returned by [`DocumentManager`](crate::DocumentManager) operations.
#[derive(Debug, Error)]
pub enum ManagerError<E> {
    /// The freshness gate rejected the call; the store was never contacted.
    #[error(transparent)]
    Stale(#[from] GateError),
    /// The store failed; the error is passed through unchanged.
    #[error(transparent)]
    Store(E),
}

impl<E> ManagerError<E> {
    /// Returns `true` if the freshness gate rejected the call.
    pub fn is_stale(&self) -> bool {
        matches!(self, ManagerError::Stale(_))
    }

    /// Returns the store error, if the store is what failed.
    pub fn into_store(self) -> Option<E> {
        match self {
            ManagerError::Store(error) => Some(error),
            ManagerError::Stale(_) => None,
        }
    }
}
