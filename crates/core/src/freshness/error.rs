use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

/// Caller-declared error raised when freshness cannot be restored.
///
/// Cheap to clone so the same declared error can be handed out on every
/// rejected call.
#[derive(Clone)]
pub struct TerminalError(Arc<dyn StdError + Send + Sync>);

impl TerminalError {
    /// Wraps any error so it can be declared on a gate.
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self(Arc::new(error))
    }

    /// Returns the declared error if it is of type `E`.
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.0.downcast_ref::<E>()
    }
}

impl fmt::Debug for TerminalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for TerminalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

impl StdError for TerminalError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

/// Errors raised by the freshness gate before a remote call is issued.
#[derive(Debug, Error, Clone)]
pub enum GateError {
    /// The check failed and the caller declared a terminal error.
    #[error(transparent)]
    Declared(TerminalError),
    /// The check failed and no terminal error was declared.
    #[error("Initialize check failed")]
    InitializeCheckFailed,
}

impl GateError {
    /// Returns the caller-declared error, if that is what was raised.
    pub fn declared(&self) -> Option<&TerminalError> {
        match self {
            GateError::Declared(error) => Some(error),
            GateError::InitializeCheckFailed => None,
        }
    }
}
