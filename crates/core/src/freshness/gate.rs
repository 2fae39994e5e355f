//! Check-then-refresh-then-fail state machine.

use std::error::Error as StdError;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use super::error::{GateError, TerminalError};
use super::traits::{FreshnessCheck, FreshnessRefresh};

#[derive(Clone, Default)]
struct FreshnessState {
    check: Option<Arc<dyn FreshnessCheck>>,
    refresh: Option<Arc<dyn FreshnessRefresh>>,
    terminal_error: Option<TerminalError>,
}

/// Guards remote calls behind a caller-supplied freshness check.
///
/// Every field is optional. An undeclared check means every call is allowed,
/// an undeclared refresh means a failed check is final, and an undeclared
/// terminal error falls back to [`GateError::InitializeCheckFailed`].
///
/// The gate never caches: each [`ensure_fresh`](Self::ensure_fresh) re-runs the
/// check, and concurrent callers may each trigger their own refresh.
#[derive(Default)]
pub struct FreshnessGate {
    state: RwLock<FreshnessState>,
}

impl FreshnessGate {
    /// Creates a permissive gate with nothing declared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares the check run before every remote call.
    pub fn declare_check<C>(&self, check: C) -> &Self
    where
        C: FreshnessCheck + 'static,
    {
        self.write(|state| state.check = Some(Arc::new(check)));
        self
    }

    /// Declares the refresh attempted when the check fails.
    pub fn declare_refresh<R>(&self, refresh: R) -> &Self
    where
        R: FreshnessRefresh + 'static,
    {
        self.write(|state| state.refresh = Some(Arc::new(refresh)));
        self
    }

    /// Declares the error raised when freshness cannot be restored.
    pub fn declare_terminal_error<E>(&self, error: E) -> &Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.write(|state| state.terminal_error = Some(TerminalError::new(error)));
        self
    }

    /// Runs the declared check, or returns `true` when none is declared.
    pub async fn check_fresh(&self) -> bool {
        let check = self.snapshot().check;
        match check {
            Some(check) => check.is_fresh().await,
            None => true,
        }
    }

    /// Succeeds when the check passes or a refresh restores freshness.
    ///
    /// A successful refresh is trusted as is; the check is not run again.
    pub async fn ensure_fresh(&self) -> Result<(), GateError> {
        let state = self.snapshot();

        let Some(check) = state.check else {
            return Ok(());
        };
        if check.is_fresh().await {
            return Ok(());
        }

        if let Some(refresh) = state.refresh {
            tracing::debug!("freshness check failed, attempting refresh");
            if refresh.refresh().await {
                return Ok(());
            }
        }

        tracing::warn!(
            declared_error = state.terminal_error.is_some(),
            "freshness gate rejected call"
        );
        Err(match state.terminal_error {
            Some(error) => GateError::Declared(error),
            None => GateError::InitializeCheckFailed,
        })
    }

    // The lock is only held long enough to clone the Arcs out, never across
    // an await point.
    fn snapshot(&self) -> FreshnessState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn write(&self, f: impl FnOnce(&mut FreshnessState)) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut state);
    }
}

impl fmt::Debug for FreshnessGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.snapshot();
        f.debug_struct("FreshnessGate")
            .field("check", &state.check.is_some())
            .field("refresh", &state.refresh.is_some())
            .field("terminal_error", &state.terminal_error)
            .finish()
    }
}
