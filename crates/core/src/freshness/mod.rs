mod error;
mod gate;
mod traits;

pub use error::{GateError, TerminalError};
pub use gate::FreshnessGate;
pub use traits::{FreshnessCheck, FreshnessRefresh};
