//! docgate CLI library.

pub mod cli;
pub mod conversions;
pub mod error;
pub mod output;
