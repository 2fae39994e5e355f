//! Functional core for docgate.
//!
//! Holds the pieces that do not depend on any particular document store:
//! the freshness gate that guards every remote call and the cursor-following
//! loop used to drain paginated results.

pub mod freshness;
pub mod pagination;
