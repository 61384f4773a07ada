//! Centralized error handling for the BesTV playlist gateway
//!
//! Propagation policy: fetch and parse failures travel up to the web
//! boundary, where they are converted into the degraded playlist form.
//! Cache failures never propagate.

pub mod types;

pub use types::*;

/// Convenience type alias for resolution results
pub type ResolveResult<T> = Result<T, ResolveError>;
