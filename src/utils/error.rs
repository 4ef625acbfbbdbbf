//! Error handling utilities for graceful degradation
//!
//! Helpers for operations whose failure is logged and then ignored.

use tracing::{debug, warn};

/// Execute an operation and return a default value on error
///
/// Returns the result on success, or the default on error (after logging at debug level).
/// Useful for operations where failure is expected and a default is acceptable.
pub fn with_default<F, T, E>(operation: F, default: T, context: &str) -> T
where
    F: FnOnce() -> Result<T, E>,
    E: std::fmt::Display,
{
    match operation() {
        Ok(value) => value,
        Err(e) => {
            debug!("{}: {}, using default", context, e);
            default
        }
    }
}

/// Convert a Result to an Option, logging the error
///
/// Returns `Some(T)` on success, `None` on error (after logging).
pub fn result_to_option<T, E>(result: Result<T, E>, context: &str) -> Option<T>
where
    E: std::fmt::Display,
{
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("{}: {}", context, e);
            None
        }
    }
}
