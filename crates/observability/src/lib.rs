//! Tracing and logging (shared setup).

/// Tracing subscriber configuration (filters, output format).
pub mod tracing;

pub use crate::tracing::DEFAULT_FILTER;

/// Initialize process-wide logging with JSON output.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}
