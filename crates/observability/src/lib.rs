//! Tracing/logging setup shared by stockroom binaries.

/// Tracing configuration (filters, layers, log file).
pub mod tracing;

pub use crate::tracing::{LogTarget, init};
