//! Sample-data generators for the bundled fixture files
//!
//! The handlers pass fixture files through verbatim; these generators
//! produce realistic-looking fixture contents so a local deployment has
//! something to serve. See the `mockgen` binary for the CLI front end.

pub mod measurements;
pub mod transactions;

/// Timestamp format used across all generated records.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
