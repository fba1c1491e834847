//! locale-flatten-core — flattening and deduplication engine for locale
//! message documents.
//!
//! Turns a nested message tree into a single-level dot-path mapping,
//! deduplicating leaf values already provided by the document's `common`
//! block, and records a key map from every original leaf path to the output
//! key that ended up holding its value.

pub mod flatten;
pub mod scalar;

// Re-exports for convenience
pub use flatten::{flatten, FlattenResult, COMMON_KEY};
pub use scalar::Scalar;
