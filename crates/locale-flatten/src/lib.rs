//! locale-flatten — flatten nested locale message documents into dot-path
//! mappings, deduplicating values against the document's `common` block.
//!
//! Provides the document loader and the core logic used by the binary entry
//! points:
//! - `locale-flatten`        — flatten a document to its dot-path mapping
//! - `locale-flatten-keymap` — emit the original-path to final-key map

pub mod flatten_cli;
pub mod loader;
