//! `flatten-cli` — core logic for the locale flattening command-line tools.
//!
//! Provides the string-in/string-out functions used by the binary entry
//! points:
//! - `locale-flatten`        — flatten a document to its dot-path mapping
//! - `locale-flatten-keymap` — emit the original-path to final-key map

use locale_flatten_core::flatten;

use crate::loader::{parse_document, DocumentError};

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum CliError {
    Document(DocumentError),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Document(e) => write!(f, "{e}"),
            CliError::Json(e) => write!(f, "{e}"),
        }
    }
}

impl From<DocumentError> for CliError {
    fn from(e: DocumentError) -> Self {
        CliError::Document(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

// ── locale-flatten ────────────────────────────────────────────────────────

/// A flattened document rendered for output.
#[derive(Debug, Clone, PartialEq)]
pub struct FlattenedDocument {
    /// The flat dot-path mapping, pretty-printed JSON.
    pub flat_json: String,
    /// The original-path to final-key map, pretty-printed JSON.
    pub key_map_json: String,
    /// How many leaves were deduplicated away against common values.
    pub redirects: usize,
}

/// Flatten a locale message document given as JSON text.
///
/// Returns both rendered mappings plus the dedup count for reporting.
pub fn flatten_document(doc_json: &str) -> Result<FlattenedDocument, CliError> {
    let doc = parse_document(doc_json)?;
    let result = flatten(&doc);
    Ok(FlattenedDocument {
        flat_json: serde_json::to_string_pretty(&result.flat)?,
        key_map_json: serde_json::to_string_pretty(&result.key_map)?,
        redirects: result.redirect_count(),
    })
}

/// Flatten a document and return only the flat mapping as pretty JSON.
pub fn flatten_messages(doc_json: &str) -> Result<String, CliError> {
    let doc = parse_document(doc_json)?;
    let result = flatten(&doc);
    Ok(serde_json::to_string_pretty(&result.flat)?)
}

// ── locale-flatten-keymap ─────────────────────────────────────────────────

/// Flatten a document and return only the key map as pretty JSON.
///
/// Every original leaf path appears as a key, mapped to the output key that
/// holds its value after deduplication.
pub fn flatten_key_map(doc_json: &str) -> Result<String, CliError> {
    let doc = parse_document(doc_json)?;
    let result = flatten(&doc);
    Ok(serde_json::to_string_pretty(&result.key_map)?)
}

// ── Tests ─────────────────────────────────────────────────────────────────
