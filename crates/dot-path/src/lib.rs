//! Dotted-path utilities.
//!
//! Locale message documents address their leaves by dot-joined key paths
//! (`home.actions.save`). This crate implements the helpers for building,
//! splitting, and comparing such paths, and for looking up values by path in
//! a nested [`serde_json::Value`] tree.
//!
//! Unlike JSON Pointer, dot paths carry no escaping: message keys never
//! contain a literal `.`, so a path splits unambiguously on it. Only object
//! trees are traversed; arrays are outside this system's data model.
//!
//! # Example
//!
//! ```
//! use locale_flatten_dot_path::{join_key, split_path, get_by_path};
//!
//! // Build a dotted key from a prefix and a segment
//! assert_eq!(join_key("home.actions", "save"), "home.actions.save");
//! assert_eq!(join_key("", "save"), "save");
//!
//! // Split a dotted key into segments
//! assert_eq!(split_path("home.actions.save"), vec!["home", "actions", "save"]);
//!
//! // Look up a value in a document
//! let doc = serde_json::json!({"home": {"actions": {"save": "Save"}}});
//! let val = get_by_path(&doc, "home.actions.save");
//! assert_eq!(val, Some(&serde_json::json!("Save")));
//! ```

use serde_json::Value;
use thiserror::Error;

/// Join a dotted prefix and a key segment.
///
/// An empty prefix yields the bare segment, so path accumulation can start
/// from `""` at the document root.
///
/// # Example
///
/// ```
/// use locale_flatten_dot_path::join_key;
///
/// assert_eq!(join_key("", "home"), "home");
/// assert_eq!(join_key("home", "title"), "home.title");
/// ```
pub fn join_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        return key.to_string();
    }
    let mut out = String::with_capacity(prefix.len() + 1 + key.len());
    out.push_str(prefix);
    out.push('.');
    out.push_str(key);
    out
}

/// Split a dotted path into its segments.
///
/// The empty string is the root path and returns an empty vec.
///
/// # Example
///
/// ```
/// use locale_flatten_dot_path::split_path;
///
/// assert_eq!(split_path(""), Vec::<String>::new());
/// assert_eq!(split_path("home"), vec!["home"]);
/// assert_eq!(split_path("home.title"), vec!["home", "title"]);
/// ```
pub fn split_path(path: &str) -> Vec<String> {
    if path.is_empty() {
        return Vec::new();
    }
    path.split('.').map(str::to_string).collect()
}

/// Format path segments back into a dotted path string.
///
/// # Example
///
/// ```
/// use locale_flatten_dot_path::join_path;
///
/// assert_eq!(join_path(&[]), "");
/// assert_eq!(join_path(&["home".to_string(), "title".to_string()]), "home.title");
/// ```
pub fn join_path(path: &[String]) -> String {
    path.join(".")
}

/// Check if a path addresses the document root.
pub fn is_root(path: &[String]) -> bool {
    path.is_empty()
}

/// Check if `parent` path contains the `child` path.
///
/// # Example
///
/// ```
/// use locale_flatten_dot_path::is_child;
///
/// let parent = vec!["home".to_string()];
/// let child = vec!["home".to_string(), "title".to_string()];
/// assert!(is_child(&parent, &child));
/// assert!(!is_child(&child, &parent));
/// ```
pub fn is_child(parent: &[String], child: &[String]) -> bool {
    if parent.len() >= child.len() {
        return false;
    }
    for i in 0..parent.len() {
        if parent[i] != child[i] {
            return false;
        }
    }
    true
}

/// Check if two paths are equal.
pub fn is_path_equal(p1: &[String], p2: &[String]) -> bool {
    if p1.len() != p2.len() {
        return false;
    }
    for i in 0..p1.len() {
        if p1[i] != p2[i] {
            return false;
        }
    }
    true
}

/// Get the parent path of a given path.
///
/// # Errors
///
/// Returns an error if the path has no parent (is the root).
///
/// # Example
///
/// ```
/// use locale_flatten_dot_path::parent;
///
/// assert_eq!(parent(&["home".to_string(), "title".to_string()]).unwrap(), vec!["home"]);
/// assert!(parent(&[]).is_err());
/// ```
pub fn parent(path: &[String]) -> Result<Vec<String>, DotPathError> {
    if path.is_empty() {
        return Err(DotPathError::NoParent);
    }
    Ok(path[..path.len() - 1].to_vec())
}

/// Get a value from an object tree by path segments.
///
/// Returns `None` if the path runs off the tree or through a non-object.
///
/// # Example
///
/// ```
/// use locale_flatten_dot_path::get;
/// use serde_json::json;
///
/// let doc = json!({"home": {"title": "Tracker"}});
/// let path = vec!["home".to_string(), "title".to_string()];
/// assert_eq!(get(&doc, &path), Some(&json!("Tracker")));
///
/// let missing = vec!["home".to_string(), "missing".to_string()];
/// assert_eq!(get(&doc, &missing), None);
/// ```
pub fn get<'a>(val: &'a Value, path: &[String]) -> Option<&'a Value> {
    let mut current = val;
    for step in path {
        match current {
            Value::Object(map) => current = map.get(step)?,
            _ => return None,
        }
    }
    Some(current)
}

/// Get a value from an object tree by a dotted path string.
///
/// Convenience wrapper splitting the path first.
pub fn get_by_path<'a>(val: &'a Value, path: &str) -> Option<&'a Value> {
    get(val, &split_path(path))
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DotPathError {
    #[error("NO_PARENT")]
    NoParent,
}
