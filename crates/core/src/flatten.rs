//! Flatten a nested message tree into dot-path keys, deduplicating values
//! already provided by the document's `common` block.
//!
//! The `common` block is processed first, in full: its leaves land in the
//! output *without* the `common.` prefix and register their values as
//! canonical deduplication targets. Only then is the rest of the document
//! traversed; any leaf whose value matches a registered common value is
//! dropped from the output and redirected, via the key map, to the
//! common-derived key that already holds it.
//!
//! Processing order is the document's insertion order throughout. It decides
//! which common key becomes the dedup target when several common leaves
//! share a value (first seen wins), so loaders must preserve key order.

use indexmap::IndexMap;
use locale_flatten_dot_path::join_key;
use serde_json::{Map, Value};

use crate::scalar::Scalar;

/// Top-level key whose subtree provides canonical shared messages.
pub const COMMON_KEY: &str = "common";

/// Result of flattening a message document.
#[derive(Debug, Clone, PartialEq)]
pub struct FlattenResult {
    /// The flat dot-path mapping, in emission order: common-derived entries
    /// first, then the rest of the document in traversal order.
    pub flat: Map<String, Value>,
    /// Original dotted path of every input leaf (common leaves keep their
    /// `common.` prefix here) to the output key holding its value.
    pub key_map: IndexMap<String, String>,
    redirects: usize,
}

impl FlattenResult {
    /// Number of non-common leaves that were deduplicated away, i.e. whose
    /// value was already provided by a common key and which therefore
    /// contributed no entry of their own to the flat mapping.
    pub fn redirect_count(&self) -> usize {
        self.redirects
    }
}

/// Flatten `doc` into a single-level dot-path mapping plus the key map
/// recording where every original leaf ended up.
///
/// The input is only borrowed and never mutated; the `common` key is
/// skipped in place during the general pass rather than being extracted.
/// Recursion depth equals the document's nesting depth. Documents that came
/// through a JSON parse are already bounded by the parser's recursion
/// limit; callers hand-building deeper trees own that contract.
///
/// # Example
///
/// ```
/// use locale_flatten_core::flatten;
/// use serde_json::json;
///
/// let doc = json!({
///     "home": {"save": "Save"},
///     "common": {"save": "Save", "cancel": "Cancel"}
/// });
/// let result = flatten(doc.as_object().unwrap());
///
/// assert_eq!(result.flat.get("save"), Some(&json!("Save")));
/// assert_eq!(result.flat.get("home.save"), None);
/// assert_eq!(result.key_map["home.save"], "save");
/// ```
pub fn flatten(doc: &Map<String, Value>) -> FlattenResult {
    let mut flattener = Flattener {
        flat: Map::new(),
        key_map: IndexMap::new(),
        index: IndexMap::new(),
        redirects: 0,
    };

    // Pass 1: the common block, when present and an object, in full.
    if let Some(Value::Object(common)) = doc.get(COMMON_KEY) {
        flattener.flatten_common(common, "");
    }

    // Pass 2: everything else, in insertion order. A non-object `common`
    // is an ordinary leaf and flows through here.
    for (key, value) in doc {
        if key == COMMON_KEY && value.is_object() {
            continue;
        }
        flattener.general_value(key.clone(), value);
    }

    FlattenResult {
        flat: flattener.flat,
        key_map: flattener.key_map,
        redirects: flattener.redirects,
    }
}

/// Accumulators threaded through both traversal passes.
struct Flattener {
    flat: Map<String, Value>,
    key_map: IndexMap<String, String>,
    /// Leaf value of the common block to the final key of the *first*
    /// common leaf seen with that value. Read-only after the common pass.
    index: IndexMap<Scalar, String>,
    redirects: usize,
}

impl Flattener {
    /// Depth-first over the common block. `prefix` is the dotted path
    /// accumulated below `common`, so output keys omit the `common.`
    /// segment while key map entries keep it.
    fn flatten_common(&mut self, node: &Map<String, Value>, prefix: &str) {
        for (key, value) in node {
            let local = join_key(prefix, key);
            match value {
                Value::Object(child) => self.flatten_common(child, &local),
                leaf => {
                    // Common entries always land in the output; they are
                    // never deduplicated against each other on write.
                    self.flat.insert(local.clone(), leaf.clone());
                    self.key_map
                        .insert(join_key(COMMON_KEY, &local), local.clone());
                    if let Some(scalar) = Scalar::from_value(leaf) {
                        // First common key seen with a value stays the
                        // dedup target for that value.
                        self.index.entry(scalar).or_insert(local);
                    }
                }
            }
        }
    }

    /// Depth-first over one non-common value at its accumulated dotted
    /// `path`, applying value-based deduplication at the leaves.
    fn general_value(&mut self, path: String, value: &Value) {
        match value {
            Value::Object(child) => {
                for (key, value) in child {
                    self.general_value(join_key(&path, key), value);
                }
            }
            leaf => {
                let target = Scalar::from_value(leaf)
                    .and_then(|scalar| self.index.get(&scalar).cloned());
                match target {
                    // The value is already provided by a common key:
                    // redirect instead of emitting.
                    Some(common_key) => {
                        self.key_map.insert(path, common_key);
                        self.redirects += 1;
                    }
                    // Otherwise emit. On a key collision with a
                    // common-derived entry this overwrites it, and the
                    // common entry's key map record keeps naming the key.
                    None => {
                        self.flat.insert(path.clone(), leaf.clone());
                        self.key_map.insert(path.clone(), path);
                    }
                }
            }
        }
    }
}
