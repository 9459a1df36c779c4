//! Flattening of a parsed value tree into dotted/indexed property keys.
//!
//! This is the core of the crate: a depth-first, pre-order walk that turns
//! nested objects and arrays into a single-level ordered map. Object members
//! extend the path with `.name`, array elements with `[index]`, and every
//! scalar leaf produces exactly one entry.

use indexmap::IndexMap;
use serde_json::Value;

/// Ordered mapping from path strings to property values.
///
/// Insertion order follows document traversal order, so iterating the map
/// replays the leaves in the order they were declared.
pub type FlatMap = IndexMap<String, String>;

/// Flatten a value tree into an ordered path → value map.
///
/// Container nodes are transparent: they contribute key fragments but no
/// entries of their own. Scalars are rendered as strings: a string leaf
/// keeps its literal content, `null` becomes the empty string, and every
/// other scalar uses its canonical textual form.
///
/// ```
/// use serde_json::json;
///
/// let map = hjson_source::flatten(&json!({"a": "x", "b": {"c": "y"}}));
/// assert_eq!(map.get("a").map(String::as_str), Some("x"));
/// assert_eq!(map.get("b.c").map(String::as_str), Some("y"));
/// ```
pub fn flatten(root: &Value) -> FlatMap {
    let mut result = FlatMap::new();
    build_flattened_map(&mut result, root, None);
    log::trace!("flattened value tree into {} entries", result.len());
    result
}

/// Recursive worker. `prefix` is `None` only at the document root.
fn build_flattened_map(result: &mut FlatMap, value: &Value, prefix: Option<&str>) {
    match value {
        Value::Object(members) => {
            for (name, child) in members {
                let path = match prefix {
                    Some(p) => format!("{p}.{name}"),
                    None => name.clone(),
                };
                build_flattened_map(result, child, Some(&path));
            }
        }
        Value::Array(elements) => {
            // A root-level array gets no leading segment, yielding keys
            // like "[0]". Degenerate but kept as a valid address.
            for (index, child) in elements.iter().enumerate() {
                let path = format!("{}[{index}]", prefix.unwrap_or(""));
                build_flattened_map(result, child, Some(&path));
            }
        }
        Value::String(s) => {
            result.insert(leaf_key(prefix), s.clone());
        }
        Value::Null => {
            // Null and empty string collapse to the same value downstream.
            result.insert(leaf_key(prefix), String::new());
        }
        // Numbers, booleans, and any future scalar kind fall back to
        // their canonical rendering.
        other => {
            result.insert(leaf_key(prefix), other.to_string());
        }
    }
}

/// A scalar at the document root has no prefix and lands under `""`.
fn leaf_key(prefix: Option<&str>) -> String {
    prefix.unwrap_or("").to_string()
}
