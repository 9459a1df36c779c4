//! Named property source container.

use serde::Serialize;

use crate::flatten::FlatMap;

/// A named, queryable set of flattened configuration properties.
///
/// Wraps the flat map produced by [`flatten`](crate::flatten) together with
/// the caller-supplied source name. Iteration order is the document
/// traversal order of the original tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertySource {
    name: String,
    properties: FlatMap,
}

impl PropertySource {
    /// Create a property source from a name and an already-flattened map.
    pub fn new(name: impl Into<String>, properties: FlatMap) -> Self {
        Self {
            name: name.into(),
            properties,
        }
    }

    /// The name this source was registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a property by its flattened key (e.g. `"server.port"`).
    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Whether the source contains the given key.
    pub fn contains(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Iterate over `(key, value)` pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Property keys in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    /// Number of properties in the source.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether the source holds no properties.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Consume the source and return the underlying flat map.
    pub fn into_properties(self) -> FlatMap {
        self.properties
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PropertySource {
        let mut map = FlatMap::new();
        map.insert("server.host".to_string(), "localhost".to_string());
        map.insert("server.port".to_string(), "8080".to_string());
        PropertySource::new("application", map)
    }

    #[test]
    fn test_lookup_by_key() {
        let source = sample();
        assert_eq!(source.get("server.host"), Some("localhost"));
        assert_eq!(source.get("server.missing"), None);
        assert!(source.contains("server.port"));
    }

    #[test]
    fn test_iteration_preserves_order() {
        let source = sample();
        let keys: Vec<&str> = source.keys().collect();
        assert_eq!(keys, vec!["server.host", "server.port"]);
    }

    #[test]
    fn test_name_and_len() {
        let source = sample();
        assert_eq!(source.name(), "application");
        assert_eq!(source.len(), 2);
        assert!(!source.is_empty());
    }
}
