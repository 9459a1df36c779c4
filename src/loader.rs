//! Loading of Hjson resources into property sources.

use std::fs;
use std::io::Read;
use std::path::Path;

use log::debug;
use serde_json::Value;

use crate::error::{LoadError, Result};
use crate::flatten::flatten;
use crate::source::PropertySource;

/// Strategy interface for turning a resource into a [`PropertySource`].
///
/// A configuration layer can hold several loaders behind this trait and
/// dispatch on file extension.
pub trait PropertySourceLoader {
    /// File extensions the loader supports, without the leading dot.
    fn file_extensions(&self) -> &'static [&'static str];

    /// Load the resource at `path` into a named property source.
    ///
    /// `profile` selects a named sub-document in multi-document formats.
    /// Loaders for simple formats must answer a profile request with
    /// `Ok(None)` rather than a partial source.
    ///
    /// Returns `Ok(None)` when the resource produces no properties.
    fn load(&self, name: &str, path: &Path, profile: Option<&str>)
    -> Result<Option<PropertySource>>;
}

/// Loads `.hjson` files into property sources.
///
/// The document is parsed into a value tree and flattened into dotted and
/// indexed keys (see [`flatten`]). Hjson is a single-document format, so
/// any profile request yields no source.
#[derive(Debug, Default, Clone, Copy)]
pub struct HjsonSourceLoader;

impl HjsonSourceLoader {
    /// Create a new loader.
    pub fn new() -> Self {
        Self
    }

    /// Load from already-decoded document text.
    ///
    /// `name` doubles as the resource label in errors. Returns `Ok(None)`
    /// when the document contains no leaf values.
    pub fn load_from_str(&self, name: &str, text: &str) -> Result<Option<PropertySource>> {
        let root: Value = deser_hjson::from_str(text).map_err(|source| LoadError::Parse {
            resource: name.to_string(),
            source,
        })?;

        let properties = flatten(&root);
        if properties.is_empty() {
            debug!("{name}: document has no properties, producing no source");
            return Ok(None);
        }

        debug!("{name}: loaded {} properties", properties.len());
        Ok(Some(PropertySource::new(name, properties)))
    }

    /// Load from a pre-acquired byte stream, decoding it as UTF-8.
    pub fn load_from_reader(
        &self,
        name: &str,
        mut reader: impl Read,
    ) -> Result<Option<PropertySource>> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|source| LoadError::Read {
                resource: name.to_string(),
                source,
            })?;
        let text = String::from_utf8(bytes).map_err(|source| LoadError::Encoding {
            resource: name.to_string(),
            source,
        })?;
        self.load_from_str(name, &text)
    }
}

impl PropertySourceLoader for HjsonSourceLoader {
    fn file_extensions(&self) -> &'static [&'static str] {
        &["hjson"]
    }

    fn load(
        &self,
        name: &str,
        path: &Path,
        profile: Option<&str>,
    ) -> Result<Option<PropertySource>> {
        if let Some(profile) = profile {
            // Single-document format: a profile variant cannot exist.
            debug!("{name}: profile {profile:?} requested, producing no source");
            return Ok(None);
        }

        let resource = path.display().to_string();
        let bytes = fs::read(path).map_err(|source| LoadError::Read {
            resource: resource.clone(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|source| LoadError::Encoding {
            resource,
            source,
        })?;
        self.load_from_str(name, &text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(content.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn test_file_extensions() {
        assert_eq!(HjsonSourceLoader::new().file_extensions(), &["hjson"]);
    }

    #[test]
    fn test_load_from_file() {
        let file = write_temp("{\n  server: {\n    host: localhost\n    port: 8080\n  }\n}\n");
        let source = HjsonSourceLoader::new()
            .load("application", file.path(), None)
            .expect("load should succeed")
            .expect("source should be produced");

        assert_eq!(source.name(), "application");
        assert_eq!(source.get("server.host"), Some("localhost"));
        assert_eq!(source.get("server.port"), Some("8080"));
    }

    #[test]
    fn test_profile_request_produces_no_source() {
        let file = write_temp("{\n  a: 1\n}\n");
        let result = HjsonSourceLoader::new()
            .load("application", file.path(), Some("dev"))
            .expect("profile request is not an error");
        assert!(result.is_none());
    }

    #[test]
    fn test_empty_document_produces_no_source() {
        let result = HjsonSourceLoader::new()
            .load_from_str("empty", "{}")
            .expect("empty document is not an error");
        assert!(result.is_none());
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let result =
            HjsonSourceLoader::new().load("missing", Path::new("/no/such/file.hjson"), None);
        assert!(matches!(result, Err(LoadError::Read { .. })));
    }

    #[test]
    fn test_malformed_document_is_a_parse_error() {
        let result = HjsonSourceLoader::new().load_from_str("broken", "{ a: [1, }");
        assert!(matches!(result, Err(LoadError::Parse { .. })));
    }

    #[test]
    fn test_invalid_utf8_is_an_encoding_error() {
        let bytes: &[u8] = &[0x7b, 0xff, 0xfe, 0x7d];
        let result = HjsonSourceLoader::new().load_from_reader("binary", bytes);
        assert!(matches!(result, Err(LoadError::Encoding { .. })));
    }

    #[test]
    fn test_hjson_relaxed_syntax() {
        let text = r#"
        {
            # comment
            unquoted: value
            // another comment
            "quoted": other
            list: [
                one
                two
            ]
        }
        "#;
        let source = HjsonSourceLoader::new()
            .load_from_str("relaxed", text)
            .expect("relaxed syntax should parse")
            .expect("source should be produced");

        assert_eq!(source.get("unquoted"), Some("value"));
        assert_eq!(source.get("quoted"), Some("other"));
        assert_eq!(source.get("list[0]"), Some("one"));
        assert_eq!(source.get("list[1]"), Some("two"));
    }

    #[test]
    fn test_load_from_reader() {
        let text = "{\n  key: value\n}\n";
        let source = HjsonSourceLoader::new()
            .load_from_reader("stream", text.as_bytes())
            .expect("load should succeed")
            .expect("source should be produced");
        assert_eq!(source.get("key"), Some("value"));
    }

    #[test]
    fn test_null_and_scalars_through_the_loader() {
        let source = HjsonSourceLoader::new()
            .load_from_str("scalars", "{\n  n: null\n  flag: true\n  count: 3\n}\n")
            .expect("load should succeed")
            .expect("source should be produced");

        assert_eq!(source.get("n"), Some(""));
        assert_eq!(source.get("flag"), Some("true"));
        assert_eq!(source.get("count"), Some("3"));
    }
}
