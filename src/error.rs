//! Error types and result definitions for property source loading.

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, LoadError>;

/// Errors that can occur while loading a property source.
///
/// The flattener itself is total and never fails; every variant here comes
/// from the resource boundary (reading, decoding, parsing). Each variant
/// identifies the resource it failed on.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The resource could not be opened or read.
    #[error("failed to read {resource}")]
    Read {
        /// Name or path identifying the resource.
        resource: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The resource bytes are not valid UTF-8.
    #[error("{resource} is not valid UTF-8")]
    Encoding {
        /// Name or path identifying the resource.
        resource: String,
        /// Underlying decoding error.
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// The resource text is not a well-formed Hjson document.
    #[error("failed to parse {resource} as Hjson")]
    Parse {
        /// Name or path identifying the resource.
        resource: String,
        /// Underlying parser error.
        #[source]
        source: deser_hjson::Error,
    },
}
