//! # hjson-source
//!
//! Load Hjson configuration files into flat, ordered property sources.
//!
//! Hjson is a relaxed JSON superset (comments, unquoted keys, optional
//! commas) aimed at hand-written configuration. This crate parses an Hjson
//! document into a value tree and flattens it into a single-level mapping
//! of dotted/indexed keys to string values, the shape expected by generic
//! key-value configuration layers.
//!
//! ## Features
//!
//! - Deterministic flattening: `b.c`, `list[0]`, one entry per scalar leaf
//! - Insertion order preserved end to end (document order is iteration order)
//! - Loading from files, readers, or in-memory text
//! - Named property sources with lookup and iteration accessors
//! - Extension-based loader registration behind a small trait
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hjson_source::{HjsonSourceLoader, PropertySourceLoader};
//! use std::path::Path;
//!
//! let loader = HjsonSourceLoader::new();
//! let source = loader
//!     .load("application", Path::new("application.hjson"), None)
//!     .unwrap()
//!     .expect("document has properties");
//!
//! if let Some(port) = source.get("server.port") {
//!     println!("port = {port}");
//! }
//! ```
//!
//! ## Modules
//!
//! - [`flatten`] - Value-tree flattening into dotted/indexed keys
//! - [`loader`] - Hjson resource loading and the loader trait
//! - [`source`] - Named property source container
//! - [`error`] - Error types and result definitions

/// Error types and result definitions for property source loading.
pub mod error;

/// Value-tree flattening into dotted/indexed property keys.
pub mod flatten;

/// Hjson resource loading and the loader strategy trait.
pub mod loader;

/// Named property source container.
pub mod source;

// Re-export main types for convenience
pub use error::{LoadError, Result};
pub use flatten::{FlatMap, flatten};
pub use loader::{HjsonSourceLoader, PropertySourceLoader};
pub use source::PropertySource;
