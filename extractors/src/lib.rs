//! Extractors Crate
//!
//! This crate provides flat key/value extraction from structured-looking
//! text. It scans with regular expressions and line splitting; it does not
//! parse a grammar, track nesting or handle escapes.
//!
//! # Architecture
//!
//! - **Types**: records, reports, errors and the `Extractor` trait live in
//!   the `shared-types` crate
//! - **Implementations**: the per-format scanners and the dispatching
//!   `StructuredTextExtractor` live in this crate
//! - **Collaborators**: `source` reads files into memory, `summary` folds
//!   many reports into one output
//!
//! # Available Extractors
//!
//! - `JsonExtractor`: `"key": value` pairs, value up to the next comma or line end
//! - `XmlExtractor`: `<tag>value</tag>` elements with plain-text bodies
//! - `CsvExtractor`: `key,value` lines split at the first delimiter
//!
//! # Example
//!
//! ```rust,ignore
//! use extractors::StructuredTextExtractor;
//! use shared_types::SourceFormat;
//!
//! let extractor = StructuredTextExtractor::with_defaults()?;
//! let report = extractor.extract(SourceFormat::Xml, "<name>Alice</name>");
//! ```

pub mod source;
pub mod structured_text;
pub mod summary;

// Re-export commonly used types
pub use source::{read_source, read_source_bytes};
pub use structured_text::{
    CsvExtractor, ExtractorConfig, JsonExtractor, StructuredTextExtractor, XmlExtractor,
};
pub use summary::{render_report, render_summary, write_summary};

// Re-export the Extractor trait from shared-types for convenience
pub use shared_types::Extractor;
