//! # devdoc - Structured Dev-Doc Markdown Tooling
//!
//! A bidirectional converter between an in-memory documentation record and
//! a fixed human-readable markdown layout: a four-line frontmatter block
//! followed by seven emoji-titled sections, two of them fenced code blocks.
//!
//! ## Overview
//!
//! The reader tolerates partial and drifted documents: a missing section or
//! a malformed frontmatter block degrades into unset fields plus soft parse
//! issues, never a failure. The writer is the reader's exact inverse, so
//! parse → render → parse is idempotent on populated fields.
//!
//! ## Modules
//!
//! - [`reader`]: Frontmatter extraction and section scanning
//! - [`writer`]: Canonical document rendering with injected clock
//! - [`grammar`]: Shared section table and layout constants
//! - [`record`]: The [`DocRecord`] field mapping
//! - [`config`]: TOML-backed writer defaults
//! - [`cli`]: `parse` and `convert` subcommands
//! - [`error`]: Hard errors and soft parse issues
//!
//! ## Usage Example
//!
//! ```no_run
//! use std::path::Path;
//! use devdoc::{DocumentReader, DocumentWriter};
//!
//! fn main() -> anyhow::Result<()> {
//!     let reader = DocumentReader::new();
//!     if let Some(record) = reader.read(Path::new("input_docs/add_numbers.md"))? {
//!         DocumentWriter::new().write(&record, Path::new("output_docs/add_numbers.md"))?;
//!     }
//!     Ok(())
//! }
//! ```

/// Command-line interface
pub mod cli;

/// Configuration with writer defaults
pub mod config;

/// Error types and parse issues
pub mod error;

/// Section grammar and layout constants
pub mod grammar;

/// Document parsing
pub mod reader;

/// The documentation record
pub mod record;

/// Document rendering
pub mod writer;

pub use config::{Config, DefaultsConfig};
pub use error::{DocError, ParseIssue, Result};
pub use grammar::Section;
pub use reader::{DocumentReader, Parsed};
pub use record::DocRecord;
pub use writer::{Clock, DocumentWriter, FixedClock, SystemClock};
