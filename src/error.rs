/// Centralized error types for devdoc using thiserror
///
/// Hard errors abort the operation that hit them; soft parse issues are
/// collected alongside the record and never abort a parse.
use thiserror::Error;

use crate::grammar::Section;

/// Result alias for fallible devdoc operations.
pub type Result<T> = std::result::Result<T, DocError>;

/// Hard failures surfaced to the caller.
#[derive(Error, Debug)]
pub enum DocError {
    #[error("Failed to read document '{path}': {source}")]
    ReadFailed {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to create directory '{path}': {source}")]
    DirectoryCreationFailed {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to write document '{path}': {source}")]
    WriteFailed {
        path: String,
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to configuration loading
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file '{path}': {source}")]
    ReadFailed {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse configuration: {0}")]
    ParseFailed(#[from] toml::de::Error),
}

/// Soft structural issues found while parsing a document.
///
/// A partial or drifted document still yields a record; these describe what
/// was missing or unrecognized along the way.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseIssue {
    /// The frontmatter block is absent, misordered, or otherwise does not
    /// match the required four-line shape. All frontmatter fields stay
    /// unset.
    #[error("frontmatter block missing or malformed")]
    MalformedFrontmatter,

    /// A known section header was not found; its field stays unset.
    #[error("section '{0}' not found")]
    MissingSection(Section),

    /// A `###` header outside any code fence that is not in the section
    /// table, usually a sign the document was produced from a newer or
    /// edited template.
    #[error("unrecognized section header: {0}")]
    UnknownSection(String),
}
