//! Canonical document rendering.
//!
//! The writer is the reader's exact inverse: it emits the frontmatter block
//! and the seven sections in grammar order, with horizontal rules between
//! them, so a rendered document parses back to the record it came from.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Local};
use tracing::info;

use crate::config::DefaultsConfig;
use crate::error::{DocError, Result};
use crate::grammar::{
    Section, DELIMITER, DOC_MODE, FENCE, FRONTMATTER_KEYS, TIMESTAMP_FORMAT,
};
use crate::record::DocRecord;

/// Source of the `created_at` timestamp.
///
/// Production code uses [`SystemClock`]; tests substitute [`FixedClock`]
/// for reproducible output.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Wall-clock time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A fixed timestamp, for deterministic output.
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Renders a [`DocRecord`] into dev-doc markdown.
pub struct DocumentWriter {
    defaults: DefaultsConfig,
    clock: Box<dyn Clock>,
}

impl DocumentWriter {
    pub fn new() -> Self {
        Self::with_defaults(DefaultsConfig::default())
    }

    /// Use configured substitution values for absent fields.
    pub fn with_defaults(defaults: DefaultsConfig) -> Self {
        Self {
            defaults,
            clock: Box::new(SystemClock),
        }
    }

    /// Replace the timestamp source.
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Render the canonical document text. Pure apart from the clock read
    /// when `created_at` is absent.
    ///
    /// Absent fields are substituted: `function_name` and `language` from
    /// the configured defaults, `created_at` from the clock, body sections
    /// with the empty string. `mode` is always the canonical constant, no
    /// matter what the record carries.
    pub fn render(&self, record: &DocRecord) -> String {
        let function_name = record
            .function_name
            .as_deref()
            .unwrap_or(&self.defaults.function_name);
        let language = record.language.as_deref().unwrap_or(&self.defaults.language);
        let created_at = record
            .created_at
            .clone()
            .unwrap_or_else(|| self.clock.now().format(TIMESTAMP_FORMAT).to_string());

        let frontmatter_values = [function_name, language, DOC_MODE, created_at.as_str()];
        let mut doc = String::from(DELIMITER);
        doc.push('\n');
        for (key, value) in FRONTMATTER_KEYS.iter().zip(frontmatter_values) {
            doc.push_str(&format!("{key}: {value}\n"));
        }
        doc.push_str(DELIMITER);
        doc.push('\n');

        for (idx, section) in Section::ALL.iter().enumerate() {
            let body = record.section_value(*section).unwrap_or("").trim();

            doc.push('\n');
            doc.push_str(&format!("### {}:\n\n", section.title()));
            if section.is_fenced() {
                doc.push_str(&format!("{FENCE}{language}\n{body}\n{FENCE}\n"));
            } else {
                doc.push_str(body);
                doc.push('\n');
            }

            if idx + 1 < Section::ALL.len() {
                doc.push_str(&format!("\n{DELIMITER}\n"));
            }
        }

        doc
    }

    /// Render `record` and write it to `path`, creating missing parent
    /// directories. The full text is rendered in memory first, then written
    /// in a single call; a failed write never leaves a partially rendered
    /// document behind.
    pub fn write(&self, record: &DocRecord, path: &Path) -> Result<()> {
        let rendered = self.render(record);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| DocError::DirectoryCreationFailed {
                path: parent.display().to_string(),
                source,
            })?;
        }

        fs::write(path, rendered).map_err(|source| DocError::WriteFailed {
            path: path.display().to_string(),
            source,
        })?;

        info!("wrote document to {}", path.display());
        Ok(())
    }
}

impl Default for DocumentWriter {
    fn default() -> Self {
        Self::new()
    }
}
