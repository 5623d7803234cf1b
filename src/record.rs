//! The structured record a dev-doc document is parsed into.

use serde::{Deserialize, Serialize};

use crate::grammar::Section;

/// One function's documentation, as named text fields.
///
/// Every field is optional: `None` means the field was missing or
/// unparseable in the source document, `Some("")` means it was present but
/// empty. The rendered text format cannot express the difference, but the
/// in-memory model keeps the two states apart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocRecord {
    /// Name of the documented function (frontmatter).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_name: Option<String>,

    /// Language tag for the code blocks (frontmatter).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Document kind tag (frontmatter). Read as-is; the writer always
    /// replaces it with the canonical constant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    /// Creation timestamp (frontmatter), `YYYY-MM-DD HH:MM:SS`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Primary code block body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Prose explanation of the function.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,

    /// Usage example code block body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,

    /// Algorithmic cost description (free text, not validated).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity: Option<String>,

    /// Author insight or rationale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insight: Option<String>,

    /// Known limitations or caveats.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limitations: Option<String>,

    /// Comma-separated tags (kept as free text).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

impl DocRecord {
    /// Borrow the body field a section extracts into.
    pub fn section_value(&self, section: Section) -> Option<&str> {
        let slot = match section {
            Section::Function => &self.code,
            Section::Explanation => &self.explanation,
            Section::UsageExample => &self.example,
            Section::TimeComplexity => &self.complexity,
            Section::Insight => &self.insight,
            Section::KnownLimitations => &self.limitations,
            Section::Tags => &self.tags,
        };
        slot.as_deref()
    }

    /// Mutable access to the body field a section extracts into.
    pub fn section_value_mut(&mut self, section: Section) -> &mut Option<String> {
        match section {
            Section::Function => &mut self.code,
            Section::Explanation => &mut self.explanation,
            Section::UsageExample => &mut self.example,
            Section::TimeComplexity => &mut self.complexity,
            Section::Insight => &mut self.insight,
            Section::KnownLimitations => &mut self.limitations,
            Section::Tags => &mut self.tags,
        }
    }

    /// True when no field was populated at all.
    pub fn is_empty(&self) -> bool {
        self.function_name.is_none()
            && self.language.is_none()
            && self.mode.is_none()
            && self.created_at.is_none()
            && Section::ALL
                .iter()
                .all(|section| self.section_value(*section).is_none())
    }
}
