//! Shared grammar for the dev-doc document layout.
//!
//! The reader and writer both depend on this table; it is the single place
//! where the section titles, frontmatter key order, and layout delimiters
//! are defined.

/// Frontmatter and horizontal-rule delimiter line.
pub const DELIMITER: &str = "---";

/// Opening/closing marker of a fenced code block.
pub const FENCE: &str = "```";

/// Document kind written into the frontmatter `mode:` line.
pub const DOC_MODE: &str = "dev_doc";

/// Timestamp format for the frontmatter `created_at:` line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Frontmatter keys, in the order the block requires them.
pub const FRONTMATTER_KEYS: [&str; 4] = ["function_name", "language", "mode", "created_at"];

/// The seven body sections of a dev-doc document, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Function,
    Explanation,
    UsageExample,
    TimeComplexity,
    Insight,
    KnownLimitations,
    Tags,
}

impl Section {
    /// All sections in canonical document order.
    pub const ALL: [Self; 7] = [
        Self::Function,
        Self::Explanation,
        Self::UsageExample,
        Self::TimeComplexity,
        Self::Insight,
        Self::KnownLimitations,
        Self::Tags,
    ];

    /// Literal header title, emoji included. Matching is case- and
    /// emoji-exact; treat this table as versioned rather than editing
    /// titles in place.
    pub fn title(self) -> &'static str {
        match self {
            Self::Function => "🧠 Function",
            Self::Explanation => "🔍 Explanation",
            Self::UsageExample => "🧪 Usage Example",
            Self::TimeComplexity => "⏱️ Time Complexity",
            Self::Insight => "💡 Insight",
            Self::KnownLimitations => "⚠️ Known Limitations",
            Self::Tags => "🏷️ Tags",
        }
    }

    /// Whether the section body renders as a fenced code block tagged with
    /// the record's language.
    pub fn is_fenced(self) -> bool {
        matches!(self, Self::Function | Self::UsageExample)
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sections_have_distinct_titles() {
        let titles: std::collections::HashSet<&str> =
            Section::ALL.iter().map(|s| s.title()).collect();
        assert_eq!(titles.len(), Section::ALL.len());
    }

    #[test]
    fn test_only_code_sections_are_fenced() {
        assert!(Section::Function.is_fenced());
        assert!(Section::UsageExample.is_fenced());
        assert!(!Section::Explanation.is_fenced());
        assert!(!Section::Tags.is_fenced());
    }

    #[test]
    fn test_display_matches_title() {
        assert_eq!(Section::Insight.to_string(), "💡 Insight");
    }
}
