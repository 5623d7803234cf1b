//! Document parsing: frontmatter extraction and section scanning.
//!
//! The frontmatter block has a fixed four-line shape and is matched with a
//! single anchored regex. Section bodies are scanned with a small per-section
//! state machine instead of lookahead patterns, so fences, blank lines, and
//! header-like text inside code blocks behave predictably.

use std::fs;
use std::path::Path;

use regex::Regex;
use tracing::{debug, warn};

use crate::error::{DocError, ParseIssue, Result};
use crate::grammar::{Section, DELIMITER, FENCE, FRONTMATTER_KEYS};
use crate::record::DocRecord;

/// Build the frontmatter pattern from the key table. Keys are positional
/// and exact; each value runs to the end of its line and is trimmed after
/// capture.
fn frontmatter_pattern() -> String {
    let key_lines: Vec<String> = FRONTMATTER_KEYS
        .iter()
        .map(|key| format!(r"{key}:([^\n]*)"))
        .collect();
    format!(r"---[ \t]*\r?\n{}\n---", key_lines.join(r"\n"))
}

/// Outcome of parsing document text: the extracted record plus any soft
/// structural issues encountered along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    pub record: DocRecord,
    pub issues: Vec<ParseIssue>,
}

/// Parses dev-doc markdown into a [`DocRecord`].
pub struct DocumentReader {
    frontmatter: Regex,
}

impl DocumentReader {
    pub fn new() -> Self {
        Self {
            frontmatter: Regex::new(&frontmatter_pattern()).unwrap(),
        }
    }

    /// Read and parse the document at `path`.
    ///
    /// Returns `Ok(None)` when the path does not exist; this is an absent
    /// result, not a failure. Any other I/O problem is a hard error. Soft
    /// parse issues are logged and the (possibly partial) record returned.
    pub fn read(&self, path: &Path) -> Result<Option<DocRecord>> {
        if !path.exists() {
            warn!("document not found: {}", path.display());
            return Ok(None);
        }

        let text = fs::read_to_string(path).map_err(|source| DocError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;

        let parsed = self.parse(&text);
        for issue in &parsed.issues {
            warn!("{}: {issue}", path.display());
        }
        debug!("parsed document {}", path.display());

        Ok(Some(parsed.record))
    }

    /// Parse document text. Pure: the same text always yields the same
    /// result, and structural problems degrade into unset fields rather
    /// than failures.
    pub fn parse(&self, text: &str) -> Parsed {
        let mut record = DocRecord::default();
        let mut issues = Vec::new();

        match self.frontmatter.captures(text) {
            Some(caps) => {
                record.function_name = Some(caps[1].trim().to_string());
                record.language = Some(caps[2].trim().to_string());
                record.mode = Some(caps[3].trim().to_string());
                record.created_at = Some(caps[4].trim().to_string());
            }
            None => issues.push(ParseIssue::MalformedFrontmatter),
        }

        let lines: Vec<&str> = text.lines().collect();
        for section in Section::ALL {
            match extract_section(&lines, section) {
                Some(content) => *record.section_value_mut(section) = Some(content),
                None => issues.push(ParseIssue::MissingSection(section)),
            }
        }

        for header in unknown_headers(&lines) {
            issues.push(ParseIssue::UnknownSection(header));
        }

        Parsed { record, issues }
    }
}

impl Default for DocumentReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-section scanner states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scan {
    SeekHeader,
    InFence,
    InPlainBody,
    Done,
}

/// Extract one section's body, or `None` when its header never appears.
///
/// The body starts at the first non-blank line after the header. A fence
/// opener there switches to fenced mode, where only a closing fence (or end
/// of document) terminates the body; a plain body runs to the next header
/// or horizontal rule. The result is whitespace-trimmed with interior
/// formatting intact.
fn extract_section(lines: &[&str], section: Section) -> Option<String> {
    let mut state = Scan::SeekHeader;
    // Fence parity while seeking, so header-like text inside an earlier
    // section's code block never matches.
    let mut seek_in_fence = false;
    let mut body: Vec<&str> = Vec::new();

    for line in lines {
        match state {
            Scan::SeekHeader => {
                if line.trim_start().starts_with(FENCE) {
                    seek_in_fence = !seek_in_fence;
                } else if !seek_in_fence && is_section_header(line, section) {
                    state = Scan::InPlainBody;
                }
            }
            Scan::InPlainBody => {
                if body.is_empty() {
                    if line.trim().is_empty() {
                        continue;
                    }
                    if line.trim_start().starts_with(FENCE) {
                        // The opener and its language tag are not content.
                        state = Scan::InFence;
                        continue;
                    }
                }
                if line.starts_with("###") || line.trim() == DELIMITER {
                    state = Scan::Done;
                } else {
                    body.push(line);
                }
            }
            Scan::InFence => {
                if line.trim_start().starts_with(FENCE) {
                    state = Scan::Done;
                } else {
                    body.push(line);
                }
            }
            Scan::Done => break,
        }
    }

    if state == Scan::SeekHeader {
        return None;
    }
    Some(body.join("\n").trim().to_string())
}

/// Header line shape: `###`, optional whitespace, the exact title, `:`.
/// Trailing text after the colon is tolerated and ignored, so documents
/// that still carry the function name on the header line parse cleanly.
fn is_section_header(line: &str, section: Section) -> bool {
    let Some(rest) = line.strip_prefix("###") else {
        return false;
    };
    rest.trim_start()
        .strip_prefix(section.title())
        .is_some_and(|after| after.starts_with(':'))
}

/// Collect `###` headers outside code fences that match no known section.
/// These usually come from a drifted or newer document template.
fn unknown_headers(lines: &[&str]) -> Vec<String> {
    let mut found = Vec::new();
    let mut in_fence = false;

    for line in lines {
        if line.trim_start().starts_with(FENCE) {
            in_fence = !in_fence;
            continue;
        }
        if in_fence || !line.starts_with("###") {
            continue;
        }
        if !Section::ALL
            .iter()
            .any(|section| is_section_header(line, *section))
        {
            found.push(line.trim().to_string());
        }
    }

    found
}
