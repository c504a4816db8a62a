//! Pattern matching logic.
//!
//! # Responsibilities
//! - Match a registered pattern against a logical fragment
//! - Normalize both sides (slash trimming) before comparison
//!
//! # Design Decisions
//! - Patterns match the whole fragment: literal equality first, then a
//!   whole-anchored regex
//! - No partial or prefix matching, no capture groups
//! - Patterns are not validated as regexes at registration; a pattern that
//!   fails to compile simply only matches literally

use regex::Regex;

use crate::location::trim_slashes;

/// A pattern compiled for fragment matching.
///
/// Duplicate detection elsewhere compares pattern text literally; the
/// compiled form exists only for matching.
#[derive(Debug, Clone)]
pub struct Pattern {
    text: String,
    regex: Option<Regex>,
}

impl Pattern {
    pub fn new(text: &str) -> Self {
        let trimmed = trim_slashes(text);
        let regex = Regex::new(&format!("^(?:{})$", trimmed)).ok();
        Self {
            text: text.to_string(),
            regex,
        }
    }

    /// The pattern exactly as registered.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// True if the whole fragment matches this pattern.
    pub fn matches(&self, fragment: &str) -> bool {
        let fragment = trim_slashes(fragment);
        if trim_slashes(&self.text) == fragment {
            return true;
        }
        match &self.regex {
            Some(regex) => regex.is_match(fragment),
            None => false,
        }
    }
}
