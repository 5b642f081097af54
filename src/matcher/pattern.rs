// SPDX-License-Identifier: PMPL-1.0-or-later

//! Whole-word pattern built from a literal query

use crate::types::LanguageRecord;
use regex::{Regex, RegexBuilder};

/// A case-insensitive, whole-word pattern for one search term.
///
/// The term is escaped before it is embedded, so `C++` or `C#` are plain
/// text. The boundaries are written out as "string edge or non-word
/// character" rather than `\b`: `\b` needs a word character on one side,
/// which would stop a term ending in `+` or `#` from ever matching before a
/// space.
#[derive(Debug, Clone)]
pub struct WordPattern {
    term: String,
    regex: Regex,
}

impl WordPattern {
    /// Build a pattern for `term`. The term is trimmed; `Ok(None)` means it
    /// was empty.
    pub fn new(term: &str) -> Result<Option<Self>, regex::Error> {
        let term = term.trim();
        if term.is_empty() {
            return Ok(None);
        }

        let regex = RegexBuilder::new(&format!(r"(?:^|\W){}(?:$|\W)", regex::escape(term)))
            .case_insensitive(true)
            .build()?;

        Ok(Some(Self {
            term: term.to_string(),
            regex,
        }))
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Name, space-joined tags and description are checked independently
    pub fn matches_record(&self, record: &LanguageRecord) -> bool {
        self.is_match(&record.name)
            || self.is_match(&record.searchable_tags())
            || self.is_match(&record.description)
    }
}
