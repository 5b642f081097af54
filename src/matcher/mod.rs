// SPDX-License-Identifier: PMPL-1.0-or-later

//! Query matching over a loaded catalog
//!
//! Matching is a stable filter: results keep catalog order and nothing is
//! ranked or deduplicated.

pub mod pattern;

use crate::types::{Catalog, LanguageRecord};
use tracing::{debug, warn};

pub use pattern::WordPattern;

/// Result of running a query against a catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<'a> {
    /// The query was empty after trimming
    EmptyQuery,
    /// A real query that matched nothing
    NoMatches,
    /// Matching records, in catalog order
    Matches(Vec<&'a LanguageRecord>),
}

impl<'a> SearchOutcome<'a> {
    pub fn matches(&self) -> &[&'a LanguageRecord] {
        match self {
            SearchOutcome::Matches(records) => records,
            SearchOutcome::EmptyQuery | SearchOutcome::NoMatches => &[],
        }
    }
}

/// Run `query` against `catalog`
pub fn match_catalog<'a>(query: &str, catalog: &'a Catalog) -> SearchOutcome<'a> {
    let pattern = match WordPattern::new(query) {
        Ok(Some(pattern)) => pattern,
        Ok(None) => return SearchOutcome::EmptyQuery,
        Err(err) => {
            // Only reachable for queries past the regex size limit
            warn!(error = %err, "query could not be compiled; treating as no match");
            return SearchOutcome::NoMatches;
        }
    };

    let matches = filter(&pattern, catalog);
    debug!(
        query = pattern.term(),
        matches = matches.len(),
        catalog = catalog.len(),
        "search finished"
    );

    if matches.is_empty() {
        SearchOutcome::NoMatches
    } else {
        SearchOutcome::Matches(matches)
    }
}

pub fn filter<'a>(pattern: &WordPattern, catalog: &'a Catalog) -> Vec<&'a LanguageRecord> {
    catalog
        .iter()
        .filter(|record| pattern.matches_record(record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            LanguageRecord::new("Go", &["systems"], "A language."),
            LanguageRecord::new("Python", &["scripting"], "Used for Go integrations."),
        ])
    }

    #[test]
    fn blank_query_is_empty_not_no_matches() {
        let catalog = catalog();
        assert_eq!(match_catalog("", &catalog), SearchOutcome::EmptyQuery);
        assert_eq!(match_catalog("   ", &catalog), SearchOutcome::EmptyQuery);
    }

    #[test]
    fn empty_catalog_never_matches() {
        assert_eq!(
            match_catalog("Go", &Catalog::empty()),
            SearchOutcome::NoMatches
        );
    }

    #[test]
    fn matches_by_name_and_description_in_order() {
        let catalog = catalog();
        let outcome = match_catalog("Go", &catalog);
        let names: Vec<_> = outcome.matches().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Go", "Python"]);
    }
}
