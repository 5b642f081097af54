// SPDX-License-Identifier: PMPL-1.0-or-later

//! Rendering of search outcomes
//!
//! `render` is pure: it turns a [`SearchOutcome`] into a [`ResultsView`]
//! describing everything the results area should show. The adapters in
//! [`formatter`] and [`output`] turn that view into terminal text, HTML,
//! JSON or YAML. Each view replaces the previous one entirely.

pub mod formatter;
pub mod output;

use crate::matcher::SearchOutcome;
use crate::types::LanguageRecord;
use serde::{Deserialize, Serialize};
use tracing::warn;

pub use formatter::ResultsFormatter;
pub use output::ViewOutputFormat;

pub const EMPTY_QUERY_MESSAGE: &str =
    "No search term entered. Type something in the search box to begin.";
pub const NO_MATCHES_MESSAGE: &str = "No languages found for the search term.";
pub const LOAD_FAILED_MESSAGE: &str =
    "Could not load the language data. Check the log for details.";
pub const TOPICS_LABEL: &str = "Topics: ";

pub const LINK_TARGET: &str = "_blank";
pub const LINK_REL: &str = "noopener noreferrer";

/// Everything the results area displays after one render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResultsView {
    Status { message: String },
    Cards { cards: Vec<CardView> },
}

impl ResultsView {
    pub fn status(message: impl Into<String>) -> Self {
        ResultsView::Status {
            message: message.into(),
        }
    }

    pub fn cards(&self) -> &[CardView] {
        match self {
            ResultsView::Cards { cards } => cards,
            ResultsView::Status { .. } => &[],
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ResultsView::Status { message } => Some(message),
            ResultsView::Cards { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_line: Option<String>,
    pub topics_label: String,
    pub topics_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<LinkView>,
}

/// A "learn more" link, opened in a new browsing context without an opener
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkView {
    pub href: String,
    pub label: String,
    pub target: String,
    pub rel: String,
}

pub fn render(outcome: &SearchOutcome<'_>) -> ResultsView {
    match outcome {
        SearchOutcome::EmptyQuery => ResultsView::status(EMPTY_QUERY_MESSAGE),
        SearchOutcome::NoMatches => ResultsView::status(NO_MATCHES_MESSAGE),
        SearchOutcome::Matches(records) if records.is_empty() => {
            ResultsView::status(NO_MATCHES_MESSAGE)
        }
        SearchOutcome::Matches(records) => ResultsView::Cards {
            cards: records.iter().map(|record| card(record)).collect(),
        },
    }
}

pub fn render_load_error() -> ResultsView {
    ResultsView::status(LOAD_FAILED_MESSAGE)
}

fn card(record: &LanguageRecord) -> CardView {
    let link = record.resolved_link().map(|href| LinkView {
        href: href.to_string(),
        label: format!("Learn more about {}", record.name),
        target: LINK_TARGET.to_string(),
        rel: LINK_REL.to_string(),
    });
    if link.is_none() {
        warn!(name = %record.name, "record has neither officialLink nor link");
    }

    CardView {
        title: record.name.clone(),
        year_line: record
            .year_created
            .map(|year| format!("Year created: {}", year)),
        topics_label: TOPICS_LABEL.to_string(),
        topics_text: format!("{} {}", record.tags.join(", "), record.description),
        link,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcomes_without_records_render_distinct_messages() {
        assert_eq!(
            render(&SearchOutcome::EmptyQuery).message(),
            Some(EMPTY_QUERY_MESSAGE)
        );
        assert_eq!(
            render(&SearchOutcome::NoMatches).message(),
            Some(NO_MATCHES_MESSAGE)
        );
        assert_ne!(EMPTY_QUERY_MESSAGE, NO_MATCHES_MESSAGE);
    }

    #[test]
    fn card_carries_every_display_field() {
        let record = LanguageRecord::new("Rust", &["systems", "safety"], "Fast and safe.")
            .with_official_link("https://www.rust-lang.org")
            .with_year(2010);
        let view = render(&SearchOutcome::Matches(vec![&record]));
        let card = &view.cards()[0];

        assert_eq!(card.title, "Rust");
        assert_eq!(card.year_line.as_deref(), Some("Year created: 2010"));
        assert_eq!(card.topics_label, "Topics: ");
        assert_eq!(card.topics_text, "systems, safety Fast and safe.");
        let link = card.link.as_ref().unwrap();
        assert_eq!(link.href, "https://www.rust-lang.org");
        assert_eq!(link.label, "Learn more about Rust");
        assert_eq!(link.target, "_blank");
        assert_eq!(link.rel, "noopener noreferrer");
    }

    #[test]
    fn year_line_is_omitted_when_absent() {
        let record = LanguageRecord::new("Zig", &[], "Simple.").with_link("https://ziglang.org");
        let view = render(&SearchOutcome::Matches(vec![&record]));
        assert!(view.cards()[0].year_line.is_none());
    }

    #[test]
    fn record_without_link_renders_without_one() {
        let record = LanguageRecord::new("Mystery", &[], "Unknown origin.");
        let view = render(&SearchOutcome::Matches(vec![&record]));
        assert!(view.cards()[0].link.is_none());
    }
}
