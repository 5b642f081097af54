// SPDX-License-Identifier: PMPL-1.0-or-later

//! Results formatting for the terminal and as HTML markup

use crate::render::{CardView, ResultsView};
use colored::*;

pub struct ResultsFormatter {
    color: bool,
}

impl ResultsFormatter {
    /// Formatter for an interactive terminal
    pub fn new() -> Self {
        Self { color: true }
    }

    /// Formatter producing text without ANSI escapes
    pub fn plain() -> Self {
        Self { color: false }
    }

    pub fn print(&self, view: &ResultsView) {
        println!("{}", self.to_text(view));
    }

    pub fn to_text(&self, view: &ResultsView) -> String {
        match view {
            ResultsView::Status { message } => self.status(message),
            ResultsView::Cards { cards } => cards
                .iter()
                .map(|card| self.card_text(card))
                .collect::<Vec<_>>()
                .join("\n\n"),
        }
    }

    fn status(&self, message: &str) -> String {
        if self.color {
            message.yellow().to_string()
        } else {
            message.to_string()
        }
    }

    fn card_text(&self, card: &CardView) -> String {
        let mut lines = Vec::new();
        lines.push(if self.color {
            card.title.bold().cyan().to_string()
        } else {
            card.title.clone()
        });

        if let Some(year) = &card.year_line {
            lines.push(format!("  {}", year));
        }

        let label = card.topics_label.trim_end();
        let label = if self.color {
            label.bold().to_string()
        } else {
            label.to_string()
        };
        lines.push(format!("  {} {}", label, card.topics_text));

        if let Some(link) = &card.link {
            let href = if self.color {
                link.href.underline().to_string()
            } else {
                link.href.clone()
            };
            lines.push(format!("  {}: {}", link.label, href));
        }

        lines.join("\n")
    }
}

impl Default for ResultsFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a view as the HTML fragment that fills the results container
pub fn to_html(view: &ResultsView) -> String {
    match view {
        ResultsView::Status { message } => {
            format!("<p class=\"status-message\">{}</p>", html_escape(message))
        }
        ResultsView::Cards { cards } => cards
            .iter()
            .map(card_html)
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn card_html(card: &CardView) -> String {
    let mut lines = vec![
        "<article>".to_string(),
        format!("  <h2>{}</h2>", html_escape(&card.title)),
    ];
    if let Some(year) = &card.year_line {
        lines.push(format!("  <p>{}</p>", html_escape(year)));
    }
    lines.push(format!(
        "  <p><strong>{}</strong>{}</p>",
        html_escape(&card.topics_label),
        html_escape(&card.topics_text)
    ));
    if let Some(link) = &card.link {
        lines.push(format!(
            "  <a href=\"{}\" target=\"{}\" rel=\"{}\">{}</a>",
            html_escape(&link.href),
            html_escape(&link.target),
            html_escape(&link.rel),
            html_escape(&link.label)
        ));
    }
    lines.push("</article>".to_string());
    lines.join("\n")
}

/// Escape text for use in element content and double-quoted attributes
pub fn html_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::LinkView;

    fn card() -> CardView {
        CardView {
            title: "C++".to_string(),
            year_line: Some("Year created: 1985".to_string()),
            topics_label: "Topics: ".to_string(),
            topics_text: "systems <fast> & close to metal".to_string(),
            link: Some(LinkView {
                href: "https://isocpp.org/?a=1&b=\"2\"".to_string(),
                label: "Learn more about C++".to_string(),
                target: "_blank".to_string(),
                rel: "noopener noreferrer".to_string(),
            }),
        }
    }

    #[test]
    fn plain_text_card() {
        let view = ResultsView::Cards { cards: vec![card()] };
        let text = ResultsFormatter::plain().to_text(&view);
        assert_eq!(
            text,
            "C++\n  Year created: 1985\n  Topics: systems <fast> & close to metal\n  \
             Learn more about C++: https://isocpp.org/?a=1&b=\"2\""
        );
    }

    #[test]
    fn html_escapes_text_and_attributes() {
        let view = ResultsView::Cards { cards: vec![card()] };
        let html = to_html(&view);
        assert!(html.contains("<h2>C++</h2>"));
        assert!(html.contains("<strong>Topics: </strong>systems &lt;fast&gt; &amp; close to metal"));
        assert!(html.contains(
            "<a href=\"https://isocpp.org/?a=1&amp;b=&quot;2&quot;\" target=\"_blank\" rel=\"noopener noreferrer\">"
        ));
    }

    #[test]
    fn html_status_message() {
        let view = ResultsView::status("Nothing <here>");
        assert_eq!(
            to_html(&view),
            "<p class=\"status-message\">Nothing &lt;here&gt;</p>"
        );
    }
}
