// SPDX-License-Identifier: PMPL-1.0-or-later

//! Self-diagnostics: checks the settings and the catalog they point at

use crate::config::{Settings, ENV_LOG};
use crate::loader::{self, CatalogSource};
use crate::types::Catalog;
use anyhow::{anyhow, Result};
use colored::*;
use std::env;
use std::path::Path;

pub async fn run_self_diagnostics(settings: &Settings, config_path: Option<&Path>) -> Result<()> {
    println!("langsearch self-diagnostics");

    let checks = collect(settings, config_path).await;

    println!();
    for entry in &checks {
        entry.print();
    }

    if checks.iter().any(|entry| entry.level == Level::Error) {
        Err(anyhow!("self-diagnostics reported issues"))
    } else {
        Ok(())
    }
}

/// Run every check without printing anything
pub async fn collect(settings: &Settings, config_path: Option<&Path>) -> Vec<Diagnostic> {
    let mut checks = vec![
        Diagnostic::ok("version", format!("langsearch {}", env!("CARGO_PKG_VERSION"))),
        check_config(config_path),
    ];

    let source = settings.source();
    match loader::load(&source).await {
        Ok(catalog) => {
            checks.push(Diagnostic::ok(
                "catalog",
                format!("{} records from {}", catalog.len(), source),
            ));
            checks.push(check_links(&catalog));
            checks.push(check_names(&catalog));
        }
        Err(err) => checks.push(Diagnostic::error("catalog", format!("{}", err))),
    }

    checks.push(check_results_page(settings, &source));
    checks.push(check_log_filter());
    checks
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Ok,
    Warn,
    Error,
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub label: &'static str,
    pub level: Level,
    pub detail: String,
}

impl Diagnostic {
    fn new(label: &'static str, level: Level, detail: String) -> Self {
        Self {
            label,
            level,
            detail,
        }
    }

    fn ok(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    fn print(&self) {
        let tag = match self.level {
            Level::Ok => self.level.tag().green(),
            Level::Warn => self.level.tag().yellow(),
            Level::Error => self.level.tag().red(),
        };
        println!("  [{}] {:16} {}", tag, self.label, self.detail);
    }
}

impl Level {
    fn tag(&self) -> &'static str {
        match self {
            Level::Ok => "OK",
            Level::Warn => "WARN",
            Level::Error => "ERR",
        }
    }
}

fn check_config(path: Option<&Path>) -> Diagnostic {
    match path {
        Some(path) => Diagnostic::ok("settings file", format!("{} loaded", path.display())),
        None => Diagnostic::warning(
            "settings file",
            "none found, using defaults and environment".to_string(),
        ),
    }
}

fn check_links(catalog: &Catalog) -> Diagnostic {
    let missing: Vec<&str> = catalog
        .records_without_link()
        .map(|record| record.name.as_str())
        .collect();
    if missing.is_empty() {
        Diagnostic::ok("links", "every record has a link".to_string())
    } else {
        Diagnostic::warning(
            "links",
            format!(
                "{} record(s) render without a link: {}",
                missing.len(),
                missing.join(", ")
            ),
        )
    }
}

fn check_names(catalog: &Catalog) -> Diagnostic {
    let unnamed = catalog
        .iter()
        .filter(|record| record.name.trim().is_empty())
        .count();
    if unnamed == 0 {
        Diagnostic::ok("names", "every record has a name".to_string())
    } else {
        Diagnostic::warning("names", format!("{} record(s) have no name", unnamed))
    }
}

fn check_results_page(settings: &Settings, source: &CatalogSource) -> Diagnostic {
    let page = settings.results_page.trim();
    if page.is_empty() {
        return Diagnostic::error("results page", "results_page is empty".to_string());
    }

    // Only meaningful when serving the pages from the same local directory
    // as the catalog
    if let CatalogSource::File(data) = source {
        let beside = data
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(page);
        if !beside.is_file() && !page.contains("://") {
            return Diagnostic::warning(
                "results page",
                format!("{} (not found next to the catalog)", page),
            );
        }
    }
    Diagnostic::ok("results page", page.to_string())
}

fn check_log_filter() -> Diagnostic {
    match env::var(ENV_LOG) {
        Ok(value) if !value.trim().is_empty() => {
            Diagnostic::ok("log filter", format!("{}={}", ENV_LOG, value))
        }
        _ => Diagnostic::warning(
            "log filter",
            format!("not set (set {} to tune logging)", ENV_LOG),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LanguageRecord;

    #[test]
    fn missing_links_are_reported_by_name() {
        let catalog = Catalog::new(vec![
            LanguageRecord::new("Go", &[], "").with_link("https://go.dev"),
            LanguageRecord::new("Mystery", &[], ""),
        ]);
        let check = check_links(&catalog);
        assert_eq!(check.level, Level::Warn);
        assert!(check.detail.contains("Mystery"));
        assert!(!check.detail.contains("Go,"));
    }

    #[test]
    fn empty_results_page_is_an_error() {
        let settings = Settings {
            results_page: " ".to_string(),
            ..Settings::default()
        };
        let check = check_results_page(&settings, &settings.source());
        assert_eq!(check.level, Level::Error);
    }
}
