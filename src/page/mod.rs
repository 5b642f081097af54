// SPDX-License-Identifier: PMPL-1.0-or-later

//! Page controller: turns user events into effects for the host
//!
//! The controller owns the loaded catalog and the state of the search
//! input. It never touches an output device; each call returns the
//! [`Effect`]s the host has to apply, in order.

pub mod location;

use crate::loader::LoadError;
use crate::matcher;
use crate::render::{self, ResultsView};
use crate::types::Catalog;
use tracing::{debug, error, warn};

pub use location::{query_from_location, redirect_url, QUERY_PARAM};

/// Which page the controller drives, decided once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMode {
    /// Collects a query and hands it to the results page
    Landing,
    /// Loads the catalog and shows matches
    Results,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// The search input now holds this text
    Input(String),
    /// The submit button was pressed
    Click,
    /// A key was released in the search input
    Key(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Replace the results area with this view
    Render(ResultsView),
    /// Leave for another page
    Navigate(String),
    SetSubmitEnabled(bool),
}

pub struct PageController {
    mode: PageMode,
    results_page: String,
    catalog: Catalog,
    loaded: bool,
    input: String,
    submit_enabled: bool,
}

impl PageController {
    pub fn new(mode: PageMode, results_page: impl Into<String>) -> Self {
        Self {
            mode,
            results_page: results_page.into(),
            catalog: Catalog::empty(),
            loaded: false,
            input: String::new(),
            // The landing page starts with the button disabled until
            // something is typed
            submit_enabled: mode == PageMode::Results,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    /// Finish the results-page load.
    ///
    /// On success the catalog is stored, the input is pre-filled from the
    /// `q` parameter of `location` and the first search is rendered. On
    /// failure the catalog stays empty and the load-error status is shown.
    pub fn on_load(
        &mut self,
        location: Option<&str>,
        loaded: Result<Catalog, LoadError>,
    ) -> Vec<Effect> {
        if self.mode != PageMode::Results {
            debug!("ignoring catalog load on the landing page");
            return Vec::new();
        }

        match loaded {
            Ok(_) if self.loaded => {
                warn!("catalog already loaded; keeping the first one");
                Vec::new()
            }
            Ok(catalog) => {
                self.catalog = catalog;
                self.loaded = true;
                self.input = location.and_then(query_from_location).unwrap_or_default();
                vec![Effect::Render(self.search())]
            }
            Err(err) => {
                error!(error = %err, "failed to load the language catalog");
                vec![Effect::Render(render::render_load_error())]
            }
        }
    }

    pub fn handle(&mut self, event: PageEvent) -> Vec<Effect> {
        match event {
            PageEvent::Input(text) => self.on_input(text),
            PageEvent::Click if self.submit_enabled => self.submit(),
            PageEvent::Click => Vec::new(),
            PageEvent::Key(key) if key == "Enter" => self.submit(),
            PageEvent::Key(_) => Vec::new(),
        }
    }

    /// Run the current input against the catalog
    pub fn search(&self) -> ResultsView {
        render::render(&matcher::match_catalog(&self.input, &self.catalog))
    }

    fn on_input(&mut self, text: String) -> Vec<Effect> {
        let blank = text.trim().is_empty();
        self.input = text;
        self.submit_enabled = !blank;

        let mut effects = vec![Effect::SetSubmitEnabled(!blank)];
        if blank && self.mode == PageMode::Results {
            effects.push(Effect::Render(self.search()));
        }
        effects
    }

    fn submit(&self) -> Vec<Effect> {
        match self.mode {
            PageMode::Results => vec![Effect::Render(self.search())],
            PageMode::Landing => redirect_url(&self.results_page, &self.input)
                .map(Effect::Navigate)
                .into_iter()
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LanguageRecord;

    fn catalog() -> Catalog {
        Catalog::new(vec![LanguageRecord::new("Rust", &["systems"], "Safe.")
            .with_official_link("https://www.rust-lang.org")])
    }

    #[test]
    fn landing_button_starts_disabled() {
        let page = PageController::new(PageMode::Landing, "results.html");
        assert!(!page.submit_enabled());
        let page = PageController::new(PageMode::Results, "results.html");
        assert!(page.submit_enabled());
    }

    #[test]
    fn second_load_is_ignored() {
        let mut page = PageController::new(PageMode::Results, "results.html");
        page.on_load(None, Ok(catalog()));
        let effects = page.on_load(None, Ok(Catalog::empty()));
        assert!(effects.is_empty());
        assert_eq!(page.catalog().len(), 1);
    }

    #[test]
    fn other_keys_do_nothing() {
        let mut page = PageController::new(PageMode::Results, "results.html");
        page.on_load(None, Ok(catalog()));
        page.handle(PageEvent::Input("Rust".into()));
        assert!(page.handle(PageEvent::Key("a".into())).is_empty());
    }
}
