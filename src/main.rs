// SPDX-License-Identifier: PMPL-1.0-or-later

//! langsearch: search a catalog of programming languages by whole word
//!
//! Hosts the landing and results pages on the command line. The results
//! page can run once for a single query or stay open and treat every line
//! of stdin as a new search.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use langsearch::config::Settings;
use langsearch::page::{redirect_url, Effect, PageController, PageEvent, PageMode};
use langsearch::render::{ResultsFormatter, ResultsView, ViewOutputFormat};
use langsearch::{diagnostics, loader, logging};
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

#[derive(Parser)]
#[command(name = "langsearch")]
#[command(version)]
#[command(about = "Whole-word search over a catalog of programming languages")]
#[command(long_about = None)]
struct Cli {
    /// Settings file (YAML). Defaults to ./langsearch.yaml when present
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the results page for a single query
    Search {
        /// Search term
        #[arg(value_name = "QUERY")]
        query: String,

        /// Catalog file or http(s) URL
        #[arg(short, long, value_name = "SOURCE")]
        data: Option<String>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<ViewOutputFormat>,

        /// Write the rendered results to a file (extension added when missing)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Open the results page and search again for every line read from stdin
    Results {
        /// Catalog file or http(s) URL
        #[arg(short, long, value_name = "SOURCE")]
        data: Option<String>,

        /// Page location carrying the initial query, e.g. "results.html?q=Rust"
        #[arg(short, long, value_name = "URL")]
        location: Option<String>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<ViewOutputFormat>,
    },

    /// Submit a query on the landing page and print the results-page URL
    Landing {
        /// Search term
        #[arg(value_name = "QUERY", default_value = "")]
        query: String,

        /// Page to redirect to
        #[arg(long, value_name = "PAGE")]
        results_page: Option<String>,
    },

    /// Check settings and the catalog they point at
    Doctor {
        /// Catalog file or http(s) URL
        #[arg(short, long, value_name = "SOURCE")]
        data: Option<String>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let (mut settings, config_path) =
        Settings::load(cli.config.as_deref()).context("loading settings")?;
    settings.apply_env().context("reading environment")?;

    match cli.command {
        Commands::Search {
            query,
            data,
            format,
            output,
        } => {
            override_settings(&mut settings, data, format);
            let mut page = PageController::new(PageMode::Results, settings.results_page.clone());
            let location = redirect_url(&settings.results_page, &query);
            let loaded = loader::load(&settings.source()).await;
            let effects = page.on_load(location.as_deref(), loaded);
            apply(&effects, settings.format, output.as_deref())?;
            ensure_loaded(&page, &settings)?;
        }

        Commands::Results {
            data,
            location,
            format,
        } => {
            override_settings(&mut settings, data, format);
            let mut page = PageController::new(PageMode::Results, settings.results_page.clone());
            let loaded = loader::load(&settings.source()).await;
            apply(&page.on_load(location.as_deref(), loaded), settings.format, None)?;
            ensure_loaded(&page, &settings)?;

            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = lines.next_line().await.context("reading stdin")? {
                let blank = line.trim().is_empty();
                apply(&page.handle(PageEvent::Input(line)), settings.format, None)?;
                if !blank {
                    let effects = page.handle(PageEvent::Key("Enter".to_string()));
                    apply(&effects, settings.format, None)?;
                }
            }
        }

        Commands::Landing {
            query,
            results_page,
        } => {
            if let Some(page) = results_page {
                settings.results_page = page;
            }
            let mut page = PageController::new(PageMode::Landing, settings.results_page.clone());
            page.handle(PageEvent::Input(query));
            let effects = page.handle(PageEvent::Click);
            if effects.is_empty() {
                println!(
                    "{}",
                    "Search button is disabled: type a search term first.".yellow()
                );
            }
            apply(&effects, settings.format, None)?;
        }

        Commands::Doctor { data } => {
            override_settings(&mut settings, data, None);
            diagnostics::run_self_diagnostics(&settings, config_path.as_deref()).await?;
        }
    }

    Ok(())
}

/// The load-error view has already been shown; fail the process as well
fn ensure_loaded(page: &PageController, settings: &Settings) -> Result<()> {
    if !page.is_loaded() {
        bail!("catalog could not be loaded from {}", settings.source());
    }
    Ok(())
}

fn override_settings(
    settings: &mut Settings,
    data: Option<String>,
    format: Option<ViewOutputFormat>,
) {
    if let Some(data) = data {
        settings.data = data;
    }
    if let Some(format) = format {
        settings.format = format;
    }
}

/// Apply controller effects to the terminal (or an output file)
fn apply(effects: &[Effect], format: ViewOutputFormat, output: Option<&Path>) -> Result<()> {
    for effect in effects {
        match effect {
            Effect::Render(view) => show(view, format, output)?,
            Effect::Navigate(url) => println!("{}", url),
            Effect::SetSubmitEnabled(enabled) => debug!(enabled, "submit button toggled"),
        }
    }
    Ok(())
}

fn show(view: &ResultsView, format: ViewOutputFormat, output: Option<&Path>) -> Result<()> {
    match (output, format) {
        (Some(path), _) => {
            let path = format.output_path(path);
            let content = format.serialize(view)?;
            std::fs::write(&path, content)
                .with_context(|| format!("writing {}", path.display()))?;
            println!("Results saved to: {}", path.display());
        }
        (None, ViewOutputFormat::Text) => ResultsFormatter::new().print(view),
        (None, _) => println!("{}", format.serialize(view)?),
    }
    Ok(())
}
