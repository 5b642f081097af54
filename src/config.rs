// SPDX-License-Identifier: PMPL-1.0-or-later

//! Settings for langsearch
//!
//! Layered, last one wins: built-in defaults, an optional YAML settings
//! file, `LANGSEARCH_*` environment variables, then command-line flags
//! (applied by the binary).

use crate::loader::CatalogSource;
use crate::render::ViewOutputFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "langsearch.yaml";
pub const DEFAULT_DATA: &str = "data.json";
pub const DEFAULT_RESULTS_PAGE: &str = "results.html";

pub const ENV_DATA: &str = "LANGSEARCH_DATA";
pub const ENV_RESULTS_PAGE: &str = "LANGSEARCH_RESULTS_PAGE";
pub const ENV_FORMAT: &str = "LANGSEARCH_FORMAT";
pub const ENV_LOG: &str = "LANGSEARCH_LOG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("{variable}: unknown output format '{value}' (expected text, html, json or yaml)")]
    InvalidFormat { variable: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Catalog location: file path or http(s) URL
    pub data: String,
    /// Page the landing flow redirects to
    pub results_page: String,
    pub format: ViewOutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data: DEFAULT_DATA.to_string(),
            results_page: DEFAULT_RESULTS_PAGE.to_string(),
            format: ViewOutputFormat::Text,
        }
    }
}

impl Settings {
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Defaults overlaid with a settings file.
    ///
    /// An explicit path must exist. Without one, `langsearch.yaml` in the
    /// working directory is used if present. Returns the file actually read.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>), ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !fallback.is_file() {
                    return Ok((Self::default(), None));
                }
                fallback
            }
        };

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let settings = Self::from_yaml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        Ok((settings, Some(path)))
    }

    /// Apply `LANGSEARCH_*` variables from the process environment
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any variable lookup; blank values are skipped
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key| lookup(key).filter(|value: &String| !value.trim().is_empty());

        if let Some(data) = get(ENV_DATA) {
            self.data = data;
        }
        if let Some(page) = get(ENV_RESULTS_PAGE) {
            self.results_page = page;
        }
        if let Some(value) = get(ENV_FORMAT) {
            self.format =
                ViewOutputFormat::parse(&value).ok_or(ConfigError::InvalidFormat {
                    variable: ENV_FORMAT,
                    value,
                })?;
        }
        Ok(())
    }

    pub fn source(&self) -> CatalogSource {
        CatalogSource::parse(&self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn yaml_overrides_defaults_partially() {
        let settings = Settings::from_yaml_str("data: https://example.org/langs.json\n").unwrap();
        assert_eq!(settings.data, "https://example.org/langs.json");
        assert_eq!(settings.results_page, DEFAULT_RESULTS_PAGE);
        assert_eq!(settings.format, ViewOutputFormat::Text);
    }

    #[test]
    fn empty_yaml_is_defaults() {
        assert_eq!(Settings::from_yaml_str("\n").unwrap(), Settings::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Settings::from_yaml_str("colour: red\n").is_err());
    }

    #[test]
    fn environment_overrides() {
        let env: HashMap<&str, &str> = [
            (ENV_DATA, "langs.json"),
            (ENV_FORMAT, "HTML"),
            (ENV_RESULTS_PAGE, "  "),
        ]
        .into_iter()
        .collect();
        let mut settings = Settings::default();
        settings
            .apply_env_from(|key| env.get(key).map(|value| value.to_string()))
            .unwrap();
        assert_eq!(settings.data, "langs.json");
        assert_eq!(settings.format, ViewOutputFormat::Html);
        assert_eq!(settings.results_page, DEFAULT_RESULTS_PAGE);
    }

    #[test]
    fn bad_format_variable_is_an_error() {
        let mut settings = Settings::default();
        let err = settings
            .apply_env_from(|key| (key == ENV_FORMAT).then(|| "pdf".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("pdf"));
    }
}
