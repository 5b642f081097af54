// SPDX-License-Identifier: PMPL-1.0-or-later

//! Catalog loading
//!
//! A catalog is read once per session from a local file or an `http(s)`
//! URL. There is a single attempt: no retry and no timeout. A load either
//! yields the whole catalog or an error; the caller decides how to show it.

use crate::types::Catalog;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

/// Where the catalog document lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Http(Url),
}

impl CatalogSource {
    /// `http://` and `https://` values are URLs; anything else is a path
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        let lower = value.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            if let Ok(url) = Url::parse(value) {
                return CatalogSource::Http(url);
            }
        }
        CatalogSource::File(PathBuf::from(value))
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::File(path) => write!(f, "{}", path.display()),
            CatalogSource::Http(url) => write!(f, "{}", url),
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error {status} from {url}")]
    Status {
        url: Url,
        status: reqwest::StatusCode,
    },

    #[error("invalid catalog document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load the catalog from `source`
pub async fn load(source: &CatalogSource) -> Result<Catalog, LoadError> {
    debug!(%source, "loading catalog");

    let body = match source {
        CatalogSource::File(path) => {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| LoadError::Io {
                    path: path.clone(),
                    source,
                })?
        }
        CatalogSource::Http(url) => fetch(url).await?,
    };

    let catalog = Catalog::from_json_str(&body)?;
    info!(%source, records = catalog.len(), "catalog loaded");
    Ok(catalog)
}

async fn fetch(url: &Url) -> Result<String, LoadError> {
    let transport = |source| LoadError::Transport {
        url: url.clone(),
        source,
    };

    let response = reqwest::get(url.clone()).await.map_err(transport)?;
    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status {
            url: url.clone(),
            status,
        });
    }
    response.text().await.map_err(transport)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_distinguishes_urls_from_paths() {
        assert_eq!(
            CatalogSource::parse("https://example.org/data.json"),
            CatalogSource::Http(Url::parse("https://example.org/data.json").unwrap())
        );
        assert_eq!(
            CatalogSource::parse("data/languages.json"),
            CatalogSource::File(PathBuf::from("data/languages.json"))
        );
        assert_eq!(
            CatalogSource::parse("HTTP://EXAMPLE.ORG/x.json"),
            CatalogSource::Http(Url::parse("http://example.org/x.json").unwrap())
        );
    }

    #[test]
    fn display_shows_location() {
        assert_eq!(
            CatalogSource::parse("data.json").to_string(),
            "data.json"
        );
    }
}
