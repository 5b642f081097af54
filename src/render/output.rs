// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization of rendered views for printing or export

use crate::render::formatter::{to_html, ResultsFormatter};
use crate::render::ResultsView;
use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewOutputFormat {
    #[default]
    Text,
    Html,
    Json,
    Yaml,
}

impl ViewOutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Some(ViewOutputFormat::Text),
            "html" | "htm" => Some(ViewOutputFormat::Html),
            "json" => Some(ViewOutputFormat::Json),
            "yaml" | "yml" => Some(ViewOutputFormat::Yaml),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ViewOutputFormat::Text => "txt",
            ViewOutputFormat::Html => "html",
            ViewOutputFormat::Json => "json",
            ViewOutputFormat::Yaml => "yaml",
        }
    }

    /// `path`, with this format's extension added if it has none
    pub fn output_path(&self, path: &Path) -> PathBuf {
        if path.extension().is_some() {
            path.to_path_buf()
        } else {
            path.with_extension(self.extension())
        }
    }

    pub fn serialize(&self, view: &ResultsView) -> Result<String> {
        match self {
            ViewOutputFormat::Text => Ok(ResultsFormatter::plain().to_text(view)),
            ViewOutputFormat::Html => Ok(to_html(view)),
            ViewOutputFormat::Json => Ok(serde_json::to_string_pretty(view)?),
            ViewOutputFormat::Yaml => Ok(serde_yaml::to_string(view)?),
        }
    }
}
