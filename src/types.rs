// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for langsearch
//!
//! A catalog is an ordered list of language records as found in the data
//! file. Loading is deliberately loose: missing text fields default to
//! empty values so one sloppy entry never takes the whole catalog down.
//! Both the English keys (`name`, `description`, `officialLink`,
//! `yearCreated`) and the Portuguese keys used by older data files
//! (`nome`, `descricao`, `link_oficial`, `data_criacao`) are accepted.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One entry of the catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageRecord {
    #[serde(default, alias = "nome", deserialize_with = "deserialize_text")]
    pub name: String,

    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,

    #[serde(default, alias = "descricao", deserialize_with = "deserialize_text")]
    pub description: String,

    #[serde(
        default,
        alias = "official_link",
        alias = "link_oficial",
        deserialize_with = "deserialize_link",
        skip_serializing_if = "Option::is_none"
    )]
    pub official_link: Option<String>,

    #[serde(
        default,
        deserialize_with = "deserialize_link",
        skip_serializing_if = "Option::is_none"
    )]
    pub link: Option<String>,

    #[serde(
        default,
        alias = "year_created",
        alias = "data_criacao",
        deserialize_with = "deserialize_year",
        skip_serializing_if = "Option::is_none"
    )]
    pub year_created: Option<i32>,
}

impl LanguageRecord {
    pub fn new(name: impl Into<String>, tags: &[&str], description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn with_official_link(mut self, link: impl Into<String>) -> Self {
        self.official_link = Some(link.into());
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year_created = Some(year);
        self
    }

    /// URL for the "learn more" link. `official_link` wins over `link`;
    /// empty strings count as absent.
    pub fn resolved_link(&self) -> Option<&str> {
        [self.official_link.as_deref(), self.link.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|link| !link.is_empty())
    }

    /// Tags as a single searchable string, separated by one space
    pub fn searchable_tags(&self) -> String {
        self.tags.join(" ")
    }
}

/// The full ordered set of records loaded for one session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    records: Vec<LanguageRecord>,
}

impl Catalog {
    pub fn new(records: Vec<LanguageRecord>) -> Self {
        Self { records }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a catalog document: a JSON array of records
    pub fn from_json_str(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body)
    }

    pub fn records(&self) -> &[LanguageRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LanguageRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records that will render without a "learn more" link
    pub fn records_without_link(&self) -> impl Iterator<Item = &LanguageRecord> {
        self.records
            .iter()
            .filter(|record| record.resolved_link().is_none())
    }
}

/// Scalars become text; null, arrays and objects become nothing
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn deserialize_link<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

/// A tag list, a single scalar tag, or junk (no tags)
fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let tags = match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().filter_map(scalar_text).collect(),
        other => scalar_text(other).into_iter().collect(),
    };
    Ok(tags)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawYear {
    Number(i64),
    Text(String),
    Other(Value),
}

/// Years show up as numbers, numeric strings, or junk. Anything that is not
/// a usable integer is treated as "no year".
fn deserialize_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let year = match Option::<RawYear>::deserialize(deserializer)? {
        Some(RawYear::Number(value)) => i32::try_from(value).ok(),
        Some(RawYear::Text(text)) => text.trim().parse().ok(),
        Some(RawYear::Other(_)) | None => None,
    };
    Ok(year)
}
