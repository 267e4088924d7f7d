// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for spark-journal
//!
//! The journal document is a single JSON file shaped as
//! `{ "entries": [...], "categories": {...} }`, or a bare entry array
//! for older exports. Entries are immutable for the session once loaded.

use crate::i18n::Lang;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Entry severity, lowest to highest visual weight.
///
/// Unknown severity strings degrade to [`Severity::Info`] rather than
/// failing the whole document load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    #[default]
    Info,
    Success,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Success => "success",
        }
    }

    /// Lenient parse used during document load.
    pub fn from_label(value: &str) -> Severity {
        match value.to_ascii_lowercase().as_str() {
            "critical" => Severity::Critical,
            "warning" => Severity::Warning,
            "success" => Severity::Success,
            _ => Severity::Info,
        }
    }
}

fn lenient_severity<'de, D>(deserializer: D) -> Result<Severity, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().map(Severity::from_label).unwrap_or_default())
}

/// A display string that is either plain or keyed by language code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizedText {
    Plain(String),
    ByLang(HashMap<String, String>),
}

impl LocalizedText {
    /// Resolve for the active language: active code, then English, then
    /// Hebrew, then empty. Plain strings resolve to themselves.
    pub fn resolve(&self, lang: Lang) -> &str {
        match self {
            LocalizedText::Plain(text) => text,
            LocalizedText::ByLang(by_lang) => by_lang
                .get(lang.code())
                .or_else(|| by_lang.get("en"))
                .or_else(|| by_lang.get("he"))
                .map(String::as_str)
                .unwrap_or(""),
        }
    }
}

/// Localizable entry fields addressed by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Title,
    Summary,
    Details,
}

impl TextField {
    pub fn name(&self) -> &'static str {
        match self {
            TextField::Title => "title",
            TextField::Summary => "summary",
            TextField::Details => "details",
        }
    }
}

/// One journal record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_severity")]
    pub severity: Severity,
    /// ISO date string, kept verbatim so formatting failures can fall
    /// back to the stored value.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub title: Option<LocalizedText>,
    #[serde(default)]
    pub summary: Option<LocalizedText>,
    #[serde(default)]
    pub details: Option<LocalizedText>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Ids of related entries; may dangle, in which case they render by id.
    #[serde(default)]
    pub related: Vec<String>,
    /// Unrecognized keys, kept so suffixed overrides like `title_en`
    /// stay addressable by the localization resolver.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Entry {
    /// Localized text for a field.
    ///
    /// Tiers: a suffixed override key (`title_en`), then the per-language
    /// mapping (or plain string) under the field itself, then empty.
    pub fn text(&self, field: TextField, lang: Lang) -> String {
        let suffixed = format!("{}_{}", field.name(), lang.code());
        if let Some(serde_json::Value::String(text)) = self.extra.get(&suffixed) {
            return text.clone();
        }
        let value = match field {
            TextField::Title => &self.title,
            TextField::Summary => &self.summary,
            TextField::Details => &self.details,
        };
        value
            .as_ref()
            .map(|text| text.resolve(lang).to_string())
            .unwrap_or_default()
    }

    /// Parsed calendar date. `None` for missing or unparsable dates.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }
}

/// Parse an ISO date, accepting `YYYY-MM-DD` or a timestamp with that
/// prefix. `None` for missing or unparsable input.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().or_else(|| {
        raw.get(..10)
            .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
    })
}

/// Per-language labels for one category key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(flatten)]
    pub labels: HashMap<String, String>,
}

impl Category {
    /// Label fallback chain: active language, English, Hebrew.
    pub fn label(&self, lang: Lang) -> Option<&str> {
        self.labels
            .get(lang.code())
            .or_else(|| self.labels.get("en"))
            .or_else(|| self.labels.get("he"))
            .map(String::as_str)
    }
}

/// Accepted document shapes: keyed object, or a bare entry array.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Document {
    Keyed {
        #[serde(default)]
        entries: Vec<Entry>,
        #[serde(default)]
        categories: BTreeMap<String, Category>,
    },
    Bare(Vec<Entry>),
}
