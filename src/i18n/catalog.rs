// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation catalog for spark-journal.
//!
//! Embeds all UI chrome strings for both supported languages as static
//! tables. Lookup is O(n) on the key list, which is fine for the handful
//! of keys here — this runs per render pass, not in a hot loop.

use crate::types::Severity;
use serde::{Deserialize, Serialize};

/// Supported display languages.
///
/// Hebrew is the primary language (the viewer boots in it); English is
/// the secondary. Toggling flips between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    He,
    En,
}

impl Lang {
    /// ISO 639-1 two-letter code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::He => "he",
            Lang::En => "en",
        }
    }

    /// Parse an ISO 639-1 code. Returns `None` for unsupported codes.
    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "he" => Some(Lang::He),
            "en" => Some(Lang::En),
            _ => None,
        }
    }

    /// The other language of the pair.
    pub fn toggled(&self) -> Lang {
        match self {
            Lang::He => Lang::En,
            Lang::En => Lang::He,
        }
    }

    /// Text direction hint: Hebrew is right-to-left.
    pub fn dir(&self) -> &'static str {
        match self {
            Lang::He => "rtl",
            Lang::En => "ltr",
        }
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ─── Translation Lookup ─────────────────────────────────────────────

/// Look up a UI chrome key in the specified language.
///
/// Falls back to the other language if the key is missing, and to the
/// empty string if it is missing there too (never panics).
pub fn t(lang: Lang, key: &str) -> &'static str {
    if let Some(value) = lookup(catalog_for(lang), key) {
        return value;
    }
    if let Some(value) = lookup(catalog_for(lang.toggled()), key) {
        return value;
    }
    ""
}

/// Localized display label for a severity level.
pub fn severity_label(lang: Lang, severity: Severity) -> &'static str {
    let key = match severity {
        Severity::Critical => "sev.critical",
        Severity::Warning => "sev.warning",
        Severity::Info => "sev.info",
        Severity::Success => "sev.success",
    };
    t(lang, key)
}

fn lookup(catalog: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    for &(k, v) in catalog {
        if k == key {
            return Some(v);
        }
    }
    None
}

fn catalog_for(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::He => HE,
        Lang::En => EN,
    }
}

// ─── Hebrew (primary language) ──────────────────────────────────────

const HE: &[(&str, &str)] = &[
    ("ui.all", "הכל"),
    ("ui.search", "חיפוש..."),
    ("ui.no_results", "לא נמצאו רשומות"),
    ("ui.no_results_sub", "נסה לשנות את החיפוש או הפילטר"),
    ("ui.related", "רשומות קשורות"),
    ("ui.filtering", "מסנן:"),
    ("ui.entries", "רשומות"),
    ("ui.load_failed", "טעינת הנתונים נכשלה"),
    ("sev.critical", "קריטי"),
    ("sev.warning", "אזהרה"),
    ("sev.info", "מידע"),
    ("sev.success", "הצלחה"),
];

// ─── English ────────────────────────────────────────────────────────

const EN: &[(&str, &str)] = &[
    ("ui.all", "All"),
    ("ui.search", "Search..."),
    ("ui.no_results", "No entries found"),
    ("ui.no_results_sub", "Try adjusting your search or filters"),
    ("ui.related", "Related Entries"),
    ("ui.filtering", "Filtering:"),
    ("ui.entries", "entries"),
    ("ui.load_failed", "Failed to load data"),
    ("sev.critical", "Critical"),
    ("sev.warning", "Warning"),
    ("sev.info", "Info"),
    ("sev.success", "Success"),
];
