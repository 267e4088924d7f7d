// SPDX-License-Identifier: PMPL-1.0-or-later

//! Document loading and the in-memory entry store
//!
//! The store is populated once from a single JSON document and treated as
//! immutable for the session. A load failure is not retried; callers
//! surface it inline and leave the rest of the surface inert.

use crate::i18n::Lang;
use crate::types::{Category, Document, Entry};
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Loaded journal document: entries in document order plus the category
/// table keyed by id.
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub entries: Vec<Entry>,
    /// Category table. Keys iterate in sorted order, which fixes the
    /// facet panel ordering deterministically.
    pub categories: BTreeMap<String, Category>,
}

impl Store {
    /// Read and parse the journal document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading journal document {}", path.display()))?;
        Self::from_json(&raw)
            .with_context(|| format!("parsing journal document {}", path.display()))
    }

    /// Parse from a JSON string. Accepts the keyed `{entries, categories}`
    /// shape or a bare entry array with no categories.
    pub fn from_json(raw: &str) -> Result<Self> {
        let document: Document = serde_json::from_str(raw)?;
        Ok(match document {
            Document::Keyed {
                entries,
                categories,
            } => Store {
                entries,
                categories,
            },
            Document::Bare(entries) => Store {
                entries,
                categories: BTreeMap::new(),
            },
        })
    }

    /// Look up an entry by id. First match wins; ids are unique within a
    /// loaded document.
    pub fn entry(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Display label for a category id. Unknown ids render as the raw id.
    pub fn category_label(&self, id: &str, lang: Lang) -> String {
        self.categories
            .get(id)
            .and_then(|category| category.label(lang))
            .unwrap_or(id)
            .to_string()
    }
}
