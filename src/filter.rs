// SPDX-License-Identifier: PMPL-1.0-or-later

//! Filter engine: pure predicate + ordering over the entry set
//!
//! An entry passes when every set filter agrees: category equality, tag
//! membership, and a lower-cased substring match of the query against the
//! localized title, localized summary, or the space-joined tag list.
//! Passing entries sort descending by date. Entries with unparsable or
//! missing dates order after all dated entries (treated as earliest),
//! ties stay in document order.

use crate::i18n::Lang;
use crate::types::{Entry, TextField};
use chrono::NaiveDate;

/// Active filter state. All three dimensions compose as a conjunction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub category: Option<String>,
    pub tag: Option<String>,
    pub query: String,
}

impl Filters {
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.tag.is_none() && self.query.trim().is_empty()
    }
}

/// Apply filters and sort. Pure: inputs are untouched, the output is a
/// fresh ordering of borrowed entries.
pub fn apply<'a>(entries: &'a [Entry], filters: &Filters, lang: Lang) -> Vec<&'a Entry> {
    let query = filters.query.trim().to_lowercase();
    let mut list: Vec<&Entry> = entries
        .iter()
        .filter(|entry| matches(entry, filters, &query, lang))
        .collect();
    // Stable sort: None (unparsable) orders below every real date, so it
    // lands at the tail of the descending view.
    list.sort_by(|a, b| sort_key(b).cmp(&sort_key(a)));
    list
}

fn sort_key(entry: &Entry) -> Option<NaiveDate> {
    entry.parsed_date()
}

fn matches(entry: &Entry, filters: &Filters, query: &str, lang: Lang) -> bool {
    if let Some(category) = &filters.category {
        if &entry.category != category {
            return false;
        }
    }
    if let Some(tag) = &filters.tag {
        if !entry.tags.iter().any(|t| t == tag) {
            return false;
        }
    }
    if !query.is_empty() {
        let title = entry.text(TextField::Title, lang).to_lowercase();
        let summary = entry.text(TextField::Summary, lang).to_lowercase();
        let tags = entry.tags.join(" ").to_lowercase();
        if !title.contains(query) && !summary.contains(query) && !tags.contains(query) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<Entry> {
        serde_json::from_str(
            r#"[
            {"id":"e1","title":"Outage","category":"system","severity":"critical",
             "date":"2024-01-05","tags":["db","latency"]},
            {"id":"e2","title":"Patch rollout","category":"security",
             "date":"2024-03-10","tags":["db"]},
            {"id":"e3","title":"Quarterly review","category":"system",
             "date":"2024-02-20","tags":[]},
            {"id":"e4","title":"Undated note","category":"system","date":"not-a-date"}
        ]"#,
        )
        .unwrap()
    }

    fn ids(list: &[&Entry]) -> Vec<String> {
        list.iter().map(|entry| entry.id.clone()).collect()
    }

    #[test]
    fn unfiltered_view_sorts_descending_with_undated_last() {
        let entries = entries();
        let list = apply(&entries, &Filters::default(), Lang::En);
        assert_eq!(ids(&list), ["e2", "e3", "e1", "e4"]);
    }

    #[test]
    fn category_filter_restricts_and_clearing_restores() {
        let entries = entries();
        let filtered = apply(
            &entries,
            &Filters {
                category: Some("system".into()),
                ..Filters::default()
            },
            Lang::En,
        );
        assert_eq!(ids(&filtered), ["e3", "e1", "e4"]);

        let cleared = apply(&entries, &Filters::default(), Lang::En);
        assert_eq!(ids(&cleared), ["e2", "e3", "e1", "e4"]);
    }

    #[test]
    fn tag_filter_requires_membership() {
        let entries = entries();
        let filtered = apply(
            &entries,
            &Filters {
                tag: Some("latency".into()),
                ..Filters::default()
            },
            Lang::En,
        );
        assert_eq!(ids(&filtered), ["e1"]);
    }

    #[test]
    fn query_matches_title_case_insensitively() {
        let entries = entries();
        let hit = apply(
            &entries,
            &Filters {
                query: "outage".into(),
                ..Filters::default()
            },
            Lang::En,
        );
        assert_eq!(ids(&hit), ["e1"]);

        let miss = apply(
            &entries,
            &Filters {
                query: "zzz".into(),
                ..Filters::default()
            },
            Lang::En,
        );
        assert!(miss.is_empty());
    }

    #[test]
    fn query_matches_tags_and_summary() {
        let entries: Vec<Entry> = serde_json::from_str(
            r#"[
            {"id":"a","summary":{"en":"Database failover drill"},"date":"2024-01-01"},
            {"id":"b","tags":["failover"],"date":"2024-01-02"}
        ]"#,
        )
        .unwrap();
        let hit = apply(
            &entries,
            &Filters {
                query: "failover".into(),
                ..Filters::default()
            },
            Lang::En,
        );
        assert_eq!(ids(&hit), ["b", "a"]);
    }

    #[test]
    fn filters_compose_as_conjunction() {
        let entries = entries();
        let filtered = apply(
            &entries,
            &Filters {
                category: Some("system".into()),
                query: "review".into(),
                ..Filters::default()
            },
            Lang::En,
        );
        assert_eq!(ids(&filtered), ["e3"]);
    }

    #[test]
    fn output_borrows_input_without_mutation() {
        let entries = entries();
        let before: Vec<String> = entries.iter().map(|e| e.id.clone()).collect();
        let _ = apply(&entries, &Filters::default(), Lang::En);
        let after: Vec<String> = entries.iter().map(|e| e.id.clone()).collect();
        assert_eq!(before, after);
    }
}
