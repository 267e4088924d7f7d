// SPDX-License-Identifier: PMPL-1.0-or-later

//! Facet builders: category and tag panels with counts
//!
//! Both panels count over the FULL entry set, not the filtered view —
//! they show what exists, not what is currently displayed. They recompute
//! deterministically from the store on every render pass.

use crate::filter::Filters;
use crate::i18n::{t, Lang};
use crate::store::Store;

/// Most frequent tags shown in the tag panel.
pub const TOP_TAGS: usize = 15;

/// One selectable control in the category panel. `id` is `None` for the
/// synthetic "All" option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFacet {
    pub id: Option<String>,
    pub label: String,
    pub count: usize,
    pub active: bool,
}

/// One toggle control in the tag panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagFacet {
    pub name: String,
    pub count: usize,
    pub active: bool,
}

/// Build the category panel: "All" first with the total entry count, then
/// every known category with its count. Exactly one facet is active; a
/// selected category with no panel entry counts as "All".
pub fn category_facets(store: &Store, filters: &Filters, lang: Lang) -> Vec<CategoryFacet> {
    let selected = filters
        .category
        .as_deref()
        .filter(|id| store.categories.contains_key(*id));
    let mut facets = Vec::with_capacity(store.categories.len() + 1);
    facets.push(CategoryFacet {
        id: None,
        label: t(lang, "ui.all").to_string(),
        count: store.len(),
        active: selected.is_none(),
    });
    for id in store.categories.keys() {
        let count = store
            .entries
            .iter()
            .filter(|entry| &entry.category == id)
            .count();
        facets.push(CategoryFacet {
            id: Some(id.clone()),
            label: store.category_label(id, lang),
            count,
            active: selected == Some(id.as_str()),
        });
    }
    facets
}

/// Build the tag panel: occurrence counts over all entries, descending,
/// ties in discovery order, capped at [`TOP_TAGS`]. At most one facet is
/// active.
pub fn tag_facets(store: &Store, filters: &Filters) -> Vec<TagFacet> {
    // Discovery-ordered counting keeps the tie-break stable.
    let mut counts: Vec<(String, usize)> = Vec::new();
    for entry in &store.entries {
        for tag in &entry.tags {
            match counts.iter_mut().find(|(name, _)| name == tag) {
                Some((_, count)) => *count += 1,
                None => counts.push((tag.clone(), 1)),
            }
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(TOP_TAGS);
    counts
        .into_iter()
        .map(|(name, count)| TagFacet {
            active: filters.tag.as_deref() == Some(name.as_str()),
            name,
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> Store {
        Store::from_json(
            r#"{
            "entries": [
                {"id":"e1","category":"system","tags":["db","latency"]},
                {"id":"e2","category":"system","tags":["db"]},
                {"id":"e3","category":"security","tags":["audit"]}
            ],
            "categories": {
                "system": {"en": "System"},
                "security": {"en": "Security"},
                "deployment": {"en": "Deployment"}
            }
        }"#,
        )
        .unwrap()
    }

    #[test]
    fn all_option_leads_with_total_count() {
        let facets = category_facets(&store(), &Filters::default(), Lang::En);
        assert_eq!(facets[0].id, None);
        assert_eq!(facets[0].label, "All");
        assert_eq!(facets[0].count, 3);
        assert!(facets[0].active);
    }

    #[test]
    fn empty_category_shows_zero_count() {
        let facets = category_facets(&store(), &Filters::default(), Lang::En);
        let deployment = facets
            .iter()
            .find(|f| f.id.as_deref() == Some("deployment"))
            .unwrap();
        assert_eq!(deployment.label, "Deployment");
        assert_eq!(deployment.count, 0);
    }

    #[test]
    fn exactly_one_category_facet_is_active() {
        let filters = Filters {
            category: Some("system".into()),
            ..Filters::default()
        };
        let facets = category_facets(&store(), &filters, Lang::En);
        let active: Vec<_> = facets.iter().filter(|f| f.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id.as_deref(), Some("system"));
    }

    #[test]
    fn unknown_category_filter_marks_all_active() {
        let filters = Filters {
            category: Some("nosuch".into()),
            ..Filters::default()
        };
        let facets = category_facets(&store(), &filters, Lang::En);
        assert!(facets[0].active, "unknown category counts as All");
        assert_eq!(facets.iter().filter(|f| f.active).count(), 1);
    }

    #[test]
    fn counts_ignore_active_filters() {
        let filters = Filters {
            category: Some("security".into()),
            ..Filters::default()
        };
        let facets = category_facets(&store(), &filters, Lang::En);
        assert_eq!(facets[0].count, 3, "All keeps the total entry count");
        let system = facets
            .iter()
            .find(|f| f.id.as_deref() == Some("system"))
            .unwrap();
        assert_eq!(system.count, 2);
    }

    #[test]
    fn tags_sort_by_count_then_discovery_order() {
        let facets = tag_facets(&store(), &Filters::default());
        let names: Vec<&str> = facets.iter().map(|f| f.name.as_str()).collect();
        // db appears twice; latency was discovered before audit.
        assert_eq!(names, ["db", "latency", "audit"]);
        assert_eq!(facets[0].count, 2);
    }

    #[test]
    fn tag_panel_caps_at_top_tags() {
        let entries: Vec<String> = (0..20)
            .map(|i| format!(r#"{{"id":"e{i}","tags":["tag{i}"]}}"#))
            .collect();
        let store = Store::from_json(&format!("[{}]", entries.join(","))).unwrap();
        let facets = tag_facets(&store, &Filters::default());
        assert_eq!(facets.len(), TOP_TAGS);
    }

    #[test]
    fn at_most_one_tag_highlighted() {
        let filters = Filters {
            tag: Some("db".into()),
            ..Filters::default()
        };
        let facets = tag_facets(&store(), &filters);
        assert_eq!(facets.iter().filter(|f| f.active).count(), 1);
    }
}
