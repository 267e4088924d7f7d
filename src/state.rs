// SPDX-License-Identifier: PMPL-1.0-or-later

//! Viewer state and its transitions
//!
//! One explicit record owns everything the session can mutate: active
//! language, the three filters, and which entry (if any) is open in the
//! drawer. Transitions are pure — each consumes a state and returns the
//! next one, so every surface (TUI, CLI, export) replays the same rules.

use crate::filter::Filters;
use crate::i18n::Lang;
use crate::store::Store;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub lang: Lang,
    pub filters: Filters,
    /// Entry id open in the detail drawer, if any.
    pub open: Option<String>,
}

impl ViewState {
    pub fn new(lang: Lang) -> Self {
        Self {
            lang,
            filters: Filters::default(),
            open: None,
        }
    }

    /// Select a category (or `None` for "All"). Clears the tag filter
    /// and the query.
    pub fn set_category(mut self, category: Option<String>) -> Self {
        self.filters = Filters {
            category,
            ..Filters::default()
        };
        self
    }

    /// Toggle a tag filter: selecting the active tag clears it, any
    /// other tag replaces it. Clears the category filter and the query.
    pub fn toggle_tag(mut self, tag: &str) -> Self {
        let next = if self.filters.tag.as_deref() == Some(tag) {
            None
        } else {
            Some(tag.to_string())
        };
        self.filters = Filters {
            tag: next,
            ..Filters::default()
        };
        self
    }

    pub fn clear_tag(mut self) -> Self {
        self.filters.tag = None;
        self
    }

    /// Apply a free-text query. Clears both facet filters.
    pub fn set_query(mut self, query: &str) -> Self {
        self.filters = Filters {
            query: query.trim().to_string(),
            ..Filters::default()
        };
        self
    }

    pub fn clear_query(mut self) -> Self {
        self.filters.query.clear();
        self
    }

    /// Open the drawer for an entry. Unknown ids are a no-op: the state
    /// is returned unchanged and the drawer stays closed.
    pub fn open_entry(mut self, id: &str, store: &Store) -> Self {
        if store.entry(id).is_some() {
            self.open = Some(id.to_string());
        }
        self
    }

    pub fn close(mut self) -> Self {
        self.open = None;
        self
    }

    /// Flip the display language. Filters and the open entry survive.
    pub fn toggle_lang(mut self) -> Self {
        self.lang = self.lang.toggled();
        self
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(Lang::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> Store {
        Store::from_json(r#"[{"id":"e1","tags":["db"]},{"id":"e2"}]"#).unwrap()
    }

    #[test]
    fn category_selection_clears_other_filters() {
        let state = ViewState::default()
            .set_query("outage")
            .set_category(Some("system".into()));
        assert_eq!(state.filters.category.as_deref(), Some("system"));
        assert!(state.filters.tag.is_none());
        assert!(state.filters.query.is_empty());
    }

    #[test]
    fn tag_toggle_semantics() {
        let state = ViewState::default().toggle_tag("db");
        assert_eq!(state.filters.tag.as_deref(), Some("db"));
        let state = state.toggle_tag("db");
        assert!(state.filters.tag.is_none());
    }

    #[test]
    fn new_tag_replaces_category_filter() {
        let state = ViewState::default()
            .set_category(Some("system".into()))
            .toggle_tag("db");
        assert!(state.filters.category.is_none());
        assert_eq!(state.filters.tag.as_deref(), Some("db"));
    }

    #[test]
    fn query_clears_facet_filters() {
        let state = ViewState::default()
            .set_category(Some("system".into()))
            .set_query("latency");
        assert!(state.filters.category.is_none());
        assert_eq!(state.filters.query, "latency");
    }

    #[test]
    fn clearing_a_category_returns_the_default_view() {
        let state = ViewState::default().set_category(Some("system".into()));
        let cleared = state.set_category(None);
        assert_eq!(cleared.filters, Filters::default());
    }

    #[test]
    fn opening_unknown_entry_is_a_no_op() {
        let store = store();
        let state = ViewState::default().open_entry("ghost", &store);
        assert!(state.open.is_none());

        let state = state.open_entry("e1", &store);
        assert_eq!(state.open.as_deref(), Some("e1"));
    }

    #[test]
    fn language_double_toggle_is_identity_and_preserves_selection() {
        let store = store();
        let state = ViewState::default()
            .toggle_tag("db")
            .open_entry("e1", &store);
        let toggled_twice = state.clone().toggle_lang().toggle_lang();
        assert_eq!(state, toggled_twice);
    }

    #[test]
    fn language_toggle_keeps_filters_and_open_entry() {
        let store = store();
        let state = ViewState::default()
            .toggle_tag("db")
            .open_entry("e1", &store)
            .toggle_lang();
        assert_eq!(state.lang, Lang::En);
        assert_eq!(state.filters.tag.as_deref(), Some("db"));
        assert_eq!(state.open.as_deref(), Some("e1"));
    }
}
