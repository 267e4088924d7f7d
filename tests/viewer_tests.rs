// SPDX-License-Identifier: PMPL-1.0-or-later

//! End-to-end viewer behavior over a loaded document: filtering, facet
//! counts, state transitions, navigation, and rendered output.

use spark_journal::facets::{category_facets, tag_facets};
use spark_journal::filter::{self, Filters};
use spark_journal::i18n::Lang;
use spark_journal::nav::{Nav, Route};
use spark_journal::render;
use spark_journal::state::ViewState;
use spark_journal::store::Store;

fn store() -> Store {
    Store::from_json(
        r#"{
        "entries": [
            {"id":"e1","category":"system","severity":"critical","date":"2024-01-05",
             "title":"Outage","summary":{"en":"Primary database down"},
             "details":"Hello\n\nWorld","tags":["db","latency"],"related":["e2","ghost"]},
            {"id":"e2","category":"monitoring","severity":"success","date":"2024-03-12",
             "title":{"he":"שחזור","en":"Recovery"},"details":"<p>Hello</p>","tags":["db"]},
            {"id":"e3","category":"system","date":"2024-02-20",
             "title":"Quarterly review","tags":["process"]}
        ],
        "categories": {
            "system": {"he":"מערכת","en":"System"},
            "monitoring": {"he":"ניטור","en":"Monitoring"},
            "deployment": {"en":"Deployment"}
        }
    }"#,
    )
    .unwrap()
}

#[test]
fn test_filtered_view_is_a_sorted_subset() {
    let store = store();
    let filters = Filters {
        query: "outage".into(),
        ..Filters::default()
    };
    let filtered = filter::apply(&store.entries, &filters, Lang::En);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "e1");

    let all = filter::apply(&store.entries, &Filters::default(), Lang::En);
    let ids: Vec<&str> = all.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["e2", "e3", "e1"], "descending by date");
}

#[test]
fn test_facets_count_the_full_set_not_the_filtered_view() {
    let store = store();
    let state = ViewState::new(Lang::En).set_query("outage");
    let facets = category_facets(&store, &state.filters, state.lang);
    assert_eq!(facets[0].count, 3, "All shows the total entry count");
    let deployment = facets
        .iter()
        .find(|f| f.id.as_deref() == Some("deployment"))
        .unwrap();
    assert_eq!(deployment.count, 0, "empty categories still show");

    let tags = tag_facets(&store, &state.filters);
    let db = tags.iter().find(|f| f.name == "db").unwrap();
    assert_eq!(db.count, 2);
}

#[test]
fn test_tag_chain_replaces_category_and_toggles_off() {
    let store = store();
    let state = ViewState::new(Lang::En)
        .set_category(Some("system".into()))
        .toggle_tag("db");

    let filtered = filter::apply(&store.entries, &state.filters, state.lang);
    let ids: Vec<&str> = filtered.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["e2", "e1"], "tag filter replaced the category filter");

    let state = state.toggle_tag("db");
    let filtered = filter::apply(&store.entries, &state.filters, state.lang);
    assert_eq!(filtered.len(), 3, "toggling the active tag clears it");
}

#[test]
fn test_open_missing_entry_keeps_view_closed_and_fragment_stable() {
    let store = store();
    let mut nav = Nav::new();
    let state = ViewState::new(Lang::En).open_entry("ghost", &store);
    assert!(state.open.is_none());

    // The fragment only moves when an open actually happens.
    if state.open.is_some() {
        nav.open("ghost");
    }
    assert_eq!(nav.current(), &Route::Closed);
    assert_eq!(nav.current().fragment(), "");
}

#[test]
fn test_deep_link_resolves_through_the_store() {
    let store = store();
    assert_eq!(
        Route::parse("#entry/e2").resolve(&store),
        Route::Entry("e2".into())
    );
    assert_eq!(Route::parse("#entry/ghost").resolve(&store), Route::Closed);
}

#[test]
fn test_language_toggle_round_trip_preserves_rendered_labels() {
    let store = store();
    let state = ViewState::new(Lang::He).toggle_tag("db");
    let before = render::page(&store, &state);
    let after = render::page(&store, &state.clone().toggle_lang().toggle_lang());
    assert_eq!(before, after);
}

#[test]
fn test_hebrew_and_english_pages_differ_only_in_language() {
    let store = store();
    let hebrew = render::page(&store, &ViewState::new(Lang::He));
    assert!(hebrew.contains("dir=\"rtl\""));
    assert!(hebrew.contains("מערכת"));
    assert!(hebrew.contains("הכל"));

    let english = render::page(&store, &ViewState::new(Lang::En));
    assert!(english.contains("dir=\"ltr\""));
    assert!(english.contains(">System<"));
    assert!(english.contains(">All<"));
}

#[test]
fn test_details_trust_boundary_in_rendered_drawers() {
    let store = store();

    let plain = render::drawer(store.entry("e1").unwrap(), &store, Lang::En);
    assert!(plain.contains("<p>Hello</p><p>World</p>"));

    let markup = render::drawer(store.entry("e2").unwrap(), &store, Lang::En);
    assert!(markup.contains("<p>Hello</p>"));
    assert!(!markup.contains("&lt;p&gt;Hello"));
}

#[test]
fn test_related_entries_render_titles_or_raw_ids() {
    let store = store();
    let html = render::drawer(store.entry("e1").unwrap(), &store, Lang::En);
    assert!(html.contains(">Recovery<"));
    assert!(html.contains("href=\"#entry/ghost\""));
    assert!(html.contains(">ghost<"));
}

#[test]
fn test_empty_filter_result_renders_empty_state() {
    let store = store();
    let state = ViewState::new(Lang::En).set_query("zzz");
    let html = render::page(&store, &state);
    assert!(html.contains("No entries found"));
    assert!(!html.contains("data-id="));
}

#[test]
fn test_back_navigation_walks_the_entry_chain() {
    let store = store();
    let mut nav = Nav::new();
    let mut state = ViewState::new(Lang::En);

    state = state.open_entry("e1", &store);
    nav.open("e1");
    // A related-entry link opens another drawer without a page load.
    state = state.open_entry("e2", &store);
    nav.open("e2");
    assert_eq!(state.open.as_deref(), Some("e2"));

    let route = nav.back().clone().resolve(&store);
    state = match route {
        Route::Entry(id) => state.open_entry(&id, &store),
        Route::Closed => state.close(),
    };
    assert_eq!(state.open.as_deref(), Some("e1"));

    let route = nav.back().clone().resolve(&store);
    state = match route {
        Route::Entry(id) => state.open_entry(&id, &store),
        Route::Closed => state.close(),
    };
    assert!(state.open.is_none());
}
