// SPDX-License-Identifier: PMPL-1.0-or-later

//! Standalone page assembly for static export
//!
//! Snapshots the viewer for a given state: facet panels, active filter
//! chips, the filtered card list (or empty state), and the drawer when an
//! entry is open. The document carries the language and direction hints
//! of the active language.

use crate::facets::{category_facets, tag_facets};
use crate::filter;
use crate::i18n::t;
use crate::render::cards::card_list;
use crate::render::drawer::drawer;
use crate::render::html::Html;
use crate::state::ViewState;
use crate::store::Store;

const STYLE: &str = "\
body{font-family:sans-serif;margin:0;background:#0f172a;color:#e2e8f0}\
main{max-width:880px;margin:0 auto;padding:24px}\
.card{border:1px solid #334155;border-radius:8px;padding:16px;margin:12px 0}\
.card-top{display:flex;gap:8px;font-size:13px}\
.badge{padding:2px 8px;border-radius:10px}\
.badge-critical{background:#ef4444}.badge-warning{background:#f59e0b}\
.badge-info{background:#06b6d4}.badge-success{background:#22c55e}\
.cat-btn,.tag{margin:2px;padding:3px 10px;border-radius:12px;border:1px solid #334155}\
.cat-btn.active,.tag.active{border-color:#e2e8f0}\
.card-tag{font-size:12px;margin-inline-end:6px;opacity:.8}\
.filter-chip{padding:2px 8px;border:1px solid #334155;border-radius:10px}\
.drawer{border-top:2px solid #334155;margin-top:24px;padding-top:16px}\
.empty{padding:40px;text-align:center;opacity:.7}";

/// Render the complete static page for the given state.
pub fn page(store: &Store, state: &ViewState) -> String {
    let lang = state.lang;
    let filtered = filter::apply(&store.entries, &state.filters, lang);

    let mut html = Html::new();
    html.trusted("<!DOCTYPE html>\n<html lang=\"")
        .attr(lang.code())
        .trusted("\" dir=\"")
        .attr(lang.dir())
        .trusted("\">\n<head>\n<meta charset=\"utf-8\">\n<title>Spark Journal</title>\n<style>")
        .trusted(STYLE)
        .trusted("</style>\n</head>\n<body>\n<main>");

    html.trusted("<nav class=\"cats\">")
        .trusted(&category_panel(store, state))
        .trusted("</nav>");
    html.trusted("<nav class=\"tags\">")
        .trusted(&tag_panel(store, state))
        .trusted("</nav>");

    let chips = filter_chips(store, state);
    if !chips.is_empty() {
        html.trusted("<div class=\"filters\">").trusted(&chips).trusted("</div>");
    }

    html.trusted("<section class=\"cards\">")
        .trusted(&card_list(&filtered, store, lang))
        .trusted("</section>");

    if let Some(id) = &state.open {
        if let Some(entry) = store.entry(id) {
            html.trusted("<section class=\"drawer\" id=\"")
                .attr(&format!("entry/{}", id))
                .trusted("\">")
                .trusted(&drawer(entry, store, lang))
                .trusted("</section>");
        }
    }

    html.trusted("</main>\n</body>\n</html>\n");
    html.into_string()
}

fn category_panel(store: &Store, state: &ViewState) -> String {
    let mut html = Html::new();
    for facet in category_facets(store, &state.filters, state.lang) {
        html.trusted("<button class=\"cat-btn")
            .trusted(if facet.active { " active" } else { "" })
            .trusted("\" data-cat=\"")
            .attr(facet.id.as_deref().unwrap_or(""))
            .trusted("\"><span>")
            .text(&facet.label)
            .trusted("</span><span class=\"cat-count\">")
            .text(&facet.count.to_string())
            .trusted("</span></button>");
    }
    html.into_string()
}

fn tag_panel(store: &Store, state: &ViewState) -> String {
    let mut html = Html::new();
    for facet in tag_facets(store, &state.filters) {
        html.trusted("<button class=\"tag")
            .trusted(if facet.active { " active" } else { "" })
            .trusted("\" data-tag=\"")
            .attr(&facet.name)
            .trusted("\">")
            .text(&facet.name)
            .trusted("</button>");
    }
    html.into_string()
}

/// Chips naming each active filter, prefixed by the localized
/// "Filtering:" label. Empty when no filter is set.
fn filter_chips(store: &Store, state: &ViewState) -> String {
    let filters = &state.filters;
    if filters.is_empty() {
        return String::new();
    }
    let mut html = Html::new();
    html.trusted("<span>").text(t(state.lang, "ui.filtering")).trusted("</span> ");
    if let Some(category) = &filters.category {
        html.trusted("<span class=\"filter-chip\">")
            .text(&store.category_label(category, state.lang))
            .trusted("</span> ");
    }
    if let Some(tag) = &filters.tag {
        html.trusted("<span class=\"filter-chip\">#")
            .text(tag)
            .trusted("</span> ");
    }
    if !filters.query.trim().is_empty() {
        html.trusted("<span class=\"filter-chip\">\u{201c}")
            .text(filters.query.trim())
            .trusted("\u{201d}</span>");
    }
    html.into_string()
}
