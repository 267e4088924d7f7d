// SPDX-License-Identifier: PMPL-1.0-or-later

//! Detail drawer fragments
//!
//! The drawer shows one selected entry: a header (title, severity badge,
//! category, date, tag chips) and a body (rich-text details plus related
//! entry links). Callers no-op when the requested id does not exist.

use crate::i18n::{severity_label, t, Lang};
use crate::nav::Route;
use crate::render::cards::{format_date, tag_chip};
use crate::render::html::{looks_like_markup, Html};
use crate::store::Store;
use crate::types::{Entry, TextField};

/// Resolved details content for an entry.
///
/// Markup-looking details pass through verbatim (the trusted path);
/// everything else splits on blank lines into paragraphs that are always
/// escaped. Shared by the HTML drawer and the terminal surfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailsBody {
    Markup(String),
    Paragraphs(Vec<String>),
}

pub fn details_body(entry: &Entry, lang: Lang) -> DetailsBody {
    let details = entry.text(TextField::Details, lang);
    if looks_like_markup(&details) {
        return DetailsBody::Markup(details);
    }
    let paragraphs = details
        .split("\n\n")
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .map(str::to_string)
        .collect();
    DetailsBody::Paragraphs(paragraphs)
}

/// Render the full drawer fragment for an entry.
pub fn drawer(entry: &Entry, store: &Store, lang: Lang) -> String {
    let mut html = Html::new();

    html.trusted("<div class=\"drawer-head\"><h1 class=\"drawer-title\">")
        .text(&entry.text(TextField::Title, lang))
        .trusted("</h1><div class=\"drawer-meta\">")
        .trusted("<span class=\"badge badge-")
        .attr(entry.severity.as_str())
        .trusted("\">")
        .text(severity_label(lang, entry.severity))
        .trusted("</span><span class=\"cat-label\">")
        .text(&store.category_label(&entry.category, lang))
        .trusted("</span><span class=\"card-date\">")
        .text(&format_date(&entry.date, lang))
        .trusted("</span></div>");
    if !entry.tags.is_empty() {
        html.trusted("<div class=\"drawer-tags\">");
        for tag in &entry.tags {
            tag_chip(&mut html, tag);
        }
        html.trusted("</div>");
    }
    html.trusted("</div>");

    html.trusted("<div class=\"drawer-body\">");
    match details_body(entry, lang) {
        DetailsBody::Markup(markup) => {
            html.trusted(&markup);
        }
        DetailsBody::Paragraphs(paragraphs) => {
            for paragraph in &paragraphs {
                html.trusted("<p>").text(paragraph).trusted("</p>");
            }
        }
    }
    html.trusted(&related_links(entry, store, lang));
    html.trusted("</div>");

    html.into_string()
}

/// Related entries as deep links. A dangling id still renders a link,
/// titled by the raw id.
fn related_links(entry: &Entry, store: &Store, lang: Lang) -> String {
    if entry.related.is_empty() {
        return String::new();
    }
    let mut html = Html::new();
    html.trusted("<div class=\"drawer-related\"><h3>")
        .text(t(lang, "ui.related"))
        .trusted("</h3>");
    for related_id in &entry.related {
        let label = match store.entry(related_id) {
            Some(related) => related.text(TextField::Title, lang),
            None => related_id.clone(),
        };
        html.trusted("<a class=\"related-link\" href=\"#")
            .attr(&Route::Entry(related_id.clone()).fragment())
            .trusted("\">")
            .text(&label)
            .trusted("</a>");
    }
    html.trusted("</div>");
    html.into_string()
}
