// SPDX-License-Identifier: PMPL-1.0-or-later

//! Card list fragments
//!
//! One `<article>` per filtered entry, plus the localized empty-state
//! panel when nothing passes the filters.

use crate::i18n::{severity_label, t, Lang};
use crate::render::html::Html;
use crate::store::Store;
use crate::types::{parse_date, Entry, TextField};
use chrono::Locale;

/// Locale-aware date display.
///
/// Missing dates render as the empty string; unparsable dates fall back
/// to the raw stored value rather than failing the render.
pub fn format_date(raw: &str, lang: Lang) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }
    match parse_date(raw) {
        Some(date) => match lang {
            Lang::He => date.format_localized("%-d %b %Y", Locale::he_IL).to_string(),
            Lang::En => date.format("%b %-d, %Y").to_string(),
        },
        None => raw.to_string(),
    }
}

/// Render one entry card.
pub fn card(entry: &Entry, store: &Store, lang: Lang) -> String {
    let mut html = Html::new();
    html.trusted("<article class=\"card\" data-id=\"")
        .attr(&entry.id)
        .trusted("\" data-cat=\"")
        .attr(&entry.category)
        .trusted("\" tabindex=\"0\">");

    html.trusted("<div class=\"card-top\">")
        .trusted("<span class=\"badge badge-")
        .attr(entry.severity.as_str())
        .trusted("\">")
        .text(severity_label(lang, entry.severity))
        .trusted("</span><span class=\"cat-label\">")
        .text(&store.category_label(&entry.category, lang))
        .trusted("</span><span class=\"card-date\">")
        .text(&format_date(&entry.date, lang))
        .trusted("</span></div>");

    html.trusted("<h2 class=\"card-title\">")
        .text(&entry.text(TextField::Title, lang))
        .trusted("</h2><p class=\"card-summary\">")
        .text(&entry.text(TextField::Summary, lang))
        .trusted("</p>");

    if !entry.tags.is_empty() {
        html.trusted("<div class=\"card-tags\">");
        for tag in &entry.tags {
            tag_chip(&mut html, tag);
        }
        html.trusted("</div>");
    }

    html.trusted("</article>");
    html.into_string()
}

/// Tag chip shared by cards and the drawer. Chips stop event bubbling on
/// the client side; here that contract is carried by the class/data
/// attributes the fragment exposes.
pub(crate) fn tag_chip(html: &mut Html, tag: &str) {
    html.trusted("<span class=\"card-tag\" data-tag=\"")
        .attr(tag)
        .trusted("\">")
        .text(tag)
        .trusted("</span>");
}

/// Render the filtered, sorted card list, or the empty-state panel when
/// no entries pass.
pub fn card_list(filtered: &[&Entry], store: &Store, lang: Lang) -> String {
    if filtered.is_empty() {
        return empty_state(lang);
    }
    let mut out = String::new();
    for entry in filtered {
        out.push_str(&card(entry, store, lang));
    }
    out
}

fn empty_state(lang: Lang) -> String {
    let mut html = Html::new();
    html.trusted("<div class=\"empty\"><p class=\"empty-title\">")
        .text(t(lang, "ui.no_results"))
        .trusted("</p><p class=\"empty-sub\">")
        .text(t(lang, "ui.no_results_sub"))
        .trusted("</p></div>");
    html.into_string()
}
