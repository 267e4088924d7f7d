// SPDX-License-Identifier: PMPL-1.0-or-later

//! Interactive terminal viewer
//!
//! Single-threaded event loop: every keystroke flows through the
//! [`ViewState`] reducers, then the screen is redrawn from scratch.
//! Search input is debounced so a typing burst costs one filter pass.

use crate::debounce::Debouncer;
use crate::facets::{category_facets, tag_facets};
use crate::filter;
use crate::format::severity_color;
use crate::i18n::{severity_label, t, Lang};
use crate::nav::{Nav, Route};
use crate::render::cards::format_date;
use crate::render::drawer::{details_body, DetailsBody};
use crate::state::ViewState;
use crate::store::Store;
use crate::types::{Entry, TextField};
use anyhow::Result;
use colored::*;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute,
    terminal::{self, ClearType},
};
use std::io::{stdout, Write};
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(50);
const LIST_ROWS: usize = 8;
const DRAWER_ROWS: usize = 16;

pub fn run(store: &Store, initial: ViewState) -> Result<()> {
    terminal::enable_raw_mode()?;
    let result = run_inner(store, initial);
    terminal::disable_raw_mode()?;
    result
}

struct Session {
    state: ViewState,
    nav: Nav,
    selected: usize,
    searching: bool,
    pending_query: String,
    debounce: Debouncer,
    drawer_scroll: usize,
    /// Cursor over the open entry's related list.
    related_selected: usize,
}

impl Session {
    fn new(state: ViewState) -> Self {
        let nav = match &state.open {
            Some(id) => Nav::starting_at(Route::Entry(id.clone())),
            None => Nav::new(),
        };
        Self {
            state,
            nav,
            selected: 0,
            searching: false,
            pending_query: String::new(),
            debounce: Debouncer::default(),
            drawer_scroll: 0,
            related_selected: 0,
        }
    }

    fn open(&mut self, id: &str, store: &Store) {
        let before = self.state.open.clone();
        self.state = self.state.clone().open_entry(id, store);
        if self.state.open != before {
            self.nav.open(id);
            self.drawer_scroll = 0;
            self.related_selected = 0;
        }
    }

    /// Open the related entry under the cursor. Dangling ids no-op, the
    /// same as the state reducer.
    fn open_related(&mut self, entry: &Entry, store: &Store) {
        if let Some(id) = entry.related.get(self.related_selected) {
            let id = id.clone();
            self.open(&id, store);
        }
    }

    fn cycle_related(&mut self, entry: &Entry) {
        if entry.related.is_empty() {
            return;
        }
        self.related_selected = (self.related_selected + 1) % entry.related.len();
    }

    /// Scroll is clamped to the body so one scroll-up always moves one
    /// line, no matter how long the key was held at the end.
    fn scroll_down(&mut self, line_count: usize) {
        if self.drawer_scroll + 1 < line_count {
            self.drawer_scroll += 1;
        }
    }

    fn scroll_up(&mut self) {
        self.drawer_scroll = self.drawer_scroll.saturating_sub(1);
    }

    fn close(&mut self) {
        self.state = self.state.clone().close();
        self.nav.close();
    }

    /// Browser-style back: the previous history point decides whether a
    /// drawer is open and for which entry.
    fn back(&mut self, store: &Store) {
        let route = self.nav.back().clone().resolve(store);
        self.state = match route {
            Route::Entry(id) => {
                self.drawer_scroll = 0;
                self.related_selected = 0;
                self.state.clone().open_entry(&id, store)
            }
            Route::Closed => self.state.clone().close(),
        };
    }

    fn cycle_category(&mut self, store: &Store, forward: bool) {
        let ids: Vec<&String> = store.categories.keys().collect();
        if ids.is_empty() {
            return;
        }
        let position = self
            .state
            .filters
            .category
            .as_ref()
            .and_then(|current| ids.iter().position(|id| *id == current));
        // None ("All") sits before the first and after the last id.
        let next = if forward {
            match position {
                None => Some(0),
                Some(i) if i + 1 < ids.len() => Some(i + 1),
                Some(_) => None,
            }
        } else {
            match position {
                None => Some(ids.len() - 1),
                Some(0) => None,
                Some(i) => Some(i - 1),
            }
        };
        let category = next.map(|i| ids[i].clone());
        self.state = self.state.clone().set_category(category);
        self.selected = 0;
    }

    fn cycle_tag(&mut self, store: &Store) {
        let top = tag_facets(store, &self.state.filters);
        if top.is_empty() {
            return;
        }
        let position = self
            .state
            .filters
            .tag
            .as_ref()
            .and_then(|current| top.iter().position(|facet| &facet.name == current));
        self.state = match position {
            None => self.state.clone().toggle_tag(&top[0].name),
            Some(i) if i + 1 < top.len() => self.state.clone().toggle_tag(&top[i + 1].name),
            Some(_) => self.state.clone().clear_tag(),
        };
        self.selected = 0;
    }
}

fn run_inner(store: &Store, initial: ViewState) -> Result<()> {
    let mut out = stdout();
    let mut session = Session::new(initial);

    loop {
        if session.debounce.ready(Instant::now()) {
            session.state = session.state.clone().set_query(&session.pending_query);
            session.selected = 0;
        }

        let filtered = filter::apply(&store.entries, &session.state.filters, session.state.lang);
        if session.selected >= filtered.len() {
            session.selected = filtered.len().saturating_sub(1);
        }

        let open_entry = session
            .state
            .open
            .as_deref()
            .and_then(|id| store.entry(id));
        match open_entry {
            Some(entry) => render_drawer(&mut out, store, entry, &session)?,
            None => render_list(&mut out, store, &filtered, &session)?,
        }

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        let Event::Key(KeyEvent { code, .. }) = event::read()? else {
            continue;
        };

        if session.searching {
            match code {
                KeyCode::Char(ch) => {
                    session.pending_query.push(ch);
                    session.debounce.schedule(Instant::now());
                }
                KeyCode::Backspace => {
                    session.pending_query.pop();
                    session.debounce.schedule(Instant::now());
                }
                KeyCode::Enter => {
                    session.searching = false;
                    session.debounce.cancel();
                    session.state = session.state.clone().set_query(&session.pending_query);
                    session.selected = 0;
                }
                KeyCode::Esc => {
                    session.searching = false;
                    session.debounce.cancel();
                }
                _ => {}
            }
            continue;
        }

        let drawer_open = session.state.open.is_some();
        match code {
            KeyCode::Char('q') => break,
            KeyCode::Esc if drawer_open => session.close(),
            KeyCode::Esc => break,
            KeyCode::Char('b') => session.back(store),
            KeyCode::Char('l') => {
                session.state = session.state.clone().toggle_lang();
            }
            KeyCode::Enter if drawer_open => {
                if let Some(entry) = open_entry {
                    session.open_related(entry, store);
                }
            }
            KeyCode::Enter => {
                if let Some(entry) = filtered.get(session.selected) {
                    let id = entry.id.clone();
                    session.open(&id, store);
                }
            }
            KeyCode::Char('n') if drawer_open => {
                if let Some(entry) = open_entry {
                    session.cycle_related(entry);
                }
            }
            KeyCode::Char('j') | KeyCode::Down => {
                if let Some(entry) = open_entry {
                    let line_count =
                        drawer_lines(entry, store, session.state.lang, session.related_selected)
                            .len();
                    session.scroll_down(line_count);
                } else if session.selected + 1 < filtered.len() {
                    session.selected += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if drawer_open {
                    session.scroll_up();
                } else {
                    session.selected = session.selected.saturating_sub(1);
                }
            }
            KeyCode::Tab if !drawer_open => session.cycle_category(store, true),
            KeyCode::BackTab if !drawer_open => session.cycle_category(store, false),
            KeyCode::Char('t') if !drawer_open => session.cycle_tag(store),
            KeyCode::Char('/') if !drawer_open => {
                session.searching = true;
                session.pending_query = session.state.filters.query.clone();
            }
            _ => {}
        }
    }

    execute!(out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    Ok(())
}

fn render_list(
    out: &mut impl Write,
    store: &Store,
    filtered: &[&Entry],
    session: &Session,
) -> Result<()> {
    let lang = session.state.lang;
    execute!(out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;

    writeln!(out, "{}\r", "SPARK JOURNAL".bold().cyan())?;
    writeln!(out)?;

    // Category panel
    let mut cats = Vec::new();
    for facet in category_facets(store, &session.state.filters, lang) {
        let label = format!("{} {}", facet.label, facet.count);
        if facet.active {
            cats.push(format!("[{}]", label.bold()));
        } else {
            cats.push(format!(" {} ", label.dimmed()));
        }
    }
    writeln!(out, "{}\r", cats.join(" "))?;

    // Tag panel
    let tags = tag_facets(store, &session.state.filters);
    if !tags.is_empty() {
        let mut chips = Vec::new();
        for facet in &tags {
            if facet.active {
                chips.push(format!("#{}", facet.name).bold().to_string());
            } else {
                chips.push(format!("#{}", facet.name).dimmed().to_string());
            }
        }
        writeln!(out, "{}\r", chips.join(" "))?;
    }

    if session.searching {
        writeln!(
            out,
            "{} {}_\r",
            t(lang, "ui.search").bold(),
            session.pending_query
        )?;
    } else if !session.state.filters.is_empty() {
        let mut parts = vec![t(lang, "ui.filtering").to_string()];
        if let Some(category) = &session.state.filters.category {
            parts.push(store.category_label(category, lang));
        }
        if let Some(tag) = &session.state.filters.tag {
            parts.push(format!("#{}", tag));
        }
        if !session.state.filters.query.is_empty() {
            parts.push(format!("\u{201c}{}\u{201d}", session.state.filters.query));
        }
        writeln!(out, "{}\r", parts.join(" ").yellow())?;
    }
    writeln!(out)?;

    if filtered.is_empty() {
        writeln!(out, "  {}\r", t(lang, "ui.no_results").bold())?;
        writeln!(out, "  {}\r", t(lang, "ui.no_results_sub").dimmed())?;
    } else {
        writeln!(
            out,
            "{} {}\r",
            filtered.len().to_string().bold(),
            t(lang, "ui.entries")
        )?;
        writeln!(out)?;

        // Keep the selection inside the visible window.
        let first = session.selected.saturating_sub(LIST_ROWS - 1);
        for (index, entry) in filtered.iter().enumerate().skip(first).take(LIST_ROWS) {
            let indicator = if index == session.selected {
                "➤".green().to_string()
            } else {
                " ".to_string()
            };
            let badge = severity_label(lang, entry.severity)
                .color(severity_color(entry.severity))
                .bold();
            writeln!(
                out,
                "{} [{}] {} {}\r",
                indicator,
                badge,
                entry.text(TextField::Title, lang).bold(),
                format_date(&entry.date, lang).dimmed()
            )?;
            if index == session.selected {
                let summary = entry.text(TextField::Summary, lang);
                if !summary.is_empty() {
                    writeln!(out, "      {}\r", summary.dimmed())?;
                }
            }
        }
    }

    writeln!(out)?;
    writeln!(
        out,
        "{}\r",
        "[j/k] Select  [Enter] Open  [Tab] Category  [t] Tag  [/] Search  [l] Language  [b] Back  [q] Quit"
            .dimmed()
    )?;
    out.flush()?;
    Ok(())
}

fn render_drawer(
    out: &mut impl Write,
    store: &Store,
    entry: &Entry,
    session: &Session,
) -> Result<()> {
    let lang = session.state.lang;
    execute!(out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;

    writeln!(out, "{}\r", entry.text(TextField::Title, lang).bold().cyan())?;
    let badge = severity_label(lang, entry.severity)
        .color(severity_color(entry.severity))
        .bold();
    writeln!(
        out,
        "[{}] {} {}\r",
        badge,
        store.category_label(&entry.category, lang),
        format_date(&entry.date, lang).dimmed()
    )?;
    if !entry.tags.is_empty() {
        writeln!(out, "{}\r", format!("#{}", entry.tags.join(" #")).dimmed())?;
    }
    writeln!(out)?;

    let lines = drawer_lines(entry, store, lang, session.related_selected);
    let top = session.drawer_scroll.min(lines.len().saturating_sub(1));
    for line in lines.iter().skip(top).take(DRAWER_ROWS) {
        writeln!(out, "{}\r", line)?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "{}\r",
        "[j/k] Scroll  [n] Related  [Enter] Open  [Esc] Close  [b] Back  [l] Language  [q] Quit"
            .dimmed()
    )?;
    out.flush()?;
    Ok(())
}

/// Drawer body as display lines: details paragraphs (or markup source),
/// then the related list with the cursor marked.
fn drawer_lines(entry: &Entry, store: &Store, lang: Lang, related_selected: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    match details_body(entry, lang) {
        DetailsBody::Markup(markup) => lines.extend(markup.lines().map(str::to_string)),
        DetailsBody::Paragraphs(paragraphs) => {
            for paragraph in paragraphs {
                lines.push(paragraph);
                lines.push(String::new());
            }
        }
    }
    if !entry.related.is_empty() {
        lines.push(t(lang, "ui.related").to_string());
        for (index, related_id) in entry.related.iter().enumerate() {
            let indicator = if index == related_selected {
                "➤".green().to_string()
            } else {
                " ".to_string()
            };
            let label = match store.entry(related_id) {
                Some(related) => related.text(TextField::Title, lang),
                None => related_id.clone(),
            };
            lines.push(format!("  {} {}", indicator, label));
        }
    }
    lines
}
