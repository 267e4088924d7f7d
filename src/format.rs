// SPDX-License-Identifier: PMPL-1.0-or-later

//! Terminal formatting for the one-shot `list` and `show` commands

use crate::i18n::{severity_label, t, Lang};
use crate::render::cards::format_date;
use crate::render::drawer::{details_body, DetailsBody};
use crate::store::Store;
use crate::types::{Entry, Severity, TextField};
use colored::*;

pub struct CardFormatter {
    lang: Lang,
}

impl CardFormatter {
    pub fn new(lang: Lang) -> Self {
        Self { lang }
    }

    pub fn print_list(&self, entries: &[&Entry], store: &Store) {
        if entries.is_empty() {
            println!("\n  {}", t(self.lang, "ui.no_results").bold());
            println!("  {}", t(self.lang, "ui.no_results_sub").dimmed());
            return;
        }

        println!(
            "\n  {} {}",
            entries.len().to_string().bold(),
            t(self.lang, "ui.entries")
        );
        println!();
        for entry in entries {
            self.print_card(entry, store);
        }
    }

    fn print_card(&self, entry: &Entry, store: &Store) {
        let badge = severity_label(self.lang, entry.severity)
            .color(severity_color(entry.severity))
            .bold();
        let category = store.category_label(&entry.category, self.lang);
        let date = format_date(&entry.date, self.lang);

        println!(
            "  [{}] {} {}",
            badge,
            category.dimmed(),
            date.dimmed()
        );
        println!("  {}", entry.text(TextField::Title, self.lang).bold());
        let summary = entry.text(TextField::Summary, self.lang);
        if !summary.is_empty() {
            println!("  {}", summary);
        }
        if !entry.tags.is_empty() {
            println!("  {}", format!("#{}", entry.tags.join(" #")).dimmed());
        }
        println!();
    }

    pub fn print_detail(&self, entry: &Entry, store: &Store) {
        self.print_card(entry, store);

        match details_body(entry, self.lang) {
            // Markup details print their source; the terminal does not
            // interpret tags.
            DetailsBody::Markup(markup) => println!("  {}", markup),
            DetailsBody::Paragraphs(paragraphs) => {
                for paragraph in paragraphs {
                    println!("  {}", paragraph);
                    println!();
                }
            }
        }

        if !entry.related.is_empty() {
            println!("  {}", t(self.lang, "ui.related").bold());
            for related_id in &entry.related {
                match store.entry(related_id) {
                    Some(related) => println!(
                        "    - {} ({})",
                        related.text(TextField::Title, self.lang),
                        related_id.dimmed()
                    ),
                    None => println!("    - {}", related_id),
                }
            }
        }
    }
}

pub fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "red",
        Severity::Warning => "yellow",
        Severity::Info => "cyan",
        Severity::Success => "green",
    }
}
