// SPDX-License-Identifier: PMPL-1.0-or-later

//! spark-journal: bilingual journal viewer
//!
//! Loads a JSON document of dated entries and categories and presents it
//! as a filterable, searchable card list with a detail drawer — as an
//! interactive terminal session, a one-shot listing, or a static HTML
//! export.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use spark_journal::filter::{self, Filters};
use spark_journal::format::CardFormatter;
use spark_journal::i18n::{t, Lang};
use spark_journal::nav::Route;
use spark_journal::state::ViewState;
use spark_journal::store::Store;
use spark_journal::{render, tui};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "spark-journal")]
#[command(version)]
#[command(about = "Filterable, searchable, bilingual journal viewer")]
struct Cli {
    /// Journal document to load
    #[arg(long, global = true, default_value = "data/entries.json")]
    data: PathBuf,

    /// Display language (he or en)
    #[arg(long, global = true, value_enum, default_value_t = LangArg::He)]
    lang: LangArg,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the journal interactively
    View {
        /// Open a drawer on start; accepts an id or an entry/<id> fragment
        #[arg(long)]
        entry: Option<String>,
    },

    /// Print the filtered card list
    List {
        /// Keep only entries of this category
        #[arg(short, long)]
        category: Option<String>,

        /// Keep only entries carrying this tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Free-text search over titles, summaries, and tags
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Print one entry in full
    Show {
        /// Entry id
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Write a static snapshot of the journal
    Export {
        /// Output file (defaults to journal.<ext> for the format)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Snapshot format
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Html)]
        format: ExportFormat,

        /// Pre-open a drawer; accepts an id or an entry/<id> fragment
        #[arg(long)]
        entry: Option<String>,

        #[arg(short, long)]
        category: Option<String>,

        #[arg(short, long)]
        tag: Option<String>,

        #[arg(short, long)]
        query: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LangArg {
    He,
    En,
}

impl From<LangArg> for Lang {
    fn from(arg: LangArg) -> Self {
        match arg {
            LangArg::He => Lang::He,
            LangArg::En => Lang::En,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ExportFormat {
    Html,
    Json,
    Yaml,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Html => "html",
            ExportFormat::Json => "json",
            ExportFormat::Yaml => "yaml",
        }
    }
}

fn filters_from(category: Option<String>, tag: Option<String>, query: Option<String>) -> Filters {
    Filters {
        category,
        tag,
        query: query.unwrap_or_default(),
    }
}

/// Accepts a bare id or an `entry/<id>` fragment (with or without `#`).
fn entry_id_from(reference: &str) -> String {
    match Route::parse(reference) {
        Route::Entry(id) => id,
        Route::Closed => reference.to_string(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let lang: Lang = cli.lang.into();

    let store = match Store::load(&cli.data) {
        Ok(store) => store,
        Err(err) => {
            // Not retried: surface the failure inline and stop.
            eprintln!("{}: {:#}", t(lang, "ui.load_failed").red().bold(), err);
            std::process::exit(1);
        }
    };

    match cli.command.unwrap_or(Commands::View { entry: None }) {
        Commands::View { entry } => {
            let mut state = ViewState::new(lang);
            if let Some(reference) = entry {
                state = state.open_entry(&entry_id_from(&reference), &store);
            }
            tui::run(&store, state)?;
        }

        Commands::List {
            category,
            tag,
            query,
        } => {
            let filters = filters_from(category, tag, query);
            let filtered = filter::apply(&store.entries, &filters, lang);
            CardFormatter::new(lang).print_list(&filtered, &store);
        }

        Commands::Show { id } => match store.entry(&id) {
            Some(entry) => CardFormatter::new(lang).print_detail(entry, &store),
            // Reference failures degrade; they are not process errors.
            None => println!("{}", t(lang, "ui.no_results").dimmed()),
        },

        Commands::Export {
            out,
            format,
            entry,
            category,
            tag,
            query,
        } => {
            let mut state = ViewState::new(lang);
            state.filters = filters_from(category, tag, query);
            if let Some(reference) = entry {
                state = state.open_entry(&entry_id_from(&reference), &store);
            }

            let content = match format {
                ExportFormat::Html => render::page(&store, &state),
                ExportFormat::Json => {
                    let filtered = filter::apply(&store.entries, &state.filters, lang);
                    serde_json::to_string_pretty(&filtered)?
                }
                ExportFormat::Yaml => {
                    let filtered = filter::apply(&store.entries, &state.filters, lang);
                    serde_yaml::to_string(&filtered)?
                }
            };

            let path =
                out.unwrap_or_else(|| PathBuf::from(format!("journal.{}", format.extension())));
            std::fs::write(&path, content)?;
            println!("Snapshot saved to: {}", path.display());
        }
    }

    Ok(())
}
