// SPDX-License-Identifier: PMPL-1.0-or-later

//! Spark Journal — bilingual journal viewer.
//!
//! Loads a single JSON document of dated entries and categories and
//! presents it as a filterable, searchable card list with a detail
//! drawer, in Hebrew or English.
//!
//! VIEWER PILLARS:
//! 1. **Store**: the document is fetched once and held immutable; all
//!    views are pure projections of it.
//! 2. **State**: one explicit record owns language, filters, and the
//!    open entry; reducer-style transitions keep every surface in step.
//! 3. **Surfaces**: the same model renders to an interactive terminal
//!    session, plain styled stdout, and an escaped-by-default static
//!    HTML page.

pub mod debounce;
pub mod facets;
pub mod filter;
pub mod format;
pub mod i18n;
pub mod nav;
pub mod render;
pub mod state;
pub mod store;
pub mod tui;
pub mod types;
