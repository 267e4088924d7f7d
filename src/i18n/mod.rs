// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation module for spark-journal.
//!
//! The viewer is bilingual: Hebrew is the primary language and English the
//! secondary. UI chrome strings and severity labels live in an embedded
//! compile-time catalog; entry content is localized separately by the
//! field resolver on [`crate::types::Entry`].
//!
//! Lookups never fail: a key missing in the requested language falls back
//! to the other catalog, and an unknown key resolves to the empty string.

mod catalog;

pub use catalog::{severity_label, t, Lang};
