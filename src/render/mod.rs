// SPDX-License-Identifier: PMPL-1.0-or-later

//! HTML rendering surfaces
//!
//! All markup flows through [`html::Html`], which escapes by default and
//! exposes a single explicitly named trusted path for content that is
//! already markup. Cards and the drawer produce fragments; `page`
//! assembles a full standalone document for static export.

pub mod cards;
pub mod drawer;
pub mod html;
pub mod page;

pub use cards::{card, card_list, format_date};
pub use drawer::{details_body, drawer, DetailsBody};
pub use html::{escape, looks_like_markup, Html};
pub use page::page;
