// SPDX-License-Identifier: PMPL-1.0-or-later

//! Navigation routes and history
//!
//! The location fragment is the one externally visible piece of state:
//! `entry/<id>` means "that entry's drawer is open", anything else means
//! closed. [`Nav`] reproduces the browser history discipline: opening
//! pushes a new point only when the fragment actually changes, closing
//! rewrites only when an entry suffix is present, and going back reliably
//! closes the view.

use crate::store::Store;

const ENTRY_PREFIX: &str = "entry/";

/// Parsed navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Closed,
    Entry(String),
}

impl Route {
    /// Parse a location fragment. Accepts an optional leading `#`;
    /// percent-escapes in the id are decoded. Anything that is not an
    /// entry reference is `Closed`.
    pub fn parse(fragment: &str) -> Route {
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
        match fragment.strip_prefix(ENTRY_PREFIX) {
            Some(id) if !id.is_empty() => Route::Entry(percent_decode(id)),
            _ => Route::Closed,
        }
    }

    /// Fragment form: `entry/<id>`, or empty for closed.
    pub fn fragment(&self) -> String {
        match self {
            Route::Closed => String::new(),
            Route::Entry(id) => format!("{}{}", ENTRY_PREFIX, id),
        }
    }

    /// Resolve against the store: an entry route with an unknown id
    /// collapses to `Closed` (deep links to missing entries no-op).
    pub fn resolve(&self, store: &Store) -> Route {
        match self {
            Route::Entry(id) if store.entry(id).is_none() => Route::Closed,
            other => other.clone(),
        }
    }
}

fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let hex = std::str::from_utf8(&bytes[i + 1..i + 3])
                .ok()
                .and_then(|pair| u8::from_str_radix(pair, 16).ok());
            if let Some(byte) = hex {
                out.push(byte);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Linear navigation history over routes.
#[derive(Debug, Clone)]
pub struct Nav {
    stack: Vec<Route>,
}

impl Nav {
    pub fn new() -> Self {
        Self {
            stack: vec![Route::Closed],
        }
    }

    /// Start from a deep-linked route.
    pub fn starting_at(route: Route) -> Self {
        let mut nav = Self::new();
        if route != Route::Closed {
            nav.stack.push(route);
        }
        nav
    }

    pub fn current(&self) -> &Route {
        self.stack.last().expect("nav stack is never empty")
    }

    /// Record an entry opening. Pushes a new history point only when the
    /// fragment differs from the current one; reopening the same entry
    /// leaves history untouched.
    pub fn open(&mut self, id: &str) -> bool {
        let route = Route::Entry(id.to_string());
        if *self.current() == route {
            return false;
        }
        self.stack.push(route);
        true
    }

    /// Record an explicit close. Rewrites the fragment only when an
    /// entry suffix was present, so closing an already-closed view never
    /// creates a spurious history point.
    pub fn close(&mut self) -> bool {
        if *self.current() == Route::Closed {
            return false;
        }
        self.stack.push(Route::Closed);
        true
    }

    /// Step back one history point (browser back). Returns the route
    /// now current.
    pub fn back(&mut self) -> &Route {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
        self.current()
    }
}

impl Default for Nav {
    fn default() -> Self {
        Self::new()
    }
}
