// SPDX-License-Identifier: PMPL-1.0-or-later

//! Escaping-by-default markup buffer
//!
//! Everything appended through [`Html::text`] or [`Html::attr`] is
//! escaped. The only way to emit raw markup is [`Html::trusted`], which
//! names the content-trust decision at the call site.

use regex::Regex;
use std::sync::OnceLock;

/// Escape `& < > "` for safe interpolation into element bodies and
/// double-quoted attribute values.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Heuristic for author-supplied rich text: anything containing an
/// HTML-like tag pattern is treated as trusted markup and rendered
/// verbatim. Plain text never matches and is always escaped.
///
/// This mirrors the journal's authoring convention exactly, including
/// its risk: a plain-text entry written to look like a tag bypasses
/// escaping by design.
pub fn looks_like_markup(input: &str) -> bool {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN.get_or_init(|| {
        Regex::new(r"(?is)<[a-z].*>").expect("markup heuristic pattern is valid")
    });
    pattern.is_match(input)
}

/// Append-only markup buffer.
#[derive(Debug, Default)]
pub struct Html {
    buf: String,
}

impl Html {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append escaped text.
    pub fn text(&mut self, input: &str) -> &mut Self {
        self.buf.push_str(&escape(input));
        self
    }

    /// Append an escaped attribute value (same escape set; quotes are
    /// covered).
    pub fn attr(&mut self, input: &str) -> &mut Self {
        self.text(input)
    }

    /// Append raw markup. The trusted path: callers own the decision
    /// that `input` is markup, not text.
    pub fn trusted(&mut self, input: &str) -> &mut Self {
        self.buf.push_str(input);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_string(self) -> String {
        self.buf
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }
}
