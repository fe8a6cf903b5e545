//! Rendering module - pure projections of resume data.
//!
//! Two projection surfaces live here, both framework-agnostic and free of
//! side effects:
//!
//! - [`form`]: projects the active template's section spec plus store data
//!   into typed editable form views, and translates form edits back into
//!   store mutations (including the text-to-sequence transforms).
//! - [`preview`]: projects the aggregate into one of three fixed HTML
//!   layouts and wraps it into a printable document (A4 page styling).
//!
//! Identical inputs always produce identical output; no renderer mutates
//! data. Renderers guard every empty collection, so the worst outcome of
//! odd input is a visually incomplete document, never a panic.

pub mod form;
mod layouts;
pub mod preview;

use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

/// Format a month-granularity date string (`"2020-01"`) as `"Jan 2020"`.
///
/// Empty input renders empty; anything unparseable is passed through
/// verbatim rather than becoming a formatting artifact.
pub fn format_month(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    match NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d") {
        Ok(date) => date.format("%b %Y").to_string(),
        Err(_) => value.to_string(),
    }
}

fn bullet_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[•\-\*]\s*").expect("Invalid bullet marker regex"))
}

/// Strip a leading bullet glyph (`•`, `-` or `*`) from a description line.
///
/// Layouts re-render their own markers, so user-typed glyphs are removed
/// first to avoid doubled bullets.
pub fn strip_bullet(line: &str) -> String {
    bullet_marker().replace(line, "").into_owned()
}

/// Escape text for safe interpolation into HTML.
pub fn html_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
