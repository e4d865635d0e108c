//! Fixed-column text rendering of a sorted listing.

use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::entry::Entry;

use super::colors::StyleTable;

/// Display width of the owner and group columns.
const NAME_COLUMN_WIDTH: usize = 8;
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Default glyph appended to hidden entries.
pub const DEFAULT_HIDDEN_MARKER: &str = "\u{00F8}";

/// First `limit` entries; `0` or a limit past the end means all of them.
pub fn limit_entries(entries: &[Entry], limit: usize) -> &[Entry] {
    if limit == 0 || limit > entries.len() {
        entries
    } else {
        &entries[..limit]
    }
}

/// Turns entries into report lines.
pub struct Presenter<'a> {
    styles: &'a StyleTable,
    hidden_marker: String,
    color: bool,
}

impl<'a> Presenter<'a> {
    pub fn new(styles: &'a StyleTable) -> Self {
        Self {
            styles,
            hidden_marker: DEFAULT_HIDDEN_MARKER.to_string(),
            color: true,
        }
    }

    pub fn with_hidden_marker(mut self, marker: impl Into<String>) -> Self {
        self.hidden_marker = marker.into();
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Render the first `limit` entries, one line each, in the given order.
    pub fn render(&self, entries: &[Entry], limit: usize) -> Vec<String> {
        limit_entries(entries, limit)
            .iter()
            .map(|entry| self.render_line(entry))
            .collect()
    }

    /// `mode owner group size time icon name+symbol marker`
    pub fn render_line(&self, entry: &Entry) -> String {
        let style = self.styles.style(entry.category());

        format!(
            "{:>11} {} {} {:>10} {} {} {}{} {}",
            entry.mode(),
            fit_width(entry.owner(), NAME_COLUMN_WIDTH),
            fit_width(entry.group(), NAME_COLUMN_WIDTH),
            entry.size(),
            entry.modified().format(TIME_FORMAT),
            style.icon,
            self.paint_name(entry.name(), style.color),
            style.symbol,
            self.hidden_mark(entry.is_hidden()),
        )
    }

    fn paint_name(&self, name: &str, color: Option<colored::Color>) -> String {
        match color {
            Some(color) if self.color => name.color(color).bold().to_string(),
            _ => name.to_string(),
        }
    }

    fn hidden_mark(&self, hidden: bool) -> String {
        if !hidden {
            String::new()
        } else if self.color {
            self.hidden_marker.as_str().color(self.styles.hidden_marker).to_string()
        } else {
            self.hidden_marker.clone()
        }
    }
}

/// Pad to exactly `width` display columns, cutting wider text.
fn fit_width(s: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut used = 0;

    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }

    out.push_str(&" ".repeat(width.saturating_sub(out.width())));
    out
}
