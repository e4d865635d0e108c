//! Ordering of classified entries.
//!
//! Sorting is applied as a cascade of stable passes decided by the `-s`,
//! `-t` and `-r` flags. Each pass re-sorts on top of whatever order the
//! previous pass left, so ties always fall back to the earlier order.

use std::cmp::Ordering;

use tracing::debug;

use super::Entry;

/// Key of a single sort pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    /// Case-folded name.
    Name,
    /// Byte size.
    Size,
    /// Modification time in whole seconds.
    Modified,
}

/// Sort flags as given on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortOptions {
    pub by_size: bool,
    pub by_time: bool,
    pub reverse: bool,
}

impl SortOptions {
    /// Passes to run, in order.
    ///
    /// Name ordering runs unless both size and time were requested; size
    /// ordering runs only without time; time ordering runs last whenever it
    /// was requested.
    pub fn passes(&self) -> Vec<SortBy> {
        let mut passes = Vec::with_capacity(2);

        if !self.by_size || !self.by_time {
            passes.push(SortBy::Name);
        }
        if self.by_size && !self.by_time {
            passes.push(SortBy::Size);
        }
        if self.by_time {
            passes.push(SortBy::Modified);
        }

        passes
    }
}

/// Sort entries in place according to the flag cascade.
pub fn sort_entries(entries: &mut [Entry], options: SortOptions) {
    for key in options.passes() {
        debug!(?key, reverse = options.reverse, count = entries.len(), "sort pass");
        sort_by_key(entries, key, options.reverse);
    }
}

/// One stable pass. `reverse` flips the comparator, so equal entries keep
/// their relative order in both directions.
pub fn sort_by_key(entries: &mut [Entry], key: SortBy, reverse: bool) {
    entries.sort_by(|a, b| {
        let ordering = compare(a, b, key);
        if reverse {
            ordering.reverse()
        } else {
            ordering
        }
    });
}

fn compare(a: &Entry, b: &Entry, key: SortBy) -> Ordering {
    match key {
        SortBy::Name => a.name_lower().cmp(b.name_lower()),
        SortBy::Size => a.size().cmp(&b.size()),
        SortBy::Modified => a.modified_secs().cmp(&b.modified_secs()),
    }
}
