//! Listed entries: the value type, its classification and ordering.

mod category;
mod node;
mod sort;

pub use category::{FileCategory, Platform};
pub use node::{Entry, EntryInfo};
pub use sort::{sort_entries, SortOptions};
