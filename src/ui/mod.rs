pub mod colors;
mod layout;

pub use colors::StyleTable;
pub use layout::{limit_entries, Presenter, DEFAULT_HIDDEN_MARKER};
