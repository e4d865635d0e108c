//! Directory reading for the listing.
//!
//! Reads exactly one directory level, applies the visibility and pattern
//! filters and gathers the metadata every listed entry needs.

mod hidden;
mod metadata;
mod walker;

pub use hidden::{HiddenDetector, PlatformDetector};
pub use walker::{ListOptions, Lister};

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a listing. None of them are retried.
#[derive(Error, Debug)]
pub enum ListError {
    /// The directory itself could not be read
    #[error("cannot read directory {path}: {source}")]
    ReadDir {
        /// The directory being listed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The listed path exists but is not a directory
    #[error("not a directory: {path}")]
    NotADirectory {
        /// The path that was expected to be a directory
        path: PathBuf,
    },

    /// The name filter is not a valid regular expression
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Metadata for a single entry could not be read
    #[error("cannot read metadata of {path}: {source}")]
    Metadata {
        /// The entry whose metadata failed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The platform refused to report the hidden attribute
    #[cfg_attr(not(windows), allow(dead_code))]
    #[error("cannot read attributes of {path}: {source}")]
    HiddenAttribute {
        /// The entry whose attributes were queried
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
