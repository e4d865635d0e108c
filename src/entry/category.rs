//! File type classification.
//!
//! Every listed entry falls into exactly one [`FileCategory`]. The category is
//! decided by a priority cascade over the mode string, the name and the
//! directory flag; the first matching rule wins.

use serde::{Deserialize, Serialize};

const EXE: &str = ".exe";
const COMPRESSED_SUFFIXES: [&str; 5] = [".zip", ".gz", ".tar", ".rar", ".deb"];
const IMAGE_SUFFIXES: [&str; 3] = [".png", ".jpg", ".gif"];

/// Closed set of file types shown by the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileCategory {
    #[default]
    Regular,
    Directory,
    Executable,
    Compressed,
    Image,
    SymbolicLink,
}

/// Platform flavour used by the executable rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Execute permission bits decide.
    Unix,
    /// The `.exe` suffix decides.
    Windows,
}

impl Platform {
    /// Platform this binary was built for.
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }
}

/// Classify an entry. Rule order matters: a directory called `archive.zip`
/// is a [`FileCategory::Directory`], and a symlink is never anything else.
pub fn classify(mode: &str, name: &str, is_dir: bool, platform: Platform) -> FileCategory {
    if is_link(mode) {
        FileCategory::SymbolicLink
    } else if is_dir {
        FileCategory::Directory
    } else if is_exec(mode, name, platform) {
        FileCategory::Executable
    } else if has_any_suffix(name, &COMPRESSED_SUFFIXES) {
        FileCategory::Compressed
    } else if has_any_suffix(name, &IMAGE_SUFFIXES) {
        FileCategory::Image
    } else {
        FileCategory::Regular
    }
}

fn is_link(mode: &str) -> bool {
    mode.chars()
        .next()
        .map_or(false, |c| c.eq_ignore_ascii_case(&'l'))
}

fn is_exec(mode: &str, name: &str, platform: Platform) -> bool {
    match platform {
        Platform::Windows => name.ends_with(EXE),
        Platform::Unix => mode.contains('x'),
    }
}

fn has_any_suffix(name: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|suffix| name.ends_with(suffix))
}
