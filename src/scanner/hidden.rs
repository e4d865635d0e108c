//! Hidden entry detection.
//!
//! Unix hides dotfiles by naming convention; Windows keeps a hidden bit in
//! the file attributes. Exactly one detector is compiled in as
//! [`PlatformDetector`].

use std::path::Path;

use super::ListError;

/// Decides whether a directory entry is hidden.
pub trait HiddenDetector {
    /// `dir` is the directory being listed and `name` the entry's base name.
    fn is_hidden(&self, dir: &Path, name: &str) -> Result<bool, ListError>;
}

/// Names starting with a dot are hidden. Purely lexical.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(windows, allow(dead_code))]
pub struct DotfileDetector;

impl HiddenDetector for DotfileDetector {
    fn is_hidden(&self, _dir: &Path, name: &str) -> Result<bool, ListError> {
        Ok(name.starts_with('.'))
    }
}

/// Reads `FILE_ATTRIBUTE_HIDDEN` from the entry's attributes.
#[cfg(windows)]
#[derive(Debug, Clone, Copy, Default)]
pub struct AttributeDetector;

#[cfg(windows)]
impl HiddenDetector for AttributeDetector {
    fn is_hidden(&self, dir: &Path, name: &str) -> Result<bool, ListError> {
        use std::os::windows::fs::MetadataExt;

        const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;

        let path = dir.join(name);
        let metadata = std::fs::symlink_metadata(&path)
            .map_err(|source| ListError::HiddenAttribute { path, source })?;

        Ok(metadata.file_attributes() & FILE_ATTRIBUTE_HIDDEN != 0)
    }
}

#[cfg(not(windows))]
pub type PlatformDetector = DotfileDetector;

#[cfg(windows)]
pub type PlatformDetector = AttributeDetector;
