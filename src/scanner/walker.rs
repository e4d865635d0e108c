//! Single-level directory reader built on walkdir.

use std::path::{Path, PathBuf};

use regex::{Regex, RegexBuilder};
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

use crate::entry::{Entry, EntryInfo, Platform};

use super::metadata::{mode_string, owner_and_group};
use super::{HiddenDetector, ListError, PlatformDetector};

/// What to read and which entries to keep.
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// The directory to list
    pub path: PathBuf,
    /// Case-insensitive regex on entry names; empty means no filter
    pub pattern: String,
    /// Whether hidden entries are kept
    pub show_hidden: bool,
}

impl ListOptions {
    /// Create list options with default values
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            pattern: String::new(),
            show_hidden: false,
        }
    }

    /// Set the name pattern
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Set whether hidden entries are shown
    pub fn with_show_hidden(mut self, show: bool) -> Self {
        self.show_hidden = show;
        self
    }
}

/// Reads one directory and turns its entries into classified [`Entry`]s.
pub struct Lister<D = PlatformDetector> {
    options: ListOptions,
    pattern: Option<Regex>,
    detector: D,
    platform: Platform,
}

impl Lister<PlatformDetector> {
    /// Lister for the platform this binary was built for.
    pub fn new(options: ListOptions) -> Result<Self, ListError> {
        Self::with_detector(options, PlatformDetector::default(), Platform::current())
    }
}

impl<D: HiddenDetector> Lister<D> {
    /// Compiles the pattern up front, so a bad pattern fails before any I/O.
    pub fn with_detector(options: ListOptions, detector: D, platform: Platform) -> Result<Self, ListError> {
        let pattern = if options.pattern.is_empty() {
            None
        } else {
            Some(
                RegexBuilder::new(&options.pattern)
                    .case_insensitive(true)
                    .build()?,
            )
        };

        Ok(Self {
            options,
            pattern,
            detector,
            platform,
        })
    }

    /// Read the directory. Entries come back in file name order, which is
    /// the order the sorter starts from.
    pub fn list(&self) -> Result<Vec<Entry>, ListError> {
        let root = self.options.path.as_path();

        let metadata = std::fs::metadata(root).map_err(|source| ListError::ReadDir {
            path: root.to_path_buf(),
            source,
        })?;

        if !metadata.is_dir() {
            return Err(ListError::NotADirectory {
                path: root.to_path_buf(),
            });
        }

        let walker = WalkDir::new(root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name();

        let mut entries = Vec::new();
        let mut skipped = 0usize;

        for dir_entry in walker {
            let dir_entry = dir_entry.map_err(|err| walk_error(root, err))?;
            let name = dir_entry.file_name().to_string_lossy().into_owned();

            let is_hidden = self.detector.is_hidden(root, &name)?;
            if is_hidden && !self.options.show_hidden {
                trace!(%name, "skipping hidden entry");
                skipped += 1;
                continue;
            }

            if let Some(pattern) = &self.pattern {
                if !pattern.is_match(&name) {
                    trace!(%name, "entry does not match pattern");
                    skipped += 1;
                    continue;
                }
            }

            entries.push(self.read_entry(&dir_entry, name, is_hidden)?);
        }

        debug!(path = %root.display(), listed = entries.len(), skipped, "directory read");

        Ok(entries)
    }

    fn read_entry(&self, dir_entry: &DirEntry, name: String, is_hidden: bool) -> Result<Entry, ListError> {
        let path = dir_entry.path();
        let metadata = dir_entry.metadata().map_err(|err| ListError::Metadata {
            path: path.to_path_buf(),
            source: err.into(),
        })?;
        let modified = metadata.modified().map_err(|source| ListError::Metadata {
            path: path.to_path_buf(),
            source,
        })?;
        let (owner, group) = owner_and_group(&metadata);
        let size = i64::try_from(metadata.len()).unwrap_or(i64::MAX);

        let entry = EntryInfo::new(name, dir_entry.file_type().is_dir())
            .with_hidden(is_hidden)
            .with_mode(mode_string(&metadata))
            .with_size(size)
            .with_modified(modified)
            .with_owner(owner, group)
            .classify(self.platform);

        Ok(entry)
    }
}

/// Errors at depth 0 concern the directory itself, deeper ones a single entry.
fn walk_error(root: &Path, err: walkdir::Error) -> ListError {
    let path = err.path().map(Path::to_path_buf).unwrap_or_else(|| root.to_path_buf());

    if err.depth() == 0 {
        ListError::ReadDir {
            path,
            source: err.into(),
        }
    } else {
        ListError::Metadata {
            path,
            source: err.into(),
        }
    }
}
