use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Local};

use super::category::{classify, FileCategory, Platform};

/// Metadata gathered for one directory entry, before classification.
#[derive(Debug, Clone)]
pub struct EntryInfo {
    pub name: String,
    pub is_dir: bool,
    pub is_hidden: bool,
    pub mode: String,
    pub size: i64,
    pub modified: DateTime<Local>,
    pub owner: String,
    pub group: String,
}

impl EntryInfo {
    pub fn new(name: impl Into<String>, is_dir: bool) -> Self {
        let mode = if is_dir { "drwxr-xr-x" } else { "-rw-r--r--" };

        Self {
            name: name.into(),
            is_dir,
            is_hidden: false,
            mode: mode.to_string(),
            size: 0,
            modified: DateTime::from(UNIX_EPOCH),
            owner: String::new(),
            group: String::new(),
        }
    }

    pub fn with_size(mut self, size: i64) -> Self {
        self.size = size;
        self
    }

    pub fn with_modified(mut self, modified: SystemTime) -> Self {
        self.modified = DateTime::from(modified);
        self
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.is_hidden = hidden;
        self
    }

    pub fn with_owner(mut self, owner: impl Into<String>, group: impl Into<String>) -> Self {
        self.owner = owner.into();
        self.group = group.into();
        self
    }

    /// Freeze the metadata into an [`Entry`], deciding its category once.
    pub fn classify(self, platform: Platform) -> Entry {
        let category = classify(&self.mode, &self.name, self.is_dir, platform);
        let name_lower = self.name.to_lowercase();

        Entry {
            info: self,
            category,
            name_lower,
        }
    }
}

/// A classified directory entry. Immutable once built.
#[derive(Debug, Clone)]
pub struct Entry {
    info: EntryInfo,
    category: FileCategory,
    /// Pre-computed lowercase name for sorting
    name_lower: String,
}

impl Entry {
    pub fn name(&self) -> &str {
        &self.info.name
    }

    pub fn name_lower(&self) -> &str {
        &self.name_lower
    }

    pub fn category(&self) -> FileCategory {
        self.category
    }

    pub fn is_dir(&self) -> bool {
        self.info.is_dir
    }

    pub fn is_hidden(&self) -> bool {
        self.info.is_hidden
    }

    pub fn mode(&self) -> &str {
        &self.info.mode
    }

    pub fn size(&self) -> i64 {
        self.info.size
    }

    pub fn modified(&self) -> DateTime<Local> {
        self.info.modified
    }

    /// Modification time truncated to whole seconds.
    pub fn modified_secs(&self) -> i64 {
        self.info.modified.timestamp()
    }

    pub fn owner(&self) -> &str {
        &self.info.owner
    }

    pub fn group(&self) -> &str {
        &self.info.group
    }
}
