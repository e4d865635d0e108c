use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::entry::{Entry, FileCategory};
use crate::ui::limit_entries;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One listed entry as written to JSON
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportEntry {
    pub name: String,
    pub category: FileCategory,
    pub is_dir: bool,
    pub is_hidden: bool,
    pub owner: String,
    pub group: String,
    pub size: i64,
    pub modified: String,
    pub mode: String,
}

impl From<&Entry> for ExportEntry {
    fn from(entry: &Entry) -> Self {
        Self {
            name: entry.name().to_string(),
            category: entry.category(),
            is_dir: entry.is_dir(),
            is_hidden: entry.is_hidden(),
            owner: entry.owner().to_string(),
            group: entry.group().to_string(),
            size: entry.size(),
            modified: entry.modified().format(TIME_FORMAT).to_string(),
            mode: entry.mode().to_string(),
        }
    }
}

/// Export the sorted listing as a JSON array
///
/// # Arguments
/// * `entries` - Entries in final display order
/// * `limit` - Same meaning as `-n`: 0 or past the end exports everything
/// * `writer` - Output writer for the JSON
pub fn export_json(entries: &[Entry], limit: usize, writer: &mut impl Write) -> Result<(), std::io::Error> {
    let exported: Vec<ExportEntry> = limit_entries(entries, limit)
        .iter()
        .map(ExportEntry::from)
        .collect();

    serde_json::to_writer_pretty(writer, &exported)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
}
