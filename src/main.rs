mod entry;
mod export;
mod logging;
mod scanner;
mod ui;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use entry::{sort_entries, Entry, SortOptions};
use export::export_json;
use scanner::{ListOptions, Lister};
use ui::{Presenter, StyleTable, DEFAULT_HIDDEN_MARKER};

#[derive(Parser, Debug)]
#[command(name = "edls")]
#[command(version)]
#[command(about = "Directory listing with file type icons, colors and sorting", long_about = None)]
struct Args {
    /// Directory to list (default: current directory)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Filter by pattern (case-insensitive regular expression)
    #[arg(short = 'p', long, default_value = "")]
    pattern: String,

    /// All files including hidden files
    #[arg(short = 'a', long)]
    all: bool,

    /// Number of records to print (0 prints everything)
    #[arg(short = 'n', long = "number", default_value_t = 0)]
    number: usize,

    /// Sort by time, oldest first
    #[arg(short = 't', long = "time")]
    by_time: bool,

    /// Sort by file size, smallest first
    #[arg(short = 's', long = "size")]
    by_size: bool,

    /// Reverse order while sorting
    #[arg(short = 'r', long)]
    reverse: bool,

    /// Output JSON instead of text lines
    #[arg(long)]
    json: bool,

    /// Disable colors (NO_COLOR is honored as well)
    #[arg(long)]
    no_color: bool,

    /// Glyph appended to hidden entries
    #[arg(long, default_value = DEFAULT_HIDDEN_MARKER)]
    hidden_marker: String,
}

impl Args {
    fn list_options(&self) -> ListOptions {
        ListOptions::new(self.path.clone())
            .with_pattern(self.pattern.clone())
            .with_show_hidden(self.all)
    }

    fn sort_options(&self) -> SortOptions {
        SortOptions {
            by_size: self.by_size,
            by_time: self.by_time,
            reverse: self.reverse,
        }
    }

    fn use_color(&self) -> bool {
        !self.no_color && std::env::var_os("NO_COLOR").is_none()
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_logging();
    debug!(?args, "starting");

    // Everything is read and sorted before the first byte is printed
    let entries = collect_entries(&args)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.json {
        export_json(&entries, args.number, &mut out)?;
        writeln!(out)?;
        return Ok(());
    }

    let color = args.use_color();
    if !color {
        colored::control::set_override(false);
    }

    let styles = StyleTable::default();
    for line in render(&args, &styles, color, &entries) {
        writeln!(out, "{}", line)?;
    }

    Ok(())
}

/// Read, filter and sort the requested directory.
fn collect_entries(args: &Args) -> Result<Vec<Entry>> {
    let lister = Lister::new(args.list_options())?;
    let mut entries = lister.list()?;
    sort_entries(&mut entries, args.sort_options());
    Ok(entries)
}

fn render(args: &Args, styles: &StyleTable, color: bool, entries: &[Entry]) -> Vec<String> {
    Presenter::new(styles)
        .with_color(color)
        .with_hidden_marker(args.hidden_marker.clone())
        .render(entries, args.number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    fn args(dir: &TempDir, flags: &[&str]) -> Args {
        let mut argv = vec!["edls".to_string()];
        argv.extend(flags.iter().map(|f| f.to_string()));
        argv.push(dir.path().to_string_lossy().to_string());
        Args::parse_from(argv)
    }

    fn lines(args: &Args) -> Vec<String> {
        let styles = StyleTable::default();
        let entries = collect_entries(args).unwrap();
        render(args, &styles, false, &entries)
    }

    fn listed_names(args: &Args) -> Vec<String> {
        collect_entries(args)
            .unwrap()
            .iter()
            .map(|e| e.name().to_string())
            .collect()
    }

    fn set_mtime(path: &std::path::Path, secs: u64) {
        let file = fs::File::options().write(true).open(path).unwrap();
        file.set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
            .unwrap();
    }

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["edls"]);
        assert_eq!(args.path, PathBuf::from("."));
        assert_eq!(args.pattern, "");
        assert_eq!(args.number, 0);
        assert!(!args.all && !args.by_time && !args.by_size && !args.reverse);
        assert_eq!(args.hidden_marker, DEFAULT_HIDDEN_MARKER);
    }

    #[test]
    fn test_short_flags() {
        let args = Args::parse_from(["edls", "-a", "-t", "-s", "-r", "-n", "3", "-p", "^a", "/tmp"]);
        assert!(args.all && args.by_time && args.by_size && args.reverse);
        assert_eq!(args.number, 3);
        assert_eq!(args.pattern, "^a");
        assert_eq!(args.path, PathBuf::from("/tmp"));
    }

    #[cfg(unix)]
    #[test]
    fn test_default_listing_scenario() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("file.txt"), "text").unwrap();
        fs::write(dir.path().join(".secret"), "").unwrap();
        fs::create_dir(dir.path().join("bin")).unwrap();

        let output = lines(&args(&dir, &[]));
        assert_eq!(output.len(), 2);
        assert!(output[0].contains(" bin/ "));
        assert!(output[1].contains(" file.txt "));
        assert!(output.iter().all(|l| !l.contains(".secret")));

        let output = lines(&args(&dir, &["-a"]));
        assert_eq!(output.len(), 3);
        assert!(output[0].contains(".secret"));
        assert!(output[0].ends_with(DEFAULT_HIDDEN_MARKER));
    }

    #[test]
    fn test_name_order_ignores_case() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["Banana", "apple", "cherry"] {
            fs::write(dir.path().join(name), "").unwrap();
        }

        assert_eq!(listed_names(&args(&dir, &[])), ["apple", "Banana", "cherry"]);
        assert_eq!(listed_names(&args(&dir, &["-r"])), ["cherry", "Banana", "apple"]);
    }

    #[test]
    fn test_truncation_after_sort() {
        let dir = tempfile::tempdir().unwrap();
        for (name, size) in [("a", 50), ("b", 10), ("c", 40), ("d", 20), ("e", 30)] {
            fs::write(dir.path().join(name), vec![b'x'; size]).unwrap();
        }

        let args = args(&dir, &["-s", "-n", "2"]);
        let output = lines(&args);
        assert_eq!(output.len(), 2);
        assert!(output[0].ends_with(" b "));
        assert!(output[1].ends_with(" d "));
    }

    #[test]
    fn test_size_order_with_reverse() {
        let dir = tempfile::tempdir().unwrap();
        for (name, size) in [("small", 1), ("large", 300), ("medium", 20)] {
            fs::write(dir.path().join(name), vec![b'x'; size]).unwrap();
        }

        assert_eq!(listed_names(&args(&dir, &["-s"])), ["small", "medium", "large"]);
        assert_eq!(listed_names(&args(&dir, &["-s", "-r"])), ["large", "medium", "small"]);
    }

    #[test]
    fn test_time_order() {
        let dir = tempfile::tempdir().unwrap();
        for (name, secs) in [("old", 1_000), ("new", 3_000), ("mid", 2_000)] {
            let path = dir.path().join(name);
            fs::write(&path, "").unwrap();
            set_mtime(&path, secs);
        }

        assert_eq!(listed_names(&args(&dir, &["-t"])), ["old", "mid", "new"]);
        assert_eq!(listed_names(&args(&dir, &["-t", "-r"])), ["new", "mid", "old"]);
        // Time wins over size when both are given
        assert_eq!(listed_names(&args(&dir, &["-t", "-s"])), ["old", "mid", "new"]);
    }

    #[test]
    fn test_pattern_filter() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["apple", "banana", "Avocado"] {
            fs::write(dir.path().join(name), "").unwrap();
        }

        assert_eq!(listed_names(&args(&dir, &["-p", "^a"])), ["apple", "Avocado"]);
    }

    #[test]
    fn test_invalid_pattern_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let result = collect_entries(&args(&dir, &["-p", "("]));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_directory_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let args = Args::parse_from(["edls".to_string(), dir.path().join("nope").to_string_lossy().to_string()]);
        let err = collect_entries(&args).unwrap_err();
        assert!(err.to_string().contains("nope"));
    }
}
