//! Display styles for each file category.
//!
//! The table is plain data, built once at startup and handed to the
//! presenter by reference.

use colored::Color;

use crate::entry::FileCategory;

/// How one category is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    /// Icon printed before the name
    pub icon: &'static str,
    /// Name color; `None` leaves the name uncolored
    pub color: Option<Color>,
    /// Suffix printed right after the name
    pub symbol: &'static str,
}

impl Style {
    const fn new(icon: &'static str, color: Option<Color>, symbol: &'static str) -> Self {
        Self { icon, color, symbol }
    }
}

/// Style lookup keyed by [`FileCategory`].
#[derive(Debug, Clone)]
pub struct StyleTable {
    pub regular: Style,
    pub directory: Style,
    pub executable: Style,
    pub compressed: Style,
    pub image: Style,
    pub symlink: Style,
    /// Color of the hidden-entry marker
    pub hidden_marker: Color,
}

impl Default for StyleTable {
    fn default() -> Self {
        Self {
            regular: Style::new("\u{1F4C4}", None, ""),                        // Page facing up
            directory: Style::new("\u{1F4C2}", Some(Color::Blue), "/"),        // Open folder
            executable: Style::new("\u{1F680}", Some(Color::Green), "*"),      // Rocket
            compressed: Style::new("\u{1F4E6}", Some(Color::Red), ""),         // Package
            image: Style::new("\u{1F5BC}\u{FE0F}", Some(Color::Magenta), ""),  // Framed picture
            symlink: Style::new("\u{1F517}", Some(Color::Cyan), ""),           // Link
            hidden_marker: Color::Yellow,
        }
    }
}

impl StyleTable {
    pub fn style(&self, category: FileCategory) -> &Style {
        match category {
            FileCategory::Regular => &self.regular,
            FileCategory::Directory => &self.directory,
            FileCategory::Executable => &self.executable,
            FileCategory::Compressed => &self.compressed,
            FileCategory::Image => &self.image,
            FileCategory::SymbolicLink => &self.symlink,
        }
    }
}
