//! Named color palettes
//!
//! A palette is an insertion-ordered mapping from color name to color value.
//! Values are opaque strings: either a hex triplet (`#3b3b3b`) or a color
//! name the rendering backend understands (`gray`). No color-space
//! validation is performed here.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Display name of the built-in default palette.
pub const DEFAULT_PALETTE_NAME: &str = "Irag's Palette (Default)";

/// A named collection of colors.
///
/// Lookup is by exact key; insertion order is preserved for display only.
/// `color()` returns `None` on a miss rather than panicking, so callers
/// decide how to handle unknown names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorPalette {
    /// Display name of the palette
    pub name: String,
    /// Color entries, keyed by name
    colors: IndexMap<String, String>,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::new(DEFAULT_PALETTE_NAME)
    }
}

impl ColorPalette {
    /// Create a palette with the built-in entry set.
    pub fn new(name: impl Into<String>) -> Self {
        let mut colors = IndexMap::new();
        for (key, value) in [
            ("push to bg", "#DDDDDD"),
            ("dark gray", "#3b3b3b"),
            ("gray", "gray"),
            ("light gray", "#BFBFBF"),
            ("dark blue", "#072ea5"),
            ("blue", "#5099fe"),
            ("light blue", "#91c2ed"),
            ("light orange", "#fbb181"),
            ("orange", "#FB7B33"),
            ("dark orange", "#ff3e06"),
            ("dark teal", "#299ba1"),
            ("teal", "#2e99a2"),
            ("light teal", "#8af0dd"),
            ("soft black", "#333333"),
        ] {
            colors.insert(key.to_string(), value.to_string());
        }

        Self {
            name: name.into(),
            colors,
        }
    }

    /// Create a palette with no entries.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            colors: IndexMap::new(),
        }
    }

    /// Insert a color, overwriting any existing entry with the same name.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.colors.insert(name.into(), value.into());
    }

    /// Look up a color by name. Returns `None` when the name is unknown.
    pub fn color(&self, name: &str) -> Option<&str> {
        self.colors.get(name).map(String::as_str)
    }

    /// Remove a color. Removing an unknown name is not an error; it logs a
    /// warning and leaves the palette unchanged. Returns whether an entry
    /// was actually removed.
    pub fn remove(&mut self, name: &str) -> bool {
        if self.colors.shift_remove(name).is_some() {
            true
        } else {
            tracing::warn!(color = name, palette = %self.name, "color not found in palette");
            false
        }
    }

    /// Borrow the full entry set.
    ///
    /// The returned map is a view into live palette state; it reflects any
    /// later `add`/`remove` on a fresh borrow.
    pub fn colors(&self) -> &IndexMap<String, String> {
        &self.colors
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette has no entries.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Save the palette as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(path, json)
    }

    /// Load a palette from a JSON file.
    pub fn load(path: &Path) -> std::io::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}

impl fmt::Display for ColorPalette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.colors.is_empty() {
            return write!(f, "{} is empty.", self.name);
        }
        writeln!(f, "Palette: {}", self.name)?;
        for (name, value) in &self.colors {
            writeln!(f, "{name}: {value}")?;
        }
        Ok(())
    }
}
