//! Style sheets and their application to a rendering backend
//!
//! A [`StyleSheet`] holds the resolved styling defaults (spine visibility,
//! label and tick colors, font, label placement). It is applied explicitly
//! to a [`StyleTarget`] — the styling-parameter table of whatever rendering
//! backend the caller uses — as a one-way write; nothing is read back.

use crate::palette::ColorPalette;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Style resolution error types
#[derive(Error, Debug)]
pub enum StyleError {
    /// A style sheet referenced a palette entry that does not exist
    #[error("color '{name}' not found in palette '{palette}'")]
    ColorNotFound {
        /// Requested color name
        name: String,
        /// Palette the lookup ran against
        palette: String,
    },
}

/// Axis label placement along its axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelLocation {
    /// Leading edge of the x axis
    Left,
    /// Centered (backend default)
    Center,
    /// Trailing edge of the x axis
    Right,
    /// Bottom of the y axis
    Bottom,
    /// Top of the y axis
    Top,
}

impl LabelLocation {
    /// The literal the backend's parameter table expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Top => "top",
        }
    }
}

impl fmt::Display for LabelLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receiving side of a style application: the rendering backend's global
/// styling-parameter table.
///
/// Writes are one-way; implementations must accept any key this crate emits
/// and must not be consulted for current values.
pub trait StyleTarget {
    /// Set one styling parameter.
    fn set_param(&mut self, key: &str, value: &str);

    /// Register a font file with the backend's font manager.
    fn register_font(&mut self, path: &Path);

    /// Set the default color cycle used for plotted series.
    fn set_default_palette(&mut self, colors: &[String]);
}

/// In-memory [`StyleTarget`].
///
/// Stands in for a real backend in the CLI and in tests; keeps parameters in
/// insertion order so a dump is stable.
#[derive(Debug, Clone, Default)]
pub struct ParamTable {
    params: IndexMap<String, String>,
    fonts: Vec<PathBuf>,
    default_palette: Vec<String>,
}

impl ParamTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a parameter.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// All parameters, in the order they were set.
    pub fn params(&self) -> &IndexMap<String, String> {
        &self.params
    }

    /// Registered font files.
    pub fn fonts(&self) -> &[PathBuf] {
        &self.fonts
    }

    /// Current default color cycle.
    pub fn default_palette(&self) -> &[String] {
        &self.default_palette
    }
}

impl StyleTarget for ParamTable {
    fn set_param(&mut self, key: &str, value: &str) {
        self.params.insert(key.to_string(), value.to_string());
    }

    fn register_font(&mut self, path: &Path) {
        self.fonts.push(path.to_path_buf());
    }

    fn set_default_palette(&mut self, colors: &[String]) {
        self.default_palette = colors.to_vec();
    }
}

impl fmt::Display for ParamTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.params {
            writeln!(f, "{key} = {value}")?;
        }
        for font in &self.fonts {
            writeln!(f, "font registered: {}", font.display())?;
        }
        if !self.default_palette.is_empty() {
            writeln!(f, "default palette = {:?}", self.default_palette)?;
        }
        Ok(())
    }
}

/// Resolved styling defaults, ready to apply to a backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleSheet {
    /// Show the top spine
    pub spines_top: bool,
    /// Show the right spine
    pub spines_right: bool,
    /// Axis label color
    pub label_color: String,
    /// Axes title color
    pub title_color: String,
    /// X tick mark color
    pub xtick_color: String,
    /// Y tick mark color
    pub ytick_color: String,
    /// X tick label color
    pub xtick_label_color: String,
    /// Y tick label color
    pub ytick_label_color: String,
    /// Font family name
    pub font_family: String,
    /// Local path of the font file to register
    pub font_path: PathBuf,
    /// X axis label placement
    pub x_label_location: LabelLocation,
    /// Y axis label placement
    pub y_label_location: LabelLocation,
    /// Padding between axis and label, in points
    pub label_pad: f64,
    /// Axes edge (frame) color
    pub edge_color: String,
    /// Default color cycle for plotted series
    pub plot_palette: Vec<String>,
}

impl StyleSheet {
    /// Build the default style sheet from a palette.
    ///
    /// `font_path` must be the path returned by
    /// [`FontCache::ensure_cached`](crate::assets::FontCache::ensure_cached);
    /// the sheet never recomputes it. Any palette name the sheet needs that
    /// is missing fails with [`StyleError::ColorNotFound`] rather than
    /// letting an unresolved value reach the backend.
    pub fn from_palette(
        palette: &ColorPalette,
        font_family: impl Into<String>,
        font_path: impl Into<PathBuf>,
    ) -> Result<Self, StyleError> {
        let resolve = |name: &str| -> Result<String, StyleError> {
            palette
                .color(name)
                .map(str::to_string)
                .ok_or_else(|| StyleError::ColorNotFound {
                    name: name.to_string(),
                    palette: palette.name.clone(),
                })
        };

        Ok(Self {
            spines_top: false,
            spines_right: false,
            label_color: resolve("soft black")?,
            title_color: resolve("dark gray")?,
            xtick_color: resolve("light gray")?,
            ytick_color: resolve("light gray")?,
            xtick_label_color: resolve("gray")?,
            ytick_label_color: resolve("soft black")?,
            font_family: font_family.into(),
            font_path: font_path.into(),
            x_label_location: LabelLocation::Left,
            y_label_location: LabelLocation::Top,
            label_pad: 10.0,
            edge_color: resolve("light gray")?,
            plot_palette: vec![resolve("gray")?],
        })
    }

    /// Write every styling parameter into `target`, register the font, and
    /// set the default plot palette.
    ///
    /// Call this exactly once during startup, after the font is cached.
    pub fn apply(&self, target: &mut dyn StyleTarget) {
        target.register_font(&self.font_path);

        target.set_param("axes.spines.top", bool_str(self.spines_top));
        target.set_param("axes.spines.right", bool_str(self.spines_right));
        target.set_param("axes.labelcolor", &self.label_color);
        target.set_param("axes.titlecolor", &self.title_color);
        target.set_param("xtick.color", &self.xtick_color);
        target.set_param("ytick.color", &self.ytick_color);
        target.set_param("xtick.labelcolor", &self.xtick_label_color);
        target.set_param("ytick.labelcolor", &self.ytick_label_color);
        target.set_param("font.family", &self.font_family);
        target.set_param("xaxis.labellocation", self.x_label_location.as_str());
        target.set_param("yaxis.labellocation", self.y_label_location.as_str());
        target.set_param("axes.labelpad", &self.label_pad.to_string());
        target.set_param("axes.edgecolor", &self.edge_color);

        target.set_default_palette(&self.plot_palette);

        tracing::debug!(
            font = %self.font_family,
            params = 13,
            "style sheet applied"
        );
    }
}

fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet() -> StyleSheet {
        let palette = ColorPalette::default();
        StyleSheet::from_palette(&palette, "Roboto", "cache/Roboto-Bold.ttf").unwrap()
    }

    #[test]
    fn test_from_palette_resolves_colors() {
        let sheet = sheet();

        assert_eq!(sheet.label_color, "#333333");
        assert_eq!(sheet.title_color, "#3b3b3b");
        assert_eq!(sheet.xtick_color, "#BFBFBF");
        assert_eq!(sheet.xtick_label_color, "gray");
        assert_eq!(sheet.ytick_label_color, "#333333");
        assert_eq!(sheet.edge_color, "#BFBFBF");
        assert_eq!(sheet.plot_palette, vec!["gray".to_string()]);
        assert!(!sheet.spines_top);
        assert!(!sheet.spines_right);
    }

    #[test]
    fn test_missing_color_is_an_error() {
        let mut palette = ColorPalette::default();
        palette.remove("dark gray");

        let err = StyleSheet::from_palette(&palette, "Roboto", "f.ttf").unwrap_err();
        match err {
            StyleError::ColorNotFound { name, .. } => assert_eq!(name, "dark gray"),
        }
    }

    #[test]
    fn test_apply_writes_every_key() {
        let sheet = sheet();
        let mut table = ParamTable::new();
        sheet.apply(&mut table);

        for key in [
            "axes.spines.top",
            "axes.spines.right",
            "axes.labelcolor",
            "axes.titlecolor",
            "xtick.color",
            "ytick.color",
            "xtick.labelcolor",
            "ytick.labelcolor",
            "font.family",
            "xaxis.labellocation",
            "yaxis.labellocation",
            "axes.labelpad",
            "axes.edgecolor",
        ] {
            assert!(table.get(key).is_some(), "missing param {key}");
        }

        assert_eq!(table.get("axes.spines.top"), Some("false"));
        assert_eq!(table.get("xaxis.labellocation"), Some("left"));
        assert_eq!(table.get("yaxis.labellocation"), Some("top"));
        assert_eq!(table.get("axes.labelpad"), Some("10"));
        assert_eq!(table.get("font.family"), Some("Roboto"));
        assert_eq!(table.fonts(), &[PathBuf::from("cache/Roboto-Bold.ttf")]);
        assert_eq!(table.default_palette(), &["gray".to_string()]);
    }

    #[test]
    fn test_label_location_literals() {
        assert_eq!(LabelLocation::Left.as_str(), "left");
        assert_eq!(LabelLocation::Top.to_string(), "top");
    }
}
