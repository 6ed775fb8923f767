//! # Plotstyle
//!
//! Opinionated styling defaults for plotting backends:
//! - Named color palettes with exact-key lookup
//! - A local font cache fed by a one-shot network fetch
//! - An rcParams-style sheet applied explicitly to a backend's
//!   styling-parameter table
//!
//! Nothing here plots. The rendering backend is an opaque collaborator
//! reached through the [`StyleTarget`] trait; this crate only resolves
//! values and pushes them in, one way, once, at startup.
//!
//! ## Example
//!
//! ```rust,no_run
//! use plotstyle::{ColorPalette, FontCache, HttpFetcher, ParamTable, StyleSheet};
//!
//! fn main() -> anyhow::Result<()> {
//!     let cache = FontCache::new("cache");
//!     let fetcher = HttpFetcher::new()?;
//!     let font = cache.ensure_cached(
//!         "https://example.com/Roboto-Bold.ttf",
//!         "Roboto-Bold",
//!         &fetcher,
//!     )?;
//!
//!     let palette = ColorPalette::default();
//!     let sheet = StyleSheet::from_palette(&palette, "Roboto", font)?;
//!
//!     let mut table = ParamTable::new();
//!     sheet.apply(&mut table);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod assets;
pub mod config;
pub mod palette;
pub mod style;

// Re-exports for convenience
pub use crate::assets::{AssetFetcher, FetchError, FontCache, HttpFetcher};
pub use crate::config::{PaletteOverride, Settings};
pub use crate::palette::{ColorPalette, DEFAULT_PALETTE_NAME};
pub use crate::style::{LabelLocation, ParamTable, StyleError, StyleSheet, StyleTarget};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
