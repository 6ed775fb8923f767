//! Plotstyle - styling defaults for plotting backends
//!
//! One-shot initialization sequence: cache the font, build the palette,
//! resolve the style sheet, and apply it to a parameter table.

use anyhow::{anyhow, bail, Context};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use plotstyle::{
    ColorPalette, FontCache, HttpFetcher, ParamTable, Settings, StyleSheet,
};

/// Plotstyle CLI
#[derive(Parser, Debug)]
#[command(
    name = "plotstyle",
    author = "Plotstyle Team",
    version,
    about = "Styling defaults for plotting backends",
    long_about = None
)]
struct Cli {
    /// Font cache directory (overrides settings)
    #[arg(long)]
    cache_dir: Option<PathBuf>,

    /// Font asset URL (overrides settings)
    #[arg(long)]
    font_url: Option<String>,

    /// Never touch the network; fail if the font is not cached
    #[arg(long)]
    offline: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the full init sequence and print the resulting parameter table
    Apply,

    /// Palette operations
    Palette {
        #[command(subcommand)]
        command: PaletteCommands,
    },
}

#[derive(Subcommand, Debug)]
enum PaletteCommands {
    /// Print every palette entry
    Show,

    /// Resolve one color by name
    Get {
        /// Color name, e.g. "dark blue"
        name: String,
    },
}

fn main() -> anyhow::Result<()> {
    let mut cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    tracing::info!("Starting Plotstyle v{}", env!("CARGO_PKG_VERSION"));

    let settings = load_settings(&cli)?;

    match cli.command.take().unwrap_or(Commands::Apply) {
        Commands::Apply => apply(&cli, &settings),
        Commands::Palette { command } => palette_command(&settings, &command),
    }
}

/// Load the settings file and fold CLI overrides in.
fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let mut settings = Settings::load().map_err(|e| anyhow!("failed to load settings: {e}"))?;

    if let Some(dir) = &cli.cache_dir {
        settings.cache_dir = Some(dir.clone());
    }
    if let Some(url) = &cli.font_url {
        settings.font_url = url.clone();
    }
    Ok(settings)
}

/// Build the palette from the built-in set plus configured overrides.
fn build_palette(settings: &Settings) -> ColorPalette {
    let mut palette = ColorPalette::default();
    for entry in &settings.palette_overrides {
        palette.add(entry.name.clone(), entry.value.clone());
    }
    palette
}

/// The full linear init sequence: font, palette, sheet, apply, print.
fn apply(cli: &Cli, settings: &Settings) -> anyhow::Result<()> {
    let cache = FontCache::new(settings.effective_cache_dir());

    let font_path = if cli.offline {
        if !cache.is_cached(&settings.font_name) {
            bail!(
                "font '{}' is not cached and --offline was given",
                settings.font_name
            );
        }
        cache.font_path(&settings.font_name)
    } else {
        let fetcher = HttpFetcher::new().context("failed to build HTTP client")?;
        cache
            .ensure_cached(&settings.font_url, &settings.font_name, &fetcher)
            .context("failed to cache font")?
    };

    let palette = build_palette(settings);
    let sheet = StyleSheet::from_palette(&palette, &settings.font_family, font_path)
        .context("failed to resolve style sheet")?;

    let mut table = ParamTable::new();
    sheet.apply(&mut table);

    print!("{table}");
    Ok(())
}

fn palette_command(settings: &Settings, command: &PaletteCommands) -> anyhow::Result<()> {
    let palette = build_palette(settings);

    match command {
        PaletteCommands::Show => {
            print!("{palette}");
            Ok(())
        }
        PaletteCommands::Get { name } => match palette.color(name) {
            Some(value) => {
                println!("{value}");
                Ok(())
            }
            None => bail!("color '{name}' not found in palette '{}'", palette.name),
        },
    }
}
