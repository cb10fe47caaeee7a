//! Colourway - convert colours between spaces and match them to palettes.

mod report;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colourway_palette::{
    DirectorySource, FileSource, MatchOptions, PaletteConfig, PaletteRegistry,
};
use colourway_space::{Colour, ColourError};
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "colourway", version, about, long_about = None)]
struct Cli {
    /// Register an extra palette file
    #[arg(long = "palette", value_name = "FILE", global = true)]
    palettes: Vec<PathBuf>,
    /// Load palettes from this directory instead of ~/.colourway
    #[arg(long = "palette-dir", value_name = "DIR", global = true)]
    palette_dirs: Vec<PathBuf>,
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show colours in every supported space
    Convert {
        /// Colour notation or palette colour name
        #[arg(required = true)]
        colours: Vec<String>,
    },
    /// Find the nearest entries of a palette
    Match {
        /// Palette name
        palette: String,
        #[arg(required = true)]
        colours: Vec<String>,
        /// Maximum number of matches per colour
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
        /// Only report matches with ΔE*00 below this
        #[arg(short = 'e', long = "delta")]
        delta_e: Option<f64>,
    },
    /// List registered palettes
    Palettes,
}

fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn load_palettes(registry: &mut PaletteRegistry, cli: &Cli) -> Result<()> {
    let mut config = PaletteConfig::default();
    if !cli.palette_dirs.is_empty() {
        config.dirs = cli.palette_dirs.clone();
    }
    registry
        .load(&DirectorySource::from_config(&config))
        .context("Failed to load palette directories")?;

    for path in &cli.palettes {
        registry
            .load(&FileSource::new(path))
            .with_context(|| format!("Failed to load palette {}", path.display()))?;
    }
    debug!(count = registry.count(), "Palettes ready");
    Ok(())
}

fn parse_colour(registry: &PaletteRegistry, text: &str) -> Result<Colour> {
    Ok(registry
        .parse_string(text)?
        .ok_or_else(|| ColourError::Unparseable(text.to_string()))?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let mut registry = PaletteRegistry::shared().write();
    load_palettes(&mut registry, &cli)?;

    match &cli.command {
        Command::Convert { colours } => {
            for text in colours {
                print!("{}", report::conversion(&parse_colour(&registry, text)?));
            }
        }
        Command::Match {
            palette,
            colours,
            count,
            delta_e,
        } => {
            let palette = registry.palette_of(palette)?;
            let options = MatchOptions {
                count: *count,
                delta_e: delta_e.unwrap_or(f64::INFINITY),
            };
            for text in colours {
                let colour = parse_colour(&registry, text)?;
                let found = palette.match_with(&colour, options)?;
                print!("{}", report::matches(&colour, palette.name(), &found));
            }
        }
        Command::Palettes => print!("{}", report::palettes(&registry)),
    }
    Ok(())
}
