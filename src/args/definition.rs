//! Command-line argument definition and settings overrides.

use std::path::PathBuf;

use clap::Parser;

use crate::state::PriceBucket;
use crate::theme::Settings;

/// pricegrid - browse a product catalog sorted by title and filtered by price
#[derive(Parser, Debug, Default)]
#[command(name = "pricegrid")]
#[command(version)]
#[command(about = "Browse a product catalog sorted by title and filtered by price", long_about = None)]
pub struct Args {
    /// Catalog endpoint URL (overrides `catalog_endpoint` in settings.conf)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Initial price bucket: all, 10-50, 50-100, 100-500 or 500-2000
    #[arg(short, long, value_parser = parse_bucket)]
    pub bucket: Option<PriceBucket>,

    /// Fetch, filter and sort once, print a table to stdout, and exit
    #[arg(short, long)]
    pub print: bool,

    /// Read settings from this file instead of ~/.config/pricegrid/settings.conf
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

/// What: clap value parser for `--bucket`.
///
/// # Errors
/// - Returns a message listing the accepted spellings when `s` is not a known bucket
fn parse_bucket(s: &str) -> Result<PriceBucket, String> {
    PriceBucket::parse(s).ok_or_else(|| {
        format!("unknown bucket '{s}' (expected all, 10-50, 50-100, 100-500 or 500-2000)")
    })
}

/// What: Apply CLI flags on top of file settings.
///
/// Inputs:
/// - `args`: Parsed command-line arguments
/// - `settings`: Settings loaded from `settings.conf`
///
/// Output:
/// - Settings with every flag the user passed taking precedence.
#[must_use]
pub fn apply_overrides(args: &Args, mut settings: Settings) -> Settings {
    if let Some(ep) = &args.endpoint {
        settings.catalog_endpoint.clone_from(ep);
    }
    if let Some(b) = args.bucket {
        settings.initial_bucket = b;
    }
    settings
}
