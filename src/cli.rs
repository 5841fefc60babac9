use clap::Parser;

use crate::application::dto::OutputFormat;
use crate::eol_tracking::domain::RiskLevel;

/// Track end-of-life risk for a fleet of software components
#[derive(Parser, Debug)]
#[command(name = "eol-watch")]
#[command(version)]
#[command(
    about = "Track end-of-life risk for a fleet of software components",
    long_about = None
)]
pub struct Args {
    /// Path to the inventory file (defaults to inventory.toml)
    #[arg(short, long)]
    pub inventory: Option<String>,

    /// Output format: json, markdown or table
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Only include components belonging to this product id
    #[arg(short, long)]
    pub product: Option<String>,

    /// Base URL of the life-cycle source
    #[arg(long, value_name = "URL")]
    pub source_url: Option<String>,

    /// Per-request timeout for external lookups, in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Maximum number of concurrent external lookups
    #[arg(long, value_name = "N")]
    pub concurrency: Option<usize>,

    /// Exit with code 1 if any component is at or above this risk level
    /// (safe, warning or expired)
    #[arg(long = "fail-on", value_name = "RISK")]
    pub fail_on: Option<RiskLevel>,

    /// Path to a config file (defaults to ./eol-watch.config.yml when present)
    #[arg(short, long)]
    pub config: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
