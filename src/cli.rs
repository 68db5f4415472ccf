use clap::Parser;
use family_hierarchy::application::dto::OutputFormat;
use std::path::PathBuf;

/// Build a layered family hierarchy around one person from a Parent,Children CSV
#[derive(Parser, Debug)]
#[command(name = "family-hierarchy")]
#[command(version)]
#[command(
    about = "Build a layered family hierarchy around one person from a Parent,Children CSV",
    long_about = None
)]
pub struct Args {
    /// Path to the family data CSV (header row must be "Parent,Children")
    #[arg(short, long, value_name = "CSV")]
    pub data: PathBuf,

    /// Name of the focal person, matched exactly against the Parent column
    #[arg(short, long)]
    pub name: String,

    /// Number of ancestor generations to include [default: 2]
    #[arg(short, long, value_name = "LEVELS", allow_negative_numbers = true)]
    pub up: Option<i64>,

    /// Number of descendant generations to include [default: 2]
    #[arg(long, value_name = "LEVELS", allow_negative_numbers = true)]
    pub down: Option<i64>,

    /// Output format: json or markdown [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// User id to act as (falls back to FAMILY_HIERARCHY_USER, then the config file)
    #[arg(long, value_name = "ID")]
    pub user: Option<String>,

    /// Directory where uploaded CSV documents are stored
    #[arg(long, value_name = "DIR")]
    pub store_dir: Option<PathBuf>,

    /// Do not store a copy of the uploaded CSV
    #[arg(long)]
    pub no_store: bool,

    /// Path to a config file (default: family-hierarchy.config.yml in the current directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
