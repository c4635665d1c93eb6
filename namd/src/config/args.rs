//! Command-line argument parsing

use clap::Parser;

/// Assemble basis sets and multipole matrices from a YAML configuration
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, default_value = "config.yaml")]
    pub config_file: String,

    /// Override output file: (default stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Override the basis-set name from the configuration
    #[arg(long)]
    pub basis_name: Option<String>,

    /// Only process this trajectory point (0-based)
    #[arg(long)]
    pub point: Option<usize>,

    /// Log debug messages as well
    #[arg(short, long)]
    pub verbose: bool,
}
