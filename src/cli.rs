//! CLI argument parsing for waypath
//!
//! Uses clap for argument parsing. Global flags: --format, --quiet,
//! --verbose, --log-level, --log-json.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use waypath_core::format::OutputFormat;

/// Waypath - shortest-path queries over delimited network and map data
#[derive(Parser, Debug)]
#[command(name = "waypath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Explicit log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the fewest-hops connection between two members of a network
    Network(NetworkArgs),

    /// Find the shortest walking route between two landmarks
    Atlas(AtlasArgs),
}

#[derive(Args, Debug)]
pub struct NetworkArgs {
    /// Tab-separated member<TAB>group records
    #[arg(long, value_name = "FILE")]
    pub data: PathBuf,

    /// Member to start from
    pub from: String,

    /// Member to reach
    pub to: String,
}

#[derive(Args, Debug)]
pub struct AtlasArgs {
    /// Tab-separated landmark records (short, long, x, y)
    #[arg(long, value_name = "FILE")]
    pub landmarks: PathBuf,

    /// Tab-separated segment records (x1, y1, x2, y2, distance)
    #[arg(long, value_name = "FILE")]
    pub segments: PathBuf,

    /// List landmarks instead of routing
    #[arg(long)]
    pub list: bool,

    /// Landmark short name to start from
    #[arg(required_unless_present = "list")]
    pub from: Option<String>,

    /// Landmark short name to reach
    #[arg(required_unless_present = "list")]
    pub to: Option<String>,
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse().map_err(|e: waypath_core::error::WaypathError| e.to_string())
}
