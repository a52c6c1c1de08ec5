//! Command dispatch logic for waypath

use crate::cli::{Cli, Commands};
use waypath_core::error::Result;

pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Network(args) => super::network::run(cli, args),
        Commands::Atlas(args) => super::atlas::run(cli, args),
    }
}
