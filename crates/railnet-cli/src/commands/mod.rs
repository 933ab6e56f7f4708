//! Subcommand implementations.
//!
//! Each pipeline command returns an outcome whose `Display` is the text
//! printed on success.

pub mod assign;
pub mod build;
pub mod route;
pub mod visualize;

use crate::cli::{Cli, Command};
use crate::config::{ConfigManager, RailnetConfig};
use crate::config_handlers::handle_config_command;
use anyhow::Result;

/// Dispatch a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();
    match cli.command {
        Command::Config { action } => handle_config_command(config_path, action)?,
        Command::Route { graph, from, to } => {
            println!("{}", route::run(&graph, &from, &to)?);
        }
        Command::Visualize => {
            let config = RailnetConfig::load(config_path)?;
            println!("{}", visualize::run(&config)?);
        }
        Command::AssignProvinces => {
            let config = RailnetConfig::load(config_path)?;
            println!("{}", assign::run(&config)?);
        }
        Command::Build { year } => {
            let config = RailnetConfig::load(config_path)?;
            println!("{}", build::run(&config, year)?);
        }
    }
    Ok(())
}
