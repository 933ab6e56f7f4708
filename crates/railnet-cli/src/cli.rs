//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// railnet - railway network maps, province assignment and statistics
#[derive(Parser, Debug)]
#[command(name = "railnet", author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the station/track network and render the track-type map
    Visualize,

    /// Assign every station to the province of its nearest city
    AssignProvinces,

    /// Build one year's network: graph, statistics, map and processed tables
    Build {
        /// Dataset year (defaults to the latest year in the station table)
        #[arg(long)]
        year: Option<i32>,
    },

    /// Shortest route by track length in a saved network graph
    Route {
        /// Graph JSON written by `build`
        #[arg(long)]
        graph: PathBuf,

        /// Start station ID
        from: String,

        /// Destination station ID
        to: String,
    },

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,

    /// Print a value by dotted key (e.g. `data.dir`)
    Get { key: String },

    /// Set a value by dotted key in the config file
    Set { key: String, value: String },

    /// Write a default config file
    Init {
        /// Target file (defaults to the user config location)
        #[arg(long)]
        file: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_build_with_year() {
        let cli = Cli::try_parse_from(["railnet", "-v", "build", "--year", "2015"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Build { year: Some(2015) }));
    }

    #[test]
    fn test_parse_route() {
        let cli =
            Cli::try_parse_from(["railnet", "route", "--graph", "g.json", "100", "200"]).unwrap();
        let Command::Route { graph, from, to } = cli.command else {
            unreachable!("expected the route command");
        };
        assert_eq!(graph, PathBuf::from("g.json"));
        assert_eq!(from, "100");
        assert_eq!(to, "200");
    }

    #[test]
    fn test_parse_config_init() {
        let cli = Cli::try_parse_from([
            "railnet",
            "config",
            "init",
            "--file",
            "railnet.toml",
            "--force",
            "--config",
            "other.toml",
        ])
        .unwrap();
        assert_eq!(cli.config.as_deref(), Some("other.toml"));
        assert!(matches!(
            cli.command,
            Command::Config {
                action: ConfigAction::Init { force: true, .. }
            }
        ));
    }
}
