//! # railnet-cli
//!
//! The `railnet` command-line tool:
//! - `visualize`: station/track network and its track-type map
//! - `assign-provinces`: nearest-city province assignment
//! - `build`: yearly graph, statistics, province map and processed tables
//! - `route`: shortest route in a saved graph
//! - `config`: configuration file management

#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;

pub use cli::{Cli, Command, ConfigAction};
pub use config::{ConfigManager, RailnetConfig};
