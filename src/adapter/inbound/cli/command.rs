//! Command-line interface definitions.
//!
//! Defines the CLI structure for the gamedex application using `clap`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::paths;

/// Browse the game catalog and keep a local list of favorites
#[derive(Parser, Debug)]
#[command(name = "gamedex")]
#[command(version)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to the configuration file.
    #[arg(short, long, global = true, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the gamedex CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in (prompts for missing credentials)
    Login(LoginArgs),

    /// Log out
    Logout,

    /// Browse the catalog
    #[command(subcommand)]
    Games(GamesCommand),

    /// Manage favorites
    #[command(subcommand)]
    Favorites(FavoritesCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Arguments for the `login` subcommand.
#[derive(Parser, Debug)]
pub struct LoginArgs {
    /// Username; prompted for when omitted.
    #[arg(short, long)]
    pub username: Option<String>,

    /// Password; prompted for (hidden) when omitted.
    #[arg(short, long)]
    pub password: Option<String>,
}

/// Subcommands for `gamedex games`.
#[derive(Subcommand, Debug)]
pub enum GamesCommand {
    /// List catalog games.
    List {
        /// Only show games whose name contains this text (case-insensitive).
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show one game and whether it is a favorite.
    Show {
        /// Catalog id of the game.
        id: String,
    },
}

/// Subcommands for `gamedex favorites`.
#[derive(Subcommand, Debug)]
pub enum FavoritesCommand {
    /// List favorites in the order they were added.
    List,
    /// Fetch a game from the catalog and add it to favorites.
    Add {
        /// Catalog id of the game.
        id: String,
    },
    /// Remove a game from favorites.
    Remove {
        /// Catalog id of the game.
        id: String,
    },
    /// Remove every favorite.
    Clear,
}

/// Subcommands for `gamedex config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
    /// Display the effective configuration with defaults applied.
    Show,
}
