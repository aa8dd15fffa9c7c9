//! Command-line interface for noughts.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Noughts - persisted board game exercises
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Persisted tic-tac-toe and friends on the command line", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play tic-tac-toe; the game survives restarts through the store file
    Play {
        /// Path to the store file holding session state
        #[arg(long, default_value = "noughts_store.json")]
        store: PathBuf,
    },

    /// Greet the remembered player name, optionally setting it first
    Greet {
        /// Name to remember before greeting
        name: Option<String>,

        /// Path to the store file holding session state
        #[arg(long, default_value = "noughts_store.json")]
        store: PathBuf,
    },

    /// Look up a creature record by name with a single request
    Fetch {
        /// Name to look up
        name: String,

        /// Base URL of the records API
        #[arg(long, default_value = "https://pokeapi.co/api/v2")]
        base_url: String,
    },
}
