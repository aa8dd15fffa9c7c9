//! Noughts - persisted tic-tac-toe exercises on the command line.

#![warn(missing_docs)]

mod cli;
mod fetch;
mod greet;
mod play;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { store } => play::run(&store),
        Command::Greet { name, store } => greet::run(&store, name),
        Command::Fetch { name, base_url } => fetch::run(&base_url, &name).await,
    }
}
