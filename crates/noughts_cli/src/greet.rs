//! Persisted greeting, the smallest persisted-state exercise.

use std::path::Path;

use anyhow::{Context, Result};
use noughts_store::{JsonFileStore, PersistedCell, Seed};
use tracing::instrument;

/// Store key for the remembered name.
const NAME_KEY: &str = "greeting:name";

/// Greets the remembered name, updating it first when one is given.
#[instrument(skip(path), fields(store = %path.display()))]
pub fn run(path: &Path, name: Option<String>) -> Result<()> {
    let mut store = JsonFileStore::open(path).context("opening store")?;
    let mut cell: PersistedCell<String> =
        PersistedCell::load(&store, NAME_KEY, Seed::value(String::new()))
            .context("loading name")?;

    if let Some(name) = name {
        cell.set(&mut store, name).context("storing name")?;
    }

    if cell.value().is_empty() {
        println!("Please type your name");
    } else {
        println!("Hello {}", cell.value());
    }
    Ok(())
}
