//! Interactive tic-tac-toe session with persisted history.
//!
//! The whole game record and the cursor live in two store cells, written
//! back after every accepted transition, so quitting mid-game loses
//! nothing.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use noughts_board::{Board, History};
use noughts_store::{JsonFileStore, PersistedCell, Seed};
use tracing::{info, instrument, warn};

/// Store key for the recorded board snapshots.
const REC_KEY: &str = "tic-tac-toe:rec";
/// Store key for the cursor into the record.
const STEP_KEY: &str = "tic-tac-toe:step";

/// Runs the interactive game loop against the store at `path`.
#[instrument(skip(path), fields(store = %path.display()))]
pub fn run(path: &Path) -> Result<()> {
    let mut store = JsonFileStore::open(path).context("opening store")?;

    let mut rec: PersistedCell<Vec<Board>> =
        PersistedCell::load(&store, REC_KEY, Seed::producer(|| vec![Board::new()]))
            .context("loading game record")?;
    let mut step: PersistedCell<usize> =
        PersistedCell::load(&store, STEP_KEY, Seed::value(0)).context("loading cursor")?;

    // The two cells may disagree after a crash or hand-edited file.
    let mut game = History::from_parts(rec.value().clone(), *step.value()).unwrap_or_else(|| {
        warn!("stored game state inconsistent, starting fresh");
        History::new()
    });

    info!(steps = game.boards().len(), "session started");
    println!("Commands: 1-9 to play a square, jump <n>, restart, quit");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        render(&game);
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line.context("reading input")?;
        let input = line.trim();

        let accepted = match input {
            "" => continue,
            "quit" | "q" => break,
            "restart" => {
                game.restart();
                true
            }
            cmd if cmd.starts_with("jump") => {
                let arg = cmd.trim_start_matches("jump").trim();
                match arg.parse::<usize>() {
                    Ok(target) => {
                        let moved = game.jump(target);
                        if !moved {
                            println!("No such step (0-{}).", game.boards().len() - 1);
                        }
                        moved
                    }
                    Err(_) => {
                        println!("Usage: jump <step>");
                        false
                    }
                }
            }
            _ => match input.parse::<usize>() {
                Ok(square) if (1..=9).contains(&square) => {
                    let played = game.play(square - 1);
                    if !played {
                        println!("That square is not available.");
                    }
                    played
                }
                _ => {
                    println!("Commands: 1-9 to play a square, jump <n>, restart, quit");
                    false
                }
            },
        };

        if accepted {
            rec.set(&mut store, game.boards().to_vec())
                .context("storing game record")?;
            step.set(&mut store, game.cursor())
                .context("storing cursor")?;
        }
    }

    info!("session ended");
    Ok(())
}

/// Prints the current board, the move list, and the derived status.
fn render(game: &History) {
    println!();
    println!("{}", game.current());
    println!();
    for step in 0..game.boards().len() {
        let current = if step == game.cursor() { " (current)" } else { "" };
        if step == 0 {
            println!("  jump {step}: Go to game start{current}");
        } else {
            println!("  jump {step}: Go to move #{step}{current}");
        }
    }
    println!("{}", game.status());
}
