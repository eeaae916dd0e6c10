use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use connect_four::ai::MinimaxAgent;
use connect_four::config::AppConfig;
use connect_four::game::{GameOutcome, GameState, Player};

/// Play Connect Four against a minimax engine in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against a minimax engine")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override search depth
    #[arg(long)]
    depth: Option<usize>,

    /// Which side the computer plays: first or second
    #[arg(long, default_value = "second")]
    computer: String,

    /// Watch the engine play against itself
    #[arg(long)]
    exhibition: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    if let Some(depth) = cli.depth {
        config.search.max_depth = depth;
    }
    config.validate().context("invalid configuration")?;

    let computer = match cli.computer.as_str() {
        "first" => Player::Red,
        "second" => Player::Yellow,
        other => bail!("unknown side '{}' (expected 'first' or 'second')", other),
    };

    let engine = MinimaxAgent::new(config.search.max_depth);
    let mut state = GameState::new(config.game.rows, config.game.cols);

    println!("{}", state.board());
    while !state.is_terminal() {
        let mover = state.current_player();
        let column = if cli.exhibition || mover == computer {
            println!("{} is thinking...", mover.name());
            let mut scratch = state.board().clone();
            match engine.best_column(&mut scratch, mover) {
                Some(column) => {
                    println!("{} plays column {}", mover.name(), column);
                    column
                }
                None => bail!("no legal move available"),
            }
        } else {
            prompt_column(&state)?
        };
        state
            .apply_move(column)
            .with_context(|| format!("applying move in column {}", column))?;
        println!("{}", state.board());
    }

    match state.outcome() {
        Some(GameOutcome::Winner(winner)) => {
            if cli.exhibition {
                println!("{} wins!", winner.name());
            } else if winner == computer {
                println!("Computer wins!");
            } else {
                println!("Congratulations! You win!");
            }
        }
        Some(GameOutcome::Draw) => println!("Draw!"),
        None => {}
    }

    Ok(())
}

/// Prompt until the human enters a playable column. Unparsable input and
/// full or out-of-range columns are re-prompted, never fatal.
fn prompt_column(state: &GameState) -> Result<usize> {
    let cols = state.board().cols();
    loop {
        print!("Your move (0-{}): ", cols - 1);
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            bail!("input closed");
        }
        match line.trim().parse::<usize>() {
            Ok(column) if state.board().is_column_playable(column) => return Ok(column),
            _ => println!("Invalid move. Try again."),
        }
    }
}
