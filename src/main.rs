//! Hex-MC: play Hex in the terminal.
//!
//! ## Usage
//!
//! - `hex-mc` - Run a demo game (Monte Carlo vs random)
//! - `hex-mc play --red human --blue mc` - Play against the Monte Carlo engine
//! - `hex-mc demo` - Run the demo game

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use hex_mc::board::{Color, HexBoard, str_coord};
use hex_mc::config::{GameConfig, PlayerKind};
use hex_mc::constants::{DEFAULT_BOARD_SIZE, TRIALS};
use hex_mc::game::{Game, Rejection, TurnOutcome};

/// Hex-MC: Hex with flat Monte Carlo computer players
#[derive(Parser)]
#[command(name = "hex-mc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game between any mix of humans and computers
    Play {
        /// Board size (3 to 21)
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,
        /// Red player (connects top to bottom)
        #[arg(long, value_enum, default_value = "human")]
        red: PlayerKind,
        /// Blue player (connects left to right)
        #[arg(long, value_enum, default_value = "mc")]
        blue: PlayerKind,
        /// Color that moves first
        #[arg(long, value_enum, default_value = "blue")]
        first: Side,
        /// Monte Carlo playouts per candidate cell
        #[arg(long, default_value_t = TRIALS)]
        trials: usize,
        /// Random seed for reproducible computer moves
        #[arg(long)]
        seed: Option<u64>,
        /// Only print the final board
        #[arg(long)]
        quiet: bool,
    },
    /// Run a short Monte Carlo vs random game
    Demo,
}

#[derive(Clone, Copy, ValueEnum)]
enum Side {
    Red,
    Blue,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::Red => Color::Red,
            Side::Blue => Color::Blue,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play {
            size,
            red,
            blue,
            first,
            trials,
            seed,
            quiet,
        }) => {
            let mut config = GameConfig::default()
                .with_size(size)
                .with_first(first.into())
                .with_trials(trials);
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            let show_moves = !quiet && (red != PlayerKind::Human || blue != PlayerKind::Human);
            play(&config, red, blue, show_moves, quiet)
        }
        Some(Commands::Demo) | None => {
            let config = GameConfig::default().with_size(5).with_trials(200);
            play(&config, PlayerKind::MonteCarlo, PlayerKind::Random, true, false)
        }
    }
}

fn play(
    config: &GameConfig,
    red: PlayerKind,
    blue: PlayerKind,
    show_moves: bool,
    quiet: bool,
) -> anyhow::Result<()> {
    config.validate().context("invalid game configuration")?;
    let red = config.build_player(red, Color::Red)?;
    let blue = config.build_player(blue, Color::Blue)?;
    let mut game = Game::from_config(config, red, blue)?;

    println!("{} goes first\n", config.first);
    if !quiet {
        println!("{}", game.board());
    }

    let winner = game
        .run(|board, outcome| report(board, outcome, show_moves, quiet))
        .context("game aborted")?;

    if quiet {
        println!("{}", game.board());
    }
    println!("{} WINS!", game.board().player(winner).name);
    Ok(())
}

fn report(board: &HexBoard, outcome: &TurnOutcome, show_moves: bool, quiet: bool) {
    match outcome {
        TurnOutcome::Moved { player, cell, .. } => {
            if show_moves {
                println!("{} plays {}", player.name, str_coord(*cell));
            }
            if !quiet {
                println!("{board}");
            }
        }
        TurnOutcome::Rejected { reason, .. } => match reason {
            Rejection::IllegalCell(cell) => {
                println!("{} is not a free cell, try again", str_coord(*cell))
            }
            Rejection::Unparsable(text) => println!("cannot read '{text}', try again"),
        },
        TurnOutcome::Finished { .. } => {}
    }
}
