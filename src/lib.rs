//! Hex-MC: the board game Hex with flat Monte Carlo computer players.
//!
//! Red connects the top and bottom rows, Blue the left and right columns.
//! Computer players either move at random or score every empty cell by the
//! share of random playouts they win after playing there.
//!
//! ## Modules
//!
//! - [`constants`] - Board limits, hex offsets and playout counts
//! - [`graph`] - Grid graph with hex adjacency and connectivity queries
//! - [`board`] - Board state, turn order and win detection
//! - [`playout`] - Random board completion
//! - [`random`] - Uniform random move selection
//! - [`montecarlo`] - Flat Monte Carlo move selection
//! - [`player`] - Seated players and their move sources
//! - [`game`] - Turn driver
//! - [`config`] - Session configuration
//! - [`error`] - Error type
//!
//! ## Example
//!
//! ```
//! use hex_mc::board::{Color, HexBoard};
//! use hex_mc::montecarlo::MonteCarloSelector;
//!
//! let mut board = HexBoard::new(5).unwrap();
//! board.apply_move(2, 2, Color::Blue);
//!
//! let mut mc = MonteCarloSelector::with_seed(7).with_trials(50).unwrap();
//! let (row, col) = mc.select_move(&board, Color::Red).unwrap();
//! assert!(board.is_valid_move(row, col));
//! ```

pub mod board;
pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod graph;
pub mod montecarlo;
pub mod player;
pub mod playout;
pub mod random;

pub use error::{HexError, Result};
