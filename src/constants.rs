//! Board limits, Monte Carlo parameters and hex geometry.

// =============================================================================
// Board Geometry
// =============================================================================

/// Smallest playable board (NxN).
pub const BOARD_MIN_SIZE: usize = 3;

/// Largest playable board (NxN).
pub const BOARD_MAX_SIZE: usize = 21;

/// Default board size used by the demo and the `play` command.
pub const DEFAULT_BOARD_SIZE: usize = 7;

/// Offsets `(d_row, d_col)` to the six neighbours of a cell on the rhombic grid.
///
/// Order: West, East, South-West, South, North, North-East.
pub const HEX_OFFSETS: [(isize, isize); 6] = [
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (-1, 0),
    (-1, 1),
];

// =============================================================================
// Monte Carlo Parameters
// =============================================================================

/// Number of random playouts per candidate cell.
pub const TRIALS: usize = 1000;
