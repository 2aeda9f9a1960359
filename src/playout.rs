//! Random playouts (board completion) for Monte Carlo evaluation.
//!
//! A playout places the mover's stone on a candidate cell of a cloned board,
//! then fills every remaining cell with alternating uniformly random moves.
//! Hex cannot end in a draw, so the filled board always has a winner.

use crate::board::{Color, HexBoard};
use crate::graph::Point;

/// Uniformly sample cells until one is a legal move.
///
/// Returns `None` on a full board instead of looping forever.
pub fn random_cell(board: &HexBoard, rng: &mut fastrand::Rng) -> Option<Point> {
    if !board.has_empty_cell() {
        return None;
    }
    let n = board.size();
    loop {
        let row = rng.usize(0..n);
        let col = rng.usize(0..n);
        if board.is_valid_move(row, col) {
            return Some((row, col));
        }
    }
}

/// Fill every empty cell, alternating colors starting with `first`.
///
/// Each step picks uniformly among the remaining empty cells, so shuffling
/// the empty cells once gives the same distribution as repeated sampling.
pub fn fill_board(board: &mut HexBoard, first: Color, rng: &mut fastrand::Rng) {
    let mut cells = board.empty_cells();
    rng.shuffle(&mut cells);

    let mut color = first;
    for (row, col) in cells {
        board.apply_move(row, col, color);
        color = color.opponent();
    }
}

/// Run one playout of `color` playing at `cell` and report whether `color`
/// owns the winning chain on the filled board.
pub fn playout(board: &HexBoard, cell: Point, color: Color, rng: &mut fastrand::Rng) -> bool {
    let mut copy = board.clone();
    copy.apply_move(cell.0, cell.1, color);
    fill_board(&mut copy, color.opponent(), rng);
    copy.check_win(color)
}

/// Count wins over `trials` playouts of `color` at `cell`.
///
/// Trial `i` runs with its own generator seeded from `seed + i`, so the
/// count only depends on `seed` whether or not trials run in parallel.
pub fn count_wins(board: &HexBoard, cell: Point, color: Color, trials: usize, seed: u64) -> usize {
    let run = |i: usize| {
        let mut rng = fastrand::Rng::with_seed(seed.wrapping_add(i as u64));
        playout(board, cell, color, &mut rng)
    };

    #[cfg(feature = "parallel")]
    let wins = {
        use rayon::prelude::*;
        (0..trials).into_par_iter().filter(|&i| run(i)).count()
    };

    #[cfg(not(feature = "parallel"))]
    let wins = (0..trials).filter(|&i| run(i)).count();

    wins
}
