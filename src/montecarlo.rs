//! Flat Monte Carlo move selection.
//!
//! Every empty cell is scored by the fraction of random playouts the mover
//! wins after playing there. The cell with the strictly highest score is
//! chosen; ties keep the earliest cell in row-major order, and when no
//! playout is ever won the first empty cell is chosen.

use crate::board::{Color, HexBoard};
use crate::constants::TRIALS;
use crate::error::{HexError, Result};
use crate::graph::Point;
use crate::playout::count_wins;

/// Playout statistics for one candidate cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellEstimate {
    pub cell: Point,
    pub wins: usize,
    pub trials: usize,
}

impl CellEstimate {
    /// Fraction of trials won, in `[0, 1]`.
    #[inline]
    pub fn win_probability(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.wins as f64 / self.trials as f64
    }
}

#[derive(Clone, Debug)]
pub struct MonteCarloSelector {
    rng: fastrand::Rng,
    trials: usize,
}

impl Default for MonteCarloSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl MonteCarloSelector {
    /// Selector with [`TRIALS`] playouts per cell, seeded from entropy.
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
            trials: TRIALS,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
            trials: TRIALS,
        }
    }

    /// Override the number of playouts per cell.
    pub fn with_trials(mut self, trials: usize) -> Result<Self> {
        if trials == 0 {
            return Err(HexError::InvalidTrials);
        }
        self.trials = trials;
        Ok(self)
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Score every empty cell for `color`, in row-major order.
    pub fn evaluate(&mut self, board: &HexBoard, color: Color) -> Vec<CellEstimate> {
        board
            .empty_cells()
            .into_iter()
            .map(|cell| {
                let seed = self.rng.u64(..);
                CellEstimate {
                    cell,
                    wins: count_wins(board, cell, color, self.trials, seed),
                    trials: self.trials,
                }
            })
            .collect()
    }

    /// Best cell for `color`, `None` only when the board is full.
    pub fn select_move(&mut self, board: &HexBoard, color: Color) -> Option<Point> {
        let estimates = self.evaluate(board, color);
        let best = best_estimate(&estimates)?;

        tracing::debug!(
            color = %color,
            candidates = estimates.len(),
            trials = self.trials,
            cell = ?best.cell,
            win_probability = best.win_probability(),
            "monte carlo evaluation finished"
        );
        Some(best.cell)
    }
}

/// First estimate with the strictly highest win probability.
pub fn best_estimate(estimates: &[CellEstimate]) -> Option<&CellEstimate> {
    let mut iter = estimates.iter();
    let mut best = iter.next()?;
    for e in iter {
        if e.win_probability() > best.win_probability() {
            best = e;
        }
    }
    Some(best)
}
