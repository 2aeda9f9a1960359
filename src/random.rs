use crate::board::HexBoard;
use crate::graph::Point;
use crate::playout::random_cell;

/// Picks a uniformly random empty cell.
#[derive(Clone, Debug)]
pub struct RandomSelector {
    rng: fastrand::Rng,
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSelector {
    /// Selector seeded from entropy.
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// `None` only when the board is full.
    pub fn select_move(&mut self, board: &HexBoard) -> Option<Point> {
        random_cell(board, &mut self.rng)
    }
}
