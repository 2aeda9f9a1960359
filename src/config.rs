//! Game session configuration.

use crate::board::Color;
use crate::constants::{BOARD_MAX_SIZE, BOARD_MIN_SIZE, DEFAULT_BOARD_SIZE, TRIALS};
use crate::error::{HexError, Result};
use crate::montecarlo::MonteCarloSelector;
use crate::player::{HumanInput, Player};
use crate::random::RandomSelector;

/// Move source for a seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum PlayerKind {
    Human,
    Random,
    #[value(name = "mc", alias = "monte-carlo")]
    MonteCarlo,
}

#[derive(Clone, Debug)]
pub struct GameConfig {
    /// Board side length
    pub size: usize,
    /// Color that moves first
    pub first: Color,
    /// Monte Carlo playouts per candidate cell
    pub trials: usize,
    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            first: Color::Blue,
            trials: TRIALS,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_first(mut self, first: Color) -> Self {
        self.first = first;
        self
    }

    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(BOARD_MIN_SIZE..=BOARD_MAX_SIZE).contains(&self.size) {
            return Err(HexError::InvalidBoardSize(self.size));
        }
        if self.trials == 0 {
            return Err(HexError::InvalidTrials);
        }
        Ok(())
    }

    /// Build a computer or stdin-driven player for `color`.
    ///
    /// With a fixed seed each color gets its own derived stream so the two
    /// computer players do not mirror each other.
    pub fn build_player(&self, kind: PlayerKind, color: Color) -> Result<Player> {
        let seed = self.seed.map(|s| match color {
            Color::Red => s,
            Color::Blue => s.wrapping_add(0x9e37_79b9_7f4a_7c15),
        });
        let player = match kind {
            PlayerKind::Human => Player::human(color.name(), color, HumanInput::stdio()),
            PlayerKind::Random => {
                let selector = seed.map_or_else(RandomSelector::new, RandomSelector::with_seed);
                Player::random(&format!("{color}-random"), color, selector)
            }
            PlayerKind::MonteCarlo => {
                let selector = seed
                    .map_or_else(MonteCarloSelector::new, MonteCarloSelector::with_seed)
                    .with_trials(self.trials)?;
                Player::monte_carlo(&format!("{color}-MC"), color, selector)
            }
        };
        Ok(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.size, 7);
        assert_eq!(config.first, Color::Blue);
        assert_eq!(config.trials, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate() {
        assert!(matches!(
            GameConfig::default().with_size(2).validate(),
            Err(HexError::InvalidBoardSize(2))
        ));
        assert!(matches!(
            GameConfig::default().with_trials(0).validate(),
            Err(HexError::InvalidTrials)
        ));
        assert!(GameConfig::default().with_size(21).validate().is_ok());
    }

    #[test]
    fn test_build_computer_players() {
        let config = GameConfig::default().with_trials(25).with_seed(3);
        let red = config.build_player(PlayerKind::MonteCarlo, Color::Red).unwrap();
        assert_eq!(red.name(), "red-MC");
        assert_eq!(red.color(), Color::Red);

        let blue = config.build_player(PlayerKind::Random, Color::Blue).unwrap();
        assert_eq!(blue.name(), "blue-random");
        assert_eq!(blue.strategy().label(), "random");
    }
}
