//! Players and their move sources.

use std::io::{BufRead, Write};

use crate::board::{Color, HexBoard, PlayerId, parse_coord};
use crate::error::{HexError, Result};
use crate::graph::Point;
use crate::montecarlo::MonteCarloSelector;
use crate::random::RandomSelector;

/// Reads moves typed in `a1` notation, prompting before each read.
pub struct HumanInput {
    reader: Box<dyn BufRead + Send>,
    prompt: Box<dyn Write + Send>,
}

impl HumanInput {
    pub fn new(reader: impl BufRead + Send + 'static, prompt: impl Write + Send + 'static) -> Self {
        Self {
            reader: Box::new(reader),
            prompt: Box::new(prompt),
        }
    }

    /// Input from stdin, prompts on stdout.
    pub fn stdio() -> Self {
        Self::new(std::io::BufReader::new(std::io::stdin()), std::io::stdout())
    }

    fn read_move(&mut self, name: &str) -> Result<Point> {
        write!(self.prompt, "{name} - enter move (like a1): ")?;
        self.prompt.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(HexError::InputClosed);
        }
        parse_coord(&line)
    }
}

impl std::fmt::Debug for HumanInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("HumanInput")
    }
}

#[derive(Debug)]
pub enum Strategy {
    Human(HumanInput),
    Random(RandomSelector),
    MonteCarlo(MonteCarloSelector),
}

impl Strategy {
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::Human(_) => "human",
            Strategy::Random(_) => "random",
            Strategy::MonteCarlo(_) => "monte-carlo",
        }
    }
}

/// A seated player: an identity bound to a move source.
#[derive(Debug)]
pub struct Player {
    id: PlayerId,
    strategy: Strategy,
}

impl Player {
    pub fn new(id: PlayerId, strategy: Strategy) -> Self {
        Self { id, strategy }
    }

    pub fn human(name: &str, color: Color, input: HumanInput) -> Self {
        Self::new(PlayerId::new(name, color), Strategy::Human(input))
    }

    pub fn random(name: &str, color: Color, selector: RandomSelector) -> Self {
        Self::new(PlayerId::new(name, color), Strategy::Random(selector))
    }

    pub fn monte_carlo(name: &str, color: Color, selector: MonteCarloSelector) -> Self {
        Self::new(PlayerId::new(name, color), Strategy::MonteCarlo(selector))
    }

    pub fn id(&self) -> &PlayerId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.id.name
    }

    pub fn color(&self) -> Color {
        self.id.color
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    pub fn is_human(&self) -> bool {
        matches!(self.strategy, Strategy::Human(_))
    }

    /// Propose a move. Computer moves are always legal; human moves are only
    /// parsed, so callers must still check [`HexBoard::is_valid_move`].
    ///
    /// # Errors
    /// [`HexError::NoWinner`] if a computer is asked to move on a full board,
    /// plus parse and I/O errors from human input.
    pub fn select_move(&mut self, board: &HexBoard) -> Result<Point> {
        let color = self.id.color;
        match &mut self.strategy {
            Strategy::Human(input) => input.read_move(&self.id.name),
            Strategy::Random(selector) => selector.select_move(board).ok_or(HexError::NoWinner),
            Strategy::MonteCarlo(selector) => {
                selector.select_move(board, color).ok_or(HexError::NoWinner)
            }
        }
    }
}
