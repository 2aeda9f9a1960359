//! Turn driver: asks the active player for a move, applies it and hands the
//! turn over until one side connects its edges.

use crate::board::{Color, GameStatus, HexBoard, PlayerId, str_coord};
use crate::config::GameConfig;
use crate::error::{HexError, Result};
use crate::graph::Point;
use crate::player::Player;

/// Why a proposed move was not applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// Outside the board or already occupied
    IllegalCell(Point),
    /// Text that is not a move
    Unparsable(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Moved {
        player: PlayerId,
        cell: Point,
        status: GameStatus,
    },
    Rejected {
        player: PlayerId,
        reason: Rejection,
    },
    Finished {
        winner: Color,
    },
}

pub struct Game {
    board: HexBoard,
    players: [Player; 2],
}

impl Game {
    /// Seat `first` and `second` on a fresh board; `first` moves first.
    pub fn new(size: usize, first: Player, second: Player) -> Result<Self> {
        let board = HexBoard::with_players(size, first.id().clone(), second.id().clone())?;
        Ok(Self {
            board,
            players: [first, second],
        })
    }

    /// Seat `red` and `blue` according to `config.first`.
    pub fn from_config(config: &GameConfig, red: Player, blue: Player) -> Result<Self> {
        config.validate()?;
        match config.first {
            Color::Red => Self::new(config.size, red, blue),
            Color::Blue => Self::new(config.size, blue, red),
        }
    }

    pub fn board(&self) -> &HexBoard {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    pub fn active_player(&self) -> &Player {
        &self.players[self.board.turn().index()]
    }

    /// Play one turn of the active player.
    ///
    /// Rejected moves leave the board and the turn unchanged so the same
    /// player is asked again on the next call.
    pub fn play_turn(&mut self) -> Result<TurnOutcome> {
        if let Some(winner) = self.board.winner() {
            return Ok(TurnOutcome::Finished { winner });
        }
        if !self.board.has_empty_cell() {
            return Err(HexError::NoWinner);
        }

        let idx = self.board.turn().index();
        let player = &mut self.players[idx];
        let id = player.id().clone();

        let (row, col) = match player.select_move(&self.board) {
            Ok(cell) => cell,
            Err(HexError::Parse(text)) => {
                tracing::warn!(player = %id.name, input = %text, "unparsable move");
                return Ok(TurnOutcome::Rejected {
                    player: id,
                    reason: Rejection::Unparsable(text),
                });
            }
            Err(e) => return Err(e),
        };

        if !self.board.is_valid_move(row, col) {
            tracing::warn!(player = %id.name, cell = %str_coord((row, col)), "illegal move");
            return Ok(TurnOutcome::Rejected {
                player: id,
                reason: Rejection::IllegalCell((row, col)),
            });
        }

        self.board.apply_move(row, col, id.color);
        let status = self.board.status();
        tracing::info!(player = %id.name, cell = %str_coord((row, col)), "move");
        if !status.is_terminal() {
            self.board.switch_turn();
        }

        Ok(TurnOutcome::Moved {
            player: id,
            cell: (row, col),
            status,
        })
    }

    /// Play until someone wins, calling `on_turn` after every turn.
    pub fn run<F>(&mut self, mut on_turn: F) -> Result<Color>
    where
        F: FnMut(&HexBoard, &TurnOutcome),
    {
        tracing::info!(
            size = self.board.size(),
            first = %self.players[0].name(),
            second = %self.players[1].name(),
            "game started"
        );
        loop {
            let outcome = self.play_turn()?;
            on_turn(&self.board, &outcome);
            match outcome {
                TurnOutcome::Finished { winner } => return Ok(winner),
                TurnOutcome::Moved { status, .. } => {
                    if let Some(winner) = status.winner() {
                        tracing::info!(winner = %self.board.player(winner).name, "game over");
                        return Ok(winner);
                    }
                }
                TurnOutcome::Rejected { .. } => {}
            }
        }
    }
}
