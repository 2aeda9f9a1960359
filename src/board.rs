//! Hex board state: occupancy, turn order and win detection.
//!
//! Red connects the top row to the bottom row, Blue connects the left column
//! to the right column. A filled board always has exactly one winner.

use std::fmt;
use std::sync::Arc;

use crate::constants::{BOARD_MAX_SIZE, BOARD_MIN_SIZE};
use crate::error::{HexError, Result};
use crate::graph::{AdjacencyGraph, Point};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Blue,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Red => Color::Blue,
            Color::Blue => Color::Red,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
        }
    }

    /// Stone symbol used when drawing the board.
    pub fn symbol(self) -> char {
        match self {
            Color::Red => 'X',
            Color::Blue => 'O',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which of the two registered players is to move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Turn {
    First,
    Second,
}

impl Turn {
    pub fn other(self) -> Turn {
        match self {
            Turn::First => Turn::Second,
            Turn::Second => Turn::First,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Turn::First => 0,
            Turn::Second => 1,
        }
    }
}

/// Display name and color of a seated player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerId {
    pub name: Arc<str>,
    pub color: Color,
}

impl PlayerId {
    pub fn new(name: impl Into<Arc<str>>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    RedWon,
    BlueWon,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }

    pub fn winner(self) -> Option<Color> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::RedWon => Some(Color::Red),
            GameStatus::BlueWon => Some(Color::Blue),
        }
    }
}

/// The authoritative game board.
///
/// `Clone` produces a fully independent copy, which is what Monte Carlo
/// playouts run on.
#[derive(Clone, Debug)]
pub struct HexBoard {
    graph: AdjacencyGraph<Option<Color>>,
    active: Turn,
    players: [PlayerId; 2],
}

impl HexBoard {
    /// Empty board with the default seating: blue moves first, red second.
    pub fn new(size: usize) -> Result<Self> {
        Self::with_players(size, PlayerId::new("blue", Color::Blue), PlayerId::new("red", Color::Red))
    }

    /// Empty board with `first` to move.
    pub fn with_players(size: usize, first: PlayerId, second: PlayerId) -> Result<Self> {
        if !(BOARD_MIN_SIZE..=BOARD_MAX_SIZE).contains(&size) {
            return Err(HexError::InvalidBoardSize(size));
        }
        if first.color == second.color {
            return Err(HexError::DuplicateColor(first.color));
        }
        Ok(Self {
            graph: AdjacencyGraph::new(size, None),
            active: Turn::First,
            players: [first, second],
        })
    }

    pub fn size(&self) -> usize {
        self.graph.size()
    }

    pub fn graph(&self) -> &AdjacencyGraph<Option<Color>> {
        &self.graph
    }

    /// Stone at `(row, col)`, `None` when empty.
    ///
    /// # Panics
    /// If the cell is outside the board.
    pub fn get_cell_value(&self, row: usize, col: usize) -> Option<Color> {
        self.graph.get((row, col))
    }

    /// In bounds and empty.
    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        row < self.size() && col < self.size() && self.graph.get((row, col)).is_none()
    }

    /// Place a stone without any legality check; validate with
    /// [`is_valid_move`](Self::is_valid_move) first.
    pub fn apply_move(&mut self, row: usize, col: usize, color: Color) {
        self.graph.set((row, col), Some(color));
    }

    pub fn check_win(&self, color: Color) -> bool {
        let n = self.size();
        let last = n - 1;
        match color {
            Color::Red => self
                .graph
                .reaches((0..n).map(|c| (0, c)), |(r, _)| r == last, Some(color)),
            Color::Blue => self
                .graph
                .reaches((0..n).map(|r| (r, 0)), |(_, c)| c == last, Some(color)),
        }
    }

    pub fn is_over(&self) -> bool {
        self.check_win(Color::Red) || self.check_win(Color::Blue)
    }

    pub fn winner(&self) -> Option<Color> {
        self.status().winner()
    }

    pub fn status(&self) -> GameStatus {
        if self.check_win(Color::Red) {
            GameStatus::RedWon
        } else if self.check_win(Color::Blue) {
            GameStatus::BlueWon
        } else {
            GameStatus::InProgress
        }
    }

    pub fn has_empty_cell(&self) -> bool {
        self.graph.has_any(None)
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Point> {
        self.graph.cells_with(None).collect()
    }

    pub fn turn(&self) -> Turn {
        self.active
    }

    pub fn active_player(&self) -> &PlayerId {
        &self.players[self.active.index()]
    }

    /// Hand the move to the other player and return them.
    pub fn switch_turn(&mut self) -> &PlayerId {
        self.active = self.active.other();
        self.active_player()
    }

    pub fn players(&self) -> &[PlayerId; 2] {
        &self.players
    }

    pub fn player(&self, color: Color) -> &PlayerId {
        if self.players[0].color == color {
            &self.players[0]
        } else {
            &self.players[1]
        }
    }
}

/// Parse a move like `a1`: column letter, then 1-based row number.
///
/// Only the notation is checked; the result may still lie outside the board.
pub fn parse_coord(s: &str) -> Result<Point> {
    let s = s.trim();
    let mut chars = s.chars();
    let col = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => (c.to_ascii_lowercase() as u8 - b'a') as usize,
        _ => return Err(HexError::Parse(s.to_string())),
    };
    let row: usize = chars
        .as_str()
        .trim()
        .parse()
        .map_err(|_| HexError::Parse(s.to_string()))?;
    if row == 0 {
        return Err(HexError::Parse(s.to_string()));
    }
    Ok((row - 1, col))
}

/// Format a cell as `a1` notation.
pub fn str_coord((row, col): Point) -> String {
    format!("{}{}", (b'a' + col as u8) as char, row + 1)
}

impl fmt::Display for HexBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size();
        let letters: String = (0..n)
            .map(|c| format!(" {}", (b'a' + c as u8) as char))
            .collect();

        writeln!(f, "   {letters}")?;
        for row in 0..n {
            write!(f, "{}{:>2} ", " ".repeat(row), row + 1)?;
            for col in 0..n {
                let ch = match self.get_cell_value(row, col) {
                    Some(color) => color.symbol(),
                    None => '.',
                };
                write!(f, " {ch}")?;
            }
            writeln!(f, "  {}", row + 1)?;
        }
        writeln!(f, "{}   {letters}", " ".repeat(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(size: usize, red: &[Point], blue: &[Point]) -> HexBoard {
        let mut b = HexBoard::new(size).unwrap();
        for &(r, c) in red {
            b.apply_move(r, c, Color::Red);
        }
        for &(r, c) in blue {
            b.apply_move(r, c, Color::Blue);
        }
        b
    }

    #[test]
    fn test_new_rejects_bad_sizes() {
        assert!(matches!(HexBoard::new(2), Err(HexError::InvalidBoardSize(2))));
        assert!(matches!(HexBoard::new(22), Err(HexError::InvalidBoardSize(22))));
        assert!(HexBoard::new(3).is_ok());
        assert!(HexBoard::new(21).is_ok());
    }

    #[test]
    fn test_duplicate_colors_rejected() {
        let res = HexBoard::with_players(
            5,
            PlayerId::new("a", Color::Red),
            PlayerId::new("b", Color::Red),
        );
        assert!(matches!(res, Err(HexError::DuplicateColor(Color::Red))));
    }

    #[test]
    fn test_is_valid_move_bounds_and_occupancy() {
        let mut b = HexBoard::new(3).unwrap();
        assert!(b.is_valid_move(0, 0));
        assert!(b.is_valid_move(2, 2));
        assert!(!b.is_valid_move(3, 0));
        assert!(!b.is_valid_move(0, 3));
        b.apply_move(1, 1, Color::Blue);
        assert!(!b.is_valid_move(1, 1));
    }

    #[test]
    fn test_red_vertical_win() {
        let b = board_with(3, &[(0, 0), (1, 0), (2, 0)], &[]);
        assert!(b.check_win(Color::Red));
        assert!(!b.check_win(Color::Blue));
        assert_eq!(b.status(), GameStatus::RedWon);
    }

    #[test]
    fn test_blue_row_win() {
        let b = board_with(3, &[], &[(0, 0), (0, 1), (0, 2)]);
        assert!(b.check_win(Color::Blue));
        assert!(!b.check_win(Color::Red));
        assert_eq!(b.winner(), Some(Color::Blue));
    }

    #[test]
    fn test_red_top_row_alone_does_not_win() {
        let b = board_with(3, &[(0, 0), (0, 1), (0, 2)], &[]);
        assert!(!b.check_win(Color::Red));
        assert!(!b.is_over());
    }

    #[test]
    fn test_red_diagonal_chain_win() {
        // (0,2) -> (1,1) -> (2,0) uses the South-West offset twice
        let b = board_with(3, &[(0, 2), (1, 1), (2, 0)], &[]);
        assert!(b.check_win(Color::Red));
    }

    #[test]
    fn test_blocked_chain_no_win() {
        let b = board_with(3, &[(0, 0), (2, 0)], &[(1, 0)]);
        assert!(!b.check_win(Color::Red));
        assert_eq!(b.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_switch_turn_alternates() {
        let mut b = HexBoard::new(5).unwrap();
        assert_eq!(b.turn(), Turn::First);
        assert_eq!(b.active_player().color, Color::Blue);
        assert_eq!(b.switch_turn().color, Color::Red);
        assert_eq!(b.switch_turn().color, Color::Blue);
    }

    #[test]
    fn test_clone_is_independent() {
        let b = HexBoard::new(4).unwrap();
        let mut copy = b.clone();
        copy.apply_move(0, 0, Color::Red);
        copy.switch_turn();
        assert_eq!(b.get_cell_value(0, 0), None);
        assert_eq!(b.turn(), Turn::First);
        assert_eq!(copy.get_cell_value(0, 0), Some(Color::Red));
    }

    #[test]
    fn test_has_empty_cell() {
        let mut b = HexBoard::new(3).unwrap();
        assert!(b.has_empty_cell());
        for (r, c) in b.empty_cells() {
            b.apply_move(r, c, Color::Red);
        }
        assert!(!b.has_empty_cell());
        assert!(b.empty_cells().is_empty());
    }

    #[test]
    fn test_parse_coord() {
        assert_eq!(parse_coord("a1").unwrap(), (0, 0));
        assert_eq!(parse_coord("C12").unwrap(), (11, 2));
        assert_eq!(parse_coord(" b 3 ").unwrap(), (2, 1));
        assert!(parse_coord("a0").is_err());
        assert!(parse_coord("1a").is_err());
        assert!(parse_coord("").is_err());
        assert!(parse_coord("b").is_err());
    }

    #[test]
    fn test_str_coord() {
        assert_eq!(str_coord((0, 0)), "a1");
        assert_eq!(str_coord((11, 2)), "c12");
        assert_eq!(parse_coord(&str_coord((6, 4))).unwrap(), (6, 4));
    }

    #[test]
    fn test_display_marks_stones() {
        let b = board_with(3, &[(0, 0)], &[(2, 2)]);
        let s = b.to_string();
        assert!(s.contains('X'));
        assert!(s.contains('O'));
        assert_eq!(s.lines().count(), 5);
    }
}
