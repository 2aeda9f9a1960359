use crate::board::Color;

/// Errors surfaced by board construction, configuration and human input.
#[derive(Debug, thiserror::Error)]
pub enum HexError {
    #[error("board size must be between 3 and 21 (got {0})")]
    InvalidBoardSize(usize),

    #[error("both players are {0}")]
    DuplicateColor(Color),

    #[error("monte carlo trials must be > 0")]
    InvalidTrials,

    #[error("cannot parse move '{0}' (expected a column letter and a row number, like a1)")]
    Parse(String),

    #[error("input closed before a move was entered")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("board is full but nobody has won")]
    NoWinner,
}

pub type Result<T> = std::result::Result<T, HexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_board_size_display() {
        let err = HexError::InvalidBoardSize(2);
        assert_eq!(err.to_string(), "board size must be between 3 and 21 (got 2)");
    }

    #[test]
    fn test_duplicate_color_display() {
        let err = HexError::DuplicateColor(Color::Red);
        assert_eq!(err.to_string(), "both players are red");
    }

    #[test]
    fn test_parse_display() {
        let err = HexError::Parse("zz".to_string());
        assert!(err.to_string().starts_with("cannot parse move 'zz'"));
    }
}
