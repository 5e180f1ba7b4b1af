use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("illegal move at ({row}, {col})")]
    IllegalMove { row: u8, col: u8 },

    #[error("row/col out of range: ({row}, {col})")]
    OutOfRange { row: u32, col: u32 },

    #[error("game is already over")]
    GameOver,

    #[error("cannot pass while a legal move is available")]
    PassNotAllowed,

    #[error("invalid layout: expected {expected} rows, got {got}")]
    InvalidRowCount { expected: usize, got: usize },

    #[error("invalid layout: row {row} has {got} cells, expected {expected}")]
    InvalidRowLength {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("invalid layout: unexpected character '{character}' at ({row}, {col})")]
    InvalidCellCharacter { character: char, row: usize, col: usize },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_wasm_bindgen::Error> for GameError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        GameError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_square() {
        let err = GameError::IllegalMove { row: 0, col: 7 };
        assert_eq!(err.to_string(), "illegal move at (0, 7)");

        let err = GameError::InvalidCellCharacter {
            character: 'x',
            row: 2,
            col: 5,
        };
        assert!(err.to_string().contains("'x' at (2, 5)"));
    }
}
