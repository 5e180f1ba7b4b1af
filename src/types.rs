use std::fmt;

use serde::{Deserialize, Serialize};

/// Content of one board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// Wire encoding: 0=empty, 1=black, 2=white.
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Black => 1,
            Cell::White => 2,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

/// A side to move. Configuration spells it `"black"` / `"white"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    #[default]
    Black,
    White,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    pub fn code(self) -> u8 {
        Cell::from(self).code()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => f.write_str("Black"),
            Player::White => f.write_str("White"),
        }
    }
}

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Player),
    Tie,
}

impl Outcome {
    /// Decides by piece majority.
    pub fn by_majority(black_count: u8, white_count: u8) -> Self {
        if black_count > white_count {
            Outcome::Winner(Player::Black)
        } else if white_count > black_count {
            Outcome::Winner(Player::White)
        } else {
            Outcome::Tie
        }
    }

    /// 0 for a tie, otherwise the winner's cell code.
    pub fn winner_code(self) -> u8 {
        match self {
            Outcome::Winner(player) => player.code(),
            Outcome::Tie => 0,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{player} wins"),
            Outcome::Tie => f.write_str("Tie"),
        }
    }
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// 64 cell codes in row-major order.
    pub board: Vec<u8>,
    pub current_player: u8,
    pub black_count: u8,
    pub white_count: u8,
    /// Black pieces flipped to white so far.
    pub black_captured: u32,
    /// White pieces flipped to black so far.
    pub white_captured: u32,
    pub is_game_over: bool,
    /// Contract:
    /// - `true` when the previous action was a pass.
    /// - `false` when the previous action was a normal move.
    pub is_pass: bool,
    /// Contract:
    /// - Normal move: flipped positions in capture order.
    /// - Pass: must be an empty list.
    pub flipped: Vec<Position>,
    /// `"Black wins"`, `"White wins"`, `"Tie"`, or `None` while playing.
    pub message: Option<String>,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    pub winner: u8,
    pub black_count: u8,
    pub white_count: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_is_an_involution() {
        assert_eq!(Player::Black.opponent(), Player::White);
        assert_eq!(Player::Black.opponent().opponent(), Player::Black);
    }

    #[test]
    fn cell_codes_match_wire_encoding() {
        assert_eq!(Cell::Empty.code(), 0);
        assert_eq!(Cell::from(Player::Black).code(), 1);
        assert_eq!(Player::White.code(), 2);
    }

    #[test]
    fn outcome_messages() {
        assert_eq!(Outcome::by_majority(34, 30).to_string(), "Black wins");
        assert_eq!(Outcome::by_majority(10, 54).to_string(), "White wins");
        assert_eq!(Outcome::by_majority(32, 32).to_string(), "Tie");
        assert_eq!(Outcome::Tie.winner_code(), 0);
    }
}
