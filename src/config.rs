use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::{GameError, Result};
use crate::types::Player;

/// Capture target used by the capture-race variant.
pub const DEFAULT_CAPTURE_TARGET: u32 = 20;

const SCATTERED_ROWS: [&str; 8] = [
    "........",
    "...W....",
    ".W..WW..",
    "..WWWB..",
    "..WBWWW.",
    "..WWW...",
    ".W..BW..",
    "........",
];

static SCATTERED_BOARD: Lazy<Board> = Lazy::new(|| {
    Board::from_rows(&SCATTERED_ROWS).expect("scattered layout rows are well-formed")
});

/// When the game is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum VictoryPolicy {
    /// Game ends when the board is full or neither side can move;
    /// the majority colour wins.
    #[default]
    Exhaustion,
    /// First side to capture `target` opposing pieces wins.
    CaptureThreshold {
        #[serde(default = "default_capture_target")]
        target: u32,
    },
}

fn default_capture_target() -> u32 {
    DEFAULT_CAPTURE_TARGET
}

/// Opening placement.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Layout {
    /// d4=white, e4=black, d5=black, e5=white.
    #[default]
    Standard,
    /// Mostly-white mid-game seed of the capture-race variant.
    Scattered,
    /// Eight rows of `.`, `B`, `W`.
    Custom { rows: Vec<String> },
}

impl Layout {
    pub fn board(&self) -> Result<Board> {
        match self {
            Layout::Standard => Ok(Board::new()),
            Layout::Scattered => Ok(*SCATTERED_BOARD),
            Layout::Custom { rows } => Board::from_rows(rows.as_slice()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    pub victory: VictoryPolicy,
    pub layout: Layout,
    pub first_player: Player,
}

impl GameConfig {
    /// The capture-race variant: scattered opening, first to 20 captures.
    pub fn capture_race() -> Self {
        Self {
            victory: VictoryPolicy::CaptureThreshold {
                target: DEFAULT_CAPTURE_TARGET,
            },
            layout: Layout::Scattered,
            first_player: Player::Black,
        }
    }

    pub fn with_victory(mut self, victory: VictoryPolicy) -> Self {
        self.victory = victory;
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if let VictoryPolicy::CaptureThreshold { target: 0 } = self.victory {
            return Err(GameError::InvalidConfiguration {
                message: "capture target must be at least 1".to_string(),
            });
        }
        self.layout.board().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    #[test]
    fn default_is_standard_exhaustion_with_black_first() {
        let config = GameConfig::default();

        assert_eq!(config.victory, VictoryPolicy::Exhaustion);
        assert_eq!(config.layout, Layout::Standard);
        assert_eq!(config.first_player, Player::Black);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn scattered_board_matches_seed_rows() {
        let board = Layout::Scattered.board().unwrap();

        assert_eq!(board.count(), (3, 16));
        assert_eq!(board.cell(1, 3), Some(Cell::White));
        assert_eq!(board.cell(3, 5), Some(Cell::Black));
        assert_eq!(board.cell(4, 3), Some(Cell::Black));
        assert_eq!(board.cell(6, 4), Some(Cell::Black));
        assert_eq!(board.cell(0, 0), Some(Cell::Empty));
    }

    #[test]
    fn zero_capture_target_is_rejected() {
        let config = GameConfig {
            victory: VictoryPolicy::CaptureThreshold { target: 0 },
            ..GameConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(GameError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn malformed_custom_layout_is_rejected() {
        let config = GameConfig {
            layout: Layout::Custom {
                rows: vec!["........".to_string(); 7],
            },
            ..GameConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(GameError::InvalidRowCount {
                expected: 8,
                got: 7
            })
        );
    }

    #[test]
    fn capture_race_preset() {
        let config = GameConfig::capture_race();

        assert_eq!(
            config.victory,
            VictoryPolicy::CaptureThreshold { target: 20 }
        );
        assert_eq!(config.layout, Layout::Scattered);
        assert!(config.validate().is_ok());
    }
}
