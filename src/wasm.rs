use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::board::BOARD_SIZE;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::GameInstance;
use crate::log::log_debug;

/// Game handle for the rendering layer. Coordinates are `(row, col)` in
/// `0..8`; snapshots are plain JS objects with camelCase keys.
#[wasm_bindgen]
pub struct ReversiGame {
    game: GameInstance,
}

#[wasm_bindgen]
impl ReversiGame {
    /// Starts a new game. `config` may be `undefined` for the standard game.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<ReversiGame, JsError> {
        let config: GameConfig = if config.is_undefined() || config.is_null() {
            GameConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config).map_err(GameError::from)?
        };

        let game = GameInstance::new(&config)?;
        log_debug!(
            "new game: victory={:?} layout={:?} first={}",
            config.victory,
            config.layout,
            config.first_player
        );
        Ok(Self { game })
    }

    /// Current `GameState` snapshot.
    pub fn state(&self) -> Result<JsValue, JsError> {
        to_js(&self.game.to_game_state())
    }

    /// Legal targets for the side to move, as `{ row, col }` objects.
    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self) -> Result<JsValue, JsError> {
        to_js(&self.game.get_legal_moves())
    }

    /// Squares to highlight while hovering `(row, col)`; empty off-board.
    pub fn preview(&self, row: u32, col: u32) -> Result<JsValue, JsError> {
        let squares = match board_square(row, col) {
            Ok((row, col)) => self.game.preview(row, col),
            Err(_) => Vec::new(),
        };
        to_js(&squares)
    }

    /// Plays `(row, col)` for the side to move and returns the new state.
    /// Illegal moves throw and leave the game unchanged.
    pub fn play(&mut self, row: u32, col: u32) -> Result<JsValue, JsError> {
        let player = self.game.turn();
        match board_square(row, col).and_then(|(row, col)| self.game.apply_move(row, col)) {
            Ok(flipped) => {
                log_debug!("{player} played ({row}, {col}), flipped {}", flipped.len());
            }
            Err(err) => {
                log_debug!("{player} move rejected: {err}");
                return Err(err.into());
            }
        }
        self.log_if_over();
        self.state()
    }

    /// Passes for the side to move; only allowed when it has no move.
    pub fn pass(&mut self) -> Result<JsValue, JsError> {
        let player = self.game.turn();
        self.game.pass()?;
        log_debug!("{player} passed");
        self.log_if_over();
        self.state()
    }

    #[wasm_bindgen(js_name = mustPass)]
    pub fn must_pass(&self) -> bool {
        self.game.must_pass()
    }

    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.game.is_game_over()
    }

    /// Current player as a cell code (1=black, 2=white).
    #[wasm_bindgen(js_name = currentPlayer)]
    pub fn current_player(&self) -> u8 {
        self.game.turn().code()
    }

    /// `GameResult` snapshot: winner code (0 for a tie) and piece counts.
    pub fn result(&self) -> Result<JsValue, JsError> {
        to_js(&self.game.to_game_result())
    }

    /// `"Black wins"`, `"White wins"`, `"Tie"`, or `undefined`.
    pub fn message(&self) -> Option<String> {
        self.game.outcome().map(|outcome| outcome.to_string())
    }

    fn log_if_over(&self) {
        if let Some(outcome) = self.game.outcome() {
            let (black, white) = self.game.board().count();
            log_debug!("game over: {outcome} ({black}-{white})");
        }
    }
}

/// Range-checks JS coordinates before narrowing them to board indices.
fn board_square(row: u32, col: u32) -> Result<(u8, u8), GameError> {
    if row >= BOARD_SIZE as u32 || col >= BOARD_SIZE as u32 {
        return Err(GameError::OutOfRange { row, col });
    }
    Ok((row as u8, col as u8))
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value)
        .map_err(GameError::from)
        .map_err(JsError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_square_rejects_values_that_would_wrap() {
        assert_eq!(board_square(2, 3), Ok((2, 3)));
        assert_eq!(board_square(7, 7), Ok((7, 7)));
        assert_eq!(
            board_square(258, 3),
            Err(GameError::OutOfRange { row: 258, col: 3 })
        );
        assert_eq!(
            board_square(0, 8),
            Err(GameError::OutOfRange { row: 0, col: 8 })
        );
    }
}
