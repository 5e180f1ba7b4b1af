use crate::board::{BOARD_SIZE, Board};
use crate::config::{GameConfig, VictoryPolicy};
use crate::error::{GameError, Result};
use crate::types::{GameResult, GameState, Outcome, Player, Position};

/// Pieces of each colour flipped by the opponent so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaptureCounts {
    pub black: u32,
    pub white: u32,
}

impl CaptureCounts {
    /// Number of `player`'s pieces the opponent has captured.
    pub fn lost_by(&self, player: Player) -> u32 {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    fn record(&mut self, captured: Player, count: u32) {
        match captured {
            Player::Black => self.black += count,
            Player::White => self.white += count,
        }
    }
}

/// One game in progress: the board plus whose turn it is and how the game
/// is decided. Every mutation goes through [`GameInstance::apply_move`],
/// [`GameInstance::pass`] or [`GameInstance::next_turn`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameInstance {
    board: Board,
    turn: Player,
    victory: VictoryPolicy,
    captures: CaptureCounts,
    outcome: Option<Outcome>,
    is_pass: bool,
    flipped: Vec<Position>,
}

impl GameInstance {
    pub fn new(config: &GameConfig) -> Result<Self> {
        config.validate()?;
        let mut game = Self {
            board: config.layout.board()?,
            turn: config.first_player,
            victory: config.victory,
            captures: CaptureCounts::default(),
            outcome: None,
            is_pass: false,
            flipped: Vec::new(),
        };
        // A custom layout may already be decided.
        game.check_victory();
        Ok(game)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    /// The side waiting for its turn.
    pub fn enemy(&self) -> Player {
        self.turn.opponent()
    }

    pub fn captures(&self) -> CaptureCounts {
        self.captures
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Game-Over is exactly "an outcome has been recorded".
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// The previous action was a pass.
    pub fn is_pass(&self) -> bool {
        self.is_pass
    }

    /// Pieces flipped by the previous move; empty after a pass.
    pub fn flipped(&self) -> &[Position] {
        &self.flipped
    }

    /// Captures the current player would make at `(row, col)`.
    pub fn legal_captures(&self, row: u8, col: u8) -> Vec<Position> {
        self.board.legal_captures(self.turn, row, col)
    }

    pub fn get_legal_moves(&self) -> Vec<Position> {
        if self.is_game_over() {
            return Vec::new();
        }
        self.board.legal_moves(self.turn)
    }

    pub fn has_legal_moves_for_current(&self) -> bool {
        self.board.can_play(self.turn)
    }

    /// True when neither side can place a piece.
    pub fn no_more_moves(&self) -> bool {
        self.board.no_more_moves()
    }

    /// The current player is stuck but the opponent is not.
    pub fn must_pass(&self) -> bool {
        !self.is_game_over() && !self.has_legal_moves_for_current() && !self.no_more_moves()
    }

    /// Squares to highlight while hovering `(row, col)`: the target followed
    /// by its captures, or nothing when the move is illegal.
    pub fn preview(&self, row: u8, col: u8) -> Vec<Position> {
        if self.is_game_over() {
            return Vec::new();
        }
        let captures = self.legal_captures(row, col);
        if captures.is_empty() {
            return captures;
        }

        let mut squares = Vec::with_capacity(captures.len() + 1);
        squares.push(Position::new(row, col));
        squares.extend(captures);
        squares
    }

    /// Places a piece for the current player, flips the captured pieces, and
    /// hands the turn over. Returns the flipped positions.
    /// A rejected move leaves the game untouched.
    pub fn apply_move(&mut self, row: u8, col: u8) -> Result<Vec<Position>> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        validate_row_col(row, col)?;

        let flipped = self.board.place(self.turn, row, col);
        if flipped.is_empty() {
            return Err(GameError::IllegalMove { row, col });
        }

        self.captures.record(self.enemy(), flipped.len() as u32);
        self.is_pass = false;
        self.flipped = flipped.clone();
        self.next_turn();
        self.check_victory();

        Ok(flipped)
    }

    /// Yields the turn. Only allowed when the current player has no move.
    pub fn pass(&mut self) -> Result<()> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        if self.has_legal_moves_for_current() {
            return Err(GameError::PassNotAllowed);
        }

        self.is_pass = true;
        self.flipped.clear();
        self.next_turn();
        self.check_victory();
        Ok(())
    }

    pub fn next_turn(&mut self) {
        self.turn = self.turn.opponent();
    }

    /// Decides the game under the configured policy. Returns `None` while
    /// play continues; otherwise records the outcome, which ends the game.
    pub fn check_victory(&mut self) -> Option<Outcome> {
        if let Some(outcome) = self.outcome {
            return Some(outcome);
        }

        let outcome = match self.victory {
            VictoryPolicy::CaptureThreshold { target } => self
                .threshold_winner(target)
                .map(Outcome::Winner)
                .or_else(|| self.exhaustion_outcome()),
            VictoryPolicy::Exhaustion => self.exhaustion_outcome(),
        };

        self.outcome = outcome;
        outcome
    }

    pub fn to_game_state(&self) -> GameState {
        let (black_count, white_count) = self.board.count();
        GameState {
            board: self.board.to_array().to_vec(),
            current_player: self.turn.code(),
            black_count,
            white_count,
            black_captured: self.captures.black,
            white_captured: self.captures.white,
            is_game_over: self.is_game_over(),
            is_pass: self.is_pass,
            flipped: self.flipped.clone(),
            message: self.outcome.map(|outcome| outcome.to_string()),
        }
    }

    /// Result by the recorded outcome, or by piece majority if the game
    /// has not been decided yet.
    pub fn to_game_result(&self) -> GameResult {
        let (black_count, white_count) = self.board.count();
        let outcome = self
            .outcome
            .unwrap_or_else(|| Outcome::by_majority(black_count, white_count));
        GameResult {
            winner: outcome.winner_code(),
            black_count,
            white_count,
        }
    }

    fn threshold_winner(&self, target: u32) -> Option<Player> {
        [Player::Black, Player::White]
            .into_iter()
            .find(|&player| self.captures.lost_by(player.opponent()) >= target)
    }

    fn exhaustion_outcome(&self) -> Option<Outcome> {
        if self.board.is_full() || self.board.no_more_moves() {
            let (black_count, white_count) = self.board.count();
            Some(Outcome::by_majority(black_count, white_count))
        } else {
            None
        }
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, turn: Player) {
        self.board = board;
        self.turn = turn;
        self.outcome = None;
        self.is_pass = false;
        self.flipped.clear();
    }
}

fn validate_row_col(row: u8, col: u8) -> Result<()> {
    if row as usize >= BOARD_SIZE || col as usize >= BOARD_SIZE {
        return Err(GameError::OutOfRange {
            row: row.into(),
            col: col.into(),
        });
    }
    Ok(())
}
