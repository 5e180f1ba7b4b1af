use crate::error::{GameError, Result};
use crate::types::{Cell, Player, Position};

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// 8x8 board represented by two non-overlapping bitboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    black: u64,
    white: u64,
}

impl Board {
    /// Creates the initial board:
    /// d4=white, e4=black, d5=black, e5=white.
    pub fn new() -> Self {
        Self {
            black: bit(28) | bit(35),
            white: bit(27) | bit(36),
        }
    }

    pub fn empty() -> Self {
        Self { black: 0, white: 0 }
    }

    /// Builds a board from raw masks. Squares set in both masks are black.
    pub fn from_bitboards(black: u64, white: u64) -> Self {
        Self {
            black,
            white: white & !black,
        }
    }

    /// Parses eight rows of `.`, `B` and `W` (case-insensitive).
    /// Whitespace inside a row is ignored.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        if rows.len() != BOARD_SIZE {
            return Err(GameError::InvalidRowCount {
                expected: BOARD_SIZE,
                got: rows.len(),
            });
        }

        let mut board = Self::empty();
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line
                .as_ref()
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();
            if cells.len() != BOARD_SIZE {
                return Err(GameError::InvalidRowLength {
                    row,
                    expected: BOARD_SIZE,
                    got: cells.len(),
                });
            }

            for (col, character) in cells.into_iter().enumerate() {
                let square = bit(row * BOARD_SIZE + col);
                match character {
                    '.' => {}
                    'B' | 'b' => board.black |= square,
                    'W' | 'w' => board.white |= square,
                    _ => {
                        return Err(GameError::InvalidCellCharacter {
                            character,
                            row,
                            col,
                        });
                    }
                }
            }
        }

        Ok(board)
    }

    /// Returns the cell at `(row, col)`, or `None` off-board.
    pub fn cell(&self, row: u8, col: u8) -> Option<Cell> {
        let pos = row_col_to_pos(row, col)?;
        Some(self.cell_at(pos))
    }

    /// Opponent pieces captured by `player` placing at `(row, col)`,
    /// grouped by direction and ordered outward from the target.
    /// Empty when the target is off-board, occupied, or captures nothing.
    pub fn legal_captures(&self, player: Player, row: u8, col: u8) -> Vec<Position> {
        let Some(pos) = row_col_to_pos(row, col) else {
            return Vec::new();
        };
        let (me, opp) = self.sides(player);

        Self::collect_captures(pos, me, opp)
            .into_iter()
            .map(pos_to_position)
            .collect()
    }

    /// Returns the legal move mask for the given side.
    pub fn legal_move_mask(&self, player: Player) -> u64 {
        let (me, opp) = self.sides(player);
        let occupied = me | opp;
        let mut legal = 0u64;

        for pos in 0..NUM_SQUARES {
            let move_bit = bit(pos);
            if (occupied & move_bit) != 0 {
                continue;
            }
            if Self::has_capture(pos, me, opp) {
                legal |= move_bit;
            }
        }

        legal
    }

    /// Legal target squares for `player` in row-major order.
    pub fn legal_moves(&self, player: Player) -> Vec<Position> {
        mask_to_positions(self.legal_move_mask(player))
    }

    pub fn can_play(&self, player: Player) -> bool {
        let (me, opp) = self.sides(player);
        let empty = !(me | opp);
        (0..NUM_SQUARES).any(|pos| (empty & bit(pos)) != 0 && Self::has_capture(pos, me, opp))
    }

    /// True when neither side has a legal move.
    pub fn no_more_moves(&self) -> bool {
        !self.can_play(Player::Black) && !self.can_play(Player::White)
    }

    /// Places one piece and flips captured pieces.
    /// Returns the captured positions; empty (and the board untouched) when
    /// the move is illegal.
    pub fn place(&mut self, player: Player, row: u8, col: u8) -> Vec<Position> {
        let Some(pos) = row_col_to_pos(row, col) else {
            return Vec::new();
        };
        let (me, opp) = self.sides(player);

        let captures = Self::collect_captures(pos, me, opp);
        if captures.is_empty() {
            return Vec::new();
        }

        let flips = captures.iter().fold(0u64, |acc, &idx| acc | bit(idx));
        let next_me = me | bit(pos) | flips;
        let next_opp = opp & !flips;

        match player {
            Player::Black => {
                self.black = next_me;
                self.white = next_opp;
            }
            Player::White => {
                self.white = next_me;
                self.black = next_opp;
            }
        }

        captures.into_iter().map(pos_to_position).collect()
    }

    /// Returns `(black_count, white_count)`.
    pub fn count(&self) -> (u8, u8) {
        (self.black.count_ones() as u8, self.white.count_ones() as u8)
    }

    /// Returns the number of empty squares.
    pub fn empty_count(&self) -> u8 {
        let (black_count, white_count) = self.count();
        NUM_SQUARES as u8 - black_count - white_count
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Converts board to `[u8; 64]` where 0=empty, 1=black, 2=white.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut board = [0u8; NUM_SQUARES];
        for (pos, cell) in board.iter_mut().enumerate() {
            *cell = self.cell_at(pos).code();
        }
        board
    }

    fn cell_at(&self, pos: usize) -> Cell {
        let square = bit(pos);
        if (self.black & square) != 0 {
            Cell::Black
        } else if (self.white & square) != 0 {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    fn sides(&self, player: Player) -> (u64, u64) {
        match player {
            Player::Black => (self.black, self.white),
            Player::White => (self.white, self.black),
        }
    }

    fn collect_captures(pos: usize, me: u64, opp: u64) -> Vec<usize> {
        if ((me | opp) & bit(pos)) != 0 {
            return Vec::new();
        }

        let (row, col) = pos_to_row_col(pos);
        DIRECTIONS
            .iter()
            .filter_map(|&dir| bounded_run(row, col, dir, me, opp))
            .flatten()
            .collect()
    }

    fn has_capture(pos: usize, me: u64, opp: u64) -> bool {
        let (row, col) = pos_to_row_col(pos);
        DIRECTIONS
            .iter()
            .any(|&dir| bounded_run(row, col, dir, me, opp).is_some())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Scans from `(row, col)` along `(dr, dc)`. Returns the run of opponent
/// squares when it is closed by one of `me`; `None` when the run is empty,
/// broken by an empty square, or runs off the board.
fn bounded_run(
    row: i32,
    col: i32,
    (dr, dc): (i32, i32),
    me: u64,
    opp: u64,
) -> Option<Vec<usize>> {
    let mut r = row + dr;
    let mut c = col + dc;
    let mut run = Vec::new();

    while in_bounds(r, c) {
        let idx = (r as usize) * BOARD_SIZE + c as usize;
        let square = bit(idx);
        if (opp & square) != 0 {
            run.push(idx);
        } else if (me & square) != 0 {
            return if run.is_empty() { None } else { Some(run) };
        } else {
            return None;
        }

        r += dr;
        c += dc;
    }

    None
}

fn bit(pos: usize) -> u64 {
    if pos < NUM_SQUARES { 1u64 << pos } else { 0 }
}

fn row_col_to_pos(row: u8, col: u8) -> Option<usize> {
    if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
        Some(row as usize * BOARD_SIZE + col as usize)
    } else {
        None
    }
}

fn pos_to_row_col(pos: usize) -> (i32, i32) {
    ((pos / BOARD_SIZE) as i32, (pos % BOARD_SIZE) as i32)
}

fn pos_to_position(pos: usize) -> Position {
    Position::new((pos / BOARD_SIZE) as u8, (pos % BOARD_SIZE) as u8)
}

fn mask_to_positions(mask: u64) -> Vec<Position> {
    let mut bits = mask;
    let mut out = Vec::new();

    while bits != 0 {
        out.push(pos_to_position(bits.trailing_zeros() as usize));
        bits &= bits - 1;
    }

    out
}

fn in_bounds(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}
