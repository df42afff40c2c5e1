//! Connect 4 rules for the gambit search engine
//!
//! Connect 4 is a two-player connection game where players drop discs
//! into a 7-column, 6-row vertically suspended grid. The objective is to be
//! the first to form a horizontal, vertical, or diagonal line of four discs.
//!
//! # Board Layout
//!
//! The board is stored in row-major order, with row 0 at the bottom:
//! ```text
//! Row 5: [35][36][37][38][39][40][41]  <- Top
//! Row 4: [28][29][30][31][32][33][34]
//! Row 3: [21][22][23][24][25][26][27]
//! Row 2: [14][15][16][17][18][19][20]
//! Row 1: [ 7][ 8][ 9][10][11][12][13]
//! Row 0: [ 0][ 1][ 2][ 3][ 4][ 5][ 6]  <- Bottom
//!         Col 0  1  2  3  4  5  6
//! ```
//!
//! # Usage
//!
//! ```rust
//! use engine_core::{Game, Player};
//! use games_connect4::{Action, Connect4, State};
//!
//! let state = State::new(Player::Left);
//! assert_eq!(Connect4::list_moves(&state).len(), 7);
//!
//! let next = Connect4::apply_move(&state, &Action::Drop(3));
//! assert_eq!(next.cell(3, 0), Some(Player::Left));
//! ```

use std::fmt;

use engine_core::{Game, GameState, Outcome, Player};

/// Board dimensions
pub const COLS: usize = 7;
pub const ROWS: usize = 6;
pub const BOARD_SIZE: usize = COLS * ROWS; // 42

/// Discs in a row needed to win.
pub const CONNECT: usize = 4;

/// Connect4 game state
///
/// Carries the board, the player to move and the cached terminal check of
/// the last drop.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    /// Disc owner per cell, row-major with row 0 at the bottom
    board: [Option<Player>; BOARD_SIZE],
    /// Player to move
    current_player: Player,
    /// Result after the last drop
    outcome: Outcome,
    /// Number of discs in each column
    column_heights: [u8; COLS],
}

impl State {
    /// Empty board with `first` to move.
    pub fn new(first: Player) -> Self {
        Self {
            board: [None; BOARD_SIZE],
            current_player: first,
            outcome: Outcome::Ongoing,
            column_heights: [0; COLS],
        }
    }

    /// Build a position from per-column stacks, bottom disc first.
    ///
    /// Columns taller than the board are truncated. The outcome is computed
    /// by scanning the whole board.
    pub fn from_columns(columns: [&[Player]; COLS], current_player: Player) -> Self {
        let mut state = Self::new(current_player);
        for (col, stack) in columns.iter().enumerate() {
            for (row, &player) in stack.iter().take(ROWS).enumerate() {
                state.board[Self::pos(col, row)] = Some(player);
            }
            state.column_heights[col] = stack.len().min(ROWS) as u8;
        }
        state.outcome = state.scan_outcome();
        state
    }

    /// Disc at `(col, row)`, row 0 at the bottom.
    pub fn cell(&self, col: usize, row: usize) -> Option<Player> {
        self.board[Self::pos(col, row)]
    }

    /// Number of discs in `col`.
    pub fn column_height(&self, col: usize) -> u8 {
        self.column_heights[col]
    }

    /// Terminal check of this position.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Check if the game is over
    pub fn is_done(&self) -> bool {
        !self.outcome.is_ongoing()
    }

    /// Get legal moves (columns that are not full)
    pub fn legal_moves(&self) -> Vec<u8> {
        if self.is_done() {
            return Vec::new();
        }

        (0..COLS as u8)
            .filter(|&col| self.column_heights[col as usize] < ROWS as u8)
            .collect()
    }

    /// Convert column and row to board index
    #[inline]
    fn pos(col: usize, row: usize) -> usize {
        row * COLS + col
    }

    /// Drop a disc in the given column and return the new state
    pub fn drop_piece(&self, column: u8) -> State {
        let col = column as usize;

        if self.is_done() || col >= COLS || self.column_heights[col] >= ROWS as u8 {
            return self.clone(); // Invalid move, return unchanged state
        }

        let mut new_state = self.clone();
        let row = self.column_heights[col] as usize;

        new_state.board[Self::pos(col, row)] = Some(self.current_player);
        new_state.column_heights[col] += 1;
        new_state.current_player = self.current_player.opponent();
        new_state.outcome = new_state.outcome_after_drop(col, row);

        new_state
    }

    /// Check if the disc at (col, row) completes a line, else whether the
    /// board is full
    fn outcome_after_drop(&self, col: usize, row: usize) -> Outcome {
        if let Some(player) = self.line_through(col, row) {
            return Outcome::Won(player);
        }
        self.fill_outcome()
    }

    /// Owner of a line of `CONNECT` discs through `(col, row)`, if any.
    fn line_through(&self, col: usize, row: usize) -> Option<Player> {
        let player = self.cell(col, row)?;

        // Direction vectors: horizontal, vertical, diagonal /, diagonal \
        let directions: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

        for (dc, dr) in directions {
            let count = 1
                + self.run_length(col, row, dc, dr, player)
                + self.run_length(col, row, -dc, -dr, player);
            if count >= CONNECT {
                return Some(player);
            }
        }
        None
    }

    /// Consecutive `player` discs from `(col, row)` stepping by `(dc, dr)`,
    /// not counting the start.
    fn run_length(&self, col: usize, row: usize, dc: i32, dr: i32, player: Player) -> usize {
        let (mut c, mut r) = (col as i32 + dc, row as i32 + dr);
        let mut count = 0;
        while c >= 0 && c < COLS as i32 && r >= 0 && r < ROWS as i32 {
            if self.board[Self::pos(c as usize, r as usize)] != Some(player) {
                break;
            }
            count += 1;
            c += dc;
            r += dr;
        }
        count
    }

    fn fill_outcome(&self) -> Outcome {
        if self.column_heights.iter().all(|&h| h >= ROWS as u8) {
            Outcome::Draw
        } else {
            Outcome::Ongoing
        }
    }

    /// Full-board terminal check, for positions not built by dropping.
    fn scan_outcome(&self) -> Outcome {
        for col in 0..COLS {
            for row in 0..ROWS {
                if let Some(player) = self.line_through(col, row) {
                    return Outcome::Won(player);
                }
            }
        }
        self.fill_outcome()
    }
}

impl GameState for State {
    fn current_player(&self) -> Player {
        self.current_player
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            for col in 0..COLS {
                let disc = match self.cell(col, row) {
                    Some(Player::Left) => 'L',
                    Some(Player::Right) => 'R',
                    None => '.',
                };
                write!(f, "{disc}")?;
            }
            writeln!(f)?;
        }
        for col in 0..COLS {
            write!(f, "{col}")?;
        }
        writeln!(f)?;
        write!(f, "{} to move", self.current_player)
    }
}

/// Connect4 action - drop a piece in a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Drop a piece in the given column (0-6)
    Drop(u8),
}

impl Action {
    /// Get the column for this action
    pub fn column(&self) -> u8 {
        match self {
            Action::Drop(col) => *col,
        }
    }
}

/// Connect 4 rules engine
#[derive(Debug, Clone, Copy, Default)]
pub struct Connect4;

impl Game for Connect4 {
    type State = State;
    type Move = Action;

    fn list_moves(state: &State) -> Vec<Action> {
        state.legal_moves().into_iter().map(Action::Drop).collect()
    }

    fn apply_move(state: &State, mv: &Action) -> State {
        state.drop_piece(mv.column())
    }

    fn winner(state: &State) -> Outcome {
        state.outcome()
    }
}
