//! Tic-tac-toe rules for the gambit search engine
//!
//! The smallest reference game: a 3x3 board, cells numbered row by row from
//! 0 to 8. The left player marks `X`, the right player marks `O`.
//!
//! # Usage
//!
//! ```rust
//! use engine_core::{Game, Outcome, Player};
//! use games_tictactoe::{Action, State, TicTacToe};
//!
//! let mut state = State::new(Player::Left);
//! for cell in [0, 3, 1, 4, 2] {
//!     state = TicTacToe::apply_move(&state, &Action::Place(cell));
//! }
//! assert_eq!(TicTacToe::winner(&state), Outcome::Won(Player::Left));
//! ```

use std::fmt;

use engine_core::{Game, GameState, Outcome, Player};

/// Number of cells on the board.
pub const BOARD_SIZE: usize = 9;

/// Winning lines (rows, columns, diagonals), checked in this order.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [6, 4, 2],
];

/// TicTacToe game state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct State {
    /// Owner of each cell, `None` when empty
    pub board: [Option<Player>; BOARD_SIZE],
    /// Player to move
    pub current_player: Player,
}

impl State {
    /// Empty board with `first` to move.
    pub fn new(first: Player) -> Self {
        Self {
            board: [None; BOARD_SIZE],
            current_player: first,
        }
    }

    /// Arbitrary position, for tests and UI-driven setups.
    pub fn from_board(board: [Option<Player>; BOARD_SIZE], current_player: Player) -> Self {
        Self {
            board,
            current_player,
        }
    }

    /// Empty cells, ascending.
    pub fn legal_moves(&self) -> Vec<u8> {
        (0..BOARD_SIZE as u8)
            .filter(|&cell| self.board[cell as usize].is_none())
            .collect()
    }

    /// Mark `cell` for the player to move and hand the turn over.
    ///
    /// An occupied or out-of-range cell leaves the state unchanged.
    pub fn make_move(&self, cell: u8) -> State {
        let index = cell as usize;
        if index >= BOARD_SIZE || self.board[index].is_some() {
            return *self;
        }

        let mut next = *self;
        next.board[index] = Some(self.current_player);
        next.current_player = self.current_player.opponent();
        next
    }

    /// First completed line wins; a full board without one is a draw.
    pub fn winner(&self) -> Outcome {
        for line in &WIN_LINES {
            let [a, b, c] = *line;
            if let Some(player) = self.board[a] {
                if self.board[b] == Some(player) && self.board[c] == Some(player) {
                    return Outcome::Won(player);
                }
            }
        }

        if self.board.iter().any(Option::is_none) {
            Outcome::Ongoing
        } else {
            Outcome::Draw
        }
    }
}

impl GameState for State {
    fn current_player(&self) -> Player {
        self.current_player
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let mark = match self.board[row * 3 + col] {
                    Some(Player::Left) => 'X',
                    Some(Player::Right) => 'O',
                    None => '.',
                };
                write!(f, "{mark}")?;
                if col < 2 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "{} to move", self.current_player)
    }
}

/// TicTacToe action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Place a piece at the given position (0-8)
    Place(u8),
}

impl Action {
    /// Get the position for this action
    pub fn position(&self) -> u8 {
        match self {
            Action::Place(cell) => *cell,
        }
    }
}

/// Tic-tac-toe rules engine
#[derive(Debug, Clone, Copy, Default)]
pub struct TicTacToe;

impl Game for TicTacToe {
    type State = State;
    type Move = Action;

    fn list_moves(state: &State) -> Vec<Action> {
        state.legal_moves().into_iter().map(Action::Place).collect()
    }

    fn apply_move(state: &State, mv: &Action) -> State {
        state.make_move(mv.position())
    }

    fn winner(state: &State) -> Outcome {
        state.winner()
    }
}
