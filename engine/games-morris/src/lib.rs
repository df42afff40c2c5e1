//! Nine men's morris rules for the gambit search engine
//!
//! Each player starts with nine stones. Stones are first placed on empty
//! points, then slid along lines to adjacent empty points, and a player down
//! to three stones may jump anywhere. Completing a mill (three in a line)
//! removes one opponent stone that is not itself in a mill. A player left
//! with fewer than three stones, or unable to slide, loses.
//!
//! # Board Layout
//!
//! ```text
//! 0-----------1-----------2
//! |           |           |
//! |   3-------4-------5   |
//! |   |       |       |   |
//! |   |   6---7---8   |   |
//! |   |   |       |   |   |
//! 9---10--11      12--13--14
//! |   |   |       |   |   |
//! |   |   15--16--17  |   |
//! |   |   |       |   |   |
//! |   18------19------20   |
//! |           |           |
//! 21----------22----------23
//! ```
//!
//! # Usage
//!
//! ```rust
//! use engine_core::{Game, Player};
//! use games_morris::{Move, NineMenMorris, Phase, State};
//!
//! let state = State::new(Player::Left);
//! assert_eq!(state.phase(Player::Left), Phase::Placement);
//! assert_eq!(NineMenMorris::list_moves(&state).len(), 24);
//!
//! let next = NineMenMorris::apply_move(&state, &Move::place(4));
//! assert_eq!(next.remaining_to_play(Player::Left), 8);
//! ```

use std::fmt;

use engine_core::{Game, GameState, Outcome, Player};

/// Number of points on the board.
pub const BOARD_SIZE: usize = 24;

/// Stones each player starts with.
pub const STONES_PER_PLAYER: u8 = 9;

/// A player with this many stones or fewer may jump.
const FLYING_THRESHOLD: u8 = 3;

/// For each point, the two pairs of points completing a mill with it.
pub const MILLS: [[[usize; 2]; 2]; BOARD_SIZE] = [
    [[1, 2], [9, 21]],
    [[0, 2], [4, 7]],
    [[0, 1], [14, 23]],
    [[4, 5], [10, 18]],
    [[3, 5], [1, 7]],
    [[13, 20], [3, 4]],
    [[7, 8], [11, 15]],
    [[6, 8], [1, 4]],
    [[12, 17], [6, 7]],
    [[10, 11], [0, 21]],
    [[9, 11], [3, 18]],
    [[9, 10], [6, 15]],
    [[13, 14], [8, 17]],
    [[12, 14], [5, 20]],
    [[12, 13], [2, 23]],
    [[16, 17], [6, 11]],
    [[19, 22], [15, 17]],
    [[15, 16], [8, 12]],
    [[19, 20], [3, 10]],
    [[18, 20], [16, 22]],
    [[18, 19], [5, 13]],
    [[22, 23], [0, 9]],
    [[21, 23], [16, 19]],
    [[21, 22], [2, 14]],
];

/// Points reachable by one slide from each point.
pub const NEIGHBORS: [&[usize]; BOARD_SIZE] = [
    &[1, 9],
    &[0, 2, 4],
    &[1, 14],
    &[4, 10],
    &[3, 5, 1, 7],
    &[4, 13],
    &[11, 7],
    &[4, 6, 8],
    &[7, 12],
    &[0, 21, 10],
    &[3, 9, 18, 11],
    &[6, 10, 15],
    &[8, 17, 13],
    &[5, 12, 20, 14],
    &[2, 13, 23],
    &[11, 16],
    &[15, 17, 19],
    &[12, 16],
    &[10, 19],
    &[16, 18, 22, 20],
    &[13, 19],
    &[9, 22],
    &[19, 21, 23],
    &[14, 22],
];

/// What kind of move a player makes next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Putting stones from hand on empty points
    Placement,
    /// Sliding stones to adjacent empty points
    Movement,
    /// Jumping stones to any empty point
    FreeMovement,
}

/// Place, slide or jump, optionally removing an opponent stone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// Point the stone leaves, `None` when placing from hand
    pub source: Option<u8>,
    /// Point the stone lands on
    pub destination: u8,
    /// Opponent stone removed after completing a mill
    pub deletion: Option<u8>,
}

impl Move {
    /// Place a stone from hand without removing anything.
    pub fn place(destination: u8) -> Self {
        Self {
            source: None,
            destination,
            deletion: None,
        }
    }

    /// Move a stone on the board without removing anything.
    pub fn shift(source: u8, destination: u8) -> Self {
        Self {
            source: Some(source),
            destination,
            deletion: None,
        }
    }

    /// Same move, also removing the stone at `point`.
    pub fn removing(self, point: u8) -> Self {
        Self {
            deletion: Some(point),
            ..self
        }
    }
}

/// Nine men's morris game state
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    board: [Option<Player>; BOARD_SIZE],
    current_player: Player,
    /// Stones still in hand, per player
    remaining_to_play: [u8; 2],
    /// Stones in hand plus stones on the board, per player
    remaining: [u8; 2],
    phases: [Phase; 2],
}

impl State {
    /// Empty board, nine stones in each hand, `first` to move.
    pub fn new(first: Player) -> Self {
        Self {
            board: [None; BOARD_SIZE],
            current_player: first,
            remaining_to_play: [STONES_PER_PLAYER; 2],
            remaining: [STONES_PER_PLAYER; 2],
            phases: [Phase::Placement; 2],
        }
    }

    /// Arbitrary position with the given stones still in hand.
    ///
    /// Stone totals and phases are derived from the board.
    pub fn from_position(
        board: [Option<Player>; BOARD_SIZE],
        current_player: Player,
        remaining_to_play: [u8; 2],
    ) -> Self {
        let mut state = Self {
            board,
            current_player,
            remaining_to_play,
            remaining: remaining_to_play,
            phases: [Phase::Placement; 2],
        };
        for player in Player::ALL {
            state.remaining[player.index()] += state.stones_on_board(player);
            state.phases[player.index()] = state.derive_phase(player);
        }
        state
    }

    /// Owner of `point`.
    pub fn point(&self, point: usize) -> Option<Player> {
        self.board[point]
    }

    pub fn phase(&self, player: Player) -> Phase {
        self.phases[player.index()]
    }

    pub fn remaining_to_play(&self, player: Player) -> u8 {
        self.remaining_to_play[player.index()]
    }

    pub fn remaining(&self, player: Player) -> u8 {
        self.remaining[player.index()]
    }

    fn stones_on_board(&self, player: Player) -> u8 {
        self.board.iter().filter(|&&p| p == Some(player)).count() as u8
    }

    /// Whether `mv` names points that fit the board as it stands.
    fn accepts(&self, mv: &Move) -> bool {
        let owner = |point: u8| self.board.get(point as usize).copied();
        let mover = self.current_player;

        owner(mv.destination) == Some(None)
            && mv.source.map_or(true, |point| owner(point) == Some(Some(mover)))
            && mv
                .deletion
                .map_or(true, |point| owner(point) == Some(Some(mover.opponent())))
    }

    /// Placement while stones are in hand, then movement, then jumping once
    /// down to three stones.
    fn derive_phase(&self, player: Player) -> Phase {
        if self.remaining_to_play(player) > 0 {
            Phase::Placement
        } else if self.remaining(player) <= FLYING_THRESHOLD {
            Phase::FreeMovement
        } else {
            Phase::Movement
        }
    }

    /// Whether `point` completes a mill for `player` on this board.
    pub fn part_of_a_mill(&self, point: usize, player: Player) -> bool {
        MILLS[point]
            .iter()
            .any(|&[a, b]| self.board[a] == Some(player) && self.board[b] == Some(player))
    }

    /// Whether `player` has a stone that can slide to an adjacent empty point.
    fn can_slide(&self, player: Player) -> bool {
        self.board.iter().enumerate().any(|(point, &owner)| {
            owner == Some(player) && NEIGHBORS[point].iter().any(|&n| self.board[n].is_none())
        })
    }

    fn empty_points(&self) -> impl Iterator<Item = usize> + '_ {
        (0..BOARD_SIZE).filter(move |&point| self.board[point].is_none())
    }

    fn own_points(&self) -> impl Iterator<Item = usize> + '_ {
        let player = self.current_player;
        (0..BOARD_SIZE).filter(move |&point| self.board[point] == Some(player))
    }
}

impl GameState for State {
    fn current_player(&self) -> Player {
        self.current_player
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const LAYOUT: &str = "\
*-----*-----*
|     |     |
| *---*---* |
| |   |   | |
| | *-*-* | |
| | |   | | |
*-*-*   *-*-*
| | |   | | |
| | *-*-* | |
| |   |   | |
| *---*---* |
|     |     |
*-----*-----*";

        let mut points = self.board.iter();
        for ch in LAYOUT.chars() {
            let out = match ch {
                '*' => match points.next().copied().flatten() {
                    Some(Player::Left) => 'X',
                    Some(Player::Right) => 'O',
                    None => '.',
                },
                other => other,
            };
            write!(f, "{out}")?;
        }
        writeln!(f)?;
        write!(
            f,
            "{} to move, in hand {}/{}",
            self.current_player,
            self.remaining_to_play(Player::Left),
            self.remaining_to_play(Player::Right)
        )
    }
}

/// Nine men's morris rules engine
#[derive(Debug, Clone, Copy, Default)]
pub struct NineMenMorris;

impl NineMenMorris {
    /// Every way to place a stone from hand, with mill removals expanded.
    ///
    /// Also used by move pickers regardless of the current phase.
    pub fn placement_moves(state: &State) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        for point in state.empty_points() {
            Self::deletion_moves(state, Move::place(point as u8), &mut moves);
        }
        moves
    }

    /// Every slide to an adjacent empty point.
    pub fn movement_moves(state: &State) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        for source in state.own_points() {
            for &destination in NEIGHBORS[source] {
                if state.board[destination].is_none() {
                    Self::deletion_moves(
                        state,
                        Move::shift(source as u8, destination as u8),
                        &mut moves,
                    );
                }
            }
        }
        moves
    }

    /// Every jump to any empty point.
    pub fn free_movement_moves(state: &State) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        for source in state.own_points() {
            for destination in state.empty_points() {
                Self::deletion_moves(
                    state,
                    Move::shift(source as u8, destination as u8),
                    &mut moves,
                );
            }
        }
        moves
    }

    /// Push `mv`, or one variant per removable opponent stone if it closes a
    /// mill. Stones inside a mill are protected; if every opponent stone is
    /// protected the plain move is pushed instead.
    fn deletion_moves(state: &State, mv: Move, moves: &mut Vec<Move>) {
        let mover = state.current_player;
        let next = Self::apply_move(state, &mv);

        if !next.part_of_a_mill(mv.destination as usize, mover) {
            moves.push(mv);
            return;
        }

        let opponent = mover.opponent();
        let before = moves.len();
        for point in 0..BOARD_SIZE {
            if next.board[point] == Some(opponent) && !next.part_of_a_mill(point, opponent) {
                moves.push(mv.removing(point as u8));
            }
        }
        if moves.len() == before {
            moves.push(mv);
        }
    }
}

impl Game for NineMenMorris {
    type State = State;
    type Move = Move;

    fn list_moves(state: &State) -> Vec<Move> {
        match state.phase(state.current_player) {
            Phase::Placement => Self::placement_moves(state),
            Phase::Movement => Self::movement_moves(state),
            Phase::FreeMovement => Self::free_movement_moves(state),
        }
    }

    /// A move that names an off-board point, an occupied destination, a
    /// source the mover does not own or a deletion of a non-opponent stone
    /// leaves the state unchanged.
    fn apply_move(state: &State, mv: &Move) -> State {
        let mover = state.current_player;
        let opponent = mover.opponent();
        if !state.accepts(mv) {
            return state.clone();
        }
        let mut next = state.clone();
        next.current_player = opponent;

        match mv.source {
            Some(source) => next.board[source as usize] = None,
            None => {
                let hand = &mut next.remaining_to_play[mover.index()];
                *hand = hand.saturating_sub(1);
            }
        }

        next.board[mv.destination as usize] = Some(mover);

        if let Some(deletion) = mv.deletion {
            next.board[deletion as usize] = None;
            let left = &mut next.remaining[opponent.index()];
            *left = left.saturating_sub(1);
        }

        for player in Player::ALL {
            next.phases[player.index()] = next.derive_phase(player);
        }
        next
    }

    /// Fewer than three stones loses; so does being unable to slide. There
    /// are no draws.
    fn winner(state: &State) -> Outcome {
        if state.remaining(Player::Left) < FLYING_THRESHOLD {
            return Outcome::Won(Player::Right);
        }
        if state.remaining(Player::Right) < FLYING_THRESHOLD {
            return Outcome::Won(Player::Left);
        }

        let player = state.current_player;
        if state.phase(player) == Phase::Movement && !state.can_slide(player) {
            return Outcome::Won(player.opponent());
        }

        Outcome::Ongoing
    }
}

#[cfg(test)]
mod tests;
