use super::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

const L: Option<Player> = Some(Player::Left);
const R: Option<Player> = Some(Player::Right);

/// Placements from an empty board, Left first.
fn place(points: &[u8]) -> State {
    points
        .iter()
        .fold(State::new(Player::Left), |state, &point| {
            NineMenMorris::apply_move(&state, &Move::place(point))
        })
}

fn board_with(stones: &[(usize, Option<Player>)]) -> [Option<Player>; BOARD_SIZE] {
    let mut board = [None; BOARD_SIZE];
    for &(point, owner) in stones {
        board[point] = owner;
    }
    board
}

#[test]
fn test_initial_state() {
    let state = State::new(Player::Right);
    assert_eq!(state.current_player(), Player::Right);
    for player in Player::ALL {
        assert_eq!(state.remaining_to_play(player), 9);
        assert_eq!(state.remaining(player), 9);
        assert_eq!(state.phase(player), Phase::Placement);
    }
    assert_eq!(NineMenMorris::winner(&state), Outcome::Ongoing);
}

#[test]
fn test_opening_moves_are_plain_placements() {
    let state = State::new(Player::Left);
    let moves = NineMenMorris::list_moves(&state);
    assert_eq!(moves, (0..24).map(Move::place).collect::<Vec<_>>());
}

#[test]
fn test_tables_are_symmetric() {
    for (point, neighbors) in NEIGHBORS.iter().enumerate() {
        for &n in *neighbors {
            assert!(NEIGHBORS[n].contains(&point), "{point} -> {n}");
        }
    }
    for (point, pairs) in MILLS.iter().enumerate() {
        for &[a, b] in pairs {
            assert!(MILLS[a].iter().any(|pair| pair.contains(&point) && pair.contains(&b)));
            assert!(MILLS[b].iter().any(|pair| pair.contains(&point) && pair.contains(&a)));
        }
    }
}

#[test]
fn test_placement_updates_counts_and_turn() {
    let state = place(&[4]);
    assert_eq!(state.point(4), L);
    assert_eq!(state.current_player(), Player::Right);
    assert_eq!(state.remaining_to_play(Player::Left), 8);
    assert_eq!(state.remaining(Player::Left), 9);
    assert_eq!(state.remaining_to_play(Player::Right), 9);
    assert!(!NineMenMorris::list_moves(&state).contains(&Move::place(4)));
}

#[test]
fn test_closing_a_mill_requires_a_removal() {
    // Left at 0 and 1, Right at 9 and 10, Left to move
    let state = place(&[0, 9, 1, 10]);
    let moves = NineMenMorris::list_moves(&state);

    let closing: Vec<&Move> = moves.iter().filter(|mv| mv.destination == 2).collect();
    assert_eq!(
        closing,
        vec![&Move::place(2).removing(9), &Move::place(2).removing(10)]
    );
    assert!(moves
        .iter()
        .filter(|mv| mv.destination != 2)
        .all(|mv| mv.deletion.is_none()));
}

#[test]
fn test_stones_in_a_mill_are_protected() {
    // Left at 0, 1 and 23; Right has a mill at 3, 4, 5
    let state = place(&[0, 3, 1, 4, 23, 5]);
    assert_eq!(state.current_player(), Player::Left);

    let closing: Vec<Move> = NineMenMorris::list_moves(&state)
        .into_iter()
        .filter(|mv| mv.destination == 2)
        .collect();
    assert_eq!(closing, vec![Move::place(2)]);
}

#[test]
fn test_removal_updates_opponent_count() {
    let state = place(&[0, 9, 1, 10]);
    let next = NineMenMorris::apply_move(&state, &Move::place(2).removing(9));

    assert_eq!(next.point(9), None);
    assert_eq!(next.point(2), L);
    assert_eq!(next.remaining(Player::Right), 8);
    assert_eq!(next.remaining(Player::Left), 9);
}

#[test]
fn test_phase_after_last_placement() {
    let board = board_with(&[(0, L), (4, L), (8, L), (12, L), (9, R), (13, R), (17, R), (21, R)]);
    let state = State::from_position(board, Player::Left, [1, 0]);
    assert_eq!(state.phase(Player::Left), Phase::Placement);
    assert_eq!(state.phase(Player::Right), Phase::Movement);

    let next = NineMenMorris::apply_move(&state, &Move::place(19));
    assert_eq!(next.phase(Player::Left), Phase::Movement);
    assert_eq!(next.remaining(Player::Left), 5);
}

#[test]
fn test_movement_slides_to_neighbors() {
    let board = board_with(&[(0, L), (4, L), (8, L), (12, L), (9, R), (13, R), (17, R), (21, R)]);
    let state = State::from_position(board, Player::Left, [0, 0]);
    assert_eq!(state.phase(Player::Left), Phase::Movement);

    let moves = NineMenMorris::list_moves(&state);
    assert!(moves.iter().all(|mv| {
        let source = mv.source.unwrap() as usize;
        NEIGHBORS[source].contains(&(mv.destination as usize))
            && state.point(mv.destination as usize).is_none()
    }));
    assert!(moves.contains(&Move::shift(0, 1)));
    assert!(!moves.contains(&Move::shift(0, 9)));

    let next = NineMenMorris::apply_move(&state, &Move::shift(0, 1));
    assert_eq!(next.point(0), None);
    assert_eq!(next.point(1), L);
    assert_eq!(next.remaining(Player::Left), 4);
}

#[test]
fn test_three_stones_may_jump() {
    let board = board_with(&[(0, L), (4, L), (19, L), (9, R), (10, R), (12, R), (13, R)]);
    let state = State::from_position(board, Player::Left, [0, 0]);
    assert_eq!(state.phase(Player::Left), Phase::FreeMovement);
    assert_eq!(state.phase(Player::Right), Phase::Movement);

    // no pair of left stones shares a line, so no mills: 3 stones x 17 empty points
    let moves = NineMenMorris::list_moves(&state);
    assert_eq!(moves.len(), 3 * 17);
    assert!(moves.contains(&Move::shift(19, 2)));

    // jumping stays jumping
    let next = NineMenMorris::apply_move(&state, &Move::shift(19, 2));
    let back = NineMenMorris::apply_move(&next, &Move::shift(9, 21));
    assert_eq!(back.phase(Player::Left), Phase::FreeMovement);
}

#[test]
fn test_fewer_than_three_stones_loses() {
    let board = board_with(&[(0, L), (1, L), (4, L), (9, R), (10, R)]);
    let state = State::from_position(board, Player::Left, [0, 0]);
    assert_eq!(NineMenMorris::winner(&state), Outcome::Won(Player::Left));

    let board = board_with(&[(0, L), (9, R), (10, R), (11, R)]);
    let state = State::from_position(board, Player::Right, [1, 0]);
    assert_eq!(NineMenMorris::winner(&state), Outcome::Won(Player::Right));
}

#[test]
fn test_blocked_player_loses() {
    // Left owns the four outer corners, Right sits on every exit
    let board = board_with(&[
        (0, L),
        (2, L),
        (21, L),
        (23, L),
        (1, R),
        (9, R),
        (14, R),
        (22, R),
    ]);
    let state = State::from_position(board, Player::Left, [0, 0]);
    assert_eq!(state.phase(Player::Left), Phase::Movement);
    assert!(NineMenMorris::list_moves(&state).is_empty());
    assert_eq!(NineMenMorris::winner(&state), Outcome::Won(Player::Right));

    let value = NineMenMorris::state_value(&state, 0);
    assert!(!value.ongoing);
    assert_eq!(value.values, [0.0, 1.0]);

    // the same position with Right to move is still open
    let state = State::from_position(board, Player::Right, [0, 0]);
    assert_eq!(NineMenMorris::winner(&state), Outcome::Ongoing);
}

#[test]
fn test_placement_moves_available_in_any_phase() {
    let board = board_with(&[(0, L), (4, L), (8, L), (12, L), (9, R), (13, R), (17, R), (21, R)]);
    let state = State::from_position(board, Player::Left, [0, 0]);
    assert_eq!(NineMenMorris::placement_moves(&state).len(), 16);
}

#[test]
fn test_random_play_keeps_counts_consistent() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);

    for _ in 0..20 {
        let mut state = State::new(Player::Left);
        for ply in 0..300u32 {
            if !NineMenMorris::state_value(&state, ply).ongoing {
                break;
            }
            state = NineMenMorris::simulation_policy(&state, &mut rng).unwrap();

            for player in Player::ALL {
                let on_board = state.board.iter().filter(|&&p| p == Some(player)).count() as u8;
                assert_eq!(
                    state.remaining(player),
                    on_board + state.remaining_to_play(player)
                );
            }
        }
    }
}

#[test]
fn test_display() {
    let state = place(&[0, 23]);
    let rendered = state.to_string();
    assert!(rendered.starts_with("X-----.-----.\n"));
    assert!(rendered.contains(".-----.-----O\n"));
    assert!(rendered.ends_with("left to move, in hand 8/8"));
}

#[test]
fn test_invalid_moves_leave_state_unchanged() {
    let state = place(&[0, 9]);
    assert_eq!(state.current_player(), Player::Left);

    let rejected = [
        Move::place(24),
        Move::place(200),
        Move::place(0),
        Move::place(9),
        Move::shift(9, 1),
        Move::shift(30, 1),
        Move::place(1).removing(0),
        Move::place(1).removing(40),
    ];
    for mv in rejected {
        assert_eq!(NineMenMorris::apply_move(&state, &mv), state, "{mv:?}");
    }

    let next = NineMenMorris::apply_move(&state, &Move::place(1));
    assert_eq!(next.point(1), L);
}
