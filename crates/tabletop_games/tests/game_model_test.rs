//! Tests for board mutation, captures and model isolation.

use tabletop_games::{
    Board, GameError, GameKind, GameModel, GameState, MoveRejection, Othello, PlayerId, Position,
    Rules,
};

fn othello_model() -> GameModel {
    GameModel::new(GameKind::Othello, ["black".into(), "white".into()]).unwrap()
}

#[test]
fn test_applied_move_is_no_longer_valid_and_others_unchanged() {
    let mut game = GameModel::new(GameKind::TicTacToe, ["x".into(), "o".into()]).unwrap();
    for first in 0..9 {
        let before: Vec<bool> = (0..9).map(|i| game.is_valid_move(i)).collect();
        let mut after = game.clone();
        after.apply_move(first, PlayerId::One).unwrap();

        assert!(!after.is_valid_move(first), "cell {first} should be occupied");
        for (cell, was_valid) in before.iter().enumerate().filter(|(c, _)| *c != first) {
            assert_eq!(after.is_valid_move(cell), *was_valid, "cell {cell} changed validity");
        }
    }
    game.play(0).unwrap();
    assert!(!game.is_valid_move(0));
}

#[test]
fn test_othello_flips_exactly_one_run() {
    // Row 3: O O O X at columns 2..=5, plus decoys that must not flip.
    let mut board = Board::new(8).unwrap();
    let at = |row: usize, col: usize| row * 8 + col;
    board.set(at(3, 2), PlayerId::Two).unwrap();
    board.set(at(3, 3), PlayerId::Two).unwrap();
    board.set(at(3, 4), PlayerId::Two).unwrap();
    board.set(at(3, 5), PlayerId::One).unwrap();
    // Diagonal run from (3,1) heading up-right is open ended: no flip.
    board.set(at(2, 2), PlayerId::Two).unwrap();
    // Run below (3,1) is closed by an empty cell: no flip.
    board.set(at(4, 1), PlayerId::Two).unwrap();

    let position = Position::from_parts(GameKind::Othello, board, PlayerId::One).unwrap();
    let mut game = othello_model().with_position(position).unwrap();
    let before = game.cells();

    game.play(at(3, 1)).unwrap();

    let after = game.cells();
    let changed: Vec<usize> = (0..64).filter(|&i| before[i] != after[i]).collect();
    assert_eq!(changed, vec![at(3, 1), at(3, 2), at(3, 3), at(3, 4)]);
    assert_eq!(game.board().get(at(2, 2)), Some(PlayerId::Two));
    assert_eq!(game.board().get(at(4, 1)), Some(PlayerId::Two));
}

#[test]
fn test_othello_capture_count_matches_flips() {
    let mut board = Othello.initial_board().unwrap();
    let at = |row: usize, col: usize| row * 8 + col;
    Othello.apply_move(&mut board, at(2, 3), PlayerId::One).unwrap();
    Othello.apply_move(&mut board, at(2, 2), PlayerId::Two).unwrap();
    assert_eq!(Othello::captures(&board, at(5, 4), PlayerId::One), 1);

    let two_before = board.count(PlayerId::Two);
    Othello.apply_move(&mut board, at(5, 4), PlayerId::One).unwrap();
    assert_eq!(board.count(PlayerId::Two), two_before - 1);
}

#[test]
fn test_invalid_move_leaves_board_untouched() {
    let mut game = othello_model();
    let before = game.cells();
    let result = game.play(0);
    assert_eq!(
        result,
        Err(GameError::InvalidMove {
            index: 0,
            reason: MoveRejection::NoCapture
        })
    );
    assert_eq!(game.cells(), before);
    assert_eq!(game.current_player(), PlayerId::One);
}

#[test]
fn test_clone_mutation_never_reaches_original() {
    let game = othello_model();
    let mut clone = game.clone();
    let first = clone.valid_moves(PlayerId::One)[0];
    clone.play(first).unwrap();
    clone.set_authoritative_state(GameState::Draw);

    assert_eq!(game.cells(), othello_model().cells());
    assert_eq!(game.state(), Ok(GameState::Playing));
    assert_eq!(game.current_player(), PlayerId::One);
}

#[test]
fn test_othello_full_game_reaches_terminal_state() {
    let mut game = othello_model();
    let mut plies = 0;
    while game.state().unwrap() == GameState::Playing {
        let player = game.current_player();
        match game.valid_moves(player).first() {
            Some(&index) => game.play(index).unwrap(),
            None => game.pass(),
        }
        plies += 1;
        assert!(plies < 200, "game should end");
    }
    assert!(game.state().unwrap().is_terminal());
}

#[test]
fn test_state_and_game_serialize_as_wire_names() {
    assert_eq!(
        serde_json::to_string(&GameState::PlayerOneWon).unwrap(),
        "\"PLAYER_ONE_WON\""
    );
    assert_eq!(
        serde_json::to_string(&GameKind::TicTacToe).unwrap(),
        "\"tic-tac-toe\""
    );
    let parsed: GameKind = serde_json::from_str("\"othello\"").unwrap();
    assert_eq!(parsed, GameKind::Othello);
}
