//! Behavioural tests for minimax, alpha-beta and search limits.

use std::thread;
use std::time::{Duration, Instant};
use tabletop_games::{Board, GameKind, GameState, PlayerId, Position};
use tabletop_search::{
    AbortReason, CancelToken, SearchAlgorithm, SearchEngine, SearchError, SearchLimits,
};

fn minimax() -> SearchEngine {
    SearchEngine::new(SearchAlgorithm::Minimax)
}

fn alpha_beta() -> SearchEngine {
    SearchEngine::new(SearchAlgorithm::AlphaBeta)
}

/// Plays `plies` pseudo-random legal moves from the start of `game`.
fn scrambled(game: GameKind, seed: u64, plies: usize) -> Position {
    let mut position = Position::new(game).unwrap();
    let mut state = seed;
    for _ in 0..plies {
        if position.state().unwrap().is_terminal() {
            break;
        }
        let moves = position.valid_moves(position.to_move());
        if moves.is_empty() {
            position.pass();
            continue;
        }
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let index = moves[(state >> 33) as usize % moves.len()];
        position.play(index).unwrap();
    }
    position
}

fn tictactoe(moves: &[(usize, PlayerId)], to_move: PlayerId) -> Position {
    let mut board = Board::new(3).unwrap();
    for &(index, player) in moves {
        board.set(index, player).unwrap();
    }
    Position::from_parts(GameKind::TicTacToe, board, to_move).unwrap()
}

#[test]
fn test_alpha_beta_matches_minimax_on_tictactoe() {
    for seed in 0..12 {
        for plies in 0..4 {
            let root = scrambled(GameKind::TicTacToe, seed, plies);
            let requester = root.to_move();
            for depth in 1..=6 {
                let limits = SearchLimits::depth(depth);
                let plain = minimax().search(&root, requester, &limits).unwrap();
                let pruned = alpha_beta().search(&root, requester, &limits).unwrap();
                assert_eq!(
                    plain.best_move(),
                    pruned.best_move(),
                    "seed {seed}, plies {plies}, depth {depth}"
                );
                assert_eq!(plain.value(), pruned.value());
                assert!(pruned.stats().nodes() <= plain.stats().nodes());
            }
        }
    }
}

#[test]
fn test_alpha_beta_matches_minimax_on_othello() {
    for seed in 0..6 {
        for plies in [0, 6, 14, 24] {
            let root = scrambled(GameKind::Othello, seed, plies);
            let requester = root.to_move();
            for depth in 1..=3 {
                let plain = minimax().best_move(&root, requester, depth).unwrap();
                let pruned = alpha_beta().best_move(&root, requester, depth).unwrap();
                assert_eq!(plain, pruned, "seed {seed}, plies {plies}, depth {depth}");
            }
        }
    }
}

#[test]
fn test_takes_winning_cell_at_every_depth() {
    // X X _
    // O O _
    // _ _ _
    let root = tictactoe(
        &[
            (0, PlayerId::One),
            (1, PlayerId::One),
            (3, PlayerId::Two),
            (4, PlayerId::Two),
        ],
        PlayerId::One,
    );
    for depth in 1..=9 {
        assert_eq!(minimax().best_move(&root, PlayerId::One, depth), Ok(Some(2)));
        assert_eq!(
            alpha_beta().best_move(&root, PlayerId::One, depth),
            Ok(Some(2))
        );
    }
}

#[test]
fn test_unbounded_depth_searches_to_the_end() {
    // X O X
    // O _ _
    // _ _ _
    // Both 4 and 8 fork; ties go to the lower index.
    let root = tictactoe(
        &[
            (0, PlayerId::One),
            (1, PlayerId::Two),
            (2, PlayerId::One),
            (3, PlayerId::Two),
        ],
        PlayerId::One,
    );
    assert_eq!(
        alpha_beta().best_move(&root, PlayerId::One, u32::MAX),
        Ok(Some(4))
    );
    assert_eq!(
        minimax().best_move(&root, PlayerId::One, u32::MAX),
        Ok(Some(4))
    );
}

#[test]
fn test_blocks_immediate_threat() {
    // X X _
    // _ O _
    // _ _ _
    let root = tictactoe(
        &[(0, PlayerId::One), (1, PlayerId::One), (4, PlayerId::Two)],
        PlayerId::Two,
    );
    assert_eq!(alpha_beta().best_move(&root, PlayerId::Two, 2), Ok(Some(2)));
}

#[test]
fn test_full_depth_opening_and_optimal_game_draws() {
    let root = Position::new(GameKind::TicTacToe).unwrap();
    let opening = minimax().best_move(&root, PlayerId::One, 9).unwrap();
    assert!(
        matches!(opening, Some(0 | 2 | 4 | 6 | 8)),
        "opening {opening:?} is neither corner nor center"
    );

    let mut position = root;
    while position.state().unwrap() == GameState::Playing {
        let mover = position.to_move();
        let index = alpha_beta()
            .best_move(&position, mover, 9)
            .unwrap()
            .expect("a move while playing");
        position.play(index).unwrap();
    }
    assert_eq!(position.state(), Ok(GameState::Draw));
}

#[test]
fn test_no_move_sentinel() {
    let mut finished = Position::new(GameKind::TicTacToe).unwrap();
    for index in [0, 3, 1, 4, 2] {
        finished.play(index).unwrap();
    }
    assert_eq!(alpha_beta().best_move(&finished, PlayerId::Two, 3), Ok(None));

    // Player two is boxed in while player one can still move.
    let mut board = Board::new(8).unwrap();
    board.set(0, PlayerId::One).unwrap();
    board.set(1, PlayerId::Two).unwrap();
    let stuck = Position::from_parts(GameKind::Othello, board, PlayerId::Two).unwrap();
    assert_eq!(stuck.state(), Ok(GameState::Playing));
    assert_eq!(minimax().best_move(&stuck, PlayerId::Two, 3), Ok(None));
    assert_eq!(minimax().best_move(&stuck, PlayerId::One, 3), Ok(Some(2)));
}

#[test]
fn test_zero_depth_rejected() {
    let root = Position::new(GameKind::TicTacToe).unwrap();
    assert_eq!(
        minimax().best_move(&root, PlayerId::One, 0),
        Err(SearchError::ZeroDepth)
    );
}

#[test]
fn test_depth_is_respected_exactly() {
    let root = Position::new(GameKind::TicTacToe).unwrap();

    let one = minimax()
        .search(&root, PlayerId::One, &SearchLimits::depth(1))
        .unwrap();
    assert_eq!(*one.stats().nodes(), 9);
    assert_eq!(*one.stats().leaves(), 9);

    let two = minimax()
        .search(&root, PlayerId::One, &SearchLimits::depth(2))
        .unwrap();
    assert_eq!(*two.stats().nodes(), 9 + 9 * 8);
    assert_eq!(*two.stats().leaves(), 9 * 8);
    assert_eq!(two.depth(), 2);
}

#[test]
fn test_node_count_grows_with_depth() {
    let root = Position::new(GameKind::Othello).unwrap();
    let nodes: Vec<u64> = (1..=4)
        .map(|depth| {
            *alpha_beta()
                .search(&root, PlayerId::One, &SearchLimits::depth(depth))
                .unwrap()
                .stats()
                .nodes()
        })
        .collect();
    assert!(nodes.windows(2).all(|w| w[0] < w[1]), "{nodes:?}");
}

#[test]
fn test_search_leaves_root_untouched() {
    let root = scrambled(GameKind::Othello, 3, 10);
    let before = root;
    alpha_beta().best_move(&root, root.to_move(), 3).unwrap();
    assert_eq!(root, before);
}

#[test]
fn test_expired_deadline_aborts() {
    let root = Position::new(GameKind::Othello).unwrap();
    let limits = SearchLimits::depth(4).with_deadline(Instant::now());
    assert_eq!(
        alpha_beta().search(&root, PlayerId::One, &limits),
        Err(SearchError::Aborted(AbortReason::DeadlineExceeded))
    );
    assert_eq!(
        alpha_beta().search_iterative(&root, PlayerId::One, &limits),
        Err(SearchError::Aborted(AbortReason::DeadlineExceeded))
    );
}

#[test]
fn test_cancel_stops_running_search() {
    let root = Position::new(GameKind::Othello).unwrap();
    let token = CancelToken::new();
    let limits = SearchLimits::depth(12).with_cancel(token.clone());

    let canceller = thread::spawn(move || {
        thread::sleep(Duration::from_millis(20));
        token.cancel();
    });
    let result = minimax().search(&root, PlayerId::One, &limits);
    canceller.join().unwrap();

    assert_eq!(result, Err(SearchError::Aborted(AbortReason::Cancelled)));
}

#[test]
fn test_iterative_deepening_matches_fixed_depth() {
    let root = scrambled(GameKind::Othello, 1, 8);
    let requester = root.to_move();
    let fixed = alpha_beta()
        .search(&root, requester, &SearchLimits::depth(3))
        .unwrap();
    let deepened = alpha_beta()
        .search_iterative(&root, requester, &SearchLimits::depth(3))
        .unwrap();
    assert_eq!(deepened.best_move(), fixed.best_move());
    assert_eq!(deepened.depth(), 3);
    assert!(deepened.stats().nodes() > fixed.stats().nodes());
}

#[test]
fn test_iterative_deepening_keeps_last_completed_depth() {
    let root = Position::new(GameKind::Othello).unwrap();
    let limits = SearchLimits::depth(20).with_budget(Duration::from_millis(50));
    let outcome = alpha_beta()
        .search_iterative(&root, PlayerId::One, &limits)
        .unwrap();
    assert!(outcome.depth() >= 1 && outcome.depth() < 20);
    assert!(
        root.valid_moves(PlayerId::One)
            .contains(&outcome.best_move().unwrap())
    );
}
