//! Offline driver tests with AI, heuristic and human seats.

use std::collections::HashSet;
use tabletop::{
    AiPlayer, Driver, DriverError, GameEvent, HeuristicPlayer, HumanPlayer, Player, PlayerError,
    RemotePlayer, move_slot,
};
use tabletop_games::{GameKind, GameState};
use tabletop_search::{SearchAlgorithm, SearchEngine};
use tokio::sync::mpsc;

fn ai(name: &str, depth: u32) -> Box<dyn Player> {
    Box::new(AiPlayer::new(
        name,
        SearchEngine::new(SearchAlgorithm::AlphaBeta),
        depth,
    ))
}

fn drain(rx: &mut mpsc::UnboundedReceiver<GameEvent>) -> Vec<GameEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

#[tokio::test]
async fn test_perfect_tictactoe_is_a_draw() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut driver =
        Driver::new(GameKind::TicTacToe, [ai("deep", 9), ai("blue", 9)], tx).unwrap();

    let state = driver.run().await.unwrap();
    assert_eq!(state, GameState::Draw);

    let events = drain(&mut rx);
    let moves = events
        .iter()
        .filter(|e| matches!(e, GameEvent::MoveMade { .. }))
        .count();
    assert_eq!(moves, 9);
    assert_eq!(
        events.last(),
        Some(&GameEvent::GameOver {
            state: GameState::Draw,
            winner: None
        })
    );
}

#[tokio::test]
async fn test_othello_ai_against_heuristic_finishes() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let heuristic: Box<dyn Player> = Box::new(HeuristicPlayer::new("baseline"));
    let mut driver = Driver::new(GameKind::Othello, [ai("searcher", 2), heuristic], tx).unwrap();

    let state = driver.run().await.unwrap();
    assert!(state.is_terminal());
    assert_eq!(driver.game().state(), Ok(state));

    let events = drain(&mut rx);
    assert!(matches!(events.last(), Some(GameEvent::GameOver { .. })));
}

#[tokio::test]
async fn test_human_moves_arrive_through_slot() {
    let (submitter, slot) = move_slot();
    let human: Box<dyn Player> = Box::new(HumanPlayer::new("alice", slot));
    let heuristic: Box<dyn Player> = Box::new(HeuristicPlayer::new("bot"));
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut driver = Driver::new(GameKind::TicTacToe, [human, heuristic], tx).unwrap();

    let game = tokio::spawn(async move { driver.run().await });

    let mut played = HashSet::new();
    let mut human_moves = Vec::new();
    while let Some(event) = rx.recv().await {
        match event {
            GameEvent::Thinking { player } if player == "alice" => {
                let index = (0..9).find(|i| !played.contains(i)).unwrap();
                human_moves.push(index);
                assert!(submitter.submit(index));
            }
            GameEvent::MoveMade { index, .. } => {
                played.insert(index);
            }
            GameEvent::GameOver { .. } => break,
            _ => {}
        }
    }

    let state = game.await.unwrap().unwrap();
    assert!(state.is_terminal());
    assert!(human_moves.iter().all(|index| played.contains(index)));
}

#[tokio::test]
async fn test_closed_input_ends_game_with_error() {
    let (submitter, slot) = move_slot();
    drop(submitter);
    let human: Box<dyn Player> = Box::new(HumanPlayer::new("alice", slot));
    let (tx, _rx) = mpsc::unbounded_channel();
    let mut driver = Driver::new(GameKind::TicTacToe, [human, ai("bot", 1)], tx).unwrap();

    assert_eq!(
        driver.run().await,
        Err(DriverError::Player(PlayerError::InputClosed))
    );
}

#[tokio::test]
async fn test_remote_seat_rejected_offline() {
    let remote: Box<dyn Player> = Box::new(RemotePlayer::new("faraway"));
    let (tx, _rx) = mpsc::unbounded_channel();
    let result = Driver::new(GameKind::TicTacToe, [ai("local", 3), remote], tx);
    assert!(matches!(result, Err(DriverError::RemoteSeat(name)) if name == "faraway"));
}
