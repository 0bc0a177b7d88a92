//! One-ply baseline: score each immediate move and take the best.

use tabletop_games::{GameError, PlayerId, Position, ScoreWeights};
use tracing::{instrument, trace};

/// Best immediate move for `requester`, with no look-ahead.
///
/// Each legal move is applied to a copy of `position` and scored as a
/// horizon leaf. Ties go to the first move in board order. Returns `None`
/// when `requester` has no legal move or the game is over.
#[instrument(skip(position, weights), fields(game = %position.game(), %requester))]
pub fn heuristic_move(
    position: &Position,
    requester: PlayerId,
    weights: &ScoreWeights,
) -> Result<Option<usize>, GameError> {
    if position.state()?.is_terminal() {
        return Ok(None);
    }

    let mut best: Option<(usize, f64)> = None;
    for &index in &position.valid_moves(requester) {
        let mut child = *position;
        child.apply_move(index, requester)?;
        child.set_to_move(requester.opponent());
        let value = child.score_with(weights, requester, 0, 0)?;
        trace!(index, value, "Scored move");
        if best.is_none_or(|(_, current)| value > current) {
            best = Some((index, value));
        }
    }
    Ok(best.map(|(index, _)| index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabletop_games::{Board, GameKind};

    #[test]
    fn test_takes_center_on_empty_board() {
        let position = Position::new(GameKind::TicTacToe).unwrap();
        let chosen = heuristic_move(&position, PlayerId::One, &ScoreWeights::default());
        assert_eq!(chosen, Ok(Some(4)));
    }

    #[test]
    fn test_takes_immediate_win() {
        let mut board = Board::new(3).unwrap();
        board.set(0, PlayerId::One).unwrap();
        board.set(1, PlayerId::One).unwrap();
        board.set(3, PlayerId::Two).unwrap();
        board.set(4, PlayerId::Two).unwrap();
        let position = Position::from_parts(GameKind::TicTacToe, board, PlayerId::One).unwrap();
        let chosen = heuristic_move(&position, PlayerId::One, &ScoreWeights::default());
        assert_eq!(chosen, Ok(Some(2)));
    }

    #[test]
    fn test_no_move_when_game_over() {
        let mut position = Position::new(GameKind::TicTacToe).unwrap();
        for index in [0, 3, 1, 4, 2] {
            position.play(index).unwrap();
        }
        let chosen = heuristic_move(&position, PlayerId::Two, &ScoreWeights::default());
        assert_eq!(chosen, Ok(None));
    }

    #[test]
    fn test_othello_opening_is_legal() {
        let position = Position::new(GameKind::Othello).unwrap();
        let chosen = heuristic_move(&position, PlayerId::One, &ScoreWeights::default())
            .unwrap()
            .unwrap();
        assert!(position.valid_moves(PlayerId::One).contains(&chosen));
    }
}
