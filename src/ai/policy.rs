use rand::Rng;

use super::Difficulty;
use crate::game::{Board, Move};

/// Select a move for the computer among `moves`.
///
/// Panics if `moves` is empty; a player with no legal move passes before the
/// policy is ever consulted.
pub fn select_move<R: Rng>(
    board: &Board,
    moves: &[Move],
    difficulty: Difficulty,
    rng: &mut R,
) -> Move {
    assert!(!moves.is_empty(), "no legal moves to select from");
    match difficulty {
        Difficulty::Easy => easy(moves, rng),
        Difficulty::Normal => normal(moves),
        Difficulty::Hard => hard(board, moves),
    }
}

/// Uniform-random choice.
fn easy<R: Rng>(moves: &[Move], rng: &mut R) -> Move {
    moves[rng.random_range(0..moves.len())]
}

/// Maximum capture count; ties go to the first move in enumeration order.
fn normal(moves: &[Move]) -> Move {
    let mut best = moves[0];
    for &mv in &moves[1..] {
        if mv.captures > best.captures {
            best = mv;
        }
    }
    best
}

/// Take a corner when one is available, checked top-left, top-right,
/// bottom-left, bottom-right; otherwise fall back to the normal rule.
fn hard(board: &Board, moves: &[Move]) -> Move {
    let right = board.width() - 1;
    let bottom = board.height() - 1;
    let corners = [(0, 0), (0, right), (bottom, 0), (bottom, right)];
    for (row, col) in corners {
        if let Some(&mv) = moves.iter().find(|m| m.row == row && m.col == col) {
            return mv;
        }
    }
    normal(moves)
}
