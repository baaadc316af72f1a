//! Capture rules: which discs a placement flips, and which placements are
//! legal. All functions here are pure with respect to the borrowed board.

use super::board::{Board, Cell};
use super::player::Player;

/// The 8 compass directions a capture line can run in.
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

/// A legal placement together with the number of discs it captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub captures: usize,
}

/// Compute the coordinates of every opposing disc that placing `player` at
/// `(row, col)` would flip. Returns an empty vector if the target cell is
/// occupied or no direction brackets an opposing run.
pub fn captured_discs(board: &Board, row: usize, col: usize, player: Player) -> Vec<(usize, usize)> {
    if board.get(row, col) != Cell::Empty {
        return Vec::new();
    }
    let own = player.to_cell();
    let opponent = player.other().to_cell();
    let mut captured = Vec::new();

    for &(dr, dc) in &DIRECTIONS {
        let mut r = row as i32 + dr;
        let mut c = col as i32 + dc;
        let mut run = Vec::new();

        while board.in_bounds(r, c) && board.get(r as usize, c as usize) == opponent {
            run.push((r as usize, c as usize));
            r += dr;
            c += dc;
        }
        // A run counts only when it ends on our own disc, not an edge or an
        // empty cell.
        if !run.is_empty() && board.in_bounds(r, c) && board.get(r as usize, c as usize) == own {
            captured.append(&mut run);
        }
    }
    captured
}

/// Enumerate every legal move for `player`, scanning the board in row-major
/// order. The order is part of the contract: the AI breaks capture-count ties
/// by taking the first maximal element.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Move> {
    let mut moves = Vec::new();
    for row in 0..board.height() {
        for col in 0..board.width() {
            if board.get(row, col) != Cell::Empty {
                continue;
            }
            let captures = captured_discs(board, row, col, player).len();
            if captures > 0 {
                moves.push(Move { row, col, captures });
            }
        }
    }
    moves
}

/// Place `player`'s disc at `(row, col)` and flip the captured run, returning
/// the flipped coordinates. An illegal target leaves the board untouched and
/// returns an empty vector, so the operation is atomic.
pub fn apply_move(board: &mut Board, row: usize, col: usize, player: Player) -> Vec<(usize, usize)> {
    let flipped = captured_discs(board, row, col, player);
    if flipped.is_empty() {
        return flipped;
    }
    board.set(row, col, player.to_cell());
    for &(r, c) in &flipped {
        board.set(r, c, player.to_cell());
    }
    flipped
}
