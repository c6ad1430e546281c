//! Forbidden-move rules for Black
//!
//! Black may not play an overline (six or more in a row), a double-four
//! (two directions making a four at once), or a double-open-three (two
//! directions making a both-ends-open three at once). A move that makes a
//! genuine five is exempt: it wins even if it is simultaneously a
//! double-four or double-open-three elsewhere.
//!
//! Everything here is a predicate over a hypothetical placement. The board
//! is only ever read; whether to reject the move or merely mark the cell is
//! the engine's decision.

use std::collections::HashSet;

use crate::board::{Board, Point, Stone};
use crate::error::EngineError;

use super::scan::{classify_line, Direction};
use super::win::is_winning_move;

/// Would placing a Black stone at `pos` be forbidden?
///
/// `Err(OutOfBounds)` for an off-board `pos`, mirroring the board contract.
/// An occupied `pos` is never evaluated and reports `Ok(false)`: not
/// applicable, not an error.
pub fn is_forbidden_move(board: &Board, pos: Point) -> Result<bool, EngineError> {
    if board.get(pos)? != Stone::Empty {
        return Ok(false);
    }
    Ok(forbidden_at(board, pos))
}

/// Core predicate. `pos` must be in bounds and empty.
pub(crate) fn forbidden_at(board: &Board, pos: Point) -> bool {
    // Checked first: a genuine five always overrides the restriction checks
    if is_winning_move(board, pos, Stone::Black) {
        return false;
    }
    is_overline(board, pos) || is_double_four(board, pos) || is_double_open_three(board, pos)
}

/// Six or more in a row in any direction
fn is_overline(board: &Board, pos: Point) -> bool {
    Direction::ALL
        .iter()
        .any(|&dir| classify_line(board, pos, dir, Stone::Black).length > 5)
}

/// Two or more directions forming a four.
///
/// Raw run length four, regardless of open ends: a closed four still counts.
fn is_double_four(board: &Board, pos: Point) -> bool {
    let mut fours = 0;
    for dir in Direction::ALL {
        if classify_line(board, pos, dir, Stone::Black).length == 4 {
            fours += 1;
            if fours >= 2 {
                return true;
            }
        }
    }
    false
}

/// Two or more directions forming a three with both ends open
fn is_double_open_three(board: &Board, pos: Point) -> bool {
    let mut threes = 0;
    for dir in Direction::ALL {
        let run = classify_line(board, pos, dir, Stone::Black);
        if run.length == 3 && run.open_ends == 2 {
            threes += 1;
            if threes >= 2 {
                return true;
            }
        }
    }
    false
}

/// All currently forbidden points: the advisory sweep over every empty cell.
pub fn forbidden_cells(board: &Board) -> HashSet<Point> {
    board
        .points()
        .filter(|&p| board.is_empty(p) && forbidden_at(board, p))
        .collect()
}
