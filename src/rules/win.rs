//! Win detection
//!
//! A move wins with five in a row. Black needs exactly five: a six-or-longer
//! run is an overline and never a Black win (the forbidden-move rules reject
//! it when they are enabled). White has no overline rule, so five or more
//! wins.

use crate::board::{Board, Point, Stone};

use super::scan::{classify_line, Direction};

/// Does `length` in one direction win for `color`?
#[inline]
fn wins(color: Stone, length: u32) -> bool {
    match color {
        Stone::White => length >= 5,
        Stone::Black => length == 5,
        Stone::Empty => false,
    }
}

/// Check whether placing `color` at `pos` produces a winning row.
///
/// Virtual-stone evaluation: `pos` may be empty, the board is not mutated.
/// Pure function of the board contents.
pub fn is_winning_move(board: &Board, pos: Point, color: Stone) -> bool {
    if color == Stone::Empty {
        return false;
    }
    Direction::ALL
        .iter()
        .any(|&dir| wins(color, classify_line(board, pos, dir, color).length))
}

/// The exact five cells of the winning run through `pos`, for highlighting.
///
/// Returns `None` when the move does not win. For a White run longer than
/// five, the returned window is the five cells at the point the run reaches
/// five (up to four backward cells, then forward), not the full run.
pub fn winning_line(board: &Board, pos: Point, color: Stone) -> Option<Vec<Point>> {
    if color == Stone::Empty {
        return None;
    }

    for dir in Direction::ALL {
        if !wins(color, classify_line(board, pos, dir, color).length) {
            continue;
        }
        let (dx, dy) = dir.delta();

        let mut line = vec![pos];
        // Up to 4 contiguous same-color cells behind the placed stone
        for i in 1..5 {
            let x = pos.x as i32 - dx * i;
            let y = pos.y as i32 - dy * i;
            if board.at(x, y) != Some(color) {
                break;
            }
            line.insert(0, Point::new(x as u16, y as u16));
        }
        // Then forward until the window closes at five
        for i in 1..5 {
            let x = pos.x as i32 + dx * i;
            let y = pos.y as i32 + dy * i;
            if board.at(x, y) != Some(color) {
                break;
            }
            line.push(Point::new(x as u16, y as u16));
        }
        line.truncate(5);
        return Some(line);
    }
    None
}
