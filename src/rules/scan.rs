//! Line scanning primitives
//!
//! Every directional computation in the rule set (win detection, overline,
//! four and open-three detection) is built on the two functions here. The
//! callers differ only in which `length`/`open_ends` values they test for.

use crate::board::{Board, Point, Stone};

/// The four line axes through a point.
///
/// A line along an axis considers both the forward and the backward ray;
/// the opposite vectors are not separate directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// (1, 0)
    Horizontal,
    /// (0, 1)
    Vertical,
    /// (1, 1)
    Diagonal,
    /// (1, -1)
    AntiDiagonal,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    /// Forward step vector
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (1, 0),
            Direction::Vertical => (0, 1),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }
}

/// Length and open-end status of one line through one point for one color.
///
/// Ephemeral result of [`classify_line`]; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRun {
    /// Stones in the run, counting the (possibly virtual) stone at the
    /// classified point
    pub length: u32,
    /// Sides (0-2) whose cell immediately beyond the run is in-bounds and
    /// empty
    pub open_ends: u8,
}

/// Count consecutive cells equal to `color` starting one step from `start`
/// along `(dx, dy)`.
///
/// Does not include `start` itself. Stops at the board edge or the first
/// non-matching cell; an empty cell and an opponent stone both end the run
/// (open-end classification is the caller's concern). Read-only.
pub fn count_run(board: &Board, start: Point, dx: i32, dy: i32, color: Stone) -> u32 {
    let mut count = 0;
    let mut x = start.x as i32 + dx;
    let mut y = start.y as i32 + dy;
    while board.at(x, y) == Some(color) {
        count += 1;
        x += dx;
        y += dy;
    }
    count
}

/// Classify the line through `pos` along `dir` as if `pos` held a stone of
/// `color`.
///
/// `pos` need not actually hold `color`; the cell is never read. This is the
/// virtual-stone evaluation the forbidden-move rules rely on: a hypothetical
/// placement is classified without mutating the board.
pub fn classify_line(board: &Board, pos: Point, dir: Direction, color: Stone) -> LineRun {
    let (dx, dy) = dir.delta();
    let forward = count_run(board, pos, dx, dy, color);
    let backward = count_run(board, pos, -dx, -dy, color);

    let mut open_ends = 0;
    // Cell just beyond the counted run on each side
    let fx = pos.x as i32 + dx * (forward as i32 + 1);
    let fy = pos.y as i32 + dy * (forward as i32 + 1);
    if board.at(fx, fy) == Some(Stone::Empty) {
        open_ends += 1;
    }
    let bx = pos.x as i32 - dx * (backward as i32 + 1);
    let by = pos.y as i32 - dy * (backward as i32 + 1);
    if board.at(bx, by) == Some(Stone::Empty) {
        open_ends += 1;
    }

    LineRun {
        length: 1 + forward + backward,
        open_ends,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_15() -> Board {
        Board::new(15, 15).unwrap()
    }

    #[test]
    fn test_count_run_excludes_start() {
        let mut board = board_15();
        board.set(Point::new(7, 7), Stone::Black).unwrap();
        board.set(Point::new(8, 7), Stone::Black).unwrap();
        board.set(Point::new(9, 7), Stone::Black).unwrap();

        // Start cell itself is not counted
        assert_eq!(count_run(&board, Point::new(7, 7), 1, 0, Stone::Black), 2);
        assert_eq!(count_run(&board, Point::new(7, 7), -1, 0, Stone::Black), 0);
    }

    #[test]
    fn test_count_run_stops_at_opponent_and_empty() {
        let mut board = board_15();
        board.set(Point::new(8, 7), Stone::Black).unwrap();
        board.set(Point::new(9, 7), Stone::White).unwrap();

        // Opponent ends the run the same way an empty cell does
        assert_eq!(count_run(&board, Point::new(7, 7), 1, 0, Stone::Black), 1);
        assert_eq!(count_run(&board, Point::new(10, 7), 1, 0, Stone::Black), 0);
    }

    #[test]
    fn test_count_run_stops_at_edge() {
        let mut board = board_15();
        for x in 12..15 {
            board.set(Point::new(x, 0), Stone::White).unwrap();
        }
        assert_eq!(count_run(&board, Point::new(11, 0), 1, 0, Stone::White), 3);
    }

    #[test]
    fn test_classify_line_virtual_stone_on_empty_cell() {
        let mut board = board_15();
        board.set(Point::new(6, 7), Stone::Black).unwrap();
        board.set(Point::new(8, 7), Stone::Black).unwrap();

        // (7, 7) is empty; classified as if Black: _ B [B] B _
        let run = classify_line(&board, Point::new(7, 7), Direction::Horizontal, Stone::Black);
        assert_eq!(run.length, 3);
        assert_eq!(run.open_ends, 2);
        // The board itself was not touched
        assert!(board.is_empty(Point::new(7, 7)));
    }

    #[test]
    fn test_classify_line_open_end_is_beyond_the_run() {
        let mut board = board_15();
        board.set(Point::new(8, 7), Stone::Black).unwrap();
        board.set(Point::new(9, 7), Stone::White).unwrap();

        // [B] B W forward, empty backward: only one open end
        let run = classify_line(&board, Point::new(7, 7), Direction::Horizontal, Stone::Black);
        assert_eq!(run.length, 2);
        assert_eq!(run.open_ends, 1);
    }

    #[test]
    fn test_classify_line_edge_is_not_open() {
        let mut board = board_15();
        board.set(Point::new(0, 0), Stone::Black).unwrap();
        board.set(Point::new(1, 0), Stone::Black).unwrap();

        // Run touches the left edge; only the right side is open
        let run = classify_line(&board, Point::new(2, 0), Direction::Horizontal, Stone::Black);
        assert_eq!(run.length, 3);
        assert_eq!(run.open_ends, 1);
    }

    #[test]
    fn test_classify_line_all_directions() {
        let mut board = board_15();
        // Plus-and-cross of black stones around (7, 7)
        for (x, y) in [(6, 7), (8, 7), (7, 6), (7, 8), (6, 6), (8, 8), (6, 8), (8, 6)] {
            board.set(Point::new(x, y), Stone::Black).unwrap();
        }
        for dir in Direction::ALL {
            let run = classify_line(&board, Point::new(7, 7), dir, Stone::Black);
            assert_eq!(run.length, 3, "direction {:?}", dir);
            assert_eq!(run.open_ends, 2, "direction {:?}", dir);
        }
    }

    #[test]
    fn test_classify_line_length_bounds_random_boards() {
        use rand::Rng;

        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let width = rng.gen_range(1..=19);
            let height = rng.gen_range(1..=19);
            let mut board = Board::new(width, height).unwrap();
            for p in board.points().collect::<Vec<_>>() {
                let stone = match rng.gen_range(0..3) {
                    0 => Stone::Empty,
                    1 => Stone::Black,
                    _ => Stone::White,
                };
                board.set(p, stone).unwrap();
            }

            let max_len = width.max(height) as u32;
            for p in board.points() {
                for dir in Direction::ALL {
                    for color in [Stone::Black, Stone::White] {
                        let run = classify_line(&board, p, dir, color);
                        assert!(run.length >= 1);
                        assert!(
                            run.length <= max_len,
                            "length {} exceeds {} on {}x{}",
                            run.length,
                            max_len,
                            width,
                            height
                        );
                        assert!(run.open_ends <= 2);
                    }
                }
            }
        }
    }
}
