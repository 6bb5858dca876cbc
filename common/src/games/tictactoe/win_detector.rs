use super::types::{Mark, WinningLine, CELL_COUNT};

/// Rows, then columns, then the two diagonals. Every scan over lines walks
/// them in this order, which makes all tie-breaks deterministic.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(cells: &[Mark; CELL_COUNT]) -> Option<Mark> {
    check_win_with_line(cells).map(|line| line.mark)
}

/// First completed line in `LINES` order. Several completed lines cannot
/// arise from alternating play; if they do, the earliest one is reported.
pub fn check_win_with_line(cells: &[Mark; CELL_COUNT]) -> Option<WinningLine> {
    LINES.iter().find_map(|&[a, b, c]| {
        let mark = cells[a];
        if mark != Mark::Empty && mark == cells[b] && mark == cells[c] {
            Some(WinningLine {
                mark,
                cells: [a, b, c],
            })
        } else {
            None
        }
    })
}
