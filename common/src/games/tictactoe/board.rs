use crate::log;
use super::types::{GameStatus, Mark, MoveError, WinningLine, CELL_COUNT};
use super::win_detector::{check_win, check_win_with_line};

/// The 3x3 grid, row-major: index = y * 3 + x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn reset(&mut self) {
        self.cells = [Mark::Empty; CELL_COUNT];
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    /// Either the single cell changes or nothing does.
    pub fn apply_move(&mut self, index: usize, mark: Mark) -> Result<(), MoveError> {
        if index >= CELL_COUNT {
            return Err(MoveError::InvalidPosition(index));
        }
        if mark == Mark::Empty {
            return Err(MoveError::InvalidMark);
        }
        if self.cells[index] != Mark::Empty {
            return Err(MoveError::CellOccupied(index));
        }

        self.cells[index] = mark;
        log!("{:?} placed at {}", mark, index);
        Ok(())
    }

    pub fn status(&self) -> GameStatus {
        match check_win(&self.cells) {
            Some(Mark::X) => GameStatus::XWon,
            Some(Mark::O) => GameStatus::OWon,
            Some(Mark::Empty) => unreachable!(),
            None if self.is_full() => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status().is_over()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.cells)
    }

    /// Copy of the cells; writing to it never touches the board.
    pub fn snapshot(&self) -> [Mark; CELL_COUNT] {
        self.cells
    }

    pub fn available_moves(&self) -> Vec<usize> {
        get_available_moves(&self.cells)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }
}

pub fn get_available_moves(cells: &[Mark; CELL_COUNT]) -> Vec<usize> {
    cells
        .iter()
        .enumerate()
        .filter(|&(_, &cell)| cell == Mark::Empty)
        .map(|(index, _)| index)
        .collect()
}
