use serde::{Deserialize, Serialize};

pub const BOARD_SIDE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

/// The human always plays X and opens every round; the engine plays O.
pub const HUMAN_MARK: Mark = Mark::X;
pub const ENGINE_MARK: Mark = Mark::O;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Hard,
    Easy,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Hard => write!(f, "hard"),
            Difficulty::Easy => write!(f, "easy"),
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hard" => Ok(Difficulty::Hard),
            "easy" => Ok(Difficulty::Easy),
            other => Err(format!("Unknown difficulty '{}', expected 'hard' or 'easy'", other)),
        }
    }
}

/// Column/row coordinates of a cell; `x` is the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index >= CELL_COUNT {
            return None;
        }
        Some(Self::new(index % BOARD_SIDE, index / BOARD_SIDE))
    }

    pub fn to_index(&self) -> Option<usize> {
        if self.x >= BOARD_SIDE || self.y >= BOARD_SIDE {
            return None;
        }
        Some(self.y * BOARD_SIDE + self.x)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [usize; 3],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    InvalidPosition(usize),
    CellOccupied(usize),
    InvalidMark,
    NoMoveAvailable,
    RoundOver,
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::InvalidPosition(index) => {
                write!(f, "Position {} is outside the board (0-{})", index, CELL_COUNT - 1)
            }
            MoveError::CellOccupied(index) => write!(f, "Cell {} is already marked", index),
            MoveError::InvalidMark => write!(f, "Only X or O can be placed on the board"),
            MoveError::NoMoveAvailable => write!(f, "No empty cell is left"),
            MoveError::RoundOver => write!(f, "Round is already over"),
        }
    }
}

impl std::error::Error for MoveError {}
