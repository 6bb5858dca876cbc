use crate::log;
use super::board::Board;
use super::bot_controller::MoveSelector;
use super::types::{Difficulty, GameStatus, Mark, MoveError, CELL_COUNT, ENGINE_MARK, HUMAN_MARK};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scoreboard {
    pub human_wins: u32,
    pub engine_wins: u32,
    pub draws: u32,
}

impl Scoreboard {
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::InProgress => {}
            GameStatus::Draw => self.draws += 1,
            GameStatus::XWon | GameStatus::OWon => {
                if status.winner() == Some(HUMAN_MARK) {
                    self.human_wins += 1;
                } else {
                    self.engine_wins += 1;
                }
            }
        }
    }

    pub fn rounds_played(&self) -> u32 {
        self.human_wins + self.engine_wins + self.draws
    }
}

/// What happened during one call to `play_human_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub human_move: usize,
    pub engine_move: Option<usize>,
    pub status: GameStatus,
}

/// One board, one engine and the running score across rounds. The human
/// opens every round.
pub struct TicTacToeGame {
    board: Board,
    selector: MoveSelector,
    scoreboard: Scoreboard,
}

impl TicTacToeGame {
    pub fn new(selector: MoveSelector) -> Self {
        Self {
            board: Board::new(),
            selector,
            scoreboard: Scoreboard::default(),
        }
    }

    pub fn play_human_move(&mut self, index: usize) -> Result<TurnReport, MoveError> {
        if self.board.is_terminal() {
            return Err(MoveError::RoundOver);
        }

        self.board.apply_move(index, HUMAN_MARK)?;

        let mut report = TurnReport {
            human_move: index,
            engine_move: None,
            status: self.board.status(),
        };

        if !report.status.is_over() {
            let engine_move = self.play_engine_move()?;
            report.engine_move = Some(engine_move);
            report.status = self.board.status();
        }

        if report.status.is_over() {
            self.finish_round(report.status);
        }

        Ok(report)
    }

    fn play_engine_move(&mut self) -> Result<usize, MoveError> {
        let snapshot = self.board.snapshot();
        let index = self
            .selector
            .select_move(&snapshot)
            .ok_or(MoveError::NoMoveAvailable)?;
        self.board.apply_move(index, ENGINE_MARK)?;
        Ok(index)
    }

    fn finish_round(&mut self, status: GameStatus) {
        self.scoreboard.record(status);
        log!(
            "Round over: {:?} (human {}, engine {}, draws {})",
            status,
            self.scoreboard.human_wins,
            self.scoreboard.engine_wins,
            self.scoreboard.draws
        );
    }

    /// Clears the board; the score is kept.
    pub fn new_round(&mut self) {
        self.board.reset();
    }

    /// Clears the board and the score.
    pub fn reset_all(&mut self) {
        self.board.reset();
        self.scoreboard = Scoreboard::default();
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.selector.set_difficulty(difficulty);
    }

    pub fn difficulty(&self) -> Difficulty {
        self.selector.difficulty()
    }

    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snapshot(&self) -> [Mark; CELL_COUNT] {
        self.board.snapshot()
    }

    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }
}
