use common::games::tictactoe::{
    BOARD_SIDE, CELL_COUNT, Difficulty, GameStatus, Mark, Scoreboard, WinningLine,
};

use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbols {
    pub human: char,
    pub engine: char,
}

impl From<&Config> for Symbols {
    fn from(config: &Config) -> Self {
        Self {
            human: config.human_symbol,
            engine: config.engine_symbol,
        }
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

/// Empty cells show their index so the player knows what to type. Cells of
/// a winning line are wrapped in brackets.
pub fn render_board(
    cells: &[Mark; CELL_COUNT],
    symbols: Symbols,
    winning_line: Option<WinningLine>,
) -> String {
    let highlighted = |index: usize| winning_line.is_some_and(|line| line.cells.contains(&index));

    let rows: Vec<String> = cells
        .chunks(BOARD_SIDE)
        .enumerate()
        .map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(|(x, &mark)| {
                    let index = y * BOARD_SIDE + x;
                    let symbol = match mark {
                        Mark::X => symbols.human.to_string(),
                        Mark::O => symbols.engine.to_string(),
                        Mark::Empty => index.to_string(),
                    };
                    if highlighted(index) {
                        format!("[{}]", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();

    rows.join("\n---+---+---\n")
}

pub fn render_scoreboard(scoreboard: Scoreboard, difficulty: Difficulty) -> String {
    format!(
        "You {} | Engine {} | Draws {} | Difficulty: {}",
        scoreboard.human_wins, scoreboard.engine_wins, scoreboard.draws, difficulty
    )
}

pub fn result_message(status: GameStatus) -> &'static str {
    match status {
        GameStatus::XWon => "You won!",
        GameStatus::OWon => "The engine won!",
        GameStatus::Draw => "It's a draw!",
        GameStatus::InProgress => "Round in progress",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::tictactoe::Mark::{Empty as E, O, X};

    #[test]
    fn test_empty_board_shows_indices() {
        let rendered = render_board(&[E; CELL_COUNT], Symbols::default(), None);
        assert_eq!(
            rendered,
            " 0 | 1 | 2 \n---+---+---\n 3 | 4 | 5 \n---+---+---\n 6 | 7 | 8 "
        );
    }

    #[test]
    fn test_marks_use_configured_symbols() {
        let symbols = Symbols {
            human: '#',
            engine: '@',
        };
        let rendered = render_board(&[X, E, E, E, O, E, E, E, E], symbols, None);
        assert!(rendered.starts_with(" # | 1 | 2 "));
        assert!(rendered.contains(" 3 | @ | 5 "));
    }

    #[test]
    fn test_winning_line_is_bracketed() {
        let line = WinningLine {
            mark: O,
            cells: [2, 4, 6],
        };
        let rendered = render_board(&[X, X, O, E, O, E, O, X, E], Symbols::default(), Some(line));
        assert!(rendered.contains(" X | X |[O]"));
        assert!(rendered.contains(" 3 |[O]| 5 "));
        assert!(rendered.contains("[O]| X | 8 "));
    }

    #[test]
    fn test_scoreboard_line() {
        let scoreboard = Scoreboard {
            human_wins: 1,
            engine_wins: 2,
            draws: 3,
        };
        assert_eq!(
            render_scoreboard(scoreboard, Difficulty::Easy),
            "You 1 | Engine 2 | Draws 3 | Difficulty: easy"
        );
    }
}
