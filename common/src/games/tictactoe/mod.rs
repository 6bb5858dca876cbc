mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::{Board, get_available_moves};
pub use bot_controller::{
    EASY_PREFERRED_PROBABILITY, MoveSelector, PREFERRED_MOVES, calculate_easy_move,
    calculate_minimax_move, calculate_move, find_quick_move,
};
pub use game_state::{Scoreboard, TicTacToeGame, TurnReport};
pub use types::{
    BOARD_SIDE, CELL_COUNT, Difficulty, ENGINE_MARK, GameStatus, HUMAN_MARK, Mark, MoveError,
    Position, WinningLine,
};
pub use win_detector::{LINES, check_win, check_win_with_line};
