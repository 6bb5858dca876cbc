use crate::games::SessionRng;
use crate::log;
use super::board::get_available_moves;
use super::types::{Difficulty, Mark, CELL_COUNT, ENGINE_MARK};
use super::win_detector::{check_win, LINES};

/// Center, then corners, then edges.
pub const PREFERRED_MOVES: [usize; CELL_COUNT] = [4, 0, 2, 6, 8, 1, 3, 5, 7];

/// Chance that easy mode walks `PREFERRED_MOVES` instead of picking at random.
pub const EASY_PREFERRED_PROBABILITY: f64 = 0.5;

const WIN_SCORE: i32 = 10;

/// Chooses the engine's reply. Holds no board of its own: every call works
/// on the snapshot it is given.
pub struct MoveSelector {
    difficulty: Difficulty,
    rng: SessionRng,
}

impl MoveSelector {
    pub fn new(difficulty: Difficulty, rng: SessionRng) -> Self {
        Self { difficulty, rng }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if self.difficulty != difficulty {
            log!("Difficulty changed from {} to {}", self.difficulty, difficulty);
        }
        self.difficulty = difficulty;
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Cell the engine (O) should take, or `None` when the board is full.
    pub fn select_move(&mut self, cells: &[Mark; CELL_COUNT]) -> Option<usize> {
        calculate_move(self.difficulty, cells, ENGINE_MARK, &mut self.rng)
    }
}

pub fn calculate_move(
    difficulty: Difficulty,
    cells: &[Mark; CELL_COUNT],
    bot_mark: Mark,
    rng: &mut SessionRng,
) -> Option<usize> {
    if let Some(index) = find_quick_move(cells, bot_mark) {
        log!("Quick tactic for {:?}: {}", bot_mark, index);
        return Some(index);
    }

    let chosen = match difficulty {
        Difficulty::Hard => calculate_minimax_move(cells, bot_mark),
        Difficulty::Easy => calculate_easy_move(cells, rng),
    };
    log!("{} move for {:?}: {:?}", difficulty, bot_mark, chosen);
    chosen
}

/// Completes the bot's own two-in-a-line if any line allows it, otherwise
/// blocks the opponent's. Lines are tried in `LINES` order for each pass.
pub fn find_quick_move(cells: &[Mark; CELL_COUNT], bot_mark: Mark) -> Option<usize> {
    let opponent_mark = bot_mark.opponent()?;

    LINES
        .iter()
        .find_map(|line| completing_cell(cells, line, bot_mark))
        .or_else(|| {
            LINES
                .iter()
                .find_map(|line| completing_cell(cells, line, opponent_mark))
        })
}

fn completing_cell(cells: &[Mark; CELL_COUNT], line: &[usize; 3], mark: Mark) -> Option<usize> {
    let mut count = 0;
    let mut empty = None;

    for &index in line {
        match cells[index] {
            cell if cell == mark => count += 1,
            Mark::Empty => empty = Some(index),
            _ => {}
        }
    }

    if count == 2 { empty } else { None }
}

/// Full-depth minimax from the bot's point of view. Candidates are tried in
/// ascending index order and only a strictly better score replaces the
/// current best, so the lowest index wins ties.
pub fn calculate_minimax_move(cells: &[Mark; CELL_COUNT], bot_mark: Mark) -> Option<usize> {
    let opponent_mark = bot_mark.opponent()?;

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in get_available_moves(cells) {
        let mut next = *cells;
        next[index] = bot_mark;

        let score = minimax(&next, 0, false, bot_mark, opponent_mark);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

fn minimax(
    cells: &[Mark; CELL_COUNT],
    depth: i32,
    is_maximizing: bool,
    bot_mark: Mark,
    opponent_mark: Mark,
) -> i32 {
    if let Some(winner) = check_win(cells) {
        return if winner == bot_mark {
            WIN_SCORE - depth
        } else {
            depth - WIN_SCORE
        };
    }

    let moves = get_available_moves(cells);
    if moves.is_empty() {
        return 0;
    }

    let (mark, mut best) = if is_maximizing {
        (bot_mark, i32::MIN)
    } else {
        (opponent_mark, i32::MAX)
    };

    for index in moves {
        let mut next = *cells;
        next[index] = mark;
        let eval = minimax(&next, depth + 1, !is_maximizing, bot_mark, opponent_mark);

        best = if is_maximizing {
            best.max(eval)
        } else {
            best.min(eval)
        };
    }

    best
}

/// Half the time take the first free cell of `PREFERRED_MOVES`; otherwise,
/// or when none of them is free, pick uniformly among the empty cells.
pub fn calculate_easy_move(cells: &[Mark; CELL_COUNT], rng: &mut SessionRng) -> Option<usize> {
    if rng.random::<f64>() < EASY_PREFERRED_PROBABILITY
        && let Some(&index) = PREFERRED_MOVES
            .iter()
            .find(|&&index| cells[index] == Mark::Empty)
    {
        return Some(index);
    }

    calculate_random_move(cells, rng)
}

fn calculate_random_move(cells: &[Mark; CELL_COUNT], rng: &mut SessionRng) -> Option<usize> {
    let available_moves = get_available_moves(cells);
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Mark::{Empty as E, O, X};

    fn selector(difficulty: Difficulty, seed: u64) -> MoveSelector {
        MoveSelector::new(difficulty, SessionRng::new(seed))
    }

    #[test]
    fn test_takes_own_win_in_both_modes() {
        let cells = [O, O, E, E, E, E, E, E, E];
        for difficulty in [Difficulty::Hard, Difficulty::Easy] {
            for seed in 0..20 {
                assert_eq!(selector(difficulty, seed).select_move(&cells), Some(2));
            }
        }
    }

    #[test]
    fn test_blocks_threat_in_both_modes() {
        let cells = [X, X, E, E, E, E, E, E, E];
        for difficulty in [Difficulty::Hard, Difficulty::Easy] {
            for seed in 0..20 {
                assert_eq!(selector(difficulty, seed).select_move(&cells), Some(2));
            }
        }
    }

    #[test]
    fn test_win_preempts_block() {
        // X threatens the top row, O can finish the middle row.
        let cells = [X, X, E, O, O, E, X, E, E];
        assert_eq!(find_quick_move(&cells, O), Some(5));
    }

    #[test]
    fn test_quick_move_follows_line_order() {
        // O can finish row 1 (cell 5), column 0 (cell 6) and the main
        // diagonal (cell 8); rows come first.
        let cells = [O, X, X, O, O, E, E, X, E];
        assert_eq!(find_quick_move(&cells, O), Some(5));
    }

    #[test]
    fn test_quick_move_ignores_blocked_lines() {
        let cells = [X, X, O, E, E, E, E, E, E];
        assert_eq!(find_quick_move(&cells, O), None);
    }

    #[test]
    fn test_hard_answers_corner_with_center() {
        let cells = [X, E, E, E, E, E, E, E, E];
        assert_eq!(selector(Difficulty::Hard, 0).select_move(&cells), Some(4));
    }

    #[test]
    fn test_hard_answers_center_with_first_corner() {
        let cells = [E, E, E, E, X, E, E, E, E];
        assert_eq!(calculate_minimax_move(&cells, O), Some(0));
    }

    #[test]
    fn test_minimax_prefers_faster_win() {
        // Searched directly, without the quick scan in front of it.
        let cells = [O, O, E, X, X, E, X, E, E];
        assert_eq!(calculate_minimax_move(&cells, O), Some(2));
    }

    #[test]
    fn test_minimax_does_not_touch_input() {
        let cells = [X, E, E, E, O, E, E, E, X];
        let copy = cells;
        let _ = calculate_minimax_move(&cells, O);
        assert_eq!(cells, copy);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let cells = [X, O, X, X, O, O, O, X, X];
        for difficulty in [Difficulty::Hard, Difficulty::Easy] {
            assert_eq!(selector(difficulty, 3).select_move(&cells), None);
        }
    }

    #[test]
    fn test_easy_is_reproducible_for_same_seed() {
        let cells = [X, E, E, E, E, E, E, E, E];
        for seed in 0..50 {
            let first = selector(Difficulty::Easy, seed).select_move(&cells);
            let second = selector(Difficulty::Easy, seed).select_move(&cells);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_easy_returns_empty_cell() {
        let cells = [X, O, E, X, E, E, O, E, E];
        let mut easy = selector(Difficulty::Easy, 99);
        for _ in 0..200 {
            let index = easy.select_move(&cells).unwrap();
            assert_eq!(cells[index], E);
        }
    }

    #[test]
    fn test_easy_uses_both_branches() {
        // Center is free, so the preferred branch always yields 4; the random
        // branch yields other cells too.
        let cells = [X, E, E, E, E, E, E, E, E];
        let mut rng = SessionRng::new(7);
        let mut saw_center = false;
        let mut saw_other = false;
        for _ in 0..200 {
            match calculate_easy_move(&cells, &mut rng) {
                Some(4) => saw_center = true,
                Some(_) => saw_other = true,
                None => panic!("board has empty cells"),
            }
        }
        assert!(saw_center && saw_other);
    }

    #[test]
    fn test_easy_falls_back_to_random_when_preferred_exhausted() {
        // Only one cell remains and the quick scan finds nothing.
        let cells = [X, O, X, X, O, O, O, X, E];
        let mut rng = SessionRng::new(1);
        for _ in 0..20 {
            assert_eq!(calculate_easy_move(&cells, &mut rng), Some(8));
        }
    }

    #[test]
    fn test_set_difficulty_switches_strategy() {
        let mut selector = selector(Difficulty::Easy, 5);
        selector.set_difficulty(Difficulty::Hard);
        assert_eq!(selector.difficulty(), Difficulty::Hard);
        assert_eq!(selector.select_move(&[X, E, E, E, E, E, E, E, E]), Some(4));
    }
}
