use common::games::tictactoe::{Difficulty, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(usize),
    NewRound,
    Reset,
    SetDifficulty(Difficulty),
    Help,
    Quit,
}

/// Accepts a cell index (`4`), column/row coordinates (`1,2` or `1 2`), or
/// one of the word commands.
pub fn parse_command(input: &str) -> Result<Command, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Empty input, type 'help' for commands".to_string());
    }

    match trimmed.to_ascii_lowercase().as_str() {
        "new" | "n" => return Ok(Command::NewRound),
        "reset" | "r" => return Ok(Command::Reset),
        "easy" => return Ok(Command::SetDifficulty(Difficulty::Easy)),
        "hard" => return Ok(Command::SetDifficulty(Difficulty::Hard)),
        "help" | "h" | "?" => return Ok(Command::Help),
        "quit" | "q" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    if let Ok(index) = trimmed.parse::<usize>() {
        return Ok(Command::Place(index));
    }

    let parts: Vec<&str> = trimmed
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();

    if let [x, y] = parts.as_slice() {
        let x = x
            .parse::<usize>()
            .map_err(|_| format!("Invalid column '{}'", x))?;
        let y = y
            .parse::<usize>()
            .map_err(|_| format!("Invalid row '{}'", y))?;
        return Position::new(x, y)
            .to_index()
            .map(Command::Place)
            .ok_or_else(|| format!("Coordinates ({}, {}) are outside the board", x, y));
    }

    Err(format!("Unknown command '{}', type 'help' for commands", trimmed))
}

pub const HELP_TEXT: &str = "\
Commands:
  0-8        place your mark on that cell
  x,y        place your mark by column and row (0-2)
  new        start a new round, keeping the score
  reset      start over and clear the score
  easy/hard  switch the engine's difficulty
  help       show this text
  quit       leave the game";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cell_index() {
        assert_eq!(parse_command("4"), Ok(Command::Place(4)));
        assert_eq!(parse_command("  0\n"), Ok(Command::Place(0)));
    }

    #[test]
    fn test_out_of_range_index_is_left_to_the_board() {
        assert_eq!(parse_command("9"), Ok(Command::Place(9)));
    }

    #[test]
    fn test_parse_coordinates() {
        assert_eq!(parse_command("2,1"), Ok(Command::Place(5)));
        assert_eq!(parse_command("1 2"), Ok(Command::Place(7)));
        assert_eq!(parse_command("0 , 0"), Ok(Command::Place(0)));
        assert!(parse_command("3,0").is_err());
        assert!(parse_command("a,1").is_err());
    }

    #[test]
    fn test_parse_words() {
        assert_eq!(parse_command("NEW"), Ok(Command::NewRound));
        assert_eq!(parse_command("reset"), Ok(Command::Reset));
        assert_eq!(parse_command("easy"), Ok(Command::SetDifficulty(Difficulty::Easy)));
        assert_eq!(parse_command("Hard"), Ok(Command::SetDifficulty(Difficulty::Hard)));
        assert_eq!(parse_command("?"), Ok(Command::Help));
        assert_eq!(parse_command("q"), Ok(Command::Quit));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse_command("").is_err());
        assert!(parse_command("-1").is_err());
        assert!(parse_command("play 4 now").is_err());
    }
}
