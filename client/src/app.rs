use std::io::{self, BufRead, Write};
use common::games::tictactoe::{Difficulty, TicTacToeGame, TurnReport};
use common::log;

use crate::command::{parse_command, Command, HELP_TEXT};
use crate::config::ClientConfigManager;
use crate::render::{render_board, render_scoreboard, result_message, Symbols};

/// Terminal front end: reads commands line by line and prints the board
/// after each one. Holds no game rules of its own.
pub struct App<R: BufRead, W: Write> {
    game: TicTacToeGame,
    symbols: Symbols,
    input: R,
    output: W,
    config_manager: Option<ClientConfigManager>,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(game: TicTacToeGame, symbols: Symbols, input: R, output: W) -> Self {
        Self {
            game,
            symbols,
            input,
            output,
            config_manager: None,
        }
    }

    /// Difficulty changes get written back through this manager.
    pub fn with_config_manager(mut self, config_manager: ClientConfigManager) -> Self {
        self.config_manager = Some(config_manager);
        self
    }

    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "You play {}, the engine plays {}. Type 'help' for commands.", self.symbols.human, self.symbols.engine)?;
        self.print_state()?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }

            match parse_command(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => self.handle(command)?,
                Err(message) => writeln!(self.output, "{}", message)?,
            }
        }

        writeln!(self.output, "{}", render_scoreboard(self.game.scoreboard(), self.game.difficulty()))?;
        writeln!(self.output, "Bye!")?;
        Ok(())
    }

    fn handle(&mut self, command: Command) -> io::Result<()> {
        match command {
            Command::Place(index) => match self.game.play_human_move(index) {
                Ok(report) => self.report_turn(report)?,
                Err(e) => writeln!(self.output, "{}", e)?,
            },
            Command::NewRound => {
                self.game.new_round();
                self.print_state()?;
            }
            Command::Reset => {
                self.game.reset_all();
                writeln!(self.output, "Score cleared.")?;
                self.print_state()?;
            }
            Command::SetDifficulty(difficulty) => {
                self.game.set_difficulty(difficulty);
                self.persist_difficulty(difficulty);
                writeln!(self.output, "Difficulty set to {}.", difficulty)?;
            }
            Command::Help => writeln!(self.output, "{}", HELP_TEXT)?,
            Command::Quit => {}
        }
        Ok(())
    }

    fn report_turn(&mut self, report: TurnReport) -> io::Result<()> {
        if let Some(engine_move) = report.engine_move {
            writeln!(self.output, "Engine plays {}.", engine_move)?;
        }

        if !report.status.is_over() {
            return self.print_state();
        }

        let board = self.game.board();
        writeln!(
            self.output,
            "{}",
            render_board(&board.snapshot(), self.symbols, board.winning_line())
        )?;
        writeln!(self.output, "{}", result_message(report.status))?;

        self.game.new_round();
        writeln!(self.output, "New round.")?;
        self.print_state()
    }

    fn print_state(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", render_scoreboard(self.game.scoreboard(), self.game.difficulty()))?;
        writeln!(self.output, "{}", render_board(&self.game.snapshot(), self.symbols, None))
    }

    fn persist_difficulty(&self, difficulty: Difficulty) {
        let Some(manager) = self.config_manager.as_ref() else {
            return;
        };

        let result = manager.get_config().and_then(|mut config| {
            config.difficulty = difficulty;
            manager.set_config(&config)
        });
        if let Err(e) = result {
            log!("Failed to save difficulty: {}", e);
        }
    }
}
