use crate::{build::Build, config::LevelConfig, console::Console};
use anyhow::{Context, Error as Anyhow};
use clap::Parser;
use derive_more::{Display, Error, From};
use lib::chess::{ParsePositionError, Position};
use lib::maze::Game;
use std::io::{self, stdin, stdout, Read, Write};
use std::{fs, path::PathBuf, str::FromStr};
use tracing::{info, instrument, warn};

/// Plays a level interactively.
///
/// Reads one command per line: `row,column` to move the piece, `hint` to list where
/// it may go, `undo`, `restart` or `quit`.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    /// Path to the level configuration.
    level: PathBuf,
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let config: LevelConfig = fs::read_to_string(&self.level)
            .with_context(|| format!("failed to read `{}`", self.level.display()))?
            .parse()?;

        let game = Game::new(config.build()?);
        let console = Console::new(stdout(), stdin());
        Session::new(game, console).run()?;

        Ok(())
    }
}

/// A command typed by the player.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Command {
    Move(Position),
    Hint,
    Undo,
    Restart,
    Quit,
}

/// The reason why parsing [`Command`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
#[display(fmt = "unknown command, expected `row,column`, `hint`, `undo`, `restart` or `quit`")]
struct ParseCommandError(ParsePositionError);

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "hint" => Ok(Command::Hint),
            "undo" => Ok(Command::Undo),
            "restart" => Ok(Command::Restart),
            "quit" => Ok(Command::Quit),
            s => Ok(Command::Move(s.parse()?)),
        }
    }
}

struct Session<W: Write, R: Read> {
    game: Game,
    console: Console<W, R>,
}

impl<W: Write, R: Read> Session<W, R> {
    fn new(game: Game, console: Console<W, R>) -> Self {
        Session { game, console }
    }

    fn hint(&self) -> String {
        let from = self.game.level().player().position();
        let destinations = self.game.level().board().destinations(from);
        let hints: Vec<_> = destinations
            .filter(|&to| to != from)
            .map(|to| to.to_string())
            .collect();

        match &hints[..] {
            [] => "the piece is stuck".into(),
            hints => hints.join(" "),
        }
    }

    /// Runs until the level is completed, returning the number of moves it took, if so.
    fn run(&mut self) -> io::Result<Option<usize>> {
        self.console.show(&self.game)?;

        while !self.game.is_over() {
            let Some(command) = self.console.recv::<Command>()? else {
                return Ok(None);
            };

            match command {
                Err(e) => self.console.send(e)?,
                Ok(Command::Quit) => return Ok(None),
                Ok(Command::Hint) => {
                    let hint = self.hint();
                    self.console.send(hint)?;
                }

                Ok(Command::Undo) => match self.game.undo() {
                    None => self.console.send("nothing to undo")?,
                    Some(_) => self.console.show(&self.game)?,
                },

                Ok(Command::Restart) => {
                    self.game.restart();
                    self.console.show(&self.game)?;
                }

                Ok(Command::Move(to)) => match self.game.make_move(to) {
                    Ok(()) => self.console.show(&self.game)?,
                    Err(e) => {
                        warn!("{}", e);
                        self.console.send(e)?;
                    }
                },
            }
        }

        let moves = self.game.move_count();
        info!(moves, "level completed");
        self.console.send(format_args!("level completed in {} moves", moves))?;

        Ok(Some(moves))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib::chess::Board;
    use lib::maze::{Level, Player};
    use std::str;
    use test_strategy::proptest;

    fn session<'a>(
        level: &str,
        input: &'a str,
        output: &'a mut Vec<u8>,
    ) -> Session<&'a mut Vec<u8>, &'a [u8]> {
        let config: LevelConfig = level.parse().unwrap();
        Session::new(Game::new(config.build().unwrap()), Console::new(output, input.as_bytes()))
    }

    #[proptest]
    fn parsing_position_yields_move_command(p: Position) {
        assert_eq!(p.to_string().parse(), Ok(Command::Move(p)));
    }

    #[test]
    fn parsing_keywords_yields_commands() {
        assert_eq!("hint".parse(), Ok(Command::Hint));
        assert_eq!(" undo ".parse(), Ok(Command::Undo));
        assert_eq!("restart".parse(), Ok(Command::Restart));
        assert_eq!("quit".parse(), Ok(Command::Quit));
    }

    #[proptest]
    fn parsing_command_fails_for_unknown_words(
        #[filter(!["hint", "undo", "restart", "quit"].contains(&#s.trim()))]
        #[strategy("[a-z]*")]
        s: String,
    ) {
        assert_eq!(s.parse::<Command>(), Err(ParseCommandError(ParsePositionError)));
    }

    #[test]
    fn session_ends_when_level_is_completed() {
        let mut output = Vec::new();
        let input = "3,0\n3,4\n4,4\n";

        let mut s = session(include_str!("../../levels/corridor.ron"), input, &mut output);
        assert_eq!(s.run().unwrap(), Some(3));

        drop(s);
        let output = str::from_utf8(&output).unwrap();
        assert!(output.ends_with("level completed in 3 moves\n"));
    }

    #[test]
    fn session_reports_illegal_moves_and_keeps_going() {
        let mut output = Vec::new();
        let input = "4,4\n1,2\n3,3\n";

        let mut s = session(include_str!("../../levels/knight.ron"), input, &mut output);
        assert_eq!(s.run().unwrap(), Some(2));

        drop(s);
        let output = str::from_utf8(&output).unwrap();
        assert!(output.contains("moving from `0,0` to `4,4` is illegal"));
    }

    #[test]
    fn session_can_undo_and_restart() {
        let mut output = Vec::new();
        let input = "undo\n1,2\nundo\n1,2\nrestart\nquit\n";

        let mut s = session(include_str!("../../levels/knight.ron"), input, &mut output);
        assert_eq!(s.run().unwrap(), None);
        assert_eq!(s.game.move_count(), 0);
        assert_eq!(s.game.level().player().position(), Position::new(0, 0));

        drop(s);
        let output = str::from_utf8(&output).unwrap();
        assert!(output.contains("nothing to undo"));
    }

    #[test]
    fn session_gives_hints() {
        let mut output = Vec::new();
        let mut s = session(include_str!("../../levels/knight.ron"), "hint\n", &mut output);
        assert_eq!(s.run().unwrap(), None);

        drop(s);
        let output = str::from_utf8(&output).unwrap();
        assert!(output.contains("1,2 2,1"));
    }

    #[test]
    fn session_reports_stuck_pieces() {
        let board: Board = "p./p.".parse().unwrap();
        let start = Position::new(0, 0);
        let level = Level::new(board, Player::new(start), start, Position::new(1, 1));

        let mut output = Vec::new();
        let console = Console::new(&mut output, "hint\n".as_bytes());
        let mut s = Session::new(Game::new(level), console);
        assert_eq!(s.run().unwrap(), None);

        drop(s);
        assert!(str::from_utf8(&output).unwrap().contains("the piece is stuck"));
    }

    #[test]
    fn session_stops_at_end_of_input() {
        let mut output = Vec::new();
        let mut s = session(include_str!("../../levels/spiral.ron"), "", &mut output);
        assert_eq!(s.run().unwrap(), None);
    }
}
