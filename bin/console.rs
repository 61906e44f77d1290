use lib::maze::Game;
use std::fmt::Display;
use std::io::{self, BufRead, BufReader, Lines, Read, Write};
use std::str::FromStr;
use tracing::instrument;

/// The terminal the player reads the maze from and types commands into.
///
/// Every message is written on its own line and flushed right away.
#[derive(Debug)]
pub struct Console<W: Write, R: Read> {
    screen: W,
    keyboard: Lines<BufReader<R>>,
}

impl<W: Write, R: Read> Console<W, R> {
    pub fn new(screen: W, keyboard: R) -> Self {
        Console {
            screen,
            keyboard: BufReader::new(keyboard).lines(),
        }
    }

    /// Parses the next line typed by the player, or `None` once input is exhausted.
    #[instrument(level = "trace", skip(self), err)]
    pub fn recv<T: FromStr>(&mut self) -> io::Result<Option<Result<T, T::Err>>> {
        match self.keyboard.next() {
            None => Ok(None),
            Some(line) => Ok(Some(line?.parse())),
        }
    }

    /// Shows a message to the player.
    #[instrument(level = "trace", skip(self, msg), err, fields(%msg))]
    pub fn send<T: Display>(&mut self, msg: T) -> io::Result<()> {
        writeln!(&mut self.screen, "{}", msg)?;
        self.screen.flush()
    }

    /// Shows the board followed by how many moves were made so far.
    pub fn show(&mut self, game: &Game) -> io::Result<()> {
        let board = game.level().board();
        self.send(format_args!("{:#}\nmoves: {}", board, game.move_count()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib::chess::{ParsePositionError, Position};
    use lib::maze::{Level, Player};
    use std::{io::empty, str};
    use test_strategy::proptest;

    #[proptest]
    fn recv_parses_the_next_line(a: Position, b: Position) {
        let input = format!("{a}\n {b} \n");
        let mut console = Console::new(empty(), input.as_bytes());
        assert_eq!(console.recv::<Position>()?, Some(Ok(a)));
        assert_eq!(console.recv::<Position>()?, Some(Ok(b)));
        assert_eq!(console.recv::<Position>()?, None);
    }

    #[proptest]
    fn recv_reports_lines_that_fail_to_parse(#[strategy("[^\r\n,]*")] s: String) {
        let input = format!("{s}\n");
        let mut console = Console::new(empty(), input.as_bytes());
        assert_eq!(console.recv::<Position>()?, Some(Err(ParsePositionError)));
    }

    #[test]
    fn recv_returns_none_at_end_of_input() {
        let mut console = Console::new(empty(), empty());
        assert_eq!(console.recv::<Position>().unwrap(), None);
    }

    #[proptest]
    fn send_appends_line_break(s: String) {
        let mut buf = Vec::new();
        Console::new(&mut buf, empty()).send(&s)?;
        assert_eq!(str::from_utf8(&buf)?, format!("{s}\n"));
    }

    #[test]
    fn show_prints_board_and_move_count() {
        let start = Position::new(0, 0);
        let level = Level::new("r./..".parse().unwrap(), Player::new(start), start, start);

        let mut buf = Vec::new();
        Console::new(&mut buf, empty()).show(&Game::new(level)).unwrap();
        assert_eq!(str::from_utf8(&buf).unwrap(), "r.\n..\nmoves: 0\n");
    }
}
