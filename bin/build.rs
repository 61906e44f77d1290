use crate::config::LevelConfig;
use derive_more::{Display, Error};
use lib::chess::{Board, OutOfBounds, ParseBoardError, Position};
use lib::maze::{Level, Player};

/// Trait for types that build other types.
pub trait Build {
    /// The type to be built.
    type Output;

    /// The reason why [`Build::Output`] could not be built.
    type Error;

    /// Build an instance of [`Build::Output`].
    fn build(self) -> Result<Self::Output, Self::Error>;
}

/// The reason why a [`Level`] could not be built.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum BuildLevelError {
    #[display(fmt = "invalid board")]
    InvalidBoard(ParseBoardError),
    #[display(fmt = "invalid start square")]
    InvalidStart(OutOfBounds),
    #[display(fmt = "invalid end square")]
    InvalidEnd(OutOfBounds),
    #[display(fmt = "no piece stands on the start square `{}`", _0)]
    VacantStart(#[error(not(source))] Position),
}

impl Build for LevelConfig {
    type Output = Level;
    type Error = BuildLevelError;

    fn build(self) -> Result<Self::Output, Self::Error> {
        use BuildLevelError::*;

        let board: Board = self.board.parse().map_err(InvalidBoard)?;
        let piece = board.piece_at(self.start).map_err(InvalidStart)?;
        board.piece_at(self.end).map_err(InvalidEnd)?;

        if piece.is_empty() {
            return Err(VacantStart(self.start));
        }

        Ok(Level::new(board, Player::new(self.start), self.start, self.end))
    }
}
