use derive_more::{Constructor, Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use test_strategy::Arbitrary;

/// A square on the board, addressed by row and column.
///
/// Positions are plain coordinates and may lie outside of any particular
/// [`Board`][`crate::chess::Board`], which is what makes bounds checking meaningful.
#[derive(
    Debug,
    Display,
    Default,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Hash,
    Arbitrary,
    Constructor,
    Deserialize,
    Serialize,
)]
#[display(fmt = "{},{}", row, column)]
pub struct Position {
    #[strategy(-2i32..12)]
    pub row: i32,
    #[strategy(-2i32..12)]
    pub column: i32,
}

impl Position {
    /// The signed distance `(Δrow, Δcolumn)` from this position to `to`.
    #[inline(always)]
    pub fn delta(&self, to: Position) -> (i32, i32) {
        (to.row - self.row, to.column - self.column)
    }

    /// This position shifted by `(Δrow, Δcolumn)`.
    #[inline(always)]
    pub fn offset(&self, row: i32, column: i32) -> Self {
        Position::new(self.row + row, self.column + column)
    }
}

/// The reason why parsing [`Position`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse position, expected `row,column`")]
pub struct ParsePositionError;

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((row, column)) = s.trim().split_once(',') else {
            return Err(ParsePositionError);
        };

        match (row.trim().parse(), column.trim().parse()) {
            (Ok(row), Ok(column)) => Ok(Position::new(row, column)),
            _ => Err(ParsePositionError),
        }
    }
}
