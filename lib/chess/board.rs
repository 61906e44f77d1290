use crate::chess::{ParseRoleError, Piece, Position, Role};
use derive_more::{Display, Error};
use proptest::{collection::vec, prelude::*, strategy::BoxedStrategy};
use std::fmt::{self, Write};
use std::{mem, str::FromStr};

/// Represents a [`Position`] that lies outside of the [`Board`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "position `{}` is out of bounds", _0)]
pub struct OutOfBounds(#[error(not(source))] pub Position);

/// Represents a move the rules don't allow on the current [`Board`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "moving from `{}` to `{}` is illegal", from, to)]
pub struct IllegalMove {
    pub from: Position,
    pub to: Position,
}

/// A rectangular grid of [`Piece`]s.
///
/// Cells are stored row-major in a flat buffer and every access goes through a single
/// bounds check. Vacant squares hold [`Piece::EMPTY`].
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<Piece>,
}

/// Generates small boards where most squares are vacant.
impl Arbitrary for Board {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (1usize..=10, 1usize..=10)
            .prop_flat_map(|(rows, columns)| {
                let cell = prop_oneof![3 => Just(Piece::EMPTY), 1 => any::<Piece>()];
                vec(cell, rows * columns).prop_map(move |cells| Board {
                    rows,
                    columns,
                    cells,
                })
            })
            .boxed()
    }
}

impl Board {
    /// The only row from which a pawn may advance two squares.
    pub const PAWN_START_ROW: i32 = 1;

    /// Constructs an empty [`Board`] with the given dimensions.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(rows: usize, columns: usize) -> Self {
        assert!(rows > 0 && columns > 0, "board must have at least one square");

        Board {
            rows,
            columns,
            cells: vec![Piece::EMPTY; rows * columns],
        }
    }

    /// The number of rows.
    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of columns.
    #[inline(always)]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline(always)]
    fn index(&self, pos: Position) -> Result<usize, OutOfBounds> {
        match (usize::try_from(pos.row), usize::try_from(pos.column)) {
            (Ok(r), Ok(c)) if r < self.rows && c < self.columns => Ok(r * self.columns + c),
            _ => Err(OutOfBounds(pos)),
        }
    }

    /// Whether the [`Position`] lies on this board.
    #[inline(always)]
    pub fn is_valid_position(&self, pos: Position) -> bool {
        self.index(pos).is_ok()
    }

    /// The [`Piece`] on the given [`Position`].
    #[inline(always)]
    pub fn piece_at(&self, pos: Position) -> Result<Piece, OutOfBounds> {
        Ok(self.cells[self.index(pos)?])
    }

    /// Every [`Position`] on this board, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let columns = self.columns;
        (0..self.rows * self.columns)
            .map(move |i| Position::new((i / columns) as _, (i % columns) as _))
    }

    /// An iterator over all pieces on the board, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Piece, Position)> + '_ {
        self.cells
            .iter()
            .copied()
            .zip(self.positions())
            .filter(|(p, _)| !p.is_empty())
    }

    /// Whether every square strictly between two aligned positions is vacant.
    fn is_path_clear(&self, from: Position, to: Position) -> bool {
        let (dr, dc) = from.delta(to);
        let (sr, sc) = (dr.signum(), dc.signum());

        (1..dr.abs().max(dc.abs())).all(|i| {
            let pos = from.offset(i * sr, i * sc);
            self.piece_at(pos).map_or(false, |p| p.is_empty())
        })
    }

    /// Whether the piece on `from` may move to `to`.
    ///
    /// Pieces have no color, so landing on any occupied square is a capture. Only
    /// pawns care about what stands on the destination.
    pub fn is_move_legal(&self, from: Position, to: Position) -> bool {
        let (Ok(piece), Ok(target)) = (self.piece_at(from), self.piece_at(to)) else {
            return false;
        };

        let (dr, dc) = from.delta(to);

        match piece.role() {
            Role::Empty => false,
            Role::King => dr.abs() <= 1 && dc.abs() <= 1,
            Role::Rook => (dr == 0) != (dc == 0) && self.is_path_clear(from, to),
            Role::Bishop => dr != 0 && dr.abs() == dc.abs() && self.is_path_clear(from, to),
            Role::Knight => matches!((dr.abs(), dc.abs()), (1, 2) | (2, 1)),

            // Pawns always advance towards higher rows.
            Role::Pawn => match (dr, dc.abs()) {
                (1, 0) => target.is_empty(),
                (2, 0) => {
                    from.row == Self::PAWN_START_ROW
                        && target.is_empty()
                        && self.is_path_clear(from, to)
                }
                (1, 1) => !target.is_empty(),
                _ => false,
            },
        }
    }

    /// Every [`Position`] the piece on `from` may legally move to, row by row.
    pub fn destinations(&self, from: Position) -> impl Iterator<Item = Position> + '_ {
        self.positions().filter(move |&to| self.is_move_legal(from, to))
    }

    /// Moves the piece on `from` to `to`, returning whatever was captured.
    ///
    /// The board is left untouched if the move is illegal.
    pub fn move_piece(&mut self, from: Position, to: Position) -> Result<Piece, IllegalMove> {
        match (self.index(from), self.index(to)) {
            (Ok(i), Ok(j)) if self.is_move_legal(from, to) => {
                let piece = mem::replace(&mut self.cells[i], Piece::EMPTY);
                Ok(mem::replace(&mut self.cells[j], piece))
            }

            _ => Err(IllegalMove { from, to }),
        }
    }

    /// Places a [`Piece`] on the given [`Position`], replacing whatever was there.
    pub fn place_piece(&mut self, piece: Piece, pos: Position) -> Result<(), OutOfBounds> {
        let i = self.index(pos)?;
        self.cells[i] = piece;
        Ok(())
    }

    /// Vacates the given [`Position`], returning the piece that stood there.
    pub fn remove_piece(&mut self, pos: Position) -> Result<Piece, OutOfBounds> {
        let i = self.index(pos)?;
        Ok(mem::replace(&mut self.cells[i], Piece::EMPTY))
    }
}

/// Prints rows separated by `/`, or by line breaks in the alternate form.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.columns).enumerate() {
            if i > 0 {
                f.write_char(if f.alternate() { '\n' } else { '/' })?;
            }

            for p in row {
                fmt::Display::fmt(p, f)?;
            }
        }

        Ok(())
    }
}

/// The reason why parsing [`Board`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum ParseBoardError {
    #[display(fmt = "failed to parse board, expected at least one square")]
    Empty,
    #[display(fmt = "failed to parse board, rows must have the same length")]
    Ragged,
    #[display(fmt = "failed to parse board")]
    InvalidPiece(ParseRoleError),
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<_> = s.trim().split(['/', '\n']).map(str::trim).collect();
        let columns = rows[0].chars().count();

        if columns == 0 {
            return Err(ParseBoardError::Empty);
        } else if rows.iter().any(|r| r.chars().count() != columns) {
            return Err(ParseBoardError::Ragged);
        }

        let mut buffer = [0; 4];
        let cells = rows
            .iter()
            .flat_map(|r| r.chars())
            .map(|c| c.encode_utf8(&mut buffer).parse())
            .collect::<Result<_, _>>()
            .map_err(ParseBoardError::InvalidPiece)?;

        Ok(Board {
            rows: rows.len(),
            columns,
            cells,
        })
    }
}
