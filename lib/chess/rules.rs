use crate::chess::{Board, Position};

/// Trait for types that decide whether a piece may move between two squares.
#[cfg_attr(test, mockall::automock)]
pub trait Rules {
    /// Whether the piece on `from` may move to `to`.
    fn is_move_legal(&self, from: Position, to: Position) -> bool;
}

impl Rules for Board {
    #[inline(always)]
    fn is_move_legal(&self, from: Position, to: Position) -> bool {
        Board::is_move_legal(self, from, to)
    }
}
