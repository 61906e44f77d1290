use crate::chess::{ParseRoleError, Role};
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use test_strategy::Arbitrary;

/// The content of a square on the [`Board`][`crate::chess::Board`].
///
/// Pieces have no color or identity, only a [`Role`].
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
    From,
    Deserialize,
    Serialize,
)]
#[serde(transparent)]
pub struct Piece(Role);

impl Piece {
    /// A vacant square.
    pub const EMPTY: Self = Piece(Role::Empty);

    /// Constructs [`Piece`] of the given [`Role`].
    #[inline(always)]
    pub const fn new(r: Role) -> Self {
        Piece(r)
    }

    /// This piece's [`Role`].
    #[inline(always)]
    pub const fn role(&self) -> Role {
        self.0
    }

    /// Whether this piece stands for a vacant square.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        matches!(self.0, Role::Empty)
    }
}

impl FromStr for Piece {
    type Err = ParseRoleError;

    #[inline(always)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Piece(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn piece_has_a_role(r: Role) {
        assert_eq!(Piece::new(r).role(), r);
    }

    #[proptest]
    fn piece_is_empty_iff_role_is_empty(p: Piece) {
        assert_eq!(p.is_empty(), p.role() == Role::Empty);
    }

    #[test]
    fn default_piece_is_empty() {
        assert_eq!(Piece::default(), Piece::EMPTY);
    }

    #[proptest]
    fn parsing_printed_piece_is_an_identity(p: Piece) {
        assert_eq!(p.to_string().parse(), Ok(p));
    }
}
