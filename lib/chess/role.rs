use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use test_strategy::Arbitrary;

/// The kind of a [`Piece`][`crate::chess::Piece`].
///
/// [`Role::Empty`] stands for a vacant square.
#[derive(
    Debug,
    Display,
    Default,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Arbitrary,
    Deserialize,
    Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    #[display(fmt = ".")]
    Empty,
    #[display(fmt = "k")]
    King,
    #[display(fmt = "r")]
    Rook,
    #[display(fmt = "b")]
    Bishop,
    #[display(fmt = "n")]
    Knight,
    #[display(fmt = "p")]
    Pawn,
}

/// The reason why parsing [`Role`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse piece, expected one of `.krbnp`")]
pub struct ParseRoleError;

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "." => Ok(Role::Empty),
            "k" => Ok(Role::King),
            "r" => Ok(Role::Rook),
            "b" => Ok(Role::Bishop),
            "n" => Ok(Role::Knight),
            "p" => Ok(Role::Pawn),
            _ => Err(ParseRoleError),
        }
    }
}
