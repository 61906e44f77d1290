use derive_more::{Display, Error, From};
use lib::chess::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[cfg(test)]
use proptest::prelude::*;

/// The reason why parsing level configuration failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse level configuration")]
pub struct ParseLevelConfigError(ron::de::SpannedError);

/// Describes a [`Level`][`lib::maze::Level`].
///
/// The board lists rows from the first to the last, separated by `/` or line breaks,
/// with one character per square, see [`Board`][`lib::chess::Board`].
#[derive(Debug, Clone, Eq, PartialEq, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(deny_unknown_fields)]
pub struct LevelConfig {
    #[cfg_attr(test, strategy(any::<lib::chess::Board>().prop_map(|b| b.to_string())))]
    pub board: String,
    pub start: Position,
    pub end: Position,
}

impl FromStr for LevelConfig {
    type Err = ParseLevelConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}
