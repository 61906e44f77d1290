use crate::chess::{Board, Position};
use crate::maze::Player;

/// A maze to solve: a [`Board`] of obstacles, the traveling [`Player`] and the squares
/// where the journey starts and ends.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Level {
    board: Board,
    player: Player,
    start: Position,
    end: Position,
}

impl Level {
    /// Constructs a [`Level`].
    pub fn new(board: Board, player: Player, start: Position, end: Position) -> Self {
        Level {
            board,
            player,
            start,
            end,
        }
    }

    /// The [`Board`].
    #[inline(always)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The traveling [`Player`].
    #[inline(always)]
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// A mutable reference to the traveling [`Player`].
    #[inline(always)]
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Borrows the [`Board`] and the [`Player`] at the same time.
    #[inline(always)]
    pub fn split_mut(&mut self) -> (&mut Board, &mut Player) {
        (&mut self.board, &mut self.player)
    }

    /// Where the journey starts.
    #[inline(always)]
    pub fn start(&self) -> Position {
        self.start
    }

    /// Where the journey ends.
    #[inline(always)]
    pub fn end(&self) -> Position {
        self.end
    }

    /// Whether the [`Player`] reached the end.
    #[inline(always)]
    pub fn is_completed(&self) -> bool {
        self.player.position() == self.end
    }
}
