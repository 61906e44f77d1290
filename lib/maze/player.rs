use crate::chess::{IllegalMove, Position, Rules};
use derive_more::Constructor;

/// The piece traveling through the maze.
///
/// The player only tracks where the traveling piece stands. It never touches the
/// [`Board`][`crate::chess::Board`] it consults, keeping the grid in sync is up to
/// the [`Game`][`crate::maze::Game`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Constructor)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Player {
    position: Position,
}

impl Player {
    /// The current [`Position`].
    #[inline(always)]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Whether the rules allow moving to `to` from the current [`Position`].
    #[inline(always)]
    pub fn can_move<R: Rules + ?Sized>(&self, to: Position, rules: &R) -> bool {
        rules.is_move_legal(self.position, to)
    }

    /// Moves to `to` if the rules allow it.
    pub fn make_move<R: Rules + ?Sized>(
        &mut self,
        to: Position,
        rules: &R,
    ) -> Result<(), IllegalMove> {
        if !self.can_move(to, rules) {
            return Err(IllegalMove {
                from: self.position,
                to,
            });
        }

        self.position = to;
        Ok(())
    }

    /// Moves to `to` unconditionally.
    ///
    /// Meant for repositioning onto squares known to be reachable, such as the start
    /// of a level or a square previously occupied.
    #[inline(always)]
    pub fn teleport(&mut self, to: Position) {
        self.position = to;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::MockRules;
    use mockall::predicate::eq;
    use test_strategy::proptest;

    #[proptest]
    fn player_starts_at_the_given_position(pos: Position) {
        assert_eq!(Player::new(pos).position(), pos);
    }

    #[proptest]
    fn can_move_delegates_to_rules(p: Player, to: Position, legal: bool) {
        let mut rules = MockRules::new();
        rules
            .expect_is_move_legal()
            .with(eq(p.position()), eq(to))
            .once()
            .return_const(legal);

        assert_eq!(p.can_move(to, &rules), legal);
    }

    #[proptest]
    fn make_move_updates_position_if_legal(mut p: Player, to: Position) {
        let mut rules = MockRules::new();
        rules.expect_is_move_legal().return_const(true);

        assert_eq!(p.make_move(to, &rules), Ok(()));
        assert_eq!(p.position(), to);
    }

    #[proptest]
    fn make_move_fails_if_illegal(mut p: Player, to: Position) {
        let mut rules = MockRules::new();
        rules.expect_is_move_legal().return_const(false);

        let from = p.position();
        assert_eq!(p.make_move(to, &rules), Err(IllegalMove { from, to }));
        assert_eq!(p.position(), from);
    }

    #[proptest]
    fn teleport_ignores_the_rules(mut p: Player, to: Position) {
        p.teleport(to);
        assert_eq!(p.position(), to);
    }
}
