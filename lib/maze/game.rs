use crate::chess::{Board, IllegalMove, OutOfBounds, Piece, Position};
use crate::maze::Level;
use std::mem;
use tracing::{debug, instrument, warn, Span};

/// A move made during a [`Game`], remembered so it can be taken back.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
struct Step {
    from: Position,
    to: Position,
    captured: Piece,
}

impl Step {
    /// Leaves the board untouched if either square is out of bounds.
    fn take_back(&self, board: &mut Board) -> Result<(), OutOfBounds> {
        board.piece_at(self.from)?;
        let piece = board.remove_piece(self.to)?;
        board.place_piece(piece, self.from)?;
        board.place_piece(self.captured, self.to)
    }
}

/// Holds the state of an attempt at solving a [`Level`].
#[derive(Debug, Clone)]
pub struct Game {
    level: Level,
    history: Vec<Step>,
}

impl Game {
    /// Starts solving a [`Level`].
    pub fn new(level: Level) -> Self {
        Game {
            level,
            history: Vec::new(),
        }
    }

    /// Switches to another [`Level`], returning the current one.
    #[instrument(level = "debug", skip_all)]
    pub fn load(&mut self, level: Level) -> Level {
        self.history.clear();
        mem::replace(&mut self.level, level)
    }

    /// The current [`Level`].
    #[inline(always)]
    pub fn level(&self) -> &Level {
        &self.level
    }

    /// How many moves have been made so far.
    #[inline(always)]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Whether the current [`Level`] is completed.
    #[inline(always)]
    pub fn is_over(&self) -> bool {
        self.level.is_completed()
    }

    /// Moves the traveling piece to `to`.
    ///
    /// Staying put is not counted as a move.
    #[instrument(level = "debug", skip(self), err,
        fields(from = %self.level.player().position(), moves))]
    pub fn make_move(&mut self, to: Position) -> Result<(), IllegalMove> {
        let (board, player) = self.level.split_mut();
        let from = player.position();

        player.make_move(to, &*board)?;

        if from != to {
            let captured = board.move_piece(from, to)?;
            self.history.push(Step { from, to, captured });
        }

        Span::current().record("moves", self.move_count());

        if self.is_over() {
            debug!(moves = self.move_count(), "level completed");
        }

        Ok(())
    }

    /// Takes back the last move, returning the [`Position`] the piece returned to.
    ///
    /// Returns `None` if there is nothing to take back. A step that no longer fits on
    /// the board is dropped without touching the board or the player.
    #[instrument(level = "debug", skip(self), ret)]
    pub fn undo(&mut self) -> Option<Position> {
        let step = self.history.pop()?;
        let (board, player) = self.level.split_mut();

        if let Err(e) = step.take_back(board) {
            warn!("{}", e);
            return None;
        }

        player.teleport(step.from);
        Some(step.from)
    }

    /// Takes back every move and puts the piece back at the start.
    #[instrument(level = "debug", skip(self))]
    pub fn restart(&mut self) {
        while !self.history.is_empty() {
            self.undo();
        }

        let start = self.level.start();
        self.level.player_mut().teleport(start);
    }
}
