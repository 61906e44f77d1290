/// Board, pieces and the rules by which they move.
pub mod chess;
/// The puzzle of leading a piece through a maze of other pieces.
pub mod maze;
