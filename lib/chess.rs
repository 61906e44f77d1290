mod board;
mod piece;
mod position;
mod role;
mod rules;

pub use board::*;
pub use piece::*;
pub use position::*;
pub use role::*;
pub use rules::*;
