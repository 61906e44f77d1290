mod game;
mod level;
mod player;

pub use game::*;
pub use level::*;
pub use player::*;
