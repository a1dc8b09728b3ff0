mod fruit;
mod game;
mod snake;

pub use fruit::FruitManager;
pub use game::{position_in_board, Game, Outcome, Phase};
pub use snake::Snake;
