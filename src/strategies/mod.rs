pub mod greedy;

pub use greedy::Greedy;

use crate::{engine::Game, grid::Input};

pub trait Strategy {
    /// Picks the input for the next tick of `game`.
    fn get_movement(&self, game: &Game) -> Input;
}
