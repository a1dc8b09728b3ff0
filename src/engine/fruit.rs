use log::debug;
use rand::{
    distributions::{Distribution, WeightedIndex},
    rngs::StdRng,
    seq::SliceRandom,
    SeedableRng,
};

use crate::{
    config::FruitKind,
    grid::{Board, Cell, Coord},
};

/// Keeps track of the fruit alive in one round and places new ones.
#[derive(Debug, Clone)]
pub struct FruitManager {
    live:   usize,
    worths: Vec<u32>,
    picker: Option<WeightedIndex<u32>>,
    rng:    StdRng,
}

impl FruitManager {
    /// An empty `kinds` list, or one with no weight, spawns fruit worth 1.
    #[must_use]
    pub fn new(kinds: &[FruitKind], seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Self {
            live: 0,
            worths: kinds.iter().map(|kind| kind.worth).collect(),
            picker: WeightedIndex::new(kinds.iter().map(|kind| kind.weight))
                .ok(),
            rng,
        }
    }

    #[must_use]
    pub const fn is_fruit(cell: Cell) -> bool {
        matches!(cell, Cell::Fruit(_))
    }

    /// Consumes the fruit in `cell` and returns what it's worth. Non-fruit
    /// cells are worth nothing and leave the count alone.
    pub fn eat(&mut self, cell: Cell) -> u32 {
        match cell {
            Cell::Fruit(worth) => {
                self.live = self.live.saturating_sub(1);
                worth
            },
            _ => 0,
        }
    }

    /// Places one fruit on a random free cell. Returns `None`, leaving the
    /// board alone, when there is no free cell.
    pub fn spawn(&mut self, board: &mut Board) -> Option<Coord> {
        let free = board.free_cells();
        let coord = *free.choose(&mut self.rng)?;
        let worth = self.pick_worth();
        board.set(coord, Cell::Fruit(worth));
        self.live += 1;
        debug!("spawned fruit worth {worth} at {coord}, {} alive", self.live);
        Some(coord)
    }

    /// Places a fruit at a chosen empty cell.
    pub fn place_at(&mut self, board: &mut Board, coord: Coord, worth: u32) -> bool {
        if worth == 0 || board.get(coord) != Some(Cell::Empty) {
            return false;
        }
        board.set(coord, Cell::Fruit(worth));
        self.live += 1;
        true
    }

    #[must_use]
    pub const fn count(&self) -> usize {
        self.live
    }

    pub fn reset(&mut self) {
        self.live = 0;
    }

    fn pick_worth(&mut self) -> u32 {
        self.picker
            .as_ref()
            .and_then(|picker| self.worths.get(picker.sample(&mut self.rng)))
            .copied()
            .unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_kind(worth: u32) -> Vec<FruitKind> {
        vec![FruitKind { worth, weight: 1 }]
    }

    #[test]
    fn test_is_fruit() {
        assert!(FruitManager::is_fruit(Cell::Fruit(1)));
        assert!(!FruitManager::is_fruit(Cell::Snake(1)));
        assert!(!FruitManager::is_fruit(Cell::Empty));
    }

    #[test]
    fn test_spawn_uses_a_free_cell() {
        let mut fruit = FruitManager::new(&single_kind(2), Some(7));
        let mut board = Board::new(2, 2);
        board.set(Coord::new(0, 0), Cell::Snake(1));
        board.set(Coord::new(1, 0), Cell::Snake(2));
        board.set(Coord::new(0, 1), Cell::Snake(3));

        assert_eq!(fruit.spawn(&mut board), Some(Coord::new(1, 1)));
        assert_eq!(board.get(Coord::new(1, 1)), Some(Cell::Fruit(2)));
        assert_eq!(fruit.count(), 1);
    }

    #[test]
    fn test_spawn_on_full_board_is_a_no_op() {
        let mut fruit = FruitManager::new(&single_kind(1), Some(7));
        let mut board = Board::new(1, 1);
        board.set(Coord::new(0, 0), Cell::Snake(1));
        let before = board.clone();

        assert_eq!(fruit.spawn(&mut board), None);
        assert_eq!(board, before);
        assert_eq!(fruit.count(), 0);
    }

    #[test]
    fn test_eat_decrements_live_count() {
        let mut fruit = FruitManager::new(&single_kind(1), Some(1));
        let mut board = Board::new(3, 3);
        assert!(fruit.place_at(&mut board, Coord::new(1, 1), 3));
        assert_eq!(fruit.count(), 1);

        assert_eq!(fruit.eat(Cell::Fruit(3)), 3);
        assert_eq!(fruit.count(), 0);
        assert_eq!(fruit.eat(Cell::Empty), 0);
        assert_eq!(fruit.count(), 0);
    }

    #[test]
    fn test_place_at_needs_an_empty_cell() {
        let mut fruit = FruitManager::new(&single_kind(1), Some(1));
        let mut board = Board::new(3, 3);
        board.set(Coord::new(0, 0), Cell::Snake(1));
        assert!(!fruit.place_at(&mut board, Coord::new(0, 0), 1));
        assert!(!fruit.place_at(&mut board, Coord::new(3, 0), 1));
        assert!(!fruit.place_at(&mut board, Coord::new(1, 1), 0));
        assert_eq!(fruit.count(), 0);
    }

    #[test]
    fn test_worths_follow_weights() {
        let kinds = [
            FruitKind {
                worth:  5,
                weight: 0,
            },
            FruitKind {
                worth:  2,
                weight: 3,
            },
        ];
        let mut fruit = FruitManager::new(&kinds, Some(42));
        let mut board = Board::new(4, 4);
        for _ in 0..16 {
            fruit.spawn(&mut board);
        }
        assert_eq!(fruit.count(), 16);
        assert!(board.cells().all(|(_, cell)| cell == Cell::Fruit(2)));
    }

    #[test]
    fn test_same_seed_same_placement() {
        let mut a = FruitManager::new(&single_kind(1), Some(99));
        let mut b = FruitManager::new(&single_kind(1), Some(99));
        let mut board_a = Board::new(8, 8);
        let mut board_b = Board::new(8, 8);
        for _ in 0..5 {
            assert_eq!(a.spawn(&mut board_a), b.spawn(&mut board_b));
        }
    }

    #[test]
    fn test_reset() {
        let mut fruit = FruitManager::new(&single_kind(1), None);
        let mut board = Board::new(3, 3);
        fruit.spawn(&mut board);
        fruit.spawn(&mut board);
        fruit.reset();
        assert_eq!(fruit.count(), 0);
    }
}
