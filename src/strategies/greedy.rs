use itertools::Itertools;

use super::Strategy;
use crate::{
    engine::Game,
    grid::{Board, Cell, Coord, Direction, Input},
};

/// Heads for the nearest fruit, refusing any move that would end the round.
pub struct Greedy;

fn possible_directions(board: &Board, head: Coord, facing: Direction) -> Vec<Direction> {
    Direction::iter()
        .copied()
        .filter(|d| {
            if *d == facing.opposite() {
                // filter out our neck
                return false;
            }
            matches!(
                board.get(head.neighbour(*d)),
                Some(Cell::Empty | Cell::Fruit(_))
            )
        })
        .collect()
}

impl Strategy for Greedy {
    fn get_movement(&self, game: &Game) -> Input {
        let Some(head) = game.head() else {
            return Input::NoChange;
        };
        let board = game.board();

        let fruit = board
            .cells()
            .filter(|(_, cell)| matches!(cell, Cell::Fruit(_)))
            .map(|(coord, _)| coord)
            .collect_vec();

        possible_directions(board, head, game.direction())
            .into_iter()
            .min_by_key(|d| {
                let target = head.neighbour(*d);
                fruit
                    .iter()
                    .map(|f| target.distance_to(*f))
                    .min()
                    .unwrap_or(0)
            })
            .map_or(Input::NoChange, Input::from)
    }
}
