use std::fmt;

use itertools::Itertools;

use super::types::{Cell, Coord};

/// Fixed-size grid of cells, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width:  i64,
    height: i64,
    cells:  Vec<Cell>,
}

impl Board {
    /// Creates an all-empty board. Non-positive sides, or sides whose area
    /// doesn't fit in memory, give an empty board that contains no
    /// coordinate.
    #[must_use]
    pub fn new(height: i64, width: i64) -> Self {
        let size = height
            .checked_mul(width)
            .filter(|_| height > 0 && width > 0)
            .and_then(|cells| usize::try_from(cells).ok());
        let Some(size) = size else {
            return Self {
                width:  0,
                height: 0,
                cells:  Vec::new(),
            };
        };
        Self {
            width,
            height,
            cells: vec![Cell::Empty; size],
        }
    }

    #[must_use]
    pub const fn width(&self) -> i64 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> i64 {
        self.height
    }

    #[must_use]
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && coord.x < self.width
            && coord.y < self.height
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        if self.contains(coord) {
            usize::try_from(coord.y * self.width + coord.x).ok()
        } else {
            None
        }
    }

    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.index(coord).map(|idx| self.cells[idx])
    }

    /// Writes `cell` at `coord`. Returns false when `coord` is off the board.
    pub fn set(&mut self, coord: Coord, cell: Cell) -> bool {
        match self.index(coord) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            },
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Every coordinate on the board, `y` outer and `x` inner.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        (0..self.height)
            .cartesian_product(0..self.width)
            .map(|(y, x)| Coord { x, y })
    }

    /// Every cell alongside its coordinate, in the same order as `coords`.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.coords().zip(self.cells.iter().copied())
    }

    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    /// First coordinate holding exactly `cell`, scanning row by row.
    #[must_use]
    pub fn position_of(&self, cell: Cell) -> Option<Coord> {
        self.cells()
            .find(|(_, other)| *other == cell)
            .map(|(coord, _)| coord)
    }

    #[must_use]
    pub fn free_cells(&self) -> Vec<Coord> {
        self.cells()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(coord, _)| coord)
            .collect()
    }

    pub fn snake_cells(&self) -> impl Iterator<Item = (Coord, u32)> + '_ {
        self.cells().filter_map(|(coord, cell)| match cell {
            Cell::Snake(order) => Some((coord, order)),
            _ => None,
        })
    }

    /// The raw integer rows, for renderers that want the compact encoding.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<i64>> {
        self.cells
            .chunks(usize::try_from(self.width).unwrap_or(1).max(1))
            .map(|row| row.iter().map(|cell| cell.raw()).collect())
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let head = self.snake_cells().map(|(_, order)| order).max();
        for y in 0..self.height {
            for x in 0..self.width {
                match self.get(Coord { x, y }) {
                    Some(Cell::Snake(order)) if Some(order) == head => {
                        write!(f, "@")?;
                    },
                    Some(Cell::Snake(_)) => write!(f, "#")?,
                    Some(Cell::Fruit(_)) => write!(f, "*")?,
                    _ => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
