use crate::grid::{Board, Cell, Coord};

/// The snake's bookkeeping. Its body lives on the board as `Cell::Snake`
/// segments, so geometry is always read back from there.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snake {
    length:     u32,
    grow_queue: u32,
    score:      u32,
    row:        i64,
    column:     i64,
}

impl Snake {
    #[must_use]
    pub const fn new(length: u32, row: i64, column: i64) -> Self {
        Self {
            length,
            grow_queue: 0,
            score: 0,
            row,
            column,
        }
    }

    /// Writes the starting body: a horizontal run ending with the head on
    /// the starting column.
    pub fn stamp(&self, board: &mut Board) {
        for (offset, order) in (1..=self.length).rev().enumerate() {
            board.set(
                Coord {
                    x: self.column - offset as i64,
                    y: self.row,
                },
                Cell::Snake(order),
            );
        }
    }

    /// Moves the head onto `new_head`. A pending growth unit keeps the tail
    /// where it is for this tick; otherwise every segment loses one life and
    /// the tail drops off.
    pub fn advance(&mut self, board: &mut Board, new_head: Coord) {
        if self.grow_queue > 0 {
            self.grow_queue -= 1;
            self.length += 1;
        } else {
            for cell in board.cells_mut() {
                if let Cell::Snake(order) = *cell {
                    *cell = if order > 1 {
                        Cell::Snake(order - 1)
                    } else {
                        Cell::Empty
                    };
                }
            }
        }
        board.set(new_head, Cell::Snake(self.length));
    }

    pub fn grow_up(&mut self, amount: u32) {
        self.score += amount;
        self.grow_queue += amount;
    }

    /// The segment with the most life left.
    #[must_use]
    pub fn head(board: &Board) -> Option<Coord> {
        let top = board.snake_cells().map(|(_, order)| order).max()?;
        board.position_of(Cell::Snake(top))
    }

    /// Forces the length down without touching the board.
    pub fn truncate(&mut self, length: u32) {
        self.length = length;
    }

    #[must_use]
    pub const fn length(&self) -> u32 {
        self.length
    }

    #[must_use]
    pub const fn grow_queue(&self) -> u32 {
        self.grow_queue
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }
}
