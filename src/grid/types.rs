use std::{fmt, slice::Iter};

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Direction {
    pub fn iter() -> Iter<'static, Self> {
        static DIRECTIONS: [Direction; 4] = [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ];
        DIRECTIONS.iter()
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the `(dx, dy)` step for this direction. Rows grow downwards,
    /// so `Up` decreases `y`.
    #[must_use]
    pub const fn delta(self) -> (i64, i64) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Up => "Up",
                Self::Down => "Down",
                Self::Left => "Left",
                Self::Right => "Right",
            }
        )
    }
}

/// What the driver asks for on a single tick.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Input {
    Up,
    Down,
    Left,
    Right,
    #[default]
    NoChange,
}

impl Input {
    #[must_use]
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::Up => Some(Direction::Up),
            Self::Down => Some(Direction::Down),
            Self::Left => Some(Direction::Left),
            Self::Right => Some(Direction::Right),
            Self::NoChange => None,
        }
    }
}

impl From<Direction> for Input {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::Up,
            Direction::Down => Self::Down,
            Direction::Left => Self::Left,
            Direction::Right => Self::Right,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Coord {
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn neighbour(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Manhattan distance, the number of moves between two cells on an
    /// empty board.
    #[must_use]
    pub const fn distance_to(self, other: Self) -> i64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

/// Contents of one board cell.
///
/// A snake segment carries its remaining life: the head holds the snake's
/// length, every following segment one less, down to `1` at the tail.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Hash, Clone, Copy, Default)]
pub enum Cell {
    #[default]
    Empty,
    Snake(u32),
    Fruit(u32),
}

impl Cell {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Compact integer form: `0` empty, the segment order for snake cells,
    /// and the negated worth for fruit.
    #[must_use]
    pub fn raw(self) -> i64 {
        match self {
            Self::Empty => 0,
            Self::Snake(order) => i64::from(order),
            Self::Fruit(worth) => -i64::from(worth),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        for direction in Direction::iter() {
            assert_ne!(direction.opposite(), *direction);
            assert_eq!(direction.opposite().opposite(), *direction);
        }
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
    }

    #[test]
    fn test_neighbour_rows_grow_downwards() {
        let c = Coord::new(5, 5);
        assert_eq!(c.neighbour(Direction::Up), Coord::new(5, 4));
        assert_eq!(c.neighbour(Direction::Down), Coord::new(5, 6));
        assert_eq!(c.neighbour(Direction::Left), Coord::new(4, 5));
        assert_eq!(c.neighbour(Direction::Right), Coord::new(6, 5));
    }

    #[test]
    fn test_distance_to() {
        let c = Coord::new(2, 3);
        assert_eq!(c.distance_to(c), 0);
        assert_eq!(c.distance_to(Coord::new(5, 1)), 5);
        assert_eq!(Coord::new(5, 1).distance_to(c), 5);
    }

    #[test]
    fn test_input_direction() {
        assert_eq!(Input::NoChange.direction(), None);
        for direction in Direction::iter() {
            assert_eq!(Input::from(*direction).direction(), Some(*direction));
        }
    }

    #[test]
    fn test_raw_encoding() {
        assert_eq!(Cell::Empty.raw(), 0);
        assert_eq!(Cell::Snake(4).raw(), 4);
        assert_eq!(Cell::Fruit(2).raw(), -2);
    }
}
