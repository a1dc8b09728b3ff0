use std::{fmt, mem};

use color_eyre::Result;
use log::{debug, info, trace};

use super::{fruit::FruitManager, snake::Snake};
use crate::{
    config::Settings,
    grid::{Board, Cell, Coord, Direction, Input},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InProgress,
    Ended,
}

/// What a single `play` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The round isn't running, nothing happened.
    Idle,
    Moved,
    Ate { worth: u32 },
    /// The snake bit itself under the wrap rule and now has `length`.
    Bit { length: u32 },
    HitWall,
    HitSelf,
}

impl Outcome {
    #[must_use]
    pub const fn ends_round(self) -> bool {
        matches!(self, Self::HitWall | Self::HitSelf)
    }
}

/// One round of snake: the board, the snake on it, and its fruit.
#[derive(Debug, Clone)]
pub struct Game {
    settings:  Settings,
    board:     Board,
    snake:     Snake,
    fruit:     FruitManager,
    phase:     Phase,
    direction: Direction,
    queued:    Input,
}

impl Game {
    /// # Errors
    ///
    /// Fails if the settings don't describe a playable game.
    pub fn new(settings: Settings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            board: Board::new(settings.height, settings.width),
            snake: Snake::default(),
            fruit: FruitManager::new(&settings.fruits, settings.seed),
            phase: Phase::NotStarted,
            direction: Direction::default(),
            queued: Input::NoChange,
            settings,
        })
    }

    /// Starts a fresh round, whatever state the previous one was left in.
    pub fn initialize(&mut self) {
        self.board.clear();
        self.fruit.reset();
        self.direction = Direction::default();
        self.queued = Input::NoChange;

        self.snake = Snake::new(
            self.settings.snake.length,
            self.settings.snake_row(),
            self.settings.snake.column,
        );
        self.snake.stamp(&mut self.board);
        self.phase = Phase::InProgress;

        info!(
            "new round on a {}x{} board, snake of length {}",
            self.board.width(),
            self.board.height(),
            self.snake.length()
        );
    }

    /// Runs one tick.
    pub fn play(&mut self, input: Input) -> Outcome {
        if self.phase != Phase::InProgress {
            trace!("ignoring {input:?}, round is {:?}", self.phase);
            return Outcome::Idle;
        }

        let direction = self.resolve(input);

        let Some(head) = Snake::head(&self.board) else {
            return self.end(Outcome::HitSelf);
        };
        let target = head.neighbour(direction);
        trace!("moving {direction} from {head} to {target}");

        let outcome = match self.board.get(target) {
            None => Outcome::HitWall,
            Some(Cell::Snake(order)) if self.settings.wrap => self.bite(order),
            Some(Cell::Snake(_)) => Outcome::HitSelf,
            Some(cell) => {
                let worth = if FruitManager::is_fruit(cell) {
                    let worth = self.fruit.eat(cell);
                    self.snake.grow_up(worth);
                    debug!(
                        "ate fruit worth {worth} at {target}, score is now {}",
                        self.snake.score()
                    );
                    Some(worth)
                } else {
                    None
                };

                self.snake.advance(&mut self.board, target);

                if self.fruit.count() < self.settings.fruit_count {
                    self.fruit.spawn(&mut self.board);
                }

                worth.map_or(Outcome::Moved, |worth| Outcome::Ate { worth })
            },
        };

        if outcome.ends_round() {
            self.end(outcome)
        } else {
            outcome
        }
    }

    /// Records the latest input for the next `tick`.
    pub fn queue(&mut self, input: Input) {
        self.queued = input;
    }

    /// Plays whatever was queued since the last tick.
    pub fn tick(&mut self) -> Outcome {
        let input = mem::take(&mut self.queued);
        self.play(input)
    }

    fn resolve(&mut self, input: Input) -> Direction {
        let reversal = self.direction.opposite();
        if let Some(requested) = input.direction().filter(|d| *d != reversal) {
            self.direction = requested;
        }
        self.direction
    }

    /// The snake shrinks to one less than the segment it bit, and every
    /// segment at or above the new length is cleared.
    fn bite(&mut self, order: u32) -> Outcome {
        let length = order.saturating_sub(1);
        self.snake.truncate(length);
        for cell in self.board.cells_mut() {
            if matches!(*cell, Cell::Snake(o) if o >= length) {
                *cell = Cell::Empty;
            }
        }
        debug!("bit segment {order}, snake is now length {length}");

        if self.board.snake_cells().next().is_none() {
            // nothing left to steer
            Outcome::HitSelf
        } else {
            Outcome::Bit { length }
        }
    }

    fn end(&mut self, outcome: Outcome) -> Outcome {
        info!(
            "round over ({outcome:?}) with a score of {}",
            self.snake.score()
        );
        self.phase = Phase::Ended;
        self.fruit.reset();
        self.direction = Direction::default();
        self.queued = Input::NoChange;
        outcome
    }

    /// Puts a fruit on an empty cell and counts it as alive.
    pub fn place_fruit(&mut self, at: Coord, worth: u32) -> bool {
        self.fruit.place_at(&mut self.board, at, worth)
    }

    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        self.phase == Phase::InProgress
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.snake.score()
    }

    #[must_use]
    pub const fn length(&self) -> u32 {
        self.snake.length()
    }

    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub const fn fruit_count(&self) -> usize {
        self.fruit.count()
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn head(&self) -> Option<Coord> {
        Snake::head(&self.board)
    }

    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)?;
        writeln!(
            f,
            "score {} | length {} | heading {}",
            self.score(),
            self.length(),
            self.direction
        )
    }
}

/// First coordinate on `board` holding exactly `cell`.
#[must_use]
pub fn position_in_board(board: &Board, cell: Cell) -> Option<Coord> {
    board.position_of(cell)
}
