use std::{fs, path::Path, time::Duration};

use color_eyre::{
    eyre::{ensure, WrapErr},
    Result,
};
use serde::{Deserialize, Serialize};

/// Largest board, in cells, a game may allocate.
pub const MAX_CELLS: i64 = 1 << 20;

/// Where and how long the snake starts.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SnakeSettings {
    pub length: u32,
    /// Column of the head; the body trails off to the left.
    pub column: i64,
    /// Row of the whole body. Defaults to the middle row.
    pub row:    Option<i64>,
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            length: 3,
            column: 3,
            row:    None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FruitKind {
    pub worth:  u32,
    pub weight: u32,
}

impl Default for FruitKind {
    fn default() -> Self {
        Self {
            worth:  1,
            weight: 1,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub height:      i64,
    pub width:       i64,
    /// How many fruit are kept on the board at once.
    pub fruit_count: usize,
    /// Biting yourself shortens the snake instead of ending the round.
    pub wrap:        bool,
    pub snake:       SnakeSettings,
    pub fruits:      Vec<FruitKind>,
    pub seed:        Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            height:      20,
            width:       20,
            fruit_count: 1,
            wrap:        false,
            snake:       SnakeSettings::default(),
            fruits:      vec![FruitKind::default()],
            seed:        None,
        }
    }
}

impl Settings {
    #[must_use]
    pub fn new(height: i64, width: i64) -> Self {
        Self {
            height,
            width,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn for_level(level: Level) -> Self {
        Self {
            fruit_count: level.fruit_count(),
            ..Default::default()
        }
    }

    /// # Errors
    ///
    /// Fails if the JSON is malformed or describes an unplayable game.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self =
            serde_json::from_str(json).wrap_err("failed to parse settings")?;
        settings.validate()?;
        Ok(settings)
    }

    /// # Errors
    ///
    /// Fails if the file can't be read or holds invalid settings.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).wrap_err_with(|| {
            format!("failed to read settings from {}", path.display())
        })?;
        Self::from_json(&json)
    }

    #[must_use]
    pub fn snake_row(&self) -> i64 {
        self.snake.row.unwrap_or(self.height / 2)
    }

    /// # Errors
    ///
    /// Describes the first setting that makes the game unplayable.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.height > 0, "board height must be positive, got {}", self.height);
        ensure!(self.width > 0, "board width must be positive, got {}", self.width);
        ensure!(
            self.height
                .checked_mul(self.width)
                .is_some_and(|cells| cells <= MAX_CELLS),
            "a {}x{} board is larger than {MAX_CELLS} cells",
            self.width,
            self.height
        );

        let length = i64::from(self.snake.length);
        ensure!(length >= 1, "snake length must be at least 1");
        ensure!(
            self.snake.column >= length - 1 && self.snake.column < self.width,
            "a snake of length {length} with its head on column {} doesn't \
             fit a board {} wide",
            self.snake.column,
            self.width
        );
        let row = self.snake_row();
        ensure!(
            (0..self.height).contains(&row),
            "snake row {row} is off a board {} high",
            self.height
        );

        if self.fruit_count > 0 {
            ensure!(!self.fruits.is_empty(), "no fruit kinds configured");
            ensure!(
                self.fruits.iter().all(|kind| kind.worth >= 1),
                "every fruit must be worth at least 1"
            );
            ensure!(
                self.fruits.iter().any(|kind| kind.weight > 0),
                "fruit weights must not all be zero"
            );
        }

        Ok(())
    }
}

/// Difficulty presets offered by the main menu.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Easy,
    Medium,
    Hard,
}

impl Level {
    #[must_use]
    pub const fn fruit_count(self) -> usize {
        match self {
            Self::Easy => 3,
            Self::Medium => 2,
            Self::Hard => 1,
        }
    }

    /// How often a driver should tick at this level.
    #[must_use]
    pub const fn tick_interval(self) -> Duration {
        match self {
            Self::Easy => Duration::from_millis(300),
            Self::Medium => Duration::from_millis(200),
            Self::Hard => Duration::from_millis(120),
        }
    }

    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.snake.length, 3);
        assert_eq!(settings.snake.column, 3);
        assert_eq!(settings.snake_row(), 10);
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        assert!(Settings::new(0, 10).validate().is_err());
        assert!(Settings::new(10, -1).validate().is_err());
    }

    #[test]
    fn test_rejects_oversized_board() {
        let huge = 1_i64 << 32;
        assert!(Settings::new(huge, huge).validate().is_err());
        assert!(Settings::new(i64::MAX, 2).validate().is_err());
        assert!(Settings::new(2048, 1024).validate().is_err());
        assert!(Settings::new(1024, 1024).validate().is_ok());

        let json = format!(r#"{{ "height": {huge}, "width": {huge} }}"#);
        assert!(Settings::from_json(&json).is_err());
    }

    #[test]
    fn test_rejects_snake_off_the_board() {
        // default head column 3 doesn't exist on a 3 wide board
        assert!(Settings::new(3, 3).validate().is_err());

        let mut settings = Settings::new(10, 10);
        settings.snake.column = 1;
        assert!(settings.validate().is_err());

        settings.snake.column = 2;
        settings.snake.row = Some(10);
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_fruit() {
        let mut settings = Settings::default();
        settings.fruits = vec![FruitKind {
            worth:  0,
            weight: 1,
        }];
        assert!(settings.validate().is_err());

        settings.fruits = vec![FruitKind {
            worth:  2,
            weight: 0,
        }];
        assert!(settings.validate().is_err());

        // no fruit means the kinds don't matter
        settings.fruit_count = 0;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let settings =
            Settings::from_json(r#"{ "height": 12, "wrap": true }"#).unwrap();
        assert_eq!(settings.height, 12);
        assert_eq!(settings.width, 20);
        assert!(settings.wrap);
        assert_eq!(settings.snake_row(), 6);
    }

    #[test]
    fn test_from_json_rejects_negative_fruit_count() {
        assert!(Settings::from_json(r#"{ "fruit_count": -1 }"#).is_err());
        assert!(Settings::from_json(r#"{ "width": 0 }"#).is_err());
    }

    #[test]
    fn test_levels() {
        assert_eq!(Level::parse("HARD"), Some(Level::Hard));
        assert_eq!(Level::parse("impossible"), None);
        assert_eq!(Settings::for_level(Level::Easy).fruit_count, 3);
        assert!(
            Level::Hard.tick_interval() < Level::Easy.tick_interval()
        );
    }
}
