use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square grid, in cells
    pub grid_size: usize,
    /// Milliseconds between two game ticks
    pub tick_period_ms: u64,
    /// Initial length of the snake
    pub initial_snake_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            tick_period_ms: 120,
            initial_snake_length: 3,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom grid size
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10)
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }

    /// Total number of cells on the grid
    pub fn cell_count(&self) -> usize {
        self.grid_size * self.grid_size
    }

    /// Load a configuration from a JSON file. Missing fields fall back to defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: GameConfig = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        Ok(config)
    }

    /// Validate configuration parameters
    ///
    /// The initial snake is laid out horizontally from the centre of the grid
    /// towards the left edge, so it has to fit in the left half plus the
    /// centre column.
    pub fn validate(&self) -> Result<(), String> {
        if self.grid_size < 2 {
            return Err(format!("grid_size must be at least 2, got {}", self.grid_size));
        }

        if self.grid_size > i32::MAX as usize {
            return Err(format!("grid_size is too large: {}", self.grid_size));
        }

        if self.tick_period_ms == 0 {
            return Err("tick_period_ms must be at least 1".to_string());
        }

        if self.initial_snake_length == 0 {
            return Err("initial_snake_length must be at least 1".to_string());
        }

        let room = self.grid_size / 2 + 1;
        if self.initial_snake_length > room {
            return Err(format!(
                "initial_snake_length ({}) does not fit a grid of size {}",
                self.initial_snake_length, self.grid_size
            ));
        }

        Ok(())
    }
}
