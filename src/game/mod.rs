//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Rendering and persistence are reached only through `BoardView` snapshots and
//! the `ScoreStore` trait.

pub mod action;
pub mod config;
pub mod engine;
pub mod food;
pub mod score;
pub mod state;
pub mod view;

// Re-export commonly used types
pub use action::Direction;
pub use config::GameConfig;
pub use engine::{GameEngine, TickOutcome};
pub use food::FoodPlacer;
pub use score::{BEST_SCORE_KEY, ScoreTracker};
pub use state::{CollisionType, GameState, GameStatus, Position, Snake};
pub use view::{BoardView, CellView, Overlay};
