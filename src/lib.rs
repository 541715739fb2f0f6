//! Grid Snake - a single-player snake game for the terminal
//!
//! This library provides:
//! - Core game logic (game module): movement, collisions, food and scores
//! - Session lifecycle and tick scheduling (session module)
//! - Durable best-score storage (storage module)
//! - TUI rendering and keyboard input (render and input modules)
//! - The interactive terminal mode (modes module)

pub mod game;
pub mod input;
pub mod modes;
pub mod render;
pub mod session;
pub mod storage;
