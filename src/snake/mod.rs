//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.

pub mod cell;
pub mod config;
pub mod direction;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use cell::Cell;
pub use config::SnakeConfig;
pub use direction::Direction;
pub use engine::{SnakeEngine, TickOutcome};
pub use state::{Actor, CollisionType, Position, SessionState};
