//! gridplay - Conway's Game of Life and Snake in the terminal
//!
//! This library provides:
//! - Pure simulation engines with no I/O (life and snake modules)
//! - ratatui widgets drawing the engine grids (render module)
//! - Key mapping and async terminal drivers (input and modes modules)

pub mod config;
pub mod error;
mod grid;
pub mod input;
pub mod life;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod snake;
