//! Conway's Game of Life
//!
//! Pure simulation state with no I/O; the terminal driver lives in
//! `modes::life`.

pub mod config;
pub mod engine;

pub use config::LifeConfig;
pub use engine::{BORDER_INSET, CellChange, Change, LifeEngine, TickReport};
