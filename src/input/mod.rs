pub mod handler;

pub use handler::{InputHandler, LifeKeyAction, SnakeKeyAction};
