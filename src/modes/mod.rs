pub mod life;
pub mod snake;
pub mod terminal;

pub use life::LifeMode;
pub use snake::SnakeMode;
pub use terminal::terminal_size;
