pub mod life_view;
pub mod renderer;
pub mod snake_view;

pub use life_view::{LifeView, life_glyph};
pub use renderer::Renderer;
pub use snake_view::{SnakeView, snake_glyph};
