pub mod life_stats;
pub mod snake_stats;

pub use life_stats::LifeStats;
pub use snake_stats::SnakeStats;
