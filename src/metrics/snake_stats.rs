use crate::snake::{CollisionType, SnakeEngine};

/// Records carried across the snake sessions of one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnakeStats {
    pub sessions_played: u32,
    pub high_score: u32,
    pub longest_snake: u32,
    /// Most ticks any session survived
    pub longest_run: u64,
    pub wall_hits: u32,
    pub self_hits: u32,
    pub last_collision: Option<CollisionType>,
}

impl SnakeStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a finished session into the records.
    ///
    /// Returns false and records nothing while the session is still running.
    pub fn record_session(&mut self, engine: &SnakeEngine) -> bool {
        let Some(collision) = engine.collision() else {
            return false;
        };

        self.sessions_played += 1;
        self.high_score = self.high_score.max(engine.score());
        self.longest_snake = self.longest_snake.max(engine.length());
        self.longest_run = self.longest_run.max(engine.ticks());
        match collision {
            CollisionType::Wall => self.wall_hits += 1,
            CollisionType::SelfCollision => self.self_hits += 1,
        }
        self.last_collision = Some(collision);

        true
    }

    /// Whether the running session beats every finished one so far
    pub fn is_record(&self, engine: &SnakeEngine) -> bool {
        engine.score() > self.high_score
    }
}
