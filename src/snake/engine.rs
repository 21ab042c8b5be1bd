use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, info, trace, warn};

use super::{
    cell::Cell,
    config::SnakeConfig,
    direction::Direction,
    state::{Actor, CollisionType, Position, SessionState},
};
use crate::error::{EngineError, EngineResult};
use crate::grid;

const MIN_ROWS: usize = 3;
const MIN_COLS: usize = 3;

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Snake advanced into an empty cell
    Moved,
    /// Snake ate food and keeps its tail this tick
    Grew,
    /// Snake hit something; the session is over
    Collided(CollisionType),
}

impl TickOutcome {
    pub fn is_terminal(self) -> bool {
        matches!(self, TickOutcome::Collided(_))
    }
}

/// The snake engine that handles all game logic.
///
/// The body is not stored as a list of segments: every body cell on the
/// board carries its remaining lifetime, the head is written with the
/// current length and all segments age by one each tick.
pub struct SnakeEngine {
    config: SnakeConfig,
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    actor: Actor,
    state: SessionState,
    score: u32,
    ticks: u64,
    rng: StdRng,
}

impl SnakeEngine {
    /// Build a board and start the first session
    pub fn new(rows: usize, cols: usize, config: SnakeConfig) -> EngineResult<Self> {
        config.validate()?;

        if rows < MIN_ROWS || cols < MIN_COLS {
            return Err(EngineError::GridTooSmall {
                rows,
                cols,
                min_rows: MIN_ROWS,
                min_cols: MIN_COLS,
            });
        }

        let cells = grid::filled(rows, cols, Cell::Empty)?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let actor = Self::initial_actor(rows, cols, &config);
        let mut engine = Self {
            config,
            rows,
            cols,
            cells,
            actor,
            state: SessionState::Running,
            score: 0,
            ticks: 0,
            rng,
        };
        engine.restart();

        Ok(engine)
    }

    /// Wipe the board and start a fresh session
    pub fn restart(&mut self) {
        self.build_walls();
        self.actor = Self::initial_actor(self.rows, self.cols, &self.config);
        self.state = SessionState::Running;
        self.score = 0;
        self.ticks = 0;
        self.spawn_food();

        info!(rows = self.rows, cols = self.cols, "snake session started");
    }

    fn initial_actor(rows: usize, cols: usize, config: &SnakeConfig) -> Actor {
        Actor::new(
            Position::new(rows / 2, cols / 3),
            Direction::Right,
            config.initial_length,
        )
    }

    fn build_walls(&mut self) {
        let (rows, cols) = (self.rows, self.cols);
        self.cells.fill(Cell::Empty);

        for col in 0..cols {
            self.cells[col] = Cell::HorizontalWall;
            self.cells[(rows - 1) * cols + col] = Cell::HorizontalWall;
        }
        for row in 1..rows - 1 {
            self.cells[row * cols] = Cell::VerticalWall;
            self.cells[row * cols + cols - 1] = Cell::VerticalWall;
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Row-major board contents
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn heading(&self) -> Direction {
        self.actor.heading
    }

    pub fn length(&self) -> u32 {
        self.actor.length
    }

    /// Food eaten this session
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_ended(&self) -> bool {
        matches!(self.state, SessionState::Ended(_))
    }

    pub fn collision(&self) -> Option<CollisionType> {
        match self.state {
            SessionState::Ended(collision) => Some(collision),
            SessionState::Running => None,
        }
    }

    pub fn food_position(&self) -> Option<Position> {
        self.cells
            .iter()
            .position(|&cell| cell == Cell::Food)
            .map(|idx| self.position_of(idx))
    }

    /// Number of board cells currently holding a body segment
    pub fn body_len(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_body()).count()
    }

    /// Turn the snake. A 180-degree reversal is silently ignored.
    pub fn set_heading(&mut self, direction: Direction) {
        if self.is_ended() {
            return;
        }
        if !self.actor.heading.is_opposite(direction) {
            self.actor.heading = direction;
        }
    }

    /// Advance the snake by one cell
    pub fn tick(&mut self) -> TickOutcome {
        if let SessionState::Ended(collision) = self.state {
            return TickOutcome::Collided(collision);
        }

        let next = self
            .actor
            .head
            .moved_in_direction(self.actor.heading)
            .filter(|pos| pos.row < self.rows && pos.col < self.cols);
        let Some(next) = next else {
            return self.end(CollisionType::Wall);
        };

        let idx = self.index(next);
        match self.cells[idx] {
            Cell::Empty => {}
            Cell::Food => {
                self.actor.length = self.actor.length.saturating_add(1);
                self.actor.growing = true;
                self.score += 1;
                self.spawn_food();
            }
            Cell::HorizontalWall | Cell::VerticalWall => return self.end(CollisionType::Wall),
            Cell::Body(_) => return self.end(CollisionType::SelfCollision),
        }

        self.cells[idx] = Cell::Body(self.actor.length);
        self.actor.head = next;

        if !self.actor.growing {
            for cell in &mut self.cells {
                *cell = cell.aged();
            }
        }
        let grew = std::mem::take(&mut self.actor.growing);
        self.ticks += 1;

        trace!(row = next.row, col = next.col, length = self.actor.length, "snake tick");

        if grew {
            TickOutcome::Grew
        } else {
            TickOutcome::Moved
        }
    }

    fn end(&mut self, collision: CollisionType) -> TickOutcome {
        self.state = SessionState::Ended(collision);
        info!(?collision, score = self.score, ticks = self.ticks, "snake session ended");
        TickOutcome::Collided(collision)
    }

    /// Drop food on a random empty cell by rejection sampling
    fn spawn_food(&mut self) -> Option<Position> {
        if !self.cells.contains(&Cell::Empty) {
            warn!("no empty cell left for food");
            return None;
        }

        loop {
            let idx = self.rng.gen_range(0..self.cells.len());
            if self.cells[idx] == Cell::Empty {
                self.cells[idx] = Cell::Food;
                let pos = self.position_of(idx);
                debug!(row = pos.row, col = pos.col, "placed food");
                return Some(pos);
            }
        }
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.cols + pos.col
    }

    fn position_of(&self, idx: usize) -> Position {
        Position::new(idx / self.cols, idx % self.cols)
    }
}
