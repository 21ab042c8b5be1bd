use super::direction::Direction;

/// A position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Move one cell in a direction, or None when that leaves the top/left edge
    pub fn moved_in_direction(&self, direction: Direction) -> Option<Self> {
        let (dr, dc) = direction.delta();
        Some(Self {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }
}

/// The moving head of the snake; the body lives on the board
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    pub head: Position,
    pub heading: Direction,
    /// Lifetime given to each new head segment
    pub length: u32,
    /// Set for the tick on which food was eaten
    pub growing: bool,
}

impl Actor {
    pub fn new(head: Position, heading: Direction, length: u32) -> Self {
        Self {
            head,
            heading,
            length,
            growing: false,
        }
    }
}

/// What the snake ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Ended(CollisionType),
}
