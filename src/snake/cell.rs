/// Contents of one square of the snake board.
///
/// [`Cell::code`] gives the integer encoding of the board: `0` empty, `-1`
/// horizontal wall, `-2` vertical wall, `-5` food, and a positive number for
/// a body segment's remaining lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    HorizontalWall,
    VerticalWall,
    Food,
    /// Body segment with the given number of ticks left
    Body(u32),
}

impl Cell {
    pub fn code(self) -> i32 {
        match self {
            Cell::Empty => 0,
            Cell::HorizontalWall => -1,
            Cell::VerticalWall => -2,
            Cell::Food => -5,
            Cell::Body(ttl) => i32::try_from(ttl).unwrap_or(i32::MAX),
        }
    }

    /// Decode a board value. Unknown negative codes have no meaning.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Cell::Empty),
            -1 => Some(Cell::HorizontalWall),
            -2 => Some(Cell::VerticalWall),
            -5 => Some(Cell::Food),
            n if n > 0 => Some(Cell::Body(n as u32)),
            _ => None,
        }
    }

    pub fn is_wall(self) -> bool {
        matches!(self, Cell::HorizontalWall | Cell::VerticalWall)
    }

    pub fn is_body(self) -> bool {
        matches!(self, Cell::Body(_))
    }

    /// One tick older; a segment with one tick left becomes empty
    pub fn aged(self) -> Self {
        match self {
            Cell::Body(ttl) if ttl > 1 => Cell::Body(ttl - 1),
            Cell::Body(_) => Cell::Empty,
            other => other,
        }
    }
}
