#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveIntent {
    North,
    South,
    West,
    East,
}

impl MoveIntent {
    pub const fn delta(self) -> (i32, i32) {
        match self {
            MoveIntent::North => (0, -1),
            MoveIntent::South => (0, 1),
            MoveIntent::West => (-1, 0),
            MoveIntent::East => (1, 0),
        }
    }

    /// Collapses raw axis input to a single cardinal intent. Only one axis
    /// is honored per tick; when both are pressed the vertical axis wins.
    pub fn from_axes(dx: i32, dy: i32) -> Option<MoveIntent> {
        if dy < 0 {
            Some(MoveIntent::North)
        } else if dy > 0 {
            Some(MoveIntent::South)
        } else if dx < 0 {
            Some(MoveIntent::West)
        } else if dx > 0 {
            Some(MoveIntent::East)
        } else {
            None
        }
    }
}
