#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn stepped(self, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Grid delta for one step: origin is top-left, x grows right, y grows down.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Terrain layer of a cell. Fixed at parse time, never mutated afterwards.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum BaseKind {
    Floor,
    Goal,
}

/// Entity layer of a cell. Walls never move; boxes and the player do.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Occupant {
    Wall,
    Box,
    Player,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Cell {
    pub base: BaseKind,
    pub occupant: Option<Occupant>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum VerticalFacing {
    Up,
    #[default]
    Down,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum HorizontalFacing {
    Left,
    #[default]
    Right,
}

/// The single player of a level. Facing is presentation state only (sprite
/// selection in a graphical frontend); the movement rules never read it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Player {
    pub position: Position,
    pub vertical_facing: VerticalFacing,
    pub horizontal_facing: HorizontalFacing,
}

impl Player {
    pub fn new(position: Position) -> Player {
        Player {
            position,
            vertical_facing: VerticalFacing::default(),
            horizontal_facing: HorizontalFacing::default(),
        }
    }

    /// Updates the facing axis matching `direction`. Called on every
    /// directional input, whether or not the move is accepted.
    pub fn face(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.vertical_facing = VerticalFacing::Up,
            Direction::Down => self.vertical_facing = VerticalFacing::Down,
            Direction::Left => self.horizontal_facing = HorizontalFacing::Left,
            Direction::Right => self.horizontal_facing = HorizontalFacing::Right,
        }
    }
}

/// Result of resolving one directional input. Rejection is a normal outcome,
/// not an error: blocked and out-of-bounds moves leave the level untouched.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MoveOutcome {
    Rejected,
    PlayerMove,
    PlayerAndBoxMove,
}

impl MoveOutcome {
    pub fn accepted(self) -> bool {
        !matches!(self, MoveOutcome::Rejected)
    }
}
