mod grid;
mod model_helpers;
mod models;
mod update;

pub use grid::MapGrid;
pub use models::{
    BaseKind, Cell, Direction, HorizontalFacing, MoveOutcome, Occupant, Player, Position,
    VerticalFacing,
};
pub use update::step;
