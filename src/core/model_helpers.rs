use crate::core::grid::MapGrid;
use crate::core::models::{BaseKind, Occupant, Position};

impl MapGrid {
    /// The level is won when every goal cell holds a box, short-circuiting
    /// on the first unmet goal. Plain player moves cannot change goal
    /// occupancy, so this only needs to run after an accepted push.
    pub fn is_won(&self) -> bool {
        for row in self.rows() {
            for cell in row {
                if cell.base == BaseKind::Goal && cell.occupant != Some(Occupant::Box) {
                    return false;
                }
            }
        }
        true
    }

    pub fn count_goals(&self) -> usize {
        self.rows()
            .iter()
            .flatten()
            .filter(|cell| cell.base == BaseKind::Goal)
            .count()
    }

    pub fn count_boxes_on_goals(&self) -> usize {
        self.rows()
            .iter()
            .flatten()
            .filter(|cell| cell.base == BaseKind::Goal && cell.occupant == Some(Occupant::Box))
            .count()
    }

    pub fn player_position(&self) -> Option<Position> {
        for (y, row) in self.rows().iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if cell.occupant == Some(Occupant::Player) {
                    return Some(Position {
                        x: x as i32,
                        y: y as i32,
                    });
                }
            }
        }
        None
    }
}
