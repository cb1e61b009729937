use crate::core::grid::MapGrid;
use crate::core::models::{Direction, MoveOutcome, Occupant, Player};

/// Resolves one directional input against the grid, mutating it in place.
///
/// Every bounds and occupancy check happens before any mutation, so a
/// rejected move leaves grid and player position untouched. Exactly one of
/// {player move, player-and-box move, no-op} happens per call.
pub fn step(grid: &mut MapGrid, player: &mut Player, direction: Direction) -> MoveOutcome {
    // Facing is cosmetic and tracks the attempt, not the result.
    player.face(direction);

    let player_next = player.position.stepped(direction);
    if !grid.contains(player_next) {
        return MoveOutcome::Rejected;
    }

    match grid.occupant(player_next) {
        None => {
            grid.move_occupant(player.position, player_next);
            player.position = player_next;
            MoveOutcome::PlayerMove
        }
        Some(Occupant::Box) => {
            // Pushing is all-or-nothing: a blocked box blocks the player too.
            let box_next = player_next.stepped(direction);
            if !grid.contains(box_next) || grid.occupant(box_next).is_some() {
                return MoveOutcome::Rejected;
            }
            grid.move_occupant(player_next, box_next);
            grid.move_occupant(player.position, player_next);
            player.position = player_next;
            MoveOutcome::PlayerAndBoxMove
        }
        Some(Occupant::Wall) | Some(Occupant::Player) => MoveOutcome::Rejected,
    }
}
