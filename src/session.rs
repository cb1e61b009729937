use std::time::Instant;

use crate::core::{Direction, MapGrid, MoveOutcome, Player, step};
use crate::level::Level;

/// One playthrough of a level: a deep clone of the template grid plus the
/// step counter and start instant. Restarting means starting a fresh
/// `PlayState` from the same template.
#[derive(Clone, Debug)]
pub struct PlayState {
    pub grid: MapGrid,
    pub player: Player,
    steps: u32,
    started_at: Instant,
    won: bool,
}

impl PlayState {
    pub fn start(level: &Level) -> PlayState {
        PlayState {
            grid: level.grid.clone(),
            player: Player::new(level.player_start()),
            steps: 0,
            started_at: Instant::now(),
            won: false,
        }
    }

    /// Applies one directional input. Steps count only accepted moves, and
    /// the win check runs only after a push, since plain player moves cannot
    /// change goal occupancy. A won session no longer accepts moves.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.won {
            return MoveOutcome::Rejected;
        }

        let outcome = step(&mut self.grid, &mut self.player, direction);
        if outcome.accepted() {
            self.steps += 1;
        }
        if outcome == MoveOutcome::PlayerAndBoxMove {
            self.won = self.grid.is_won();
        }
        outcome
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.started_at.elapsed().as_secs() as u32
    }
}
