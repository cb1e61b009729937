use crate::core::MoveOutcome;
use crate::level::Score;

/// Everything the status bar needs, computed by the driver each frame.
pub struct GameRenderState {
    pub level_number: usize,
    pub level_count: usize,
    pub steps: u32,
    pub elapsed_seconds: u32,
    pub goals_filled: usize,
    pub goals_total: usize,
    pub best: Score,
    pub won: bool,
    pub last_outcome: Option<MoveOutcome>,
    pub error: Option<String>,
}
