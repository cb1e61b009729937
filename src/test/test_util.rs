pub use dissimilar::diff as __diff;
use tempfile::NamedTempFile;

use crate::console_interface::render_grid_to_string;
use crate::core::{Direction, MapGrid, MoveOutcome, Player, step};
use crate::level::{Level, Score};

#[macro_export]
macro_rules! assert_eq_text {
    ($left:expr, $right:expr) => {
        assert_eq_text!($left, $right,)
    };
    ($left:expr, $right:expr, $($tt:tt)*) => {{
        let left = $left;
        let right = $right;
        if left != right {
            if left.trim() == right.trim() {
                std::eprintln!("Left:\n{:?}\n\nRight:\n{:?}\n\nWhitespace difference\n", left, right);
            } else {
                let diff = $crate::test::test_util::__diff(left, right);
                std::eprintln!("Left:\n{}\n\nRight:\n{}\n\nDiff:\n{}\n", left, right, $crate::test::test_util::format_diff(diff));
            }
            std::eprintln!($($tt)*);
            panic!("text differs");
        }
    }};
}

pub fn format_diff(chunks: Vec<dissimilar::Chunk>) -> String {
    let mut buf = String::new();
    for chunk in chunks {
        let formatted = match chunk {
            dissimilar::Chunk::Equal(text) => text.into(),
            dissimilar::Chunk::Delete(text) => format!("\x1b[41m{}\x1b[0m", text),
            dissimilar::Chunk::Insert(text) => format!("\x1b[42m{}\x1b[0m", text),
        };
        buf.push_str(&formatted);
    }
    buf
}

/// Grid-level test fixture: parses a map fixture and drives the move
/// resolver directly, without the session layer on top.
pub struct GameTestState {
    pub grid: MapGrid,
    pub player: Player,
}

impl GameTestState {
    pub fn new(level: &str) -> Self {
        let (grid, start) =
            MapGrid::parse(level.trim_matches('\n')).expect("test fixture must parse");
        Self {
            grid,
            player: Player::new(start),
        }
    }

    pub fn game_to_string(&self) -> String {
        render_grid_to_string(&self.grid).trim_matches('\n').into()
    }

    /// Applies a move that must be accepted.
    pub fn assert_move(&mut self, direction: Direction) -> MoveOutcome {
        let outcome = self.try_move(direction);
        assert!(
            outcome.accepted(),
            "expected accepted move {:?}, got {:?}, in map:\n{}",
            direction,
            outcome,
            self.game_to_string()
        );
        outcome
    }

    pub fn assert_moves(&mut self, directions: &[Direction]) {
        for &dir in directions {
            self.assert_move(dir);
        }
    }

    pub fn try_move(&mut self, direction: Direction) -> MoveOutcome {
        step(&mut self.grid, &mut self.player, direction)
    }

    pub fn assert_matches(&self, expected: &str) {
        let actual = self.game_to_string();
        assert_eq_text!(expected.trim_matches('\n'), actual.as_str().trim_matches('\n'));
    }
}

/// Writes a `{map, score}` record to a temp file and loads it as a level.
/// The file handle keeps the backing file alive for the test's duration.
pub fn temp_level(map: &str, score: Score) -> (NamedTempFile, Level) {
    let file = NamedTempFile::new().expect("failed to create temp level file");
    let record = serde_json::json!({
        "map": map,
        "score": { "time": score.time, "steps": score.steps },
    });
    std::fs::write(file.path(), record.to_string()).expect("failed to write temp level file");
    let level = Level::load_from_file(file.path()).expect("temp level must load");
    (file, level)
}
