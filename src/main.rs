// Console driver for the boxban core.
// Controls: WASD or arrow keys to move, R to restart, N for next level, Q to quit.
// Levels are JSON records ({"map": ..., "score": ...}) read from a directory.

use std::io;

use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::warn;

use boxban::console_interface::{
    ConsoleInput, cleanup_terminal, handle_input, render_game, setup_terminal,
};
use boxban::core::MoveOutcome;
use boxban::level::Level;
use boxban::models::GameRenderState;
use boxban::session::PlayState;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let levels_directory = std::env::args().nth(1).unwrap_or("levels".to_string());
    let mut levels = Level::load_directory(&levels_directory)?;
    if levels.is_empty() {
        return Err(format!("no loadable levels in {}", levels_directory).into());
    }

    let mut terminal = setup_terminal()?;
    let result = run(&mut levels, &mut terminal);
    cleanup_terminal()?;
    result
}

fn run(
    levels: &mut [Level],
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut current = 0usize;
    let mut play = PlayState::start(&levels[current]);
    let mut last_outcome: Option<MoveOutcome> = None;
    let mut error: Option<String> = None;

    loop {
        let state = GameRenderState {
            level_number: current + 1,
            level_count: levels.len(),
            steps: play.steps(),
            elapsed_seconds: play.elapsed_seconds(),
            goals_filled: play.grid.count_boxes_on_goals(),
            goals_total: play.grid.count_goals(),
            best: levels[current].score,
            won: play.is_won(),
            last_outcome,
            error: error.clone(),
        };
        render_game(terminal, &play.grid, &state)?;

        match handle_input()? {
            ConsoleInput::Move(direction) => {
                let outcome = play.apply_move(direction);
                last_outcome = Some(outcome);
                // The winning push records the score exactly once; a won
                // session rejects further moves.
                if outcome == MoveOutcome::PlayerAndBoxMove && play.is_won() {
                    if let Err(e) =
                        levels[current].update_score(play.elapsed_seconds(), play.steps())
                    {
                        warn!(error = %e, "failed to persist score");
                        error = Some(e.to_string());
                    }
                }
            }
            ConsoleInput::Restart => {
                play = PlayState::start(&levels[current]);
                last_outcome = None;
                error = None;
            }
            ConsoleInput::NextLevel => {
                current = (current + 1) % levels.len();
                play = PlayState::start(&levels[current]);
                last_outcome = None;
                error = None;
            }
            ConsoleInput::Quit => break,
            ConsoleInput::Timeout | ConsoleInput::Unknown => {}
        }
    }
    Ok(())
}
