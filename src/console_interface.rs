use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::core::{BaseKind, Direction, MapGrid, Occupant};
use crate::models::GameRenderState;

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    grid: &MapGrid,
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        let title = format!("Level {}/{}", state.level_number, state.level_count);
        let game_paragraph = Paragraph::new(render_grid_to_string(grid))
            .block(Block::default().borders(Borders::ALL).title(title))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        let status = if state.won {
            format!(
                "You won in {}s and {} steps! Best: {}s / {} steps. N: next level, R: replay, Q: quit",
                state.elapsed_seconds, state.steps, state.best.time, state.best.steps,
            )
        } else {
            format!(
                "Goals {}/{} | Steps {} | Time {}s | Arrows/WASD move, R restart, Q quit",
                state.goals_filled, state.goals_total, state.steps, state.elapsed_seconds,
            )
        };

        let status = if let Some(err) = &state.error {
            format!("{} | Error: {}", status, err)
        } else {
            status
        };

        let status = if let Some(outcome) = &state.last_outcome {
            format!("{} | Last: {:?}", status, outcome)
        } else {
            status
        };

        let status_paragraph = Paragraph::new(status)
            .block(Block::default().borders(Borders::ALL).title("Status"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(status_paragraph, chunks[1]);
    })?;
    Ok(())
}

/// Text rendering of a live grid. Uses the persistence symbols plus `*` for
/// a box on a goal and `+` for the player on a goal; those two appear only
/// during play and never round-trip through the level file.
pub fn render_grid_to_string(grid: &MapGrid) -> String {
    let mut result = String::new();
    for row in grid.rows() {
        for cell in row {
            let ch = match (cell.base, cell.occupant) {
                (BaseKind::Floor, None) => ' ',
                (BaseKind::Floor, Some(Occupant::Wall)) => 'W',
                (BaseKind::Floor, Some(Occupant::Box)) => 'B',
                (BaseKind::Floor, Some(Occupant::Player)) => 'P',
                (BaseKind::Goal, None) => 'G',
                (BaseKind::Goal, Some(Occupant::Box)) => '*',
                (BaseKind::Goal, Some(Occupant::Player)) => '+',
                (BaseKind::Goal, Some(Occupant::Wall)) => 'W',
            };
            result.push(ch);
        }
        result.push('\n');
    }
    result
}

pub enum ConsoleInput {
    Move(Direction),
    Restart,
    NextLevel,
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
                KeyCode::Char('r') | KeyCode::Char('R') => ConsoleInput::Restart,
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Enter => {
                    ConsoleInput::NextLevel
                }
                KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                    ConsoleInput::Move(Direction::Up)
                }
                KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
                    ConsoleInput::Move(Direction::Down)
                }
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                    ConsoleInput::Move(Direction::Left)
                }
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                    ConsoleInput::Move(Direction::Right)
                }
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}
