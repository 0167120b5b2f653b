use crate::core::{GameState, Vec2};
use crate::models::GameRenderState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

/// Parses a text grid: 'O' is a lit cell, anything else is unlit.
/// Short rows are padded to the widest line with unlit cells.
pub fn parse_grid(s: &str) -> GameState {
    let mut grid: Vec<Vec<bool>> = Vec::new();
    let max_width = s.lines().map(|line| line.len()).max().unwrap_or(0);
    for line in s.lines() {
        if line.is_empty() {
            continue;
        }
        let mut row: Vec<bool> = line.chars().map(|ch| ch == 'O').collect();
        // Pad row to max width with unlit cells
        while row.len() < max_width {
            row.push(false);
        }
        grid.push(row);
    }
    GameState { grid }
}

pub fn render_grid_to_string(game: &GameState) -> String {
    let mut result = String::new();
    for row in &game.grid {
        for &lit in row {
            result.push(if lit { 'O' } else { '.' });
        }
        result.push('\n');
    }
    result
}

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
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        // Game area
        let game_text = render_grid_to_text(&state.game, state.cursor, state.won);
        let game_paragraph = Paragraph::new(game_text)
            .block(Block::default().borders(Borders::ALL).title("Lights Out"))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        // Instructions
        let instructions = if state.won {
            "🎉 All lights on — you win! Press any key to quit."
        } else {
            "Controls: WASD or Arrow keys to move, Space/Enter to toggle, Q to quit"
        };

        let instructions = if let Some(err) = &state.error {
            format!("{} | Error: {}", instructions, err)
        } else {
            instructions.to_string()
        };

        let instructions = if let Some(flipped) = state.last_flipped {
            format!("{} | Last: flipped {} cells", instructions, flipped)
        } else {
            instructions
        };

        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[1]);
    })?;
    Ok(())
}

fn render_grid_to_text(game: &GameState, cursor: Vec2, won: bool) -> Text<'static> {
    let mut lines = Vec::new();
    for (i, row) in game.grid.iter().enumerate() {
        let mut spans = Vec::new();
        for (j, &lit) in row.iter().enumerate() {
            let pos = Vec2 {
                i: i as i32,
                j: j as i32,
            };
            let mut style = if lit {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            if pos == cursor && !won {
                style = style.bg(Color::Blue);
            }
            spans.push(Span::styled(if lit { " O " } else { " . " }, style));
        }
        lines.push(Line::from(spans));
    }
    Text::from(lines)
}

#[derive(Clone, Copy)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

pub enum ConsoleInput {
    MoveCursor(Direction),
    Activate,
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
                KeyCode::Char(' ') | KeyCode::Enter => ConsoleInput::Activate,
                KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                    ConsoleInput::MoveCursor(Direction::Up)
                }
                KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
                    ConsoleInput::MoveCursor(Direction::Down)
                }
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                    ConsoleInput::MoveCursor(Direction::Left)
                }
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                    ConsoleInput::MoveCursor(Direction::Right)
                }
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}
