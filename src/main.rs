// Lights Out in the terminal, with ratatui.
// Controls: W/A/S/D or arrow keys move the cursor, Space/Enter toggles,
// Q to quit. The game is won when every light is on.

use lights_out::console_interface::ConsoleInput::*;
use lights_out::console_interface::{
    Direction, cleanup_terminal, handle_input, render_game, setup_terminal,
};
use lights_out::core::{GameConfig, GameState, GameUpdate, UserAction, Vec2, new_game, step};
use lights_out::models::GameRenderState;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = config_from_args()?;
    let game_state = new_game(&config);

    let mut terminal = setup_terminal()?;
    run_interactive(game_state, &mut terminal)?;

    Ok(())
}

/// Positional arguments: `lights-out [nrows] [ncols] [chance]`, each
/// falling back to the default when omitted. Rejected before the
/// terminal enters raw mode.
fn config_from_args() -> Result<GameConfig, Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let defaults = GameConfig::default();

    let nrows = match args.first() {
        Some(s) => s.parse()?,
        None => defaults.nrows,
    };
    let ncols = match args.get(1) {
        Some(s) => s.parse()?,
        None => defaults.ncols,
    };
    let chance = match args.get(2) {
        Some(s) => s.parse()?,
        None => defaults.chance_light_starts_on,
    };

    Ok(GameConfig::new(nrows, ncols, chance)?)
}

fn run_interactive(
    game_state: GameState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut game_state = game_state;
    let mut cursor = Vec2 { i: 0, j: 0 };

    // Initial render; a maximum-chance grid can start already won.
    let first_render = GameRenderState {
        game: game_state.clone(),
        cursor,
        won: game_state.is_won(),
        error: None,
        last_flipped: None,
    };
    render_game(terminal, &first_render)?;
    if first_render.won {
        wait_for_key();
        cleanup_terminal()?;
        return Ok(());
    }

    loop {
        match handle_input() {
            Ok(Quit) => break,
            Ok(MoveCursor(dir)) => {
                cursor = moved_cursor(&game_state, cursor, dir);
                let to_render = GameRenderState {
                    game: game_state.clone(),
                    cursor,
                    won: false,
                    error: None,
                    last_flipped: None,
                };
                render_game(terminal, &to_render)?;
            }
            Ok(Activate) => {
                let game_update = step(&game_state, UserAction::Activate(cursor));
                let mut flipped = None;
                if let GameUpdate::NextState(new_state, cells_flipped) = &game_update {
                    game_state = new_state.clone();
                    flipped = Some(*cells_flipped);
                }
                let to_render = GameRenderState {
                    game: game_state.clone(),
                    cursor,
                    won: game_state.is_won(),
                    error: match game_update {
                        GameUpdate::Error(err) => Some(err),
                        _ => None,
                    },
                    last_flipped: flipped,
                };
                render_game(terminal, &to_render)?;

                if to_render.won {
                    // Keep showing the win screen until user inputs
                    wait_for_key();
                    break;
                }
            }
            Ok(_) => {
                // No input, continue polling
            }
            Err(_) => {
                println!("error reading input");
                break;
            }
        }
    }

    cleanup_terminal()?;

    Ok(())
}

/// Cursor movement is clamped at the grid edges.
fn moved_cursor(game: &GameState, cursor: Vec2, dir: Direction) -> Vec2 {
    let (di, dj) = match dir {
        Direction::Up => (-1, 0),
        Direction::Down => (1, 0),
        Direction::Left => (0, -1),
        Direction::Right => (0, 1),
    };
    let next = Vec2 {
        i: cursor.i + di,
        j: cursor.j + dj,
    };
    if game.in_bounds(next) { next } else { cursor }
}

fn wait_for_key() {
    loop {
        match handle_input() {
            Ok(Timeout) => {}
            Ok(_) => break,
            Err(_) => {
                println!("error reading input");
                break;
            }
        }
    }
}
