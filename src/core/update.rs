use crate::core::{GameConfig, GameState, GameUpdate, UserAction, Vec2};
use rand::Rng;

/// Creates a fresh grid where each cell is independently lit with
/// probability `chance_light_starts_on`.
pub fn new_game(config: &GameConfig) -> GameState {
    let mut rng = rand::thread_rng();
    let grid = (0..config.nrows)
        .map(|_| {
            (0..config.ncols)
                .map(|_| rng.gen_bool(config.chance_light_starts_on))
                .collect()
        })
        .collect();
    GameState { grid }
}

pub fn step(game: &GameState, action: UserAction) -> GameUpdate {
    let UserAction::Activate(target) = action;

    if !game.in_bounds(target) {
        return GameUpdate::Error("Cannot activate a cell out of bounds".to_string());
    }

    let mut new_grid = game.grid.clone();
    let mut flipped = 0;
    for pos in toggle_targets(target) {
        if game.in_bounds(pos) {
            let cell = &mut new_grid[pos.i as usize][pos.j as usize];
            *cell = !*cell;
            flipped += 1;
        }
    }

    GameUpdate::NextState(GameState { grid: new_grid }, flipped)
}

/// The activated cell and its four orthogonal neighbors. Neighbors may
/// land outside the grid; `step` skips those.
fn toggle_targets(target: Vec2) -> [Vec2; 5] {
    let Vec2 { i, j } = target;
    [
        Vec2 { i, j },
        Vec2 { i: i - 1, j },
        Vec2 { i: i + 1, j },
        Vec2 { i, j: j + 1 },
        Vec2 { i, j: j - 1 },
    ]
}
