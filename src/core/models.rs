#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vec2 {
    pub i: i32,
    pub j: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserAction {
    Activate(Vec2),
}

/// Fixed for the lifetime of a game session; only consulted during
/// grid initialization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub nrows: usize,
    pub ncols: usize,
    pub chance_light_starts_on: f64,
}

/// `grid[i][j]` is true when the light at row i, column j is lit.
/// Invariant: every row has length ncols.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    pub grid: Vec<Vec<bool>>,
}

#[derive(Debug)]
pub enum GameUpdate {
    /// The new grid plus the number of cells the activation flipped.
    NextState(GameState, usize),
    Error(String),
}
