use crate::core::{GameConfig, GameState, Vec2};

impl GameState {
    /// The game is won when every light is on. The win polarity is
    /// all-lit, not the traditional all-dark.
    pub fn is_won(&self) -> bool {
        for row in &self.grid {
            for &lit in row {
                if !lit {
                    return false;
                }
            }
        }
        true
    }

    pub fn height(&self) -> i32 {
        self.grid.len() as i32
    }

    pub fn width(&self) -> i32 {
        if self.grid.is_empty() {
            0
        } else {
            self.grid[0].len() as i32
        }
    }

    pub fn in_bounds(&self, pos: Vec2) -> bool {
        pos.i >= 0 && pos.i < self.height() && pos.j >= 0 && pos.j < self.width()
    }
}

impl GameConfig {
    pub fn new(
        nrows: usize,
        ncols: usize,
        chance_light_starts_on: f64,
    ) -> Result<GameConfig, String> {
        if nrows == 0 {
            return Err("nrows must be positive".to_string());
        }
        if ncols == 0 {
            return Err("ncols must be positive".to_string());
        }
        if !(0.0..=1.0).contains(&chance_light_starts_on) {
            return Err(format!(
                "chance_light_starts_on must be within [0, 1], got {}",
                chance_light_starts_on
            ));
        }
        Ok(GameConfig {
            nrows,
            ncols,
            chance_light_starts_on,
        })
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            nrows: 3,
            ncols: 3,
            chance_light_starts_on: 0.50,
        }
    }
}
