use crate::core::{GameState, Vec2};

pub struct GameRenderState {
    pub game: GameState,
    pub cursor: Vec2,
    pub won: bool,
    pub error: Option<String>,
    pub last_flipped: Option<usize>,
}
