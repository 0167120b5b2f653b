mod model_helpers;
mod models;
mod update;

pub use models::{GameConfig, GameState, GameUpdate, UserAction, Vec2};
pub use update::{new_game, step};
