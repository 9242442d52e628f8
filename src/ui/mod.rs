//! egui/eframe front end
//!
//! A size dialog, the clickable grid, a side panel with scores and search
//! statistics, and the game over window.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::RunlineApp;
pub use game_state::{AiState, GameOutcome, GameState, MoveError, AI_MOVE_DELAY};
