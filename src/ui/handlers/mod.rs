//! Handler modules for managing user input and game state.

mod game_handler;
mod input_handler;

pub use game_handler::GameHandler;
pub use input_handler::InputHandler;
