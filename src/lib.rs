pub mod args;
pub mod board;
pub mod evaluator;
pub mod game;
pub mod logging;
pub mod snapshot;
pub mod ui;
