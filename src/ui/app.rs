use std::{fmt::Display, io::Stdout};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use tracing::info;

use crate::game::Game;

use super::types::{Focus, LogBuffer};

/// Main application state container.
pub struct App {
    pub(in crate::ui) game: Game,
    pub(in crate::ui) focus: Focus,
    pub(in crate::ui) cursor: usize,
    /// Display position of the highlighted move-list entry.
    pub(in crate::ui) selected_move: usize,
    pub(in crate::ui) logs: LogBuffer,
    /// Area of the last drawn frame, used to resolve mouse clicks.
    pub(in crate::ui) frame_area: Rect,
}

impl App {
    pub fn new(logs: LogBuffer, descending: bool) -> Self {
        let mut app = Self {
            game: Game::with_descending(descending),
            focus: Focus::Board,
            cursor: 4,
            selected_move: 0,
            logs,
            frame_area: Rect::default(),
        };
        super::handlers::GameHandler::new(&mut app).sync_selection();
        app
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        info!("UI started");
        self.log("New game: X moves first");

        loop {
            self.frame_area = terminal.draw(|f| self.draw(f))?.area;

            let exit = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    super::handlers::InputHandler::new(self).handle_key(key)
                }
                Event::Mouse(mouse) => {
                    super::handlers::InputHandler::new(self).handle_mouse(mouse);
                    false
                }
                _ => false,
            };

            if exit {
                info!("UI stopped");
                return Ok(());
            }
        }
    }

    pub(in crate::ui) fn log(&self, msg: impl Into<String> + Display) {
        tracing::info!("{}", &msg);
        self.logs.push(msg.into());
    }
}
