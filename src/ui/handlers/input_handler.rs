//! Keyboard and mouse dispatch.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::super::{
    app::App,
    layout::{ScreenLayout, cell_at, move_row_at},
    types::Focus,
};
use super::GameHandler;

/// Helper struct for turning terminal events into game actions.
pub struct InputHandler<'a> {
    app: &'a mut App,
}

impl<'a> InputHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Handles a key press. Returns `true` when the user asked to exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c' | 'C'), KeyModifiers::CONTROL)
            | (KeyCode::Char('q' | 'Q'), _)
            | (KeyCode::Esc, _) => {
                self.app.log("Exit requested");
                return true;
            }

            (KeyCode::Tab | KeyCode::BackTab, _) => {
                self.app.focus = self.app.focus.toggled();
                if self.app.focus == Focus::Moves {
                    GameHandler::new(self.app).sync_selection();
                }
            }

            (KeyCode::Char('s' | 'S'), _) => GameHandler::new(self.app).toggle_sort(),

            (KeyCode::Char(c @ '1'..='9'), _) => {
                if let Some(digit) = c.to_digit(10) {
                    GameHandler::new(self.app).click_cell(digit as usize - 1);
                }
            }

            _ => match self.app.focus {
                Focus::Board => self.handle_board_key(key.code),
                Focus::Moves => self.handle_moves_key(key.code),
            },
        }
        false
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        let (row, col) = (self.app.cursor / 3, self.app.cursor % 3);

        match code {
            KeyCode::Up => self.app.cursor = row.saturating_sub(1) * 3 + col,
            KeyCode::Down => self.app.cursor = (row + 1).min(2) * 3 + col,
            KeyCode::Left => self.app.cursor = row * 3 + col.saturating_sub(1),
            KeyCode::Right => self.app.cursor = row * 3 + (col + 1).min(2),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let cursor = self.app.cursor;
                GameHandler::new(self.app).click_cell(cursor);
            }
            _ => {}
        }
    }

    fn handle_moves_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => GameHandler::new(self.app).select_previous(),
            KeyCode::Down => GameHandler::new(self.app).select_next(),
            KeyCode::Home => self.app.selected_move = 0,
            KeyCode::End => self.app.selected_move = self.app.game.history().len() - 1,
            KeyCode::Enter | KeyCode::Char(' ') => GameHandler::new(self.app).jump_to_selected(),
            _ => {}
        }
    }

    /// Handles a mouse event against the last drawn layout.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let layout = ScreenLayout::new(self.app.frame_area);

        if let Some(index) = cell_at(layout.board, mouse.column, mouse.row) {
            self.app.focus = Focus::Board;
            GameHandler::new(self.app).click_cell(index);
            return;
        }

        let len = self.app.game.history().len();
        if let Some(position) = move_row_at(
            layout.moves,
            self.app.selected_move,
            len,
            mouse.column,
            mouse.row,
        ) {
            self.app.focus = Focus::Moves;
            GameHandler::new(self.app).jump_to_position(position);
        }
    }
}
