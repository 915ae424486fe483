//! Game state transitions driven by the UI.

use super::super::app::App;

/// Helper struct for applying moves, jumps and sort changes to the game.
pub struct GameHandler<'a> {
    app: &'a mut App,
}

impl<'a> GameHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Clicks a cell on the current board. Ignored clicks leave no trace.
    pub fn click_cell(&mut self, index: usize) {
        let player = self.app.game.turn();
        if self.app.game.click(index) {
            self.app.cursor = index;
            self.app.log(format!(
                "Move #{}: {} took cell {}",
                self.app.game.current_move(),
                player,
                index + 1
            ));
            self.report_outcome();
            self.sync_selection();
        }
    }

    /// Jumps to the history entry shown at `position` in the move list.
    pub fn jump_to_position(&mut self, position: usize) {
        let target = match self.app.game.moves().get(position) {
            Some(entry) => entry.index,
            None => return,
        };
        self.app.selected_move = position;
        self.jump_to(target);
    }

    pub fn jump_to_selected(&mut self) {
        self.jump_to_position(self.app.selected_move);
    }

    pub fn jump_to(&mut self, target: usize) {
        if self.app.game.jump_to(target) {
            let label = if target == 0 {
                "Jumped to start".to_string()
            } else {
                format!("Jumped to move #{}", target)
            };
            self.app.log(label);
            self.sync_selection();
        }
    }

    pub fn toggle_sort(&mut self) {
        self.app.game.toggle_sort();
        let order = if self.app.game.is_descending() {
            "descending"
        } else {
            "ascending"
        };
        self.app.log(format!("Move list sorted {}", order));
        self.sync_selection();
    }

    pub fn select_previous(&mut self) {
        self.app.selected_move = self.app.selected_move.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        let last = self.app.game.history().len() - 1;
        if self.app.selected_move < last {
            self.app.selected_move += 1;
        }
    }

    /// Points the move-list selection at the current move.
    pub fn sync_selection(&mut self) {
        let current = self.app.game.current_move();
        self.app.selected_move = self
            .app
            .game
            .moves()
            .iter()
            .position(|entry| entry.index == current)
            .unwrap_or(0);
    }

    fn report_outcome(&self) {
        use crate::board::Status;

        match self.app.game.status() {
            Status::Winner(player) => self.app.log(format!("{} wins", player)),
            Status::Tie => self.app.log("Tie game"),
            Status::Next(_) => {}
        }
    }
}
