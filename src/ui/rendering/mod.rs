mod board;
mod logs;
mod moves;
mod status;

use ratatui::Frame;

use crate::ui::{app::App, layout::ScreenLayout};

impl App {
    pub(in crate::ui) fn draw(&self, f: &mut Frame) {
        let layout = ScreenLayout::new(f.area());

        self.draw_status(f, layout.status);
        self.draw_board(f, layout.board);
        self.draw_help(f, layout.help);
        self.draw_logs(f, layout.logs);
        self.draw_position(f, layout.position);
        self.draw_moves(f, layout.moves);
    }
}
