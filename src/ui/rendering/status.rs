use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    board::Status,
    ui::{app::App, types::Focus},
};

impl App {
    pub(in crate::ui) fn draw_status(&self, f: &mut Frame, area: Rect) {
        let status = self.game.status();

        let style = match status {
            Status::Winner(_) => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            Status::Tie => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            Status::Next(_) => Style::default().fg(Color::White),
        };

        f.render_widget(
            Paragraph::new(status.to_string())
                .style(style)
                .block(Block::default().borders(Borders::ALL).title("Status")),
            area,
        );
    }

    pub(in crate::ui) fn draw_position(&self, f: &mut Frame, area: Rect) {
        f.render_widget(
            Paragraph::new(self.game.current_move_label())
                .block(Block::default().borders(Borders::ALL).title("Position")),
            area,
        );
    }

    pub(in crate::ui) fn draw_help(&self, f: &mut Frame, area: Rect) {
        let help_text = match self.focus {
            Focus::Board => "1-9/Enter = play | Tab = moves | s = sort | q = quit",
            Focus::Moves => "Enter = jump | Tab = board | s = sort | q = quit",
        };

        f.render_widget(
            Paragraph::new(help_text)
                .style(Style::default().fg(Color::Gray))
                .block(Block::default().borders(Borders::ALL).title("Keys")),
            area,
        );
    }
}
