//! Move list rendering for time travel.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::{
    app::App,
    layout::{inner, move_list_offset},
    types::Focus,
};

impl App {
    pub(in crate::ui) fn draw_moves(&self, f: &mut Frame, area: Rect) {
        let entries = self.game.moves();
        let current = self.game.current_move();
        let visible = inner(area).height as usize;
        let offset = move_list_offset(self.selected_move, visible);

        let lines: Vec<Line> = entries
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(position, entry)| {
                let marker = if entry.index == current { "▶ " } else { "  " };

                let mut style = Style::default();
                if entry.index == current {
                    style = style.fg(Color::Green).add_modifier(Modifier::BOLD);
                }
                if self.focus == Focus::Moves && position == self.selected_move {
                    style = style.add_modifier(Modifier::REVERSED);
                }

                Line::from(vec![
                    Span::raw(marker),
                    Span::styled(entry.label.clone(), style),
                ])
            })
            .collect();

        let order = if self.game.is_descending() {
            "newest first"
        } else {
            "oldest first"
        };
        let border = if self.focus == Focus::Moves {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };

        f.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border)
                    .title(format!("Moves ({}) | s: sort", order)),
            ),
            area,
        );
    }
}
