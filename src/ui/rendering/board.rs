//! 3x3 grid rendering with winning and tie highlights.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    board::CellClass,
    ui::{app::App, layout::cell_rects, types::Focus},
};

fn class_style(class: CellClass) -> Style {
    match class {
        CellClass::Square => Style::default().fg(Color::White),
        CellClass::Winning => Style::default()
            .bg(Color::Green)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
        CellClass::Tie => Style::default().bg(Color::Yellow).fg(Color::Black),
    }
}

impl App {
    pub(in crate::ui) fn draw_board(&self, f: &mut Frame, area: Rect) {
        let board = self.game.board();
        let classes = board.cell_classes();

        let border = if self.focus == Focus::Board {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        f.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title("Board"),
            area,
        );

        for (i, rect) in cell_rects(area).into_iter().enumerate() {
            if rect.is_empty() {
                continue;
            }

            let symbol = board.squares()[i].map_or(" ", |p| p.symbol());
            let cell_border = if self.focus == Focus::Board && self.cursor == i {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            f.render_widget(
                Paragraph::new(symbol)
                    .alignment(Alignment::Center)
                    .style(class_style(classes[i]))
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_style(cell_border),
                    ),
                rect,
            );
        }
    }
}
