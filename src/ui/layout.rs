//! Screen geometry shared by drawing and mouse hit-testing.

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

use crate::snapshot::CELL_COUNT;

pub const CELL_WIDTH: u16 = 7;
pub const CELL_HEIGHT: u16 = 3;

/// Regions of the main screen.
#[derive(Debug, Clone, Copy)]
pub struct ScreenLayout {
    pub status: Rect,
    pub board: Rect,
    pub help: Rect,
    pub logs: Rect,
    pub position: Rect,
    pub moves: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(CELL_HEIGHT * 3 + 2),
                Constraint::Length(3),
                Constraint::Min(3), // logs panel
            ])
            .split(main[0]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(3)])
            .split(main[1]);

        Self {
            status: left[0],
            board: left[1],
            help: left[2],
            logs: left[3],
            position: right[0],
            moves: right[1],
        }
    }
}

/// Area inside a bordered block.
pub fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// Rectangles of the nine cells inside the board panel, row-major.
pub fn cell_rects(board: Rect) -> [Rect; CELL_COUNT] {
    let grid = inner(board);
    let mut rects = [Rect::default(); CELL_COUNT];

    for (i, rect) in rects.iter_mut().enumerate() {
        let col = (i % 3) as u16;
        let row = (i / 3) as u16;
        *rect = Rect::new(
            grid.x + col * CELL_WIDTH,
            grid.y + row * CELL_HEIGHT,
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(grid);
    }

    rects
}

/// Cell under the given terminal position, if any.
pub fn cell_at(board: Rect, column: u16, row: u16) -> Option<usize> {
    let pos = Position::new(column, row);
    cell_rects(board)
        .iter()
        .position(|rect| !rect.is_empty() && rect.contains(pos))
}

/// First visible move-list row so that `selected` stays on screen.
pub fn move_list_offset(selected: usize, visible: usize) -> usize {
    if visible == 0 {
        return 0;
    }
    selected.saturating_sub(visible - 1)
}

/// Display index of the move-list row under the given position, if any.
pub fn move_row_at(moves: Rect, selected: usize, len: usize, column: u16, row: u16) -> Option<usize> {
    let list = inner(moves);
    if !list.contains(Position::new(column, row)) {
        return None;
    }

    let offset = move_list_offset(selected, list.height as usize);
    let index = offset + (row - list.y) as usize;
    (index < len).then_some(index)
}
