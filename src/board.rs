//! The clickable board: turns a cell click into the next snapshot and derives
//! what the grid should show.

use std::fmt;

use crate::{
    evaluator::{Win, evaluate_winner, is_tie},
    snapshot::{CELL_COUNT, Player, Snapshot},
};

/// Visual class of a single cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CellClass {
    Square,
    Winning,
    Tie,
}

/// Status line shown above the grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Status {
    Winner(Player),
    Tie,
    Next(Player),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Winner(player) => write!(f, "Winner: {}", player),
            Status::Tie => f.write_str("Tie Game!"),
            Status::Next(player) => write!(f, "Next: {}", player),
        }
    }
}

#[derive(Debug, Copy, Clone)]
pub struct Board {
    squares: Snapshot,
    next: Player,
}

impl Board {
    pub fn new(squares: Snapshot, next: Player) -> Self {
        Self { squares, next }
    }

    pub fn squares(&self) -> &Snapshot {
        &self.squares
    }

    pub fn next_player(&self) -> Player {
        self.next
    }

    pub fn winner(&self) -> Option<Win> {
        evaluate_winner(&self.squares)
    }

    /// Handles a click on `index`, calling `on_play` with the resulting
    /// snapshot. Occupied cells, out-of-range indices and decided boards are
    /// ignored.
    pub fn click<F>(&self, index: usize, on_play: F)
    where
        F: FnOnce(Snapshot),
    {
        if index >= CELL_COUNT || self.squares.is_occupied(index) || self.winner().is_some() {
            return;
        }

        on_play(self.squares.with_mark(index, self.next));
    }

    pub fn status(&self) -> Status {
        if let Some(win) = self.winner() {
            Status::Winner(win.player)
        } else if is_tie(&self.squares) {
            Status::Tie
        } else {
            Status::Next(self.next)
        }
    }

    pub fn cell_classes(&self) -> [CellClass; CELL_COUNT] {
        if let Some(win) = self.winner() {
            let mut classes = [CellClass::Square; CELL_COUNT];
            for i in win.line {
                classes[i] = CellClass::Winning;
            }
            classes
        } else if is_tie(&self.squares) {
            [CellClass::Tie; CELL_COUNT]
        } else {
            [CellClass::Square; CELL_COUNT]
        }
    }

    pub fn cell_class(&self, index: usize) -> CellClass {
        self.cell_classes()
            .get(index)
            .copied()
            .unwrap_or(CellClass::Square)
    }
}
