//! Game state: the history of snapshots, the current move, and the order of
//! the move list.

use tracing::{debug, info};

use crate::{
    board::{Board, Status},
    snapshot::{Player, Snapshot},
};

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveEntry {
    pub index: usize,
    pub label: String,
}

impl MoveEntry {
    fn new(index: usize) -> Self {
        let label = if index > 0 {
            format!("Go to move #{}", index)
        } else {
            "Go to start".to_string()
        };
        Self { index, label }
    }
}

#[derive(Debug, Clone)]
pub struct Game {
    history: Vec<Snapshot>,
    current_move: usize,
    descending: bool,
}

impl Game {
    pub fn new() -> Self {
        Self {
            history: vec![Snapshot::empty()],
            current_move: 0,
            descending: false,
        }
    }

    /// Starts a game whose move list is already sorted newest first.
    pub fn with_descending(descending: bool) -> Self {
        Self {
            descending,
            ..Self::new()
        }
    }

    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    pub fn current_move(&self) -> usize {
        self.current_move
    }

    pub fn is_descending(&self) -> bool {
        self.descending
    }

    pub fn current(&self) -> &Snapshot {
        &self.history[self.current_move]
    }

    /// X moves on even positions, O on odd ones.
    pub fn turn(&self) -> Player {
        if self.current_move % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    pub fn board(&self) -> Board {
        Board::new(*self.current(), self.turn())
    }

    pub fn status(&self) -> Status {
        self.board().status()
    }

    /// Commits `next` as the move after the current one. Anything after the
    /// current move is discarded first.
    pub fn play(&mut self, next: Snapshot) {
        let discarded = self.history.len() - (self.current_move + 1);
        self.history.truncate(self.current_move + 1);
        self.history.push(next);
        self.current_move = self.history.len() - 1;

        if discarded > 0 {
            debug!(discarded, "Branched history");
        }
        info!(move_index = self.current_move, board = %next, "Move played");
    }

    /// Routes a cell click through the board for the current snapshot.
    /// Returns whether a move was played.
    pub fn click(&mut self, index: usize) -> bool {
        let board = self.board();
        let mut played = false;
        board.click(index, |next| {
            self.play(next);
            played = true;
        });
        played
    }

    /// Moves the pointer to an existing history entry. Returns `false` and
    /// leaves the game untouched when `target` is not in the history.
    pub fn jump_to(&mut self, target: usize) -> bool {
        if target >= self.history.len() {
            return false;
        }
        self.current_move = target;
        info!(move_index = target, "Jumped to move");
        true
    }

    pub fn toggle_sort(&mut self) {
        self.descending = !self.descending;
        info!(descending = self.descending, "Move list order toggled");
    }

    /// Move list in display order.
    pub fn moves(&self) -> Vec<MoveEntry> {
        let entries = (0..self.history.len()).map(MoveEntry::new);
        if self.descending {
            entries.rev().collect()
        } else {
            entries.collect()
        }
    }

    pub fn current_move_label(&self) -> String {
        format!("You are on move #{}", self.current_move + 1)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::evaluate_winner;

    fn play_all(game: &mut Game, cells: &[usize]) {
        for &cell in cells {
            assert!(game.click(cell), "click on {} should play", cell);
        }
    }

    #[test]
    fn test_initial_state() {
        let game = Game::new();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.current_move(), 0);
        assert!(!game.is_descending());
        assert_eq!(*game.current(), Snapshot::empty());
        assert_eq!(game.turn(), Player::X);
    }

    #[test]
    fn test_play_appends_and_advances() {
        let mut game = Game::new();
        let next = Snapshot::empty().with_mark(4, Player::X);

        game.play(next);

        assert_eq!(game.history().len(), 2);
        assert_eq!(game.current_move(), 1);
        assert_eq!(game.history()[game.current_move()], next);
        assert_eq!(game.turn(), Player::O);
    }

    #[test]
    fn test_pointer_tracks_latest_after_every_play() {
        let mut game = Game::new();
        for cell in [0, 1, 2, 4, 3] {
            let board = game.board();
            let mut next = None;
            board.click(cell, |s| next = Some(s));
            let next = next.unwrap();

            game.play(next);

            assert_eq!(game.history().len(), game.current_move() + 1);
            assert_eq!(game.history()[game.current_move()], next);
        }
    }

    #[test]
    fn test_jump_to_keeps_history() {
        let mut game = Game::new();
        play_all(&mut game, &[0, 4, 8]);
        let before = game.history().to_vec();

        for k in 0..before.len() {
            assert!(game.jump_to(k));
            assert_eq!(game.current_move(), k);
            assert_eq!(game.history(), before.as_slice());
        }
    }

    #[test]
    fn test_jump_to_out_of_range_is_rejected() {
        let mut game = Game::new();
        play_all(&mut game, &[0]);

        assert!(!game.jump_to(2));
        assert_eq!(game.current_move(), 1);
    }

    #[test]
    fn test_branching_discards_future() {
        let mut game = Game::new();
        play_all(&mut game, &[0, 1, 2]);
        let old_third = game.history()[2];

        assert!(game.jump_to(1));
        assert_eq!(game.turn(), Player::O);
        assert!(game.click(5));

        assert_eq!(game.history().len(), 3);
        assert_eq!(game.current_move(), 2);
        assert_ne!(game.history()[2], old_third);
        assert_eq!(game.history()[2][5], Some(Player::O));
        assert_eq!(game.history()[2][1], None);
    }

    #[test]
    fn test_branch_from_start() {
        let mut game = Game::new();
        play_all(&mut game, &[0, 1, 2, 3]);

        game.jump_to(0);
        assert!(game.click(8));

        assert_eq!(game.history().len(), 2);
        assert_eq!(game.current()[8], Some(Player::X));
    }

    #[test]
    fn test_diagonal_win_scenario() {
        let mut game = Game::new();
        // X: 4, 2, 6 / O: 0, 1
        play_all(&mut game, &[4, 0, 2, 1, 6]);

        let win = evaluate_winner(game.current()).unwrap();
        assert_eq!(win.player, Player::X);
        assert_eq!(win.line, [2, 4, 6]);
        assert_eq!(game.status().to_string(), "Winner: X");

        let before = game.history().to_vec();
        for cell in [3, 5, 6, 8] {
            assert!(!game.click(cell));
        }
        assert_eq!(game.history(), before.as_slice());
        assert_eq!(game.current_move(), 5);
    }

    #[test]
    fn test_occupied_click_changes_nothing() {
        let mut game = Game::new();
        play_all(&mut game, &[4]);

        assert!(!game.click(4));
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.current_move(), 1);
    }

    #[test]
    fn test_tie_scenario() {
        let mut game = Game::new();
        // X O X / X O O / O X X
        play_all(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

        assert_eq!(game.status().to_string(), "Tie Game!");
        assert_eq!(game.history().len(), 10);
    }

    #[test]
    fn test_moves_labels_and_order() {
        let mut game = Game::new();
        play_all(&mut game, &[0, 1]);

        let labels: Vec<String> = game.moves().into_iter().map(|m| m.label).collect();
        assert_eq!(labels, vec!["Go to start", "Go to move #1", "Go to move #2"]);

        game.toggle_sort();
        let indices: Vec<usize> = game.moves().iter().map(|m| m.index).collect();
        assert_eq!(indices, vec![2, 1, 0]);
        assert_eq!(game.current_move(), 2);
        assert_eq!(game.history().len(), 3);

        game.toggle_sort();
        let indices: Vec<usize> = game.moves().iter().map(|m| m.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_descending_does_not_reorder_history() {
        let mut game = Game::with_descending(true);
        play_all(&mut game, &[0, 1]);

        assert_eq!(game.history()[0], Snapshot::empty());
        assert_eq!(game.moves()[0].index, 2);
    }

    #[test]
    fn test_current_move_label() {
        let mut game = Game::new();
        assert_eq!(game.current_move_label(), "You are on move #1");
        play_all(&mut game, &[0, 1]);
        assert_eq!(game.current_move_label(), "You are on move #3");
        game.jump_to(1);
        assert_eq!(game.current_move_label(), "You are on move #2");
    }

    #[test]
    fn test_independent_games() {
        let mut a = Game::new();
        let b = Game::new();
        play_all(&mut a, &[0]);
        assert_eq!(b.history().len(), 1);
    }
}
