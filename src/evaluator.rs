//! Win and tie detection over a single snapshot.

use crate::snapshot::{Player, Snapshot};

/// Every winning line, checked in this order.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Win {
    pub player: Player,
    pub line: [usize; 3],
}

impl Win {
    pub fn contains(&self, index: usize) -> bool {
        self.line.contains(&index)
    }
}

/// Returns the first completed line, if any.
pub fn evaluate_winner(snapshot: &Snapshot) -> Option<Win> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        match snapshot[a] {
            Some(player) if snapshot[b] == Some(player) && snapshot[c] == Some(player) => {
                Some(Win { player, line })
            }
            _ => None,
        }
    })
}

pub fn is_full(snapshot: &Snapshot) -> bool {
    snapshot.cells().iter().all(|c| c.is_some())
}

pub fn is_tie(snapshot: &Snapshot) -> bool {
    is_full(snapshot) && evaluate_winner(snapshot).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::parse_snapshot;

    #[test]
    fn test_every_line_detected() {
        for player in [Player::X, Player::O] {
            for line in LINES {
                let snapshot = line
                    .iter()
                    .fold(Snapshot::empty(), |s, &i| s.with_mark(i, player));

                let win = evaluate_winner(&snapshot).expect("line should win");
                assert_eq!(win.player, player);
                assert_eq!(win.line, line);
            }
        }
    }

    #[test]
    fn test_no_winner_on_empty_board() {
        assert_eq!(evaluate_winner(&Snapshot::empty()), None);
        assert!(!is_full(&Snapshot::empty()));
        assert!(!is_tie(&Snapshot::empty()));
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let snapshot = parse_snapshot("XXO......").unwrap();
        assert_eq!(evaluate_winner(&snapshot), None);
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // Row 0 and column 0 both complete; the row comes first.
        let snapshot = parse_snapshot("XXXX..X..").unwrap();
        let win = evaluate_winner(&snapshot).unwrap();
        assert_eq!(win.line, [0, 1, 2]);
    }

    #[test]
    fn test_tie() {
        let snapshot = parse_snapshot("XOXXOOOXX").unwrap();
        assert!(is_full(&snapshot));
        assert_eq!(evaluate_winner(&snapshot), None);
        assert!(is_tie(&snapshot));
    }

    #[test]
    fn test_full_board_with_winner_is_not_tie() {
        let snapshot = parse_snapshot("XXXOOXXOO").unwrap();
        assert!(is_full(&snapshot));
        assert!(!is_tie(&snapshot));
    }

    #[test]
    fn test_win_contains() {
        let win = Win {
            player: Player::O,
            line: [2, 4, 6],
        };
        assert!(win.contains(4));
        assert!(!win.contains(5));
    }
}
