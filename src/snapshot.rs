use std::{convert::TryFrom, fmt, ops::Index};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn symbol(self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl TryFrom<char> for Player {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value.to_ascii_uppercase() {
            'X' => Ok(Player::X),
            'O' => Ok(Player::O),
            _ => Err(value),
        }
    }
}

/// One cell of the board: empty or marked by a player.
pub type Cell = Option<Player>;

/// An immutable 3x3 board, stored row-major.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Snapshot {
    cells: [Cell; CELL_COUNT],
}

impl Snapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn is_occupied(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Some(_)))
    }

    /// Returns a copy of this snapshot with `index` marked by `player`.
    ///
    /// The receiver is left untouched; callers decide whether the target
    /// cell may be overwritten.
    pub fn with_mark(&self, index: usize, player: Player) -> Self {
        let mut cells = self.cells;
        cells[index] = Some(player);
        Self { cells }
    }

    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

impl Index<usize> for Snapshot {
    type Output = Cell;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cells[index]
    }
}

/// Parses a board written as nine characters, `X`, `O`, or `.`/`-`/space for
/// empty. Whitespace between rows (newlines) is ignored.
pub fn parse_snapshot(text: &str) -> anyhow::Result<Snapshot> {
    let mut cells = [None; CELL_COUNT];
    let mut count = 0;

    for c in text.chars().filter(|c| *c != '\n' && *c != '\r') {
        if count == CELL_COUNT {
            anyhow::bail!("board has more than {} cells", CELL_COUNT);
        }
        cells[count] = match c {
            '.' | '-' | ' ' => None,
            other => Some(
                Player::try_from(other)
                    .map_err(|bad| anyhow::anyhow!("invalid board character: {}", bad))?,
            ),
        };
        count += 1;
    }

    if count != CELL_COUNT {
        anyhow::bail!("board has {} cells, expected {}", count, CELL_COUNT);
    }

    Ok(Snapshot::from_cells(cells))
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 && i % 3 == 0 {
                f.write_str("/")?;
            }
            f.write_str(cell.map_or(".", Player::symbol))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot() {
        let snapshot = Snapshot::empty();
        assert_eq!(snapshot.mark_count(), 0);
        assert!(snapshot.cells().iter().all(|c| c.is_none()));
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let before = Snapshot::empty();
        let after = before.with_mark(4, Player::X);

        assert_eq!(before[4], None);
        assert_eq!(after[4], Some(Player::X));
        assert_eq!(after.mark_count(), 1);
    }

    #[test]
    fn test_is_occupied_out_of_range() {
        let snapshot = Snapshot::empty().with_mark(8, Player::O);
        assert!(snapshot.is_occupied(8));
        assert!(!snapshot.is_occupied(0));
        assert!(!snapshot.is_occupied(9));
    }

    #[test]
    fn test_parse_snapshot() {
        let snapshot = parse_snapshot("XO.\n.X.\n..O").unwrap();
        assert_eq!(snapshot[0], Some(Player::X));
        assert_eq!(snapshot[1], Some(Player::O));
        assert_eq!(snapshot[2], None);
        assert_eq!(snapshot[4], Some(Player::X));
        assert_eq!(snapshot[8], Some(Player::O));
    }

    #[test]
    fn test_parse_snapshot_rejects_bad_input() {
        assert!(parse_snapshot("XO.").is_err());
        assert!(parse_snapshot("XO.X.OZ..").is_err());
        assert!(parse_snapshot("..........").is_err());
    }

    #[test]
    fn test_display() {
        let snapshot = parse_snapshot("X...O...X").unwrap();
        assert_eq!(snapshot.to_string(), "X../.O./..X");
    }
}
