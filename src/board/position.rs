/// A `(column, row)` cell coordinate. Row 0 is the top of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Position {
    pub column: usize,
    pub row: usize,
}

impl Position {
    pub fn new(column: usize, row: usize) -> Self {
        Position { column, row }
    }
}

impl From<(usize, usize)> for Position {
    fn from((column, row): (usize, usize)) -> Self {
        Position { column, row }
    }
}
