//! Text grid encoding used to build fixtures and to print boards.
//!
//! A board is a list of rows, top row first, one character per cell:
//! `' '` for empty, `'Y'` for yellow and `'R'` for red.

use super::{Board, Token};
use crate::error::GridError;
use crate::strategy::MoveStrategy;

impl Board {
    /// Builds a board directly from its text rows.
    ///
    /// Cells are written as-is (no strategy is replayed), so a gravity board
    /// keeps every token where the text puts it. For the column-stacking
    /// strategies every token must rest on the one below it.
    pub fn from_rows<S: AsRef<str>>(
        rows: &[S],
        width: usize,
        height: usize,
        strategy: MoveStrategy,
    ) -> Result<Board, GridError> {
        if rows.len() != height {
            return Err(GridError::RowCount {
                expected: height,
                found: rows.len(),
            });
        }
        let mut board = Board::new(width, height, strategy);

        // Bottom row first so stacking can be checked against the row below
        for row in (0..height).rev() {
            let cells: Vec<char> = rows[row].as_ref().chars().collect();
            if cells.len() != width {
                return Err(GridError::RowWidth {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }
            for (column, &symbol) in cells.iter().enumerate() {
                let color = Token::from_symbol(symbol).ok_or(GridError::UnknownToken {
                    symbol,
                    column,
                    row,
                })?;
                if color.is_empty() {
                    continue;
                }
                if strategy.stacks_columns()
                    && row + 1 < height
                    && board.get_slot(column, row + 1).is_empty()
                {
                    return Err(GridError::Floating { column, row });
                }
                board.place(color, column, row);
            }
        }
        Ok(board)
    }

    /// The inverse of [`Board::from_rows`].
    pub fn to_rows(&self) -> Vec<String> {
        (0..self.height)
            .map(|row| {
                (0..self.width)
                    .map(|column| self.get_slot(column, row).symbol())
                    .collect()
            })
            .collect()
    }
}

/// Exchanges the two colours in a text grid.
pub fn swap_tokens<S: AsRef<str>>(rows: &[S]) -> Vec<String> {
    rows.iter()
        .map(|row| {
            row.as_ref()
                .chars()
                .map(|symbol| match Token::from_symbol(symbol) {
                    Some(token) => token.opposite().symbol(),
                    None => symbol,
                })
                .collect()
        })
        .collect()
}

/// Reflects a text grid left to right.
pub fn mirror<S: AsRef<str>>(rows: &[S]) -> Vec<String> {
    rows.iter()
        .map(|row| row.as_ref().chars().rev().collect())
        .collect()
}
