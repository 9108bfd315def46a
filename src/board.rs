mod connect;
mod position;
mod text;
mod token;

pub use position::Position;
pub use text::{mirror, swap_tokens};
pub use token::Token;

use std::fmt;

use crate::error::InvalidMove;
use crate::strategy::MoveStrategy;

/// A fixed size grid of tokens plus the bookkeeping the move strategies rely on.
///
/// Cells are addressed as `(column, row)` with row 0 at the top. Reads outside
/// the grid return [`Token::Empty`]; writes outside it are rejected by the
/// strategy as [`InvalidMove::OutOfRange`].
#[derive(Debug, Clone)]
pub struct Board {
    width: usize,
    height: usize,
    // Column-major, `column * height + row`
    grid: Vec<Token>,
    tokens_in_column: Vec<usize>,
    tokens: usize,
    strategy: MoveStrategy,
}

impl Board {
    pub fn new(width: usize, height: usize, strategy: MoveStrategy) -> Self {
        Board {
            width,
            height,
            grid: vec![Token::Empty; width * height],
            tokens_in_column: vec![0; width],
            tokens: 0,
            strategy,
        }
    }

    pub fn reset(&mut self) {
        self.grid.fill(Token::Empty);
        self.tokens_in_column.fill(0);
        self.tokens = 0;
    }

    /// Drop `color` at the requested cell. The strategy decides where it
    /// actually ends up, and the returned position is that landing cell.
    pub fn put_token(
        &mut self,
        color: Token,
        column: usize,
        row: usize,
    ) -> Result<Position, InvalidMove> {
        let strategy = self.strategy;
        strategy.put_token(self, color, column, row)
    }

    pub fn get_slot(&self, column: usize, row: usize) -> Token {
        if self.is_valid_cell(column, row) {
            self.grid[self.index(column, row)]
        } else {
            Token::Empty
        }
    }

    pub fn is_column_full(&self, column: usize) -> bool {
        self.is_valid_column(column) && self.tokens_in_column[column] == self.height
    }

    pub fn is_valid_column(&self, column: usize) -> bool {
        column < self.width
    }

    pub fn is_valid_row(&self, row: usize) -> bool {
        row < self.height
    }

    pub fn is_valid_cell(&self, column: usize, row: usize) -> bool {
        self.is_valid_column(column) && self.is_valid_row(row)
    }

    pub fn is_board_full(&self) -> bool {
        self.tokens == self.width * self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tokens(&self) -> usize {
        self.tokens
    }

    /// Panics if `column` is not on the board.
    pub fn tokens_in_column(&self, column: usize) -> usize {
        self.tokens_in_column[column]
    }

    pub fn strategy(&self) -> MoveStrategy {
        self.strategy
    }

    /// Read-only view of every cell, column by column, each column top row
    /// first. Cell `(column, row)` is at `column * height + row`.
    pub fn grid(&self) -> &[Token] {
        &self.grid
    }

    fn index(&self, column: usize, row: usize) -> usize {
        column * self.height + row
    }

    /// Overwrites a cell without touching the counters. Callers keep the
    /// counters consistent themselves.
    pub(crate) fn set_cell(&mut self, column: usize, row: usize, color: Token) {
        let index = self.index(column, row);
        self.grid[index] = color;
    }

    /// Writes a new token and counts it against its column.
    pub(crate) fn place(&mut self, color: Token, column: usize, row: usize) -> Position {
        self.set_cell(column, row, color);
        self.tokens_in_column[column] += 1;
        self.tokens += 1;
        Position::new(column, row)
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.grid == other.grid
    }
}

impl Eq for Board {}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for column in 0..self.width {
            write!(f, "{}", column % 10)?;
        }
        writeln!(f)?;
        for row in self.to_rows() {
            writeln!(f, "|{}|", row)?;
        }
        writeln!(f, "\\{}/", "-".repeat(self.width))
    }
}
