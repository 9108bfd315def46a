use super::{Board, Token};

const CONNECT: usize = 4;

impl Board {
    /// True if `color` has four in a row in any orientation. Always false for
    /// [`Token::Empty`].
    pub fn four_tokens_connected(&self, color: Token) -> bool {
        self.four_tokens_connected_horizontally(color)
            || self.four_tokens_connected_vertically(color)
            || self.four_tokens_connected_diagonally(color)
    }

    pub fn four_tokens_connected_horizontally(&self, color: Token) -> bool {
        self.scan(color, 0..self.height, 1, 0)
    }

    pub fn four_tokens_connected_vertically(&self, color: Token) -> bool {
        self.scan(color, 0..self.height.saturating_sub(CONNECT - 1), 0, 1)
    }

    pub fn four_tokens_connected_diagonally(&self, color: Token) -> bool {
        self.connected_left_diagonally(color) || self.connected_right_diagonally(color)
    }

    // Check / win: (column + i, row - i)
    pub fn connected_left_diagonally(&self, color: Token) -> bool {
        self.scan(color, (CONNECT - 1)..self.height, 1, -1)
    }

    // Check \ win: (column + i, row + i)
    pub fn connected_right_diagonally(&self, color: Token) -> bool {
        self.scan(color, 0..self.height.saturating_sub(CONNECT - 1), 1, 1)
    }

    /// Slides a four cell window starting at every `(column, row)` with `row`
    /// in `rows`, stepping `(dx, dy)` between cells.
    fn scan(&self, color: Token, rows: std::ops::Range<usize>, dx: usize, dy: isize) -> bool {
        if color.is_empty() {
            return false;
        }
        let columns = if dx == 0 {
            self.width
        } else {
            self.width.saturating_sub(CONNECT - 1)
        };
        rows.into_iter().any(|row| {
            (0..columns).any(|column| {
                (0..CONNECT).all(|i| {
                    row.checked_add_signed(dy * i as isize)
                        .is_some_and(|r| self.get_slot(column + dx * i, r) == color)
                })
            })
        })
    }
}
