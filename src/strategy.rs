mod connect_four;
mod gravity;
mod pop_out;

use crate::board::{Board, Position, Token};
use crate::error::InvalidMove;

/// Where a dropped token actually lands. Chosen once per board; holds no
/// per-board state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveStrategy {
    /// The token falls to the lowest free row of the column.
    ConnectFour,
    /// As [`MoveStrategy::ConnectFour`], but a full column evicts its bottom token.
    PopOut,
    /// The token is pulled towards the nearest board edge.
    Gravity,
}

impl MoveStrategy {
    pub fn put_token(
        self,
        board: &mut Board,
        color: Token,
        column: usize,
        row: usize,
    ) -> Result<Position, InvalidMove> {
        if color.is_empty() {
            log::trace!("Rejected empty token at ({}, {})", column, row);
            return Err(InvalidMove::EmptyToken);
        }
        let placed = match self {
            MoveStrategy::ConnectFour => connect_four::put_token(board, color, column),
            MoveStrategy::PopOut => pop_out::put_token(board, color, column),
            MoveStrategy::Gravity => gravity::put_token(board, color, column, row),
        };
        if let Err(err) = &placed {
            log::trace!("{:?} rejected {} at ({}, {}): {}", self, color, column, row, err);
        }
        placed
    }

    /// Whether tokens always rest on top of a column, so only the column of a
    /// move matters.
    pub fn stacks_columns(self) -> bool {
        !matches!(self, MoveStrategy::Gravity)
    }
}
