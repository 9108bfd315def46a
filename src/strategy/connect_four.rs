use crate::board::{Board, Position, Token};
use crate::error::InvalidMove;

pub(super) fn put_token(
    board: &mut Board,
    color: Token,
    column: usize,
) -> Result<Position, InvalidMove> {
    if !board.is_valid_column(column) {
        return Err(InvalidMove::OutOfRange { column, row: 0 });
    }
    if board.is_column_full(column) {
        return Err(InvalidMove::ColumnFull(column));
    }
    let row = board.height() - 1 - board.tokens_in_column(column);
    Ok(board.place(color, column, row))
}
