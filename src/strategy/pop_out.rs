use crate::board::{Board, Position, Token};
use crate::error::InvalidMove;

/// Like connect four, except a full column makes room by dropping its bottom
/// token and sliding the rest down one row. The new token then sits on top.
pub(super) fn put_token(
    board: &mut Board,
    color: Token,
    column: usize,
) -> Result<Position, InvalidMove> {
    if !board.is_valid_column(column) {
        return Err(InvalidMove::OutOfRange { column, row: 0 });
    }
    if !board.is_column_full(column) {
        let row = board.height() - 1 - board.tokens_in_column(column);
        return Ok(board.place(color, column, row));
    }

    let evicted = board.get_slot(column, board.height() - 1);
    for row in (1..board.height()).rev() {
        let above = board.get_slot(column, row - 1);
        board.set_cell(column, row, above);
    }
    board.set_cell(column, 0, color);
    log::trace!("Column {} evicted {} to make room for {}", column, evicted, color);

    Ok(Position::new(column, 0))
}
