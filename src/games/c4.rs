use crate::board::{Board, Token};

pub const BOARD_WIDTH: usize = 7;
pub const BOARD_HEIGHT: usize = 6;

/// Over once either colour has four in a row, or on a stalemate.
pub fn is_game_over(board: &Board) -> bool {
    board.is_board_full()
        || board.four_tokens_connected(Token::Yellow)
        || board.four_tokens_connected(Token::Red)
}
