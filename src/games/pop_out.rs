use crate::board::{Board, Token};

pub const BOARD_WIDTH: usize = 4;
pub const BOARD_HEIGHT: usize = 7;

/// An eviction can complete a line for both colours at once. That position
/// does not end the game; only a single connected colour, or a full board
/// with no line at all, does.
pub fn is_game_over(board: &Board) -> bool {
    let yellow = board.four_tokens_connected(Token::Yellow);
    let red = board.four_tokens_connected(Token::Red);
    (yellow != red) || (board.is_board_full() && !yellow && !red)
}
