use crate::board::Board;
use crate::error::SettingsError;

pub const MIN_SIZE: usize = 5;
pub const MAX_SIZE: usize = 15;
pub const DEFAULT_SIZE: usize = 10;

pub fn check_size(width: usize, height: usize) -> Result<(), SettingsError> {
    let range = MIN_SIZE..=MAX_SIZE;
    if range.contains(&width) && range.contains(&height) {
        Ok(())
    } else {
        Err(SettingsError::BoardSize {
            width,
            height,
            min: MIN_SIZE,
            max: MAX_SIZE,
        })
    }
}

/// Only the mover can complete a line here, so the connect four rule applies.
pub fn is_game_over(board: &Board) -> bool {
    super::c4::is_game_over(board)
}
