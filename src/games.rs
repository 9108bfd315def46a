mod c4;
mod gravity;
mod pop_out;

pub use gravity::{
    DEFAULT_SIZE as GRAVITY_DEFAULT_SIZE, MAX_SIZE as GRAVITY_MAX_SIZE,
    MIN_SIZE as GRAVITY_MIN_SIZE,
};

use clap::ValueEnum;

use crate::board::Board;
use crate::error::{GridError, SettingsError};
use crate::strategy::MoveStrategy;

/// Game names as they appear on the command line and in settings files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Games {
    C4,
    PopOut,
    Gravity,
}

impl Games {
    /// The playable variant. Width and height only apply to gravity and fall
    /// back to the default size there; the other games reject them.
    pub fn variant(
        self,
        width: Option<usize>,
        height: Option<usize>,
    ) -> Result<Variant, SettingsError> {
        if self != Games::Gravity && (width.is_some() || height.is_some()) {
            return Err(SettingsError::Validation(format!(
                "{:?} is played on a fixed board, width and height are not accepted",
                self
            )));
        }
        match self {
            Games::C4 => Ok(Variant::ConnectFour),
            Games::PopOut => Ok(Variant::PopOut),
            Games::Gravity => Variant::gravity(
                width.unwrap_or(GRAVITY_DEFAULT_SIZE),
                height.unwrap_or(GRAVITY_DEFAULT_SIZE),
            ),
        }
    }
}

/// One of the three rule sets, with the board size it is played on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    ConnectFour,
    PopOut,
    Gravity { width: usize, height: usize },
}

impl Variant {
    pub fn gravity(width: usize, height: usize) -> Result<Variant, SettingsError> {
        gravity::check_size(width, height)?;
        Ok(Variant::Gravity { width, height })
    }

    pub fn width(self) -> usize {
        match self {
            Variant::ConnectFour => c4::BOARD_WIDTH,
            Variant::PopOut => pop_out::BOARD_WIDTH,
            Variant::Gravity { width, .. } => width,
        }
    }

    pub fn height(self) -> usize {
        match self {
            Variant::ConnectFour => c4::BOARD_HEIGHT,
            Variant::PopOut => pop_out::BOARD_HEIGHT,
            Variant::Gravity { height, .. } => height,
        }
    }

    pub fn strategy(self) -> MoveStrategy {
        match self {
            Variant::ConnectFour => MoveStrategy::ConnectFour,
            Variant::PopOut => MoveStrategy::PopOut,
            Variant::Gravity { .. } => MoveStrategy::Gravity,
        }
    }

    pub fn create_board(self) -> Board {
        Board::new(self.width(), self.height(), self.strategy())
    }

    /// A board of this variant's size built from text rows.
    pub fn board_from_rows<S: AsRef<str>>(self, rows: &[S]) -> Result<Board, GridError> {
        Board::from_rows(rows, self.width(), self.height(), self.strategy())
    }

    pub fn is_game_over(self, board: &Board) -> bool {
        match self {
            Variant::ConnectFour => c4::is_game_over(board),
            Variant::PopOut => pop_out::is_game_over(board),
            Variant::Gravity { .. } => gravity::is_game_over(board),
        }
    }
}
