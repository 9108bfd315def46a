use std::io::{self, BufRead, Write};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::{Board, Position, Token};
use crate::game::{Player, TerminationHandle};
use crate::strategy::MoveStrategy;

/// Plays a uniformly random move the board will accept.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    /// Seeded for reproducible matches, otherwise from entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        RandomPlayer { rng }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        RandomPlayer::new(None)
    }
}

/// Every move the board accepts in its current state.
pub fn permitted_moves(board: &Board) -> Vec<Position> {
    match board.strategy() {
        MoveStrategy::ConnectFour => (0..board.width())
            .filter(|&column| !board.is_column_full(column))
            .map(|column| Position::new(column, 0))
            .collect(),
        MoveStrategy::PopOut => (0..board.width())
            .map(|column| Position::new(column, 0))
            .collect(),
        MoveStrategy::Gravity => board
            .grid()
            .iter()
            .enumerate()
            .filter(|(_, token)| token.is_empty())
            .map(|(index, _)| Position::new(index / board.height(), index % board.height()))
            .collect(),
    }
}

impl Player for RandomPlayer {
    fn get_move(&mut self, board: &Board) -> Option<Position> {
        permitted_moves(board).choose(&mut self.rng).copied()
    }
}

/// Reads moves typed on a console. Asks for a row as well when tokens do not
/// stack in columns. Bad input is re-prompted; closed input gives up the
/// match through the termination handle, if one was given.
pub struct ConsoleHumanPlayer<R, W> {
    color: Token,
    input: R,
    output: W,
    termination: Option<TerminationHandle>,
}

impl<R: BufRead, W: Write> ConsoleHumanPlayer<R, W> {
    pub fn new(color: Token, input: R, output: W) -> Self {
        ConsoleHumanPlayer {
            color,
            input,
            output,
            termination: None,
        }
    }

    pub fn with_termination(mut self, termination: TerminationHandle) -> Self {
        self.termination = Some(termination);
        self
    }

    fn read_number(&mut self, what: &str, limit: usize) -> io::Result<Option<usize>> {
        loop {
            write!(self.output, "{} - {} (0-{}): ", self.color, what, limit - 1)?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            match line.trim().parse::<usize>() {
                Ok(number) if number < limit => return Ok(Some(number)),
                _ => writeln!(
                    self.output,
                    "Please enter a number between 0 and {}",
                    limit - 1
                )?,
            }
        }
    }

    fn read_position(&mut self, board: &Board) -> io::Result<Option<Position>> {
        let Some(column) = self.read_number("column", board.width())? else {
            return Ok(None);
        };
        if board.strategy().stacks_columns() {
            return Ok(Some(Position::new(column, 0)));
        }
        Ok(self
            .read_number("row", board.height())?
            .map(|row| Position::new(column, row)))
    }

    fn give_up(&self) {
        if let Some(termination) = &self.termination {
            termination.request();
        }
    }
}

impl<R: BufRead, W: Write> Player for ConsoleHumanPlayer<R, W> {
    fn get_move(&mut self, board: &Board) -> Option<Position> {
        match self.read_position(board) {
            Ok(Some(position)) => Some(position),
            Ok(None) => {
                log::info!("Input closed for {}", self.color);
                self.give_up();
                None
            }
            Err(err) => {
                log::error!("Console error for {}: {}", self.color, err);
                self.give_up();
                None
            }
        }
    }
}
