//! Text front end: renders the game to a writer and asks to play again.
use std::cell::RefCell;
use std::io::{self, BufRead, Write};

use crate::board::{Board, Token};
use crate::game::{AskPlayAgain, GameObserver};
use crate::games::Variant;

/// Prints the board after every move. Keeps its own copy of the grid, built
/// only from the notifications it receives.
pub struct ConsoleObserver<W> {
    variant: Variant,
    board: RefCell<Board>,
    output: RefCell<W>,
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(variant: Variant, output: W) -> Self {
        ConsoleObserver {
            variant,
            board: RefCell::new(variant.create_board()),
            output: RefCell::new(output),
        }
    }

    fn show(&self, message: &str) {
        let board = self.board.borrow();
        let mut output = self.output.borrow_mut();
        if let Err(err) = write!(output, "{}\n{}", message, board).and_then(|_| output.flush()) {
            log::warn!("Could not draw the board: {}", err);
        }
    }

    fn say(&self, message: &str) {
        if let Err(err) = writeln!(self.output.borrow_mut(), "{}", message) {
            log::warn!("Could not write to the console: {}", err);
        }
    }
}

impl<W: Write> GameObserver for ConsoleObserver<W> {
    fn game_started(&self) {
        *self.board.borrow_mut() = self.variant.create_board();
        self.show(&format!("New game. {} to play", Token::Yellow));
    }

    fn move_performed_in_board(&self, color: Token, column: usize, row: usize) {
        {
            let mut board = self.board.borrow_mut();
            // An occupied landing cell means the column was pushed down and
            // its bottom token fell out.
            if !board.get_slot(column, row).is_empty() {
                for below in (1..board.height()).rev() {
                    let above = board.get_slot(column, below - 1);
                    board.set_cell(column, below, above);
                }
            }
            board.set_cell(column, row, color);
        }
        self.show(&format!(
            "{} played ({}, {}). {} to play",
            color,
            column,
            row,
            color.opposite()
        ));
    }

    fn game_over(&self, winner: Token) {
        match winner {
            Token::Empty => self.say("Game over: draw"),
            winner => self.say(&format!("Game over: {} wins", winner)),
        }
    }
}

/// Asks `Play again? (y/n)` until it gets an answer. Closed input means no.
pub struct ConsolePlayAgain<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePlayAgain<R, W> {
    pub fn new(input: R, output: W) -> Self {
        ConsolePlayAgain { input, output }
    }

    fn ask(&mut self) -> io::Result<bool> {
        loop {
            write!(self.output, "Play again? (y/n): ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(false);
            }
            match line.trim().to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => {}
            }
        }
    }
}

impl<R: BufRead, W: Write> AskPlayAgain for ConsolePlayAgain<R, W> {
    fn play_again(&mut self) -> bool {
        self.ask().unwrap_or_else(|err| {
            log::error!("Console error while asking to play again: {}", err);
            false
        })
    }
}
