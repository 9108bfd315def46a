use std::hash::{Hash, Hasher};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use linked_hash_set::LinkedHashSet;

use crate::board::{Board, Position, Token};
use crate::games::Variant;

/// A source of moves for one colour. May block, e.g. while a human types.
///
/// Returning `None` means no move was produced this time; the game treats it
/// like a rejected move.
pub trait Player {
    fn get_move(&mut self, board: &Board) -> Option<Position>;
}

impl<F> Player for F
where
    F: FnMut(&Board) -> Option<Position>,
{
    fn get_move(&mut self, board: &Board) -> Option<Position> {
        self(board)
    }
}

/// Receives game events in the order they happen.
pub trait GameObserver {
    fn game_started(&self);
    fn move_performed_in_board(&self, color: Token, column: usize, row: usize);
    /// `winner` is [`Token::Empty`] on a draw or when the match was terminated.
    fn game_over(&self, winner: Token);
}

/// Decides whether another match follows the one that just ended.
pub trait AskPlayAgain {
    fn play_again(&mut self) -> bool;
}

impl<F> AskPlayAgain for F
where
    F: FnMut() -> bool,
{
    fn play_again(&mut self) -> bool {
        self()
    }
}

/// Observers are compared by identity, so registering the same one twice is a
/// no-op.
#[derive(Clone)]
struct ObserverHandle(Rc<dyn GameObserver>);

impl ObserverHandle {
    fn address(&self) -> *const () {
        Rc::as_ptr(&self.0) as *const ()
    }
}

impl PartialEq for ObserverHandle {
    fn eq(&self, other: &Self) -> bool {
        self.address() == other.address()
    }
}

impl Eq for ObserverHandle {}

impl Hash for ObserverHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address().hash(state);
    }
}

/// Asks a running game to stop. Cheap to clone and safe to use from another
/// thread than the one driving [`Game::run`].
#[derive(Debug, Clone, Default)]
pub struct TerminationHandle(Arc<AtomicBool>);

impl TerminationHandle {
    pub fn request(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    fn clear(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    NotStarted,
    InProgress,
    Over,
}

/// The turn-based state machine for one variant.
pub struct Game {
    variant: Variant,
    board: Board,
    turn: Token,
    winner: Token,
    status: GameStatus,
    observers: LinkedHashSet<ObserverHandle>,
    termination: TerminationHandle,
}

impl Game {
    pub fn new(variant: Variant) -> Self {
        Game {
            variant,
            board: variant.create_board(),
            turn: Token::Yellow,
            winner: Token::Empty,
            status: GameStatus::NotStarted,
            observers: LinkedHashSet::new(),
            termination: TerminationHandle::default(),
        }
    }

    /// A game already in progress on `board`, with `turn` to move next.
    #[cfg(test)]
    pub(crate) fn resume(variant: Variant, board: Board, turn: Token) -> Self {
        Game {
            board,
            turn,
            status: GameStatus::InProgress,
            ..Game::new(variant)
        }
    }

    pub fn start_game(&mut self) {
        self.board = self.variant.create_board();
        self.turn = Token::Yellow;
        self.winner = Token::Empty;
        self.status = GameStatus::InProgress;
        self.termination.clear();
        log::info!(
            "Starting {:?} on a {}x{} board",
            self.variant,
            self.columns(),
            self.rows()
        );
        for observer in self.observers.iter() {
            observer.0.game_started();
        }
    }

    /// Plays the current colour at `position`. Returns false, with nothing
    /// changed, when the move is rejected or the game is not in progress.
    pub fn apply_move(&mut self, position: Position) -> bool {
        if self.status != GameStatus::InProgress {
            log::debug!("Ignoring move while the game is {:?}", self.status);
            return false;
        }
        let landed = match self.board.put_token(self.turn, position.column, position.row) {
            Ok(landed) => landed,
            Err(err) => {
                log::debug!("{} cannot play {:?}: {}", self.turn, position, err);
                return false;
            }
        };
        log::debug!("{} plays ({}, {})", self.turn, landed.column, landed.row);
        for observer in self.observers.iter() {
            observer
                .0
                .move_performed_in_board(self.turn, landed.column, landed.row);
        }

        if self.is_game_over() {
            self.winner = self.decide_winner();
            self.status = GameStatus::Over;
            log::info!("Game over, winner: {}", self.winner);
            self.notify_game_over();
        } else {
            self.change_turn();
        }
        true
    }

    pub fn is_game_over(&self) -> bool {
        self.variant.is_game_over(&self.board)
    }

    // The mover first: an eviction can only hand the opponent a line that
    // the mover did not also get.
    fn decide_winner(&self) -> Token {
        [self.turn, self.turn.opposite()]
            .into_iter()
            .find(|&color| self.board.four_tokens_connected(color))
            .unwrap_or(Token::Empty)
    }

    fn change_turn(&mut self) {
        self.turn = self.turn.opposite();
    }

    fn notify_game_over(&self) {
        for observer in self.observers.iter() {
            observer.0.game_over(self.winner);
        }
    }

    /// Ends the match as requested by the user, keeping whatever winner is
    /// already decided. Observers always hear `game_over` next, even when the
    /// last move had already finished the match.
    fn end_on_request(&mut self) {
        log::warn!("Termination requested, ending the match");
        self.status = GameStatus::Over;
        self.notify_game_over();
    }

    /// Plays matches until `ask_play_again` declines. Moves come from `yellow`
    /// and `red` by colour; Yellow always opens.
    pub fn run(
        &mut self,
        yellow: &mut dyn Player,
        red: &mut dyn Player,
        ask_play_again: &mut dyn AskPlayAgain,
    ) {
        loop {
            self.start_game();
            loop {
                let player: &mut dyn Player = match self.turn {
                    Token::Red => &mut *red,
                    _ => &mut *yellow,
                };
                match player.get_move(&self.board) {
                    Some(position) => {
                        self.apply_move(position);
                    }
                    None => log::debug!("{} produced no move", self.turn),
                }
                if self.termination.is_requested() {
                    self.end_on_request();
                    break;
                }
                if self.status == GameStatus::Over {
                    break;
                }
            }
            if !ask_play_again.play_again() {
                break;
            }
        }
    }

    /// Registers `observer` unless it is already registered. Returns whether
    /// it was added.
    pub fn add_observer(&mut self, observer: Rc<dyn GameObserver>) -> bool {
        self.observers.insert_if_absent(ObserverHandle(observer))
    }

    pub fn remove_observer(&mut self, observer: &Rc<dyn GameObserver>) -> bool {
        self.observers.remove(&ObserverHandle(observer.clone()))
    }

    pub fn termination_handle(&self) -> TerminationHandle {
        self.termination.clone()
    }

    pub fn request_termination(&self) {
        self.termination.request();
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Token {
        self.turn
    }

    pub fn winner(&self) -> Token {
        self.winner
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn columns(&self) -> usize {
        self.variant.width()
    }

    pub fn rows(&self) -> usize {
        self.variant.height()
    }
}
