use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc;
use std::thread;

use four_rs::board::{Board, Position, Token};
use four_rs::game::{Game, GameObserver, GameStatus};
use four_rs::games::Variant;
use four_rs::players::RandomPlayer;
use test_env_log::test;

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Started,
    Moved(Token, usize, usize),
    Over(Token),
}

#[derive(Default)]
struct Log {
    events: RefCell<Vec<Event>>,
}

impl GameObserver for Log {
    fn game_started(&self) {
        self.events.borrow_mut().push(Event::Started);
    }

    fn move_performed_in_board(&self, color: Token, column: usize, row: usize) {
        self.events
            .borrow_mut()
            .push(Event::Moved(color, column, row));
    }

    fn game_over(&self, winner: Token) {
        self.events.borrow_mut().push(Event::Over(winner));
    }
}

fn play_random_match(variant: Variant, seed: u64) -> (Game, Rc<Log>) {
    let log = Rc::new(Log::default());
    let mut game = Game::new(variant);
    game.add_observer(log.clone());
    let mut yellow = RandomPlayer::new(Some(seed));
    let mut red = RandomPlayer::new(Some(seed + 1));
    game.run(&mut yellow, &mut red, &mut || false);
    (game, log)
}

fn check_finished_match(game: &Game, log: &Log) {
    let events = log.events.borrow();
    assert_eq!(events.first(), Some(&Event::Started));
    assert_eq!(events.last(), Some(&Event::Over(game.winner())));
    assert_eq!(
        events
            .iter()
            .filter(|event| matches!(event, Event::Over(_)))
            .count(),
        1
    );
    assert_eq!(game.status(), GameStatus::Over);
    assert!(game.is_game_over());

    // Colours alternate starting with yellow
    let movers: Vec<Token> = events
        .iter()
        .filter_map(|event| match event {
            Event::Moved(color, _, _) => Some(*color),
            _ => None,
        })
        .collect();
    for (index, color) in movers.iter().enumerate() {
        let expected = if index % 2 == 0 { Token::Yellow } else { Token::Red };
        assert_eq!(*color, expected);
    }

    match game.winner() {
        Token::Empty => assert!(
            game.board().is_board_full()
                || (game.board().four_tokens_connected(Token::Yellow)
                    && game.board().four_tokens_connected(Token::Red))
        ),
        winner => assert!(game.board().four_tokens_connected(winner)),
    }
}

#[test]
fn test_random_connect_four_matches() {
    for seed in 0..20 {
        let (game, log) = play_random_match(Variant::ConnectFour, seed);
        check_finished_match(&game, &log);
        assert!(game.board().tokens() <= 42);
    }
}

#[test]
fn test_random_pop_out_matches() {
    for seed in 0..20 {
        let (game, log) = play_random_match(Variant::PopOut, seed);
        check_finished_match(&game, &log);
        let board = game.board();
        if game.winner() != Token::Empty {
            assert!(
                !board.four_tokens_connected(game.winner().opposite()),
                "a lone line decides the game"
            );
        }
    }
}

#[test]
fn test_random_gravity_matches() {
    for (seed, (width, height)) in [(5, 5), (10, 10), (15, 5), (6, 13)].into_iter().enumerate() {
        let variant = Variant::gravity(width, height).unwrap();
        let (game, log) = play_random_match(variant, seed as u64);
        check_finished_match(&game, &log);
        assert_eq!((game.columns(), game.rows()), (width, height));
    }
}

#[test]
fn test_several_episodes() {
    let log = Rc::new(Log::default());
    let mut game = Game::new(Variant::ConnectFour);
    game.add_observer(log.clone());
    let mut yellow = RandomPlayer::new(Some(11));
    let mut red = RandomPlayer::new(Some(12));
    let mut remaining = 4;
    let mut again = || {
        remaining -= 1;
        remaining > 0
    };
    game.run(&mut yellow, &mut red, &mut again);

    let events = log.events.borrow();
    let started = events.iter().filter(|event| **event == Event::Started).count();
    let finished = events
        .iter()
        .filter(|event| matches!(event, Event::Over(_)))
        .count();
    assert_eq!((started, finished), (4, 4));
}

#[test]
fn test_termination_from_another_thread() {
    let log = Rc::new(Log::default());
    let mut game = Game::new(Variant::ConnectFour);
    game.add_observer(log.clone());
    let termination = game.termination_handle();

    let (sender, receiver) = mpsc::sync_channel::<Position>(0);
    let driver = thread::spawn(move || {
        sender.send(Position::new(0, 0)).unwrap();
        sender.send(Position::new(1, 0)).unwrap();
        termination.request();
    });

    let mut yellow = |_: &Board| receiver.recv().ok();
    let mut red = |_: &Board| receiver.recv().ok();
    let mut asked = 0;
    let mut again = || {
        asked += 1;
        false
    };
    game.run(&mut yellow, &mut red, &mut again);
    driver.join().unwrap();

    assert_eq!(asked, 1);
    assert_eq!(game.winner(), Token::Empty);
    assert_eq!(
        *log.events.borrow(),
        vec![
            Event::Started,
            Event::Moved(Token::Yellow, 0, 5),
            Event::Moved(Token::Red, 1, 5),
            Event::Over(Token::Empty),
        ]
    );
}
