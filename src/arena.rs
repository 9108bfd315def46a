//! Plays a number of headless matches between configured players and prints
//! who won how often.
use std::cell::Cell;
use std::io::Write;
use std::process::ExitCode;
use std::rc::Rc;
use std::thread;

use clap::Parser;
use env_logger::fmt::Formatter;
use four_rs::board::Token;
use four_rs::game::{Game, GameObserver};
use four_rs::players::RandomPlayer;
use four_rs::settings::{ArenaSettings, PlayerSettings};
use log::Record;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg()]
    config_file: String,
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

/// Counts results as matches finish.
#[derive(Debug, Default)]
struct Tally {
    yellow: Cell<usize>,
    red: Cell<usize>,
    draws: Cell<usize>,
    episode: Cell<usize>,
}

impl GameObserver for Tally {
    fn game_started(&self) {
        self.episode.set(self.episode.get() + 1);
        log::info!("Starting episode {}", self.episode.get());
    }

    fn move_performed_in_board(&self, color: Token, column: usize, row: usize) {
        log::trace!("{} lands on ({}, {})", color, column, row);
    }

    fn game_over(&self, winner: Token) {
        let counter = match winner {
            Token::Yellow => &self.yellow,
            Token::Red => &self.red,
            Token::Empty => &self.draws,
        };
        counter.set(counter.get() + 1);
    }
}

fn make_player(settings: PlayerSettings) -> RandomPlayer {
    match settings {
        PlayerSettings::Random { seed } => RandomPlayer::new(seed),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    env_logger::Builder::new()
        .format(|buf: &mut Formatter, record: &Record| {
            let thread_id = thread::current().id();
            let timestamp = buf.timestamp_millis();
            writeln!(
                buf,
                "[{}] [Thread: {:?}] [{}] - {}",
                timestamp,
                thread_id,
                record.level(),
                record.args()
            )
        })
        .filter_level(args.verbose.log_level_filter())
        .init();

    let settings = match ArenaSettings::load(&args.config_file) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };
    let variant = match settings.variant() {
        Ok(variant) => variant,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let tally = Rc::new(Tally::default());
    let mut game = Game::new(variant);
    game.add_observer(tally.clone());

    let mut yellow = make_player(settings.yellow);
    let mut red = make_player(settings.red);
    let episodes = settings.episodes;
    let mut played = 0;
    let mut play_again = || {
        played += 1;
        played < episodes
    };
    game.run(&mut yellow, &mut red, &mut play_again);

    println!("Result\tCount\tPercentage");
    for (name, count) in [
        ("Yellow", tally.yellow.get()),
        ("Red", tally.red.get()),
        ("Draw", tally.draws.get()),
    ] {
        println!(
            "{}\t{}\t{:>5.2}%",
            name,
            count,
            (100.0 * count as f64) / episodes as f64
        );
    }
    ExitCode::SUCCESS
}
