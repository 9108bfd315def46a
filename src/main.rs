use std::io::{self, BufReader, Stdin};
use std::process::ExitCode;
use std::rc::Rc;

use clap::{Parser, ValueEnum};
use four_rs::board::Token;
use four_rs::console::{ConsoleObserver, ConsolePlayAgain};
use four_rs::game::{Game, Player, TerminationHandle};
use four_rs::games::Games;
use four_rs::players::{ConsoleHumanPlayer, RandomPlayer};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PlayerType {
    /// Typed on the console
    Human,
    Random,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg()]
    game: Games,

    /// Board width, gravity only
    #[arg(long)]
    width: Option<usize>,

    /// Board height, gravity only
    #[arg(long)]
    height: Option<usize>,

    #[arg(short, long, value_enum, default_value = "human")]
    yellow: PlayerType,

    #[arg(short, long, value_enum, default_value = "random")]
    red: PlayerType,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

// Stdin keeps its own shared buffer. Each reader here buffers a single byte so
// none of them holds on to lines meant for another.
fn console_input() -> BufReader<Stdin> {
    BufReader::with_capacity(1, io::stdin())
}

fn make_player(
    kind: PlayerType,
    color: Token,
    termination: &TerminationHandle,
) -> Box<dyn Player> {
    match kind {
        PlayerType::Human => Box::new(
            ConsoleHumanPlayer::new(color, console_input(), io::stdout())
                .with_termination(termination.clone()),
        ),
        PlayerType::Random => Box::new(RandomPlayer::default()),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let variant = match args.game.variant(args.width, args.height) {
        Ok(variant) => variant,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let mut game = Game::new(variant);
    game.add_observer(Rc::new(ConsoleObserver::new(variant, io::stdout())));
    let termination = game.termination_handle();
    let mut yellow = make_player(args.yellow, Token::Yellow, &termination);
    let mut red = make_player(args.red, Token::Red, &termination);
    let mut play_again = ConsolePlayAgain::new(console_input(), io::stdout());

    game.run(yellow.as_mut(), red.as_mut(), &mut play_again);
    ExitCode::SUCCESS
}
