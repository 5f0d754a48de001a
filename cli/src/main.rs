mod config;
mod guess_runner;
mod render;
mod tictactoe_runner;

use std::io;
use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use mini_games_common::games::SessionRng;
use mini_games_common::games::number_guess::Difficulty;
use mini_games_common::games::tictactoe::{BotType, Cell};
use mini_games_common::{LogLevel, debug_log, log, logger};

use config::{CONFIG_FILE, Config, StartingPlayer, get_config_manager};
use guess_runner::run_guess_game;
use tictactoe_runner::{TicTacToeSettings, run_tictactoe_game};

#[derive(Parser, Debug)]
#[command(name = "mini_games", about = "Terminal tic-tac-toe against a bot, plus a number guessing game")]
struct Args {
    /// YAML config file; missing files fall back to defaults.
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    #[arg(long, global = true)]
    use_log_prefix: bool,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play tic-tac-toe against a bot.
    Tictactoe(TicTacToeArgs),
    /// Guess the secret number.
    Guess(GuessArgs),
}

#[derive(ClapArgs, Debug)]
struct TicTacToeArgs {
    /// random, heuristic or minimax
    #[arg(long)]
    bot: Option<BotType>,

    /// human or bot
    #[arg(long)]
    start: Option<StartingPlayer>,

    /// X or O
    #[arg(long)]
    human_mark: Option<Cell>,

    /// Play the configured mark's opponent. Ignored when --human-mark is given.
    #[arg(long)]
    swap_marks: bool,

    #[arg(long)]
    seed: Option<u64>,
}

impl TicTacToeArgs {
    fn resolve(&self, config: &Config) -> TicTacToeSettings {
        let defaults = &config.tictactoe;
        let human_mark = match self.human_mark {
            Some(mark) => mark,
            None if self.swap_marks => defaults.human_mark.opponent().unwrap_or(Cell::O),
            None => defaults.human_mark,
        };
        TicTacToeSettings {
            human_mark,
            start: self.start.unwrap_or(defaults.start),
            bot_type: self.bot.unwrap_or(defaults.bot),
            seed: self.seed.or(defaults.seed),
        }
    }
}

#[derive(ClapArgs, Debug)]
struct GuessArgs {
    /// easy, normal or hard
    #[arg(long)]
    difficulty: Option<Difficulty>,

    #[arg(long)]
    seed: Option<u64>,
}

impl GuessArgs {
    fn resolve(&self, config: &Config) -> (Difficulty, Option<u64>) {
        (
            self.difficulty.unwrap_or(config.guess.difficulty),
            self.seed.or(config.guess.seed),
        )
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Cli".to_string())
    } else {
        None
    };
    let level = if args.verbose { LogLevel::Debug } else { LogLevel::Info };
    logger::init_logger(prefix, level);

    let config = get_config_manager(&args.config).get_config()?;
    debug_log!("Loaded config from {}: {:?}", args.config.display(), config);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    match &args.command {
        Command::Tictactoe(game_args) => {
            let settings = game_args.resolve(&config);
            let scoreboard = run_tictactoe_game(&settings, &mut input, &mut output)?;
            log!("Session finished: {}", scoreboard);
        }
        Command::Guess(game_args) => {
            let (difficulty, seed) = game_args.resolve(&config);
            let mut rng = SessionRng::from_optional_seed(seed);
            let best = run_guess_game(difficulty, &mut rng, &mut input, &mut output)?;
            match best.get() {
                Some(score) => log!("Session finished, best score {}", score),
                None => log!("Session finished without a solved round"),
            }
        }
    }

    Ok(())
}
