use std::io::{self, BufRead, Write};

use mini_games_common::games::SessionRng;
use mini_games_common::games::tictactoe::{
    Board, BoardError, BotType, Cell, GameHistory, GameStatus, Move, Scoreboard, calculate_move,
};
use mini_games_common::log;

use crate::config::StartingPlayer;
use crate::render::render_board;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeSettings {
    pub human_mark: Cell,
    pub start: StartingPlayer,
    pub bot_type: BotType,
    pub seed: Option<u64>,
}

impl TicTacToeSettings {
    pub fn bot_mark(&self) -> Cell {
        self.human_mark.opponent().unwrap_or(Cell::O)
    }

    pub fn starting_mark(&self) -> Cell {
        match self.start {
            StartingPlayer::Human => self.human_mark,
            StartingPlayer::Bot => self.bot_mark(),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum PlayerCommand {
    Place { row: usize, col: usize },
    Undo,
    Redo,
    Quit,
}

fn parse_command(input: &str) -> Result<PlayerCommand, &'static str> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Invalid input. Please enter row,col like 2,3.");
    }
    match input.to_ascii_lowercase().as_str() {
        "q" => return Ok(PlayerCommand::Quit),
        "u" => return Ok(PlayerCommand::Undo),
        "r" => return Ok(PlayerCommand::Redo),
        _ => {}
    }

    let parts: Vec<&str> = input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();
    match parts.as_slice() {
        [row, col] => match (row.parse::<usize>(), col.parse::<usize>()) {
            (Ok(row), Ok(col)) => Ok(PlayerCommand::Place { row, col }),
            _ => Err("Invalid format. Use row,col with numbers 1-3."),
        },
        _ => Err("Invalid format. Use row,col with numbers 1-3."),
    }
}

fn describe_rejection(error: &BoardError) -> String {
    match error {
        BoardError::OutOfBounds { .. } => "Row and column must be between 1 and 3.".to_string(),
        BoardError::CellOccupied { .. } => "That cell is already taken.".to_string(),
        other => other.to_string(),
    }
}

fn result_message(status: GameStatus, human_mark: Cell) -> &'static str {
    match status.winner() {
        Some(mark) if mark == human_mark => "You win!",
        Some(_) => "Bot wins!",
        None => "Draw.",
    }
}

fn summary_line(settings: &TicTacToeSettings) -> String {
    let starter = match settings.start {
        StartingPlayer::Human => "Human",
        StartingPlayer::Bot => "Bot",
    };
    format!(
        "Starting: {} | Human: {} | Bot: {}",
        starter,
        settings.human_mark,
        settings.bot_mark()
    )
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Steps through history until it is the human's turn again or the game is over.
fn rewind(history: &mut GameHistory, human_mark: Cell, step: fn(&mut GameHistory) -> bool) -> bool {
    if !step(history) {
        return false;
    }
    while history.current().current_player() != human_mark
        && !history.current().status().is_over()
        && step(history)
    {}
    true
}

enum GameEnd {
    Finished(GameStatus),
    Quit,
}

fn play_single_game<R: BufRead, W: Write>(
    settings: &TicTacToeSettings,
    rng: &mut SessionRng,
    input: &mut R,
    output: &mut W,
) -> io::Result<GameEnd> {
    let board = Board::new(settings.starting_mark()).map_err(io::Error::other)?;
    let mut history = GameHistory::new(board);
    let bot_mark = settings.bot_mark();

    loop {
        let board = *history.current();
        let status = board.status();
        if status.is_over() {
            write!(output, "{}", render_board(&board))?;
            writeln!(output, "{}", result_message(status, settings.human_mark))?;
            return Ok(GameEnd::Finished(status));
        }

        if board.current_player() == bot_mark {
            let Some(mv) = calculate_move(settings.bot_type, &board, rng) else {
                return Ok(GameEnd::Finished(status));
            };
            history.push(board.apply(mv).map_err(io::Error::other)?);
            continue;
        }

        write!(output, "{}", render_board(&board))?;
        write!(output, "Enter row,col (1-3,1-3), 'u' undo, 'r' redo, or 'q' to quit: ")?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(GameEnd::Quit);
        };

        match parse_command(&line) {
            Ok(PlayerCommand::Quit) => return Ok(GameEnd::Quit),
            Ok(PlayerCommand::Undo) => {
                if !rewind(&mut history, settings.human_mark, GameHistory::undo) {
                    writeln!(output, "Nothing to undo.")?;
                }
            }
            Ok(PlayerCommand::Redo) => {
                if !rewind(&mut history, settings.human_mark, GameHistory::redo) {
                    writeln!(output, "Nothing to redo.")?;
                }
            }
            Ok(PlayerCommand::Place { row, col }) => {
                let mv = Move::new(
                    row.wrapping_sub(1),
                    col.wrapping_sub(1),
                    settings.human_mark,
                );
                match board.apply(mv) {
                    Ok(next) => history.push(next),
                    Err(e) => writeln!(output, "Error: {}", describe_rejection(&e))?,
                }
            }
            Err(message) => writeln!(output, "{}", message)?,
        }
    }
}

fn wants_another_game<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<bool> {
    write!(output, "Play again? (y/n): ")?;
    output.flush()?;
    Ok(read_line(input)?.is_some_and(|answer| {
        answer.trim().to_ascii_lowercase().starts_with('y')
    }))
}

pub fn run_tictactoe_game<R: BufRead, W: Write>(
    settings: &TicTacToeSettings,
    input: &mut R,
    output: &mut W,
) -> io::Result<Scoreboard> {
    let mut rng = SessionRng::from_optional_seed(settings.seed);
    let mut scoreboard = Scoreboard::new();

    log!(
        "Tic-tac-toe: human {} vs {} bot {}, {} starts, seed {}",
        settings.human_mark,
        settings.bot_type,
        settings.bot_mark(),
        settings.start,
        rng.seed()
    );

    writeln!(output, "{}", summary_line(settings))?;

    loop {
        writeln!(
            output,
            "Tic-Tac-Toe: Human ({}) vs Bot ({})",
            settings.human_mark,
            settings.bot_mark()
        )?;

        match play_single_game(settings, &mut rng, input, output)? {
            GameEnd::Quit => return Ok(scoreboard),
            GameEnd::Finished(status) => {
                log!("Game over: {:?}", status);
                scoreboard.record(status);
                writeln!(output, "Score: {}", scoreboard)?;
            }
        }

        if !wants_another_game(input, output)? {
            return Ok(scoreboard);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn settings(start: StartingPlayer, bot_type: BotType) -> TicTacToeSettings {
        TicTacToeSettings {
            human_mark: Cell::X,
            start,
            bot_type,
            seed: Some(1),
        }
    }

    fn run(settings: &TicTacToeSettings, script: &str) -> (Scoreboard, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let scoreboard = run_tictactoe_game(settings, &mut input, &mut output).unwrap();
        (scoreboard, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("2,3\n"), Ok(PlayerCommand::Place { row: 2, col: 3 }));
        assert_eq!(parse_command(" 1 , 1 "), Ok(PlayerCommand::Place { row: 1, col: 1 }));
        assert_eq!(parse_command("U"), Ok(PlayerCommand::Undo));
        assert_eq!(parse_command("r"), Ok(PlayerCommand::Redo));
        assert_eq!(parse_command("q"), Ok(PlayerCommand::Quit));
        assert!(parse_command("").is_err());
        assert!(parse_command("1").is_err());
        assert!(parse_command("a,b").is_err());
    }

    #[test]
    fn test_settings_marks() {
        let s = settings(StartingPlayer::Bot, BotType::Minimax);
        assert_eq!(s.bot_mark(), Cell::O);
        assert_eq!(s.starting_mark(), Cell::O);
    }

    #[test]
    fn test_human_can_fork_heuristic_bot() {
        // Heuristic answers: center, then corner (1,3), then blocks (2,1).
        let (scoreboard, output) = run(
            &settings(StartingPlayer::Human, BotType::Heuristic),
            "1,1\n3,3\n3,1\n3,2\nn\n",
        );
        assert!(output.contains("You win!"));
        assert_eq!(scoreboard.x_wins, 1);
    }

    #[test]
    fn test_minimax_bot_punishes_blunder() {
        // Minimax answers center, then (1,2); the third human move ignores the column threat.
        let (scoreboard, output) = run(
            &settings(StartingPlayer::Human, BotType::Minimax),
            "1,1\n3,3\n3,1\nn\n",
        );
        assert!(output.contains("Bot wins!"));
        assert_eq!(scoreboard.o_wins, 1);
        assert!(output.contains("Score: X: 0 | O: 1 | Draws: 0"));
    }

    #[test]
    fn test_invalid_moves_are_reported() {
        let (scoreboard, output) = run(
            &settings(StartingPlayer::Human, BotType::Heuristic),
            "0,1\n1,1\n1,1\n2,2\nhello\nq\n",
        );
        assert!(output.contains("Row and column must be between 1 and 3."));
        assert!(output.contains("That cell is already taken."));
        assert!(output.contains("Invalid format."));
        assert_eq!(scoreboard.total(), 0);
    }

    #[test]
    fn test_undo_returns_to_human_turn() {
        let (_, output) = run(
            &settings(StartingPlayer::Human, BotType::Heuristic),
            "u\n1,1\nu\nu\nr\nr\nq\n",
        );
        assert!(output.contains("Nothing to undo."));
        assert!(output.contains("Nothing to redo."));
    }

    #[test]
    fn test_bot_starts_when_configured() {
        let (_, output) = run(&settings(StartingPlayer::Bot, BotType::Heuristic), "q\n");
        // Heuristic opens in the center.
        assert!(output.contains("2     | O |  "));
    }

    #[test]
    fn test_summary_line_printed_once_per_session() {
        let (scoreboard, output) = run(
            &settings(StartingPlayer::Human, BotType::Heuristic),
            "1,1\n3,3\n3,1\n3,2\ny\nq\n",
        );
        assert_eq!(scoreboard.x_wins, 1);
        assert!(output.contains("Starting: Human | Human: X | Bot: O"));
        assert_eq!(output.matches("Starting:").count(), 1);
    }

    #[test]
    fn test_summary_line_when_bot_starts_as_x() {
        let settings = TicTacToeSettings {
            human_mark: Cell::O,
            start: StartingPlayer::Bot,
            bot_type: BotType::Minimax,
            seed: Some(1),
        };
        let (_, output) = run(&settings, "q\n");
        assert!(output.contains("Starting: Bot | Human: O | Bot: X"));
    }

    #[test]
    fn test_end_of_input_quits() {
        let (scoreboard, _) = run(&settings(StartingPlayer::Human, BotType::Random), "");
        assert_eq!(scoreboard.total(), 0);
    }
}
