use std::io::{self, BufRead, Write};

use mini_games_common::games::SessionRng;
use mini_games_common::games::number_guess::{BestScore, Difficulty, GuessOutcome, GuessRound};
use mini_games_common::log;

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

enum RoundEnd {
    Solved,
    Quit,
}

fn play_round<R: BufRead, W: Write>(
    round: &mut GuessRound,
    best: &mut BestScore,
    input: &mut R,
    output: &mut W,
) -> io::Result<RoundEnd> {
    let (lower, upper) = round.range();

    loop {
        write!(output, "Enter your guess [{}-{}]: ", lower, upper)?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            writeln!(output, "Goodbye!")?;
            return Ok(RoundEnd::Quit);
        };

        let line = line.trim();
        if line.is_empty() {
            writeln!(output, "Please enter a number.")?;
            continue;
        }
        if line.eq_ignore_ascii_case("quit") {
            writeln!(output, "Goodbye!")?;
            return Ok(RoundEnd::Quit);
        }
        let Ok(value) = line.parse::<i64>() else {
            writeln!(output, "Invalid input. Please enter a valid integer.")?;
            continue;
        };

        match round.guess(value) {
            Ok(outcome @ GuessOutcome::Correct { score, .. }) => {
                writeln!(output, "{}", outcome)?;
                if best.record(score) {
                    writeln!(output, "New best score: {} (lower is better)", score)?;
                } else if let Some(best_score) = best.get() {
                    writeln!(output, "Score: {}. Best: {} (lower is better)", score, best_score)?;
                }
                return Ok(RoundEnd::Solved);
            }
            Ok(outcome) => writeln!(output, "{}", outcome)?,
            Err(e) => writeln!(output, "{}", e)?,
        }
    }
}

pub fn run_guess_game<R: BufRead, W: Write>(
    difficulty: Difficulty,
    rng: &mut SessionRng,
    input: &mut R,
    output: &mut W,
) -> io::Result<BestScore> {
    let mut best = BestScore::new();
    let (lower, upper) = difficulty.range();
    log!("Number guess: {} difficulty, seed {}", difficulty, rng.seed());

    writeln!(
        output,
        "I'm thinking of a number between {} and {}. Type 'quit' to exit.",
        lower, upper
    )?;

    loop {
        let mut round = GuessRound::new(difficulty, rng);
        match play_round(&mut round, &mut best, input, output)? {
            RoundEnd::Quit => return Ok(best),
            RoundEnd::Solved => log!("Round solved in {} attempt(s)", round.attempts()),
        }

        write!(output, "Play again? (y/n): ")?;
        output.flush()?;
        let again = read_line(input)?
            .is_some_and(|answer| answer.trim().to_ascii_lowercase().starts_with('y'));
        if !again {
            writeln!(output, "Thanks for playing!")?;
            return Ok(best);
        }
        writeln!(output, "New round! Guess a number between {} and {}.", lower, upper)?;
    }
}
