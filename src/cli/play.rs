//! Interactive quiz over stdin/stdout

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Result;

use skyquiz::config::Config;
use skyquiz::progress::leaderboard::rank_of;
use skyquiz::progress::{GameResult, ProgressStore, RecordOutcome};
use skyquiz::quiz::{Advance, Level, OPTION_COUNT, QuizSession, ResultRecorder};

use super::resolve_player;

/// How a round ended
#[derive(Debug, PartialEq, Eq)]
enum RoundEnd {
    Finished,
    Quit,
}

pub fn play_command(
    config: &Config,
    progress: &ProgressStore,
    player: Option<String>,
    level: Option<u8>,
) -> Result<()> {
    let player = resolve_player(progress, player, true)?;
    let level = match level {
        Some(n) => Level::try_from(n)?,
        None => config.quiz.default_level,
    };

    let recorder: Arc<dyn ResultRecorder> = Arc::new(progress.clone());
    let mut session = QuizSession::new(player, level, recorder);

    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();
    loop {
        if run_round(&mut session, &mut input, &mut out, config.quiz.show_explanations)? == RoundEnd::Quit {
            writeln!(out, "Round abandoned, nothing was recorded.")?;
            break;
        }
        if !ask_again(&mut input, &mut out)? {
            break;
        }
        session.restart();
    }
    Ok(())
}

fn run_round<R: BufRead, W: Write>(
    session: &mut QuizSession,
    input: &mut R,
    out: &mut W,
    show_explanations: bool,
) -> Result<RoundEnd> {
    writeln!(
        out,
        "\n{} - {} ({} questions, {} points max)",
        session.player_name(),
        session.level().label(),
        session.total_questions(),
        session.max_points()
    )?;

    loop {
        if let Some(question) = session.current_question().copied() {
            writeln!(
                out,
                "\nQuestion {}/{} [{} pts]  Score: {}",
                session.question_number().unwrap_or_default(),
                session.total_questions(),
                question.points,
                session.score()
            )?;
            writeln!(out, "{}", question.question)?;
            for (i, (option, image)) in question.options.iter().zip(question.images).enumerate() {
                writeln!(out, "  {}) {}  [{}]", i + 1, option, image)?;
            }

            let Some(choice) = read_choice(input, out)? else {
                return Ok(RoundEnd::Quit);
            };
            if let Some(feedback) = session.select_answer(choice) {
                if feedback.is_correct {
                    writeln!(out, "Correct! +{} points", feedback.points_awarded)?;
                } else if show_explanations {
                    writeln!(out, "Wrong. The answer was: {}", question.correct_option())?;
                } else {
                    writeln!(out, "Wrong.")?;
                }
            }
        }

        match session.advance() {
            Advance::Next { .. } => continue,
            Advance::Completed { result, outcome } => {
                print_summary(out, &result, &outcome)?;
                return Ok(RoundEnd::Finished);
            }
            Advance::AlreadyComplete => return Ok(RoundEnd::Finished),
        }
    }
}

/// Read a 1-based option number; `None` on `q` or end of input
fn read_choice<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Option<usize>> {
    loop {
        write!(out, "Your answer (1-{}, q to quit): ", OPTION_COUNT)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        match line.parse::<usize>() {
            Ok(n) if (1..=OPTION_COUNT).contains(&n) => return Ok(Some(n - 1)),
            _ => writeln!(out, "Please enter a number from 1 to {}.", OPTION_COUNT)?,
        }
    }
}

fn ask_again<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<bool> {
    write!(out, "\nPlay again? [y/N] ")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}

fn print_summary<W: Write>(out: &mut W, result: &GameResult, outcome: &RecordOutcome) -> Result<()> {
    writeln!(out, "\nQuiz complete!")?;
    writeln!(
        out,
        "Your score: {}/{} ({}%)  Points: {}/{}  Time: {}s",
        result.score,
        result.total_questions,
        result.percentage,
        result.points,
        result.max_points,
        result.time_spent
    )?;
    writeln!(out, "{}", result.verdict())?;

    if outcome.stats.is_none() {
        writeln!(out, "(Progress could not be saved this time.)")?;
        return Ok(());
    }
    for id in &outcome.new_achievements {
        writeln!(out, "Achievement unlocked: {} - {}", id.title(), id.description())?;
    }
    if let Some(rank) = rank_of(&outcome.leaderboard, &result.player_name) {
        writeln!(out, "Leaderboard rank: #{}", rank)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Correct option numbers for the easy round, 1-based
    const EASY_ANSWERS: &str = "3\n1\n2\n1\n2\n1\n1\n1\n";

    fn easy_session(progress: &ProgressStore) -> QuizSession {
        QuizSession::new("Ana", Level::Easy, Arc::new(progress.clone()))
    }

    #[test]
    fn test_perfect_round_is_recorded() {
        let progress = ProgressStore::in_memory();
        let mut session = easy_session(&progress);
        let mut out = Vec::new();

        let end = run_round(&mut session, &mut Cursor::new(EASY_ANSWERS), &mut out, true).unwrap();

        assert_eq!(end, RoundEnd::Finished);
        let stats = progress.player_stats("Ana").unwrap();
        assert_eq!(stats.best_score, 8);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Your score: 8/8 (100%)"));
        assert!(text.contains("Achievement unlocked: Perfect Landing"));
        assert!(text.contains("Leaderboard rank: #1"));
    }

    #[test]
    fn test_invalid_input_reprompts() {
        let progress = ProgressStore::in_memory();
        let mut session = easy_session(&progress);
        let mut out = Vec::new();
        let input = format!("x\n9\n{}", EASY_ANSWERS);

        run_round(&mut session, &mut Cursor::new(input), &mut out, true).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Please enter a number from 1 to 4.").count(), 2);
        assert_eq!(progress.player_stats("Ana").unwrap().total_correct_answers, 8);
    }

    #[test]
    fn test_quit_records_nothing() {
        let progress = ProgressStore::in_memory();
        let mut session = easy_session(&progress);
        let mut out = Vec::new();

        let end = run_round(&mut session, &mut Cursor::new("1\nq\n"), &mut out, true).unwrap();

        assert_eq!(end, RoundEnd::Quit);
        assert!(progress.game_results().is_empty());
    }

    #[test]
    fn test_wrong_answer_reveals_correct_option() {
        let progress = ProgressStore::in_memory();
        let mut session = easy_session(&progress);
        let mut out = Vec::new();

        run_round(&mut session, &mut Cursor::new("1\n"), &mut out, true).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Wrong. The answer was: Passenger aircraft"));
    }
}
