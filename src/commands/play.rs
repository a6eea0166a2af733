//! Interactive duel command
//!
//! Human vs. computer over a configured number of rounds, roles alternating
//! each round. Input arrives through any `BufRead`, so the whole loop can be
//! driven by scripted input in tests.

use crate::core::{Code, GameConfig};
use crate::game::{Codemaker, Role, RoundOutcome, Scoreboard, Seat};
use crate::output::formatters::{colorize_code, feedback_pegs};
use crate::solver::CandidateTracker;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the interactive duel
///
/// The human breaks codes in the first round; roles swap every round after
/// that. Typing `quit` (or closing stdin) ends the match early.
///
/// # Errors
///
/// Returns an error on I/O failure or if the deduction state becomes
/// inconsistent, which indicates an internal scoring bug.
pub fn run_play<R: BufRead>(config: &GameConfig, mut reader: R) -> Result<(), String> {
    print_banner(config);

    let mut board = Scoreboard::new();
    let mut tracker = CandidateTracker::new(config.clone());
    let mut human_role = Role::Codebreaker;

    for round in 1..=config.rounds() {
        println!("\n{}", "─".repeat(60).cyan());
        println!(
            "Round {round}/{}: you are the {}",
            config.rounds(),
            human_role.to_string().bright_yellow().bold()
        );
        println!("{}", "─".repeat(60).cyan());

        let outcome = match human_role {
            Role::Codebreaker => human_breaks(config, &mut reader)?,
            Role::Codemaker => computer_breaks(config, &mut reader, &mut tracker)?,
        };

        let Some(outcome) = outcome else {
            println!("\nMatch abandoned. Thanks for playing!");
            return Ok(());
        };

        // Points always go to whoever made the code this round
        let maker_seat = match human_role {
            Role::Codebreaker => Seat::Computer,
            Role::Codemaker => Seat::Human,
        };
        let points = outcome.codemaker_points();
        board.award(maker_seat, points);

        println!(
            "\n{maker_seat} earned {points} point{} as codemaker.",
            if points == 1 { "" } else { "s" }
        );
        println!(
            "Score: You {} - {} Computer",
            board.human().to_string().bold(),
            board.computer().to_string().bold()
        );

        human_role = human_role.opposite();
    }

    print_verdict(board);
    Ok(())
}

fn print_banner(config: &GameConfig) {
    let alphabet: String = config
        .alphabet()
        .iter()
        .map(|peg| peg.symbol())
        .collect();

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Mastermind - Duel Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!(
        "Codes are {} pegs drawn from the colors {alphabet} (repeats allowed).",
        config.code_length()
    );
    println!(
        "The codebreaker has {} guesses. Feedback per guess:",
        config.max_guesses()
    );
    println!("  ● right color, right position");
    println!("  ○ right color, wrong position");
    println!("\nThe codemaker scores a point per guess used, plus a bonus if");
    println!("the code survives. Highest total wins. Type 'quit' to stop.\n");
}

fn print_verdict(board: Scoreboard) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "Final score: You {} - {} Computer",
        board.human().to_string().bold(),
        board.computer().to_string().bold()
    );

    match board.leader() {
        Some(Seat::Human) => println!("{}", "🏆 You win the match!".bright_green().bold()),
        Some(Seat::Computer) => println!("{}", "The computer wins the match.".bright_red()),
        None => println!("{}", "A draw!".bright_yellow()),
    }
    println!("{}", "═".repeat(60).bright_cyan());
}

/// Human codebreaker vs. a random computer secret
fn human_breaks<R: BufRead>(
    config: &GameConfig,
    reader: &mut R,
) -> Result<Option<RoundOutcome>, String> {
    let maker = Codemaker::random(config);
    println!("\nI have chosen a secret code. Crack it!");

    let mut guesses_used = 0;
    let mut cracked = false;

    while guesses_used < config.max_guesses() {
        let prompt = format!("Guess {}/{}", guesses_used + 1, config.max_guesses());
        let Some(line) = read_player_line(reader, &prompt)? else {
            return Ok(None);
        };

        let guess = match Code::parse(&line, config) {
            Ok(guess) => guess,
            Err(e) => {
                // Malformed input costs nothing; re-prompt
                println!("  {e}");
                continue;
            }
        };

        guesses_used += 1;
        let feedback = maker.feedback_for(&guess).map_err(|e| e.to_string())?;
        println!(
            "  {}  {}",
            colorize_code(&guess),
            feedback_pegs(feedback, config.code_length())
        );

        if feedback.is_crack(config.code_length()) {
            cracked = true;
            break;
        }
    }

    if cracked {
        println!(
            "\n{}",
            format!("🎉 Cracked in {guesses_used} guesses!")
                .bright_green()
                .bold()
        );
    } else {
        println!(
            "\nOut of guesses! The code was {}.",
            colorize_code(&maker.into_secret())
        );
    }

    Ok(Some(RoundOutcome {
        cracked,
        guesses_used,
    }))
}

/// Computer codebreaker vs. a human-entered secret
///
/// Feedback is computed by the engine from the entered secret, so the
/// deduction can never be poisoned by a miscounted hint.
fn computer_breaks<R: BufRead>(
    config: &GameConfig,
    reader: &mut R,
    tracker: &mut CandidateTracker,
) -> Result<Option<RoundOutcome>, String> {
    let maker = loop {
        let Some(line) = read_player_line(reader, "Enter your secret code")? else {
            return Ok(None);
        };

        match Code::parse(&line, config).and_then(|code| Codemaker::new(config, code)) {
            Ok(maker) => break maker,
            Err(e) => println!("  {e}"),
        }
    };

    println!("\nI will deduce it. Watch closely...");
    tracker.reset();

    let mut guesses_used = 0;
    let mut cracked = false;

    while guesses_used < config.max_guesses() {
        guesses_used += 1;

        let guess = tracker.sample().map_err(|e| e.to_string())?;
        let feedback = maker.feedback_for(&guess).map_err(|e| e.to_string())?;

        if feedback.is_crack(config.code_length()) {
            println!(
                "  Guess {guesses_used}: {}  {}",
                colorize_code(&guess),
                feedback_pegs(feedback, config.code_length())
            );
            cracked = true;
            break;
        }

        tracker.narrow(&guess, feedback).map_err(|e| e.to_string())?;
        println!(
            "  Guess {guesses_used}: {}  {}  ({} possible codes remain)",
            colorize_code(&guess),
            feedback_pegs(feedback, config.code_length()),
            tracker.size()
        );
    }

    if cracked {
        println!(
            "\n{}",
            format!("💡 Deduced your code in {guesses_used} guesses!")
                .bright_cyan()
                .bold()
        );
    } else {
        println!("\nYour code survived all {guesses_used} guesses. Well made!");
    }

    Ok(Some(RoundOutcome {
        cracked,
        guesses_used,
    }))
}

/// Prompt and read one line; `None` means quit (command or end of input)
fn read_player_line<R: BufRead>(reader: &mut R, prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let bytes = reader.read_line(&mut input).map_err(|e| e.to_string())?;
    if bytes == 0 {
        return Ok(None);
    }

    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("exit") {
        return Ok(None);
    }

    Ok(Some(trimmed.to_string()))
}
