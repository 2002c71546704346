//! Console text for the game and command results
//!
//! Game screens write to any `Write` so the session can be driven from tests.

use super::formatters::{colored_hint, length_row, policy_wins};
use crate::commands::ScoreResult;
use crate::core::{Code, Score};
use crate::game::{MAX_ATTEMPTS, StatsReport};
use colored::Colorize;
use std::io::{self, Write};

/// Title banner shown once at startup
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_welcome(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{}",
        "╔══════════════════════════════════════════════════════════════╗".bright_cyan()
    )?;
    writeln!(
        out,
        "{}{}{}",
        "║".bright_cyan(),
        "                  Welcome to MASTERMIND                       "
            .bright_white()
            .bold(),
        "║".bright_cyan()
    )?;
    writeln!(
        out,
        "{}",
        "╚══════════════════════════════════════════════════════════════╝".bright_cyan()
    )?;
    writeln!(out)
}

/// Code length menu printed before each length prompt
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_length_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Choose the code length: ")?;
    writeln!(out, "4")?;
    writeln!(out, "6")?;
    writeln!(out, "8")
}

/// Opening line of a new game
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_game_intro(out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "\nWrite a code using the numbers from 1 to 8. You have {MAX_ATTEMPTS} turns to guess the code."
    )
}

/// Control word reminders shown before every guess prompt
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_turn_reminder(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Type 'exit' anytime to quit the game.")?;
    writeln!(out, "Type 'tutorial' to see game's instructions.")
}

/// Static rules shown for the `tutorial` command
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_instructions(out: &mut impl Write) -> io::Result<()> {
    let border = "*".repeat(80);

    writeln!(out, "{}", border.bright_black())?;
    writeln!(out, "*\t\t\t{}", "This is Mastermind!".bright_cyan().bold())?;
    writeln!(out, "*")?;
    writeln!(
        out,
        "*\tThe goal of the game is to guess the code the computer generated."
    )?;
    writeln!(out, "*")?;
    writeln!(out, "*\tYou have {MAX_ATTEMPTS} attempts to guess the code.")?;
    writeln!(
        out,
        "*\tIn order to enter your guess, please type numbers from 1 to 8,"
    )?;
    writeln!(
        out,
        "*\taccording to the code size you selected (4, 6 or 8 digits)."
    )?;
    writeln!(out, "*")?;
    writeln!(
        out,
        "*\tFor every guess you entered, you will be given a hint in the form:"
    )?;
    writeln!(out, "*")?;
    writeln!(out, "*\tOOX_")?;
    writeln!(out, "*")?;
    writeln!(
        out,
        "*\tThe symbols above represent the amount of digits in the right"
    )?;
    writeln!(
        out,
        "*\tposition, wrong position and incorrect digits from your guess:"
    )?;
    writeln!(out, "*\tO: One digit in the right position.")?;
    writeln!(out, "*\tX: One digit in the wrong position.")?;
    writeln!(out, "*\t_: One incorrect digit.")?;
    writeln!(out, "*")?;
    writeln!(
        out,
        "*\tFor instance, if the secret code is '1234' and your guess was"
    )?;
    writeln!(
        out,
        "*\t'5247', the hint will be OX__, because '2' was in the right"
    )?;
    writeln!(
        out,
        "*\tposition, '4' was in the wrong position and '5' and '7' were"
    )?;
    writeln!(
        out,
        "*\tincorrect digits. The hint only shows the amounts, never which"
    )?;
    writeln!(out, "*\tdigit's place was right, wrong or incorrect.")?;
    writeln!(out, "*")?;
    writeln!(out, "*\t\t\t{}", "HAPPY GUESSING! :D".bright_yellow().bold())?;
    writeln!(out, "{}", border.bright_black())
}

/// Feedback for a scored guess that did not win
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_hint(out: &mut impl Write, score: Score, attempts_left: u8) -> io::Result<()> {
    writeln!(out, "Hint: {}", colored_hint(score))?;
    writeln!(out, "Turns left: {attempts_left}")
}

/// Message for a winning guess
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_win(out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        "Congratulations!! You win !!".bright_green().bold()
    )
}

/// Reveal the secret and show the game-over banner
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_game_over(out: &mut impl Write, secret: &Code) -> io::Result<()> {
    writeln!(
        out,
        "\nThe code was: {}",
        secret.to_string().bright_white().bold()
    )?;
    writeln!(out, "\n{}", "═".repeat(70).bright_cyan())?;
    writeln!(
        out,
        "{}",
        "                      G A M E   O V E R                       "
            .bright_red()
            .bold()
    )?;
    writeln!(out, "{}", "═".repeat(70).bright_cyan())
}

/// Print the aggregate statistics and the policy comparison
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_statistics(out: &mut impl Write, report: &StatsReport) -> io::Result<()> {
    writeln!(out, "\n{}", "Game Statistics:".bright_cyan().bold())?;
    for row in &report.rows {
        writeln!(out, "{}", length_row(row))?;
    }

    if let Some(comparison) = report.comparison {
        writeln!(
            out,
            "\nMore victories: {}",
            policy_wins(comparison.more).green()
        )?;
        writeln!(
            out,
            "Fewer victories: {}",
            policy_wins(comparison.fewer).yellow()
        )?;
    }

    Ok(())
}

/// Print the result of scoring one guess from the command line
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Secret: {}   Guess: {}",
        result.secret.bright_white().bold(),
        result.guess.bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("   Exact:    {}", result.score.exact().to_string().green());
    println!(
        "   Partial:  {}",
        result.score.partial().to_string().yellow()
    );
    println!("   Blanks:   {}", result.score.blanks());
    println!("   Hint:     {}", colored_hint(result.score));

    if result.score.is_perfect() {
        println!("\n{}", "✅ Code broken!".green().bold());
    }
}
