//! Line-based interactive prompts
//!
//! Prompts read from any `BufRead` so the init flow can be driven from a
//! buffer in tests.

use colored::Colorize;
use std::io::{BufRead, Write};

use crate::errors::CliError;

pub struct Prompter<R, W> {
    input: R,
    output: W,
    accept_defaults: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, accept_defaults: bool) -> Self {
        Prompter {
            input,
            output,
            accept_defaults,
        }
    }

    fn read_answer(&mut self) -> Result<String, CliError> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::Cancelled);
        }
        Ok(line.trim().to_string())
    }

    /// Free-text answer; an empty answer takes `initial`
    pub fn text<F>(&mut self, message: &str, initial: &str, validate: F) -> Result<String, CliError>
    where
        F: Fn(&str) -> Result<(), String>,
    {
        if self.accept_defaults {
            return validate(initial)
                .map(|()| initial.to_string())
                .map_err(|e| CliError::InvalidInput(format!("{message}: {e}")));
        }

        loop {
            write!(
                self.output,
                "{} {} {} ",
                "?".bold().cyan(),
                message,
                format!("({initial}) ›").dimmed()
            )?;
            let answer = self.read_answer()?;
            let answer = if answer.is_empty() {
                initial.to_string()
            } else {
                answer
            };

            match validate(&answer) {
                Ok(()) => return Ok(answer),
                Err(e) => writeln!(self.output, "{} {}", "✖".red(), e)?,
            }
        }
    }

    /// Yes/no question; only `y` and `yes` confirm
    pub fn confirm(&mut self, message: &str) -> Result<bool, CliError> {
        if self.accept_defaults {
            return Ok(true);
        }

        write!(
            self.output,
            "{} {} {} ",
            "?".bold().cyan(),
            message,
            "[y/n] ›".dimmed()
        )?;
        let answer = self.read_answer()?.to_lowercase();
        Ok(answer == "y" || answer == "yes")
    }

    /// Pick one or more `choices` by value or 1-based index, comma separated
    pub fn multiselect(
        &mut self,
        message: &str,
        choices: &[&str],
        defaults: &[&str],
    ) -> Result<Vec<String>, CliError> {
        let defaults: Vec<String> = defaults.iter().map(ToString::to_string).collect();
        if self.accept_defaults {
            return Ok(defaults);
        }

        writeln!(self.output, "{} {}", "?".bold().cyan(), message)?;
        for (index, choice) in choices.iter().enumerate() {
            let marker = if defaults.iter().any(|d| d == choice) {
                "◉"
            } else {
                "◯"
            };
            writeln!(self.output, "  {} {}. {}", marker, index + 1, choice)?;
        }

        loop {
            write!(
                self.output,
                "  {} ",
                format!("({}) ›", defaults.join(", ")).dimmed()
            )?;
            let answer = self.read_answer()?;
            if answer.is_empty() {
                return Ok(defaults);
            }

            match parse_selection(&answer, choices) {
                Ok(selected) if !selected.is_empty() => return Ok(selected),
                Ok(_) => writeln!(self.output, "{} Select at least one option", "✖".red())?,
                Err(e) => writeln!(self.output, "{} {}", "✖".red(), e)?,
            }
        }
    }
}

fn parse_selection(answer: &str, choices: &[&str]) -> Result<Vec<String>, String> {
    let mut selected: Vec<String> = Vec::new();
    for item in answer.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let choice = match item.parse::<usize>() {
            Ok(index) => index
                .checked_sub(1)
                .and_then(|i| choices.get(i))
                .copied()
                .ok_or_else(|| format!("No option numbered {item}"))?,
            Err(_) => choices
                .iter()
                .find(|c| **c == item)
                .copied()
                .ok_or_else(|| format!("Unknown option '{item}'"))?,
        };
        if !selected.iter().any(|s| s == choice) {
            selected.push(choice.to_string());
        }
    }
    Ok(selected)
}

/// Validator rejecting blank answers
pub fn required(label: &'static str) -> impl Fn(&str) -> Result<(), String> {
    move |value: &str| {
        if value.trim().is_empty() {
            Err(format!("{label} is required"))
        } else {
            Ok(())
        }
    }
}

/// Validator for `#RGB` / `#RRGGBB` colors
pub fn hex_color(value: &str) -> Result<(), String> {
    if pwa_config::scaffold::is_hex_color(value) {
        Ok(())
    } else {
        Err("Please enter a valid hex color (e.g. #000000)".to_string())
    }
}
