use std::{ops::RangeInclusive, str::FromStr};

use fitness_model::profile::Sex;
use log::debug;

use crate::console::{Console, ConsoleError};

pub const PRESS_ANY_KEY: &str = "Press any key to continue...";

const INVALID_VALUE: &str = "Invalid input detected. Please enter a valid value. \n\n";
const INVALID_SEX: &str = "Please enter M or F.\n\n";
const MALFORMED_CHOICE: &str =
    "Invalid input detected. Please enter a number corresponding to the menu's choices.\n\n";
const INVALID_CHOICE: &str = "Please enter a valid choice from the menu.\n\n";

/// Reason a line of input was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("not a value of the expected type")]
    Malformed,
    #[error("unexpected characters after the value")]
    TrailingCharacters,
    #[error("value out of range")]
    OutOfRange,
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("input closed")]
    EndOfInput,
    #[error(transparent)]
    Console(#[from] ConsoleError),
}

pub type Result<T> = std::result::Result<T, InputError>;

/// Parses a single value from a line. Anything but whitespace after the value
/// rejects the whole line, so `5abc` is never read as `5`.
pub fn parse_token<T: FromStr>(line: &str) -> std::result::Result<T, Rejection> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(Rejection::Malformed);
    }

    let (token, rest) = trimmed
        .split_once(char::is_whitespace)
        .unwrap_or((trimmed, ""));
    match token.parse::<T>() {
        Ok(value) if rest.trim().is_empty() => Ok(value),
        Ok(_) => Err(Rejection::TrailingCharacters),
        Err(_) if has_valid_prefix::<T>(token) => Err(Rejection::TrailingCharacters),
        Err(_) => Err(Rejection::Malformed),
    }
}

fn has_valid_prefix<T: FromStr>(token: &str) -> bool {
    token
        .char_indices()
        .skip(1)
        .any(|(i, _)| token[..i].parse::<T>().is_ok())
}

pub fn positive_integer(line: &str) -> std::result::Result<u32, Rejection> {
    let value: i64 = parse_token(line)?;
    u32::try_from(value)
        .ok()
        .filter(|value| *value > 0)
        .ok_or(Rejection::OutOfRange)
}

pub fn positive_float(line: &str) -> std::result::Result<f64, Rejection> {
    let value: f64 = parse_token(line)?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Rejection::OutOfRange)
    }
}

/// Prompts until `parse` accepts a line. Rejected lines print
/// `invalid_message` and are discarded.
pub fn read_validated<T, F>(
    console: &mut dyn Console,
    prompt: &str,
    invalid_message: &str,
    parse: F,
) -> Result<T>
where
    F: Fn(&str) -> std::result::Result<T, Rejection>,
{
    loop {
        console.print(prompt)?;
        let line = console.read_line()?.ok_or(InputError::EndOfInput)?;

        match parse(&line) {
            Ok(value) => {
                console.print("\n")?;
                return Ok(value);
            }
            Err(rejection) => {
                debug!("Rejected input {:?} ({})", line, rejection);
                console.print(invalid_message)?;
            }
        }
    }
}

pub fn read_sex(console: &mut dyn Console) -> Result<Sex> {
    read_validated(
        console,
        "Are you a male or female? (M or F): ",
        INVALID_SEX,
        parse_token::<Sex>,
    )
}

pub fn read_age(console: &mut dyn Console) -> Result<u32> {
    read_validated(
        console,
        "Please enter your age in years: ",
        INVALID_VALUE,
        positive_integer,
    )
}

pub fn read_height(console: &mut dyn Console) -> Result<f64> {
    read_validated(
        console,
        "Please enter your height in meters: ",
        INVALID_VALUE,
        positive_float,
    )
}

pub fn read_weight(console: &mut dyn Console, label: &str) -> Result<f64> {
    read_validated(
        console,
        &format!("Please enter your {} weight in kilograms: ", label),
        INVALID_VALUE,
        positive_float,
    )
}

/// Reads the `number`-th (1-based) sample of the weight tracker.
pub fn read_sample(console: &mut dyn Console, number: usize) -> Result<f64> {
    read_validated(
        console,
        &format!("Please enter weight no. {}: ", number),
        INVALID_VALUE,
        positive_float,
    )
}

/// Shows `screen` on a cleared terminal until a choice within `choices` is
/// entered. Each rejected choice is explained and followed by a pause.
pub fn read_menu_choice(
    console: &mut dyn Console,
    screen: &str,
    choices: RangeInclusive<u32>,
) -> Result<u32> {
    loop {
        console.clear_screen()?;
        console.print(screen)?;
        let line = console.read_line()?.ok_or(InputError::EndOfInput)?;

        let choice = parse_token::<i64>(&line).and_then(|choice| {
            u32::try_from(choice)
                .ok()
                .filter(|choice| choices.contains(choice))
                .ok_or(Rejection::OutOfRange)
        });
        match choice {
            Ok(choice) => return Ok(choice),
            Err(rejection) => {
                debug!("Rejected menu choice {:?} ({})", line, rejection);
                console.print(match rejection {
                    Rejection::Malformed => MALFORMED_CHOICE,
                    Rejection::TrailingCharacters | Rejection::OutOfRange => INVALID_CHOICE,
                })?;
                console.pause(PRESS_ANY_KEY)?;
            }
        }
    }
}
