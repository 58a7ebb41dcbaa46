use colored::{ColoredString, Colorize};
use num::BigRational;
use std::error;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use crate::models::format_money;

/// Exit status for input errors and failed splits
pub const EXIT_FAILURE: i32 = 1;
/// Exit status for command line usage errors
pub const EXIT_USAGE: i32 = 2;

#[derive(Debug, Clone, PartialEq)]
pub enum ParserError {
    CannotReadFile(PathBuf, String),
    MissingAmounts(String),
    EmptyName(String),
    InvalidAmount { record: String, field: String },
    InvalidTotal(String),
}
impl error::Error for ParserError {}
impl Display for ParserError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParserError::CannotReadFile(path, reason) => {
                write!(f, "Error reading file {}: {}", path.display(), reason)
            }
            ParserError::MissingAmounts(record) => write!(
                f,
                "Error during parsing {:?}: must have a name and at least one amount",
                record
            ),
            ParserError::EmptyName(record) => {
                write!(f, "Error during parsing {:?}: name cannot be empty", record)
            }
            ParserError::InvalidAmount { record, field } => write!(
                f,
                "Error during parsing {:?}: {:?} is not a valid amount",
                record, field
            ),
            ParserError::InvalidTotal(total) => {
                write!(f, "Total amount must be a number: {:?}", total)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SplitError {
    SubtotalExceedsTotal {
        subtotal: BigRational,
        total: BigRational,
    },
    ZeroSubtotal,
}
impl error::Error for SplitError {}
impl Display for SplitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SplitError::SubtotalExceedsTotal { subtotal, total } => write!(
                f,
                "Subtotal ({}) is greater than total ({})",
                format_money(subtotal),
                format_money(total)
            ),
            SplitError::ZeroSubtotal => {
                write!(f, "Subtotal is zero, there is nothing to split the total by")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    BadInitFile { file: PathBuf, line: String },
    CannotReadInitFile(PathBuf, String),
    MissingInitFile(PathBuf),
}
impl error::Error for ConfigError {}
impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::BadInitFile { file, line } => {
                write!(f, "Bad config file {:?}\n{}", file, line)
            }
            ConfigError::CannotReadInitFile(file, reason) => {
                write!(f, "Could not read config file {:?}: {}", file, reason)
            }
            ConfigError::MissingInitFile(file) => {
                write!(f, "Configuration file does not exist: {:?}", file)
            }
        }
    }
}

/// The error returned by the application, ready to be printed
#[derive(Debug)]
pub struct Error {
    pub message: Vec<ColoredString>,
    code: i32,
}

impl Error {
    /// A command line usage error, the message is printed as is
    pub fn usage(message: &str) -> Self {
        Error {
            message: vec![ColoredString::from(message)],
            code: EXIT_USAGE,
        }
    }

    /// A fatal error with exit status 1, the message is printed as is
    pub fn fatal(message: &str) -> Self {
        Error {
            message: vec![ColoredString::from(message)],
            code: EXIT_FAILURE,
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.code
    }
}

impl error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", ColoredStrings(&self.message))
    }
}

impl From<ParserError> for Error {
    fn from(error: ParserError) -> Self {
        Error {
            message: vec![format!("{}", error).as_str().bold().bright_red()],
            code: EXIT_FAILURE,
        }
    }
}

impl From<SplitError> for Error {
    fn from(error: SplitError) -> Self {
        Error {
            message: vec![format!("{}", error).as_str().bold().bright_red()],
            code: EXIT_FAILURE,
        }
    }
}

impl From<ConfigError> for Error {
    fn from(error: ConfigError) -> Self {
        let message = match &error {
            ConfigError::BadInitFile { file, line } => vec![
                ColoredString::from(format!("Bad config file {:?}\n", file).as_str()),
                line.as_str().red().bold(),
            ],
            ConfigError::CannotReadInitFile(..) => vec![ColoredString::from(
                format!("{}", error).as_str(),
            )],
            ConfigError::MissingInitFile(file) => vec![
                ColoredString::from("Configuration file does not exist: "),
                format!("{}", file.display()).as_str().red().bold(),
            ],
        };
        Error {
            message,
            code: EXIT_FAILURE,
        }
    }
}

// https://medium.com/apolitical-engineering/how-do-you-impl-display-for-vec-b8dbb21d814f
struct ColoredStrings<'a>(pub &'a Vec<ColoredString>);

impl<'a> fmt::Display for ColoredStrings<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.iter().fold(Ok(()), |result, partial| {
            result.and_then(|_| write!(f, "{}", partial))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num::BigInt;

    #[test]
    fn exit_codes() {
        assert_eq!(Error::usage("usage").exit_code(), EXIT_USAGE);
        let err: Error = ParserError::MissingAmounts("Hades".to_string()).into();
        assert_eq!(err.exit_code(), EXIT_FAILURE);
        let err: Error = SplitError::ZeroSubtotal.into();
        assert_eq!(err.exit_code(), EXIT_FAILURE);
    }

    #[test]
    fn subtotal_message_shows_both_values() {
        let error = SplitError::SubtotalExceedsTotal {
            subtotal: BigRational::new(BigInt::from(3500), BigInt::from(100)),
            total: BigRational::from(BigInt::from(30)),
        };
        assert_eq!(
            format!("{}", error),
            "Subtotal ($35.00) is greater than total ($30.00)"
        );
    }
}
