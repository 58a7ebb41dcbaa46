//! Parser module
//!
//! Turns the text given by the user into participants and amounts:
//! - A record `name,amount[,amount...]` becomes a [`Participant`](crate::models::Participant)
//! - A decimal string becomes an exact rational amount
//! - A file becomes a list of records, one per line

use std::fs::read_to_string;
use std::path::Path;

use num::BigRational;
use pest::iterators::Pair;
use pest::Parser;

use crate::models::Participant;
use crate::ParserError;

mod utils;

#[derive(Parser)]
#[grammar = "grammar/record.pest"]
pub struct GrammarParser;

/// Parses one record of the form `name,amount[,amount...]`
///
/// Empty fields are skipped, so a trailing comma is harmless. Blank lines are not
/// records, callers are expected to skip them before.
pub fn parse_record(record: &str) -> Result<Participant, ParserError> {
    let mut parsed = GrammarParser::parse(Rule::record, record)
        .map_err(|_| ParserError::MissingAmounts(record.to_string()))?;
    let mut elements = match parsed.next() {
        Some(x) => x.into_inner(),
        None => return Err(ParserError::MissingAmounts(record.to_string())),
    };

    let name = match elements.next() {
        Some(x) => x.as_str().trim().to_string(),
        None => String::new(),
    };
    if name.is_empty() {
        return Err(ParserError::EmptyName(record.to_string()));
    }

    let mut items = Vec::new();
    for element in elements {
        if element.as_rule() != Rule::field {
            continue;
        }
        let field = element.as_str().trim();
        if field.is_empty() {
            continue;
        }
        match parse_str_as_amount(field) {
            Some(amount) => items.push(amount),
            None => {
                return Err(ParserError::InvalidAmount {
                    record: record.to_string(),
                    field: field.to_string(),
                })
            }
        }
    }
    Ok(Participant::new(name, items))
}

/// Parses a decimal amount such as `57.22`, `10` or `.5`
///
/// Returns `None` when the string is not a non-negative decimal number
pub fn parse_str_as_amount(amount: &str) -> Option<BigRational> {
    let mut parsed = GrammarParser::parse(Rule::amount, amount).ok()?;
    let number = parsed
        .next()?
        .into_inner()
        .find(|x| x.as_rule() == Rule::number)?;
    Some(parse_number(number))
}

fn parse_number(number: Pair<Rule>) -> BigRational {
    utils::parse_rational(number.as_str())
}

/// Parses the grand total given in the command line
pub fn parse_total(total: &str) -> Result<BigRational, ParserError> {
    parse_str_as_amount(total).ok_or_else(|| ParserError::InvalidTotal(total.to_string()))
}

/// Reads a file with one record per line
pub fn read_records(path: &Path) -> Result<Vec<String>, ParserError> {
    match read_to_string(path) {
        Ok(content) => Ok(content.lines().map(|x| x.to_string()).collect()),
        Err(err) => Err(ParserError::CannotReadFile(
            path.to_path_buf(),
            err.to_string(),
        )),
    }
}
