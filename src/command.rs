//! Tokenizer for one line of interactive input.
//!
//! A line is split on the literal `--`. The first segment is the action word
//! and every later segment is a raw `key=value` option. When any option is
//! present the action word is ignored and each option runs on its own, left
//! to right.

use std::str::FromStr;

use crate::error::{BookstoreError, Result};

/// Shape of a tokenized input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty or whitespace-only input.
    Blank,
    /// No options; the raw action segment.
    Action(&'a str),
    /// One or more raw option segments, in input order.
    Options(Vec<&'a str>),
}

/// Splits a line into its action word or its options.
#[must_use]
pub fn parse_line(line: &str) -> Line<'_> {
    if line.trim().is_empty() {
        return Line::Blank;
    }
    let mut segments = line.split("--");
    let action = segments.next().unwrap_or_default();
    let options: Vec<&str> = segments.collect();
    if options.is_empty() {
        Line::Action(action)
    } else {
        Line::Options(options)
    }
}

/// A recognized action word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Print the command list.
    Help,
    /// Print the whole catalog.
    Get,
    /// Purchase by identifier, given inline after `buy`.
    Buy(String),
}

/// Resolves an action segment into an [`Action`].
///
/// # Errors
///
/// Returns `MissingId` for a bare `buy` and `UnrecognizedCommand` for any
/// other word.
pub fn parse_action(segment: &str) -> Result<Action> {
    let segment = segment.trim();
    let (word, rest) = match segment.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (segment, ""),
    };
    match (word.to_lowercase().as_str(), rest) {
        ("help", "") => Ok(Action::Help),
        ("get", "") => Ok(Action::Get),
        ("buy", "") => Err(BookstoreError::MissingId),
        ("buy", id) => Ok(Action::Buy(id.to_string())),
        _ => Err(BookstoreError::UnrecognizedCommand(segment.to_lowercase())),
    }
}

/// Recognized option keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    /// `author`
    Author,
    /// `title`
    Title,
    /// `date`
    Date,
    /// `order-by`
    OrderBy,
    /// `id`
    Id,
}

impl FromStr for Flag {
    type Err = BookstoreError;

    fn from_str(key: &str) -> Result<Self> {
        match key {
            "author" => Ok(Self::Author),
            "title" => Ok(Self::Title),
            "date" => Ok(Self::Date),
            "order-by" => Ok(Self::OrderBy),
            "id" => Ok(Self::Id),
            other => Err(BookstoreError::UnknownFlag(other.to_string())),
        }
    }
}

/// A validated option, ready to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Show books whose author contains the text.
    Author(String),
    /// Show books whose title contains the text.
    Title(String),
    /// Show books published in the year.
    Date(i32),
    /// Show the whole catalog sorted by year.
    OrderByDate,
    /// Purchase the book with this (not yet parsed) identifier.
    Buy(String),
}

/// Parses one raw `key=value` segment.
///
/// The key is trimmed and lowercased. The value is trimmed and loses one
/// pair of surrounding double quotes. No escaping is supported.
///
/// # Errors
///
/// `MalformedFlag` unless the segment holds exactly one `=`, `UnknownFlag`
/// for an unrecognized key, `InvalidYearFormat` for a non-integer `date`
/// and `InvalidSortValue` for any `order-by` other than `date`.
pub fn parse_option(raw: &str) -> Result<Directive> {
    let mut parts = raw.split('=');
    let (Some(key), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(BookstoreError::MalformedFlag);
    };
    let flag: Flag = key.trim().to_lowercase().parse()?;
    let value = unquote(value.trim());

    match flag {
        Flag::Author => Ok(Directive::Author(value.to_string())),
        Flag::Title => Ok(Directive::Title(value.to_string())),
        Flag::Date => value
            .parse()
            .map(Directive::Date)
            .map_err(|_| BookstoreError::InvalidYearFormat),
        Flag::OrderBy if value.eq_ignore_ascii_case("date") => Ok(Directive::OrderByDate),
        Flag::OrderBy => Err(BookstoreError::InvalidSortValue(value.to_string())),
        Flag::Id => Ok(Directive::Buy(value.to_string())),
    }
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(value)
}
