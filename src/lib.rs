// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD
#![warn(missing_docs)]

//! Solutions to the first few days of [Advent of Code 2024]
//!
//! The centrepiece is the [Mull It Over] scanner in the [mull] module, which picks `mul(a,b)`,
//! `do()`, and `don't()` instructions out of corrupted memory:
//!
//! # Example
//!
//! ```rust
//! use aoc2024::prelude::*;
//! const MEMORY: &str =
//!     "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";
//!
//! let answers = mull::solve(MEMORY, Dialect::default());
//! assert_eq!(answers, Answers { part1: 161, part2: 48 });
//! ```
//!
//! The other puzzles each have their own module with a [chumsky]-based input parser, and report
//! malformed input with a [ParseError]:
//!
//! ```rust
//! use aoc2024::prelude::*;
//! const LISTS: &str = "3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n";
//!
//! assert_eq!(
//!     Day::HistorianHysteria.solve(LISTS, Dialect::default()).unwrap(),
//!     Answers { part1: 11, part2: 31 }
//! );
//! assert!(Day::RedNosedReports.solve("1 2 x", Dialect::default()).is_err());
//! ```
//!
//! [Advent of Code 2024]: https://adventofcode.com/2024
//! [Mull It Over]: https://adventofcode.com/2024/day/3

use chumsky::error::Rich;

use std::error::Error;
use std::fmt::{self, Display};

/// Parser building blocks shared by the per-day grammars
mod internals;

pub mod historian;
pub mod mull;
pub mod reports;

/// A small module that re-exports the items needed to solve a puzzle
pub mod prelude {
    pub use crate::mull::{self, Dialect, Mode, Scanner};
    pub use crate::{Answers, Day, ParseError};
}

use mull::Dialect;

/// The answers to both parts of a puzzle
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct Answers {
    /// The answer to part 1
    pub part1: u64,
    /// The answer to part 2
    pub part2: u64,
}

impl Answers {
    /// Return the answer to `part`, which must be either `1` or `2`
    pub fn part(&self, part: u8) -> Option<u64> {
        match part {
            1 => Some(self.part1),
            2 => Some(self.part2),
            _ => None,
        }
    }
}

impl Display for Answers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "part 1: {}", self.part1)?;
        write!(f, "part 2: {}", self.part2)
    }
}

/// The puzzles with solutions in this crate
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Day {
    /// [Day 1](https://adventofcode.com/2024/day/1), see [historian]
    HistorianHysteria = 1,
    /// [Day 2](https://adventofcode.com/2024/day/2), see [reports]
    RedNosedReports = 2,
    /// [Day 3](https://adventofcode.com/2024/day/3), see [mull]
    MullItOver = 3,
}

impl Day {
    /// Solve both parts of the puzzle for `input`.
    ///
    /// `dialect` only affects [Day::MullItOver], which never fails to parse.
    pub fn solve(self, input: &str, dialect: Dialect) -> Result<Answers, ParseError<'_>> {
        match self {
            Day::HistorianHysteria => historian::solve(input),
            Day::RedNosedReports => reports::solve(input),
            Day::MullItOver => Ok(mull::solve(input, dialect)),
        }
    }

    /// The puzzle's title, as it appears on the Advent of Code site
    pub const fn title(self) -> &'static str {
        match self {
            Day::HistorianHysteria => "Historian Hysteria",
            Day::RedNosedReports => "Red-Nosed Reports",
            Day::MullItOver => "Mull It Over",
        }
    }
}

impl TryFrom<u8> for Day {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::HistorianHysteria),
            2 => Ok(Self::RedNosedReports),
            3 => Ok(Self::MullItOver),
            _ => Err(value),
        }
    }
}

impl Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Day {}: {}", *self as u8, self.title())
    }
}

/// A newtype that wraps around the chumsky errors produced while parsing puzzle input, to allow
/// for changing the underlying error type or parser in the future
#[derive(Debug)]
pub struct ParseError<'a>(Vec<Rich<'a, char>>);

impl<'a> ParseError<'a> {
    /// The individual errors, each of which carries the span it occurred at
    pub fn errors(&self) -> &[Rich<'a, char>] {
        &self.0
    }

    /// Consume `self`, returning the individual errors
    pub fn into_errors(self) -> Vec<Rich<'a, char>> {
        self.0
    }
}

impl<'a> From<Vec<Rich<'a, char>>> for ParseError<'a> {
    fn from(errs: Vec<Rich<'a, char>>) -> Self {
        Self(errs)
    }
}

impl Display for ParseError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0[..] {
            [] => write!(f, "failed to parse input"),
            [err] => write!(f, "failed to parse input: {err}"),
            errs => {
                write!(f, "failed to parse input ({} errors)", errs.len())?;
                for err in errs {
                    write!(f, "\n- {err}")?;
                }
                Ok(())
            }
        }
    }
}

impl Error for ParseError<'_> {}
