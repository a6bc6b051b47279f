// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Scanner for the corrupted memory from [Day 3]
//!
//! The memory is a flat buffer of characters. Scattered throughout are three kinds of
//! [instructions](Token):
//!
//! | instruction | effect                                                                 |
//! |-------------|------------------------------------------------------------------------|
//! | `mul(a,b)`  | multiply `a` by `b`, where each operand is 1 to 3 decimal digits        |
//! | `do()`      | enable future `mul` instructions                                       |
//! | `don't()`   | disable future `mul` instructions                                      |
//!
//! Everything else is corrupted, and is skipped silently. Scanning never fails.
//!
//! There are two ways to total the products up, described by [Mode]:
//!
//! ```
//! use aoc2024::mull::{self, Dialect, Mode, Scanner};
//! const MEMORY: &str = "don't()mul(2,2)do()mul(3,3)";
//!
//! assert_eq!(mull::sum_products(MEMORY), 13);
//! assert_eq!(mull::sum_enabled_products(MEMORY), 9);
//!
//! let mut scanner = Scanner::new(Dialect::Exact);
//! assert_eq!(scanner.total(MEMORY, Mode::All), 13);
//! assert_eq!(scanner.total(MEMORY, Mode::Toggled), 9);
//! ```
//!
//! [Day 3]: https://adventofcode.com/2024/day/3

use chumsky::Parser;
use chumsky::span::SimpleSpan;

use super::Answers;
use std::fmt::{self, Display};

mod parsers;
pub mod trace;

pub use trace::{ScanTrace, TracedToken};

/// The maximum number of digits in an operand of a `mul` instruction
pub const MAX_OPERAND_DIGITS: usize = 3;

/// An instruction recognized within corrupted memory
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// `mul(a,b)`
    Mul(u64, u64),
    /// `do()`
    Do,
    /// `don't()`
    Dont,
}

impl Token {
    /// The product of a [Token::Mul]'s operands, or [None] for other instructions
    pub const fn product(self) -> Option<u64> {
        match self {
            Token::Mul(a, b) => Some(a * b),
            Token::Do | Token::Dont => None,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Mul(a, b) => write!(f, "mul({a},{b})"),
            Token::Do => write!(f, "do()"),
            Token::Dont => write!(f, "don't()"),
        }
    }
}

/// A [Token], along with the byte range of memory it was found at
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Located {
    /// The instruction
    pub token: Token,
    /// Where in the memory the instruction was found
    pub span: SimpleSpan,
}

/// How strictly the contents of a `mul` instruction are matched
///
/// Both dialects only accept operands that are 1 to 3 ASCII digits long.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum Dialect {
    /// Permit whitespace (including newlines) around each operand, so `mul( 2 ,\n3 )` is the
    /// same as `mul(2,3)`
    #[default]
    Lenient,
    /// Permit nothing but the operands and the comma between the parentheses
    Exact,
}

/// Which `mul` instructions contribute to a total
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Mode {
    /// Every `mul` instruction, ignoring `do()` and `don't()` (part 1)
    All,
    /// Only `mul` instructions encountered while [enabled](Toggle::Enabled) (part 2)
    Toggled,
}

/// Whether `mul` instructions are currently enabled
///
/// Scanning always starts out [enabled](Toggle::Enabled).
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum Toggle {
    /// The most recent toggle was `do()`, or there hasn't been one yet
    #[default]
    Enabled,
    /// The most recent toggle was `don't()`
    Disabled,
}

impl Toggle {
    /// The state after encountering `token`
    pub const fn after(self, token: Token) -> Self {
        match token {
            Token::Do => Toggle::Enabled,
            Token::Dont => Toggle::Disabled,
            Token::Mul(..) => self,
        }
    }
}

impl Display for Toggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Toggle::Enabled => write!(f, "enabled"),
            Toggle::Disabled => write!(f, "disabled"),
        }
    }
}

/// Running totals for a single scan
#[derive(Debug, Default)]
struct ScanState {
    toggle: Toggle,
    all: u64,
    enabled: u64,
}

impl ScanState {
    /// Process `token`, returning the amount it added to the [Mode::Toggled] total, if any
    fn apply(&mut self, token: Token) -> Option<u64> {
        self.toggle = self.toggle.after(token);
        let product = token.product()?;
        self.all += product;
        if self.toggle == Toggle::Enabled {
            self.enabled += product;
            Some(product)
        } else {
            None
        }
    }
}

impl From<ScanState> for Answers {
    fn from(state: ScanState) -> Self {
        Self {
            part1: state.all,
            part2: state.enabled,
        }
    }
}

/// A scanner for corrupted memory, which provides optional tracing of instructions encountered.
///
/// Every call to [Scanner::scan] starts from a clean slate - totals of zero and `mul`
/// instructions [enabled](Toggle::Enabled) - so scanning the same memory twice gives the same
/// answers.
#[derive(Debug, Default, Clone)]
pub struct Scanner {
    dialect: Dialect,
    trace: Option<ScanTrace>,
}

impl Scanner {
    /// Create a new scanner that matches `mul` instructions according to `dialect`
    pub const fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            trace: None,
        }
    }

    /// The [Dialect] this scanner was created with
    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Scan `memory`, totalling the products in both [modes](Mode).
    ///
    /// If a trace is running, every instruction encountered is added to it.
    pub fn scan(&mut self, memory: &str) -> Answers {
        let mut state = ScanState::default();
        for Located { token, span } in tokens(memory, self.dialect) {
            let contribution = state.apply(token);
            if let Some(trace) = self.trace.as_mut() {
                trace.push(token, span, state.toggle, contribution);
            }
        }
        state.into()
    }

    /// Scan `memory`, returning only the total for `mode`
    pub fn total(&mut self, memory: &str, mode: Mode) -> u64 {
        let answers = self.scan(memory);
        match mode {
            Mode::All => answers.part1,
            Mode::Toggled => answers.part2,
        }
    }
}

/// Every instruction in `memory`, in the order they appear
///
/// ```
/// use aoc2024::mull::{Dialect, Token, tokens};
/// let found: Vec<Token> = tokens("mul(4*mul(6,9!?(12,34)don't()", Dialect::Exact)
///     .into_iter()
///     .map(|located| located.token)
///     .collect();
/// assert_eq!(found, [Token::Dont]);
/// ```
pub fn tokens(memory: &str, dialect: Dialect) -> Vec<Located> {
    // the grammar accepts any input, so there is always output
    parsers::tokens(dialect)
        .parse(memory)
        .into_output()
        .unwrap_or_default()
}

/// The sum of the products of every `mul` instruction in `memory` ([Mode::All])
pub fn sum_products(memory: &str) -> u64 {
    Scanner::default().total(memory, Mode::All)
}

/// The sum of the products of `mul` instructions in `memory` that are not disabled by a preceding
/// `don't()` ([Mode::Toggled])
pub fn sum_enabled_products(memory: &str) -> u64 {
    Scanner::default().total(memory, Mode::Toggled)
}

/// Solve both parts of the puzzle in one pass over `memory`
pub fn solve(memory: &str, dialect: Dialect) -> Answers {
    Scanner::new(dialect).scan(memory)
}
