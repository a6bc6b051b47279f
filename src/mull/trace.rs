// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Tracing of the instructions a [Scanner] encounters
use std::fmt::{self, Display};

use chumsky::span::SimpleSpan;

use super::{Scanner, Toggle, Token};

#[derive(Debug, Clone, PartialEq, Eq)]
/// An opaque type containing information about an instruction that was scanned, which can be
/// queried with its various methods, or converted into a [String] using its [Display] impl.
pub struct TracedToken {
    token: Token,
    span: SimpleSpan,
    toggle: Toggle,
    contribution: Option<u64>,
}

impl TracedToken {
    /// Return the scanned instruction
    pub fn token(&self) -> Token {
        self.token
    }

    /// Return the byte range of the instruction within the scanned memory
    pub fn span(&self) -> SimpleSpan {
        self.span
    }

    /// Return whether `mul` instructions were enabled once this instruction was processed
    pub fn toggle(&self) -> Toggle {
        self.toggle
    }

    /// If this instruction added to the [Mode::Toggled] total, return how much it added
    ///
    /// [Mode::Toggled]: super::Mode::Toggled
    pub fn contribution(&self) -> Option<u64> {
        self.contribution
    }
}

impl Scanner {
    /// Begin a [ScanTrace] of scanned instructions. If a trace is already running, this replaces
    /// that trace and returns it in a [`Some`], otherwise, it returns [`None`].
    ///
    /// # Example
    /// ```
    /// use aoc2024::mull::{Dialect, Scanner, Token};
    /// let mut scanner = Scanner::new(Dialect::Exact);
    /// assert!(scanner.start_trace().is_none());
    /// scanner.scan("mul(2,3)don't()mul(4,5)");
    /// let trace = scanner.end_trace().unwrap();
    /// assert_eq!(trace.0.len(), 3);
    /// assert_eq!(trace.0[0].contribution(), Some(6));
    /// assert_eq!(trace.0[2].token(), Token::Mul(4, 5));
    /// assert_eq!(trace.0[2].contribution(), None);
    /// ```
    pub fn start_trace(&mut self) -> Option<ScanTrace> {
        self.trace.replace(ScanTrace::default())
    }

    /// Stop tracing scanned instructions into a [ScanTrace]. If no trace was active, returns
    /// [`None`]
    ///
    /// see [Scanner::start_trace]
    pub fn end_trace(&mut self) -> Option<ScanTrace> {
        self.trace.take()
    }

    /// Get a view of the current trace
    pub fn show_trace(&self) -> Option<&ScanTrace> {
        self.trace.as_ref()
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
/// A log of instructions that a [Scanner] has encountered since a call to
/// [Scanner::start_trace]
///
/// Traces accumulate across calls to [Scanner::scan] until ended.
pub struct ScanTrace(pub Vec<TracedToken>);

impl ScanTrace {
    pub(super) fn push(
        &mut self,
        token: Token,
        span: SimpleSpan,
        toggle: Toggle,
        contribution: Option<u64>,
    ) {
        self.0.push(TracedToken {
            token,
            span,
            toggle,
            contribution,
        })
    }

    /// The sum of every traced instruction's contribution
    pub fn total(&self) -> u64 {
        self.0.iter().filter_map(TracedToken::contribution).sum()
    }
}

impl Display for TracedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "scanned {: <12} at {:0>6}..{:0>6} | now {: <8} | ",
            self.token.to_string(),
            self.span.start,
            self.span.end,
            self.toggle.to_string(),
        )?;
        match (self.token, self.contribution) {
            (Token::Mul(..), Some(n)) => write!(f, "added {n}"),
            (Token::Mul(..), None) => write!(f, "skipped"),
            (Token::Do | Token::Dont, _) => write!(f, "toggled"),
        }
    }
}

impl Display for ScanTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for traced in &self.0 {
            writeln!(f, "{traced}")?;
        }
        Ok(())
    }
}
