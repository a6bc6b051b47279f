// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Reactor safety reports from [Day 2]
//!
//! Each line of the input is a report: a list of levels, separated by whitespace. A report is
//! *safe* if both of the following hold:
//!
//! * the levels are either all increasing or all decreasing
//! * any two adjacent levels differ by at least one and at most three
//!
//! With the [Problem Dampener](Dampener::On), a report that is unsafe can still be counted as safe
//! if removing any single level from it would make it safe.
//!
//! ```
//! use aoc2024::reports::{Dampener, count_safe, parse};
//! let reports = parse("7 6 4 2 1\n1 2 7 8 9\n1 3 2 4 5\n").unwrap();
//! assert_eq!(count_safe(&reports, Dampener::Off), 1);
//! assert_eq!(count_safe(&reports, Dampener::On), 2);
//! ```
//!
//! [Day 2]: https://adventofcode.com/2024/day/2

use chumsky::prelude::*;
use itertools::Itertools;

use super::internals::{RichErr, lines, padded_number, parse_all};
use super::{Answers, ParseError};
use std::ops::RangeInclusive;

/// The permitted difference between adjacent levels in a safe report
pub const SAFE_STEP: RangeInclusive<i64> = 1..=3;

/// The direction a safe report's levels move in
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Trend {
    /// Every level is higher than the one before it
    Increasing,
    /// Every level is lower than the one before it
    Decreasing,
}

impl Trend {
    /// The trend of going from `a` to `b`, or [None] if that step is unsafe
    pub fn between(a: i64, b: i64) -> Option<Self> {
        let step = b - a;
        if SAFE_STEP.contains(&step) {
            Some(Trend::Increasing)
        } else if SAFE_STEP.contains(&-step) {
            Some(Trend::Decreasing)
        } else {
            None
        }
    }
}

/// Whether the Problem Dampener is used when determining if a report is safe
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Dampener {
    /// Reports must be safe as they are (part 1)
    Off,
    /// Reports may have one level removed to make them safe (part 2)
    On,
}

enum Verdict {
    /// Safe, with the trend if there were at least 2 levels
    Safe(Option<Trend>),
    Unsafe,
}

fn judge(levels: impl IntoIterator<Item = i64>) -> Verdict {
    let mut trend = None;
    for (a, b) in levels.into_iter().tuple_windows() {
        match (trend, Trend::between(a, b)) {
            (_, None) => return Verdict::Unsafe,
            (Some(overall), Some(step)) if overall != step => return Verdict::Unsafe,
            (_, step) => trend = step,
        }
    }
    Verdict::Safe(trend)
}

/// A single report's levels
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Report {
    /// The levels, in the order they were listed
    pub levels: Vec<i64>,
}

impl Report {
    /// If the report is safe and has at least two levels, the direction its levels move in
    pub fn trend(&self) -> Option<Trend> {
        match judge(self.levels.iter().copied()) {
            Verdict::Safe(trend) => trend,
            Verdict::Unsafe => None,
        }
    }

    /// Whether the report is safe. Reports with fewer than two levels are always safe.
    pub fn is_safe(&self) -> bool {
        matches!(judge(self.levels.iter().copied()), Verdict::Safe(_))
    }

    /// Whether the report is safe, or can be made safe by removing one level
    pub fn is_safe_dampened(&self) -> bool {
        self.is_safe()
            || (0..self.levels.len()).any(|skipped| {
                let remaining = self
                    .levels
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| i != skipped)
                    .map(|(_, &level)| level);
                matches!(judge(remaining), Verdict::Safe(_))
            })
    }

    /// Whether the report is safe, given the state of the [Dampener]
    pub fn is_safe_with(&self, dampener: Dampener) -> bool {
        match dampener {
            Dampener::Off => self.is_safe(),
            Dampener::On => self.is_safe_dampened(),
        }
    }
}

/// Count the reports that are safe, given the state of the [Dampener]
pub fn count_safe(reports: &[Report], dampener: Dampener) -> usize {
    reports
        .iter()
        .filter(|report| report.is_safe_with(dampener))
        .count()
}

fn grammar<'a>() -> impl Parser<'a, &'a str, Vec<Report>, RichErr<'a>> {
    lines(
        padded_number::<i64>()
            .repeated()
            .at_least(1)
            .collect::<Vec<_>>()
            .map(|levels| Report { levels })
            .labelled("report"),
    )
}

/// Parse the puzzle input into a list of [Report]s
pub fn parse(input: &str) -> Result<Vec<Report>, ParseError<'_>> {
    parse_all(grammar(), input)
}

/// Solve both parts of the puzzle
pub fn solve(input: &str) -> Result<Answers, ParseError<'_>> {
    let reports = parse(input)?;
    Ok(Answers {
        part1: count_safe(&reports, Dampener::Off) as u64,
        part2: count_safe(&reports, Dampener::On) as u64,
    })
}
