// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! The two lists of location IDs from [Day 1]
//!
//! The input has one pair of IDs per line, separated by whitespace:
//!
//! ```text
//! 3   4
//! 4   3
//! ```
//!
//! [Day 1]: https://adventofcode.com/2024/day/1

use chumsky::prelude::*;
use itertools::Itertools;

use super::internals::{RichErr, lines, padded_number, parse_all};
use super::{Answers, ParseError};

/// The left and right lists of location IDs
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct LocationLists {
    /// The IDs from the left column
    pub left: Vec<u64>,
    /// The IDs from the right column
    pub right: Vec<u64>,
}

impl LocationLists {
    /// Pair up the smallest number in each list, then the second-smallest, and so on, and sum the
    /// distances between the numbers in each pair.
    ///
    /// Returns [None] if the sum does not fit in a [u64].
    pub fn total_distance(&self) -> Option<u64> {
        self.left
            .iter()
            .sorted_unstable()
            .zip(self.right.iter().sorted_unstable())
            .try_fold(0u64, |total, (l, r)| total.checked_add(l.abs_diff(*r)))
    }

    /// Sum each number in the left list multiplied by the number of times it appears in the right
    /// list.
    ///
    /// Returns [None] if the score does not fit in a [u64].
    pub fn similarity_score(&self) -> Option<u64> {
        let counts = self.right.iter().counts();
        self.left.iter().try_fold(0u64, |score, id| {
            let count = counts.get(id).copied().unwrap_or_default() as u64;
            score.checked_add(id.checked_mul(count)?)
        })
    }
}

impl FromIterator<(u64, u64)> for LocationLists {
    fn from_iter<T: IntoIterator<Item = (u64, u64)>>(iter: T) -> Self {
        let (left, right) = iter.into_iter().unzip();
        Self { left, right }
    }
}

fn grammar<'a>() -> impl Parser<'a, &'a str, LocationLists, RichErr<'a>> {
    lines(
        padded_number::<u64>()
            .then(padded_number::<u64>())
            .labelled("pair of location IDs"),
    )
    .map(LocationLists::from_iter)
}

/// Parse the puzzle input into [LocationLists]
pub fn parse(input: &str) -> Result<LocationLists, ParseError<'_>> {
    parse_all(grammar(), input)
}

/// Solve both parts of the puzzle.
///
/// An answer too large for a [u64] is reported as an error spanning the whole input.
pub fn solve(input: &str) -> Result<Answers, ParseError<'_>> {
    let lists = parse(input)?;
    let too_large = |answer: &str| {
        let span = SimpleSpan::from(0..input.len());
        ParseError::from(vec![Rich::custom(
            span,
            format!("the {answer} is too large to fit in a 64-bit integer"),
        )])
    };
    Ok(Answers {
        part1: lists
            .total_distance()
            .ok_or_else(|| too_large("total distance"))?,
        part2: lists
            .similarity_score()
            .ok_or_else(|| too_large("similarity score"))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n";

    #[test]
    fn parse_example() {
        assert_eq!(
            parse(EXAMPLE).unwrap(),
            LocationLists {
                left: vec![3, 4, 2, 1, 3, 3],
                right: vec![4, 3, 5, 3, 9, 3],
            }
        );
    }

    #[test]
    fn example_answers() {
        let lists = parse(EXAMPLE).unwrap();
        assert_eq!(lists.total_distance(), Some(11));
        assert_eq!(lists.similarity_score(), Some(31));
    }

    #[test]
    fn windows_line_endings() {
        assert_eq!(
            solve("3   4\r\n4   3\r\n").unwrap(),
            Answers { part1: 0, part2: 7 }
        );
    }

    #[test]
    fn distance_is_symmetric() {
        let lists = LocationLists {
            left: vec![10, 1],
            right: vec![2, 20],
        };
        let swapped = LocationLists {
            left: lists.right.clone(),
            right: lists.left.clone(),
        };
        assert_eq!(lists.total_distance(), Some(11));
        assert_eq!(swapped.total_distance(), Some(11));
    }

    #[test]
    fn malformed_lines() {
        for bad in ["3   4\n5\n", "3   x\n", "-3   4\n", "3   4   5\n"] {
            assert!(parse(bad).is_err(), "{bad:?} should not parse");
        }
        let err = parse("3   4\n5\n").unwrap_err();
        assert!(err.errors()[0].span().start >= 6);
    }

    #[test]
    fn oversized_answers_are_errors() {
        const HUGE: &str = "18446744073709551615   18446744073709551615\n\
                            18446744073709551615   18446744073709551615\n";
        let lists = parse(HUGE).unwrap();
        assert_eq!(lists.total_distance(), Some(0));
        assert_eq!(lists.similarity_score(), None);
        let err = solve(HUGE).unwrap_err();
        assert_eq!(err.errors().len(), 1);
        assert_eq!(err.errors()[0].span().into_range(), 0..HUGE.len());
        assert!(err.to_string().contains("similarity score"), "{err}");

        let far_apart = "0   18446744073709551615\n0   18446744073709551615\n";
        assert_eq!(parse(far_apart).unwrap().total_distance(), None);
        assert!(solve(far_apart).unwrap_err().to_string().contains("total distance"));
    }

    #[test]
    fn empty_input() {
        assert_eq!(solve("").unwrap(), Answers::default());
    }
}
