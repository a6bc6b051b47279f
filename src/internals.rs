// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

use chumsky::prelude::*;

use super::ParseError;
use std::fmt::Display;
use std::str::FromStr;

pub(crate) type RichErr<'a> = chumsky::extra::Err<Rich<'a, char>>;

/// A non-negative decimal integer literal, converted into `N`
pub(crate) fn number<'a, N>() -> impl Parser<'a, &'a str, N, RichErr<'a>> + Clone
where
    N: FromStr,
    N::Err: Display,
{
    text::digits(10)
        .to_slice()
        .try_map(|s: &str, span| {
            s.parse::<N>()
                .map_err(|e| Rich::custom(span, format!("error parsing {s} as an integer: {e}")))
        })
        .labelled("integer literal")
}

/// A number padded by inline whitespace on either side
pub(crate) fn padded_number<'a, N>() -> impl Parser<'a, &'a str, N, RichErr<'a>> + Clone
where
    N: FromStr,
    N::Err: Display,
{
    number().padded_by(text::inline_whitespace())
}

/// Zero or more `line`s, separated by newlines, with an optional trailing newline
pub(crate) fn lines<'a, T, P>(line: P) -> impl Parser<'a, &'a str, Vec<T>, RichErr<'a>>
where
    P: Parser<'a, &'a str, T, RichErr<'a>>,
{
    line.separated_by(text::newline().labelled("newline"))
        .allow_trailing()
        .collect()
}

/// Run `parser` over the whole of `input`
pub(crate) fn parse_all<'a, T>(
    parser: impl Parser<'a, &'a str, T, RichErr<'a>>,
    input: &'a str,
) -> Result<T, ParseError<'a>> {
    parser.parse(input).into_result().map_err(ParseError::from)
}
