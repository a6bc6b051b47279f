// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

use chumsky::prelude::*;

use super::{Dialect, Located, MAX_OPERAND_DIGITS, Token};
use crate::internals::RichErr;

fn operand<'a>() -> impl Parser<'a, &'a str, u64, RichErr<'a>> + Clone {
    text::digits(10)
        .at_least(1)
        .at_most(MAX_OPERAND_DIGITS)
        .to_slice()
        .try_map(|s: &str, span| {
            s.parse::<u64>()
                .map_err(|e| Rich::custom(span, format!("error parsing {s} as u64: {e}")))
        })
        .labelled("operand")
}

/// Whatever may sit between the parts of a `mul` instruction
fn gap<'a>(dialect: Dialect) -> impl Parser<'a, &'a str, (), RichErr<'a>> + Clone {
    match dialect {
        Dialect::Lenient => text::whitespace().boxed(),
        Dialect::Exact => empty().boxed(),
    }
}

fn mul<'a>(dialect: Dialect) -> impl Parser<'a, &'a str, Token, RichErr<'a>> + Clone {
    let operand = operand().padded_by(gap(dialect));
    just("mul(")
        .ignore_then(operand.clone())
        .then_ignore(just(','))
        .then(operand)
        .then_ignore(just(')'))
        .map(|(a, b)| Token::Mul(a, b))
        .labelled("mul instruction")
}

fn token<'a>(dialect: Dialect) -> impl Parser<'a, &'a str, Token, RichErr<'a>> + Clone {
    choice((
        mul(dialect),
        just("do()").to(Token::Do).labelled("do instruction"),
        just("don't()").to(Token::Dont).labelled("don't instruction"),
    ))
}

pub(super) fn tokens<'a>(
    dialect: Dialect,
) -> impl Parser<'a, &'a str, Vec<Located>, RichErr<'a>> {
    let token = token(dialect);
    let corrupted = any().and_is(token.clone().not()).repeated();
    corrupted
        .clone()
        .ignore_then(token.map_with(|token, e| Located {
            token,
            span: e.span(),
        }))
        .repeated()
        .collect()
        .then_ignore(corrupted)
}
