//! Test that examples from Advent of Code problem descriptions behave as described.
// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

use aoc2024::mull::{Located, ScanTrace, Token, Toggle, TracedToken, tokens};
use aoc2024::prelude::*;
use either::Either;
use itertools::Itertools;

// first, some groundwork for common elements of different tests

/// Solve `input` as `day`, using the default dialect
macro_rules! solve {
    ($day: ident, $input: expr) => {{ Day::$day.solve($input, Dialect::default()).unwrap() }};
}

/// Either the answer to a part, or the reason the input was rejected
fn answer(day: Day, input: &str, part: u8) -> Either<u64, String> {
    match day.solve(input, Dialect::default()) {
        Ok(answers) => Either::Left(answers.part(part).unwrap()),
        Err(e) => Either::Right(e.to_string()),
    }
}

/// A struct with the information about an expected traced instruction
struct ExpectedToken {
    token: Token,
    start: usize,
    toggle: Toggle,
    contribution: Option<u64>,
}

impl ExpectedToken {
    const fn new(token: Token, start: usize, toggle: Toggle, contribution: Option<u64>) -> Self {
        Self {
            token,
            start,
            toggle,
            contribution,
        }
    }

    fn validate(self, traced: &TracedToken) {
        assert_eq!(self.token, traced.token());
        assert_eq!(self.start, traced.span().start);
        assert_eq!(self.toggle, traced.toggle());
        assert_eq!(self.contribution, traced.contribution());
    }
}

fn validate_trace(expected: impl IntoIterator<Item = ExpectedToken>, ScanTrace(trace): ScanTrace) {
    expected
        .into_iter()
        .zip_eq(trace.iter())
        .for_each(|(token, traced)| token.validate(traced))
}

mod day1_examples {
    const EXAMPLE: &str = "\
3   4
4   3
2   5
1   3
3   9
3   3
";

    mod part1 {
        use super::EXAMPLE;
        use crate::*;

        /// > In the example list above, the pairs and distances would be as follows ...
        /// > the total distance is 2 + 1 + 0 + 1 + 2 + 5, a total distance of 11!
        #[test]
        fn total_distance() {
            assert_eq!(solve!(HistorianHysteria, EXAMPLE).part1, 11);
        }
    }

    mod part2 {
        use super::EXAMPLE;
        use crate::*;

        /// > So, for these example lists, the similarity score at the end of this process is 31
        /// > (9 + 4 + 0 + 0 + 9 + 9).
        #[test]
        fn similarity_score() {
            assert_eq!(solve!(HistorianHysteria, EXAMPLE).part2, 31);
        }

        #[test]
        fn bad_input_is_reported() {
            let result = answer(Day::HistorianHysteria, "3   4\n4 three\n", 2);
            assert!(result.is_right(), "{result:?}");
        }
    }
}

mod day2_examples {
    const EXAMPLE: &str = "\
7 6 4 2 1
1 2 7 8 9
9 7 6 2 1
1 3 2 4 5
8 6 4 4 1
1 3 6 7 9
";

    mod part1 {
        use super::EXAMPLE;
        use crate::*;

        /// > So, in this example, 2 reports are safe.
        #[test]
        fn safe_reports() {
            assert_eq!(answer(Day::RedNosedReports, EXAMPLE, 1), Either::Left(2));
        }
    }

    mod part2 {
        use super::EXAMPLE;
        use crate::*;
        use aoc2024::reports::{Report, parse};

        /// > Thanks to the Problem Dampener, 4 reports are actually safe!
        #[test]
        fn dampened_reports() {
            assert_eq!(answer(Day::RedNosedReports, EXAMPLE, 2), Either::Left(4));
        }

        /// Each report's described outcome, in order
        #[test]
        fn individual_reports() {
            let reports = parse(EXAMPLE).unwrap();
            let verdicts = reports
                .iter()
                .map(|report| (report.is_safe(), report.is_safe_dampened()))
                .collect_vec();
            assert_eq!(
                verdicts,
                [
                    (true, true),
                    (false, false),
                    (false, false),
                    (false, true),
                    (false, true),
                    (true, true),
                ]
            );
            assert!(reports.iter().all(|r: &Report| r.levels.len() == 5));
        }
    }
}

mod day3_examples {
    mod part1 {
        use crate::*;

        const EXAMPLE: &str =
            "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))";

        /// > Only the four highlighted sections are real mul instructions. Adding up the result of
        /// > each instruction produces 161 (2*4 + 5*5 + 11*8 + 8*5).
        #[test]
        fn real_instructions() {
            let found = tokens(EXAMPLE, Dialect::Exact)
                .into_iter()
                .map(|Located { token, .. }| token)
                .collect_vec();
            assert_eq!(
                found,
                [
                    Token::Mul(2, 4),
                    Token::Mul(5, 5),
                    Token::Mul(11, 8),
                    Token::Mul(8, 5)
                ]
            );
            assert_eq!(solve!(MullItOver, EXAMPLE).part1, 161);
        }

        /// > Sequences like mul(4*, mul(6,9!, ?(12,34), or mul ( 2 , 4 ) do nothing.
        #[test]
        fn do_nothing_sequences() {
            for memory in ["mul(4*", "mul(6,9!", "?(12,34)", "mul ( 2 , 4 )"] {
                assert_eq!(mull::sum_products(memory), 0, "{memory:?}");
            }
        }
    }

    mod part2 {
        use crate::*;

        const EXAMPLE: &str =
            "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";

        /// > This time, the sum of the results is 48 (2*4 + 8*5).
        #[test]
        fn enabled_instructions() {
            assert_eq!(solve!(MullItOver, EXAMPLE).part2, 48);
            assert_eq!(solve!(MullItOver, EXAMPLE).part1, 161);
        }

        #[test]
        fn traced_example() {
            let mut scanner = Scanner::new(Dialect::Exact);
            scanner.start_trace();
            let answers = scanner.scan(EXAMPLE);
            const EXPECTED: [ExpectedToken; 6] = [
                ExpectedToken::new(Token::Mul(2, 4), 1, Toggle::Enabled, Some(8)),
                ExpectedToken::new(Token::Dont, 20, Toggle::Disabled, None),
                ExpectedToken::new(Token::Mul(5, 5), 28, Toggle::Disabled, None),
                ExpectedToken::new(Token::Mul(11, 8), 48, Toggle::Disabled, None),
                ExpectedToken::new(Token::Do, 59, Toggle::Enabled, None),
                ExpectedToken::new(Token::Mul(8, 5), 64, Toggle::Enabled, Some(40)),
            ];
            let trace = scanner.end_trace().unwrap();
            assert_eq!(trace.total(), answers.part2);
            validate_trace(EXPECTED, trace);
        }

        /// `don't()` followed by `do()` only re-enables what comes after it
        #[test]
        fn re_enabled() {
            assert_eq!(
                solve!(MullItOver, "don't()mul(2,2)do()mul(3,3)"),
                Answers { part1: 13, part2: 9 }
            );
        }
    }
}
