// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

use aoc2024::prelude::*;
use chumsky::error::{Rich, RichPattern};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};
use either::Either;
use std::error::Error;
use std::fmt::{self, Debug, Display};
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

#[cfg(feature = "ariadne")]
use ariadne::{Color, Fmt, Label, Report, ReportKind, Source};

const VERSION: &str = concat!(env!("CARGO_CRATE_NAME"), '-', env!("CARGO_PKG_VERSION"));
const INPUT_HELP: &str = "File containing the puzzle input\nuses stdin if unset or set to '-'";

#[derive(PartialEq, Clone, Copy, ValueEnum)]
enum Puzzle {
    /// Day 1: sum of list distances and similarity score
    #[value(alias("1"), alias("day1"))]
    HistorianHysteria,
    /// Day 2: safe reports, without and with the Problem Dampener
    #[value(alias("2"), alias("day2"))]
    RedNosedReports,
    /// Day 3: sum of mul instructions, without and with do()/don't()
    #[value(alias("3"), alias("day3"))]
    MullItOver,
}

impl From<Puzzle> for Day {
    fn from(puzzle: Puzzle) -> Self {
        match puzzle {
            Puzzle::HistorianHysteria => Day::HistorianHysteria,
            Puzzle::RedNosedReports => Day::RedNosedReports,
            Puzzle::MullItOver => Day::MullItOver,
        }
    }
}

#[derive(Parser)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_version = VERSION)]
#[command(about = "Advent of Code 2024 solver", long_about = None)]
struct Args {
    #[arg(help = "Which puzzle to solve")]
    day: Puzzle,
    #[arg(help = INPUT_HELP.split_once("\n").unwrap().0)]
    #[arg(long_help = INPUT_HELP)]
    input: Option<PathBuf>,
    #[arg(help = "Only print the answer to one part")]
    #[arg(short, long)]
    #[arg(value_parser = clap::value_parser!(u8).range(1..=2))]
    part: Option<u8>,
    #[arg(help = "Forbid whitespace inside mul instructions (day 3 only)")]
    #[arg(long)]
    exact: bool,
    #[arg(help = "Print each instruction scanned to stderr (day 3 only)")]
    #[arg(short, long)]
    trace: bool,
}

impl Args {
    /// Reject the day 3 flags when solving a different puzzle
    fn validate(self) -> Result<Self, clap::Error> {
        if self.day == Puzzle::MullItOver {
            return Ok(self);
        }
        let flag = match (self.exact, self.trace) {
            (_, true) => "--trace",
            (true, false) => "--exact",
            (false, false) => return Ok(self),
        };
        Err(Self::command().error(
            ErrorKind::ArgumentConflict,
            format!("{flag} can only be used with day 3 (mull-it-over)"),
        ))
    }

    fn dialect(&self) -> Dialect {
        if self.exact {
            Dialect::Exact
        } else {
            Dialect::Lenient
        }
    }

    fn reader(&self) -> io::Result<Either<File, io::Stdin>> {
        match self.input.as_deref() {
            Some(path) if path.as_os_str() != "-" => File::open(path).map(Either::Left),
            _ => Ok(Either::Right(io::stdin())),
        }
    }

    fn input_name(&self) -> String {
        match self.input.as_deref() {
            Some(path) if path.as_os_str() != "-" => path.to_string_lossy().into_owned(),
            _ => String::from("<stdin>"),
        }
    }
}

/// Sort the expected patterns of `err`, leaving out whitespace
fn expected_patterns<'e, 'src>(err: &'e Rich<'src, char>) -> Vec<&'e RichPattern<'src, char>> {
    let mut expected: Vec<_> = err.expected().collect();
    // no need to explicitly mention whitespace
    expected.retain(|pat| {
        !matches!(pat, RichPattern::Label(s) if *s == "inline whitespace" || *s == "whitespace")
    });

    // make sure that "something else" is the last listed entry
    expected.sort_unstable_by(|&a, &b| {
        use std::cmp::Ordering;
        match (a, b) {
            (RichPattern::SomethingElse, _) => Ordering::Greater,
            (_, RichPattern::SomethingElse) => Ordering::Less,
            (a, b) => a.cmp(b),
        }
    });
    expected
}

#[cfg(not(feature = "ariadne"))]
fn report_parse_err(err: Rich<'_, char>, file: &str, _: &str) {
    eprintln!("error parsing {file} at {}..{}:", err.span().start, err.span().end);
    if let Some(found) = err.found() {
        eprintln!("Found token \'{}\'", found.escape_default())
    }

    match &expected_patterns(&err)[..] {
        &[] => (),
        &[pat] => eprintln!("Expected \"{}\"", pat),
        pats => {
            eprintln!("Expected one of the following:");
            for pat in pats {
                eprintln!("- {pat}");
            }
        }
    }
}

#[cfg(feature = "ariadne")]
fn report_parse_err(err: Rich<'_, char>, file: &str, source: &str) {
    use std::fmt::Write;

    let mut builder = Report::build(ReportKind::Error, (file, err.span().into_range()))
        .with_message(format!("Failed to parse {}", file.fg(Color::Red)));

    if let Some(found) = err.found() {
        builder = builder.with_label(
            Label::new((file, err.span().into_range()))
                .with_message(format!(
                    "Found token \'{}\'",
                    found.escape_default().fg(Color::Cyan)
                ))
                .with_color(Color::Yellow),
        );
    }

    match &expected_patterns(&err)[..] {
        &[] => (),
        &[pat] => {
            builder = builder.with_note(format!("Expected \"{}\"", pat.fg(Color::Blue)));
        }
        pats => {
            let mut note = String::from("Expected one of the following:\n");
            for pat in pats {
                writeln!(&mut note, "- {}", pat.fg(Color::Blue)).expect("can write to &mut String");
            }
            builder = builder.with_note(note);
        }
    }

    builder
        .finish()
        .eprint((file, Source::from(source)))
        .expect("failed to print to stderr");
}

fn main() -> Result<ExitCode, DisplayedError> {
    let args = Args::parse().validate().unwrap_or_else(|e| e.exit());
    let mut input = String::new();
    args.reader()?.read_to_string(&mut input)?;

    let day = Day::from(args.day);
    let answers = if day == Day::MullItOver && args.trace {
        let mut scanner = Scanner::new(args.dialect());
        scanner.start_trace();
        let answers = scanner.scan(&input);
        if let Some(trace) = scanner.end_trace() {
            eprint!("{trace}");
        }
        answers
    } else {
        match day.solve(&input, args.dialect()) {
            Ok(answers) => answers,
            Err(errs) => {
                let name = args.input_name();
                for err in errs.into_errors() {
                    report_parse_err(err, &name, &input);
                }
                return Ok(ExitCode::FAILURE);
            }
        }
    };

    // clap limits `--part` to 1 or 2
    match args.part.and_then(|part| answers.part(part)) {
        Some(answer) => println!("{answer}"),
        None => println!("{answers}"),
    }
    Ok(ExitCode::SUCCESS)
}

/// a wrapper around a [`Box`ed][Box] [dyn Error][Error] that uses its implementation of [Display]
/// for the [Debug] impl, to display the Error if returned from `main`
struct DisplayedError(Box<dyn Error>);
impl<E: Error + 'static> From<E> for DisplayedError {
    fn from(e: E) -> Self {
        Self(Box::from(e))
    }
}

impl Debug for DisplayedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}
