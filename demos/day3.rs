// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! A solution to Advent of Code 2024 Day 3 built using the `aoc2024` library.
//!
//! Pass `--trace` after the file name to see every instruction found in the memory.

use aoc2024::prelude::*;

fn part1(memory: &str) -> u64 {
    mull::sum_products(memory)
}

fn part2(memory: &str) -> u64 {
    mull::sum_enabled_products(memory)
}

fn main() {
    use std::env::args_os;
    use std::fs::read_to_string;
    let mut args = args_os().skip(1);
    let memory =
        read_to_string(args.next().expect("missing file name")).expect("failed to read file");

    if args.next().is_some_and(|arg| arg == "--trace") {
        let mut scanner = Scanner::new(Dialect::default());
        scanner.start_trace();
        scanner.scan(&memory);
        eprint!("{}", scanner.end_trace().unwrap());
    }
    println!("part 1: {}", part1(&memory));
    println!("part 2: {}", part2(&memory));
}
