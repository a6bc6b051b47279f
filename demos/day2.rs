// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! A solution to Advent of Code 2024 Day 2 built using the `aoc2024` library.

use aoc2024::reports::{self, Dampener, Report, count_safe};

fn part1(reports: &[Report]) -> usize {
    count_safe(reports, Dampener::Off)
}

fn part2(reports: &[Report]) -> usize {
    let safe = count_safe(reports, Dampener::On);
    assert!(safe >= part1(reports), "the dampener can only help");
    safe
}

fn main() {
    use std::env::args_os;
    use std::fs::read_to_string;
    let input =
        read_to_string(args_os().nth(1).expect("missing file name")).expect("failed to read file");

    let reports = reports::parse(&input).unwrap();
    println!("part 1: {}", part1(&reports));
    println!("part 2: {}", part2(&reports));
}
