// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! A solution to Advent of Code 2024 Day 1 built using the `aoc2024` library.

use aoc2024::historian::{self, LocationLists};

fn part1(lists: &LocationLists) -> u64 {
    lists.total_distance().expect("total distance overflowed")
}

fn part2(lists: &LocationLists) -> u64 {
    lists.similarity_score().expect("similarity score overflowed")
}

fn main() {
    use std::env::args_os;
    use std::fs::read_to_string;
    let input =
        read_to_string(args_os().nth(1).expect("missing file name")).expect("failed to read file");

    let lists = historian::parse(&input).unwrap();
    println!("part 1: {}", part1(&lists));
    println!("part 2: {}", part2(&lists));
}
