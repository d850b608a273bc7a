// SPDX-License-Identifier: MPL-2.0
// SPDX-FileCopyrightText: Copyright 2024 Ian McIntyre

//! Runs a small benchmark in QEMU, then exits with its verdict.
//!
//! QEMU can't tell you anything about performance; this is a way to check
//! that a port of the harness builds, runs, and exits as expected.

#![no_std]
#![no_main]

use embench_qemu::Benchmark;
use panic_probe as _;

const N: usize = 100;

/// 1² + 2² + ... + 100²
const EXPECTED: u32 = 338_350;

struct SumOfSquares {
    values: [u32; N],
}

impl Benchmark for SumOfSquares {
    type Output = u32;

    fn initialise(&mut self) {
        for (value, n) in self.values.iter_mut().zip(1..) {
            *value = n;
        }
    }

    fn benchmark(&mut self) -> u32 {
        self.values.iter().map(|&value| value * value).sum()
    }

    fn verify(&mut self, result: u32) -> bool {
        result == EXPECTED
    }
}

#[cortex_m_rt::entry]
fn main() -> ! {
    embench_qemu::enter(SumOfSquares { values: [0; N] })
}
