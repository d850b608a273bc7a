// SPDX-License-Identifier: MPL-2.0
// SPDX-FileCopyrightText: Copyright 2024 Ian McIntyre

//! An extension package for running benchmarks in QEMU.
//!
//! It uses defmt semihosting to convey the harness' output. You can expect
//! your QEMU instance to write defmt frames to stdout, and you can parse those
//! using `defmt-print`, or your custom decoder. When the run completes, the
//! package exits QEMU through semihosting, so QEMU's own exit status is the
//! benchmark's verdict.
//!
//! ```ignore
//! #![no_std]
//! #![no_main]
//!
//! use embench_qemu::Benchmark;
//! use panic_probe as _;
//!
//! struct Nothing;
//! impl Benchmark for Nothing {
//!     type Output = ();
//!     fn benchmark(&mut self) {}
//!     fn verify(&mut self, _: ()) -> bool { true }
//! }
//!
//! #[cortex_m_rt::entry]
//! fn main() -> ! {
//!     embench_qemu::enter(Nothing)
//! }
//! ```
//!
//! Enable this package's `print` feature to see the harness announcements.
//! Without it, a run writes nothing to stdout; the exit status is the only
//! output.
//!
//! # Linking
//!
//! The build script adds the `cortex-m-rt` and defmt linker scripts for this
//! package's examples only. If you add integration tests that run on the
//! target, extend `build.rs` with the matching `rustc-link-arg-tests` lines.

#![no_std]

use cortex_m_semihosting::debug;
use defmt_semihosting as _;

pub use embench_harness::*;

/// Leaves QEMU through a semihosting exit.
///
/// QEMU must run with semihosting enabled. Otherwise, or if a debugger
/// ignores the request, the core waits for interrupts forever.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SemihostingExit;

impl ExitProcess for SemihostingExit {
    fn exit(self, status: ExitStatus) -> ! {
        debug::exit(match status {
            ExitStatus::Success => debug::EXIT_SUCCESS,
            ExitStatus::Failure => debug::EXIT_FAILURE,
        });

        loop {
            cortex_m::asm::wfi();
        }
    }
}

/// Run `benchmark` with the build's configuration, then exit QEMU.
///
/// Output goes through defmt. See the package documentation for an
/// example.
pub fn enter<B: Benchmark>(benchmark: B) -> ! {
    embench_harness::enter(benchmark, DefmtSupport, SemihostingExit)
}
