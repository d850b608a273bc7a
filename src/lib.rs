// SPDX-License-Identifier: MPL-2.0
// SPDX-FileCopyrightText: Copyright 2024 Ian McIntyre

//! A portable entry point for embedded benchmark programs.
//!
//! The harness runs a benchmark through a fixed sequence:
//!
//! 1. initialize benchmark state,
//! 2. warm caches for [`WARMUP_HEAT`] iterations (zero by default),
//! 3. run the benchmark once, producing a result,
//! 4. verify the result,
//! 5. optionally print the verdict and statistics,
//! 6. produce an exit status: 0 if the result verified, 1 otherwise.
//!
//! The harness doesn't know anything about your benchmark or your platform.
//! You bring a [`Benchmark`], which does the work and checks its own result,
//! and a [`Support`] library, which provides character output and statistics.
//! To leave the program, you also bring an [`ExitProcess`].
//!
//! # Getting started
//!
//! Implement [`Benchmark`] for your workload, then hand it to [`enter`]
//! from your program's entry point.
//!
//! ```no_run
//! use embench_harness::{Benchmark, ExitProcess, ExitStatus, Silent};
//!
//! struct Fibonacci;
//!
//! impl Benchmark for Fibonacci {
//!     type Output = u64;
//!     fn benchmark(&mut self) -> u64 {
//!         let (mut a, mut b) = (0u64, 1u64);
//!         for _ in 0..50 {
//!             (a, b) = (b, a + b);
//!         }
//!         a
//!     }
//!     fn verify(&mut self, result: u64) -> bool {
//!         result == 12_586_269_025
//!     }
//! }
//!
//! struct HostExit;
//! impl ExitProcess for HostExit {
//!     fn exit(self, status: ExitStatus) -> ! {
//!         std::process::exit(status.code())
//!     }
//! }
//!
//! fn main() {
//!     embench_harness::enter(Fibonacci, Silent, HostExit)
//! }
//! ```
//!
//! If you'd rather handle the exit status yourself, use [`run`].
//!
//! ```
//! use embench_harness::{Collaborators, Config, Silent};
//!
//! fn benchmark() -> i32 { 2 + 2 }
//! fn verify_benchmark(result: i32) -> bool { result == 5 }
//!
//! let bench = Collaborators {
//!     initialise_benchmark: || {},
//!     warm_caches: |_| {},
//!     benchmark,
//!     verify_benchmark,
//! };
//!
//! let status = embench_harness::run(bench, Silent, Config::DEFAULT);
//! assert_eq!(status.code(), 1);
//! ```
//!
//! # Printing
//!
//! With printing enabled, the harness announces each phase through
//! [`Support::print_str`]:
//!
//! ```text
//! Initializing Benchmark
//! Warming Caches
//! Running Benchmark
//! Finished Benchmark
//! PASSED
//! ```
//!
//! then calls [`Support::stats`] once. A failing benchmark prints `FAILED`
//! instead of `PASSED`, and still gets its statistics. With printing
//! disabled, the harness never calls `print_str` or `stats`.
//!
//! # Configuration
//!
//! The harness is configured at build time.
//!
//! - The `print` feature enables printing in [`Config::DEFAULT`].
//! - The `EMBENCH_WARMUP_HEAT` environment variable sets [`WARMUP_HEAT`].
//! - The `defmt` feature logs each phase and the verdict through `defmt`,
//!   and provides `DefmtSupport`.
//!
//! You can also pass any [`Config`] to [`run`] or [`enter_with`].
//!
//! # Porting
//!
//! A port provides a [`Support`] implementation and an [`ExitProcess`]
//! implementation. The harness does not initialize your board and does not
//! measure time. If you want to measure the benchmark body, implement
//! [`Support::start_trigger`] and [`Support::stop_trigger`]; the harness
//! calls them immediately around the measured run.

#![no_std]
#![warn(
    elided_lifetimes_in_paths,
    explicit_outlives_requirements,
    let_underscore_drop,
    missing_docs,
    semicolon_in_expressions_from_macros,
    single_use_lifetimes,
    trivial_numeric_casts,
    unreachable_pub,
    unused_qualifications,
    clippy::map_unwrap_or,
    clippy::manual_assert,
    clippy::redundant_closure_for_method_calls,
    clippy::semicolon_if_nothing_returned,
    clippy::single_match_else,
    clippy::used_underscore_binding
)]
#![allow(missing_debug_implementations, clippy::must_use_candidate)]

mod benchmark;
pub mod config;
mod exit;
pub mod harness;
mod log;
pub mod phase;
mod support;

pub use benchmark::{Benchmark, Collaborators};
pub use config::{Config, ENABLE_PRINT, WARMUP_HEAT};
pub use exit::{ExitProcess, ExitStatus};
pub use harness::Harness;
pub use phase::Phase;
#[cfg(feature = "defmt")]
pub use support::DefmtSupport;
pub use support::{Silent, Support};

/// Run `benchmark` through the full sequence, and return its exit status.
///
/// `support` receives any printed output. Whether there is any output depends
/// on `config.print`.
///
/// To keep your benchmark or support after the run, pass them by `&mut`.
pub fn run<B, S>(mut benchmark: B, mut support: S, config: Config) -> ExitStatus
where
    B: Benchmark,
    S: Support,
{
    Harness::new(&mut benchmark, &mut support, config)
        .initialise()
        .warm_caches()
        .run()
        .verify()
        .report()
}

/// Run `benchmark` with [`Config::DEFAULT`], then exit.
///
/// See the package documentation for an example.
pub fn enter<B, S, E>(benchmark: B, support: S, exit: E) -> !
where
    B: Benchmark,
    S: Support,
    E: ExitProcess,
{
    enter_with(benchmark, support, exit, Config::DEFAULT)
}

/// Run `benchmark` with the given configuration, then exit.
pub fn enter_with<B, S, E>(benchmark: B, support: S, exit: E, config: Config) -> !
where
    B: Benchmark,
    S: Support,
    E: ExitProcess,
{
    let status = run(benchmark, support, config);
    exit.exit(status)
}
