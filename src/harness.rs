// SPDX-License-Identifier: MPL-2.0
// SPDX-FileCopyrightText: Copyright 2024 Ian McIntyre

//! Step-by-step harness runs.
//!
//! [`run`](crate::run) is the usual way to drive a benchmark. If you want to
//! look at the result between steps, use a [`Harness`] instead. Each step
//! consumes the previous state and returns the next one, so the steps happen
//! in order, exactly once:
//!
//! ```
//! use embench_harness::{Collaborators, Config, Harness, Silent};
//!
//! let mut bench = Collaborators::<i32> {
//!     initialise_benchmark: || {},
//!     warm_caches: |_| {},
//!     benchmark: || 6 * 7,
//!     verify_benchmark: |result| result == 42,
//! };
//! let mut support = Silent;
//!
//! let finished = Harness::new(&mut bench, &mut support, Config::quiet())
//!     .initialise()
//!     .warm_caches()
//!     .run();
//! assert_eq!(*finished.result(), 42);
//!
//! let status = finished.verify().report();
//! assert!(status.is_success());
//! ```
//!
//! Skipping a step doesn't compile.
//!
//! ```compile_fail
//! # use embench_harness::{Collaborators, Config, Harness, Silent};
//! # let mut bench = Collaborators::<()> {
//! #     initialise_benchmark: || {},
//! #     warm_caches: |_| {},
//! #     benchmark: || (),
//! #     verify_benchmark: |()| true,
//! # };
//! # let mut support = Silent;
//! Harness::new(&mut bench, &mut support, Config::quiet())
//!     .initialise()
//!     .run(); // No warm_caches!
//! ```
//!
//! Neither does repeating one.
//!
//! ```compile_fail
//! # use embench_harness::{Collaborators, Config, Harness, Silent};
//! # let mut bench = Collaborators::<()> {
//! #     initialise_benchmark: || {},
//! #     warm_caches: |_| {},
//! #     benchmark: || (),
//! #     verify_benchmark: |()| true,
//! # };
//! # let mut support = Silent;
//! let finished = Harness::new(&mut bench, &mut support, Config::quiet())
//!     .initialise()
//!     .warm_caches()
//!     .run();
//! finished.verify();
//! finished.verify();
//! ```

use core::hint::black_box;

use crate::{log, phase, Benchmark, Config, ExitStatus, Phase, Support};

/// A harness run that hasn't started.
#[must_use = "a harness does nothing until you call initialise()"]
pub struct Harness<'a, B, S> {
    benchmark: &'a mut B,
    support: &'a mut S,
    config: Config,
}

impl<'a, B: Benchmark, S: Support> Harness<'a, B, S> {
    /// Prepare to run `benchmark`, reporting through `support`.
    pub fn new(benchmark: &'a mut B, support: &'a mut S, config: Config) -> Self {
        Self {
            benchmark,
            support,
            config,
        }
    }

    /// The run's configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn begin_phase(&mut self, phase: Phase) {
        log::phase(&self.config, phase);
        if self.config.print {
            if let Some(line) = phase.announcement() {
                self.support.print_str(line);
            }
        }
    }

    /// Initialize the benchmark.
    pub fn initialise(mut self) -> Initialised<'a, B, S> {
        self.begin_phase(Phase::Initialize);
        self.benchmark.initialise();
        Initialised(self)
    }
}

/// The benchmark is initialized.
#[must_use = "call warm_caches() to continue the run"]
pub struct Initialised<'a, B, S>(Harness<'a, B, S>);

impl<'a, B: Benchmark, S: Support> Initialised<'a, B, S> {
    /// Warm caches using the configured heat.
    pub fn warm_caches(self) -> Warmed<'a, B, S> {
        let mut harness = self.0;
        harness.begin_phase(Phase::WarmCaches);
        let heat = harness.config.warmup_heat;
        harness.benchmark.warm_caches(heat);
        Warmed(harness)
    }
}

/// Caches are warm; the measured run is next.
#[must_use = "call run() to continue the run"]
pub struct Warmed<'a, B, S>(Harness<'a, B, S>);

impl<'a, B: Benchmark, S: Support> Warmed<'a, B, S> {
    /// Perform the measured run.
    ///
    /// The support library's triggers bracket the benchmark body.
    pub fn run(self) -> Finished<'a, B, S> {
        let mut harness = self.0;
        harness.begin_phase(Phase::Run);

        harness.support.start_trigger();
        let result = black_box(harness.benchmark.benchmark());
        harness.support.stop_trigger();

        Finished { harness, result }
    }
}

/// The measured run is complete.
#[must_use = "call verify() to check the result"]
pub struct Finished<'a, B: Benchmark, S> {
    harness: Harness<'a, B, S>,
    result: B::Output,
}

impl<'a, B: Benchmark, S: Support> Finished<'a, B, S> {
    /// The measured run's result.
    pub fn result(&self) -> &B::Output {
        &self.result
    }

    /// Check the result.
    pub fn verify(self) -> Verdict<'a, B, S> {
        let Finished {
            mut harness,
            result,
        } = self;
        harness.begin_phase(Phase::Verify);
        let correct = harness.benchmark.verify(result);
        Verdict { harness, correct }
    }
}

/// The result is checked.
#[must_use = "call report() to get the exit status"]
pub struct Verdict<'a, B, S> {
    harness: Harness<'a, B, S>,
    correct: bool,
}

impl<B: Benchmark, S: Support> Verdict<'_, B, S> {
    /// Returns `true` if the benchmark produced the expected result.
    pub fn is_correct(&self) -> bool {
        self.correct
    }

    /// The exit status for this verdict.
    pub fn status(&self) -> ExitStatus {
        ExitStatus::from_correct(self.correct)
    }

    /// Print the verdict and statistics, if enabled, and produce the exit
    /// status.
    pub fn report(self) -> ExitStatus {
        let Verdict {
            mut harness,
            correct,
        } = self;
        harness.begin_phase(Phase::Report);
        if harness.config.print {
            harness.support.print_str(phase::verdict_line(correct));
            harness.support.stats();
        }

        let status = ExitStatus::from_correct(correct);
        log::verdict(&harness.config, status);
        status
    }
}
