// SPDX-License-Identifier: MPL-2.0
// SPDX-FileCopyrightText: Copyright 2024 Ian McIntyre

//! The steps of a harness run.

/// A step in the harness sequence.
///
/// Phases always run in declaration order. [`Phase::ALL`] lists them in
/// that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Set up benchmark state.
    Initialize,
    /// Run the benchmark body for the configured heat.
    WarmCaches,
    /// The measured run.
    Run,
    /// Check the measured run's result.
    Verify,
    /// Print the verdict and statistics.
    Report,
}

impl Phase {
    /// Every phase, in the order the harness runs them.
    pub const ALL: [Phase; 5] = [
        Phase::Initialize,
        Phase::WarmCaches,
        Phase::Run,
        Phase::Verify,
        Phase::Report,
    ];

    /// The line printed as the harness enters this phase, if any.
    ///
    /// The report phase prints the verdict instead; see [`verdict_line`].
    ///
    /// ```
    /// use embench_harness::Phase;
    ///
    /// assert_eq!(Phase::Run.announcement(), Some("Running Benchmark\n"));
    /// assert_eq!(Phase::Report.announcement(), None);
    /// ```
    pub const fn announcement(self) -> Option<&'static str> {
        match self {
            Phase::Initialize => Some("Initializing Benchmark\n"),
            Phase::WarmCaches => Some("Warming Caches\n"),
            Phase::Run => Some("Running Benchmark\n"),
            // Printed once the measured run finishes.
            Phase::Verify => Some("Finished Benchmark\n"),
            Phase::Report => None,
        }
    }
}

/// The line printed for a verification outcome.
pub const fn verdict_line(correct: bool) -> &'static str {
    if correct {
        "PASSED\n"
    } else {
        "FAILED\n"
    }
}
