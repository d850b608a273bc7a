// SPDX-License-Identifier: MPL-2.0
// SPDX-FileCopyrightText: Copyright 2024 Ian McIntyre

//! Driving the harness one step at a time.

mod common;

use common::{Event, Log, Recording, RecordingSupport};
use embench_harness::{Config, ExitStatus, Harness, Phase};

#[test]
fn inspect_between_steps() {
    let log = Log::default();
    let mut bench = Recording::passing(&log);
    let mut support = RecordingSupport { log: &log };

    let initialised = Harness::new(&mut bench, &mut support, Config::verbose().with_warmup_heat(0))
        .initialise();
    assert_eq!(
        log.events(),
        [
            Event::Print("Initializing Benchmark\n".into()),
            Event::Initialise
        ]
    );

    let finished = initialised.warm_caches().run();
    assert_eq!(*finished.result(), 42);
    assert_eq!(log.printed(), "Initializing Benchmark\nWarming Caches\nRunning Benchmark\n");

    let verdict = finished.verify();
    assert!(verdict.is_correct());
    assert_eq!(verdict.status(), ExitStatus::Success);
    // Nothing is reported until we ask for it.
    assert!(!log.events().contains(&Event::Stats));

    assert_eq!(verdict.report(), ExitStatus::Success);
    assert_eq!(log.printed(), common::PASSING_TRANSCRIPT);
}

#[test]
fn harness_keeps_its_config() {
    let log = Log::default();
    let mut bench = Recording::passing(&log);
    let mut support = RecordingSupport { log: &log };
    let config = Config::quiet().with_warmup_heat(9);

    let harness = Harness::new(&mut bench, &mut support, config);
    assert_eq!(harness.config(), &config);
    drop(harness);

    // Constructing a harness runs nothing.
    assert!(log.events().is_empty());
}

#[test]
fn announcements_match_transcript() {
    let announced: String = Phase::ALL
        .iter()
        .filter_map(|phase| phase.announcement())
        .chain([embench_harness::phase::verdict_line(true)])
        .collect();
    assert_eq!(announced, common::PASSING_TRANSCRIPT);

    let mut sorted = Phase::ALL;
    sorted.sort();
    assert_eq!(sorted, Phase::ALL);
}
