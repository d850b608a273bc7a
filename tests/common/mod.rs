// SPDX-License-Identifier: MPL-2.0
// SPDX-FileCopyrightText: Copyright 2024 Ian McIntyre

//! A benchmark and support library that record every call they receive.

#![allow(dead_code)]

use std::cell::RefCell;

use embench_harness::{Benchmark, Support};

/// One call into a collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Initialise,
    WarmCaches(u32),
    Benchmark,
    Verify(u32),
    Print(String),
    Stats,
    StartTrigger,
    StopTrigger,
}

/// The shared call log.
#[derive(Default)]
pub struct Log(RefCell<Vec<Event>>);

impl Log {
    pub fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    /// All printed text, concatenated.
    pub fn printed(&self) -> String {
        self.0
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::Print(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Events that came from the benchmark.
    pub fn benchmark_events(&self) -> Vec<Event> {
        self.0
            .borrow()
            .iter()
            .filter(|event| {
                matches!(
                    event,
                    Event::Initialise | Event::WarmCaches(_) | Event::Benchmark | Event::Verify(_)
                )
            })
            .cloned()
            .collect()
    }

    /// Events that came from the support library's output.
    pub fn output_events(&self) -> Vec<Event> {
        self.0
            .borrow()
            .iter()
            .filter(|event| matches!(event, Event::Print(_) | Event::Stats))
            .cloned()
            .collect()
    }
}

/// Produces a fixed value, and expects another.
///
/// Records `warm_caches` itself, then runs the body `heat` times, so every
/// warm-up iteration is visible as an extra `Event::Benchmark`.
pub struct Recording<'a> {
    pub log: &'a Log,
    pub produces: u32,
    pub expects: u32,
}

impl<'a> Recording<'a> {
    pub fn passing(log: &'a Log) -> Self {
        Self {
            log,
            produces: 42,
            expects: 42,
        }
    }

    pub fn failing(log: &'a Log) -> Self {
        Self {
            log,
            produces: 41,
            expects: 42,
        }
    }
}

impl Benchmark for Recording<'_> {
    type Output = u32;

    fn initialise(&mut self) {
        self.log.push(Event::Initialise);
    }

    fn warm_caches(&mut self, heat: u32) {
        self.log.push(Event::WarmCaches(heat));
        for _ in 0..heat {
            self.benchmark();
        }
    }

    fn benchmark(&mut self) -> u32 {
        self.log.push(Event::Benchmark);
        self.produces
    }

    fn verify(&mut self, result: u32) -> bool {
        self.log.push(Event::Verify(result));
        result == self.expects
    }
}

/// Like [`Recording`], but keeps the provided `warm_caches`.
pub struct DefaultWarmUp<'a> {
    pub log: &'a Log,
}

impl Benchmark for DefaultWarmUp<'_> {
    type Output = u32;

    fn initialise(&mut self) {
        self.log.push(Event::Initialise);
    }

    fn benchmark(&mut self) -> u32 {
        self.log.push(Event::Benchmark);
        42
    }

    fn verify(&mut self, result: u32) -> bool {
        self.log.push(Event::Verify(result));
        result == 42
    }
}

pub struct RecordingSupport<'a> {
    pub log: &'a Log,
}

impl Support for RecordingSupport<'_> {
    fn print_str(&mut self, text: &str) {
        self.log.push(Event::Print(text.into()));
    }

    fn stats(&mut self) {
        self.log.push(Event::Stats);
    }

    fn start_trigger(&mut self) {
        self.log.push(Event::StartTrigger);
    }

    fn stop_trigger(&mut self) {
        self.log.push(Event::StopTrigger);
    }
}

pub const PASSING_TRANSCRIPT: &str = "Initializing Benchmark\n\
                                      Warming Caches\n\
                                      Running Benchmark\n\
                                      Finished Benchmark\n\
                                      PASSED\n";

pub const FAILING_TRANSCRIPT: &str = "Initializing Benchmark\n\
                                      Warming Caches\n\
                                      Running Benchmark\n\
                                      Finished Benchmark\n\
                                      FAILED\n";
