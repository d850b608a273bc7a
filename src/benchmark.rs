// SPDX-License-Identifier: MPL-2.0
// SPDX-FileCopyrightText: Copyright 2024 Ian McIntyre

//! The benchmark collaborator.
//!
//! A benchmark is any type that implements [`Benchmark`]. Implement the trait
//! directly when your benchmark owns its state:
//!
//! ```
//! use embench_harness::Benchmark;
//!
//! struct SumOfSquares {
//!     n: u32,
//! }
//!
//! impl Benchmark for SumOfSquares {
//!     type Output = u32;
//!     fn benchmark(&mut self) -> u32 {
//!         (1..=self.n).map(|i| i * i).sum()
//!     }
//!     fn verify(&mut self, result: u32) -> bool {
//!         result == 338_350
//!     }
//! }
//! ```
//!
//! If your benchmark is a set of free functions over global state, wrap them
//! in [`Collaborators`]:
//!
//! ```
//! use embench_harness::Collaborators;
//!
//! fn benchmark() -> i32 { 6 * 7 }
//! fn verify_benchmark(result: i32) -> bool { result == 42 }
//!
//! static BENCH: Collaborators<i32> = Collaborators {
//!     initialise_benchmark: || {},
//!     warm_caches: |_| {},
//!     benchmark,
//!     verify_benchmark,
//! };
//! ```

use core::hint::black_box;

/// A unit of work whose result is checked against a known-good value.
pub trait Benchmark {
    /// The result of one run.
    ///
    /// Benchmarks that check global state instead of a returned value can
    /// use `()`.
    type Output;

    /// Prepare benchmark state.
    ///
    /// Called once, before anything else. The default does nothing.
    fn initialise(&mut self) {}

    /// Bring caches to a steady state.
    ///
    /// The default runs [`benchmark`](Self::benchmark) `heat` times and
    /// discards each result. A heat of zero does nothing.
    fn warm_caches(&mut self, heat: u32) {
        for _ in 0..heat {
            black_box(self.benchmark());
        }
    }

    /// Run the benchmark body once.
    fn benchmark(&mut self) -> Self::Output;

    /// Returns `true` if `result` is the expected outcome.
    fn verify(&mut self, result: Self::Output) -> bool;
}

impl<B: Benchmark> Benchmark for &mut B {
    type Output = B::Output;

    fn initialise(&mut self) {
        (**self).initialise();
    }

    fn warm_caches(&mut self, heat: u32) {
        (**self).warm_caches(heat);
    }

    fn benchmark(&mut self) -> Self::Output {
        (**self).benchmark()
    }

    fn verify(&mut self, result: Self::Output) -> bool {
        (**self).verify(result)
    }
}

/// A benchmark made of four free functions.
///
/// Field names follow the functions a C benchmark suite would export. Since
/// all fields are function pointers, you can define a `Collaborators` in a
/// `static` or `const`.
#[derive(Debug)]
pub struct Collaborators<T> {
    /// Prepare benchmark state.
    pub initialise_benchmark: fn(),
    /// Bring caches to a steady state for the given heat.
    pub warm_caches: fn(u32),
    /// Run the benchmark body once.
    pub benchmark: fn() -> T,
    /// Returns `true` if the result is correct.
    pub verify_benchmark: fn(T) -> bool,
}

// Manual impls avoid the `T: Clone` / `T: Copy` bounds a derive would add.
impl<T> Clone for Collaborators<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Collaborators<T> {}

impl<T> Benchmark for Collaborators<T> {
    type Output = T;

    fn initialise(&mut self) {
        (self.initialise_benchmark)();
    }

    fn warm_caches(&mut self, heat: u32) {
        (self.warm_caches)(heat);
    }

    fn benchmark(&mut self) -> T {
        (self.benchmark)()
    }

    fn verify(&mut self, result: T) -> bool {
        (self.verify_benchmark)(result)
    }
}
