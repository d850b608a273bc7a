// SPDX-License-Identifier: MPL-2.0
// SPDX-FileCopyrightText: Copyright 2024 Ian McIntyre

//! Harness configuration.
//!
//! Everything here is known at compile time. The default configuration is
//! [`Config::DEFAULT`], which takes its warm-up heat from [`WARMUP_HEAT`] and
//! its print setting from the `print` feature.
//!
//! ```
//! use embench_harness::Config;
//!
//! const CONFIG: Config = Config::quiet().with_warmup_heat(2);
//! assert!(!CONFIG.print);
//! assert_eq!(CONFIG.warmup_heat, 2);
//! ```

/// The number of warm-up iterations run before the measured run.
///
/// This is zero unless you set `EMBENCH_WARMUP_HEAT` when building the
/// package. The value must be a decimal `u32`; anything else fails the build.
pub const WARMUP_HEAT: u32 = match option_env!("EMBENCH_WARMUP_HEAT") {
    Some(heat) => parse_heat(heat),
    None => 0,
};

/// True if the `print` feature is enabled.
pub const ENABLE_PRINT: bool = cfg!(feature = "print");

/// Parse a decimal heat value in a constant context.
///
/// # Panics
///
/// Panics if `text` is empty, contains anything other than ASCII digits,
/// or overflows a `u32`. Evaluated in a constant, the panic is a build error.
///
/// ```compile_fail
/// const HEAT: u32 = embench_harness::config::parse_heat("lots");
/// assert_eq!(HEAT, 0);
/// ```
pub const fn parse_heat(text: &str) -> u32 {
    let bytes = text.as_bytes();
    assert!(!bytes.is_empty(), "warm-up heat is empty");

    let mut heat: u32 = 0;
    let mut idx = 0;
    while idx < bytes.len() {
        let digit = bytes[idx];
        assert!(digit.is_ascii_digit(), "warm-up heat must be a decimal number");

        heat = match heat.checked_mul(10) {
            Some(heat) => heat,
            None => panic!("warm-up heat overflows a u32"),
        };
        heat = match heat.checked_add((digit - b'0') as u32) {
            Some(heat) => heat,
            None => panic!("warm-up heat overflows a u32"),
        };
        idx += 1;
    }
    heat
}

/// How the harness runs a benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Number of warm-up iterations handed to
    /// [`Benchmark::warm_caches`](crate::Benchmark::warm_caches).
    pub warmup_heat: u32,
    /// Announce phases and the verdict, and call
    /// [`Support::stats`](crate::Support::stats).
    ///
    /// When false, the harness never touches the support library's output.
    pub print: bool,
}

impl Config {
    /// The build's configuration.
    pub const DEFAULT: Self = Self {
        warmup_heat: WARMUP_HEAT,
        print: ENABLE_PRINT,
    };

    /// The build's warm-up heat, with printing disabled.
    pub const fn quiet() -> Self {
        Self {
            print: false,
            ..Self::DEFAULT
        }
    }

    /// The build's warm-up heat, with printing enabled.
    pub const fn verbose() -> Self {
        Self {
            print: true,
            ..Self::DEFAULT
        }
    }

    /// Change the warm-up heat.
    pub const fn with_warmup_heat(self, warmup_heat: u32) -> Self {
        Self {
            warmup_heat,
            ..self
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}
