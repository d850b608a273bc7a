// SPDX-License-Identifier: MPL-2.0
// SPDX-FileCopyrightText: Copyright 2024 Ian McIntyre

//! The platform support library.
//!
//! The harness talks to your platform through [`Support`]. At a minimum, a
//! platform provides a character sink. It may also report statistics, or
//! bracket the measured run with trigger hooks.

/// Platform services used by the harness.
pub trait Support {
    /// Write `text` to the platform's character output.
    ///
    /// Announcements end with `'\n'`. The harness only calls this when
    /// printing is enabled.
    fn print_str(&mut self, text: &str);

    /// Print statistics about the run.
    ///
    /// Called once, after the verdict, and only when printing is enabled. The
    /// default does nothing.
    fn stats(&mut self) {}

    /// Called immediately before the measured run. The default does nothing.
    ///
    /// The harness calls this regardless of the print setting.
    fn start_trigger(&mut self) {}

    /// Called immediately after the measured run. The default does nothing.
    fn stop_trigger(&mut self) {}
}

impl<S: Support> Support for &mut S {
    fn print_str(&mut self, text: &str) {
        (**self).print_str(text);
    }

    fn stats(&mut self) {
        (**self).stats();
    }

    fn start_trigger(&mut self) {
        (**self).start_trigger();
    }

    fn stop_trigger(&mut self) {
        (**self).stop_trigger();
    }
}

/// A support library that discards all output.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Silent;

impl Support for Silent {
    fn print_str(&mut self, _: &str) {}
}

/// A support library that prints through `defmt`.
///
/// Each string becomes one `defmt::println!` frame, without its trailing
/// newline. You must link a defmt global logger.
#[cfg(feature = "defmt")]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DefmtSupport;

#[cfg(feature = "defmt")]
impl Support for DefmtSupport {
    fn print_str(&mut self, text: &str) {
        defmt::println!("{=str}", text.trim_end_matches('\n'));
    }
}
