// SPDX-License-Identifier: MPL-2.0
// SPDX-FileCopyrightText: Copyright 2024 Ian McIntyre

//! Exit status, and leaving the program.

/// The outcome of a harness run, as a process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(i32)]
pub enum ExitStatus {
    /// The benchmark's result matched the expected value.
    Success = 0,
    /// The benchmark's result did not match.
    Failure = 1,
}

impl ExitStatus {
    /// Convert a verification flag into an exit status.
    ///
    /// ```
    /// use embench_harness::ExitStatus;
    ///
    /// assert_eq!(ExitStatus::from_correct(true).code(), 0);
    /// assert_eq!(ExitStatus::from_correct(false).code(), 1);
    /// ```
    #[inline]
    pub const fn from_correct(correct: bool) -> Self {
        if correct {
            Self::Success
        } else {
            Self::Failure
        }
    }

    /// The numeric process exit code.
    #[inline]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Returns `true` for [`Success`](Self::Success).
    #[inline]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl From<bool> for ExitStatus {
    fn from(correct: bool) -> Self {
        Self::from_correct(correct)
    }
}

impl From<ExitStatus> for i32 {
    fn from(status: ExitStatus) -> Self {
        status.code()
    }
}

/// Ends the program with an exit status.
///
/// Your platform decides what "exit" means. On a host, it's a process exit.
/// Under QEMU, it could be a semihosting exit. On hardware, it could be a
/// breakpoint or an LED.
///
/// ```no_run
/// use embench_harness::{ExitProcess, ExitStatus};
///
/// struct HostExit;
/// impl ExitProcess for HostExit {
///     fn exit(self, status: ExitStatus) -> ! {
///         std::process::exit(status.code())
///     }
/// }
/// ```
pub trait ExitProcess {
    /// Leave the program, reporting `status`.
    fn exit(self, status: ExitStatus) -> !;
}
