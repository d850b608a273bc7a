// SPDX-License-Identifier: MPL-2.0
// SPDX-FileCopyrightText: Copyright 2024 Ian McIntyre

//! Harness logging.
//!
//! Logging goes through defmt when the `defmt` feature is enabled, and
//! compiles away otherwise. Log frames share the platform's output with the
//! support library, so they follow the same print setting: a quiet run logs
//! nothing.

use crate::{Config, ExitStatus, Phase};

cfg_if::cfg_if! {
    if #[cfg(feature = "defmt")] {
        pub(crate) fn phase(config: &Config, phase: Phase) {
            if !config.print {
                return;
            }
            match phase {
                Phase::WarmCaches => {
                    defmt::debug!("{} with heat {=u32}", phase, config.warmup_heat);
                }
                _ => defmt::debug!("{}", phase),
            }
        }

        pub(crate) fn verdict(config: &Config, status: ExitStatus) {
            if !config.print {
                return;
            }
            match status {
                ExitStatus::Success => defmt::info!("benchmark verified"),
                ExitStatus::Failure => defmt::warn!("benchmark result mismatch"),
            }
        }
    } else {
        #[inline(always)]
        pub(crate) fn phase(_: &Config, _: Phase) {}

        #[inline(always)]
        pub(crate) fn verdict(_: &Config, _: ExitStatus) {}
    }
}
