// SPDX-License-Identifier: AGPL-3.0-or-later
// © 2025 Ryo ∴ SpiralArchitect (kishkavsesvit@icloud.com)
// Part of SpiralTorch — Licensed under AGPL-3.0-or-later.
// Unauthorized derivative works or closed redistribution prohibited under AGPL §13.

//! Process-level configuration shared by the Lie toolbox crates.
//!
//! - `tracing` installs the global subscriber (stdout + optional Chrome trace).
//! - `classifier` exposes the numeric settings the orbit classifier reads.

pub mod classifier;
pub mod tracing;

pub use classifier::{ClassifierSettings, SettingsError};
pub use self::tracing::{init_tracing, InitError, TraceGuard, TracingConfig};
