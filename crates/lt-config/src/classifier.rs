// SPDX-License-Identifier: AGPL-3.0-or-later
// © 2025 Ryo ∴ SpiralArchitect (kishkavsesvit@icloud.com)
// Part of SpiralTorch — Licensed under AGPL-3.0-or-later.
// Unauthorized derivative works or closed redistribution prohibited under AGPL §13.

use ::tracing::warn;
use std::sync::OnceLock;
use thiserror::Error;

/// Tolerance used to decide whether a weight entry is an integer or a half integer.
pub const DEFAULT_TOLERANCE: f64 = 1e-7;

/// Upper bound on box moves performed by a single collapse.
pub const DEFAULT_COLLAPSE_BUDGET: usize = 10_000;

/// Numeric settings consumed by the orbit classifier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassifierSettings {
    /// Absolute tolerance for entry classification and imaginary-part equality.
    pub tolerance: f64,
    /// Maximum number of collapse iterations before the run is declared broken.
    pub collapse_budget: usize,
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            collapse_budget: DEFAULT_COLLAPSE_BUDGET,
        }
    }
}

impl ClassifierSettings {
    /// Builds settings with explicit values.
    pub fn new(tolerance: f64, collapse_budget: usize) -> Result<Self, SettingsError> {
        if !(tolerance.is_finite() && tolerance > 0.0 && tolerance < 0.25) {
            return Err(SettingsError::Tolerance { value: tolerance });
        }
        if collapse_budget == 0 {
            return Err(SettingsError::CollapseBudget);
        }
        Ok(Self {
            tolerance,
            collapse_budget,
        })
    }

    /// Builds a settings snapshot from `LT_TOLERANCE` and `LT_COLLAPSE_BUDGET`.
    ///
    /// Unset variables fall back to the defaults; malformed ones are reported.
    pub fn from_env() -> Result<Self, SettingsError> {
        let tolerance = match std::env::var("LT_TOLERANCE") {
            Ok(raw) => raw
                .trim()
                .parse::<f64>()
                .map_err(|_| SettingsError::Unparsable {
                    key: "LT_TOLERANCE",
                    raw,
                })?,
            Err(_) => DEFAULT_TOLERANCE,
        };
        let collapse_budget = match std::env::var("LT_COLLAPSE_BUDGET") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|_| SettingsError::Unparsable {
                    key: "LT_COLLAPSE_BUDGET",
                    raw,
                })?,
            Err(_) => DEFAULT_COLLAPSE_BUDGET,
        };
        Self::new(tolerance, collapse_budget)
    }
}

/// Errors raised while assembling classifier settings.
#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("tolerance must be positive, finite and below 0.25, got {value}")]
    Tolerance { value: f64 },
    #[error("collapse budget must be non-zero")]
    CollapseBudget,
    #[error("failed to parse {key}={raw:?}")]
    Unparsable { key: &'static str, raw: String },
    #[error("process-wide classifier settings are already initialised")]
    AlreadyConfigured,
}

static SETTINGS: OnceLock<ClassifierSettings> = OnceLock::new();

/// Returns the lazily initialised process-wide settings.
///
/// Invalid environment values are logged and replaced by the defaults.
pub fn settings() -> &'static ClassifierSettings {
    SETTINGS.get_or_init(env_or_default)
}

fn env_or_default() -> ClassifierSettings {
    ClassifierSettings::from_env().unwrap_or_else(|err| {
        warn!(
            target: "lie_toolbox::config",
            error = %err,
            "ignoring classifier settings from the environment"
        );
        ClassifierSettings::default()
    })
}

/// Installs the process-wide settings before anything reads them.
pub fn configure(
    settings: ClassifierSettings,
) -> Result<&'static ClassifierSettings, SettingsError> {
    SETTINGS
        .set(settings)
        .map_err(|_| SettingsError::AlreadyConfigured)?;
    Ok(self::settings())
}
