// SPDX-License-Identifier: AGPL-3.0-or-later
// © 2025 Ryo ∴ SpiralArchitect (kishkavsesvit@icloud.com)
// Part of SpiralTorch — Licensed under AGPL-3.0-or-later.
// Unauthorized derivative works or closed redistribution prohibited under AGPL §13.

//! Subscriber setup for the `lie_toolbox::*` tracing targets.

use std::io::IsTerminal;
use std::path::PathBuf;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Prefix shared by every event the classifier emits.
pub const TARGET_PREFIX: &str = "lie_toolbox";

const DEFAULT_DIRECTIVE: &str = "warn,lie_toolbox=info";

/// Subscriber settings, usually read from the environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TracingConfig {
    /// `EnvFilter` directive, e.g. `lie_toolbox::partition=trace`.
    pub filter: String,
    /// Chrome trace output file.
    pub chrome_trace: Option<PathBuf>,
    pub ansi: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_DIRECTIVE.to_string(),
            chrome_trace: None,
            ansi: false,
        }
    }
}

impl TracingConfig {
    /// `LT_LOG` wins over `RUST_LOG`; `LT_TRACE_CHROME` enables the Chrome layer.
    /// Blank values count as unset.
    pub fn from_env() -> Result<Self, InitError> {
        let filter = non_blank("LT_LOG")?
            .or(non_blank("RUST_LOG")?)
            .unwrap_or_else(|| DEFAULT_DIRECTIVE.to_string());
        Ok(Self {
            filter,
            chrome_trace: non_blank("LT_TRACE_CHROME")?.map(PathBuf::from),
            ansi: std::io::stdout().is_terminal(),
        })
    }
}

fn non_blank(key: &'static str) -> Result<Option<String>, InitError> {
    match std::env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => Ok(Some(raw.trim().to_string())),
        Ok(_) | Err(std::env::VarError::NotPresent) => Ok(None),
        Err(source) => Err(InitError::Env { key, source }),
    }
}

/// Keeps the Chrome trace writer alive; the file is flushed on drop.
#[must_use = "dropping the guard flushes and closes the Chrome trace"]
pub struct TraceGuard {
    _chrome: Option<tracing_chrome::FlushGuard>,
}

/// Installs the global subscriber from the environment.
pub fn init_tracing() -> Result<TraceGuard, InitError> {
    init_with(TracingConfig::from_env()?)
}

/// Installs the global subscriber described by `config`.
pub fn init_with(config: TracingConfig) -> Result<TraceGuard, InitError> {
    let filter = EnvFilter::try_new(&config.filter).map_err(|err| InitError::Filter {
        directive: config.filter.clone(),
        reason: err.to_string(),
    })?;
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(config.ansi);

    let (chrome_layer, guard) = match config.chrome_trace {
        Some(path) => {
            let (layer, guard) = tracing_chrome::ChromeLayerBuilder::new()
                .file(path)
                .include_args(true)
                .build();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    Registry::default()
        .with(filter)
        .with(fmt_layer)
        .with(chrome_layer)
        .try_init()
        .map_err(|_| InitError::AlreadyInitialised)?;
    Ok(TraceGuard { _chrome: guard })
}

/// Errors emitted when configuring the tracing subscriber.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("a global tracing subscriber is already installed")]
    AlreadyInitialised,
    #[error("failed to read {key}: {source}")]
    Env {
        key: &'static str,
        source: std::env::VarError,
    },
    #[error("invalid filter directive {directive:?}: {reason}")]
    Filter { directive: String, reason: String },
}
