#![forbid(unsafe_code)]

//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! Library code only emits events; installing a subscriber is left to the
//! application. With the `tracing-json` feature this module provides
//! [`init_logging`] for hosts that do not bring their own.
//!
//! # Log Levels
//!
//! - `warn`: configuration warnings (e.g. not enough slides for infinite padding)
//! - `debug`: committed and rejected moves, breakpoint flips, gesture decisions
//! - `trace`: per-event drag bookkeeping
//!
//! # Usage
//!
//! ```ignore
//! use glide_core::logging::{init_logging, LogConfig, LogFormat};
//!
//! init_logging(&LogConfig::default().format(LogFormat::Json))?;
//! ```

use std::fmt;

#[cfg(feature = "tracing")]
pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

/// Minimum level emitted when `RUST_LOG` is unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LogLevel {
    /// Errors only.
    Error,
    /// Warnings and errors.
    #[default]
    Warn,
    /// Informational messages.
    Info,
    /// Debug detail.
    Debug,
    /// Everything.
    Trace,
}

impl LogLevel {
    /// Directive string understood by `EnvFilter`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LogFormat {
    /// Human-readable multi-line output.
    Pretty,
    /// Single-line output.
    #[default]
    Compact,
    /// One JSON object per line.
    Json,
}

/// Subscriber configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Fallback level when `RUST_LOG` is unset or invalid.
    pub level: LogLevel,
    /// Output format.
    pub format: LogFormat,
    /// Include the event target (module path).
    pub with_target: bool,
    /// Use ANSI colors.
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            format: LogFormat::default(),
            with_target: true,
            with_ansi: true,
        }
    }
}

impl LogConfig {
    /// Set the fallback level.
    #[must_use]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set the output format.
    #[must_use]
    pub fn format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Toggle ANSI colors.
    #[must_use]
    pub fn ansi(mut self, with_ansi: bool) -> Self {
        self.with_ansi = with_ansi;
        self
    }
}

/// Failure to install the global subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggingError {
    /// A global subscriber is already installed.
    AlreadyInitialized(String),
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyInitialized(detail) => {
                write!(f, "logging already initialized: {detail}")
            }
        }
    }
}

impl std::error::Error for LoggingError {}

/// Install a global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over [`LogConfig::level`].
#[cfg(feature = "tracing-json")]
pub fn init_logging(config: &LogConfig) -> Result<(), LoggingError> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format {
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_target(config.with_target)
                    .with_ansi(config.with_ansi),
            )
            .try_init(),
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(config.with_target)
                    .with_ansi(config.with_ansi),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_target(config.with_target))
            .try_init(),
    };

    result.map_err(|err| LoggingError::AlreadyInitialized(err.to_string()))
}
