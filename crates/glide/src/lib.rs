#![forbid(unsafe_code)]

//! Glide public facade crate.
//!
//! This crate provides the stable surface area for users. It re-exports the
//! common types from the internal crates and offers a small prelude.
//!
//! ```
//! use glide::prelude::*;
//!
//! struct Track;
//!
//! impl Viewport for Track {
//!     fn width(&self) -> f64 { 1280.0 }
//!     fn track_width(&self) -> f64 { 3840.0 }
//!     fn set_offset_percent(&mut self, _percent: f64) {}
//!     fn set_transition_enabled(&mut self, _enabled: bool) {}
//! }
//!
//! fn main() -> glide::Result<()> {
//!     let config = CarouselConfig::default().looping(true);
//!     let mut carousel = Carousel::new(Track, 3, config)?;
//!     carousel.prev();
//!     assert_eq!(carousel.current_item(), 2);
//!     Ok(())
//! }
//! ```

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use glide_core::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, PointerEvent, PointerEventKind,
    PointerSource,
};
pub use glide_core::geometry::{Delta, Point};
pub use glide_core::gesture::{DragConfig, DragRecognizer, DragRelease, SwipeDecision};
pub use glide_core::logging::{LogConfig, LogFormat, LogLevel, LoggingError};

#[cfg(feature = "logging")]
pub use glide_core::logging::init_logging;

/// Monotonic clock used to time gestures. Works on wasm32 as well.
pub use web_time::Instant;

// --- Carousel re-exports ---------------------------------------------------

pub use glide_carousel::{
    Carousel, CarouselBuilder, CarouselConfig, ConfigError, ConfigWarning, EventResponse,
    LayoutPolicy, NavButton, Navigation, NavigationMode, ObserverId, Pagination, PositionEngine,
    SlideSequence, TrackLayout, Viewport,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for glide apps.
#[derive(Debug)]
pub enum Error {
    /// The carousel options were rejected.
    Config(ConfigError),
    /// The logging subscriber could not be installed.
    Logging(LoggingError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid carousel config: {err}"),
            Self::Logging(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Logging(err) => Some(err),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<LoggingError> for Error {
    fn from(err: LoggingError) -> Self {
        Self::Logging(err)
    }
}

/// Standard result type for glide APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Carousel, CarouselConfig, Error, Event, EventResponse, Instant, KeyCode, NavButton,
        NavigationMode, PointerEvent, PointerEventKind, Result, Viewport,
    };

    pub use crate::{carousel, core};
}

pub use glide_carousel as carousel;
pub use glide_core as core;
