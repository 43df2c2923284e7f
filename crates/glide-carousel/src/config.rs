#![forbid(unsafe_code)]

//! Carousel configuration, validation, and diagnostics.
//!
//! [`CarouselConfig`] is immutable once a carousel is built. Validation
//! resolves it into a [`NavigationMode`]; contradictory or degenerate options
//! are a [`ConfigError`], while recoverable oddities are reported as
//! [`ConfigWarning`]s and the carousel proceeds.
//!
//! With the `serde` feature the config deserializes from the camelCase option
//! record hosts already use:
//!
//! ```json
//! { "slidesVisible": 3, "slidesToScroll": 1, "loop": true, "pagination": true }
//! ```

use std::fmt;

use glide_core::gesture::DEFAULT_COMMIT_THRESHOLD;

use crate::responsive::DEFAULT_MOBILE_BREAKPOINT;

/// How the position engine treats requests past either end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NavigationMode {
    /// Requests past either end are rejected.
    #[default]
    Bounded,
    /// Requests past either end wrap to the opposite end.
    Looped,
    /// The sequence is padded with clones and silently re-centred after each
    /// transition, so the user never reaches an end.
    Infinite,
}

/// Carousel options.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct CarouselConfig {
    /// Slides advanced per navigation step (≥ 1).
    pub slides_to_scroll: usize,
    /// Slides shown at once (≥ 1).
    pub slides_visible: usize,
    /// Wrap around at either end. Exclusive with `infinite`.
    #[cfg_attr(feature = "serde", serde(rename = "loop"))]
    pub looping: bool,
    /// Clone boundary slides for seamless wraparound. Exclusive with `looping`.
    pub infinite: bool,
    /// Maintain a pagination model (one page per scroll step).
    pub pagination: bool,
    /// Maintain a prev/next button model.
    pub navigation: bool,
    /// Window widths strictly below this many pixels use the mobile layout.
    pub mobile_breakpoint: f64,
    /// Fraction of the slider width a drag must exceed to change slides.
    pub commit_threshold: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            slides_to_scroll: 1,
            slides_visible: 1,
            looping: false,
            infinite: false,
            pagination: false,
            navigation: true,
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
            commit_threshold: DEFAULT_COMMIT_THRESHOLD,
        }
    }
}

impl CarouselConfig {
    /// Set slides advanced per step.
    #[must_use]
    pub fn slides_to_scroll(mut self, n: usize) -> Self {
        self.slides_to_scroll = n;
        self
    }

    /// Set slides shown at once.
    #[must_use]
    pub fn slides_visible(mut self, n: usize) -> Self {
        self.slides_visible = n;
        self
    }

    /// Enable or disable looping.
    #[must_use]
    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Enable or disable infinite (cloned) wraparound.
    #[must_use]
    pub fn infinite(mut self, infinite: bool) -> Self {
        self.infinite = infinite;
        self
    }

    /// Enable or disable the pagination model.
    #[must_use]
    pub fn pagination(mut self, pagination: bool) -> Self {
        self.pagination = pagination;
        self
    }

    /// Enable or disable the navigation button model.
    #[must_use]
    pub fn navigation(mut self, navigation: bool) -> Self {
        self.navigation = navigation;
        self
    }

    /// Set the mobile breakpoint in pixels.
    #[must_use]
    pub fn mobile_breakpoint(mut self, px: f64) -> Self {
        self.mobile_breakpoint = px;
        self
    }

    /// Set the drag commit threshold (fraction of slider width).
    #[must_use]
    pub fn commit_threshold(mut self, fraction: f64) -> Self {
        self.commit_threshold = fraction;
        self
    }

    /// Check the options and resolve the navigation mode.
    pub fn validate(&self) -> Result<NavigationMode, ConfigError> {
        if self.looping && self.infinite {
            return Err(ConfigError::LoopAndInfinite);
        }
        if self.slides_to_scroll == 0 {
            return Err(ConfigError::ZeroSlidesToScroll);
        }
        if self.slides_visible == 0 {
            return Err(ConfigError::ZeroSlidesVisible);
        }
        if !self.mobile_breakpoint.is_finite() || self.mobile_breakpoint < 0.0 {
            return Err(ConfigError::InvalidBreakpoint {
                value: self.mobile_breakpoint,
            });
        }
        if !self.commit_threshold.is_finite() || self.commit_threshold < 0.0 {
            return Err(ConfigError::InvalidCommitThreshold {
                value: self.commit_threshold,
            });
        }
        Ok(if self.looping {
            NavigationMode::Looped
        } else if self.infinite {
            NavigationMode::Infinite
        } else {
            NavigationMode::Bounded
        })
    }

    /// Clones added on each end of the sequence: `slides_visible +
    /// slides_to_scroll` in infinite mode, 0 otherwise.
    ///
    /// Uses the configured values; the mobile layout does not change padding.
    #[must_use]
    pub fn offset_padding(&self) -> usize {
        if self.infinite {
            self.slides_visible.saturating_add(self.slides_to_scroll)
        } else {
            0
        }
    }
}

/// Fatal configuration problems. No carousel state is created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// `looping` and `infinite` were both set.
    LoopAndInfinite,
    /// `slides_to_scroll` was 0.
    ZeroSlidesToScroll,
    /// `slides_visible` was 0.
    ZeroSlidesVisible,
    /// The mobile breakpoint was negative or not finite.
    InvalidBreakpoint {
        /// Offending value.
        value: f64,
    },
    /// The commit threshold was negative or not finite.
    InvalidCommitThreshold {
        /// Offending value.
        value: f64,
    },
    /// The padded sequence (`slide_count + 2 * padding`) does not fit an
    /// `isize` index.
    SequenceTooLong {
        /// Real slides.
        slide_count: usize,
        /// Clones per side.
        padding: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoopAndInfinite => write!(f, "a carousel cannot be both looped and infinite"),
            Self::ZeroSlidesToScroll => write!(f, "slides_to_scroll must be at least 1"),
            Self::ZeroSlidesVisible => write!(f, "slides_visible must be at least 1"),
            Self::InvalidBreakpoint { value } => {
                write!(f, "mobile breakpoint must be a finite, non-negative width (got {value})")
            }
            Self::InvalidCommitThreshold { value } => {
                write!(f, "commit threshold must be a finite, non-negative fraction (got {value})")
            }
            Self::SequenceTooLong {
                slide_count,
                padding,
            } => write!(
                f,
                "{slide_count} slides padded by {padding} per side overflow the index range"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Recoverable configuration problems, reported and then tolerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigWarning {
    /// Infinite padding needs more slides than exist; wrapped content will
    /// repeat or overlap.
    InsufficientSlides {
        /// Clones required on each end.
        padding: usize,
        /// Real slides available.
        available: usize,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientSlides { padding, available } => write!(
                f,
                "infinite mode pads {padding} slides per side but only {available} are available"
            ),
        }
    }
}
