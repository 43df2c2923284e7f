#![forbid(unsafe_code)]

//! Layout policy: effective slide counts under the responsive breakpoint.
//!
//! Every consumer asks the policy instead of testing the mobile flag itself.
//! On mobile both counts collapse to 1.

use crate::config::CarouselConfig;

/// Resolved widths for the track and its slides, as percentages.
///
/// `track_width_percent` is relative to the slider root;
/// `slide_width_percent` is relative to the track.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackLayout {
    /// Track width as a percentage of the root width.
    pub track_width_percent: f64,
    /// Width of each slide as a percentage of the track width.
    pub slide_width_percent: f64,
}

impl TrackLayout {
    /// Layout of an empty sequence.
    pub const EMPTY: Self = Self {
        track_width_percent: 0.0,
        slide_width_percent: 0.0,
    };
}

/// Configured slide counts plus the current breakpoint state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutPolicy {
    slides_visible: usize,
    slides_to_scroll: usize,
    is_mobile: bool,
}

impl LayoutPolicy {
    /// Create a desktop policy from configured counts.
    #[must_use]
    pub const fn new(slides_visible: usize, slides_to_scroll: usize) -> Self {
        Self {
            slides_visible,
            slides_to_scroll,
            is_mobile: false,
        }
    }

    /// Create a desktop policy from a config.
    #[must_use]
    pub const fn from_config(config: &CarouselConfig) -> Self {
        Self::new(config.slides_visible, config.slides_to_scroll)
    }

    /// Slides shown at once under the current breakpoint.
    #[inline]
    #[must_use]
    pub const fn effective_slides_visible(&self) -> usize {
        if self.is_mobile { 1 } else { self.slides_visible }
    }

    /// Slides advanced per step under the current breakpoint.
    #[inline]
    #[must_use]
    pub const fn effective_slides_to_scroll(&self) -> usize {
        if self.is_mobile {
            1
        } else {
            self.slides_to_scroll
        }
    }

    /// Configured slides-visible, ignoring the breakpoint.
    #[inline]
    #[must_use]
    pub const fn configured_slides_visible(&self) -> usize {
        self.slides_visible
    }

    /// Configured slides-to-scroll, ignoring the breakpoint.
    #[inline]
    #[must_use]
    pub const fn configured_slides_to_scroll(&self) -> usize {
        self.slides_to_scroll
    }

    /// Whether the mobile layout is active.
    #[inline]
    #[must_use]
    pub const fn is_mobile(&self) -> bool {
        self.is_mobile
    }

    /// Set the breakpoint state. Returns `true` if it changed.
    pub fn set_mobile(&mut self, is_mobile: bool) -> bool {
        let changed = self.is_mobile != is_mobile;
        self.is_mobile = is_mobile;
        changed
    }

    /// Track and slide widths for a sequence of `len` slides.
    #[must_use]
    pub fn track_layout(&self, len: usize) -> TrackLayout {
        let visible = self.effective_slides_visible();
        if len == 0 || visible == 0 {
            return TrackLayout::EMPTY;
        }
        let ratio = len as f64 / visible as f64;
        TrackLayout {
            track_width_percent: ratio * 100.0,
            slide_width_percent: 100.0 / visible as f64 / ratio,
        }
    }
}
