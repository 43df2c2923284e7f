#![forbid(unsafe_code)]

//! Slide position engine: the authoritative current index and the boundary
//! rules of each [`NavigationMode`].
//!
//! The engine is pure state. It decides whether a request is accepted and
//! where it lands; [`crate::Carousel`] applies the resulting offset to the
//! viewport and notifies observers.
//!
//! # Boundary rules
//!
//! Let `len` be the sequence length, `cur` the current index and `vis` the
//! effective slides-visible.
//!
//! | Request                                   | Bounded | Looped        | Infinite |
//! |-------------------------------------------|---------|---------------|----------|
//! | `< 0`                                     | reject  | `len - vis`   | reject   |
//! | `≥ len`, or forward with `cur + vis ≥ len` | reject  | `0`           | reject   |
//! | otherwise                                 | accept  | accept        | accept   |
//!
//! Infinite mode never reaches the reject rows in steady state because
//! [`PositionEngine::boundary_correction`] re-centres the index after every
//! transition.
//!
//! # Invariants
//!
//! 1. `current_item < sequence.len()` whenever the sequence is non-empty.
//! 2. Rejected requests leave all state untouched.
//! 3. A boundary correction moves by exactly `source_len` positions and lands
//!    on a position showing the same real slide.

use crate::config::{CarouselConfig, ConfigError, NavigationMode};
use crate::layout::LayoutPolicy;
use crate::sequence::SlideSequence;

/// An accepted move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Commit {
    /// Index before the move.
    pub from: usize,
    /// Index after the move.
    pub to: usize,
    /// Track offset for `to`, in percent of the track width.
    pub offset_percent: f64,
}

/// Owns the current index, the slide sequence and the layout policy.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionEngine {
    mode: NavigationMode,
    sequence: SlideSequence,
    layout: LayoutPolicy,
    current: usize,
}

impl PositionEngine {
    /// Validate `config` and create an engine over `slide_count` real slides.
    ///
    /// The engine starts at index 0; infinite carousels are moved onto the
    /// first real slide by their owner.
    pub fn new(config: &CarouselConfig, slide_count: usize) -> Result<Self, ConfigError> {
        let mode = config.validate()?;
        let padding = config.offset_padding();
        if slide_count > 0 && padded_len(slide_count, padding).is_none() {
            return Err(ConfigError::SequenceTooLong {
                slide_count,
                padding,
            });
        }
        Ok(Self {
            mode,
            sequence: SlideSequence::new(slide_count, padding),
            layout: LayoutPolicy::from_config(config),
            current: 0,
        })
    }

    /// Navigation mode selected at construction.
    #[inline]
    #[must_use]
    pub const fn mode(&self) -> NavigationMode {
        self.mode
    }

    /// Current (committed) index into the padded sequence.
    #[inline]
    #[must_use]
    pub const fn current_item(&self) -> usize {
        self.current
    }

    /// The slide sequence.
    #[inline]
    #[must_use]
    pub const fn sequence(&self) -> &SlideSequence {
        &self.sequence
    }

    /// The layout policy.
    #[inline]
    #[must_use]
    pub const fn layout(&self) -> &LayoutPolicy {
        &self.layout
    }

    /// Switch the layout policy between desktop and mobile.
    ///
    /// Returns `true` if the flag changed.
    pub fn set_mobile(&mut self, is_mobile: bool) -> bool {
        self.layout.set_mobile(is_mobile)
    }

    /// Offset that aligns `index` with the viewport's left edge.
    #[inline]
    #[must_use]
    pub fn translate_percent(&self, index: usize) -> f64 {
        self.sequence.translate_percent(index)
    }

    /// Apply the mode's boundary rules to a requested index.
    ///
    /// Returns the index the request lands on, or `None` if it is rejected.
    #[must_use]
    pub fn resolve(&self, requested: isize) -> Option<usize> {
        let len = self.sequence.len();
        if len == 0 {
            return None;
        }
        let looping = self.mode == NavigationMode::Looped;
        let visible = self.layout.effective_slides_visible();

        let Ok(requested) = usize::try_from(requested) else {
            return looping.then(|| len.saturating_sub(visible));
        };

        let window_exhausted = self.current.saturating_add(visible) >= len;
        if requested >= len || (window_exhausted && requested > self.current) {
            return looping.then_some(0);
        }
        Some(requested)
    }

    /// Resolve and commit a requested index.
    pub fn go_to(&mut self, requested: isize) -> Option<Commit> {
        let to = self.resolve(requested)?;
        let from = self.current;
        self.current = to;
        Some(Commit {
            from,
            to,
            offset_percent: self.translate_percent(to),
        })
    }

    /// Requested index for one step forward.
    #[must_use]
    pub fn next_target(&self) -> isize {
        to_isize(self.current).saturating_add(to_isize(self.layout.effective_slides_to_scroll()))
    }

    /// Requested index for one step back.
    #[must_use]
    pub fn prev_target(&self) -> isize {
        to_isize(self.current).saturating_sub(to_isize(self.layout.effective_slides_to_scroll()))
    }

    /// Whether the last fully visible window has been reached.
    #[must_use]
    pub fn at_last_window(&self) -> bool {
        self.current.saturating_add(self.layout.effective_slides_visible()) >= self.sequence.len()
    }

    /// The index an infinite carousel should jump to once its transition
    /// finishes, if the current index sits in the clone zone.
    ///
    /// Near the start (`current ≤ slides_to_scroll`) it jumps forward by
    /// `source_len`; near the end (`current ≥ len - padding`) it jumps back by
    /// the same amount. Always `None` outside infinite mode.
    #[must_use]
    pub fn boundary_correction(&self) -> Option<usize> {
        if self.mode != NavigationMode::Infinite {
            return None;
        }
        let source_len = self.sequence.source_len();
        if source_len == 0 {
            return None;
        }
        let len = self.sequence.len();
        let padding = self.sequence.padding();
        if self.current <= self.layout.configured_slides_to_scroll() {
            Some(self.current + source_len)
        } else if self.current >= len - padding {
            Some(self.current - source_len)
        } else {
            None
        }
    }
}

fn padded_len(slide_count: usize, padding: usize) -> Option<usize> {
    padding
        .checked_mul(2)
        .and_then(|clones| clones.checked_add(slide_count))
        .filter(|&len| isize::try_from(len).is_ok())
}

fn to_isize(n: usize) -> isize {
    isize::try_from(n).unwrap_or(isize::MAX)
}
