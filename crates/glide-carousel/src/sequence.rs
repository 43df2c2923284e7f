#![forbid(unsafe_code)]

//! The slide sequence, with infinite-mode padding expressed as an index range.
//!
//! Infinite mode shows `padding` clones of the last real slides before the
//! first one and `padding` clones of the first real slides after the last.
//! The sequence does not materialize those clones: position `i` maps to real
//! slide `(i - padding) mod source_len`. Renderers still draw a duplicate at
//! each clone position; [`SlideSequence::source_index`] tells them which.
//!
//! ```text
//! source_len = 4, padding = 2
//! position:  0 1 | 2 3 4 5 | 6 7
//! source:    2 3 | 0 1 2 3 | 0 1
//! ```

use std::ops::Range;

/// A (possibly padded) run of slide positions over a set of real slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlideSequence {
    source_len: usize,
    padding: usize,
}

impl SlideSequence {
    /// Create a sequence over `source_len` real slides with `padding` clones
    /// on each end.
    ///
    /// An empty source cannot be cloned, so its padding is dropped.
    #[must_use]
    pub const fn new(source_len: usize, padding: usize) -> Self {
        Self {
            source_len,
            padding: if source_len == 0 { 0 } else { padding },
        }
    }

    /// Total positions, clones included.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.source_len + 2 * self.padding
    }

    /// Whether there are no positions at all.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of real slides.
    #[inline]
    #[must_use]
    pub const fn source_len(&self) -> usize {
        self.source_len
    }

    /// Clones on each end.
    #[inline]
    #[must_use]
    pub const fn padding(&self) -> usize {
        self.padding
    }

    /// Positions holding real (non-clone) slides.
    #[must_use]
    pub const fn real_range(&self) -> Range<usize> {
        self.padding..self.padding + self.source_len
    }

    /// Real slide shown at `position`, or `None` past the end.
    #[must_use]
    pub fn source_index(&self, position: usize) -> Option<usize> {
        if position >= self.len() {
            return None;
        }
        let source_len = self.source_len as isize;
        let shifted = position as isize - self.padding as isize;
        Some(shifted.rem_euclid(source_len) as usize)
    }

    /// Whether `position` holds a clone.
    #[must_use]
    pub fn is_clone(&self, position: usize) -> bool {
        position < self.len() && !self.real_range().contains(&position)
    }

    /// Real slide index for every position, in order.
    ///
    /// This is the list a renderer walks to lay out the track.
    pub fn source_indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len()).filter_map(|position| self.source_index(position))
    }

    /// Track offset (percent of track width) that aligns `position` with the
    /// left edge of the viewport: `position * -100 / len`.
    #[must_use]
    pub fn translate_percent(&self, position: usize) -> f64 {
        let len = self.len();
        if len == 0 {
            return 0.0;
        }
        position as f64 * -100.0 / len as f64
    }
}
