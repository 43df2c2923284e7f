#![forbid(unsafe_code)]

//! Drag recognition: turns pointer sequences into preview offsets and a
//! single commit decision.
//!
//! [`DragRecognizer`] is a small state machine:
//!
//! ```text
//! Idle --start--> Dragging --move--> Dragging --end/cancel--> Idle
//! ```
//!
//! While dragging, every [`drag`](DragRecognizer::drag) reports the offset the
//! track should preview, expressed as a percentage of the track width captured
//! when the gesture began. On release the recognizer compares the last
//! horizontal delta against a fraction of the slider's rendered width and
//! reports a [`SwipeDecision`].
//!
//! # Invariants
//!
//! 1. At most one gesture is outstanding. A second `start` while dragging
//!    restarts the gesture from the new origin.
//! 2. The track width is sampled once per gesture; resizing mid-drag does not
//!    distort the preview.
//! 3. Multi-touch starts are ignored entirely (the recognizer stays idle).
//! 4. `drag`, `end` and `cancel` without a preceding `start` are no-ops.
//! 5. After `end`, `cancel` or `reset`, the recognizer is idle.
//!
//! # Failure Modes
//!
//! - A zero or non-finite track width yields a zero preview offset instead of
//!   an infinite one.
//! - A zero or non-finite slider width at release always snaps back.

use std::time::Duration;

use web_time::Instant;

use crate::event::{PointerEvent, PointerSource};
use crate::geometry::{Delta, Point};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Default fraction of the slider width a release must exceed to commit.
pub const DEFAULT_COMMIT_THRESHOLD: f64 = 0.2;

/// Thresholds for drag recognition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragConfig {
    /// Fraction of the slider width the horizontal delta must exceed (strictly)
    /// for a release to advance or retreat (default: 0.2).
    pub commit_threshold: f64,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            commit_threshold: DEFAULT_COMMIT_THRESHOLD,
        }
    }
}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// What a release decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeDecision {
    /// Dragged left past the threshold: go to the next slide.
    Advance,
    /// Dragged right past the threshold: go to the previous slide.
    Retreat,
    /// Below the threshold: return to the current slide.
    SnapBack,
}

/// Result of a pointer move during a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragMove {
    /// Displacement from the gesture origin.
    pub delta: Delta,
    /// Horizontal displacement as a percentage of the track width.
    pub offset_percent: f64,
    /// The host should suppress the event's native scrolling.
    ///
    /// Set for predominantly horizontal touch moves.
    pub prevent_default: bool,
}

/// Result of ending (or cancelling) a gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragRelease {
    /// The pointer never moved; there is nothing to commit.
    Stationary,
    /// The pointer moved; the track must settle according to `decision`.
    Swipe {
        /// Where the track should settle.
        decision: SwipeDecision,
        /// Last observed displacement.
        delta: Delta,
        /// Time since the gesture started. Carousels report it in their
        /// settle trace.
        duration: Duration,
    },
}

impl DragRelease {
    /// The settle decision, if the pointer moved.
    #[must_use]
    pub const fn decision(&self) -> Option<SwipeDecision> {
        match self {
            Self::Stationary => None,
            Self::Swipe { decision, .. } => Some(*decision),
        }
    }
}

// ---------------------------------------------------------------------------
// Internal state
// ---------------------------------------------------------------------------

/// Tracks the outstanding gesture.
#[derive(Debug, Clone, Copy)]
struct DragTracker {
    origin: Point,
    source: PointerSource,
    track_width: f64,
    last_delta: Option<Delta>,
    started_at: Instant,
}

// ---------------------------------------------------------------------------
// DragRecognizer
// ---------------------------------------------------------------------------

/// Stateful drag recognizer.
///
/// Feed it the pointer-down, pointer-move and pointer-up events of one
/// interaction. It never touches carousel state; callers apply the returned
/// offsets and decisions.
pub struct DragRecognizer {
    config: DragConfig,
    drag: Option<DragTracker>,
}

impl std::fmt::Debug for DragRecognizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragRecognizer")
            .field("dragging", &self.is_dragging())
            .field("moved", &self.has_moved())
            .finish()
    }
}

impl Default for DragRecognizer {
    fn default() -> Self {
        Self::new(DragConfig::default())
    }
}

impl DragRecognizer {
    /// Create a new recognizer with the given configuration.
    #[must_use]
    pub fn new(config: DragConfig) -> Self {
        Self { config, drag: None }
    }

    /// Begin a gesture at `event`'s position.
    ///
    /// `track_width` is the rendered width of the sliding track at this
    /// instant. Returns `false` (and stays idle) for multi-touch starts.
    pub fn start(&mut self, event: &PointerEvent, track_width: f64, now: Instant) -> bool {
        if event.is_multi_touch() {
            #[cfg(feature = "tracing")]
            tracing::trace!(message = "drag.ignored", contacts = event.contacts);
            return false;
        }
        self.drag = Some(DragTracker {
            origin: event.position(),
            source: event.source,
            track_width,
            last_delta: None,
            started_at: now,
        });
        #[cfg(feature = "tracing")]
        tracing::trace!(message = "drag.start", x = event.x, y = event.y, track_width);
        true
    }

    /// Track a pointer move. Returns `None` when no gesture is active.
    pub fn drag(&mut self, event: &PointerEvent) -> Option<DragMove> {
        let drag = self.drag.as_mut()?;
        let delta = event.position().delta_from(drag.origin);
        drag.last_delta = Some(delta);

        let offset_percent = if drag.track_width.is_finite() && drag.track_width > 0.0 {
            100.0 * delta.dx / drag.track_width
        } else {
            0.0
        };

        Some(DragMove {
            delta,
            offset_percent,
            prevent_default: event.is_touch() && delta.is_horizontal(),
        })
    }

    /// Finish the gesture.
    ///
    /// `slider_width` is the rendered width of the slider root, against which
    /// the commit threshold is measured. Returns `None` when no gesture was
    /// active. Gesture state is cleared unconditionally.
    pub fn end(&mut self, slider_width: f64, now: Instant) -> Option<DragRelease> {
        let drag = self.drag.take()?;
        let Some(delta) = drag.last_delta else {
            return Some(DragRelease::Stationary);
        };
        let decision = self.decide(delta, slider_width);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "drag.end",
            dx = delta.dx,
            slider_width,
            decision = ?decision
        );
        Some(DragRelease::Swipe {
            decision,
            delta,
            duration: now.saturating_duration_since(drag.started_at),
        })
    }

    /// Abort the gesture (escape, focus loss, platform cancel).
    ///
    /// A moved gesture always resolves to [`SwipeDecision::SnapBack`].
    pub fn cancel(&mut self, now: Instant) -> Option<DragRelease> {
        let drag = self.drag.take()?;
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "drag.cancel", moved = drag.last_delta.is_some());
        Some(match drag.last_delta {
            None => DragRelease::Stationary,
            Some(delta) => DragRelease::Swipe {
                decision: SwipeDecision::SnapBack,
                delta,
                duration: now.saturating_duration_since(drag.started_at),
            },
        })
    }

    /// Commit decision for a release with the given delta.
    #[must_use]
    pub fn decide(&self, delta: Delta, slider_width: f64) -> SwipeDecision {
        if !slider_width.is_finite() || slider_width <= 0.0 {
            return SwipeDecision::SnapBack;
        }
        if (delta.dx / slider_width).abs() > self.config.commit_threshold {
            if delta.dx < 0.0 {
                SwipeDecision::Advance
            } else {
                SwipeDecision::Retreat
            }
        } else {
            SwipeDecision::SnapBack
        }
    }

    /// Whether a gesture is in progress.
    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Whether the active gesture has observed at least one move.
    #[inline]
    #[must_use]
    pub fn has_moved(&self) -> bool {
        self.drag.as_ref().is_some_and(|d| d.last_delta.is_some())
    }

    /// Last observed delta of the active gesture.
    #[must_use]
    pub fn last_delta(&self) -> Option<Delta> {
        self.drag.as_ref().and_then(|d| d.last_delta)
    }

    /// Device that started the active gesture.
    #[must_use]
    pub fn source(&self) -> Option<PointerSource> {
        self.drag.as_ref().map(|d| d.source)
    }

    /// Reset to idle without reporting anything.
    pub fn reset(&mut self) {
        self.drag = None;
    }

    /// Get a reference to the current configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    /// Update the configuration.
    pub fn set_config(&mut self, config: DragConfig) {
        self.config = config;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
