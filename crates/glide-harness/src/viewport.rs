#![forbid(unsafe_code)]

//! A [`Viewport`] that records every call the carousel makes.

use glide_carousel::{TrackLayout, Viewport};

/// One call a carousel made on its viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportCall {
    /// `set_offset_percent`.
    Offset(f64),
    /// `set_transition_enabled`.
    Transition(bool),
    /// `force_layout_flush`.
    Flush,
    /// `apply_track_layout`.
    Layout(TrackLayout),
}

/// In-memory viewport with settable widths and a call log.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingViewport {
    width: f64,
    track_width: f64,
    window_width: f64,
    offset: f64,
    transition: bool,
    layout: TrackLayout,
    calls: Vec<ViewportCall>,
}

impl RecordingViewport {
    /// A viewport whose root, track and window are all `width` pixels wide.
    #[must_use]
    pub fn new(width: f64) -> Self {
        Self {
            width,
            track_width: width,
            window_width: width,
            offset: 0.0,
            transition: true,
            layout: TrackLayout::EMPTY,
            calls: Vec::new(),
        }
    }

    /// Set the track width reported to the drag recognizer.
    #[must_use]
    pub fn with_track_width(mut self, track_width: f64) -> Self {
        self.track_width = track_width;
        self
    }

    /// Set the window width compared against the breakpoint.
    #[must_use]
    pub fn with_window_width(mut self, window_width: f64) -> Self {
        self.window_width = window_width;
        self
    }

    /// Change the root width (e.g. between gestures).
    pub fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    /// Change the window width. The carousel only notices via a resize event.
    pub fn set_window_width(&mut self, window_width: f64) {
        self.window_width = window_width;
    }

    /// Last offset written, in percent.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Whether the transition is currently enabled.
    #[must_use]
    pub fn transition_enabled(&self) -> bool {
        self.transition
    }

    /// Last track layout applied.
    #[must_use]
    pub fn layout(&self) -> TrackLayout {
        self.layout
    }

    /// Every call, in order.
    #[must_use]
    pub fn calls(&self) -> &[ViewportCall] {
        &self.calls
    }

    /// Offsets written, in order.
    #[must_use]
    pub fn offsets(&self) -> Vec<f64> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                ViewportCall::Offset(percent) => Some(*percent),
                _ => None,
            })
            .collect()
    }

    /// Forget recorded calls but keep the current state.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl Viewport for RecordingViewport {
    fn width(&self) -> f64 {
        self.width
    }

    fn track_width(&self) -> f64 {
        self.track_width
    }

    fn window_width(&self) -> f64 {
        self.window_width
    }

    fn set_offset_percent(&mut self, percent: f64) {
        self.offset = percent;
        self.calls.push(ViewportCall::Offset(percent));
    }

    fn set_transition_enabled(&mut self, enabled: bool) {
        self.transition = enabled;
        self.calls.push(ViewportCall::Transition(enabled));
    }

    fn force_layout_flush(&mut self) {
        self.calls.push(ViewportCall::Flush);
    }

    fn apply_track_layout(&mut self, layout: TrackLayout) {
        self.layout = layout;
        self.calls.push(ViewportCall::Layout(layout));
    }
}
