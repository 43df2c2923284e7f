#![forbid(unsafe_code)]

//! The rendering collaborator a carousel drives.
//!
//! The carousel never creates or styles elements. It reads widths and writes
//! a horizontal offset through this trait; browser glue, a terminal renderer
//! or a test recorder implements it.

use crate::layout::TrackLayout;

/// Rendering surface for a carousel track.
pub trait Viewport {
    /// Rendered width of the slider root, in pixels. The drag commit
    /// threshold is a fraction of this.
    fn width(&self) -> f64;

    /// Rendered width of the sliding track, in pixels. Drag deltas are
    /// converted to offsets against this.
    fn track_width(&self) -> f64;

    /// Width of the window, compared against the mobile breakpoint.
    ///
    /// Defaults to the root width for hosts without a separate window.
    fn window_width(&self) -> f64 {
        self.width()
    }

    /// Translate the track horizontally by `percent` of its own width.
    fn set_offset_percent(&mut self, percent: f64);

    /// Enable or disable the animated offset transition.
    fn set_transition_enabled(&mut self, enabled: bool);

    /// Commit pending style changes before the next write, so a transition
    /// toggled around an offset change takes effect. No-op by default.
    fn force_layout_flush(&mut self) {}

    /// Apply track and slide widths. No-op by default.
    fn apply_track_layout(&mut self, layout: TrackLayout) {
        let _ = layout;
    }
}

impl<V: Viewport + ?Sized> Viewport for &mut V {
    fn width(&self) -> f64 {
        (**self).width()
    }

    fn track_width(&self) -> f64 {
        (**self).track_width()
    }

    fn window_width(&self) -> f64 {
        (**self).window_width()
    }

    fn set_offset_percent(&mut self, percent: f64) {
        (**self).set_offset_percent(percent);
    }

    fn set_transition_enabled(&mut self, enabled: bool) {
        (**self).set_transition_enabled(enabled);
    }

    fn force_layout_flush(&mut self) {
        (**self).force_layout_flush();
    }

    fn apply_track_layout(&mut self, layout: TrackLayout) {
        (**self).apply_track_layout(layout);
    }
}

impl<V: Viewport + ?Sized> Viewport for Box<V> {
    fn width(&self) -> f64 {
        (**self).width()
    }

    fn track_width(&self) -> f64 {
        (**self).track_width()
    }

    fn window_width(&self) -> f64 {
        (**self).window_width()
    }

    fn set_offset_percent(&mut self, percent: f64) {
        (**self).set_offset_percent(percent);
    }

    fn set_transition_enabled(&mut self, enabled: bool) {
        (**self).set_transition_enabled(enabled);
    }

    fn force_layout_flush(&mut self) {
        (**self).force_layout_flush();
    }

    fn apply_track_layout(&mut self, layout: TrackLayout) {
        (**self).apply_track_layout(layout);
    }
}
