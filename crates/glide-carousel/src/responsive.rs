#![forbid(unsafe_code)]

//! Responsive monitor: watches the window width against a fixed breakpoint.

/// Default breakpoint in pixels; narrower windows use the mobile layout.
pub const DEFAULT_MOBILE_BREAKPOINT: f64 = 800.0;

/// Tracks which side of the breakpoint the window is on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponsiveMonitor {
    breakpoint: f64,
    is_mobile: bool,
}

impl Default for ResponsiveMonitor {
    fn default() -> Self {
        Self::new(DEFAULT_MOBILE_BREAKPOINT)
    }
}

impl ResponsiveMonitor {
    /// Create a monitor that starts on the desktop side.
    #[must_use]
    pub const fn new(breakpoint: f64) -> Self {
        Self {
            breakpoint,
            is_mobile: false,
        }
    }

    /// Record a window width. Returns the new mobile flag if it flipped.
    pub fn observe(&mut self, window_width: f64) -> Option<bool> {
        let mobile = window_width < self.breakpoint;
        if mobile == self.is_mobile {
            return None;
        }
        self.is_mobile = mobile;
        Some(mobile)
    }

    /// Whether the last observed width was below the breakpoint.
    #[inline]
    #[must_use]
    pub const fn is_mobile(&self) -> bool {
        self.is_mobile
    }

    /// Breakpoint in pixels.
    #[inline]
    #[must_use]
    pub const fn breakpoint(&self) -> f64 {
        self.breakpoint
    }
}
