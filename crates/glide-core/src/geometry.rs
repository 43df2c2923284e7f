#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! Coordinates are screen pixels as reported by the host. They are `f64`
//! because browsers report fractional positions and terminal cells convert
//! losslessly.

use std::ops::Sub;

/// A position on screen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
}

impl Point {
    /// Origin point.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Displacement from `origin` to `self`.
    #[inline]
    #[must_use]
    pub fn delta_from(self, origin: Point) -> Delta {
        Delta {
            dx: self.x - origin.x,
            dy: self.y - origin.y,
        }
    }
}

impl Sub for Point {
    type Output = Delta;

    fn sub(self, rhs: Point) -> Delta {
        self.delta_from(rhs)
    }
}

/// Displacement between two points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Delta {
    /// Horizontal displacement (negative = leftward).
    pub dx: f64,
    /// Vertical displacement (negative = upward).
    pub dy: f64,
}

impl Delta {
    /// No displacement.
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    /// Create a new delta.
    #[inline]
    #[must_use]
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Whether the movement is predominantly horizontal.
    ///
    /// Ties count as vertical so a perfectly diagonal touch keeps native
    /// scrolling.
    #[inline]
    #[must_use]
    pub fn is_horizontal(self) -> bool {
        self.dx.abs() > self.dy.abs()
    }
}
