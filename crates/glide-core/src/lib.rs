// Forbid unsafe in production; deny in tests.
#![cfg_attr(not(test), forbid(unsafe_code))]
#![cfg_attr(test, deny(unsafe_code))]

//! Core: normalized input events, geometry, and drag recognition.
//!
//! # Role in glide
//! `glide-core` is the input layer. It owns the canonical event types that a
//! host (browser glue, a terminal backend, a test script) produces, and the
//! drag recognizer that turns pointer sequences into preview offsets and a
//! single commit decision.
//!
//! # Primary responsibilities
//! - **Event**: pointer (mouse/touch), key, resize, focus and transition-end events.
//! - **Geometry**: points and deltas in screen pixels.
//! - **DragRecognizer**: Idle → Dragging → Idle state machine with a
//!   width-relative commit threshold.
//! - **Logging**: tracing re-exports and subscriber setup (feature-gated).
//!
//! # How it fits in the system
//! `glide-carousel` consumes `glide-core::Event` values and owns all committed
//! state. Nothing in this crate mutates carousel state; the recognizer only
//! reports what the gesture means.

pub mod event;
pub mod geometry;
pub mod gesture;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
