#![forbid(unsafe_code)]

//! Carousel state: position engine, navigation modes, layout policy and
//! move observers.
//!
//! # Role in glide
//! `glide-carousel` owns every piece of committed carousel state. It consumes
//! [`glide_core::event::Event`] values, asks the drag recognizer what a
//! gesture means, and drives a host-provided [`Viewport`].
//!
//! # Primary responsibilities
//! - **PositionEngine**: the current index and the bounded, looped and
//!   infinite boundary rules.
//! - **SlideSequence**: clone padding for infinite mode and the index to
//!   offset formula.
//! - **LayoutPolicy** / **ResponsiveMonitor**: desktop vs. mobile slide counts
//!   and the breakpoint that switches them.
//! - **NotificationRegistry**: ordered move observers.
//! - **Navigation** / **Pagination**: state for the optional controls.
//! - **Carousel**: the orchestrator tying these to a viewport.
//!
//! # Example
//!
//! ```
//! use glide_carousel::{Carousel, CarouselConfig, Viewport};
//!
//! struct Track { offset: f64 }
//!
//! impl Viewport for Track {
//!     fn width(&self) -> f64 { 1024.0 }
//!     fn track_width(&self) -> f64 { 4096.0 }
//!     fn set_offset_percent(&mut self, percent: f64) { self.offset = percent; }
//!     fn set_transition_enabled(&mut self, _enabled: bool) {}
//! }
//!
//! let mut carousel = Carousel::new(Track { offset: 0.0 }, 4, CarouselConfig::default())?;
//! carousel.next();
//! assert_eq!(carousel.current_item(), 1);
//! assert_eq!(carousel.viewport().offset, -25.0);
//! # Ok::<(), glide_carousel::ConfigError>(())
//! ```

pub mod carousel;
pub mod config;
pub mod controls;
pub mod engine;
pub mod layout;
pub mod notify;
pub mod responsive;
pub mod sequence;
pub mod viewport;

pub use carousel::{Carousel, CarouselBuilder, EventResponse};
pub use config::{CarouselConfig, ConfigError, ConfigWarning, NavigationMode};
pub use controls::{NavButton, Navigation, Pagination};
pub use engine::{Commit, PositionEngine};
pub use layout::{LayoutPolicy, TrackLayout};
pub use notify::{MoveCallback, NotificationRegistry, ObserverId};
pub use responsive::{DEFAULT_MOBILE_BREAKPOINT, ResponsiveMonitor};
pub use sequence::SlideSequence;
pub use viewport::Viewport;
