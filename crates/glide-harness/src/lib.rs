#![forbid(unsafe_code)]

//! Test harness for glide carousels.
//!
//! - [`RecordingViewport`]: a viewport that logs every offset, transition
//!   toggle, flush and layout write.
//! - [`ObserverLog`]: a shared log for move observers.
//! - [`input`]: event builders and a [`Script`] driver with a synthetic clock.
//! - [`storm`]: seeded input storms with invariant checking and JSONL traces.
//!
//! # Example
//!
//! ```
//! use glide_carousel::{Carousel, CarouselConfig};
//! use glide_harness::{ObserverLog, RecordingViewport, Script, input};
//!
//! let log = ObserverLog::new();
//! let mut carousel = Carousel::<RecordingViewport>::builder(CarouselConfig::default())
//!     .on_move(log.recorder())
//!     .build(RecordingViewport::new(1000.0), 4)?;
//!
//! Script::default().run(&mut carousel, &input::mouse_swipe(600.0, 300.0, 3));
//! assert_eq!(carousel.current_item(), 1);
//! assert_eq!(log.indices(), vec![0, 1]);
//! # Ok::<(), glide_carousel::ConfigError>(())
//! ```

pub mod input;
pub mod observer;
pub mod storm;
pub mod viewport;

pub use input::Script;
pub use observer::ObserverLog;
pub use storm::{Storm, StormPattern, StormReport, generate_storm, run_storm};
pub use viewport::{RecordingViewport, ViewportCall};
