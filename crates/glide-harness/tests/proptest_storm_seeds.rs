//! Property-based checks over storm seeds.
//!
//! For any seed, pattern and configuration:
//!
//! 1. The committed index never leaves the sequence.
//! 2. Every generated event is fed.
//! 3. The JSONL summary agrees with the returned report.
//!
//! Run: cargo test -p glide-harness --test proptest_storm_seeds

use glide_carousel::{Carousel, CarouselConfig};
use glide_harness::{RecordingViewport, StormPattern, generate_storm, run_storm};
use proptest::prelude::*;

fn pattern() -> impl Strategy<Value = StormPattern> {
    prop_oneof![
        (1usize..120).prop_map(|count| StormPattern::Keys { count }),
        (1usize..30).prop_map(|count| StormPattern::Swipes { count }),
        (1usize..40).prop_map(|count| StormPattern::Resizes { count }),
        (1usize..160).prop_map(|count| StormPattern::Mixed { count }),
    ]
}

fn config() -> impl Strategy<Value = CarouselConfig> {
    (0u8..3, 1usize..5, 1usize..5).prop_map(|(mode, visible, scroll)| {
        CarouselConfig::default()
            .slides_visible(visible)
            .slides_to_scroll(scroll)
            .looping(mode == 1)
            .infinite(mode == 2)
            .pagination(true)
    })
}

proptest! {
    #[test]
    fn storms_never_violate(
        seed in any::<u64>(),
        pattern in pattern(),
        config in config(),
        slides in 0usize..12,
        width in 200.0f64..2000.0,
    ) {
        let viewport = RecordingViewport::new(width).with_track_width(width * 3.0);
        let mut carousel = Carousel::new(viewport, slides, config).expect("valid config");
        let storm = generate_storm(pattern, width, seed);
        let report = run_storm(&mut carousel, &storm);

        prop_assert_eq!(report.violations, 0);
        prop_assert_eq!(report.events_processed, storm.events.len());

        let last: serde_json::Value =
            serde_json::from_str(report.log_lines.last().expect("summary line")).expect("json");
        prop_assert_eq!(last["event"].as_str(), Some("storm_complete"));
        prop_assert_eq!(last["commits"].as_u64(), Some(report.commits as u64));
        prop_assert_eq!(last["total_events"].as_u64(), Some(report.events_processed as u64));
    }
}
