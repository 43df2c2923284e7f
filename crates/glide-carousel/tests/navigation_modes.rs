//! Navigation across the bounded, looped and infinite modes, driven through
//! the public carousel API with a recording viewport.
//!
//! Run: cargo test -p glide-carousel --test navigation_modes

use glide_carousel::{
    Carousel, CarouselConfig, ConfigError, NavButton, NavigationMode, TrackLayout,
};
use glide_harness::{ObserverLog, RecordingViewport, ViewportCall};

fn build(config: CarouselConfig, slides: usize) -> (Carousel<RecordingViewport>, ObserverLog) {
    let log = ObserverLog::new();
    let carousel = Carousel::<RecordingViewport>::builder(config)
        .on_move(log.recorder())
        .build(RecordingViewport::new(1000.0), slides)
        .expect("valid config");
    (carousel, log)
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn construction_notifies_once_with_start_index() {
    let (carousel, log) = build(CarouselConfig::default(), 4);
    assert_eq!(carousel.current_item(), 0);
    assert_eq!(log.indices(), vec![0]);
}

#[test]
fn construction_applies_track_layout() {
    let (carousel, _) = build(CarouselConfig::default().slides_visible(2), 6);
    let layout = carousel.viewport().layout();
    assert!(approx(layout.track_width_percent, 300.0));
    assert!(approx(layout.slide_width_percent, 100.0 / 6.0));
}

#[test]
fn loop_and_infinite_is_fatal() {
    let err = Carousel::new(
        RecordingViewport::new(1000.0),
        4,
        CarouselConfig::default().looping(true).infinite(true),
    )
    .unwrap_err();
    assert_eq!(err, ConfigError::LoopAndInfinite);
}

#[test]
fn oversized_infinite_padding_is_a_config_error() {
    let config = CarouselConfig::default()
        .infinite(true)
        .slides_visible(usize::MAX / 2 + 1);
    assert!(config.validate().is_ok());

    let err = Carousel::new(RecordingViewport::new(1000.0), 3, config).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::SequenceTooLong { slide_count: 3, .. }
    ));
    assert!(err.to_string().contains("overflow"));
}

#[test]
fn infinite_construction_is_instant_and_replayed_once() {
    let config = CarouselConfig::default()
        .infinite(true)
        .slides_visible(3)
        .slides_to_scroll(3);
    let (carousel, log) = build(config, 6);

    assert_eq!(carousel.mode(), NavigationMode::Infinite);
    assert_eq!(carousel.sequence().len(), 18);
    assert_eq!(carousel.current_item(), 6);
    // The initial jump happens before observers are attached.
    assert_eq!(log.indices(), vec![6]);

    let calls = carousel.viewport().calls();
    let offset_at = calls
        .iter()
        .position(|c| matches!(c, ViewportCall::Offset(_)))
        .expect("initial offset");
    assert_eq!(calls[offset_at - 1], ViewportCall::Transition(false));
    assert_eq!(calls[offset_at + 1], ViewportCall::Flush);
    assert_eq!(calls[offset_at + 2], ViewportCall::Transition(true));
    assert!(carousel.viewport().transition_enabled());
}

// ---------------------------------------------------------------------------
// Bounded
// ---------------------------------------------------------------------------

#[test]
fn bounded_walks_and_stops_at_last_window() {
    let (mut carousel, log) = build(CarouselConfig::default().slides_visible(2), 5);
    assert!(carousel.next());
    assert!(carousel.next());
    assert!(carousel.next());
    assert_eq!(carousel.current_item(), 3);
    assert!(!carousel.next(), "3 + 2 visible reaches the end");
    assert_eq!(carousel.current_item(), 3);
    assert!(approx(carousel.viewport().offset(), -60.0));
    assert_eq!(log.indices(), vec![0, 1, 2, 3]);
}

#[test]
fn bounded_rejects_before_start() {
    let (mut carousel, log) = build(CarouselConfig::default(), 3);
    assert!(!carousel.prev());
    assert!(!carousel.go_to_item(-1, true));
    assert!(!carousel.go_to_item(3, true));
    assert_eq!(log.indices(), vec![0]);
}

#[test]
fn bounded_navigation_buttons_follow_index() {
    let (mut carousel, _) = build(CarouselConfig::default().slides_visible(2), 4);
    let nav = carousel.navigation().copied().expect("navigation enabled");
    assert!(nav.is_hidden(NavButton::Prev));
    assert!(!nav.is_hidden(NavButton::Next));

    assert!(carousel.press(NavButton::Next));
    assert!(carousel.press(NavButton::Next));
    let nav = carousel.navigation().copied().expect("navigation enabled");
    assert!(!nav.is_hidden(NavButton::Prev));
    assert!(nav.is_hidden(NavButton::Next));
}

#[test]
fn navigation_model_can_be_disabled() {
    let (carousel, _) = build(CarouselConfig::default().navigation(false), 4);
    assert!(carousel.navigation().is_none());
}

// ---------------------------------------------------------------------------
// Looped
// ---------------------------------------------------------------------------

#[test]
fn looped_wraps_backwards_to_last_window() {
    let (mut carousel, _) = build(
        CarouselConfig::default().looping(true).slides_visible(2),
        5,
    );
    assert!(carousel.prev());
    assert_eq!(carousel.current_item(), 3);
}

#[test]
fn looped_wraps_forward_from_last_window() {
    let (mut carousel, _) = build(
        CarouselConfig::default().looping(true).slides_visible(2),
        5,
    );
    carousel.go_to_item(3, true);
    assert!(carousel.next());
    assert_eq!(carousel.current_item(), 0);
}

#[test]
fn looped_forward_wrap_applies_to_any_forward_request() {
    let (mut carousel, _) = build(
        CarouselConfig::default().looping(true).slides_visible(2),
        5,
    );
    carousel.go_to_item(3, true);
    // In range, but forward from the last window: wraps to 0.
    assert!(carousel.go_to_item(4, true));
    assert_eq!(carousel.current_item(), 0);
}

#[test]
fn looped_short_sequence_clamps_to_zero() {
    let (mut carousel, _) = build(
        CarouselConfig::default().looping(true).slides_visible(3),
        2,
    );
    assert!(carousel.prev());
    assert_eq!(carousel.current_item(), 0);
    assert!(carousel.next());
    assert_eq!(carousel.current_item(), 0);
}

// ---------------------------------------------------------------------------
// Infinite
// ---------------------------------------------------------------------------

fn infinite_six() -> (Carousel<RecordingViewport>, ObserverLog) {
    build(
        CarouselConfig::default()
            .infinite(true)
            .slides_visible(3)
            .slides_to_scroll(3),
        6,
    )
}

#[test]
fn infinite_backward_correction_after_transition() {
    let (mut carousel, log) = infinite_six();
    assert!(carousel.prev());
    assert_eq!(carousel.current_item(), 3);
    assert!(carousel.has_pending_correction());

    log.clear();
    carousel.viewport_mut().clear_calls();
    assert!(carousel.on_transition_end());
    assert_eq!(carousel.current_item(), 9);
    assert_eq!(log.indices(), vec![9]);
    assert_eq!(
        carousel.viewport().calls()[0],
        ViewportCall::Transition(false),
        "correction is not animated"
    );
    assert_eq!(carousel.sequence().source_index(3), carousel.sequence().source_index(9));
}

#[test]
fn infinite_forward_correction_after_transition() {
    let (mut carousel, _) = infinite_six();
    assert!(carousel.next());
    assert!(carousel.next());
    assert_eq!(carousel.current_item(), 12);
    assert!(carousel.on_transition_end());
    assert_eq!(carousel.current_item(), 6);
    assert_eq!(carousel.current_slide(), Some(0));
}

#[test]
fn infinite_correction_waits_for_transition_end() {
    let (mut carousel, _) = infinite_six();
    carousel.prev();
    // Input arriving before the transition ends is processed normally.
    assert!(carousel.prev());
    assert_eq!(carousel.current_item(), 0);
    assert!(carousel.on_transition_end());
    assert_eq!(carousel.current_item(), 6);
}

#[test]
fn infinite_transition_end_in_middle_is_noop() {
    let (mut carousel, log) = infinite_six();
    log.clear();
    assert!(!carousel.on_transition_end());
    assert_eq!(carousel.current_item(), 6);
    assert!(log.is_empty());
}

#[test]
fn non_infinite_transition_end_is_noop() {
    let (mut carousel, _) = build(CarouselConfig::default().looping(true), 3);
    carousel.prev();
    assert!(!carousel.on_transition_end());
}

// ---------------------------------------------------------------------------
// Idempotence, empty and offsets
// ---------------------------------------------------------------------------

#[test]
fn go_to_current_is_idempotent_but_notifies() {
    let (mut carousel, log) = build(CarouselConfig::default(), 4);
    carousel.next();
    let offset = carousel.viewport().offset();
    assert!(carousel.go_to_item(1, true));
    assert_eq!(carousel.current_item(), 1);
    assert_eq!(carousel.viewport().offset(), offset);
    assert_eq!(log.indices(), vec![0, 1, 1]);
}

#[test]
fn empty_carousel_rejects_everything() {
    let (mut carousel, log) = build(CarouselConfig::default().looping(true), 0);
    assert!(!carousel.next());
    assert!(!carousel.prev());
    assert!(!carousel.go_to_item(0, false));
    assert_eq!(carousel.translate_percent(0), 0.0);
    assert_eq!(carousel.viewport().layout(), TrackLayout::EMPTY);
    assert_eq!(log.indices(), vec![0]);
}

#[test]
fn offsets_follow_formula() {
    let (carousel, _) = build(CarouselConfig::default(), 8);
    for i in 0..8 {
        assert!(approx(carousel.translate_percent(i), i as f64 * -100.0 / 8.0));
    }
}

#[test]
fn pagination_tracks_commits_and_selects_pages() {
    let (mut carousel, _) = build(
        CarouselConfig::default()
            .pagination(true)
            .slides_visible(2)
            .slides_to_scroll(2),
        6,
    );
    let pages = carousel.pagination().expect("pagination enabled");
    assert_eq!(pages.page_count(), 3);
    assert_eq!(pages.active_page(), Some(0));

    assert!(carousel.select_page(2));
    assert_eq!(carousel.current_item(), 4);
    assert_eq!(carousel.pagination().and_then(|p| p.active_page()), Some(2));
    assert!(!carousel.select_page(7));
}

#[test]
fn infinite_pagination_highlights_clone_pages() {
    let (mut carousel, _) = build(
        CarouselConfig::default()
            .infinite(true)
            .pagination(true)
            .slides_visible(3)
            .slides_to_scroll(3),
        6,
    );
    carousel.prev();
    // Index 3 mirrors real slide 3, on page 1.
    assert_eq!(carousel.pagination().and_then(|p| p.active_page()), Some(1));
    carousel.on_transition_end();
    assert_eq!(carousel.pagination().and_then(|p| p.active_page()), Some(1));
}
