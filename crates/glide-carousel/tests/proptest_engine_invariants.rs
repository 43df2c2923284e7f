//! Property-based invariant tests for the position engine and carousel.
//!
//! These tests verify invariants that must hold for any configuration and
//! any sequence of navigation requests:
//!
//! 1. The current index stays inside the sequence whenever it is non-empty.
//! 2. Rejected requests leave the engine unchanged.
//! 3. Accepted bounded requests land exactly where they were aimed.
//! 4. Looped carousels accept every step.
//! 5. A boundary correction moves by exactly the real slide count and keeps
//!    the same real slide on screen.
//! 6. Offsets follow `index * -100 / len`.
//! 7. Every accepted move notifies observers exactly once.
//!
//! Run: cargo test -p glide-carousel --test proptest_engine_invariants

use glide_carousel::{Carousel, CarouselConfig, NavigationMode, PositionEngine};
use glide_harness::{ObserverLog, RecordingViewport};
use proptest::prelude::*;

// ── Strategies ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
enum Op {
    Next,
    Prev,
    GoTo(isize),
    TransitionEnd,
    Mobile(bool),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::Next),
        3 => Just(Op::Prev),
        2 => (-4isize..40).prop_map(Op::GoTo),
        2 => Just(Op::TransitionEnd),
        1 => any::<bool>().prop_map(Op::Mobile),
    ]
}

fn mode() -> impl Strategy<Value = NavigationMode> {
    prop_oneof![
        Just(NavigationMode::Bounded),
        Just(NavigationMode::Looped),
        Just(NavigationMode::Infinite),
    ]
}

fn config(mode: NavigationMode, visible: usize, scroll: usize) -> CarouselConfig {
    CarouselConfig::default()
        .slides_visible(visible)
        .slides_to_scroll(scroll)
        .looping(mode == NavigationMode::Looped)
        .infinite(mode == NavigationMode::Infinite)
}

fn apply(engine: &mut PositionEngine, op: Op) -> bool {
    match op {
        Op::Next => {
            let target = engine.next_target();
            engine.go_to(target).is_some()
        }
        Op::Prev => {
            let target = engine.prev_target();
            engine.go_to(target).is_some()
        }
        Op::GoTo(index) => engine.go_to(index).is_some(),
        Op::TransitionEnd => match engine.boundary_correction() {
            Some(target) => engine.go_to(target as isize).is_some(),
            None => false,
        },
        Op::Mobile(is_mobile) => {
            engine.set_mobile(is_mobile);
            false
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// 1-2. Index stays in range; rejections are no-ops
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn index_in_range_and_rejections_are_noops(
        mode in mode(),
        slides in 0usize..12,
        visible in 1usize..5,
        scroll in 1usize..5,
        ops in proptest::collection::vec(op(), 0..64),
    ) {
        let mut engine = PositionEngine::new(&config(mode, visible, scroll), slides).unwrap();
        for op in ops {
            let before = engine.clone();
            let requested = match op {
                Op::GoTo(i) => Some(i),
                Op::Next => Some(engine.next_target()),
                Op::Prev => Some(engine.prev_target()),
                _ => None,
            };
            if let Some(requested) = requested.filter(|r| engine.resolve(*r).is_none()) {
                prop_assert!(engine.go_to(requested).is_none());
                prop_assert_eq!(&engine, &before);
                continue;
            }
            apply(&mut engine, op);
            if !engine.sequence().is_empty() {
                prop_assert!(engine.current_item() < engine.sequence().len());
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// 3. Bounded requests never wrap
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn bounded_requests_land_exactly(
        slides in 1usize..12,
        visible in 1usize..5,
        requests in proptest::collection::vec(-4isize..16, 1..32),
    ) {
        let mut engine =
            PositionEngine::new(&config(NavigationMode::Bounded, visible, 1), slides).unwrap();
        for requested in requests {
            if let Some(commit) = engine.go_to(requested) {
                prop_assert_eq!(commit.to as isize, requested);
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// 4. Looped steps are always accepted
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn looped_steps_always_accepted(
        slides in 1usize..12,
        visible in 1usize..5,
        scroll in 1usize..5,
        forward in proptest::collection::vec(any::<bool>(), 1..48),
    ) {
        let mut engine =
            PositionEngine::new(&config(NavigationMode::Looped, visible, scroll), slides).unwrap();
        for step in forward {
            let target = if step { engine.next_target() } else { engine.prev_target() };
            prop_assert!(engine.go_to(target).is_some());
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// 5. Boundary corrections preserve the visible slide
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn corrections_preserve_real_slide(
        slides in 1usize..12,
        visible in 1usize..4,
        scroll in 1usize..4,
        ops in proptest::collection::vec(op(), 0..64),
    ) {
        let mut engine =
            PositionEngine::new(&config(NavigationMode::Infinite, visible, scroll), slides).unwrap();
        let start = engine.sequence().padding() as isize;
        engine.go_to(start).unwrap();

        for op in ops {
            if let Some(target) = engine.boundary_correction() {
                let from = engine.current_item();
                prop_assert_eq!(from.abs_diff(target), slides);
                prop_assert_eq!(
                    engine.sequence().source_index(from),
                    engine.sequence().source_index(target)
                );
            }
            apply(&mut engine, op);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// 6. Offset formula
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn offsets_follow_formula(
        mode in mode(),
        slides in 1usize..12,
        visible in 1usize..4,
        scroll in 1usize..4,
    ) {
        let engine = PositionEngine::new(&config(mode, visible, scroll), slides).unwrap();
        let len = engine.sequence().len();
        for i in 0..len {
            let expected = i as f64 * -100.0 / len as f64;
            prop_assert!((engine.translate_percent(i) - expected).abs() < 1e-9);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// 7. Observers see every accepted move exactly once
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn observers_see_every_commit(
        mode in mode(),
        slides in 0usize..10,
        visible in 1usize..4,
        scroll in 1usize..4,
        ops in proptest::collection::vec(op(), 0..48),
    ) {
        let log = ObserverLog::new();
        let mut carousel = Carousel::<RecordingViewport>::builder(config(mode, visible, scroll))
            .on_move(log.recorder())
            .build(RecordingViewport::new(1000.0), slides)
            .unwrap();
        log.clear();

        let mut expected = Vec::new();
        for op in ops {
            let accepted = match op {
                Op::Next => carousel.next(),
                Op::Prev => carousel.prev(),
                Op::GoTo(i) => carousel.go_to_item(i, true),
                Op::TransitionEnd => carousel.on_transition_end(),
                // Flips replay the current index too.
                Op::Mobile(is_mobile) => carousel.on_resize(if is_mobile { 400.0 } else { 1200.0 }),
            };
            if accepted {
                expected.push(carousel.current_item());
            }
        }
        prop_assert_eq!(log.indices(), expected);
    }
}
