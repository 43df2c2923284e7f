#![no_main]

use arbitrary::Arbitrary;
use glide_carousel::{Carousel, CarouselConfig, TrackLayout, Viewport};
use glide_core::event::{Event, KeyCode, KeyEvent, PointerEvent, PointerEventKind};
use libfuzzer_sys::fuzz_target;
use web_time::Instant;

#[derive(Debug, Arbitrary)]
struct Input {
    slides: u8,
    visible: u8,
    scroll: u8,
    mode: u8,
    ops: Vec<Op>,
}

#[derive(Debug, Arbitrary)]
enum Op {
    Down { x: i16, touch: bool, contacts: u8 },
    Move { x: i16, y: i16 },
    Up,
    Cancel,
    Left,
    Right,
    Escape,
    Resize(u16),
    Blur,
    TransitionEnd,
    GoTo(i16),
}

struct Sink {
    width: f64,
    offset: f64,
}

impl Viewport for Sink {
    fn width(&self) -> f64 {
        self.width
    }

    fn track_width(&self) -> f64 {
        self.width * 3.0
    }

    fn set_offset_percent(&mut self, percent: f64) {
        self.offset = percent;
    }

    fn set_transition_enabled(&mut self, _enabled: bool) {}

    fn apply_track_layout(&mut self, layout: TrackLayout) {
        assert!(layout.track_width_percent.is_finite());
        assert!(layout.slide_width_percent.is_finite());
    }
}

fuzz_target!(|input: Input| {
    // 0..24 slides, 1..=6 visible and scroll.
    let slides = usize::from(input.slides % 24);
    let config = CarouselConfig::default()
        .slides_visible(usize::from(input.visible % 6) + 1)
        .slides_to_scroll(usize::from(input.scroll % 6) + 1)
        .looping(input.mode % 3 == 1)
        .infinite(input.mode % 3 == 2)
        .pagination(true);

    let sink = Sink {
        width: 1000.0,
        offset: 0.0,
    };
    let Ok(mut carousel) = Carousel::new(sink, slides, config) else {
        return;
    };
    let now = Instant::now();

    for op in input.ops.iter().take(512) {
        let event = match *op {
            Op::Down { x, touch, contacts } => {
                let kind = PointerEventKind::Down;
                let pointer = if touch {
                    PointerEvent::touch(kind, f64::from(x), 0.0).with_contacts(contacts)
                } else {
                    PointerEvent::mouse(kind, f64::from(x), 0.0)
                };
                Event::Pointer(pointer)
            }
            Op::Move { x, y } => Event::Pointer(PointerEvent::mouse(
                PointerEventKind::Move,
                f64::from(x),
                f64::from(y),
            )),
            Op::Up => Event::Pointer(PointerEvent::mouse(PointerEventKind::Up, 0.0, 0.0)),
            Op::Cancel => Event::Pointer(PointerEvent::touch(PointerEventKind::Cancel, 0.0, 0.0)),
            Op::Left => Event::Key(KeyEvent::new(KeyCode::Left)),
            Op::Right => Event::Key(KeyEvent::new(KeyCode::Right)),
            Op::Escape => Event::Key(KeyEvent::new(KeyCode::Escape)),
            Op::Resize(width) => Event::Resize {
                width: f64::from(width),
            },
            Op::Blur => Event::Focus(false),
            Op::TransitionEnd => Event::TransitionEnd,
            Op::GoTo(index) => {
                carousel.go_to_item(isize::from(index), false);
                continue;
            }
        };
        let _ = carousel.handle_event(&event, now);

        // Post-conditions that must always hold:
        let len = carousel.sequence().len();
        if len > 0 {
            assert!(carousel.current_item() < len, "index out of range");
        }
        assert!(carousel.viewport().offset.is_finite(), "non-finite offset");
        if let Some(pages) = carousel.pagination() {
            if let Some(active) = pages.active_page() {
                assert!(active < pages.page_count(), "active page out of range");
            }
        }
    }
});
