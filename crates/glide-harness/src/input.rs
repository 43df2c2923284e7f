#![forbid(unsafe_code)]

//! Input builders and a scripted driver.
//!
//! [`Script`] feeds events to a carousel with a synthetic clock, so gesture
//! durations are deterministic.

use std::time::Duration;

use glide_carousel::{Carousel, EventResponse, Viewport};
use glide_core::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, PointerEvent, PointerEventKind,
};
use web_time::Instant;

/// Mouse button press at `x`.
#[must_use]
pub fn mouse_down(x: f64) -> Event {
    Event::Pointer(PointerEvent::mouse(PointerEventKind::Down, x, 0.0))
}

/// Mouse move to `x`.
#[must_use]
pub fn mouse_move(x: f64) -> Event {
    Event::Pointer(PointerEvent::mouse(PointerEventKind::Move, x, 0.0))
}

/// Mouse button release at `x`.
#[must_use]
pub fn mouse_up(x: f64) -> Event {
    Event::Pointer(PointerEvent::mouse(PointerEventKind::Up, x, 0.0))
}

/// Single-finger touch start at `(x, y)`.
#[must_use]
pub fn touch_start(x: f64, y: f64) -> Event {
    Event::Pointer(PointerEvent::touch(PointerEventKind::Down, x, y))
}

/// Single-finger touch move to `(x, y)`.
#[must_use]
pub fn touch_move(x: f64, y: f64) -> Event {
    Event::Pointer(PointerEvent::touch(PointerEventKind::Move, x, y))
}

/// Touch end at `(x, y)`.
#[must_use]
pub fn touch_end(x: f64, y: f64) -> Event {
    Event::Pointer(PointerEvent::touch(PointerEventKind::Up, x, y))
}

/// Platform touch cancel.
#[must_use]
pub fn touch_cancel() -> Event {
    Event::Pointer(PointerEvent::touch(PointerEventKind::Cancel, 0.0, 0.0))
}

/// Key press.
#[must_use]
pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code))
}

/// Key release.
#[must_use]
pub fn key_release(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code).with_kind(KeyEventKind::Release))
}

/// Auto-repeat of a held key.
#[must_use]
pub fn key_repeat(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code).with_kind(KeyEventKind::Repeat))
}

/// Window resize.
#[must_use]
pub fn resize(width: f64) -> Event {
    Event::Resize { width }
}

/// A mouse drag from `from` to `to` in `steps` moves, released at `to`.
#[must_use]
pub fn mouse_swipe(from: f64, to: f64, steps: usize) -> Vec<Event> {
    let mut events = Vec::with_capacity(steps + 2);
    events.push(mouse_down(from));
    events.extend(interpolate(from, to, steps).map(mouse_move));
    events.push(mouse_up(to));
    events
}

/// A horizontal touch swipe from `from` to `to` in `steps` moves.
#[must_use]
pub fn touch_swipe(from: f64, to: f64, steps: usize) -> Vec<Event> {
    let mut events = Vec::with_capacity(steps + 2);
    events.push(touch_start(from, 0.0));
    events.extend(interpolate(from, to, steps).map(|x| touch_move(x, 0.0)));
    events.push(touch_end(to, 0.0));
    events
}

fn interpolate(from: f64, to: f64, steps: usize) -> impl Iterator<Item = f64> {
    let steps = steps.max(1);
    (1..=steps).map(move |i| from + (to - from) * i as f64 / steps as f64)
}

/// Drives a carousel with a synthetic clock.
#[derive(Debug)]
pub struct Script {
    now: Instant,
    tick: Duration,
}

impl Default for Script {
    fn default() -> Self {
        Self::new(Duration::from_millis(16))
    }
}

impl Script {
    /// A script advancing the clock by `tick` per event.
    #[must_use]
    pub fn new(tick: Duration) -> Self {
        Self {
            now: Instant::now(),
            tick,
        }
    }

    /// Current synthetic time.
    #[must_use]
    pub fn now(&self) -> Instant {
        self.now
    }

    /// Feed one event.
    pub fn send<V: Viewport>(&mut self, carousel: &mut Carousel<V>, event: &Event) -> EventResponse {
        let response = carousel.handle_event(event, self.now);
        self.now += self.tick;
        response
    }

    /// Feed a sequence of events and collect the responses.
    pub fn run<V: Viewport>(
        &mut self,
        carousel: &mut Carousel<V>,
        events: &[Event],
    ) -> Vec<EventResponse> {
        events.iter().map(|e| self.send(carousel, e)).collect()
    }
}
