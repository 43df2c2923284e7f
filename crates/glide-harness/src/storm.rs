#![forbid(unsafe_code)]

//! Deterministic input storms for stress-testing carousels.
//!
//! A storm is a seeded event sequence. [`run_storm`] feeds it to a carousel,
//! checks the position invariants after every event, and emits a JSONL
//! trace:
//!
//! ```json
//! {"event":"storm_start","pattern":"mixed","event_count":500,"seed":7}
//! {"event":"storm_commit","idx":12,"from":3,"to":4}
//! {"event":"storm_complete","total_events":500,"commits":88,"violations":0}
//! ```

use glide_carousel::{Carousel, Viewport};
use glide_core::event::{Event, KeyCode, KeyEvent, PointerEvent, PointerEventKind};
use serde_json::json;

use crate::input::Script;

/// What kind of input to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StormPattern {
    /// Left/right arrow presses only.
    Keys {
        /// Number of key events.
        count: usize,
    },
    /// Complete mouse swipes of random length and direction.
    Swipes {
        /// Number of swipes.
        count: usize,
    },
    /// Window widths flapping across the breakpoint.
    Resizes {
        /// Number of resize events.
        count: usize,
    },
    /// Everything interleaved, including transition ends and cancels.
    Mixed {
        /// Number of events.
        count: usize,
    },
}

impl StormPattern {
    /// Pattern name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Keys { .. } => "keys",
            Self::Swipes { .. } => "swipes",
            Self::Resizes { .. } => "resizes",
            Self::Mixed { .. } => "mixed",
        }
    }
}

/// A generated storm.
#[derive(Debug, Clone)]
pub struct Storm {
    /// Events in order.
    pub events: Vec<Event>,
    /// Pattern name.
    pub pattern: &'static str,
    /// Seed used.
    pub seed: u64,
}

/// xorshift64; reproducible across platforms.
struct Rng {
    state: u64,
}

impl Rng {
    fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    fn below(&mut self, max: u64) -> u64 {
        if max == 0 { 0 } else { self.next() % max }
    }

    fn coin(&mut self) -> bool {
        self.next() & 1 == 1
    }
}

/// Generate a storm for `pattern` over a root `width` pixels wide.
#[must_use]
pub fn generate_storm(pattern: StormPattern, width: f64, seed: u64) -> Storm {
    let mut rng = Rng::new(seed);
    let events = match pattern {
        StormPattern::Keys { count } => (0..count).map(|_| arrow(&mut rng)).collect(),
        StormPattern::Swipes { count } => {
            let mut events = Vec::new();
            for _ in 0..count {
                swipe(&mut rng, width, &mut events);
                events.push(Event::TransitionEnd);
            }
            events
        }
        StormPattern::Resizes { count } => (0..count)
            .map(|_| Event::Resize {
                width: (rng.below(1600) + 200) as f64,
            })
            .collect(),
        StormPattern::Mixed { count } => mixed(&mut rng, width, count),
    };
    Storm {
        events,
        pattern: pattern.name(),
        seed,
    }
}

fn arrow(rng: &mut Rng) -> Event {
    let code = if rng.coin() { KeyCode::Right } else { KeyCode::Left };
    Event::Key(KeyEvent::new(code))
}

fn swipe(rng: &mut Rng, width: f64, out: &mut Vec<Event>) {
    let start = width / 2.0;
    let reach = rng.below(width.max(1.0) as u64) as f64;
    let end = if rng.coin() { start + reach } else { start - reach };
    let steps = rng.below(6) + 1;
    out.push(Event::Pointer(PointerEvent::mouse(
        PointerEventKind::Down,
        start,
        0.0,
    )));
    for i in 1..=steps {
        let x = start + (end - start) * i as f64 / steps as f64;
        out.push(Event::Pointer(PointerEvent::mouse(
            PointerEventKind::Move,
            x,
            0.0,
        )));
    }
    out.push(Event::Pointer(PointerEvent::mouse(
        PointerEventKind::Up,
        end,
        0.0,
    )));
}

fn mixed(rng: &mut Rng, width: f64, count: usize) -> Vec<Event> {
    let mut events = Vec::with_capacity(count);
    while events.len() < count {
        match rng.below(10) {
            0..=3 => events.push(arrow(rng)),
            4..=5 => swipe(rng, width, &mut events),
            6..=7 => events.push(Event::TransitionEnd),
            8 => events.push(Event::Resize {
                width: (rng.below(1600) + 200) as f64,
            }),
            _ => {
                // Abandoned gesture.
                events.push(Event::Pointer(PointerEvent::touch(
                    PointerEventKind::Down,
                    width / 2.0,
                    0.0,
                )));
                events.push(Event::Pointer(PointerEvent::touch(
                    PointerEventKind::Move,
                    width / 3.0,
                    0.0,
                )));
                events.push(Event::Focus(false));
            }
        }
    }
    events.truncate(count);
    events
}

/// Outcome of [`run_storm`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StormReport {
    /// Events fed.
    pub events_processed: usize,
    /// Events that changed the committed index.
    pub commits: usize,
    /// Events after which the index was out of range.
    pub violations: usize,
    /// JSONL trace.
    pub log_lines: Vec<String>,
}

/// Feed `storm` to `carousel`, checking that the index stays in range.
pub fn run_storm<V: Viewport>(carousel: &mut Carousel<V>, storm: &Storm) -> StormReport {
    let mut script = Script::default();
    let mut report = StormReport::default();
    report.log_lines.push(
        json!({
            "event": "storm_start",
            "pattern": storm.pattern,
            "event_count": storm.events.len(),
            "seed": storm.seed,
        })
        .to_string(),
    );

    let len = carousel.sequence().len();
    for (idx, event) in storm.events.iter().enumerate() {
        let before = carousel.current_item();
        let _ = script.send(carousel, event);
        let after = carousel.current_item();
        report.events_processed += 1;

        if len > 0 && after >= len {
            report.violations += 1;
            tracing::warn!(idx, index = after, len, "storm index out of range");
            report.log_lines.push(
                json!({"event": "storm_violation", "idx": idx, "index": after, "len": len})
                    .to_string(),
            );
        }
        if after != before {
            report.commits += 1;
            report.log_lines.push(
                json!({"event": "storm_commit", "idx": idx, "from": before, "to": after})
                    .to_string(),
            );
        }
    }

    report.log_lines.push(
        json!({
            "event": "storm_complete",
            "total_events": report.events_processed,
            "commits": report.commits,
            "violations": report.violations,
        })
        .to_string(),
    );
    report
}
