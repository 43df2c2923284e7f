#![forbid(unsafe_code)]

//! The carousel: wires the position engine, drag recognizer, responsive
//! monitor, controls and observers to a [`Viewport`].
//!
//! # Event flow
//!
//! ```text
//! resize ──► ResponsiveMonitor ──► LayoutPolicy ──► track layout + replay
//! pointer ─► DragRecognizer ─────► preview offset ─► commit on release
//! keys ────► next()/prev()
//! commit ──► PositionEngine ─────► Viewport offset ─► controls ─► observers
//! transition end ──► boundary correction (infinite mode only)
//! ```
//!
//! Every committed change goes through [`Carousel::go_to_item`]. The drag
//! recognizer only previews offsets; on release it asks for `next`, `prev` or
//! a snap back to the current item.
//!
//! # Deferred correction
//!
//! Infinite carousels re-centre their index from the clone zone onto the real
//! slides. That jump must be invisible, so it is not done when the move is
//! committed but when the host reports the end of the visual transition
//! ([`Carousel::on_transition_end`]). Input arriving before that signal is
//! processed normally.

use glide_core::event::{Event, KeyCode, KeyEvent, PointerEvent, PointerEventKind};
use glide_core::gesture::{DragConfig, DragRecognizer, DragRelease, SwipeDecision};
use tracing::{debug, warn};
use web_time::Instant;

use crate::config::{CarouselConfig, ConfigError, ConfigWarning, NavigationMode};
use crate::controls::{NavButton, Navigation, Pagination};
use crate::engine::PositionEngine;
use crate::layout::{LayoutPolicy, TrackLayout};
use crate::notify::{NotificationRegistry, ObserverId};
use crate::responsive::ResponsiveMonitor;
use crate::sequence::SlideSequence;
use crate::viewport::Viewport;

/// What the carousel did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventResponse {
    /// The carousel acted on the event.
    pub consumed: bool,
    /// The host should suppress the event's native default (scrolling).
    pub prevent_default: bool,
}

impl EventResponse {
    /// The event was not for the carousel.
    pub const IGNORED: Self = Self {
        consumed: false,
        prevent_default: false,
    };

    /// The carousel acted on the event.
    pub const CONSUMED: Self = Self {
        consumed: true,
        prevent_default: false,
    };

    const fn consumed_if(consumed: bool) -> Self {
        Self {
            consumed,
            prevent_default: false,
        }
    }
}

/// Builder that lets observers see the construction-time notification.
#[derive(Debug)]
pub struct CarouselBuilder {
    config: CarouselConfig,
    observers: NotificationRegistry,
}

impl CarouselBuilder {
    /// Start building with `config`.
    #[must_use]
    pub fn new(config: CarouselConfig) -> Self {
        Self {
            config,
            observers: NotificationRegistry::new(),
        }
    }

    /// Register an observer before the carousel exists.
    #[must_use]
    pub fn on_move(mut self, callback: impl FnMut(usize) + 'static) -> Self {
        self.observers.register(callback);
        self
    }

    /// Build a carousel over `slide_count` real slides.
    ///
    /// Fails without touching `viewport` if the config is invalid. Logs and
    /// records a [`ConfigWarning`] if infinite padding exceeds the slides.
    pub fn build<V: Viewport>(
        self,
        viewport: V,
        slide_count: usize,
    ) -> Result<Carousel<V>, ConfigError> {
        let config = self.config;
        let engine = PositionEngine::new(&config, slide_count)?;

        let mut warnings = Vec::new();
        let padding = config.offset_padding();
        if engine.mode() == NavigationMode::Infinite && padding > slide_count {
            let warning = ConfigWarning::InsufficientSlides {
                padding,
                available: slide_count,
            };
            warn!(
                message = "carousel.config.warning",
                padding,
                available = slide_count,
                detail = %warning
            );
            warnings.push(warning);
        }

        let mut carousel = Carousel {
            viewport,
            config,
            engine,
            observers: NotificationRegistry::new(),
            recognizer: DragRecognizer::new(DragConfig {
                commit_threshold: config.commit_threshold,
            }),
            monitor: ResponsiveMonitor::new(config.mobile_breakpoint),
            navigation: None,
            pagination: None,
            warnings,
        };

        if carousel.engine.mode() == NavigationMode::Infinite {
            let start = carousel.engine.sequence().padding();
            carousel.go_to_item(isize::try_from(start).unwrap_or(isize::MAX), false);
        }
        carousel.apply_layout();

        if config.navigation {
            carousel.navigation = Some(Navigation::default());
        }
        if config.pagination {
            carousel.pagination = Some(Pagination::new(
                carousel.engine.sequence(),
                config.slides_to_scroll,
            ));
        }
        carousel.observers = self.observers;

        carousel.publish(carousel.engine.current_item());
        let window_width = carousel.viewport.window_width();
        carousel.on_resize(window_width);

        debug!(
            message = "carousel.build",
            slides = slide_count,
            len = carousel.engine.sequence().len(),
            mode = ?carousel.engine.mode(),
            current = carousel.engine.current_item()
        );
        Ok(carousel)
    }
}

/// A horizontally sliding carousel.
pub struct Carousel<V: Viewport> {
    viewport: V,
    config: CarouselConfig,
    engine: PositionEngine,
    observers: NotificationRegistry,
    recognizer: DragRecognizer,
    monitor: ResponsiveMonitor,
    navigation: Option<Navigation>,
    pagination: Option<Pagination>,
    warnings: Vec<ConfigWarning>,
}

impl<V: Viewport> std::fmt::Debug for Carousel<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Carousel")
            .field("mode", &self.engine.mode())
            .field("current", &self.engine.current_item())
            .field("len", &self.engine.sequence().len())
            .field("mobile", &self.engine.layout().is_mobile())
            .field("dragging", &self.recognizer.is_dragging())
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl<V: Viewport> Carousel<V> {
    /// Build a carousel over `slide_count` real slides.
    pub fn new(
        viewport: V,
        slide_count: usize,
        config: CarouselConfig,
    ) -> Result<Self, ConfigError> {
        CarouselBuilder::new(config).build(viewport, slide_count)
    }

    /// Start a builder.
    #[must_use]
    pub fn builder(config: CarouselConfig) -> CarouselBuilder {
        CarouselBuilder::new(config)
    }

    // -----------------------------------------------------------------------
    // Navigation
    // -----------------------------------------------------------------------

    /// Move to `index` under the mode's boundary rules.
    ///
    /// On acceptance the viewport offset is set (with the transition
    /// suppressed around the write when `animate` is false), the index is
    /// committed, and controls and observers are notified before returning.
    /// Rejected requests change nothing and return `false`.
    pub fn go_to_item(&mut self, index: isize, animate: bool) -> bool {
        let Some(commit) = self.engine.go_to(index) else {
            debug!(
                message = "carousel.reject",
                requested = index,
                current = self.engine.current_item()
            );
            return false;
        };

        if !animate {
            self.viewport.set_transition_enabled(false);
        }
        self.viewport.set_offset_percent(commit.offset_percent);
        self.viewport.force_layout_flush();
        if !animate {
            self.viewport.set_transition_enabled(true);
        }

        debug!(
            message = "carousel.commit",
            from = commit.from,
            to = commit.to,
            animate
        );
        self.publish(commit.to);
        true
    }

    /// Step forward by the effective slides-to-scroll.
    pub fn next(&mut self) -> bool {
        let target = self.engine.next_target();
        self.go_to_item(target, true)
    }

    /// Step back by the effective slides-to-scroll.
    pub fn prev(&mut self) -> bool {
        let target = self.engine.prev_target();
        self.go_to_item(target, true)
    }

    /// Re-apply the current index (animated). Observers are notified again.
    pub fn snap_back(&mut self) -> bool {
        let current = self.current_index_isize();
        self.go_to_item(current, true)
    }

    /// Preview an offset without committing. Used while dragging.
    pub fn set_offset(&mut self, percent: f64) {
        self.viewport.set_offset_percent(percent);
    }

    /// Offset that aligns `index` with the viewport's left edge.
    #[must_use]
    pub fn translate_percent(&self, index: usize) -> f64 {
        self.engine.translate_percent(index)
    }

    /// Activate a navigation button.
    pub fn press(&mut self, button: NavButton) -> bool {
        match button {
            NavButton::Next => self.next(),
            NavButton::Prev => self.prev(),
        }
    }

    /// Go to a pagination page. Out-of-range pages are ignored.
    pub fn select_page(&mut self, page: usize) -> bool {
        let Some(target) = self.pagination.as_ref().and_then(|p| p.target(page)) else {
            return false;
        };
        self.go_to_item(isize::try_from(target).unwrap_or(isize::MAX), true)
    }

    /// Register an observer. It is called on every commit and breakpoint
    /// flip from now on.
    pub fn on_move(&mut self, callback: impl FnMut(usize) + 'static) -> ObserverId {
        self.observers.register(callback)
    }

    // -----------------------------------------------------------------------
    // Input
    // -----------------------------------------------------------------------

    /// Route any input event.
    pub fn handle_event(&mut self, event: &Event, now: Instant) -> EventResponse {
        match event {
            Event::Pointer(pointer) => match pointer.kind {
                PointerEventKind::Down => self.pointer_down(pointer, now),
                PointerEventKind::Move => self.pointer_move(pointer),
                PointerEventKind::Up => self.pointer_up(now),
                PointerEventKind::Cancel => self.cancel_gesture(now),
            },
            Event::Key(key) => self.handle_key(key, now),
            Event::Resize { width } => EventResponse::consumed_if(self.on_resize(*width)),
            Event::Focus(false) => self.cancel_gesture(now),
            Event::Focus(true) => EventResponse::IGNORED,
            Event::TransitionEnd => EventResponse::consumed_if(self.on_transition_end()),
        }
    }

    /// Begin a drag. Multi-touch starts are ignored.
    pub fn pointer_down(&mut self, event: &PointerEvent, now: Instant) -> EventResponse {
        let track_width = self.viewport.track_width();
        if !self.recognizer.start(event, track_width, now) {
            return EventResponse::IGNORED;
        }
        self.viewport.set_transition_enabled(false);
        EventResponse::CONSUMED
    }

    /// Preview the drag offset.
    pub fn pointer_move(&mut self, event: &PointerEvent) -> EventResponse {
        let Some(drag) = self.recognizer.drag(event) else {
            return EventResponse::IGNORED;
        };
        let base = self.engine.translate_percent(self.engine.current_item());
        self.set_offset(base + drag.offset_percent);
        EventResponse {
            consumed: true,
            prevent_default: drag.prevent_default,
        }
    }

    /// Finish a drag and commit its decision.
    pub fn pointer_up(&mut self, now: Instant) -> EventResponse {
        let slider_width = self.viewport.width();
        let Some(release) = self.recognizer.end(slider_width, now) else {
            return EventResponse::IGNORED;
        };
        self.viewport.set_transition_enabled(true);
        if let DragRelease::Swipe {
            decision,
            delta,
            duration,
        } = release
        {
            debug!(
                message = "carousel.drag.settle",
                decision = ?decision,
                dx = delta.dx,
                duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
            );
            self.settle(decision);
        }
        EventResponse::CONSUMED
    }

    /// Abort a drag and snap back to the current item.
    pub fn cancel_gesture(&mut self, now: Instant) -> EventResponse {
        let Some(release) = self.recognizer.cancel(now) else {
            return EventResponse::IGNORED;
        };
        self.viewport.set_transition_enabled(true);
        if release.decision().is_some() {
            self.snap_back();
        }
        EventResponse::CONSUMED
    }

    fn handle_key(&mut self, key: &KeyEvent, now: Instant) -> EventResponse {
        // One step per physical press; held keys would outrun infinite resets.
        if !key.is_press() {
            return EventResponse::IGNORED;
        }
        match key.code {
            KeyCode::Right => EventResponse::consumed_if(self.next()),
            KeyCode::Left => EventResponse::consumed_if(self.prev()),
            KeyCode::Escape if self.recognizer.is_dragging() => self.cancel_gesture(now),
            _ => EventResponse::IGNORED,
        }
    }

    fn settle(&mut self, decision: SwipeDecision) {
        let moved = match decision {
            SwipeDecision::Advance => self.next(),
            SwipeDecision::Retreat => self.prev(),
            SwipeDecision::SnapBack => {
                self.snap_back();
                return;
            }
        };
        // The track was left at the preview offset; restore it if the step
        // was rejected at an edge.
        if !moved {
            self.snap_back();
        }
    }

    // -----------------------------------------------------------------------
    // Layout
    // -----------------------------------------------------------------------

    /// Record a new window width. On a breakpoint flip the layout policy is
    /// switched, the track layout re-applied, and observers replayed with the
    /// current index. Returns `true` on a flip.
    pub fn on_resize(&mut self, window_width: f64) -> bool {
        let Some(is_mobile) = self.monitor.observe(window_width) else {
            return false;
        };
        self.engine.set_mobile(is_mobile);
        debug!(
            message = "carousel.breakpoint",
            mobile = is_mobile,
            window_width
        );
        self.apply_layout();
        self.publish(self.engine.current_item());
        true
    }

    /// The host's transition-completion signal. In infinite mode this runs
    /// the deferred boundary correction. Returns `true` if the index jumped.
    pub fn on_transition_end(&mut self) -> bool {
        let Some(target) = self.engine.boundary_correction() else {
            return false;
        };
        debug!(
            message = "carousel.infinite.reset",
            from = self.engine.current_item(),
            to = target
        );
        self.go_to_item(isize::try_from(target).unwrap_or(isize::MAX), false)
    }

    /// Whether the next transition end will re-centre the index.
    #[must_use]
    pub fn has_pending_correction(&self) -> bool {
        self.engine.boundary_correction().is_some()
    }

    fn apply_layout(&mut self) {
        let layout = self.track_layout();
        self.viewport.apply_track_layout(layout);
    }

    fn publish(&mut self, index: usize) {
        if let Some(navigation) = self.navigation.as_mut() {
            navigation.sync(index, &self.engine);
        }
        if let Some(pagination) = self.pagination.as_mut() {
            pagination.sync(index);
        }
        self.observers.notify(index);
    }

    fn current_index_isize(&self) -> isize {
        isize::try_from(self.engine.current_item()).unwrap_or(isize::MAX)
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Current committed index into the (padded) sequence.
    #[must_use]
    pub fn current_item(&self) -> usize {
        self.engine.current_item()
    }

    /// Real slide at the current index.
    #[must_use]
    pub fn current_slide(&self) -> Option<usize> {
        self.engine
            .sequence()
            .source_index(self.engine.current_item())
    }

    /// Navigation mode.
    #[must_use]
    pub fn mode(&self) -> NavigationMode {
        self.engine.mode()
    }

    /// Options the carousel was built with.
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// The position engine.
    #[must_use]
    pub fn engine(&self) -> &PositionEngine {
        &self.engine
    }

    /// The slide sequence.
    #[must_use]
    pub fn sequence(&self) -> &SlideSequence {
        self.engine.sequence()
    }

    /// The layout policy.
    #[must_use]
    pub fn layout(&self) -> &LayoutPolicy {
        self.engine.layout()
    }

    /// Track layout for the current breakpoint.
    #[must_use]
    pub fn track_layout(&self) -> TrackLayout {
        self.engine
            .layout()
            .track_layout(self.engine.sequence().len())
    }

    /// Whether the mobile layout is active.
    #[must_use]
    pub fn is_mobile(&self) -> bool {
        self.engine.layout().is_mobile()
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.recognizer.is_dragging()
    }

    /// Navigation button model, if enabled.
    #[must_use]
    pub fn navigation(&self) -> Option<&Navigation> {
        self.navigation.as_ref()
    }

    /// Pagination model, if enabled.
    #[must_use]
    pub fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }

    /// Configuration warnings raised at construction.
    #[must_use]
    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }

    /// Number of registered observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// The viewport.
    #[must_use]
    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    /// The viewport, mutably (e.g. to update its measured widths).
    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    /// Consume the carousel and return its viewport.
    pub fn into_viewport(self) -> V {
        self.viewport
    }
}
