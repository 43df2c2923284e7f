#![forbid(unsafe_code)]

//! State models for the auxiliary controls: prev/next buttons and pagination
//! dots.
//!
//! Rendering is up to the host. These models are synced with every
//! notification the carousel publishes and tell the host what to draw.

use crate::config::NavigationMode;
use crate::engine::PositionEngine;
use crate::sequence::SlideSequence;

/// A navigation button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavButton {
    /// Step back.
    Prev,
    /// Step forward.
    Next,
}

/// Visibility of the prev/next buttons.
///
/// Only bounded carousels hide buttons; looped and infinite carousels can
/// always move both ways.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Navigation {
    prev_hidden: bool,
    next_hidden: bool,
}

impl Navigation {
    /// Recompute visibility for the committed `index`.
    pub fn sync(&mut self, index: usize, engine: &PositionEngine) {
        if engine.mode() == NavigationMode::Bounded {
            let visible = engine.layout().effective_slides_visible();
            self.prev_hidden = index == 0;
            self.next_hidden = index.saturating_add(visible) >= engine.sequence().len();
        } else {
            self.prev_hidden = false;
            self.next_hidden = false;
        }
    }

    /// Whether `button` should be hidden.
    #[must_use]
    pub const fn is_hidden(&self, button: NavButton) -> bool {
        match button {
            NavButton::Prev => self.prev_hidden,
            NavButton::Next => self.next_hidden,
        }
    }
}

/// Pagination dots: one page per `slides_to_scroll` real slides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    targets: Vec<usize>,
    source_len: usize,
    padding: usize,
    step: usize,
    active: Option<usize>,
}

impl Pagination {
    /// Build the page list for `sequence`, stepping by the configured
    /// slides-to-scroll.
    #[must_use]
    pub fn new(sequence: &SlideSequence, slides_to_scroll: usize) -> Self {
        let step = slides_to_scroll.max(1);
        let padding = sequence.padding();
        let targets = (0..sequence.source_len())
            .step_by(step)
            .map(|i| i + padding)
            .collect();
        Self {
            targets,
            source_len: sequence.source_len(),
            padding,
            step,
            active: None,
        }
    }

    /// Number of pages.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.targets.len()
    }

    /// Sequence index a page jumps to.
    #[must_use]
    pub fn target(&self, page: usize) -> Option<usize> {
        self.targets.get(page).copied()
    }

    /// Currently highlighted page.
    #[must_use]
    pub const fn active_page(&self) -> Option<usize> {
        self.active
    }

    /// Whether `page` is highlighted.
    #[must_use]
    pub fn is_active(&self, page: usize) -> bool {
        self.active == Some(page)
    }

    /// Highlight the page containing the committed `index`.
    ///
    /// Clone positions highlight the page of the real slide they mirror.
    pub fn sync(&mut self, index: usize) {
        if self.source_len == 0 {
            return;
        }
        let shifted = index as isize - self.padding as isize;
        let slide = shifted.rem_euclid(self.source_len as isize) as usize;
        let page = slide / self.step;
        if page < self.targets.len() {
            self.active = Some(page);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CarouselConfig;

    fn engine(config: CarouselConfig, slides: usize) -> PositionEngine {
        PositionEngine::new(&config, slides).expect("valid config")
    }

    #[test]
    fn bounded_navigation_hides_at_edges() {
        let e = engine(CarouselConfig::default().slides_visible(3), 5);
        let mut nav = Navigation::default();

        nav.sync(0, &e);
        assert!(nav.is_hidden(NavButton::Prev));
        assert!(!nav.is_hidden(NavButton::Next));

        nav.sync(1, &e);
        assert!(!nav.is_hidden(NavButton::Prev));
        assert!(!nav.is_hidden(NavButton::Next));

        nav.sync(2, &e);
        assert!(nav.is_hidden(NavButton::Next));
    }

    #[test]
    fn looped_navigation_never_hides() {
        let e = engine(CarouselConfig::default().looping(true).slides_visible(3), 5);
        let mut nav = Navigation::default();
        nav.sync(0, &e);
        assert!(!nav.is_hidden(NavButton::Prev));
        nav.sync(2, &e);
        assert!(!nav.is_hidden(NavButton::Next));
    }

    #[test]
    fn pagination_pages_step_by_scroll() {
        let seq = SlideSequence::new(7, 0);
        let pagination = Pagination::new(&seq, 3);
        assert_eq!(pagination.page_count(), 3);
        assert_eq!(pagination.target(0), Some(0));
        assert_eq!(pagination.target(1), Some(3));
        assert_eq!(pagination.target(2), Some(6));
        assert_eq!(pagination.target(3), None);
    }

    #[test]
    fn pagination_targets_skip_padding() {
        let seq = SlideSequence::new(6, 6);
        let pagination = Pagination::new(&seq, 3);
        assert_eq!(pagination.page_count(), 2);
        assert_eq!(pagination.target(0), Some(6));
        assert_eq!(pagination.target(1), Some(9));
    }

    #[test]
    fn pagination_sync_tracks_index() {
        let seq = SlideSequence::new(7, 0);
        let mut pagination = Pagination::new(&seq, 3);
        assert_eq!(pagination.active_page(), None);

        pagination.sync(4);
        assert_eq!(pagination.active_page(), Some(1));
        assert!(pagination.is_active(1));

        pagination.sync(6);
        assert_eq!(pagination.active_page(), Some(2));
    }

    #[test]
    fn pagination_clone_positions_mirror_real_pages() {
        let seq = SlideSequence::new(6, 6);
        let mut pagination = Pagination::new(&seq, 3);
        // Position 3 is a clone of real slide 3, which is on page 1.
        pagination.sync(3);
        assert_eq!(pagination.active_page(), Some(1));
        // Position 12 is a clone of real slide 0.
        pagination.sync(12);
        assert_eq!(pagination.active_page(), Some(0));
    }

    #[test]
    fn empty_pagination() {
        let seq = SlideSequence::new(0, 0);
        let mut pagination = Pagination::new(&seq, 2);
        pagination.sync(0);
        assert_eq!(pagination.page_count(), 0);
        assert_eq!(pagination.active_page(), None);
    }
}
