#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! This module defines the event types a host feeds into a carousel. Browser
//! glue, terminal backends and test scripts all normalize their native input
//! into these values.
//!
//! # Design Notes
//!
//! - Pointer coordinates are screen pixels (`f64`); only deltas matter, so the
//!   origin is whatever the host uses.
//! - Mouse and touch share one [`PointerEvent`] type, discriminated by
//!   [`PointerSource`]. Touch events carry the number of simultaneous contacts.
//! - `KeyEventKind` defaults to `Press` when not available from the host.
//! - `Modifiers` use bitflags for easy combination.

use bitflags::bitflags;

use crate::geometry::Point;

/// Canonical input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A mouse or touch event.
    Pointer(PointerEvent),

    /// A keyboard event.
    Key(KeyEvent),

    /// The window was resized.
    Resize {
        /// New window width in pixels.
        width: f64,
    },

    /// Focus gained or lost.
    ///
    /// `true` = focus gained, `false` = focus lost.
    Focus(bool),

    /// The viewport finished its offset transition.
    TransitionEnd,
}

/// Which device produced a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointerSource {
    /// Mouse or pen.
    #[default]
    Mouse,
    /// Touch screen.
    Touch,
}

/// Phase of a pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Button pressed or finger placed.
    Down,
    /// Pointer moved.
    Move,
    /// Button released or finger lifted.
    Up,
    /// The platform aborted the interaction (e.g. `touchcancel`).
    Cancel,
}

/// A pointer event normalized to screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// The phase of the interaction.
    pub kind: PointerEventKind,

    /// Device that produced the event.
    pub source: PointerSource,

    /// Horizontal screen position.
    pub x: f64,

    /// Vertical screen position.
    pub y: f64,

    /// Number of simultaneous touch contacts (1 for mouse).
    pub contacts: u8,
}

impl PointerEvent {
    /// Create a single-contact pointer event.
    #[must_use]
    pub const fn new(kind: PointerEventKind, source: PointerSource, x: f64, y: f64) -> Self {
        Self {
            kind,
            source,
            x,
            y,
            contacts: 1,
        }
    }

    /// Create a mouse event.
    #[must_use]
    pub const fn mouse(kind: PointerEventKind, x: f64, y: f64) -> Self {
        Self::new(kind, PointerSource::Mouse, x, y)
    }

    /// Create a single-finger touch event.
    #[must_use]
    pub const fn touch(kind: PointerEventKind, x: f64, y: f64) -> Self {
        Self::new(kind, PointerSource::Touch, x, y)
    }

    /// Set the number of simultaneous contacts.
    #[must_use]
    pub const fn with_contacts(mut self, contacts: u8) -> Self {
        self.contacts = contacts;
        self
    }

    /// Screen position of the event.
    #[must_use]
    pub const fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Whether this is a touch event.
    #[must_use]
    pub const fn is_touch(&self) -> bool {
        matches!(self.source, PointerSource::Touch)
    }

    /// Whether more than one finger is on the screen.
    #[must_use]
    pub const fn is_multi_touch(&self) -> bool {
        self.is_touch() && self.contacts > 1
    }
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key code that was pressed.
    pub code: KeyCode,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,

    /// The type of key event (press, repeat, or release).
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Create a new key event with default modifiers and Press kind.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
            kind: KeyEventKind::Press,
        }
    }

    /// Create a key event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Create a key event with a specific kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Whether this is the initial press; auto-repeat and release are not.
    #[must_use]
    pub const fn is_press(&self) -> bool {
        matches!(self.kind, KeyEventKind::Press)
    }
}

/// Key codes for keyboard events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A character key.
    Char(char),
    /// Enter/Return.
    Enter,
    /// Escape.
    Escape,
    /// Tab.
    Tab,
    /// Home.
    Home,
    /// End.
    End,
    /// Page Up.
    PageUp,
    /// Page Down.
    PageDown,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
}

/// The type of key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    /// Key was pressed (default when not distinguished).
    #[default]
    Press,
    /// Key is being held (repeat event).
    Repeat,
    /// Key was released.
    Release,
}

bitflags! {
    /// Modifier keys that can be held during a key or pointer event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

#[cfg(all(feature = "crossterm", not(target_arch = "wasm32")))]
mod crossterm_compat {
    use super::{Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, PointerEvent, PointerEventKind};
    use crossterm::event as ct;

    impl Event {
        /// Convert a crossterm event into a glide event.
        ///
        /// Only the left mouse button drives drags. Events glide has no use
        /// for (paste, other buttons, scroll wheel, unmapped keys) return `None`.
        #[must_use]
        pub fn from_crossterm(event: ct::Event) -> Option<Self> {
            match event {
                ct::Event::Key(key) => KeyEvent::from_crossterm(key).map(Event::Key),
                ct::Event::Mouse(mouse) => {
                    let kind = match mouse.kind {
                        ct::MouseEventKind::Down(ct::MouseButton::Left) => PointerEventKind::Down,
                        ct::MouseEventKind::Drag(ct::MouseButton::Left) => PointerEventKind::Move,
                        ct::MouseEventKind::Up(ct::MouseButton::Left) => PointerEventKind::Up,
                        _ => return None,
                    };
                    Some(Event::Pointer(PointerEvent::mouse(
                        kind,
                        f64::from(mouse.column),
                        f64::from(mouse.row),
                    )))
                }
                ct::Event::Resize(width, _) => Some(Event::Resize {
                    width: f64::from(width),
                }),
                ct::Event::FocusGained => Some(Event::Focus(true)),
                ct::Event::FocusLost => Some(Event::Focus(false)),
                _ => None,
            }
        }
    }

    impl KeyEvent {
        /// Convert a crossterm key event, if glide has a code for it.
        #[must_use]
        pub fn from_crossterm(key: ct::KeyEvent) -> Option<Self> {
            let code = match key.code {
                ct::KeyCode::Char(c) => KeyCode::Char(c),
                ct::KeyCode::Enter => KeyCode::Enter,
                ct::KeyCode::Esc => KeyCode::Escape,
                ct::KeyCode::Tab => KeyCode::Tab,
                ct::KeyCode::Home => KeyCode::Home,
                ct::KeyCode::End => KeyCode::End,
                ct::KeyCode::PageUp => KeyCode::PageUp,
                ct::KeyCode::PageDown => KeyCode::PageDown,
                ct::KeyCode::Up => KeyCode::Up,
                ct::KeyCode::Down => KeyCode::Down,
                ct::KeyCode::Left => KeyCode::Left,
                ct::KeyCode::Right => KeyCode::Right,
                _ => return None,
            };
            let kind = match key.kind {
                ct::KeyEventKind::Press => KeyEventKind::Press,
                ct::KeyEventKind::Repeat => KeyEventKind::Repeat,
                ct::KeyEventKind::Release => KeyEventKind::Release,
            };
            Some(
                KeyEvent::new(code)
                    .with_modifiers(modifiers_from_crossterm(key.modifiers))
                    .with_kind(kind),
            )
        }
    }

    fn modifiers_from_crossterm(modifiers: ct::KeyModifiers) -> Modifiers {
        let mut out = Modifiers::NONE;
        if modifiers.contains(ct::KeyModifiers::SHIFT) {
            out |= Modifiers::SHIFT;
        }
        if modifiers.contains(ct::KeyModifiers::ALT) {
            out |= Modifiers::ALT;
        }
        if modifiers.contains(ct::KeyModifiers::CONTROL) {
            out |= Modifiers::CTRL;
        }
        if modifiers.contains(ct::KeyModifiers::SUPER) {
            out |= Modifiers::SUPER;
        }
        out
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_defaults_to_single_contact() {
        let event = PointerEvent::touch(PointerEventKind::Down, 1.0, 2.0);
        assert_eq!(event.contacts, 1);
        assert!(event.is_touch());
        assert!(!event.is_multi_touch());
    }

    #[test]
    fn multi_touch_requires_touch_source() {
        let touch = PointerEvent::touch(PointerEventKind::Down, 0.0, 0.0).with_contacts(2);
        assert!(touch.is_multi_touch());

        let mouse = PointerEvent::mouse(PointerEventKind::Down, 0.0, 0.0).with_contacts(2);
        assert!(!mouse.is_multi_touch());
    }

    #[test]
    fn pointer_position() {
        let event = PointerEvent::mouse(PointerEventKind::Move, 40.5, -3.0);
        assert_eq!(event.position(), Point::new(40.5, -3.0));
    }

    #[test]
    fn key_event_press_kind() {
        assert!(KeyEvent::new(KeyCode::Left).is_press());
        assert!(
            !KeyEvent::new(KeyCode::Left)
                .with_kind(KeyEventKind::Repeat)
                .is_press()
        );
        assert!(
            !KeyEvent::new(KeyCode::Left)
                .with_kind(KeyEventKind::Release)
                .is_press()
        );
    }

    #[test]
    fn modifiers_combine() {
        let mods = Modifiers::SHIFT | Modifiers::CTRL;
        assert!(mods.contains(Modifiers::SHIFT));
        assert!(!mods.contains(Modifiers::ALT));
        assert_eq!(Modifiers::default(), Modifiers::NONE);
    }
}
