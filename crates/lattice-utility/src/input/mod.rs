//! Input event payloads.
//!
//! Plain data describing keyboard and mouse activity. Platform layers fill
//! these in; nothing here talks to a windowing system.

mod codes;
mod keyboard;
mod mouse;

pub use codes::{KeyCode, ScanCode, SCANCODE_MASK};
pub use keyboard::{KeyModifiers, KeyboardEvent};
pub use mouse::{MouseButton, MouseButtonEvent, MouseButtons, MouseMotionEvent, MousePosition};

/// Any input event.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    Keyboard(KeyboardEvent),
    MouseButton(MouseButtonEvent),
    MouseMotion(MouseMotionEvent),
}

impl InputEvent {
    /// Pointer position for mouse events, `None` for keyboard events.
    pub fn position(&self) -> Option<MousePosition> {
        match self {
            InputEvent::Keyboard(_) => None,
            InputEvent::MouseButton(e) => Some(e.position()),
            InputEvent::MouseMotion(e) => Some(e.position()),
        }
    }
}

impl From<KeyboardEvent> for InputEvent {
    fn from(event: KeyboardEvent) -> Self {
        InputEvent::Keyboard(event)
    }
}

impl From<MouseButtonEvent> for InputEvent {
    fn from(event: MouseButtonEvent) -> Self {
        InputEvent::MouseButton(event)
    }
}

impl From<MouseMotionEvent> for InputEvent {
    fn from(event: MouseMotionEvent) -> Self {
        InputEvent::MouseMotion(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_only_for_mouse_events() {
        let key: InputEvent = KeyboardEvent::default().into();
        assert_eq!(key.position(), None);

        let at = MousePosition::new([4.0, 2.0]);
        let motion: InputEvent = MouseMotionEvent::new(at).into();
        assert_eq!(motion.position(), Some(at));

        let button: InputEvent = MouseButtonEvent::new(at).into();
        assert_eq!(button.position(), Some(at));
    }

    #[test]
    fn from_wraps_matching_variant() {
        let e: InputEvent = MouseMotionEvent::default().into();
        assert!(matches!(e, InputEvent::MouseMotion(_)));
    }
}
