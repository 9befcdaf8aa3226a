use std::fmt;

use lattice_core::Vector;

/// Pointer position in window coordinates.
pub type MousePosition = Vector<f32, 2>;

/// Mouse button identifier.
///
/// Discriminants are the platform button numbers and double as bit
/// positions in [`MouseButtons`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum MouseButton {
    Left = 1,
    Middle = 2,
    Right = 3,
    X1 = 4,
    X2 = 5,
}

impl MouseButton {
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            1 => Some(Self::Left),
            2 => Some(Self::Middle),
            3 => Some(Self::Right),
            4 => Some(Self::X1),
            5 => Some(Self::X2),
            _ => None,
        }
    }

    pub const fn raw(self) -> u8 {
        self as u8
    }

    /// Single-bit mask of this button.
    pub const fn mask(self) -> MouseButtons {
        MouseButtons::from_bits_retain(1 << self.raw())
    }
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

bitflags::bitflags! {
    /// Set of pressed mouse buttons.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MouseButtons: u8 {
        const LEFT   = 1 << 1;
        const MIDDLE = 1 << 2;
        const RIGHT  = 1 << 3;
        const X1     = 1 << 4;
        const X2     = 1 << 5;
    }
}

/// Mouse button press or release.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct MouseButtonEvent {
    position: MousePosition,
    buttons: MouseButtons,
}

impl MouseButtonEvent {
    pub fn new(position: MousePosition) -> Self {
        Self {
            position,
            buttons: MouseButtons::empty(),
        }
    }

    pub fn position(&self) -> MousePosition {
        self.position
    }

    pub fn set_position(&mut self, position: MousePosition) {
        self.position = position;
    }

    pub fn buttons(&self) -> MouseButtons {
        self.buttons
    }

    pub fn set_button_state(&mut self, button: MouseButton, pressed: bool) {
        self.buttons.set(button.mask(), pressed);
    }

    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons.contains(button.mask())
    }
}

/// Pointer movement.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct MouseMotionEvent {
    position: MousePosition,
}

impl MouseMotionEvent {
    pub fn new(position: MousePosition) -> Self {
        Self { position }
    }

    pub fn position(&self) -> MousePosition {
        self.position
    }

    pub fn set_position(&mut self, position: MousePosition) {
        self.position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── MouseButton ───────────────────────────────────────────────────────

    #[test]
    fn button_masks_match_named_flags() {
        assert_eq!(MouseButton::Left.mask(), MouseButtons::LEFT);
        assert_eq!(MouseButton::Middle.mask(), MouseButtons::MIDDLE);
        assert_eq!(MouseButton::Right.mask(), MouseButtons::RIGHT);
        assert_eq!(MouseButton::X1.mask(), MouseButtons::X1);
        assert_eq!(MouseButton::X2.mask(), MouseButtons::X2);
    }

    #[test]
    fn button_from_raw() {
        assert_eq!(MouseButton::from_raw(3), Some(MouseButton::Right));
        assert_eq!(MouseButton::from_raw(0), None);
        assert_eq!(MouseButton::from_raw(6), None);
        assert_eq!(MouseButton::X2.raw(), 5);
    }

    // ── MouseButtonEvent ──────────────────────────────────────────────────

    #[test]
    fn default_event_has_no_buttons_at_origin() {
        let e = MouseButtonEvent::default();
        assert_eq!(e.position(), MousePosition::new([0.0, 0.0]));
        assert!(e.buttons().is_empty());
        assert!(!e.is_button_pressed(MouseButton::Left));
    }

    #[test]
    fn button_state_toggles_independently() {
        let mut e = MouseButtonEvent::new(MousePosition::new([10.0, 20.0]));
        e.set_button_state(MouseButton::Left, true);
        e.set_button_state(MouseButton::X1, true);

        assert!(e.is_button_pressed(MouseButton::Left));
        assert!(e.is_button_pressed(MouseButton::X1));
        assert!(!e.is_button_pressed(MouseButton::Right));

        e.set_button_state(MouseButton::Left, false);
        assert!(!e.is_button_pressed(MouseButton::Left));
        assert!(e.is_button_pressed(MouseButton::X1));
        assert_eq!(e.buttons(), MouseButtons::X1);
    }

    #[test]
    fn button_event_position_setter() {
        let mut e = MouseButtonEvent::default();
        e.set_position(MousePosition::new([3.5, -1.0]));
        assert_eq!(e.position().x(), 3.5);
        assert_eq!(e.position().y(), -1.0);
    }

    // ── MouseMotionEvent ──────────────────────────────────────────────────

    #[test]
    fn motion_event_position() {
        let mut e = MouseMotionEvent::default();
        assert_eq!(e.position(), MousePosition::zero());
        e.set_position(MousePosition::new([640.0, 480.0]));
        assert_eq!(e.position(), MousePosition::new([640.0, 480.0]));
    }
}
