use super::codes::{KeyCode, ScanCode};

bitflags::bitflags! {
    /// Modifier keys held while a keyboard event was produced.
    ///
    /// `CTRL`, `SHIFT`, `ALT` and `GUI` cover both the left and right keys.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct KeyModifiers: u16 {
        const LSHIFT = 0x0001;
        const RSHIFT = 0x0002;
        /// ISO level 5 shift.
        const LEVEL5 = 0x0004;
        const LCTRL  = 0x0040;
        const RCTRL  = 0x0080;
        const LALT   = 0x0100;
        const RALT   = 0x0200;
        const LGUI   = 0x0400;
        const RGUI   = 0x0800;
        /// Num lock active (numbers on the keypad).
        const NUM    = 0x1000;
        const CAPS   = 0x2000;
        /// AltGr.
        const MODE   = 0x4000;
        const SCROLL = 0x8000;

        const CTRL  = Self::LCTRL.bits() | Self::RCTRL.bits();
        const SHIFT = Self::LSHIFT.bits() | Self::RSHIFT.bits();
        const ALT   = Self::LALT.bits() | Self::RALT.bits();
        const GUI   = Self::LGUI.bits() | Self::RGUI.bits();
    }
}

/// Key press or release.
///
/// A fresh event reports an unknown key, no modifiers, and is a non-repeated
/// key-down.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct KeyboardEvent {
    scancode: ScanCode,
    keycode: KeyCode,
    modifiers: KeyModifiers,
    down: bool,
    repeat: bool,
}

impl Default for KeyboardEvent {
    fn default() -> Self {
        Self {
            scancode: ScanCode::Unknown,
            keycode: KeyCode::Unknown,
            modifiers: KeyModifiers::empty(),
            down: true,
            repeat: false,
        }
    }
}

impl KeyboardEvent {
    pub fn new(scancode: ScanCode, keycode: KeyCode, modifiers: KeyModifiers) -> Self {
        Self {
            scancode,
            keycode,
            modifiers,
            ..Self::default()
        }
    }

    pub fn scancode(&self) -> ScanCode {
        self.scancode
    }

    pub fn set_scancode(&mut self, scancode: ScanCode) {
        self.scancode = scancode;
    }

    pub fn keycode(&self) -> KeyCode {
        self.keycode
    }

    pub fn set_keycode(&mut self, keycode: KeyCode) {
        self.keycode = keycode;
    }

    pub fn modifiers(&self) -> KeyModifiers {
        self.modifiers
    }

    pub fn set_modifiers(&mut self, modifiers: KeyModifiers) {
        self.modifiers = modifiers;
    }

    /// True when any modifier in `mask` is held.
    ///
    /// `is_modifier_set(KeyModifiers::CTRL)` therefore matches either control key.
    pub fn is_modifier_set(&self, mask: KeyModifiers) -> bool {
        self.modifiers.intersects(mask)
    }

    pub fn is_down(&self) -> bool {
        self.down
    }

    pub fn set_down(&mut self, down: bool) {
        self.down = down;
    }

    pub fn is_repeat(&self) -> bool {
        self.repeat
    }

    pub fn set_repeat(&mut self, repeat: bool) {
        self.repeat = repeat;
    }
}
