//! Layout-independent physical key identifiers
//!
//! Values are USB-HID keyboard usage ids, the same numbering SDL uses for its
//! scancodes, so tables indexed by [`Scancode`] line up with recorded SDL input.

use winit::keyboard::KeyCode;

/// Number of slots in a per-scancode table
pub const SCANCODE_COUNT: usize = 512;

/// Physical key identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Scancode(pub u16);

impl Scancode {
    pub const UNKNOWN: Self = Self(0);

    pub const A: Self = Self(4);
    pub const B: Self = Self(5);
    pub const C: Self = Self(6);
    pub const D: Self = Self(7);
    pub const E: Self = Self(8);
    pub const F: Self = Self(9);
    pub const G: Self = Self(10);
    pub const H: Self = Self(11);
    pub const I: Self = Self(12);
    pub const J: Self = Self(13);
    pub const K: Self = Self(14);
    pub const L: Self = Self(15);
    pub const M: Self = Self(16);
    pub const N: Self = Self(17);
    pub const O: Self = Self(18);
    pub const P: Self = Self(19);
    pub const Q: Self = Self(20);
    pub const R: Self = Self(21);
    pub const S: Self = Self(22);
    pub const T: Self = Self(23);
    pub const U: Self = Self(24);
    pub const V: Self = Self(25);
    pub const W: Self = Self(26);
    pub const X: Self = Self(27);
    pub const Y: Self = Self(28);
    pub const Z: Self = Self(29);

    pub const NUM_1: Self = Self(30);
    pub const NUM_2: Self = Self(31);
    pub const NUM_3: Self = Self(32);
    pub const NUM_4: Self = Self(33);
    pub const NUM_5: Self = Self(34);
    pub const NUM_6: Self = Self(35);
    pub const NUM_7: Self = Self(36);
    pub const NUM_8: Self = Self(37);
    pub const NUM_9: Self = Self(38);
    pub const NUM_0: Self = Self(39);

    pub const RETURN: Self = Self(40);
    pub const ESCAPE: Self = Self(41);
    pub const BACKSPACE: Self = Self(42);
    pub const TAB: Self = Self(43);
    pub const SPACE: Self = Self(44);
    pub const MINUS: Self = Self(45);
    pub const EQUALS: Self = Self(46);
    pub const LEFT_BRACKET: Self = Self(47);
    pub const RIGHT_BRACKET: Self = Self(48);
    pub const BACKSLASH: Self = Self(49);
    pub const SEMICOLON: Self = Self(51);
    pub const APOSTROPHE: Self = Self(52);
    pub const GRAVE: Self = Self(53);
    pub const COMMA: Self = Self(54);
    pub const PERIOD: Self = Self(55);
    pub const SLASH: Self = Self(56);
    pub const CAPS_LOCK: Self = Self(57);

    pub const F1: Self = Self(58);
    pub const F2: Self = Self(59);
    pub const F3: Self = Self(60);
    pub const F4: Self = Self(61);
    pub const F5: Self = Self(62);
    pub const F6: Self = Self(63);
    pub const F7: Self = Self(64);
    pub const F8: Self = Self(65);
    pub const F9: Self = Self(66);
    pub const F10: Self = Self(67);
    pub const F11: Self = Self(68);
    pub const F12: Self = Self(69);

    pub const PRINT_SCREEN: Self = Self(70);
    pub const SCROLL_LOCK: Self = Self(71);
    pub const PAUSE: Self = Self(72);
    pub const INSERT: Self = Self(73);
    pub const HOME: Self = Self(74);
    pub const PAGE_UP: Self = Self(75);
    pub const DELETE: Self = Self(76);
    pub const END: Self = Self(77);
    pub const PAGE_DOWN: Self = Self(78);
    pub const RIGHT: Self = Self(79);
    pub const LEFT: Self = Self(80);
    pub const DOWN: Self = Self(81);
    pub const UP: Self = Self(82);
    pub const NUM_LOCK: Self = Self(83);

    pub const LCTRL: Self = Self(224);
    pub const LSHIFT: Self = Self(225);
    pub const LALT: Self = Self(226);
    pub const LGUI: Self = Self(227);
    pub const RCTRL: Self = Self(228);
    pub const RSHIFT: Self = Self(229);
    pub const RALT: Self = Self(230);
    pub const RGUI: Self = Self(231);

    /// Slot in a per-scancode table
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn is_valid(self) -> bool {
        self.index() < SCANCODE_COUNT
    }

    /// Maps a winit physical key code onto its HID usage id
    pub fn from_key_code(code: KeyCode) -> Option<Self> {
        let scancode = match code {
            KeyCode::KeyA => Self::A,
            KeyCode::KeyB => Self::B,
            KeyCode::KeyC => Self::C,
            KeyCode::KeyD => Self::D,
            KeyCode::KeyE => Self::E,
            KeyCode::KeyF => Self::F,
            KeyCode::KeyG => Self::G,
            KeyCode::KeyH => Self::H,
            KeyCode::KeyI => Self::I,
            KeyCode::KeyJ => Self::J,
            KeyCode::KeyK => Self::K,
            KeyCode::KeyL => Self::L,
            KeyCode::KeyM => Self::M,
            KeyCode::KeyN => Self::N,
            KeyCode::KeyO => Self::O,
            KeyCode::KeyP => Self::P,
            KeyCode::KeyQ => Self::Q,
            KeyCode::KeyR => Self::R,
            KeyCode::KeyS => Self::S,
            KeyCode::KeyT => Self::T,
            KeyCode::KeyU => Self::U,
            KeyCode::KeyV => Self::V,
            KeyCode::KeyW => Self::W,
            KeyCode::KeyX => Self::X,
            KeyCode::KeyY => Self::Y,
            KeyCode::KeyZ => Self::Z,

            KeyCode::Digit1 => Self::NUM_1,
            KeyCode::Digit2 => Self::NUM_2,
            KeyCode::Digit3 => Self::NUM_3,
            KeyCode::Digit4 => Self::NUM_4,
            KeyCode::Digit5 => Self::NUM_5,
            KeyCode::Digit6 => Self::NUM_6,
            KeyCode::Digit7 => Self::NUM_7,
            KeyCode::Digit8 => Self::NUM_8,
            KeyCode::Digit9 => Self::NUM_9,
            KeyCode::Digit0 => Self::NUM_0,

            KeyCode::Enter => Self::RETURN,
            KeyCode::Escape => Self::ESCAPE,
            KeyCode::Backspace => Self::BACKSPACE,
            KeyCode::Tab => Self::TAB,
            KeyCode::Space => Self::SPACE,
            KeyCode::Minus => Self::MINUS,
            KeyCode::Equal => Self::EQUALS,
            KeyCode::BracketLeft => Self::LEFT_BRACKET,
            KeyCode::BracketRight => Self::RIGHT_BRACKET,
            KeyCode::Backslash => Self::BACKSLASH,
            KeyCode::Semicolon => Self::SEMICOLON,
            KeyCode::Quote => Self::APOSTROPHE,
            KeyCode::Backquote => Self::GRAVE,
            KeyCode::Comma => Self::COMMA,
            KeyCode::Period => Self::PERIOD,
            KeyCode::Slash => Self::SLASH,
            KeyCode::CapsLock => Self::CAPS_LOCK,

            KeyCode::F1 => Self::F1,
            KeyCode::F2 => Self::F2,
            KeyCode::F3 => Self::F3,
            KeyCode::F4 => Self::F4,
            KeyCode::F5 => Self::F5,
            KeyCode::F6 => Self::F6,
            KeyCode::F7 => Self::F7,
            KeyCode::F8 => Self::F8,
            KeyCode::F9 => Self::F9,
            KeyCode::F10 => Self::F10,
            KeyCode::F11 => Self::F11,
            KeyCode::F12 => Self::F12,

            KeyCode::PrintScreen => Self::PRINT_SCREEN,
            KeyCode::ScrollLock => Self::SCROLL_LOCK,
            KeyCode::Pause => Self::PAUSE,
            KeyCode::Insert => Self::INSERT,
            KeyCode::Home => Self::HOME,
            KeyCode::PageUp => Self::PAGE_UP,
            KeyCode::Delete => Self::DELETE,
            KeyCode::End => Self::END,
            KeyCode::PageDown => Self::PAGE_DOWN,
            KeyCode::ArrowRight => Self::RIGHT,
            KeyCode::ArrowLeft => Self::LEFT,
            KeyCode::ArrowDown => Self::DOWN,
            KeyCode::ArrowUp => Self::UP,
            KeyCode::NumLock => Self::NUM_LOCK,

            KeyCode::ControlLeft => Self::LCTRL,
            KeyCode::ShiftLeft => Self::LSHIFT,
            KeyCode::AltLeft => Self::LALT,
            KeyCode::SuperLeft => Self::LGUI,
            KeyCode::ControlRight => Self::RCTRL,
            KeyCode::ShiftRight => Self::RSHIFT,
            KeyCode::AltRight => Self::RALT,
            KeyCode::SuperRight => Self::RGUI,

            _ => return None,
        };
        Some(scancode)
    }
}
