//! Platform event model consumed by the input tracker

use enum_map::Enum;

use super::scancode::Scancode;
use crate::geometry::FPoint;

/// A single queued platform event
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Milliseconds since the event source started
    pub timestamp: u32,
    pub kind: EventKind,
}

impl Event {
    pub fn new(timestamp: u32, kind: EventKind) -> Self {
        Self { timestamp, kind }
    }

    pub fn event_type(&self) -> EventType {
        self.kind.event_type()
    }
}

/// Payload of an [`Event`]
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    /// The user asked the application to close
    Quit,

    /// Pointer moved; `xrel`/`yrel` are relative to the previous motion event
    MouseMotion { x: i32, y: i32, xrel: i32, yrel: i32 },

    MouseButtonDown {
        button: MouseButton,
        x: i32,
        y: i32,
        clicks: u8,
    },

    MouseButtonUp {
        button: MouseButton,
        x: i32,
        y: i32,
        clicks: u8,
    },

    /// Wheel delta, in lines for notched wheels and pixels for touchpads
    MouseWheel { delta: FPoint },

    KeyDown {
        scancode: Scancode,
        /// Generated by key auto-repeat rather than a physical press
        repeat: bool,
        modifiers: Modifiers,
    },

    KeyUp {
        scancode: Scancode,
        modifiers: Modifiers,
    },

    /// Text produced by a key press, after layout and IME processing
    TextInput { text: String },

    Window(WindowChange),
}

impl EventKind {
    pub fn event_type(&self) -> EventType {
        match self {
            Self::Quit => EventType::Quit,
            Self::MouseMotion { .. } => EventType::MouseMotion,
            Self::MouseButtonDown { .. } => EventType::MouseButtonDown,
            Self::MouseButtonUp { .. } => EventType::MouseButtonUp,
            Self::MouseWheel { .. } => EventType::MouseWheel,
            Self::KeyDown { .. } => EventType::KeyDown,
            Self::KeyUp { .. } => EventType::KeyUp,
            Self::TextInput { .. } => EventType::TextInput,
            Self::Window(_) => EventType::Window,
        }
    }
}

/// Discriminant of [`EventKind`], used to index per-type tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
pub enum EventType {
    Quit,
    MouseMotion,
    MouseButtonDown,
    MouseButtonUp,
    MouseWheel,
    KeyDown,
    KeyUp,
    TextInput,
    Window,
}

/// Window state changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowChange {
    Resized { width: u32, height: u32 },
    FocusGained,
    FocusLost,
}

/// Mouse button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    /// First extra button (usually "back")
    X1,
    /// Second extra button (usually "forward")
    X2,
}

impl MouseButton {
    pub const ALL: [MouseButton; 5] = [Self::Left, Self::Middle, Self::Right, Self::X1, Self::X2];

    /// Table index in `0..=4`
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Keyboard modifiers held when a key event was generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_matches_kind() {
        let event = Event::new(
            12,
            EventKind::KeyDown {
                scancode: Scancode::A,
                repeat: false,
                modifiers: Modifiers::NONE,
            },
        );
        assert_eq!(event.event_type(), EventType::KeyDown);
        assert_eq!(EventKind::Quit.event_type(), EventType::Quit);
        assert_eq!(
            EventKind::Window(WindowChange::FocusLost).event_type(),
            EventType::Window
        );
    }

    #[test]
    fn test_mouse_button_indices() {
        for (i, button) in MouseButton::ALL.iter().enumerate() {
            assert_eq!(button.index(), i);
            assert_eq!(MouseButton::from_index(i), Some(*button));
        }
        assert_eq!(MouseButton::from_index(5), None);
    }

    #[test]
    fn test_modifiers_any() {
        assert!(!Modifiers::NONE.any());
        assert!(
            Modifiers {
                ctrl: true,
                ..Modifiers::default()
            }
            .any()
        );
    }
}
