//! Frame-local input state aggregated from the event queue

use std::fmt;

use enum_map::EnumMap;
use tracing::{debug, trace, warn};

use super::callback::{Callback, CallbackId};
use super::events::{Event, EventKind, EventType, MouseButton};
use super::scancode::{SCANCODE_COUNT, Scancode};
use super::source::EventSource;
use super::state::ButtonRecord;
use crate::config::InputConfig;
use crate::geometry::Point;

/// Per-frame input state and event fan-out
///
/// Call [`Input::update`] once per frame. It drains the event source, then
/// the query methods describe that frame:
/// - `*_down` / `*_up`: the edge happened during the last update
/// - `*_pressed`: currently held, regardless of when it went down
/// - `*_down_time` / `*_up_time`: timestamp of the latest press/release
pub struct Input {
    typed_callbacks: EnumMap<EventType, Callback<Event>>,
    callbacks: Callback<Event>,
    mouse: Point,
    buttons: EnumMap<MouseButton, ButtonRecord>,
    keys: Box<[ButtonRecord]>,
    last_event_time: EnumMap<EventType, u32>,
    running: bool,
}

impl Input {
    pub fn new() -> Self {
        Self {
            typed_callbacks: EnumMap::default(),
            callbacks: Callback::new(),
            mouse: Point::ZERO,
            buttons: EnumMap::default(),
            keys: vec![ButtonRecord::default(); SCANCODE_COUNT].into_boxed_slice(),
            last_event_time: EnumMap::default(),
            running: true,
        }
    }

    pub fn from_config(config: &InputConfig) -> Self {
        let mut input = Self::new();
        input.mouse = config.initial_mouse;
        input
    }

    /// Drains `source` and updates all state tables
    ///
    /// Transient edge flags are cleared before the first event is read.
    /// Each event then updates state and is handed to the callbacks
    /// registered for its type, followed by the catch-all callbacks.
    /// Returns the number of events processed.
    pub fn update<S: EventSource + ?Sized>(&mut self, source: &mut S) -> usize {
        for record in self.buttons.values_mut() {
            record.begin_frame();
        }
        for record in self.keys.iter_mut() {
            record.begin_frame();
        }

        let mut processed = 0;
        while let Some(event) = source.poll_event() {
            self.dispatch(&event);
            processed += 1;
        }

        if processed > 0 {
            debug!(
                processed,
                mouse = %self.mouse,
                running = self.running,
                "Input updated"
            );
        }
        processed
    }

    fn dispatch(&mut self, event: &Event) {
        trace!(?event, "Dispatching event");
        let timestamp = event.timestamp;

        match &event.kind {
            EventKind::Quit => {
                debug!(timestamp, "Quit requested");
                self.running = false;
            }
            // Sum of relative motion; absolute x/y are not used
            EventKind::MouseMotion { xrel, yrel, .. } => {
                self.mouse += Point::new(*xrel, *yrel);
            }
            EventKind::MouseButtonDown { button, .. } => self.buttons[*button].press(timestamp),
            EventKind::MouseButtonUp { button, .. } => self.buttons[*button].release(timestamp),
            EventKind::KeyDown { scancode, .. } => match self.keys.get_mut(scancode.index()) {
                Some(record) => record.press(timestamp),
                None => warn!(scancode = scancode.0, "Ignoring key down for out-of-range scancode"),
            },
            EventKind::KeyUp { scancode, .. } => match self.keys.get_mut(scancode.index()) {
                Some(record) => record.release(timestamp),
                None => warn!(scancode = scancode.0, "Ignoring key up for out-of-range scancode"),
            },
            EventKind::MouseWheel { .. } | EventKind::TextInput { .. } | EventKind::Window(_) => {}
        }

        let event_type = event.event_type();
        self.last_event_time[event_type] = timestamp;
        self.typed_callbacks[event_type].call(event);
        self.callbacks.call(event);
    }

    /// False once a quit event has been seen
    pub fn running(&self) -> bool {
        self.running
    }

    /// Mouse position accumulated from relative motion
    pub fn mouse(&self) -> Point {
        self.mouse
    }

    /// Re-syncs the accumulated mouse position with an absolute one
    pub fn set_mouse(&mut self, position: Point) {
        self.mouse = position;
    }

    /// Full record for `scancode`; out-of-range codes read as never pressed
    pub fn key(&self, scancode: Scancode) -> ButtonRecord {
        self.keys
            .get(scancode.index())
            .copied()
            .unwrap_or_default()
    }

    /// Key went down during the last update
    pub fn key_down(&self, scancode: Scancode) -> bool {
        self.key(scancode).went_down
    }

    /// Key went up during the last update
    pub fn key_up(&self, scancode: Scancode) -> bool {
        self.key(scancode).went_up
    }

    /// Key is currently held
    pub fn key_pressed(&self, scancode: Scancode) -> bool {
        self.key(scancode).held
    }

    pub fn key_down_time(&self, scancode: Scancode) -> u32 {
        self.key(scancode).down_time
    }

    pub fn key_up_time(&self, scancode: Scancode) -> u32 {
        self.key(scancode).up_time
    }

    /// How long `scancode` has been held as of `now`
    pub fn key_held_for(&self, scancode: Scancode, now: u32) -> Option<u32> {
        self.key(scancode).held_for(now)
    }

    pub fn button(&self, button: MouseButton) -> ButtonRecord {
        self.buttons[button]
    }

    pub fn button_down(&self, button: MouseButton) -> bool {
        self.buttons[button].went_down
    }

    pub fn button_up(&self, button: MouseButton) -> bool {
        self.buttons[button].went_up
    }

    pub fn button_pressed(&self, button: MouseButton) -> bool {
        self.buttons[button].held
    }

    pub fn button_down_time(&self, button: MouseButton) -> u32 {
        self.buttons[button].down_time
    }

    pub fn button_up_time(&self, button: MouseButton) -> u32 {
        self.buttons[button].up_time
    }

    pub fn button_held_for(&self, button: MouseButton, now: u32) -> Option<u32> {
        self.buttons[button].held_for(now)
    }

    /// Timestamp of the latest event of `event_type` (0 if none yet)
    pub fn last_event_time(&self, event_type: EventType) -> u32 {
        self.last_event_time[event_type]
    }

    /// Registers a callback for one event type
    pub fn on<F>(&mut self, event_type: EventType, f: F) -> CallbackId
    where
        F: FnMut(&Event) + 'static,
    {
        self.typed_callbacks[event_type].add(f)
    }

    /// Registers a callback for every event, run after the typed callbacks
    pub fn on_any<F>(&mut self, f: F) -> CallbackId
    where
        F: FnMut(&Event) + 'static,
    {
        self.callbacks.add(f)
    }

    /// Removes a callback registered through [`Input::on`] or [`Input::on_any`]
    pub fn remove_callback(&mut self, id: CallbackId) -> bool {
        self.callbacks.remove(id)
            || self
                .typed_callbacks
                .values_mut()
                .any(|callbacks| callbacks.remove(id))
    }

    pub fn callback_count(&self) -> usize {
        self.callbacks.len()
            + self
                .typed_callbacks
                .values()
                .map(Callback::len)
                .sum::<usize>()
    }
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Input")
            .field("running", &self.running)
            .field("mouse", &self.mouse)
            .field("buttons", &self.buttons)
            .field("keys_held", &self.keys.iter().filter(|k| k.held).count())
            .field("callbacks", &self.callback_count())
            .finish()
    }
}
