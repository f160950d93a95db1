//! Input handling system
//!
//! Turns a per-event platform queue into frame-granular state:
//! - Collects raw input from winit events ([`InputCollector`])
//! - Drains any [`EventSource`] once per frame ([`Input::update`])
//! - Tracks held / went-down / went-up state and timestamps per key and button
//! - Fans every event out to typed and catch-all callbacks
//!
//! # Architecture
//!
//! ```text
//! winit events → InputCollector ─┐
//!                                ├→ EventSource → Input::update → state tables
//!     EventQueue (tests/replay) ─┘                       ↓
//!                                          typed callbacks → catch-all callbacks
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use pixelkit::input::{EventType, Input, InputCollector, Scancode};
//!
//! let mut collector = InputCollector::new();
//! let mut input = Input::new();
//! input.on(EventType::KeyDown, |event| println!("{event:?}"));
//!
//! // In window_event(): collector.handle_window_event(&event);
//!
//! // Once per frame
//! input.update(&mut collector);
//! if input.key_down(Scancode::ESCAPE) || !input.running() {
//!     // exit
//! }
//! ```

mod callback;
mod collector;
mod events;
mod scancode;
mod source;
mod state;
mod tracker;

pub use callback::{Callback, CallbackId};
pub use collector::InputCollector;
pub use events::{Event, EventKind, EventType, Modifiers, MouseButton, WindowChange};
pub use scancode::{SCANCODE_COUNT, Scancode};
pub use source::{EventQueue, EventSource};
pub use state::{ButtonRecord, ButtonState};
pub use tracker::Input;
