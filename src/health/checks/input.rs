//! Input tracker health check

use std::cell::Cell;
use std::rc::Rc;

use crate::geometry::Point;
use crate::health::check::{CheckResult, Checklist, SystemCheck};
use crate::input::{EventKind, EventQueue, EventType, Input, Modifiers, MouseButton, Scancode};

/// Replays a scripted frame sequence through the input tracker
#[derive(Debug, Default)]
pub struct InputCheck;

impl InputCheck {
    pub fn new() -> Self {
        Self
    }
}

impl SystemCheck for InputCheck {
    fn name(&self) -> &'static str {
        "Input"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Replays key, mouse and quit events through the tracker")
    }

    fn check(&self) -> CheckResult {
        let mut list = Checklist::new();
        let mut input = Input::new();

        let key_events = Rc::new(Cell::new(0));
        let counter = Rc::clone(&key_events);
        input.on(EventType::KeyDown, move |_| counter.set(counter.get() + 1));

        let mut queue = EventQueue::new();
        queue.push_kind(
            1234,
            EventKind::KeyDown {
                scancode: Scancode::K,
                repeat: false,
                modifiers: Modifiers::NONE,
            },
        );
        queue.push_kind(
            1240,
            EventKind::MouseMotion {
                x: 5,
                y: 7,
                xrel: 5,
                yrel: 7,
            },
        );
        queue.push_kind(
            1250,
            EventKind::MouseButtonDown {
                button: MouseButton::Left,
                x: 5,
                y: 7,
                clicks: 1,
            },
        );

        let processed = input.update(&mut queue);
        list.expect(processed == 3, format!("first frame processed {processed} events"));
        list.expect(
            input.key_down(Scancode::K) && input.key_pressed(Scancode::K),
            "K went down and is held",
        );
        list.expect(input.key_down_time(Scancode::K) == 1234, "K down time recorded");
        list.expect(input.mouse() == Point::new(5, 7), "mouse motion accumulated");
        list.expect(input.button_down(MouseButton::Left), "left button went down");
        list.expect(key_events.get() == 1, "KeyDown callback fired once");

        input.update(&mut EventQueue::new());
        list.expect(
            !input.key_down(Scancode::K) && input.key_pressed(Scancode::K),
            "edge flags clear on the next frame",
        );

        queue.push_kind(2000, EventKind::Quit);
        input.update(&mut queue);
        list.expect(!input.running(), "Quit stops the tracker");

        list.finish("Frame replay matches expectations")
    }
}
