//! Frame-by-frame behavior of the input tracker driven through an event queue

use std::cell::RefCell;
use std::rc::Rc;

use pixelkit::config::InputConfig;
use pixelkit::geometry::Point;
use pixelkit::input::{
    Event, EventKind, EventQueue, EventType, Input, Modifiers, MouseButton, Scancode,
};

fn key_down(t: u32, scancode: Scancode) -> Event {
    Event::new(
        t,
        EventKind::KeyDown {
            scancode,
            repeat: false,
            modifiers: Modifiers::NONE,
        },
    )
}

fn key_up(t: u32, scancode: Scancode) -> Event {
    Event::new(
        t,
        EventKind::KeyUp {
            scancode,
            modifiers: Modifiers::NONE,
        },
    )
}

fn motion(t: u32, xrel: i32, yrel: i32) -> Event {
    Event::new(
        t,
        EventKind::MouseMotion {
            x: 0,
            y: 0,
            xrel,
            yrel,
        },
    )
}

#[test]
fn key_down_is_transient_and_pressed_is_steady() {
    let mut input = Input::new();
    let mut queue: EventQueue = [key_down(1234, Scancode::K)].into_iter().collect();

    assert_eq!(input.update(&mut queue), 1);
    assert!(input.key_down(Scancode::K));
    assert!(input.key_pressed(Scancode::K));
    assert_eq!(input.key_down_time(Scancode::K), 1234);

    assert_eq!(input.update(&mut queue), 0);
    assert!(!input.key_down(Scancode::K));
    assert!(input.key_pressed(Scancode::K));
    assert_eq!(input.key_down_time(Scancode::K), 1234);
}

#[test]
fn release_sets_up_edge_and_clears_pressed() {
    let mut input = Input::new();
    let mut queue = EventQueue::new();
    queue.push(key_down(10, Scancode::SPACE));
    input.update(&mut queue);

    queue.push(key_up(50, Scancode::SPACE));
    input.update(&mut queue);
    assert!(input.key_up(Scancode::SPACE));
    assert!(!input.key_pressed(Scancode::SPACE));
    assert_eq!(input.key_up_time(Scancode::SPACE), 50);
    assert_eq!(input.key_held_for(Scancode::SPACE, 60), None);

    input.update(&mut queue);
    assert!(!input.key_up(Scancode::SPACE));
}

#[test]
fn quit_stops_running() {
    let mut input = Input::new();
    assert!(input.running());

    let mut queue = EventQueue::new();
    queue.push_kind(99, EventKind::Quit);
    input.update(&mut queue);
    assert!(!input.running());
    assert_eq!(input.last_event_time(EventType::Quit), 99);
}

#[test]
fn mouse_accumulates_relative_motion_from_initial_position() {
    let config = InputConfig {
        initial_mouse: Point::new(100, 100),
        ..InputConfig::default()
    };
    let mut input = Input::from_config(&config);
    let mut queue: EventQueue = [motion(1, 5, -3), motion(2, 5, -3)].into_iter().collect();

    input.update(&mut queue);
    assert_eq!(input.mouse(), Point::new(110, 94));
}

#[test]
fn mouse_buttons_track_edges_per_button() {
    let mut input = Input::new();
    let mut queue = EventQueue::new();
    queue.push_kind(
        5,
        EventKind::MouseButtonDown {
            button: MouseButton::Right,
            x: 1,
            y: 2,
            clicks: 1,
        },
    );
    input.update(&mut queue);

    assert!(input.button_down(MouseButton::Right));
    assert!(input.button_pressed(MouseButton::Right));
    assert!(!input.button_pressed(MouseButton::Left));
    assert_eq!(input.button_down_time(MouseButton::Right), 5);
    assert_eq!(input.button_held_for(MouseButton::Right, 25), Some(20));
}

#[test]
fn typed_callbacks_run_before_catch_all_in_queue_order() {
    let mut input = Input::new();
    let log = Rc::new(RefCell::new(Vec::new()));

    let typed = Rc::clone(&log);
    input.on(EventType::KeyDown, move |e| {
        typed.borrow_mut().push(format!("key@{}", e.timestamp))
    });
    let any = Rc::clone(&log);
    input.on_any(move |e| any.borrow_mut().push(format!("any@{}", e.timestamp)));

    let mut queue: EventQueue = [key_down(1, Scancode::A), motion(2, 1, 1)]
        .into_iter()
        .collect();
    input.update(&mut queue);

    assert_eq!(*log.borrow(), vec!["key@1", "any@1", "any@2"]);
}

#[test]
fn removing_a_callback_by_id_keeps_the_others() {
    let mut input = Input::new();
    let hits = Rc::new(RefCell::new(Vec::new()));

    let first = Rc::clone(&hits);
    let first_id = input.on_any(move |_| first.borrow_mut().push("first"));
    let second = Rc::clone(&hits);
    input.on_any(move |_| second.borrow_mut().push("second"));

    assert!(input.remove_callback(first_id));
    assert!(!input.remove_callback(first_id));

    let mut queue: EventQueue = [motion(1, 0, 0)].into_iter().collect();
    input.update(&mut queue);
    assert_eq!(*hits.borrow(), vec!["second"]);
}
