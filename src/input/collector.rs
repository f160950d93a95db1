//! Event collection from winit

use std::time::Instant;

use tracing::debug;
use winit::event::{DeviceEvent, ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::PhysicalKey;

use super::events::{Event, EventKind, Modifiers, MouseButton, WindowChange};
use super::scancode::Scancode;
use super::source::{EventQueue, EventSource};
use crate::config::{InputConfig, MotionSource};
use crate::geometry::{FPoint, Point};

/// Translates winit window/device events into queued [`Event`]s
///
/// Feed it from `ApplicationHandler::window_event` / `device_event`, then hand
/// it to [`Input::update`](super::Input::update) once per frame.
pub struct InputCollector {
    queue: EventQueue,
    started: Instant,
    motion: MotionSource,
    /// Last cursor position in physical pixels
    cursor: Option<Point>,
    /// Sub-pixel remainder of raw device motion
    motion_remainder: FPoint,
    modifiers: Modifiers,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::from_config(&InputConfig::default())
    }

    pub fn from_config(config: &InputConfig) -> Self {
        Self {
            queue: EventQueue::new(),
            started: Instant::now(),
            motion: config.motion,
            cursor: None,
            motion_remainder: FPoint::ZERO,
            modifiers: Modifiers::NONE,
        }
    }

    /// Handle a winit window event
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.push(EventKind::Quit),

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(Point::new(position.x as i32, position.y as i32));
            }

            WindowEvent::MouseInput { state, button, .. } => self.mouse_input(*state, *button),

            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(x, y) => FPoint::new(*x, *y),
                    MouseScrollDelta::PixelDelta(pos) => FPoint::new(pos.x as f32, pos.y as f32),
                };
                self.push(EventKind::MouseWheel { delta });
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                let state = modifiers.state();
                self.modifiers = Modifiers {
                    shift: state.shift_key(),
                    ctrl: state.control_key(),
                    alt: state.alt_key(),
                    meta: state.super_key(),
                };
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.key_input(
                    event.physical_key,
                    event.state,
                    event.repeat,
                    event.text.as_ref().map(|text| text.as_str()),
                );
            }

            WindowEvent::Resized(size) => self.push(EventKind::Window(WindowChange::Resized {
                width: size.width,
                height: size.height,
            })),

            WindowEvent::Focused(true) => self.push(EventKind::Window(WindowChange::FocusGained)),
            WindowEvent::Focused(false) => self.push(EventKind::Window(WindowChange::FocusLost)),

            _ => {}
        }
    }

    /// Handle a winit device event (raw motion when configured for it)
    pub fn handle_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event
            && self.motion == MotionSource::Device
        {
            self.motion_remainder += FPoint::new(delta.0 as f32, delta.1 as f32);
            let step = Point::new(
                self.motion_remainder.x.trunc() as i32,
                self.motion_remainder.y.trunc() as i32,
            );
            if step.non_zero() {
                self.motion_remainder -= step.to_float();
                let cursor = self.cursor.unwrap_or_default();
                self.push(EventKind::MouseMotion {
                    x: cursor.x,
                    y: cursor.y,
                    xrel: step.x,
                    yrel: step.y,
                });
            }
        }
    }

    /// Number of events waiting to be drained
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Milliseconds since this collector was created
    pub fn now(&self) -> u32 {
        u32::try_from(self.started.elapsed().as_millis()).unwrap_or(u32::MAX)
    }

    fn push(&mut self, kind: EventKind) {
        let timestamp = self.now();
        self.queue.push_kind(timestamp, kind);
    }

    fn cursor_moved(&mut self, position: Point) {
        let previous = self.cursor.replace(position);
        if self.motion != MotionSource::Cursor {
            return;
        }
        let rel = previous.map_or(Point::ZERO, |prev| position - prev);
        self.push(EventKind::MouseMotion {
            x: position.x,
            y: position.y,
            xrel: rel.x,
            yrel: rel.y,
        });
    }

    fn mouse_input(&mut self, state: ElementState, button: winit::event::MouseButton) {
        let button = match button {
            winit::event::MouseButton::Left => MouseButton::Left,
            winit::event::MouseButton::Middle => MouseButton::Middle,
            winit::event::MouseButton::Right => MouseButton::Right,
            winit::event::MouseButton::Back => MouseButton::X1,
            winit::event::MouseButton::Forward => MouseButton::X2,
            winit::event::MouseButton::Other(id) => {
                debug!(id, "Ignoring unmapped mouse button");
                return;
            }
        };
        let Point { x, y } = self.cursor.unwrap_or_default();
        let kind = match state {
            ElementState::Pressed => EventKind::MouseButtonDown {
                button,
                x,
                y,
                clicks: 1,
            },
            ElementState::Released => EventKind::MouseButtonUp {
                button,
                x,
                y,
                clicks: 1,
            },
        };
        self.push(kind);
    }

    fn key_input(
        &mut self,
        physical_key: PhysicalKey,
        state: ElementState,
        repeat: bool,
        text: Option<&str>,
    ) {
        let scancode = match physical_key {
            PhysicalKey::Code(code) => Scancode::from_key_code(code),
            PhysicalKey::Unidentified(_) => None,
        };
        let Some(scancode) = scancode else {
            debug!(?physical_key, "Ignoring key without a scancode mapping");
            return;
        };

        let modifiers = self.modifiers;
        match state {
            ElementState::Pressed => {
                self.push(EventKind::KeyDown {
                    scancode,
                    repeat,
                    modifiers,
                });
                if let Some(text) = text.filter(|text| !text.is_empty()) {
                    self.push(EventKind::TextInput {
                        text: text.to_string(),
                    });
                }
            }
            ElementState::Released => self.push(EventKind::KeyUp {
                scancode,
                modifiers,
            }),
        }
    }
}

impl Default for InputCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSource for InputCollector {
    fn poll_event(&mut self) -> Option<Event> {
        self.queue.poll_event()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalSize;
    use winit::keyboard::KeyCode;

    fn drain(collector: &mut InputCollector) -> Vec<EventKind> {
        std::iter::from_fn(|| collector.poll_event())
            .map(|event| event.kind)
            .collect()
    }

    fn device_config() -> InputConfig {
        InputConfig {
            motion: MotionSource::Device,
            ..InputConfig::default()
        }
    }

    #[test]
    fn test_close_and_window_events() {
        let mut collector = InputCollector::new();
        collector.handle_window_event(&WindowEvent::Resized(PhysicalSize::new(800, 600)));
        collector.handle_window_event(&WindowEvent::Focused(false));
        collector.handle_window_event(&WindowEvent::CloseRequested);
        assert_eq!(collector.pending(), 3);

        assert_eq!(
            drain(&mut collector),
            vec![
                EventKind::Window(WindowChange::Resized {
                    width: 800,
                    height: 600
                }),
                EventKind::Window(WindowChange::FocusLost),
                EventKind::Quit,
            ]
        );
    }

    #[test]
    fn test_cursor_motion_is_relative_to_previous_position() {
        let mut collector = InputCollector::new();
        collector.cursor_moved(Point::new(10, 10));
        collector.cursor_moved(Point::new(13, 8));

        assert_eq!(
            drain(&mut collector),
            vec![
                EventKind::MouseMotion {
                    x: 10,
                    y: 10,
                    xrel: 0,
                    yrel: 0
                },
                EventKind::MouseMotion {
                    x: 13,
                    y: 8,
                    xrel: 3,
                    yrel: -2
                },
            ]
        );
    }

    #[test]
    fn test_device_motion_keeps_subpixel_remainder() {
        let mut collector = InputCollector::from_config(&device_config());
        collector.cursor_moved(Point::new(5, 5));
        assert_eq!(collector.pending(), 0);

        collector.handle_device_event(&DeviceEvent::MouseMotion { delta: (0.6, 0.0) });
        assert_eq!(collector.pending(), 0);
        collector.handle_device_event(&DeviceEvent::MouseMotion { delta: (0.6, -1.0) });

        assert_eq!(
            drain(&mut collector),
            vec![EventKind::MouseMotion {
                x: 5,
                y: 5,
                xrel: 1,
                yrel: -1
            }]
        );
    }

    #[test]
    fn test_device_motion_ignored_in_cursor_mode() {
        let mut collector = InputCollector::new();
        collector.handle_device_event(&DeviceEvent::MouseMotion { delta: (4.0, 4.0) });
        assert_eq!(collector.pending(), 0);
    }

    #[test]
    fn test_mouse_buttons_use_cursor_position() {
        let mut collector = InputCollector::from_config(&device_config());
        collector.cursor_moved(Point::new(40, 30));
        collector.mouse_input(ElementState::Pressed, winit::event::MouseButton::Back);
        collector.mouse_input(ElementState::Released, winit::event::MouseButton::Other(9));

        assert_eq!(
            drain(&mut collector),
            vec![EventKind::MouseButtonDown {
                button: MouseButton::X1,
                x: 40,
                y: 30,
                clicks: 1
            }]
        );
    }

    #[test]
    fn test_key_press_with_text() {
        let mut collector = InputCollector::new();
        collector.key_input(
            PhysicalKey::Code(KeyCode::KeyQ),
            ElementState::Pressed,
            false,
            Some("q"),
        );
        collector.key_input(
            PhysicalKey::Code(KeyCode::KeyQ),
            ElementState::Released,
            false,
            None,
        );
        collector.key_input(
            PhysicalKey::Code(KeyCode::AudioVolumeMute),
            ElementState::Pressed,
            false,
            None,
        );

        assert_eq!(
            drain(&mut collector),
            vec![
                EventKind::KeyDown {
                    scancode: Scancode::Q,
                    repeat: false,
                    modifiers: Modifiers::NONE
                },
                EventKind::TextInput { text: "q".into() },
                EventKind::KeyUp {
                    scancode: Scancode::Q,
                    modifiers: Modifiers::NONE
                },
            ]
        );
    }
}
