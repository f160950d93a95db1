//! Application handler for the input viewer

use tracing::{debug, error, info, trace, warn};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{DeviceEvent, DeviceId, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Fullscreen, Window, WindowAttributes, WindowId};

use crate::config::{AppConfig, WindowConfig};
use crate::input::{
    EventKind, EventType, Input, InputCollector, MouseButton, Scancode, WindowChange,
};

/// Creates window attributes from configuration
pub fn window_attributes(config: &WindowConfig) -> WindowAttributes {
    let mut attrs = WindowAttributes::default()
        .with_title(config.title.clone())
        .with_inner_size(LogicalSize::new(config.width, config.height))
        .with_resizable(config.resizable)
        .with_decorations(config.decorated);

    if config.fullscreen {
        attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
    }

    attrs
}

/// Opens one window and logs the tracked input state every frame
///
/// Escape or closing the window ends the loop. F1 logs a full snapshot.
pub struct App {
    config: AppConfig,
    window: Option<Window>,
    collector: InputCollector,
    input: Input,
    frame: u64,
}

impl App {
    /// Creates the viewer with the provided configuration
    pub fn new(config: AppConfig) -> Self {
        info!(profile = %config.profile, "Starting input viewer");
        info!(?config.window, ?config.input, "Configuration");

        let collector = InputCollector::from_config(&config.input);
        let mut input = Input::from_config(&config.input);
        register_logging_callbacks(&mut input);

        Self {
            config,
            window: None,
            collector,
            input,
            frame: 0,
        }
    }

    /// Creates the viewer with configuration loaded from environment
    pub fn from_env() -> Self {
        let config = AppConfig::load_from_env().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load config, using default configuration");
            AppConfig::default()
        });
        Self::new(config)
    }

    pub fn input(&self) -> &Input {
        &self.input
    }

    /// Drains collected events into the tracker; returns false when the loop should stop
    fn run_frame(&mut self) -> bool {
        let processed = self.input.update(&mut self.collector);
        self.frame += 1;

        if processed > 0 {
            trace!(frame = self.frame, processed, "Frame");
        }

        if self.input.key_down(Scancode::F1) {
            info!(frame = self.frame, input = ?self.input, "Input snapshot");
        }

        if processed > 0
            && let Some(window) = &self.window
        {
            window.set_title(&format!(
                "{} - mouse {}",
                self.config.window.title,
                self.input.mouse()
            ));
        }

        if self.input.key_down(Scancode::ESCAPE) {
            info!("Escape pressed, exiting");
            return false;
        }
        if !self.input.running() {
            info!("Quit received, exiting");
            return false;
        }
        true
    }
}

impl Default for App {
    fn default() -> Self {
        Self::from_env()
    }
}

fn register_logging_callbacks(input: &mut Input) {
    input.on(EventType::KeyDown, |event| {
        if let EventKind::KeyDown {
            scancode,
            repeat,
            modifiers,
        } = &event.kind
        {
            debug!(
                t = event.timestamp,
                scancode = scancode.0,
                repeat,
                ?modifiers,
                "Key down"
            );
        }
    });
    input.on(EventType::KeyUp, |event| {
        if let EventKind::KeyUp { scancode, .. } = &event.kind {
            debug!(t = event.timestamp, scancode = scancode.0, "Key up");
        }
    });
    input.on(EventType::MouseButtonDown, |event| {
        if let EventKind::MouseButtonDown {
            button, x, y, clicks,
        } = &event.kind
        {
            log_button(event.timestamp, *button, *x, *y, *clicks, "Button down");
        }
    });
    input.on(EventType::MouseButtonUp, |event| {
        if let EventKind::MouseButtonUp {
            button, x, y, clicks,
        } = &event.kind
        {
            log_button(event.timestamp, *button, *x, *y, *clicks, "Button up");
        }
    });
    input.on(EventType::MouseWheel, |event| {
        if let EventKind::MouseWheel { delta } = &event.kind {
            debug!(t = event.timestamp, %delta, "Wheel");
        }
    });
    input.on(EventType::TextInput, |event| {
        if let EventKind::TextInput { text } = &event.kind {
            debug!(t = event.timestamp, %text, "Text input");
        }
    });
    input.on(EventType::Window, |event| match &event.kind {
        EventKind::Window(WindowChange::Resized { width, height }) => {
            info!(width, height, "Window resized");
        }
        EventKind::Window(change) => debug!(?change, "Window"),
        _ => {}
    });
}

fn log_button(timestamp: u32, button: MouseButton, x: i32, y: i32, clicks: u8, what: &str) {
    debug!(t = timestamp, ?button, x, y, clicks, "{}", what);
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        match event_loop.create_window(window_attributes(&self.config.window)) {
            Ok(window) => {
                let size = window.inner_size();
                info!(
                    window.width = size.width,
                    window.height = size.height,
                    "Window created successfully"
                );
                self.window = Some(window);
            }
            Err(e) => {
                error!(error = %e, "Failed to create window");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // CloseRequested becomes a Quit event; the exit happens in about_to_wait
        self.collector.handle_window_event(&event);
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        self.collector.handle_device_event(&event);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            return;
        }
        if !self.run_frame() {
            event_loop.exit();
        }
    }
}
