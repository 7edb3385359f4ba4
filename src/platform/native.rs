//! Native window and input via winit
//!
//! The event loop is pumped once per tick instead of owning the program, so
//! the game loop stays an ordinary synchronous loop.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, bail};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowId};

use super::{InputEvent, InputSource, Key};
use crate::config::GameConfig;

/// Pumps allowed while waiting for the first window
const WINDOW_WAIT_PUMPS: u32 = 200;

pub fn map_key(key_code: KeyCode) -> Option<Key> {
    match key_code {
        KeyCode::ArrowUp => Some(Key::Up),
        KeyCode::ArrowDown => Some(Key::Down),
        KeyCode::KeyR => Some(Key::R),
        KeyCode::KeyQ => Some(Key::Q),
        KeyCode::KeyT => Some(Key::T),
        _ => None,
    }
}

/// Collects window events between pumps
struct NativeApp {
    title: String,
    size: LogicalSize<f64>,
    window: Option<Arc<Window>>,
    events: Vec<InputEvent>,
    held: HashSet<Key>,
    window_error: Option<String>,
}

impl NativeApp {
    fn new(config: &GameConfig) -> Self {
        Self {
            title: config.title.clone(),
            size: LogicalSize::new(config.screen_width as f64, config.screen_height as f64),
            window: None,
            events: Vec::new(),
            held: HashSet::new(),
            window_error: None,
        }
    }
}

impl ApplicationHandler for NativeApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attributes = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(self.size)
            .with_resizable(false);

        match event_loop.create_window(attributes) {
            Ok(window) => {
                log::info!("Window created: {}x{}", self.size.width, self.size.height);
                self.window = Some(Arc::new(window));
            }
            Err(e) => self.window_error = Some(e.to_string()),
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested");
                self.events.push(InputEvent::Quit);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(key_code) = event.physical_key else {
                    return;
                };
                let Some(key) = map_key(key_code) else {
                    return;
                };
                match event.state {
                    ElementState::Pressed => {
                        self.held.insert(key);
                        if !event.repeat {
                            self.events.push(InputEvent::KeyDown(key));
                        }
                    }
                    ElementState::Released => {
                        self.held.remove(&key);
                    }
                }
            }

            // Releases are not delivered to an unfocused window
            WindowEvent::Focused(false) => self.held.clear(),

            _ => {}
        }
    }
}

/// winit-backed window plus input source
pub struct NativePlatform {
    event_loop: EventLoop<()>,
    app: NativeApp,
}

impl NativePlatform {
    /// Open the game window
    pub fn new(config: &GameConfig) -> anyhow::Result<Self> {
        let event_loop = EventLoop::new().context("Failed to create event loop")?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut platform = Self {
            event_loop,
            app: NativeApp::new(config),
        };

        for _ in 0..WINDOW_WAIT_PUMPS {
            platform.pump(Some(Duration::from_millis(10)));
            if let Some(err) = platform.app.window_error.take() {
                bail!("Failed to create window: {}", err);
            }
            if platform.app.window.is_some() {
                return Ok(platform);
            }
        }
        bail!("Window was never created")
    }

    pub fn window(&self) -> Option<Arc<Window>> {
        self.app.window.clone()
    }

    fn pump(&mut self, timeout: Option<Duration>) {
        if let PumpStatus::Exit(code) = self.event_loop.pump_app_events(timeout, &mut self.app) {
            log::debug!("Event loop exited with code {}", code);
            self.app.events.push(InputEvent::Quit);
        }
    }
}

impl InputSource for NativePlatform {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.pump(Some(Duration::ZERO));
        std::mem::take(&mut self.app.events)
    }

    fn is_key_held(&self, key: Key) -> bool {
        self.app.held.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_key() {
        assert_eq!(map_key(KeyCode::ArrowUp), Some(Key::Up));
        assert_eq!(map_key(KeyCode::ArrowDown), Some(Key::Down));
        assert_eq!(map_key(KeyCode::KeyR), Some(Key::R));
        assert_eq!(map_key(KeyCode::KeyQ), Some(Key::Q));
        assert_eq!(map_key(KeyCode::KeyT), Some(Key::T));
        assert_eq!(map_key(KeyCode::Space), None);
    }
}
