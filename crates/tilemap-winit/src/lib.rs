//! Winit window driver for the tile map canvas.
//!
//! Shows a [`TileMap`] in a native window using:
//! - [`winit`] for window creation and pointer events
//! - [`softbuffer`] for presenting the CPU-rendered canvas
//!
//! The window is sized to the canvas display size (logical size times the
//! expand ratio). Left clicks are mapped to grid cells by
//! [`TileMap::click`], which passes them to the map's click handler; the
//! `update` hook then runs so the host can push new placements before the
//! next redraw.
//!
//! # Usage
//!
//! ```rust,no_run
//! use tilemap_canvas::{TileMap, TileMapProps};
//! use tilemap_tiles::{TileDrawer, TileImageCache};
//! use tilemap_winit::{WinitConfig, WinitDriver};
//!
//! let cache = TileImageCache::from_json("[{\"text\":\"1m\"}]", &TileDrawer::without_font())
//!     .unwrap()
//!     .install()
//!     .unwrap();
//! let map = TileMap::new(cache, TileMapProps::default()).unwrap();
//! WinitDriver::new(WinitConfig::default()).run(map, |_| {}).unwrap();
//! ```

mod input;

use std::num::NonZeroU32;
use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    dpi::{PhysicalPosition, PhysicalSize},
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{Key, NamedKey},
    window::{Window, WindowId},
};

use tilemap_canvas::{Canvas, TileMap};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration for the winit driver.
pub struct WinitConfig {
    /// Window title.
    pub title: String,
}

impl Default for WinitConfig {
    fn default() -> Self {
        Self {
            title: "tilemap".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// WinitDriver
// ---------------------------------------------------------------------------

/// Owns the main-thread event loop and drives a [`TileMap`].
pub struct WinitDriver {
    config: WinitConfig,
}

impl WinitDriver {
    pub fn new(config: WinitConfig) -> Self {
        Self { config }
    }

    /// Run until the window is closed.
    ///
    /// `update` runs after every click has been delivered to the map's
    /// click handler.
    pub fn run<U>(self, map: TileMap<'static>, update: U) -> Result<(), Box<dyn std::error::Error>>
    where
        U: FnMut(&mut TileMap<'static>) + 'static,
    {
        let event_loop = EventLoop::new()?;
        let mut app = WinitApp::new(self.config, map, update);
        event_loop.run_app(&mut app)?;
        match app.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// WinitApp: ApplicationHandler
// ---------------------------------------------------------------------------

struct WinitApp<U> {
    config: WinitConfig,
    map: TileMap<'static>,
    update: U,
    canvas: Canvas,
    cursor: Option<PhysicalPosition<f64>>,
    state: Option<WinitState>,
    error: Option<Box<dyn std::error::Error>>,
}

struct WinitState {
    window: Arc<Window>,
    surface: softbuffer::Surface<Arc<Window>, Arc<Window>>,
    pixel_width: u32,
    pixel_height: u32,
}

impl<U> WinitApp<U>
where
    U: FnMut(&mut TileMap<'static>),
{
    fn new(config: WinitConfig, map: TileMap<'static>, update: U) -> Self {
        let canvas = map.create_canvas();
        Self {
            config,
            map,
            update,
            canvas,
            cursor: None,
            state: None,
            error: None,
        }
    }

    fn display_size(&self) -> (u32, u32) {
        let (w, h) = self.map.geometry().display_size();
        (w.ceil() as u32, h.ceil() as u32)
    }

    fn create_state(&self, event_loop: &ActiveEventLoop) -> Result<WinitState, Box<dyn std::error::Error>> {
        let (pixel_w, pixel_h) = self.display_size();
        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(PhysicalSize::new(pixel_w, pixel_h))
            .with_resizable(false);

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let context = softbuffer::Context::new(window.clone())?;
        let mut surface = softbuffer::Surface::new(&context, window.clone())?;
        surface.resize(non_zero(pixel_w), non_zero(pixel_h))?;

        Ok(WinitState {
            window,
            surface,
            pixel_width: pixel_w,
            pixel_height: pixel_h,
        })
    }

    fn render(&mut self) {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        let report = self.map.draw(Some(&mut self.canvas));
        if !report.is_ok() {
            log::warn!("{} tiles drawn with a placeholder", report.errors.len());
        }

        let (width, height) = (state.pixel_width, state.pixel_height);
        if width == 0 || height == 0 {
            return;
        }

        let mut buf = match state.surface.buffer_mut() {
            Ok(b) => b,
            Err(e) => {
                log::warn!("failed to map frame buffer: {e}");
                return;
            }
        };
        self.canvas.present(&mut buf, width as usize, height as usize);
        if let Err(e) = buf.present() {
            log::warn!("failed to present frame: {e}");
        }
    }
}

fn non_zero(v: u32) -> NonZeroU32 {
    NonZeroU32::new(v).unwrap_or(NonZeroU32::MIN)
}

impl<U> ApplicationHandler for WinitApp<U>
where
    U: FnMut(&mut TileMap<'static>),
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return; // already initialized
        }
        match self.create_state(event_loop) {
            Ok(state) => {
                self.state = Some(state);
                self.render();
            }
            Err(e) => {
                log::error!("failed to open tile map window: {e}");
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && event.logical_key == Key::Named(NamedKey::Escape)
                {
                    event_loop.exit();
                }
            }

            WindowEvent::Resized(PhysicalSize { width, height }) => {
                if let Some(state) = self.state.as_mut() {
                    state.pixel_width = width;
                    state.pixel_height = height;
                    if let Err(e) = state.surface.resize(non_zero(width), non_zero(height)) {
                        log::warn!("failed to resize surface: {e}");
                    }
                }
                self.render();
            }

            WindowEvent::RedrawRequested => self.render(),

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Some(position);
            }

            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
            }

            WindowEvent::MouseInput { state: btn_state, button, .. } => {
                if let Some(click) = input::translate_mouse_button(btn_state, button, self.cursor) {
                    self.map.click(click);
                    (self.update)(&mut self.map);
                    if let Some(state) = self.state.as_ref() {
                        state.window.request_redraw();
                    }
                }
            }

            _ => {}
        }
    }
}
