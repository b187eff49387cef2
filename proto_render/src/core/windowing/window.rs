use std::any::Any;

/// Window trait definitions
///
/// This file provides the traits that should be implemented by any
/// platform-specific window implementation.
///
/// Note that there is no implementation nor storage in this file. For window
/// instance management, see [window_manager](super::window_manager)
use crate::app::App;

pub struct WindowBuilder {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

pub type WindowPtr = Box<dyn WindowDyn>;

pub trait WindowDyn: Send + Sync {
    fn get_width(&self) -> u32;

    fn get_height(&self) -> u32;

    fn set_vsync(&mut self, is_vsync_active: bool);

    fn get_vsync(&self) -> bool;

    fn get_title(&self) -> &str;

    /// Poll the platform event queue, translating events and handing them to
    /// the application
    fn handle_window_events(&mut self, app: &mut App);

    /// Per-frame window work, mainly presenting the rendered frame
    fn on_update(&mut self);

    /// Access to the concrete window type, used by render backends that are
    /// only compatible with a specific windowing implementation
    fn as_any(&self) -> &dyn Any;
}

/// Every platform-specific window implementation should implement this trait.
pub trait Window: WindowDyn {
    fn create(window_builder: WindowBuilder) -> WindowPtr;
}

impl WindowBuilder {
    pub fn new() -> Self {
        WindowBuilder {
            title: "Proto Render".to_owned(),
            height: 300,
            width: 300,
        }
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    pub fn with_title(mut self, title: String) -> Self {
        self.title = title;
        self
    }
}

impl Default for WindowBuilder {
    fn default() -> Self {
        Self::new()
    }
}
