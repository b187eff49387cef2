use proto_render::core::windowing::window_manager::WindowManager;

use super::render_api::{RenderCommand, API};

/// Thin facade over the render backend lifecycle
pub struct Render;

impl Render {
    /// Create the render backend for the current platform. The window must
    /// already exist since the backend borrows its GL context
    pub fn init() {
        RenderCommand::initialize(WindowManager::get_platform());
    }

    pub fn shutdown() {
        RenderCommand::shutdown();
    }

    pub fn on_window_resize(new_width: u32, new_height: u32) {
        RenderCommand::set_viewport(0, 0, new_width, new_height);
    }

    #[inline(always)]
    pub fn get_current_api() -> API {
        RenderCommand::get_current_api()
    }
}
