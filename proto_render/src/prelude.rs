pub use crate::app::App;
pub use crate::core::layer::Layer;
pub use crate::core::platform::Platforms;
pub use crate::core::rendering::material::Material;
pub use crate::core::rendering::mesh::Mesh;
pub use crate::core::rendering::render_api::RenderCommand;
pub use crate::core::rendering::Render;
pub use crate::core::windowing::events::Event;
pub use crate::core::windowing::window_manager::WindowManager;
pub use crate::core::windowing::WindowBuilder;
