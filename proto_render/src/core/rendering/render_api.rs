use lazy_static::lazy_static;
use proto_render::core::locking::RwLock;
use proto_render::core::math::Color;
use proto_render::core::platform::opengl::opengl_render_backend::OpenGLRenderBackend;
use proto_render::core::platform::Platforms;
use proto_render::core::utils::handle::Handle;

use super::buffer::BufferLayout;
use super::shader::{ShaderDataType, ShaderDataTypeValue, ShaderError, ShaderSrc};

pub type VertexBufferHandle = Handle;
pub type VertexArrayHandle = Handle;
pub type ShaderHandle = Handle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum API {
    OpenGL,
    None,
}

/// This is the behaviour that a render api instance should implement,
/// translating the platform-specific details of the API to this trait
pub trait RenderAPIBackendDyn: Send + Sync {
    fn init(&mut self);
    fn get_api(&self) -> API;
    fn clear(&self);
    fn set_clear_color(&mut self, color: Color);
    fn set_viewport(&mut self, x: u32, y: u32, width: u32, height: u32);
    fn draw_arrays(&self, vertex_array: VertexArrayHandle, vertex_count: i32);

    // Resource creation and destruction
    fn create_vertex_buffer(&mut self, vertex_data: &[f32]) -> VertexBufferHandle;
    fn destroy_vertex_buffer(&mut self, handle: VertexBufferHandle);
    fn create_vertex_array(&mut self) -> VertexArrayHandle;
    fn destroy_vertex_array(&mut self, handle: VertexArrayHandle);
    fn create_shader(
        &mut self,
        name: &str,
        vertex_src: ShaderSrc,
        fragment_src: ShaderSrc,
    ) -> Result<ShaderHandle, ShaderError>;
    fn destroy_shader(&mut self, handle: ShaderHandle);

    // Bindings
    fn bind_vertex_buffer(&self, handle: VertexBufferHandle);
    fn unbind_vertex_buffer(&self);
    fn bind_vertex_array(&self, handle: VertexArrayHandle);
    fn unbind_vertex_array(&self);
    fn bind_shader(&self, handle: ShaderHandle);
    fn unbind_shader(&self);

    // Operations: Vertex Buffer
    fn set_vertex_buffer_layout(&mut self, handle: VertexBufferHandle, layout: BufferLayout);

    // Operations: Vertex Array
    fn set_vertex_array_vertex_buffer(
        &mut self,
        va_handle: VertexArrayHandle,
        vb_handle: VertexBufferHandle,
    );
    fn get_vertex_array_vertex_buffer(
        &self,
        va_handle: VertexArrayHandle,
    ) -> Option<VertexBufferHandle>;

    // Operations: Shaders
    fn get_shader_name(&self, handle: ShaderHandle) -> String;
    fn shader_exists(&self, handle: ShaderHandle) -> bool;
    fn add_shader_uniform(
        &mut self,
        handle: ShaderHandle,
        name: &str,
        data_type: ShaderDataType,
    ) -> Result<(), ShaderError>;
    fn set_shader_uniform_f32(&self, handle: ShaderHandle, name: &str, value: f32);
    fn set_shader_uniform_i32(&self, handle: ShaderHandle, name: &str, value: i32);
    fn set_shader_uniform_fvec2(&self, handle: ShaderHandle, name: &str, value: &glam::Vec2);
    fn set_shader_uniform_fvec3(&self, handle: ShaderHandle, name: &str, value: &glam::Vec3);
    fn set_shader_uniform_fvec4(&self, handle: ShaderHandle, name: &str, value: &glam::Vec4);
    fn set_shader_uniform_fmat3(&self, handle: ShaderHandle, name: &str, value: &glam::Mat3);
    fn set_shader_uniform_fmat4(&self, handle: ShaderHandle, name: &str, value: &glam::Mat4);

    /// Dispatch a dynamically typed value to the matching uniform setter
    fn set_shader_uniform(&self, handle: ShaderHandle, name: &str, value: &ShaderDataTypeValue) {
        match value {
            ShaderDataTypeValue::Float(v) => self.set_shader_uniform_f32(handle, name, *v),
            ShaderDataTypeValue::Float2(v) => self.set_shader_uniform_fvec2(handle, name, v),
            ShaderDataTypeValue::Float3(v) => self.set_shader_uniform_fvec3(handle, name, v),
            ShaderDataTypeValue::Float4(v) => self.set_shader_uniform_fvec4(handle, name, v),
            ShaderDataTypeValue::Mat3(v) => self.set_shader_uniform_fmat3(handle, name, v),
            ShaderDataTypeValue::Mat4(v) => self.set_shader_uniform_fmat4(handle, name, v),
            ShaderDataTypeValue::Int(v) => self.set_shader_uniform_i32(handle, name, *v),
        }
    }
}

/// Implement this trait to support a new Render API
pub trait RenderAPIBackend: RenderAPIBackendDyn {
    fn create() -> RenderAPIBackendPtr;
}

pub type RenderAPIBackendPtr = Box<dyn RenderAPIBackendDyn>;

lazy_static! {
    static ref RENDER_API: RwLock<RenderCommand> = RwLock::new(RenderCommand { backend: None });
}

/// RenderCommand is how the rest of the engine talks to the currently active
/// backend. It stores the backend object and controls how it is accessed,
/// including locking.
///
/// There is a single instance of this class (a singleton) that you interact
/// with using static methods.
pub struct RenderCommand {
    backend: Option<RenderAPIBackendPtr>,
}

impl RenderCommand {
    pub fn initialize(platform: Platforms) {
        let mut render_api = RENDER_API.write();
        assert!(
            render_api.backend.is_none(),
            "Render api already initialized"
        );
        match platform {
            Platforms::Desktop => {
                render_api.backend = Some(OpenGLRenderBackend::create());
            }
            Platforms::None => panic!("Can't create a render backend for platform 'None'"),
        }
    }

    pub fn shutdown() {
        let mut render_api = RENDER_API.write();
        render_api.backend = None;
    }

    pub fn is_initialized() -> bool {
        RENDER_API.read().backend.is_some()
    }

    #[inline(always)]
    fn get_backend(&self) -> &RenderAPIBackendPtr {
        debug_assert!(self.backend.is_some(), "render api not initialized!");
        self.backend.as_ref().unwrap()
    }

    #[inline(always)]
    fn get_backend_mut(&mut self) -> &mut RenderAPIBackendPtr {
        debug_assert!(self.backend.is_some(), "render api not initialized!");
        self.backend.as_mut().unwrap()
    }

    pub fn get_current_api() -> API {
        let api = RENDER_API.read();
        let backend = api.get_backend();
        backend.get_api()
    }

    pub fn clear() {
        let api = RENDER_API.read();
        let backend = api.get_backend();
        backend.clear();
    }

    pub fn set_clear_color(color: Color) {
        let mut api = RENDER_API.write();
        let backend = api.get_backend_mut();
        backend.set_clear_color(color);
    }

    pub fn set_viewport(x: u32, y: u32, width: u32, height: u32) {
        let mut api = RENDER_API.write();
        let backend = api.get_backend_mut();
        backend.set_viewport(x, y, width, height);
    }

    pub fn draw_arrays(vertex_array: VertexArrayHandle, vertex_count: i32) {
        let api = RENDER_API.read();
        let backend = api.get_backend();
        backend.draw_arrays(vertex_array, vertex_count);
    }

    // Resource creation and destruction
    pub fn create_vertex_buffer(vertex_data: &[f32]) -> VertexBufferHandle {
        let mut api = RENDER_API.write();
        let backend = api.get_backend_mut();
        backend.create_vertex_buffer(vertex_data)
    }

    pub fn destroy_vertex_buffer(handle: VertexBufferHandle) {
        let mut api = RENDER_API.write();
        let backend = api.get_backend_mut();
        backend.destroy_vertex_buffer(handle)
    }

    pub fn create_vertex_array() -> VertexArrayHandle {
        let mut api = RENDER_API.write();
        let backend = api.get_backend_mut();
        backend.create_vertex_array()
    }

    pub fn destroy_vertex_array(handle: VertexArrayHandle) {
        let mut api = RENDER_API.write();
        let backend = api.get_backend_mut();
        backend.destroy_vertex_array(handle)
    }

    pub fn create_shader(
        name: &str,
        vertex_src: ShaderSrc,
        fragment_src: ShaderSrc,
    ) -> Result<ShaderHandle, ShaderError> {
        let mut api = RENDER_API.write();
        let backend = api.get_backend_mut();
        backend.create_shader(name, vertex_src, fragment_src)
    }

    pub fn destroy_shader(handle: ShaderHandle) {
        let mut api = RENDER_API.write();
        let backend = api.get_backend_mut();
        backend.destroy_shader(handle)
    }

    // Bindings
    pub fn bind_vertex_buffer(handle: VertexBufferHandle) {
        let api = RENDER_API.read();
        let backend = api.get_backend();
        backend.bind_vertex_buffer(handle)
    }

    pub fn unbind_vertex_buffer() {
        let api = RENDER_API.read();
        let backend = api.get_backend();
        backend.unbind_vertex_buffer()
    }

    pub fn bind_vertex_array(handle: VertexArrayHandle) {
        let api = RENDER_API.read();
        let backend = api.get_backend();
        backend.bind_vertex_array(handle)
    }

    pub fn unbind_vertex_array() {
        let api = RENDER_API.read();
        let backend = api.get_backend();
        backend.unbind_vertex_array()
    }

    pub fn bind_shader(handle: ShaderHandle) {
        let api = RENDER_API.read();
        let backend = api.get_backend();
        backend.bind_shader(handle)
    }

    pub fn unbind_shader() {
        let api = RENDER_API.read();
        let backend = api.get_backend();
        backend.unbind_shader()
    }

    // Operations: Vertex Buffer
    pub fn set_vertex_buffer_layout(handle: VertexBufferHandle, layout: BufferLayout) {
        let mut api = RENDER_API.write();
        let backend = api.get_backend_mut();
        backend.set_vertex_buffer_layout(handle, layout)
    }

    // Operations: Vertex Array
    pub fn set_vertex_array_vertex_buffer(
        va_handle: VertexArrayHandle,
        vb_handle: VertexBufferHandle,
    ) {
        let mut api = RENDER_API.write();
        let backend = api.get_backend_mut();
        backend.set_vertex_array_vertex_buffer(va_handle, vb_handle)
    }

    pub fn get_vertex_array_vertex_buffer(va_handle: VertexArrayHandle) -> Option<VertexBufferHandle> {
        let api = RENDER_API.read();
        let backend = api.get_backend();
        backend.get_vertex_array_vertex_buffer(va_handle)
    }

    // Operations: Shaders
    pub fn get_shader_name(handle: ShaderHandle) -> String {
        let api = RENDER_API.read();
        let backend = api.get_backend();
        backend.get_shader_name(handle)
    }

    pub fn shader_exists(handle: ShaderHandle) -> bool {
        let api = RENDER_API.read();
        let backend = api.get_backend();
        backend.shader_exists(handle)
    }

    pub fn add_shader_uniform(
        handle: ShaderHandle,
        name: &str,
        data_type: ShaderDataType,
    ) -> Result<(), ShaderError> {
        let mut api = RENDER_API.write();
        let backend = api.get_backend_mut();
        backend.add_shader_uniform(handle, name, data_type)
    }

    pub fn set_shader_uniform(handle: ShaderHandle, name: &str, value: &ShaderDataTypeValue) {
        let api = RENDER_API.read();
        let backend = api.get_backend();
        backend.set_shader_uniform(handle, name, value)
    }

    pub fn set_shader_uniform_f32(handle: ShaderHandle, name: &str, value: f32) {
        let api = RENDER_API.read();
        let backend = api.get_backend();
        backend.set_shader_uniform_f32(handle, name, value)
    }

    pub fn set_shader_uniform_i32(handle: ShaderHandle, name: &str, value: i32) {
        let api = RENDER_API.read();
        let backend = api.get_backend();
        backend.set_shader_uniform_i32(handle, name, value)
    }

    pub fn set_shader_uniform_fvec2(handle: ShaderHandle, name: &str, value: &glam::Vec2) {
        let api = RENDER_API.read();
        let backend = api.get_backend();
        backend.set_shader_uniform_fvec2(handle, name, value)
    }

    pub fn set_shader_uniform_fvec3(handle: ShaderHandle, name: &str, value: &glam::Vec3) {
        let api = RENDER_API.read();
        let backend = api.get_backend();
        backend.set_shader_uniform_fvec3(handle, name, value)
    }

    pub fn set_shader_uniform_fvec4(handle: ShaderHandle, name: &str, value: &glam::Vec4) {
        let api = RENDER_API.read();
        let backend = api.get_backend();
        backend.set_shader_uniform_fvec4(handle, name, value)
    }

    pub fn set_shader_uniform_fmat3(handle: ShaderHandle, name: &str, value: &glam::Mat3) {
        let api = RENDER_API.read();
        let backend = api.get_backend();
        backend.set_shader_uniform_fmat3(handle, name, value)
    }

    pub fn set_shader_uniform_fmat4(handle: ShaderHandle, name: &str, value: &glam::Mat4) {
        let api = RENDER_API.read();
        let backend = api.get_backend();
        backend.set_shader_uniform_fmat4(handle, name, value)
    }
}
