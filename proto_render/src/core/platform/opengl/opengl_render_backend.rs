use std::collections::HashMap;
use std::mem::size_of;

use glow::{Context, HasContext, NativeProgram, NativeShader};
use glutin::context::PossiblyCurrentContext;
use glutin::display::{GetGlDisplay, GlDisplay};
use proto_render::core::math::Color;
use proto_render::core::rendering::render_api::{
    RenderAPIBackend, RenderAPIBackendDyn, RenderAPIBackendPtr, ShaderHandle, VertexArrayHandle,
    VertexBufferHandle, API,
};
use proto_render::core::windowing::window_manager::WindowManager;

use crate::core::platform::opengl::opengl_buffer::OpenGLVertexBuffer;
use crate::core::platform::opengl::opengl_shader::{OpenGLShader, UniformData};
use crate::core::platform::opengl::opengl_vertex_array::OpenGLVertexArray;
use crate::core::platform::winit_window::WinitWindow;
use crate::core::rendering::buffer::BufferLayout;
use crate::core::rendering::shader::{self, ShaderDataType, ShaderError, ShaderSrc, ShaderStage};
use crate::core::utils::handle::Allocator;

/// OpenGL implementation of the render backend, on top of glow.
///
/// The GL context is borrowed from the window created by the windowing
/// system, so the window must exist before this backend is created
pub struct OpenGLRenderBackend {
    clear_color: Color,
    shader_allocator: Allocator<OpenGLShader>,
    vertex_array_allocator: Allocator<OpenGLVertexArray>,
    vertex_buffer_allocator: Allocator<OpenGLVertexBuffer>,
    gl: Context,
}

// The backend is only driven from the thread that owns the GL context, but
// it lives behind the RenderCommand singleton which requires these bounds
unsafe impl Send for OpenGLRenderBackend {}
unsafe impl Sync for OpenGLRenderBackend {}

impl RenderAPIBackend for OpenGLRenderBackend {
    fn create() -> RenderAPIBackendPtr {
        // We have to get a reference to the GL context created by the window
        let window_manager = WindowManager::get().read();
        let winit_window = window_manager
            .get_window()
            .as_any()
            .downcast_ref::<WinitWindow>()
            .expect("The OpenGL render backend is only compatible with winit windows");

        let gl = glow_context(&winit_window.context);

        let mut result = Box::new(OpenGLRenderBackend {
            clear_color: Color::new(0.0, 0.0, 0.0, 1.0),
            shader_allocator: Allocator::new(),
            vertex_array_allocator: Allocator::new(),
            vertex_buffer_allocator: Allocator::new(),
            gl,
        });
        result.init();
        result
    }
}

impl RenderAPIBackendDyn for OpenGLRenderBackend {
    fn init(&mut self) {
        log::info!("Glow OpenGL successfully initialized!");
        log::info!("\tOpenGL Version: {}", self.get_string(glow::VERSION));
        log::info!("\tOpenGL Renderer: {}", self.get_string(glow::RENDERER));
        log::info!("\tOpenGL Vendor: {}", self.get_string(glow::VENDOR));
        log::info!(
            "\tOpenGL Shading Language Version: {}",
            self.get_string(glow::SHADING_LANGUAGE_VERSION)
        );

        unsafe {
            // Depth test keeps closer triangles in front no matter the order
            // they are drawn in
            self.gl.enable(glow::DEPTH_TEST);
            self.gl.clear_color(
                self.clear_color.x,
                self.clear_color.y,
                self.clear_color.z,
                self.clear_color.w,
            );
        }
    }

    fn get_api(&self) -> API {
        API::OpenGL
    }

    fn clear(&self) {
        unsafe {
            self.gl
                .clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }
    }

    fn set_clear_color(&mut self, color: Color) {
        self.clear_color = color;
        unsafe {
            self.gl.clear_color(
                self.clear_color.x,
                self.clear_color.y,
                self.clear_color.z,
                self.clear_color.w,
            );
        }
    }

    fn set_viewport(&mut self, x: u32, y: u32, width: u32, height: u32) {
        unsafe {
            self.gl
                .viewport(x as i32, y as i32, width as i32, height as i32);
        }
    }

    fn draw_arrays(&self, vertex_array: VertexArrayHandle, vertex_count: i32) {
        self.bind_vertex_array(vertex_array);
        unsafe {
            self.gl.draw_arrays(glow::TRIANGLES, 0, vertex_count);
        }
    }

    // Resource creation and destruction
    fn create_vertex_buffer(&mut self, vertex_data: &[f32]) -> VertexBufferHandle {
        let gl = &self.gl;

        unsafe {
            let native_buffer = gl.create_buffer().expect("Could not create vertex buffer");
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(native_buffer));
            let bytes = std::slice::from_raw_parts(
                vertex_data.as_ptr().cast::<u8>(),
                vertex_data.len() * size_of::<f32>(),
            );
            gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, bytes, glow::STATIC_DRAW);

            self.vertex_buffer_allocator.allocate(OpenGLVertexBuffer {
                native_buffer,
                buffer_layout: BufferLayout::default(),
            })
        }
    }

    fn destroy_vertex_buffer(&mut self, handle: VertexBufferHandle) {
        let buffer = self.vertex_buffer_allocator.get(handle);

        unsafe { self.gl.delete_buffer(buffer.native_buffer) }

        self.vertex_buffer_allocator.free(handle);
    }

    fn create_vertex_array(&mut self) -> VertexArrayHandle {
        let native_array = unsafe {
            self.gl
                .create_vertex_array()
                .expect("Could not create OpenGL vertex array")
        };

        self.vertex_array_allocator.allocate(OpenGLVertexArray {
            native_array,
            vertex_buffer: None,
        })
    }

    fn destroy_vertex_array(&mut self, handle: VertexArrayHandle) {
        let vertex_array = self.vertex_array_allocator.get(handle);
        unsafe {
            self.gl.delete_vertex_array(vertex_array.native_array);
        }
        self.vertex_array_allocator.free(handle);
    }

    fn create_shader(
        &mut self,
        name: &str,
        vertex_src: ShaderSrc,
        fragment_src: ShaderSrc,
    ) -> Result<ShaderHandle, ShaderError> {
        // The vertex source is resolved first: when it fails, the fragment
        // file is never even opened
        let (vertex_code, fragment_code) =
            shader::resolve_program_sources(&vertex_src, &fragment_src)?;

        let opengl_shader = self.create_shader_from_code(name, &vertex_code, &fragment_code)?;
        Ok(self.shader_allocator.allocate(opengl_shader))
    }

    fn destroy_shader(&mut self, handle: ShaderHandle) {
        debug_assert!(
            self.shader_allocator.is_live(handle),
            "Trying to destroy unexistent shader"
        );
        let shader = self.shader_allocator.get(handle);

        unsafe {
            self.gl.delete_program(shader.native_program);
        }
        self.shader_allocator.free(handle);
    }

    // Bindings
    fn bind_vertex_buffer(&self, handle: VertexBufferHandle) {
        let vertex_buffer = self.vertex_buffer_allocator.get(handle);
        unsafe {
            self.gl
                .bind_buffer(glow::ARRAY_BUFFER, Some(vertex_buffer.native_buffer));
        }
    }

    fn unbind_vertex_buffer(&self) {
        unsafe {
            self.gl.bind_buffer(glow::ARRAY_BUFFER, None);
        }
    }

    fn bind_vertex_array(&self, handle: VertexArrayHandle) {
        let vertex_array = self.vertex_array_allocator.get(handle);
        unsafe {
            self.gl.bind_vertex_array(Some(vertex_array.native_array));
        }
        if let Some(vb) = vertex_array.vertex_buffer {
            self.bind_vertex_buffer(vb);
        }
    }

    fn unbind_vertex_array(&self) {
        unsafe {
            self.gl.bind_vertex_array(None);
        }
    }

    fn bind_shader(&self, handle: ShaderHandle) {
        let shader = self.shader_allocator.get(handle);

        unsafe {
            self.gl.use_program(Some(shader.native_program));
        }
    }

    fn unbind_shader(&self) {
        unsafe {
            self.gl.use_program(None);
        }
    }

    // Operations: Vertex Buffer
    fn set_vertex_buffer_layout(&mut self, handle: VertexBufferHandle, layout: BufferLayout) {
        let vertex_buffer = self.vertex_buffer_allocator.get_mut(handle);
        vertex_buffer.buffer_layout = layout;
    }

    // Operations: Vertex Array
    fn set_vertex_array_vertex_buffer(
        &mut self,
        va_handle: VertexArrayHandle,
        vb_handle: VertexBufferHandle,
    ) {
        self.bind_vertex_array(va_handle);
        self.bind_vertex_buffer(vb_handle);

        {
            let vertex_buffer = self.vertex_buffer_allocator.get(vb_handle);
            let layout = vertex_buffer.get_buffer_layout();
            let gl = &self.gl;
            for (i, element) in layout.iter().enumerate() {
                unsafe {
                    gl.enable_vertex_attrib_array(i as u32);
                    let component_count = element.get_component_count();
                    match element.get_data_type() {
                        ShaderDataType::Float
                        | ShaderDataType::Float2
                        | ShaderDataType::Float3
                        | ShaderDataType::Float4
                        | ShaderDataType::Mat3
                        | ShaderDataType::Mat4 => {
                            gl.vertex_attrib_pointer_f32(
                                i as u32,
                                component_count as i32,
                                glow::FLOAT,
                                element.is_normalized(),
                                layout.get_stride() as i32,
                                element.get_offset() as i32,
                            );
                        }
                        ShaderDataType::Int
                        | ShaderDataType::Int2
                        | ShaderDataType::Int3
                        | ShaderDataType::Int4
                        | ShaderDataType::Bool => gl.vertex_attrib_pointer_i32(
                            i as u32,
                            component_count as i32,
                            glow::INT,
                            layout.get_stride() as i32,
                            element.get_offset() as i32,
                        ),
                        ShaderDataType::None => {
                            panic!("Don't know how to define attribute of this type")
                        }
                    }
                }
            }
        }

        self.unbind_vertex_buffer();
        let vertex_array = self.vertex_array_allocator.get_mut(va_handle);
        vertex_array.vertex_buffer = Some(vb_handle);
    }

    fn get_vertex_array_vertex_buffer(
        &self,
        va_handle: VertexArrayHandle,
    ) -> Option<VertexBufferHandle> {
        let va = self.vertex_array_allocator.get(va_handle);
        va.vertex_buffer
    }

    // Operations: Shaders
    fn get_shader_name(&self, handle: ShaderHandle) -> String {
        let shader = self.shader_allocator.get(handle);
        shader.name.clone()
    }

    fn shader_exists(&self, handle: ShaderHandle) -> bool {
        self.shader_allocator.is_live(handle)
    }

    fn add_shader_uniform(
        &mut self,
        handle: ShaderHandle,
        name: &str,
        data_type: ShaderDataType,
    ) -> Result<(), ShaderError> {
        let shader = self.shader_allocator.get(handle);

        if let Some(uniform_data) = shader.uniforms.get(name) {
            return Err(ShaderError::UniformAlreadyExists {
                uniform_name: name.to_string(),
                prev_type: uniform_data.data_type,
            });
        }

        // A name that is not active in the linked program is not an error:
        // it resolves to an empty slot and every set on it is a no-op
        let location = unsafe { self.gl.get_uniform_location(shader.native_program, name) };
        if location.is_none() {
            log::debug!(
                "Uniform '{}' is not active in shader '{}', sets on it will be ignored",
                name,
                shader.name
            );
        }

        let shader = self.shader_allocator.get_mut(handle);
        shader.uniforms.insert(
            name.to_string(),
            UniformData {
                data_type,
                location,
            },
        );
        Ok(())
    }

    fn set_shader_uniform_f32(&self, handle: ShaderHandle, name: &str, value: f32) {
        let uniform_data = self.get_uniform_data(handle, name, ShaderDataType::Float);
        let location = match uniform_data.location.as_ref() {
            Some(location) => location,
            None => return,
        };

        self.bind_shader(handle);
        unsafe {
            self.gl.uniform_1_f32(Some(location), value);
        }
    }

    fn set_shader_uniform_i32(&self, handle: ShaderHandle, name: &str, value: i32) {
        let uniform_data = self.get_uniform_data(handle, name, ShaderDataType::Int);
        let location = match uniform_data.location.as_ref() {
            Some(location) => location,
            None => return,
        };

        self.bind_shader(handle);
        unsafe {
            self.gl.uniform_1_i32(Some(location), value);
        }
    }

    fn set_shader_uniform_fvec2(&self, handle: ShaderHandle, name: &str, value: &glam::Vec2) {
        let uniform_data = self.get_uniform_data(handle, name, ShaderDataType::Float2);
        let location = match uniform_data.location.as_ref() {
            Some(location) => location,
            None => return,
        };

        self.bind_shader(handle);
        unsafe {
            self.gl.uniform_2_f32(Some(location), value.x, value.y);
        }
    }

    fn set_shader_uniform_fvec3(&self, handle: ShaderHandle, name: &str, value: &glam::Vec3) {
        let uniform_data = self.get_uniform_data(handle, name, ShaderDataType::Float3);
        let location = match uniform_data.location.as_ref() {
            Some(location) => location,
            None => return,
        };

        self.bind_shader(handle);
        unsafe {
            self.gl
                .uniform_3_f32(Some(location), value.x, value.y, value.z);
        }
    }

    fn set_shader_uniform_fvec4(&self, handle: ShaderHandle, name: &str, value: &glam::Vec4) {
        let uniform_data = self.get_uniform_data(handle, name, ShaderDataType::Float4);
        let location = match uniform_data.location.as_ref() {
            Some(location) => location,
            None => return,
        };

        self.bind_shader(handle);
        unsafe {
            self.gl
                .uniform_4_f32(Some(location), value.x, value.y, value.z, value.w);
        }
    }

    fn set_shader_uniform_fmat3(&self, handle: ShaderHandle, name: &str, value: &glam::Mat3) {
        let uniform_data = self.get_uniform_data(handle, name, ShaderDataType::Mat3);
        let location = match uniform_data.location.as_ref() {
            Some(location) => location,
            None => return,
        };

        self.bind_shader(handle);
        unsafe {
            self.gl
                .uniform_matrix_3_f32_slice(Some(location), false, value.as_ref().as_slice());
        }
    }

    fn set_shader_uniform_fmat4(&self, handle: ShaderHandle, name: &str, value: &glam::Mat4) {
        let uniform_data = self.get_uniform_data(handle, name, ShaderDataType::Mat4);
        let location = match uniform_data.location.as_ref() {
            Some(location) => location,
            None => return,
        };

        self.bind_shader(handle);
        unsafe {
            self.gl
                .uniform_matrix_4_f32_slice(Some(location), false, value.as_ref().as_slice());
        }
    }
}

impl OpenGLRenderBackend {
    #[inline(always)]
    fn get_string(&self, variant: u32) -> String {
        unsafe { self.gl.get_parameter_string(variant) }
    }

    #[inline(always)]
    fn get_uniform_data(
        &self,
        handle: ShaderHandle,
        name: &str,
        expected_type: ShaderDataType,
    ) -> &UniformData {
        let shader = self.shader_allocator.get(handle);
        let uniform_data = shader
            .uniforms
            .get(name)
            .expect("Trying to access unregistered uniform");
        debug_assert!(
            uniform_data.data_type == expected_type,
            "Wrong uniform type"
        );
        uniform_data
    }

    /// Compile one shader stage, turning a failed status check into the
    /// device's diagnostic text
    fn compile_stage(&self, stage: ShaderStage, source: &str) -> Result<NativeShader, ShaderError> {
        let gl = &self.gl;
        unsafe {
            let shader = gl
                .create_shader(gl_shader_type(stage))
                .expect("Could not create OpenGL shader");
            gl.shader_source(shader, source);
            gl.compile_shader(shader);

            // Check if compilation for this shader went ok
            let is_compiled = gl.get_shader_compile_status(shader);
            if !is_compiled {
                let info_log = gl.get_shader_info_log(shader);
                gl.delete_shader(shader);

                log::error!("Error compiling {} shader: {}", stage, info_log);
                return Err(ShaderError::CompilationFailed {
                    stage,
                    log: info_log,
                });
            }

            Ok(shader)
        }
    }

    /// Compile both stages and link them into a program.
    ///
    /// The program object is not created until both stages compile, so a
    /// failed build can never leak a half-initialized program handle. The
    /// vertex stage goes first: when it fails, the fragment stage is never
    /// compiled
    fn compile_and_link(
        &self,
        vertex_src: &str,
        fragment_src: &str,
    ) -> Result<NativeProgram, ShaderError> {
        let gl = &self.gl;

        let vertex_shader = self.compile_stage(ShaderStage::Vertex, vertex_src)?;
        let fragment_shader = match self.compile_stage(ShaderStage::Fragment, fragment_src) {
            Ok(shader) => shader,
            Err(error) => {
                unsafe { gl.delete_shader(vertex_shader) };
                return Err(error);
            }
        };

        unsafe {
            let program = gl
                .create_program()
                .expect("Could not create program from OpenGL");
            gl.attach_shader(program, vertex_shader);
            gl.attach_shader(program, fragment_shader);

            // Now that all shaders are compiled and attached to the program,
            // we have to link the program
            gl.link_program(program);
            let is_linked = gl.get_program_link_status(program);
            if !is_linked {
                // If not ok, clean up all the resources we have created
                let info_log = gl.get_program_info_log(program);
                gl.delete_program(program);
                gl.delete_shader(vertex_shader);
                gl.delete_shader(fragment_shader);

                log::error!("Error linking program: {}", info_log);
                return Err(ShaderError::LinkFailed { log: info_log });
            }

            // Program linking successful: the stage objects are no longer needed
            gl.detach_shader(program, vertex_shader);
            gl.detach_shader(program, fragment_shader);
            gl.delete_shader(vertex_shader);
            gl.delete_shader(fragment_shader);

            Ok(program)
        }
    }

    fn create_shader_from_code(
        &self,
        name: &str,
        vertex_src: &str,
        fragment_src: &str,
    ) -> Result<OpenGLShader, ShaderError> {
        let program = self.compile_and_link(vertex_src, fragment_src)?;
        Ok(OpenGLShader {
            name: name.to_string(),
            native_program: program,
            uniforms: HashMap::new(),
        })
    }
}

fn gl_shader_type(stage: ShaderStage) -> u32 {
    match stage {
        ShaderStage::Vertex => glow::VERTEX_SHADER,
        ShaderStage::Fragment => glow::FRAGMENT_SHADER,
    }
}

fn glow_context(context: &PossiblyCurrentContext) -> glow::Context {
    unsafe {
        glow::Context::from_loader_function_cstr(|s| context.display().get_proc_address(s).cast())
    }
}
