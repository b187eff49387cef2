use std::collections::HashMap;

use glow::{NativeProgram, NativeUniformLocation};

use crate::core::rendering::shader::ShaderDataType;

/// A fully linked OpenGL program and its resolved uniform locations.
///
/// An instance of this type only exists for programs whose stages all
/// compiled and linked: failed builds never produce one
pub struct OpenGLShader {
    pub(super) name: String,
    pub(super) native_program: NativeProgram,
    pub(super) uniforms: HashMap<String, UniformData>,
}

/// Registered type and resolved location of one uniform.
///
/// The location is `None` when the name is not active in the linked program,
/// either because the shader text never declares it or because the compiler
/// optimized it out. Setting such a uniform is a silent no-op
pub(super) struct UniformData {
    pub(super) data_type: ShaderDataType,
    pub(super) location: Option<NativeUniformLocation>,
}
