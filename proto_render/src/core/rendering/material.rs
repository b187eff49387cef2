use std::collections::HashMap;

use super::render_api::{RenderCommand, ShaderHandle};
use super::shader::ShaderDataTypeValue;

type MaterialArguments = HashMap<String, ShaderDataTypeValue>;

/// Per-draw shader inputs: a shader plus the set of uniform values to push
/// before drawing with it
#[derive(Debug, Clone)]
pub struct Material {
    shader: ShaderHandle,
    parameters: MaterialArguments,
}

impl Material {
    pub fn new(shader: ShaderHandle) -> Self {
        Material {
            shader,
            parameters: MaterialArguments::new(),
        }
    }

    /// Set a parameter for the shader in this material. The existence of the
    /// parameter is not checked in this function, but when this material gets
    /// actually applied
    pub fn set_parameter(&mut self, parameter: &str, value: ShaderDataTypeValue) {
        self.parameters
            .entry(parameter.into())
            .and_modify(|old_value| *old_value = value)
            .or_insert(value);
    }

    pub fn get_parameter(&self, parameter: &str) -> Option<&ShaderDataTypeValue> {
        self.parameters.get(parameter)
    }

    #[inline(always)]
    pub fn get_shader(&self) -> ShaderHandle {
        self.shader
    }

    /// Bind the shader and push every parameter to its uniform
    pub fn apply(&self) {
        RenderCommand::bind_shader(self.shader);
        for (name, value) in self.parameters.iter() {
            RenderCommand::set_shader_uniform(self.shader, name, value);
        }
    }
}
