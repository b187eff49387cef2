use std::mem::size_of;

use super::buffer::{BufferElement, BufferLayout};
use super::render_api::{RenderCommand, VertexArrayHandle, VertexBufferHandle};
use super::shader::ShaderDataType;

/// A static piece of geometry, uploaded to the GPU once at construction.
/// Vertex data is interleaved in a single buffer described by a
/// [BufferLayout]
pub struct Mesh {
    vertex_array: VertexArrayHandle,
    vertex_buffer: VertexBufferHandle,
    vertex_count: i32,
}

impl Mesh {
    /// Upload interleaved vertex data described by `layout`
    pub fn from_vertices(vertex_data: &[f32], layout: BufferLayout) -> Self {
        let floats_per_vertex = layout.get_stride() as usize / size_of::<f32>();
        debug_assert!(
            floats_per_vertex > 0 && vertex_data.len() % floats_per_vertex == 0,
            "Vertex data doesn't match the buffer layout"
        );
        let vertex_count = (vertex_data.len() / floats_per_vertex) as i32;

        let vertex_buffer = RenderCommand::create_vertex_buffer(vertex_data);
        RenderCommand::set_vertex_buffer_layout(vertex_buffer, layout);

        let vertex_array = RenderCommand::create_vertex_array();
        RenderCommand::set_vertex_array_vertex_buffer(vertex_array, vertex_buffer);
        RenderCommand::unbind_vertex_array();

        Mesh {
            vertex_array,
            vertex_buffer,
            vertex_count,
        }
    }

    /// The demo cube: position + normal per vertex, no bottom face
    pub fn cube() -> Self {
        Self::from_vertices(&CUBE_VERTICES, cube_layout())
    }

    pub fn draw(&self) {
        RenderCommand::draw_arrays(self.vertex_array, self.vertex_count);
        RenderCommand::unbind_vertex_array();
    }

    #[inline(always)]
    pub fn get_vertex_count(&self) -> i32 {
        self.vertex_count
    }

    /// Free the GPU resources backing this mesh
    pub fn destroy(self) {
        RenderCommand::destroy_vertex_array(self.vertex_array);
        RenderCommand::destroy_vertex_buffer(self.vertex_buffer);
    }
}

pub(crate) fn cube_layout() -> BufferLayout {
    BufferLayout::from_elements(vec![
        BufferElement::new("vPosition".to_owned(), ShaderDataType::Float3, false),
        BufferElement::new("vNormal".to_owned(), ShaderDataType::Float3, false),
    ])
}

pub(crate) const CUBE_FLOATS_PER_VERTEX: usize = 6;

/// Interleaved vertex data for the cube: position (x, y, z) followed by the
/// face normal (x, y, z). 30 vertices, two triangles per face. The bottom
/// face was never part of the original geometry
pub(crate) const CUBE_VERTICES: [f32; 30 * CUBE_FLOATS_PER_VERTEX] = [
    // Front face (+z)
    -0.5, 0.5, 0.5, 0.0, 0.0, 1.0,
    -0.5, -0.5, 0.5, 0.0, 0.0, 1.0,
    0.5, 0.5, 0.5, 0.0, 0.0, 1.0,
    //
    -0.5, -0.5, 0.5, 0.0, 0.0, 1.0,
    0.5, -0.5, 0.5, 0.0, 0.0, 1.0,
    0.5, 0.5, 0.5, 0.0, 0.0, 1.0,
    // Right face (+x)
    0.5, 0.5, 0.5, 1.0, 0.0, 0.0,
    0.5, -0.5, 0.5, 1.0, 0.0, 0.0,
    0.5, 0.5, -0.5, 1.0, 0.0, 0.0,
    //
    0.5, -0.5, 0.5, 1.0, 0.0, 0.0,
    0.5, -0.5, -0.5, 1.0, 0.0, 0.0,
    0.5, 0.5, -0.5, 1.0, 0.0, 0.0,
    // Left face (-x)
    -0.5, 0.5, 0.5, -1.0, 0.0, 0.0,
    -0.5, 0.5, -0.5, -1.0, 0.0, 0.0,
    -0.5, -0.5, 0.5, -1.0, 0.0, 0.0,
    //
    -0.5, -0.5, 0.5, -1.0, 0.0, 0.0,
    -0.5, 0.5, -0.5, -1.0, 0.0, 0.0,
    -0.5, -0.5, -0.5, -1.0, 0.0, 0.0,
    // Back face (-z)
    0.5, 0.5, -0.5, 0.0, 0.0, -1.0,
    0.5, -0.5, -0.5, 0.0, 0.0, -1.0,
    -0.5, 0.5, -0.5, 0.0, 0.0, -1.0,
    //
    -0.5, 0.5, -0.5, 0.0, 0.0, -1.0,
    0.5, -0.5, -0.5, 0.0, 0.0, -1.0,
    -0.5, -0.5, -0.5, 0.0, 0.0, -1.0,
    // Top face (+y)
    -0.5, 0.5, -0.5, 0.0, 1.0, 0.0,
    -0.5, 0.5, 0.5, 0.0, 1.0, 0.0,
    0.5, 0.5, -0.5, 0.0, 1.0, 0.0,
    //
    0.5, 0.5, -0.5, 0.0, 1.0, 0.0,
    -0.5, 0.5, 0.5, 0.0, 1.0, 0.0,
    0.5, 0.5, 0.5, 0.0, 1.0, 0.0,
];
