mod test_buffers;
mod test_camera;
mod test_handles;
mod test_materials;
mod test_mesh;
mod test_shader_loading;
