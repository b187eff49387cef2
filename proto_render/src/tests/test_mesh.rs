use crate::core::rendering::mesh::{cube_layout, CUBE_FLOATS_PER_VERTEX, CUBE_VERTICES};

#[test]
fn test_cube_has_thirty_vertices() {
    assert_eq!(CUBE_VERTICES.len() % CUBE_FLOATS_PER_VERTEX, 0);
    assert_eq!(CUBE_VERTICES.len() / CUBE_FLOATS_PER_VERTEX, 30);
}

#[test]
fn test_cube_layout_matches_the_vertex_data() {
    let layout = cube_layout();
    let elements = layout.get_buffer_elements();

    assert_eq!(elements.len(), 2);
    assert_eq!(elements[0].get_name(), "vPosition");
    assert_eq!(elements[0].get_offset(), 0);
    assert_eq!(elements[1].get_name(), "vNormal");
    assert_eq!(elements[1].get_offset(), 12);
    assert_eq!(
        layout.get_stride() as usize,
        CUBE_FLOATS_PER_VERTEX * std::mem::size_of::<f32>()
    );
}

#[test]
fn test_cube_positions_stay_on_the_unit_half_cube() {
    for vertex in CUBE_VERTICES.chunks(CUBE_FLOATS_PER_VERTEX) {
        for component in &vertex[..3] {
            assert!(
                component.abs() == 0.5,
                "Position component off the cube surface: {}",
                component
            );
        }
    }
}

#[test]
fn test_cube_normals_are_unit_axis_vectors() {
    for vertex in CUBE_VERTICES.chunks(CUBE_FLOATS_PER_VERTEX) {
        let normal = glam::Vec3::new(vertex[3], vertex[4], vertex[5]);
        assert!((normal.length() - 1.0).abs() < 1e-6);

        // Face normals of an axis-aligned cube point along one axis
        let axis_components = [normal.x, normal.y, normal.z]
            .iter()
            .filter(|c| c.abs() == 1.0)
            .count();
        assert_eq!(axis_components, 1);
    }
}

#[test]
fn test_cube_has_no_bottom_face() {
    // The original geometry never included the bottom face
    for vertex in CUBE_VERTICES.chunks(CUBE_FLOATS_PER_VERTEX) {
        let normal_y = vertex[4];
        assert!(normal_y >= 0.0, "Unexpected downward-facing normal");
    }
}
