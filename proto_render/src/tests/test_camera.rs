use glam::{Mat4, Vec3};

use crate::core::rendering::camera::{Camera, PerspectiveParams};

#[test]
fn test_default_camera_looks_down_negative_z() {
    let camera = Camera::default();
    let view = camera.view_matrix();

    // The world origin ends up 3.5 units in front of the camera
    let origin_in_view = view.transform_point3(Vec3::ZERO);
    assert!((origin_in_view - Vec3::new(0.0, 0.0, -3.5)).length() < 1e-6);
}

#[test]
fn test_default_projection_matches_original_parameters() {
    let camera = Camera::default();
    let expected = Mat4::perspective_rh_gl(45.0_f32.to_radians(), 1.0, 0.1, 100.0);
    assert_eq!(camera.projection_matrix(), expected);
}

#[test]
fn test_same_parameters_produce_identical_matrices() {
    let params = PerspectiveParams {
        y_fov_degrees: 60.0,
        z_near: 0.5,
        z_far: 50.0,
    };
    let first = Camera::new(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO, Vec3::Y, 1.5, params);
    let second = Camera::new(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO, Vec3::Y, 1.5, params);

    assert_eq!(first.view_matrix(), second.view_matrix());
    assert_eq!(first.projection_matrix(), second.projection_matrix());
}

#[test]
fn test_aspect_ratio_changes_the_projection() {
    let mut camera = Camera::default();
    let square = camera.projection_matrix();

    camera.set_aspect_ratio(16.0 / 9.0);
    assert_ne!(camera.projection_matrix(), square);
}
