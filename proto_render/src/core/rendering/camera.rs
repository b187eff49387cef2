use glam::{Mat4, Vec3};

#[derive(Debug, Clone, Copy)]
pub struct Camera {
    position: Vec3,
    target: Vec3,
    up_vector: Vec3,
    aspect_ratio: f32,
    params: PerspectiveParams,
}

#[derive(Debug, Clone, Copy)]
pub struct PerspectiveParams {
    pub y_fov_degrees: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Camera::new(
            Vec3::new(0.0, 0.0, 3.5),
            Vec3::ZERO,
            Vec3::Y,
            1.0,
            PerspectiveParams {
                y_fov_degrees: 45.0,
                z_near: 0.1,
                z_far: 100.0,
            },
        )
    }
}

impl Camera {
    pub fn new(
        position: Vec3,
        target: Vec3,
        up_vector: Vec3,
        aspect_ratio: f32,
        params: PerspectiveParams,
    ) -> Self {
        Self {
            position,
            target,
            up_vector,
            aspect_ratio,
            params,
        }
    }

    /// Creates a transformation matrix to map from world to camera space.
    ///
    /// Returns a transformation matrix: Mw -> Mv
    /// Where   w = World space
    ///         v = View space or Camera Space
    #[inline(always)]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up_vector)
    }

    /// Creates a perspective matrix to map from view space to homogeneous
    /// clip space, following the GL convention for each axis (from -1 to 1)
    #[inline(always)]
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(
            self.params.y_fov_degrees.to_radians(),
            self.aspect_ratio,
            self.params.z_near,
            self.params.z_far,
        )
    }

    #[inline(always)]
    pub fn get_position(&self) -> Vec3 {
        self.position
    }

    #[inline(always)]
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    #[inline(always)]
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    #[inline(always)]
    pub fn set_up_vector(&mut self, new_up: Vec3) {
        self.up_vector = new_up.normalize();
    }

    #[inline(always)]
    pub fn set_aspect_ratio(&mut self, new_aspect_ratio: f32) {
        self.aspect_ratio = new_aspect_ratio;
    }
}
