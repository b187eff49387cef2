/// Math types used across the engine. We standardize on glam for
/// vector and matrix math.
pub use glam::{Mat3, Mat4, Quat, Vec2, Vec3, Vec4};

/// RGBA color with f32 components in the 0..1 range
pub type Color = glam::Vec4;
