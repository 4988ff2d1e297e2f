pub mod coordinates;
pub mod geodesy;
pub mod units;

pub use coordinates::*;
pub use geodesy::*;
pub use units::*;

use glam::{DVec3, Vec3};

/// Conversions between the f64 simulation space and f32 render space
pub trait SceneMath {
    /// Convert a double-precision scene position to single precision for upload
    fn to_render_coords(&self) -> Vec3;
}

impl SceneMath for DVec3 {
    fn to_render_coords(&self) -> Vec3 {
        self.as_vec3()
    }
}

/// Scalar linear interpolation, shared by the densifier and the time lookup
#[inline]
pub fn lerp(a: f64, b: f64, fraction: f64) -> f64 {
    a + (b - a) * fraction
}
