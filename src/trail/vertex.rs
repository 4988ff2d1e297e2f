use bytemuck::{Pod, Zeroable};
use glam::DVec3;

use super::TrailSample;
use crate::math::SceneMath;

/// Reduced precision trail vertex for rendering
/// Uses f32 for GPU compatibility; `age` drives the fade along the trail
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct TrailVertex {
    pub position: [f32; 3],
    pub age: f32,
}

impl TrailVertex {
    pub fn new(position: DVec3, age: f64) -> Self {
        Self {
            position: position.to_render_coords().to_array(),
            age: age as f32,
        }
    }
}

impl From<&TrailSample> for TrailVertex {
    fn from(sample: &TrailSample) -> Self {
        Self::new(sample.position, sample.age)
    }
}
