/// Fixed pre-sampled vertex buffer for a flight's whole trajectory
///
/// Sampled once at setup; each tick only the lit index range and per-vertex
/// ages change, so a renderer can keep the positions on the GPU and update a
/// draw range instead of re-uploading geometry.
use std::ops::Range;

use glam::DVec3;

use super::{TrailVertex, TrailWindow};
use crate::flight::Trajectory;

/// Slack when converting window parameters to vertex indices
const INDEX_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone)]
pub struct TrailBuffer {
    resolution: usize,
    vertices: Vec<DVec3>,
    pass_times: Vec<f64>,
}

impl TrailBuffer {
    /// Sample `resolution + 1` vertices at evenly spaced curve parameters
    pub fn new(trajectory: &Trajectory, resolution: usize) -> Self {
        let resolution = resolution.max(1);
        let vertices = trajectory.sample_points(resolution);
        let pass_times = (0..=resolution)
            .map(|i| trajectory.time_at(i as f64 / resolution as f64))
            .collect();

        Self {
            resolution,
            vertices,
            pass_times,
        }
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Time at which the flight passes each vertex
    pub fn pass_times(&self) -> &[f64] {
        &self.pass_times
    }

    /// Curve parameter of vertex `index`
    pub fn param(&self, index: usize) -> f64 {
        index as f64 / self.resolution as f64
    }

    /// Indices of the vertices whose parameter lies within the window.
    ///
    /// The first lit vertex is the first one at or after `start_param` and the
    /// last is the last one at or before `end_param`. `None` if no vertex falls
    /// inside, which happens for empty or very short windows.
    pub fn lit_range(&self, window: &TrailWindow) -> Option<Range<usize>> {
        let scale = self.resolution as f64;
        let first = (window.start_param * scale - INDEX_EPSILON).ceil().max(0.0) as usize;
        let last = ((window.end_param * scale + INDEX_EPSILON).floor().max(0.0) as usize)
            .min(self.resolution);

        if first > last {
            None
        } else {
            Some(first..last + 1)
        }
    }

    /// Age of each lit vertex, 0 at the window start and 1 at its end
    pub fn ages(&self, window: &TrailWindow) -> Vec<f64> {
        let Some(range) = self.lit_range(window) else {
            return Vec::new();
        };

        let span = window.end_param - window.start_param;
        range
            .map(|i| {
                if span <= 0.0 {
                    1.0
                } else {
                    ((self.param(i) - window.start_param) / span).clamp(0.0, 1.0)
                }
            })
            .collect()
    }

    /// Lit vertices with their ages, ready for upload
    pub fn lit_vertices(&self, window: &TrailWindow) -> Vec<TrailVertex> {
        let Some(range) = self.lit_range(window) else {
            return Vec::new();
        };

        self.vertices[range]
            .iter()
            .zip(self.ages(window))
            .map(|(position, age)| TrailVertex::new(*position, age))
            .collect()
    }
}
