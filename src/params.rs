//! Ring shape parameters

use std::f32::consts::TAU;

use serde::{Deserialize, Serialize};

/// Shape parameters shared by both ring mesh generators
///
/// All fields have defaults (a full-turn unit disc with 24 subdivisions),
/// so callers override only what they need:
///
/// ```
/// use ring_mesh::RingParams;
///
/// let params = RingParams {
///     inner_radius: 0.25,
///     subdivisions: 48,
///     ..RingParams::default()
/// };
/// ```
///
/// Degenerate values (`subdivisions == 0`, `inner_radius > radius`, a
/// zero-length arc) are accepted and produce degenerate output rather than
/// an error.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingParams {
    /// Outer ring radius
    pub radius: f32,
    /// Inner ring radius (0.0 = solid disc)
    pub inner_radius: f32,
    /// Number of angular slices; the triangle count is twice this
    pub subdivisions: u32,
    /// Arc start angle in radians
    pub start_angle: f32,
    /// Arc end angle in radians. An end angle other than
    /// `start_angle + TAU` describes an open wedge instead of a closed ring.
    pub end_angle: f32,
    /// Vertex color at the inner ring, linear RGB in [0, 1]
    /// (colored variant only)
    pub inner_color: [f32; 3],
    /// Vertex color at the outer ring, linear RGB in [0, 1]
    /// (colored variant only)
    pub outer_color: [f32; 3],
}

impl Default for RingParams {
    fn default() -> Self {
        Self {
            radius: 1.0,
            inner_radius: 0.0,
            subdivisions: 24,
            start_angle: 0.0,
            end_angle: TAU,
            inner_color: [1.0, 1.0, 1.0],
            outer_color: [0.1, 0.1, 0.1],
        }
    }
}
