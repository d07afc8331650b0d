//! Ring mesh output types
//!
//! Both mesh types are plain value types, fully owned by the caller on
//! return. Vertex data is laid out exactly as it is uploaded: the solid
//! mesh is a flat position array, the colored mesh interleaves position and
//! packed color per record. `bytemuck` provides the byte views.

use bytemuck::{Pod, Zeroable, cast_slice};
use glam::Vec2;

/// Stride of one interleaved colored vertex record in bytes
pub const COLORED_VERTEX_STRIDE: usize = size_of::<ColoredVertex>();

/// Interleaved vertex record for the colored ring mesh
///
/// Two f32 position fields followed by one 32-bit slot whose four bytes are
/// packed unorm8 color channels (R, G, B, zero padding). The layout has no
/// implicit padding, so a vertex slice and its byte view alias the same
/// 12-byte-stride storage.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ColoredVertex {
    /// Position as [x, y] in the shape's local coordinate space
    pub position: [f32; 2],
    /// Packed color channels (R, G, B, padding)
    pub color: [u8; 4],
}

/// Unindexed triangle-list ring mesh (positions only)
///
/// Each subdivision contributes six fresh vertices (two triangles); nothing
/// is shared between adjacent subdivisions, which keeps every triangle
/// independent at the cost of a larger buffer.
#[derive(Clone, Debug, Default)]
pub struct SolidRingMesh {
    /// Vertex positions as [x, y]
    pub positions: Vec<[f32; 2]>,
}

impl SolidRingMesh {
    pub(crate) fn with_capacity(vertices: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices),
        }
    }

    /// Append a vertex position
    pub(crate) fn add_vertex(&mut self, position: Vec2) {
        self.positions.push(position.to_array());
    }

    /// Number of vertices to draw
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles
    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Position data as raw bytes for upload
    pub fn position_bytes(&self) -> &[u8] {
        cast_slice(&self.positions)
    }
}

/// Indexed ring mesh with interleaved position + packed color
///
/// One outer-ring and one inner-ring record per angular step; adjacent
/// subdivisions reference shared vertex pairs through the index buffer,
/// halving vertex storage relative to [`SolidRingMesh`].
#[derive(Clone, Debug, Default)]
pub struct ColoredRingMesh {
    /// Interleaved vertex records
    pub vertices: Vec<ColoredVertex>,
    /// Triangle indices, three per triangle
    pub indices: Vec<u32>,
}

impl ColoredRingMesh {
    pub(crate) fn with_capacity(vertices: usize, indices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(indices),
        }
    }

    /// Append an interleaved vertex record and return its index
    pub(crate) fn add_vertex(&mut self, position: Vec2, color: [u8; 4]) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(ColoredVertex {
            position: position.to_array(),
            color,
        });
        index
    }

    /// Append a triangle using three vertex indices
    pub(crate) fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.push(i0);
        self.indices.push(i1);
        self.indices.push(i2);
    }

    /// Number of interleaved vertex records
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of indices to draw with
    ///
    /// This is the draw count, not the vertex record count; an indexed draw
    /// call consumes this many indices.
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Interleaved vertex data as raw bytes for upload
    ///
    /// The byte view aliases the record storage: each 12-byte record holds
    /// two f32 position fields at offset 0 and four color bytes at offset 8.
    pub fn vertex_bytes(&self) -> &[u8] {
        cast_slice(&self.vertices)
    }

    /// Index data as raw bytes for upload
    pub fn index_bytes(&self) -> &[u8] {
        cast_slice(&self.indices)
    }
}
