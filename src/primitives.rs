//! Ring and disc mesh generators
//!
//! Two generation strategies for the same shape. The solid variant trades
//! buffer size for simplicity: every triangle is self-contained, so future
//! per-triangle attributes need no index rewrite. The colored variant
//! trades packing complexity for a smaller vertex buffer by sharing vertex
//! pairs between adjacent subdivisions through an index buffer. For
//! matching parameters both cover the same annulus.

use glam::Vec2;
use tracing::warn;

use crate::packing::pack_color_unorm8;
use crate::params::RingParams;
use crate::types::{ColoredRingMesh, SolidRingMesh};

/// Generate an unindexed triangle-list ring mesh
///
/// # Arguments
/// * `params` - Shape parameters; color fields are ignored
///
/// # Returns
/// Mesh with `subdivisions * 6` vertices, two triangles per subdivision,
/// drawn without an index buffer.
///
/// Degenerate parameters are accepted and produce degenerate geometry
/// (empty output for zero subdivisions, a self-intersecting ring when
/// `inner_radius > radius`) rather than an error.
pub fn generate_solid_ring(params: RingParams) -> SolidRingMesh {
    if params.subdivisions == 0 {
        warn!("generate_solid_ring: subdivisions == 0 produces an empty mesh");
    }
    if params.inner_radius > params.radius {
        warn!(
            "generate_solid_ring: inner_radius {} exceeds radius {}, ring will self-intersect",
            params.inner_radius, params.radius
        );
    }

    let RingParams {
        radius,
        inner_radius,
        subdivisions,
        start_angle,
        end_angle,
        ..
    } = params;
    let n = subdivisions as f32;

    let mut mesh = SolidRingMesh::with_capacity(subdivisions as usize * 6);

    for i in 0..subdivisions {
        let angle1 = start_angle + i as f32 * (end_angle - start_angle) / n;
        let angle2 = start_angle + (i + 1) as f32 * (end_angle - start_angle) / n;

        let cos1 = angle1.cos();
        let sin1 = angle1.sin();
        let cos2 = angle2.cos();
        let sin2 = angle2.sin();

        let outer1 = Vec2::new(cos1, sin1) * radius;
        let outer2 = Vec2::new(cos2, sin2) * radius;
        let inner1 = Vec2::new(cos1, sin1) * inner_radius;
        let inner2 = Vec2::new(cos2, sin2) * inner_radius;

        // Two triangles per subdivision, sharing the outer2/inner1 diagonal.
        // Winding stays consistent across the strip for backface culling.
        mesh.add_vertex(outer1);
        mesh.add_vertex(outer2);
        mesh.add_vertex(inner1);

        mesh.add_vertex(inner1);
        mesh.add_vertex(outer2);
        mesh.add_vertex(inner2);
    }

    mesh
}

/// Generate an indexed ring mesh with interleaved position + packed color
///
/// # Arguments
/// * `params` - Shape parameters; `inner_color`/`outer_color` are packed to
///   unorm8 per vertex
///
/// # Returns
/// Mesh with `2 * (subdivisions + 1)` vertex records and `subdivisions * 6`
/// indices. Draw with [`ColoredRingMesh::index_count`] indices.
///
/// One outer-ring and one inner-ring record are written per angular step,
/// for `subdivisions + 1` steps; the extra step duplicates the start-angle
/// geometry so a full turn closes without a seam. Degenerate parameters are
/// accepted the same way as in [`generate_solid_ring`].
pub fn generate_colored_ring(params: RingParams) -> ColoredRingMesh {
    if params.subdivisions == 0 {
        warn!("generate_colored_ring: subdivisions == 0 produces no triangles");
    }
    if params.inner_radius > params.radius {
        warn!(
            "generate_colored_ring: inner_radius {} exceeds radius {}, ring will self-intersect",
            params.inner_radius, params.radius
        );
    }

    let RingParams {
        radius,
        inner_radius,
        subdivisions,
        start_angle,
        end_angle,
        inner_color,
        outer_color,
    } = params;
    let n = subdivisions as f32;

    let outer_color = pack_color_unorm8(outer_color[0], outer_color[1], outer_color[2]);
    let inner_color = pack_color_unorm8(inner_color[0], inner_color[1], inner_color[2]);

    let mut mesh = ColoredRingMesh::with_capacity(
        (subdivisions as usize + 1) * 2,
        subdivisions as usize * 6,
    );

    for i in 0..=subdivisions {
        let angle = start_angle + i as f32 * (end_angle - start_angle) / n;

        let cos = angle.cos();
        let sin = angle.sin();

        mesh.add_vertex(Vec2::new(cos, sin) * radius, outer_color);
        mesh.add_vertex(Vec2::new(cos, sin) * inner_radius, inner_color);
    }

    for i in 0..subdivisions {
        // base indexes the outer/inner pair written at step i; the pair at
        // step i + 1 is shared with the next subdivision.
        let base = 2 * i;

        mesh.add_triangle(base, base + 1, base + 2);
        mesh.add_triangle(base + 2, base + 1, base + 3);
    }

    mesh
}
