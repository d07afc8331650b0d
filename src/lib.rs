//! Procedural 2D ring and disc mesh generation
//!
//! This crate generates flat vertex buffers describing an annulus or disc
//! approximated by a configurable number of angular subdivisions, ready for
//! upload to a graphics device. Two generation strategies are provided:
//!
//! - [`generate_solid_ring`] - unindexed triangle list, positions only
//! - [`generate_colored_ring`] - indexed mesh with interleaved position and
//!   packed per-vertex color
//!
//! # Modules
//!
//! - [`params`] - Shape parameters with defaults ([`RingParams`])
//! - [`primitives`] - The two ring mesh generators
//! - [`types`] - Mesh output types ([`SolidRingMesh`], [`ColoredRingMesh`])
//! - [`packing`] - Color channel packing (f32 → unorm8)
//!
//! # Example
//!
//! ```
//! use ring_mesh::{RingParams, generate_colored_ring};
//!
//! let mesh = generate_colored_ring(RingParams {
//!     inner_radius: 0.5,
//!     ..RingParams::default()
//! });
//! assert_eq!(mesh.index_count(), 24 * 6);
//! ```

pub mod packing;
pub mod params;
pub mod primitives;
pub mod types;

pub use packing::{f32_to_unorm8, pack_color_unorm8};
pub use params::RingParams;
pub use primitives::{generate_colored_ring, generate_solid_ring};
pub use types::{COLORED_VERTEX_STRIDE, ColoredRingMesh, ColoredVertex, SolidRingMesh};
