//! Buffer-backed 2D vertex-array geometry.
//!
//! The core data type is a non-owning, bounded view (`geom::VertexVec`)
//! over a caller-supplied byte buffer holding `(x, y)` pairs of `f64`.
//! Everything a spatial execution layer needs per row runs over that view:
//! measures, winding, containment, nearest-point queries, simplicity, and
//! serialization fused with bounding-box accumulation.
//!
//! The crate does no I/O and no allocation on behalf of callers; buffer
//! lifetime management stays with the enclosing envelope.

pub mod geom;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::rand::{draw_ring, ring_buffer_size, ReplayToken, RingCfg};
    pub use crate::geom::{
        closest_point_on_segment, BoundingBox, Contains, Cursor, Side, Vertex, VertexVec,
        WindingOrder, EPSILON, VERTEX_SIZE,
    };
    pub use nalgebra::Vector2 as Vec2;
}
