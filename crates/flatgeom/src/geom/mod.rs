//! Flat vertex-array geometry core.
//!
//! Purpose
//! - Provide the buffer-backed vertex sequence (`VertexVec`) behind line
//!   strings and polygon rings, plus the per-row algorithms that run over
//!   it: length, signed area, winding, containment, nearest point/segment,
//!   simplicity, and serialization fused with bounding-box accumulation.
//!
//! Why this design
//! - The view never owns storage: the enclosing envelope's arena does. One
//!   geometry buffer can be re-sliced into many ring views without copying,
//!   and distinct buffers can be processed fully in parallel.
//! - Contract violations (bad index, over-capacity append) fail fast via
//!   `assert!`; the hot path cannot afford recoverable-error plumbing for
//!   conditions that are programming errors.
//!
//! Code cross-refs: `Vertex`, `VertexVec`, `Cursor`, `BoundingBox`.

pub mod bounds;
pub mod cursor;
pub mod rand;
pub mod vertex;
pub mod vertex_vec;

pub use bounds::BoundingBox;
pub use cursor::Cursor;
pub use vertex::{closest_point_on_segment, Side, Vertex, EPSILON};
pub use vertex_vec::{Contains, VertexVec, WindingOrder, VERTEX_SIZE};
