//! Mesh structures for tension-map-rs.
//!
//! [`SurfaceMesh`] is an in-memory polygon mesh that plays the host role for
//! the tension core: it answers topology and world-space length queries and
//! stores named color sets plus a default per-vertex color channel.

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
// Mesh indices are u32 by convention
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]

pub mod shapes;
pub mod surface_mesh;

pub use surface_mesh::{ColorSet, SurfaceMesh, DEFAULT_VERTEX_COLOR};
