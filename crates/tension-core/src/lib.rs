//! Core algorithms for tension-map-rs.
//!
//! This crate computes a per-vertex "tension" signal by comparing the average
//! incident edge length of every vertex between a rest and a deformed mesh,
//! maps it through a color [`Gradient`], and writes the colors back:
//! - [`MeshGeometry`] / [`ColorTarget`] traits the host mesh implements
//! - [`average_edge_lengths`] for per-vertex edge lengths
//! - [`DirtyFlags`] tracking which input changed since the last evaluation
//! - [`TensionEvaluator`] caching edge lengths per input
//! - [`assign_colors`] writing into a named color set or the default channel
//! - [`TensionNode`] bundling the above into one node instance

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
// Vertex counts fit comfortably in u32/f32
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]

pub mod color_assign;
pub mod dirty;
pub mod edge_length;
pub mod error;
pub mod evaluator;
pub mod gradient;
pub mod mesh;
pub mod node;
pub mod options;

#[cfg(test)]
mod testing;

pub use color_assign::{assign_colors, assign_default_colors, ColorAssignment, DEFAULT_COLOR_SET};
pub use dirty::{DirtyFlags, InputSlot};
pub use edge_length::{average_edge_lengths, ISOLATED_VERTEX_LENGTH};
pub use error::{Result, TensionError};
pub use evaluator::{
    tension_delta, EvaluationReport, EvaluationStats, TensionEvaluator, NEUTRAL_DELTA,
};
pub use gradient::{ControlPoint, Gradient, Interpolation};
pub use mesh::{ColorTarget, HostMesh, MeshGeometry};
pub use node::{ComputeOutput, TensionNode, NODE_TYPE_NAME};
pub use options::TensionConfig;

// Re-export glam types for convenience
pub use glam::{Mat4, Vec3, Vec4};
