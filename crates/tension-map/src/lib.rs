//! tension-map-rs: per-vertex tension colors for deforming meshes.
//!
//! Compares each vertex's average incident edge length between a rest pose and
//! a deformed pose, maps the relative change through a color gradient, and
//! writes the colors onto a copy of the deformed mesh.
//!
//! # Quick Start
//!
//! ```no_run
//! use tension_map::*;
//!
//! fn main() -> Result<()> {
//!     init();
//!
//!     let rest = shapes::unit_cube("rest");
//!     let posed = rest.deformed(|v| v * Vec3::new(1.5, 1.0, 1.0));
//!
//!     let mut node = TensionNode::new();
//!     let output = node.compute(&rest, &posed);
//!     println!("colors written to {:?}", output.status?);
//!
//!     // Only the deformed pose moves during playback.
//!     node.on_input_changed(InputSlot::Deformed);
//!     let _next = node.compute(&rest, &posed);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Delta
//!
//! For vertex `i` with rest length `r` and deformed length `d`, the gradient
//! is sampled at `0.5 + (r - d) / r`: 0.5 means unchanged, lower values mean
//! stretched, higher values mean compressed. The default gradient is green at
//! 0, black at 0.5 and red at 1.

use std::fs;
use std::path::Path;

pub use tension_core::{
    assign_colors, average_edge_lengths, tension_delta, ColorAssignment, ColorTarget,
    ComputeOutput, ControlPoint, DirtyFlags, EvaluationReport, EvaluationStats, Gradient,
    HostMesh, InputSlot, Interpolation, MeshGeometry, Result, TensionConfig, TensionError,
    TensionEvaluator, TensionNode, DEFAULT_COLOR_SET, NEUTRAL_DELTA, NODE_TYPE_NAME,
};
pub use tension_core::{Mat4, Vec3, Vec4};
pub use tension_structures::{shapes, ColorSet, SurfaceMesh, DEFAULT_VERTEX_COLOR};

/// Initializes logging from `RUST_LOG`. Safe to call more than once.
pub fn init() {
    let _ = env_logger::try_init();
    log::info!("tension-map-rs initialized");
}

/// Computes tension colors for a single pair of meshes without caching.
pub fn compute_tension_colors<M: MeshGeometry + ?Sized>(
    orig: &M,
    deformed: &M,
    gradient: &Gradient,
) -> Result<Vec<Vec4>> {
    Ok(evaluate_once(orig, deformed, gradient)?.colors)
}

/// Computes raw tension deltas for a single pair of meshes without caching.
pub fn compute_tension_deltas<M: MeshGeometry + ?Sized>(
    orig: &M,
    deformed: &M,
) -> Result<Vec<f32>> {
    Ok(evaluate_once(orig, deformed, &Gradient::default())?.deltas)
}

fn evaluate_once<M: MeshGeometry + ?Sized>(
    orig: &M,
    deformed: &M,
    gradient: &Gradient,
) -> Result<EvaluationReport> {
    let mut dirty = DirtyFlags::new();
    TensionEvaluator::new().evaluate(orig, deformed, gradient, &mut dirty, NEUTRAL_DELTA)
}

/// Loads a node configuration from a JSON file.
pub fn load_config(path: impl AsRef<Path>) -> Result<TensionConfig> {
    let json = fs::read_to_string(path.as_ref())?;
    let config = TensionConfig::from_json(&json)?;
    log::debug!(
        "loaded config with {} gradient points from {}",
        config.gradient.len(),
        path.as_ref().display()
    );
    Ok(config)
}

/// Saves a node configuration as a JSON file.
pub fn save_config(path: impl AsRef<Path>, config: &TensionConfig) -> Result<()> {
    fs::write(path.as_ref(), config.to_json()?)?;
    Ok(())
}
