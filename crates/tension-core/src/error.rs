//! Error types for tension-map-rs.

use thiserror::Error;

/// The main error type for tension-map-rs operations.
#[derive(Error, Debug)]
pub enum TensionError {
    /// The rest and deformed meshes do not share vertex topology.
    #[error("edge count doesn't match: orig has {orig} vertices, deformed has {deformed}")]
    TopologyMismatch { orig: usize, deformed: usize },

    /// The host refused an operation (e.g. writing a color set).
    #[error("host API failure: {0}")]
    HostApiFailure(String),

    /// A color set with the given name does not exist on the mesh.
    #[error("color set '{0}' not found")]
    ColorSetNotFound(String),

    /// Data size mismatch.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// A gradient control point had an invalid position or color.
    #[error("invalid control point: {0}")]
    InvalidControlPoint(String),

    /// No control point exists at the given index.
    #[error("control point {0} not found")]
    ControlPointNotFound(usize),

    /// A face references a vertex that does not exist.
    #[error("face {face} references vertex {vertex}, but the mesh has {num_vertices} vertices")]
    InvalidFace {
        face: usize,
        vertex: u32,
        num_vertices: usize,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for tension-map-rs operations.
pub type Result<T> = std::result::Result<T, TensionError>;
