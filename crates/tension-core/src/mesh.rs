//! Host-facing mesh traits.
//!
//! The core never owns geometry. Everything it needs from a mesh goes through
//! these two traits:
//! - [`MeshGeometry`] for reading vertex/edge topology and world-space lengths
//! - [`ColorTarget`] for discovering color sets and writing colors back
//!
//! A host mesh type implements both, plus [`Clone`] which stands in for
//! duplicating the deformed input into the output mesh.

use glam::Vec4;

use crate::error::Result;

/// Read access to mesh topology and geometry.
pub trait MeshGeometry {
    /// Returns the number of vertices.
    fn num_vertices(&self) -> usize;

    /// Returns the number of unique edges.
    fn num_edges(&self) -> usize;

    /// Returns the ids of the edges incident to `vertex`.
    ///
    /// An isolated vertex returns an empty slice.
    fn vertex_incident_edges(&self, vertex: usize) -> &[u32];

    /// Returns the world-space Euclidean length of `edge`.
    fn edge_world_length(&self, edge: usize) -> f32;
}

/// Write access to a mesh's color channels.
pub trait ColorTarget {
    /// Returns the names of all color sets on the mesh.
    fn color_set_names(&self) -> Vec<String>;

    /// Returns the total number of face-vertices (face corners) on the mesh.
    fn num_face_vertices(&self) -> usize;

    /// Returns the vertex id referenced by the global face-vertex index `face_vertex`.
    fn face_vertex_vertex_id(&self, face_vertex: usize) -> u32;

    /// Writes `colors` into the named color set and assigns each face-vertex
    /// the color index in `face_vertex_color_indices`.
    ///
    /// The color set must already exist.
    fn write_color_set(
        &mut self,
        name: &str,
        colors: &[Vec4],
        face_vertex_color_indices: &[u32],
    ) -> Result<()>;

    /// Writes `colors[i]` onto vertex `vertex_ids[i]` in the default color channel.
    ///
    /// The default channel always exists, so this cannot fail on a valid mesh.
    fn write_default_vertex_colors(&mut self, colors: &[Vec4], vertex_ids: &[u32]);
}

/// A mesh usable as a tension node input and output.
pub trait HostMesh: MeshGeometry + ColorTarget + Clone {}

impl<T: MeshGeometry + ColorTarget + Clone> HostMesh for T {}
