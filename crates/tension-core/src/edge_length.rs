//! Per-vertex average incident edge length.

use crate::mesh::MeshGeometry;

/// Average length assigned to a vertex with no incident edges.
///
/// A zero rest length is later resolved by the evaluator's degenerate-delta
/// sentinel, so isolated vertices read as "no tension".
pub const ISOLATED_VERTEX_LENGTH: f32 = 0.0;

/// Computes, for every vertex, the mean world-space length of its incident edges.
///
/// The result is index-aligned with vertex ids and has exactly
/// `mesh.num_vertices()` entries. The mesh is only read.
pub fn average_edge_lengths<M: MeshGeometry + ?Sized>(mesh: &M) -> Vec<f32> {
    let num_vertices = mesh.num_vertices();
    let mut lengths = Vec::with_capacity(num_vertices);
    let mut isolated = 0usize;

    for vertex in 0..num_vertices {
        let edges = mesh.vertex_incident_edges(vertex);
        if edges.is_empty() {
            isolated += 1;
            lengths.push(ISOLATED_VERTEX_LENGTH);
            continue;
        }

        let sum: f32 = edges
            .iter()
            .map(|&edge| mesh.edge_world_length(edge as usize))
            .sum();
        lengths.push(sum / edges.len() as f32);
    }

    if isolated > 0 {
        log::debug!("{isolated} isolated vertices have no incident edges");
    }

    lengths
}
