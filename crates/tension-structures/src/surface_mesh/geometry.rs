//! Topology computation for surface meshes.
//!
//! Derived from the raw faces:
//! - Unique edges as sorted vertex pairs
//! - Vertex to incident-edge adjacency
//! - Flattened face-vertex (corner) list

use std::collections::HashSet;

use super::SurfaceMesh;

impl SurfaceMesh {
    /// Recomputes all derived topology.
    pub(super) fn recompute(&mut self) {
        self.compute_edges();
        self.compute_vertex_edges();
        self.compute_face_vertices();
    }

    /// Computes unique edges as sorted pairs.
    fn compute_edges(&mut self) {
        let mut edge_set: HashSet<(u32, u32)> = HashSet::new();

        for face in &self.faces {
            let n = face.len();
            for i in 0..n {
                let v0 = face[i];
                let v1 = face[(i + 1) % n];
                if v0 == v1 {
                    continue;
                }
                // Store as sorted pair to avoid duplicates
                let edge = if v0 < v1 { (v0, v1) } else { (v1, v0) };
                edge_set.insert(edge);
            }
        }

        self.edges = edge_set.into_iter().collect();
        self.edges.sort_unstable(); // Sort for deterministic ordering
    }

    /// Builds, for every vertex, the list of edge ids touching it.
    fn compute_vertex_edges(&mut self) {
        self.vertex_edges.clear();
        self.vertex_edges.resize(self.vertices.len(), Vec::new());

        for (edge_idx, &(v0, v1)) in self.edges.iter().enumerate() {
            self.vertex_edges[v0 as usize].push(edge_idx as u32);
            self.vertex_edges[v1 as usize].push(edge_idx as u32);
        }
    }

    /// Flattens faces into the global face-vertex ordering.
    fn compute_face_vertices(&mut self) {
        self.face_vertices.clear();
        self.face_vertices
            .reserve(self.faces.iter().map(Vec::len).sum());
        for face in &self.faces {
            self.face_vertices.extend_from_slice(face);
        }
    }

    /// Returns the vertex ids of every face-vertex, face by face.
    pub fn face_vertices(&self) -> &[u32] {
        &self.face_vertices
    }

    /// Returns the face index and vertex id of the global face-vertex `face_vertex`.
    pub fn face_and_vertex_index(&self, face_vertex: usize) -> Option<(usize, u32)> {
        let vertex = *self.face_vertices.get(face_vertex)?;
        let mut start = 0;
        for (face_idx, face) in self.faces.iter().enumerate() {
            if face_vertex < start + face.len() {
                return Some((face_idx, vertex));
            }
            start += face.len();
        }
        None
    }
}
