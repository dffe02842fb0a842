//! Minimal in-crate host mesh used by unit tests.

use glam::{Vec3, Vec4};

use crate::error::{Result, TensionError};
use crate::mesh::{ColorTarget, MeshGeometry};

#[derive(Debug, Clone)]
pub(crate) struct EdgeListMesh {
    positions: Vec<Vec3>,
    edges: Vec<[u32; 2]>,
    faces: Vec<Vec<u32>>,
    vertex_edges: Vec<Vec<u32>>,
    color_sets: Vec<(String, Vec<Vec4>, Vec<u32>)>,
    default_colors: Vec<Vec4>,
    color_set_failure: Option<fn(&str) -> TensionError>,
}

impl EdgeListMesh {
    pub(crate) fn new(positions: Vec<Vec3>, edges: Vec<[u32; 2]>) -> Self {
        let mut vertex_edges = vec![Vec::new(); positions.len()];
        for (e, [a, b]) in edges.iter().enumerate() {
            vertex_edges[*a as usize].push(e as u32);
            vertex_edges[*b as usize].push(e as u32);
        }
        Self {
            default_colors: vec![Vec4::ZERO; positions.len()],
            positions,
            edges,
            faces: Vec::new(),
            vertex_edges,
            color_sets: Vec::new(),
            color_set_failure: None,
        }
    }

    /// Axis-aligned unit cube made of six quads.
    pub(crate) fn unit_cube() -> Self {
        let positions = (0..8u32)
            .map(|i| Vec3::new((i & 1) as f32, ((i >> 1) & 1) as f32, ((i >> 2) & 1) as f32))
            .collect();
        let faces: Vec<Vec<u32>> = vec![
            vec![0, 2, 6, 4],
            vec![1, 5, 7, 3],
            vec![0, 4, 5, 1],
            vec![2, 3, 7, 6],
            vec![0, 1, 3, 2],
            vec![4, 6, 7, 5],
        ];
        let mut edges: Vec<[u32; 2]> = Vec::new();
        for face in &faces {
            for i in 0..face.len() {
                let (a, b) = (face[i], face[(i + 1) % face.len()]);
                let edge = [a.min(b), a.max(b)];
                if !edges.contains(&edge) {
                    edges.push(edge);
                }
            }
        }
        let mut mesh = Self::new(positions, edges);
        mesh.faces = faces;
        mesh
    }

    pub(crate) fn scaled(&self, factor: f32) -> Self {
        let mut mesh = self.clone();
        for p in &mut mesh.positions {
            *p *= factor;
        }
        mesh
    }

    pub(crate) fn faces(&self) -> &[Vec<u32>] {
        &self.faces
    }

    pub(crate) fn add_color_set(&mut self, name: &str) {
        self.color_sets.push((name.to_string(), Vec::new(), Vec::new()));
    }

    pub(crate) fn color_set(&self, name: &str) -> Option<(&[Vec4], &[u32])> {
        self.color_sets
            .iter()
            .find(|(n, _, _)| n == name)
            .map(|(_, colors, indices)| (colors.as_slice(), indices.as_slice()))
    }

    pub(crate) fn fail_color_set_writes(&mut self) {
        fn read_only(_name: &str) -> TensionError {
            TensionError::HostApiFailure("color sets are read-only".into())
        }
        self.color_set_failure = Some(read_only as fn(&str) -> TensionError);
    }

    /// Lists color sets but reports them missing on write.
    pub(crate) fn lose_color_sets_on_write(&mut self) {
        fn missing(name: &str) -> TensionError {
            TensionError::ColorSetNotFound(name.to_string())
        }
        self.color_set_failure = Some(missing as fn(&str) -> TensionError);
    }

    pub(crate) fn default_colors(&self) -> &[Vec4] {
        &self.default_colors
    }
}

impl MeshGeometry for EdgeListMesh {
    fn num_vertices(&self) -> usize {
        self.positions.len()
    }

    fn num_edges(&self) -> usize {
        self.edges.len()
    }

    fn vertex_incident_edges(&self, vertex: usize) -> &[u32] {
        &self.vertex_edges[vertex]
    }

    fn edge_world_length(&self, edge: usize) -> f32 {
        let [a, b] = self.edges[edge];
        self.positions[a as usize].distance(self.positions[b as usize])
    }
}

impl ColorTarget for EdgeListMesh {
    fn color_set_names(&self) -> Vec<String> {
        self.color_sets.iter().map(|(n, _, _)| n.clone()).collect()
    }

    fn num_face_vertices(&self) -> usize {
        self.faces.iter().map(Vec::len).sum()
    }

    fn face_vertex_vertex_id(&self, face_vertex: usize) -> u32 {
        self.faces.iter().flatten().nth(face_vertex).copied().unwrap_or(0)
    }

    fn write_color_set(
        &mut self,
        name: &str,
        colors: &[Vec4],
        face_vertex_color_indices: &[u32],
    ) -> Result<()> {
        if let Some(failure) = self.color_set_failure {
            return Err(failure(name));
        }
        let expected = self.num_face_vertices();
        if face_vertex_color_indices.len() != expected {
            return Err(TensionError::SizeMismatch {
                expected,
                actual: face_vertex_color_indices.len(),
            });
        }
        let (_, set_colors, set_indices) = self
            .color_sets
            .iter_mut()
            .find(|(n, _, _)| n == name)
            .ok_or_else(|| TensionError::ColorSetNotFound(name.to_string()))?;
        *set_colors = colors.to_vec();
        *set_indices = face_vertex_color_indices.to_vec();
        Ok(())
    }

    fn write_default_vertex_colors(&mut self, colors: &[Vec4], vertex_ids: &[u32]) {
        for (color, &id) in colors.iter().zip(vertex_ids) {
            if let Some(slot) = self.default_colors.get_mut(id as usize) {
                *slot = *color;
            }
        }
    }
}
