//! Surface mesh structure.

mod color_sets;
mod geometry;

pub use color_sets::ColorSet;

use glam::{Mat4, Vec3, Vec4};
use tension_core::error::{Result, TensionError};
use tension_core::mesh::MeshGeometry;

/// Color of the default vertex channel before anything is written.
pub const DEFAULT_VERTEX_COLOR: Vec4 = Vec4::ONE;

/// A polygonal surface mesh with a model transform and color channels.
#[derive(Debug, Clone)]
pub struct SurfaceMesh {
    // Core data
    name: String,
    vertices: Vec<Vec3>,
    faces: Vec<Vec<u32>>, // Variable-length polygons
    transform: Mat4,

    // Computed data
    edges: Vec<(u32, u32)>,
    vertex_edges: Vec<Vec<u32>>,
    face_vertices: Vec<u32>,

    // Color channels
    color_sets: Vec<ColorSet>,
    vertex_colors: Vec<Vec4>,
    color_sets_locked: bool,
}

impl SurfaceMesh {
    /// Creates a new surface mesh from vertices and polygon faces.
    ///
    /// Each face is a variable-length list of vertex indices forming a polygon.
    /// Faces referencing vertices that do not exist are dropped with a warning;
    /// use [`SurfaceMesh::try_new`] to reject them instead.
    pub fn new(name: impl Into<String>, vertices: Vec<Vec3>, faces: Vec<Vec<u32>>) -> Self {
        let name = name.into();
        let num_vertices = vertices.len();
        let faces: Vec<Vec<u32>> = faces
            .into_iter()
            .enumerate()
            .filter(|(face_idx, face)| {
                let valid = face.iter().all(|&vi| (vi as usize) < num_vertices);
                if !valid {
                    log::warn!("mesh '{name}': dropping face {face_idx} with out-of-range vertex");
                }
                valid
            })
            .map(|(_, face)| face)
            .collect();
        Self::from_valid_parts(name, vertices, faces)
    }

    /// Creates a new surface mesh, failing if any face references a missing vertex.
    pub fn try_new(
        name: impl Into<String>,
        vertices: Vec<Vec3>,
        faces: Vec<Vec<u32>>,
    ) -> Result<Self> {
        for (face_idx, face) in faces.iter().enumerate() {
            if let Some(&vertex) = face.iter().find(|&&vi| vi as usize >= vertices.len()) {
                return Err(TensionError::InvalidFace {
                    face: face_idx,
                    vertex,
                    num_vertices: vertices.len(),
                });
            }
        }
        Ok(Self::from_valid_parts(name.into(), vertices, faces))
    }

    /// Creates a new surface mesh from triangles (convenience method).
    pub fn from_triangles(
        name: impl Into<String>,
        vertices: Vec<Vec3>,
        triangles: Vec<[u32; 3]>,
    ) -> Self {
        let faces: Vec<Vec<u32>> = triangles.into_iter().map(|t| t.to_vec()).collect();
        Self::new(name, vertices, faces)
    }

    fn from_valid_parts(name: String, vertices: Vec<Vec3>, faces: Vec<Vec<u32>>) -> Self {
        let vertex_colors = vec![DEFAULT_VERTEX_COLOR; vertices.len()];
        let mut mesh = Self {
            name,
            vertices,
            faces,
            transform: Mat4::IDENTITY,
            edges: Vec::new(),
            vertex_edges: Vec::new(),
            face_vertices: Vec::new(),
            color_sets: Vec::new(),
            vertex_colors,
            color_sets_locked: false,
        };
        mesh.recompute();
        mesh
    }

    /// Returns the name of this mesh.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of faces.
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Returns the vertices in object space.
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Returns the faces (polygon indices).
    pub fn faces(&self) -> &[Vec<u32>] {
        &self.faces
    }

    /// Returns the unique edges as sorted pairs. Edge ids index this slice.
    pub fn edges(&self) -> &[(u32, u32)] {
        &self.edges
    }

    /// Returns the model transform.
    pub fn transform(&self) -> Mat4 {
        self.transform
    }

    /// Sets the model transform used for world-space lengths.
    pub fn set_transform(&mut self, transform: Mat4) {
        self.transform = transform;
    }

    /// Resets the transform to identity.
    pub fn reset_transform(&mut self) {
        self.set_transform(Mat4::IDENTITY);
    }

    /// Returns the vertex positions in world space.
    pub fn world_vertices(&self) -> Vec<Vec3> {
        self.vertices
            .iter()
            .map(|&v| self.transform.transform_point3(v))
            .collect()
    }

    /// Updates the vertex positions, keeping the topology.
    ///
    /// Fails if the vertex count changes.
    pub fn update_vertices(&mut self, vertices: Vec<Vec3>) -> Result<()> {
        if vertices.len() != self.vertices.len() {
            return Err(TensionError::SizeMismatch {
                expected: self.vertices.len(),
                actual: vertices.len(),
            });
        }
        self.vertices = vertices;
        Ok(())
    }

    /// Returns a copy with every object-space position mapped through `f`.
    #[must_use]
    pub fn deformed(&self, f: impl Fn(Vec3) -> Vec3) -> Self {
        let mut mesh = self.clone();
        for v in &mut mesh.vertices {
            *v = f(*v);
        }
        mesh
    }
}

impl MeshGeometry for SurfaceMesh {
    fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    fn num_edges(&self) -> usize {
        self.edges.len()
    }

    fn vertex_incident_edges(&self, vertex: usize) -> &[u32] {
        &self.vertex_edges[vertex]
    }

    fn edge_world_length(&self, edge: usize) -> f32 {
        let (v0, v1) = self.edges[edge];
        let p0 = self.transform.transform_point3(self.vertices[v0 as usize]);
        let p1 = self.transform.transform_point3(self.vertices[v1 as usize]);
        p0.distance(p1)
    }
}
