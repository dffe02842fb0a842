//! Canonical meshes.

use glam::Vec3;

use crate::surface_mesh::SurfaceMesh;

/// An axis-aligned cube with edge length 1 spanning `[0, 1]^3`, built from six quads.
///
/// Vertex `i` sits at `(i & 1, (i >> 1) & 1, (i >> 2) & 1)`.
pub fn unit_cube(name: impl Into<String>) -> SurfaceMesh {
    let vertices = (0..8u32)
        .map(|i| Vec3::new((i & 1) as f32, ((i >> 1) & 1) as f32, ((i >> 2) & 1) as f32))
        .collect();
    let faces = vec![
        vec![0, 2, 6, 4], // -X
        vec![1, 5, 7, 3], // +X
        vec![0, 4, 5, 1], // -Y
        vec![2, 3, 7, 6], // +Y
        vec![0, 1, 3, 2], // -Z
        vec![4, 6, 7, 5], // +Z
    ];
    SurfaceMesh::new(name, vertices, faces)
}

/// A planar grid of `nx` by `ny` quads in the XZ plane, with the given spacing.
///
/// Vertices are numbered row by row: vertex `(i, j)` has id `j * (nx + 1) + i`.
pub fn grid(name: impl Into<String>, nx: u32, ny: u32, spacing: f32) -> SurfaceMesh {
    let mut vertices = Vec::with_capacity(((nx + 1) * (ny + 1)) as usize);
    for j in 0..=ny {
        for i in 0..=nx {
            vertices.push(Vec3::new(i as f32 * spacing, 0.0, j as f32 * spacing));
        }
    }

    let row = nx + 1;
    let mut faces = Vec::with_capacity((nx * ny) as usize);
    for j in 0..ny {
        for i in 0..nx {
            let v0 = j * row + i;
            faces.push(vec![v0, v0 + 1, v0 + row + 1, v0 + row]);
        }
    }

    SurfaceMesh::new(name, vertices, faces)
}
