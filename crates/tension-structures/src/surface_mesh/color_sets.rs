//! Named color sets and the default vertex color channel.

use glam::Vec4;
use tension_core::error::{Result, TensionError};
use tension_core::mesh::ColorTarget;

use super::SurfaceMesh;

/// A named per-face-vertex color channel.
///
/// Colors are stored once in `colors`; each face-vertex picks one through
/// `color_indices`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorSet {
    name: String,
    colors: Vec<Vec4>,
    color_indices: Vec<u32>,
}

impl ColorSet {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            colors: Vec::new(),
            color_indices: Vec::new(),
        }
    }

    /// Returns the name of this color set.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the color palette.
    pub fn colors(&self) -> &[Vec4] {
        &self.colors
    }

    /// Returns the palette index of every face-vertex.
    pub fn color_indices(&self) -> &[u32] {
        &self.color_indices
    }

    /// Returns the color shown at a face-vertex, if one was assigned.
    pub fn face_vertex_color(&self, face_vertex: usize) -> Option<Vec4> {
        let index = *self.color_indices.get(face_vertex)?;
        self.colors.get(index as usize).copied()
    }
}

impl SurfaceMesh {
    /// Creates an empty color set. Does nothing if it already exists.
    pub fn create_color_set(&mut self, name: impl Into<String>) {
        let name = name.into();
        if self.color_set(&name).is_none() {
            self.color_sets.push(ColorSet::new(name));
        }
    }

    /// Returns the color set called `name`.
    pub fn color_set(&self, name: &str) -> Option<&ColorSet> {
        self.color_sets.iter().find(|cs| cs.name == name)
    }

    /// Returns all color sets.
    pub fn color_sets(&self) -> &[ColorSet] {
        &self.color_sets
    }

    /// Returns the default per-vertex color channel.
    pub fn vertex_colors(&self) -> &[Vec4] {
        &self.vertex_colors
    }

    /// Makes color-set writes fail, as on hosts that refuse them.
    pub fn set_color_sets_locked(&mut self, locked: bool) {
        self.color_sets_locked = locked;
    }
}

impl ColorTarget for SurfaceMesh {
    fn color_set_names(&self) -> Vec<String> {
        self.color_sets.iter().map(|cs| cs.name.clone()).collect()
    }

    fn num_face_vertices(&self) -> usize {
        self.face_vertices.len()
    }

    fn face_vertex_vertex_id(&self, face_vertex: usize) -> u32 {
        self.face_vertices[face_vertex]
    }

    fn write_color_set(
        &mut self,
        name: &str,
        colors: &[Vec4],
        face_vertex_color_indices: &[u32],
    ) -> Result<()> {
        if self.color_sets_locked {
            return Err(TensionError::HostApiFailure(format!(
                "color set '{name}' on mesh '{}' is locked",
                self.name
            )));
        }
        if face_vertex_color_indices.len() != self.face_vertices.len() {
            return Err(TensionError::SizeMismatch {
                expected: self.face_vertices.len(),
                actual: face_vertex_color_indices.len(),
            });
        }
        if let Some(&max) = face_vertex_color_indices.iter().max() {
            if max as usize >= colors.len() {
                return Err(TensionError::SizeMismatch {
                    expected: max as usize + 1,
                    actual: colors.len(),
                });
            }
        }

        let color_set = self
            .color_sets
            .iter_mut()
            .find(|cs| cs.name == name)
            .ok_or_else(|| TensionError::ColorSetNotFound(name.to_string()))?;
        color_set.colors = colors.to_vec();
        color_set.color_indices = face_vertex_color_indices.to_vec();
        Ok(())
    }

    fn write_default_vertex_colors(&mut self, colors: &[Vec4], vertex_ids: &[u32]) {
        let mut skipped = 0usize;
        for (color, &vertex) in colors.iter().zip(vertex_ids) {
            match self.vertex_colors.get_mut(vertex as usize) {
                Some(slot) => *slot = *color,
                None => skipped += 1,
            }
        }
        if skipped > 0 {
            log::warn!("mesh '{}': skipped {skipped} out-of-range vertex colors", self.name);
        }
    }
}
