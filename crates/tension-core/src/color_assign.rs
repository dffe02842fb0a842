//! Writing per-vertex colors onto a host mesh.

use glam::Vec4;

use crate::error::Result;
use crate::mesh::ColorTarget;

/// Default name of the color set tension colors are written to.
pub const DEFAULT_COLOR_SET: &str = "tensionCS";

/// Which channel received the colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorAssignment {
    /// Written to the named, pre-existing color set.
    ColorSet(String),
    /// Written to the mesh's default vertex color channel.
    DefaultChannel,
}

/// Writes one color per vertex onto `mesh`.
///
/// If a color set called `color_set` exists, colors go there and every
/// face-vertex is pointed at its vertex's color. Color sets are never created
/// here; without one the default vertex color channel is used instead.
///
/// A failing color-set write is returned unchanged without touching the
/// default channel; see [`assign_default_colors`] for the fallback.
pub fn assign_colors<M: ColorTarget + ?Sized>(
    mesh: &mut M,
    colors: &[Vec4],
    color_set: &str,
) -> Result<ColorAssignment> {
    if !mesh.color_set_names().iter().any(|name| name == color_set) {
        log::debug!("color set '{color_set}' missing, writing default vertex colors");
        assign_default_colors(mesh, colors);
        return Ok(ColorAssignment::DefaultChannel);
    }

    let indices = face_vertex_color_indices(mesh);
    mesh.write_color_set(color_set, colors, &indices)?;

    Ok(ColorAssignment::ColorSet(color_set.to_string()))
}

/// Writes `colors` to the default vertex color channel for vertex ids `0..colors.len()`.
pub fn assign_default_colors<M: ColorTarget + ?Sized>(mesh: &mut M, colors: &[Vec4]) {
    let vertex_ids: Vec<u32> = (0..colors.len() as u32).collect();
    mesh.write_default_vertex_colors(colors, &vertex_ids);
}

/// Returns, for every face-vertex, the id of the vertex it references.
///
/// Used as the color index so all corners of a vertex share its color.
pub fn face_vertex_color_indices<M: ColorTarget + ?Sized>(mesh: &M) -> Vec<u32> {
    (0..mesh.num_face_vertices())
        .map(|fv| mesh.face_vertex_vertex_id(fv))
        .collect()
}
