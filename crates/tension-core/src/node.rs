//! The tension node: per-instance state plus the host-facing entry points.
//!
//! A host creates one [`TensionNode`] per node instance, forwards input
//! change notifications to [`TensionNode::on_input_changed`], and calls
//! [`TensionNode::compute`] whenever it needs the output mesh.

use glam::Vec4;

use crate::color_assign::{assign_colors, assign_default_colors, ColorAssignment};
use crate::dirty::{DirtyFlags, InputSlot};
use crate::error::{Result, TensionError};
use crate::evaluator::{EvaluationStats, TensionEvaluator};
use crate::gradient::Gradient;
use crate::mesh::HostMesh;
use crate::options::TensionConfig;

/// Registered type name of the node.
pub const NODE_TYPE_NAME: &str = "tensionMap";

/// Output of [`TensionNode::compute`].
#[derive(Debug)]
pub struct ComputeOutput<M> {
    /// Copy of the deformed input, carrying tension colors on success.
    pub mesh: M,
    /// Where the colors went, or why none were written.
    pub status: Result<ColorAssignment>,
}

/// State owned by a single tension node instance.
#[derive(Debug, Clone)]
pub struct TensionNode {
    config: TensionConfig,
    dirty: DirtyFlags,
    evaluator: TensionEvaluator,
    output_stale: bool,
    color_sets_unsupported: bool,
}

impl Default for TensionNode {
    fn default() -> Self {
        Self::new()
    }
}

impl TensionNode {
    /// Creates a node with the default gradient.
    pub fn new() -> Self {
        Self::with_config(TensionConfig::default())
    }

    /// Creates a node from a saved configuration.
    pub fn with_config(config: TensionConfig) -> Self {
        Self {
            config,
            dirty: DirtyFlags::new(),
            evaluator: TensionEvaluator::new(),
            output_stale: true,
            color_sets_unsupported: false,
        }
    }

    /// Returns the node's settings.
    pub fn config(&self) -> &TensionConfig {
        &self.config
    }

    /// Returns the color gradient.
    pub fn gradient(&self) -> &Gradient {
        &self.config.gradient
    }

    /// Replaces the gradient. Cached edge lengths stay valid.
    pub fn set_gradient(&mut self, gradient: Gradient) {
        self.config.gradient = gradient;
        self.output_stale = true;
    }

    /// Edits the gradient in place. Cached edge lengths stay valid.
    pub fn edit_gradient<R>(&mut self, f: impl FnOnce(&mut Gradient) -> R) -> R {
        self.output_stale = true;
        f(&mut self.config.gradient)
    }

    /// Sets the color set written to when the output mesh has one.
    pub fn set_color_set_name(&mut self, name: impl Into<String>) {
        self.config.color_set_name = name.into();
        self.output_stale = true;
    }

    /// Records that the mesh connected to `slot` changed.
    ///
    /// Returns whether the output mesh is affected and must be recomputed.
    pub fn on_input_changed(&mut self, slot: InputSlot) -> bool {
        log::debug!("input '{slot}' changed");
        self.dirty.mark_dirty(slot);
        self.needs_compute()
    }

    /// Returns whether the cached edge lengths for `slot` are stale.
    pub fn is_dirty(&self, slot: InputSlot) -> bool {
        self.dirty.is_dirty(slot)
    }

    /// Returns whether the last output no longer reflects inputs or settings.
    pub fn needs_compute(&self) -> bool {
        self.output_stale || self.dirty.any_dirty()
    }

    /// Returns the evaluator's recomputation counters.
    pub fn stats(&self) -> EvaluationStats {
        self.evaluator.stats()
    }

    /// Returns true once the host has refused a color-set write.
    pub fn color_sets_unsupported(&self) -> bool {
        self.color_sets_unsupported
    }

    /// Produces the output mesh: a copy of `deformed` with tension colors.
    ///
    /// On a topology mismatch the copy is returned without any color write
    /// and the error is reported in `status`. This includes a deformed mesh
    /// whose vertex count no longer matches stale cached lengths.
    pub fn compute<M: HostMesh>(&mut self, orig: &M, deformed: &M) -> ComputeOutput<M> {
        let mut mesh = deformed.clone();
        self.output_stale = false;

        let report = match self.evaluator.evaluate(
            orig,
            deformed,
            &self.config.gradient,
            &mut self.dirty,
            self.config.degenerate_delta,
        ) {
            Ok(report) => report,
            Err(err) => {
                log::warn!("{err}");
                return ComputeOutput {
                    mesh,
                    status: Err(err),
                };
            }
        };

        if report.colors.len() != mesh.num_vertices() {
            let err = TensionError::TopologyMismatch {
                orig: report.colors.len(),
                deformed: mesh.num_vertices(),
            };
            log::warn!("{err}");
            return ComputeOutput {
                mesh,
                status: Err(err),
            };
        }

        let assignment = self.write_colors(&mut mesh, &report.colors);
        ComputeOutput {
            mesh,
            status: Ok(assignment),
        }
    }

    fn write_colors<M: HostMesh>(&mut self, mesh: &mut M, colors: &[Vec4]) -> ColorAssignment {
        if !self.color_sets_unsupported {
            match assign_colors(mesh, colors, &self.config.color_set_name) {
                Ok(assignment) => return assignment,
                Err(err @ TensionError::HostApiFailure(_)) => {
                    // Warn once; never retried for this node.
                    log::warn!("{err}; writing default vertex colors from now on");
                    self.color_sets_unsupported = true;
                }
                Err(err) => {
                    log::warn!("{err}; writing default vertex colors for this evaluation");
                }
            }
        }
        assign_default_colors(mesh, colors);
        ColorAssignment::DefaultChannel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color_assign::DEFAULT_COLOR_SET;
    use crate::error::TensionError;
    use crate::gradient::ControlPoint;
    use crate::testing::EdgeListMesh;
    use glam::Vec3;

    #[test]
    fn test_first_compute_writes_default_channel() {
        let cube = EdgeListMesh::unit_cube();
        let mut node = TensionNode::new();
        assert!(node.needs_compute());

        let output = node.compute(&cube, &cube);

        assert_eq!(output.status.unwrap(), ColorAssignment::DefaultChannel);
        assert!(output
            .mesh
            .default_colors()
            .iter()
            .all(|c| *c == Vec4::new(0.0, 0.0, 0.0, 1.0)));
        assert!(!node.needs_compute());
        // Inputs are never written.
        assert!(cube.default_colors().iter().all(|c| *c == Vec4::ZERO));
    }

    #[test]
    fn test_compute_uses_named_color_set() {
        let orig = EdgeListMesh::unit_cube();
        let mut deformed = orig.scaled(2.0);
        deformed.add_color_set(DEFAULT_COLOR_SET);
        let mut node = TensionNode::new();

        let output = node.compute(&orig, &deformed);

        assert_eq!(
            output.status.unwrap(),
            ColorAssignment::ColorSet(DEFAULT_COLOR_SET.to_string())
        );
        let (colors, _) = output.mesh.color_set(DEFAULT_COLOR_SET).unwrap();
        assert!(colors.iter().all(|c| *c == Vec4::new(0.0, 1.0, 0.0, 1.0)));
    }

    #[test]
    fn test_notifications_drive_recompute() {
        let orig = EdgeListMesh::unit_cube();
        let deformed = orig.scaled(1.2);
        let mut node = TensionNode::new();
        node.compute(&orig, &deformed);

        assert!(node.on_input_changed(InputSlot::Deformed));
        assert!(node.is_dirty(InputSlot::Deformed));
        assert!(!node.is_dirty(InputSlot::Orig));
        node.compute(&orig, &deformed);

        let stats = node.stats();
        assert_eq!(stats.orig_computations, 1);
        assert_eq!(stats.deformed_computations, 2);
    }

    #[test]
    fn test_gradient_edit_does_not_dirty_inputs() {
        let cube = EdgeListMesh::unit_cube();
        let mut node = TensionNode::new();
        node.compute(&cube, &cube);

        node.edit_gradient(|g| g.add_point(ControlPoint::linear(0.5, Vec3::ONE)))
            .unwrap();
        assert!(node.needs_compute());
        assert!(!node.is_dirty(InputSlot::Orig));
        assert!(!node.is_dirty(InputSlot::Deformed));

        let output = node.compute(&cube, &cube);
        assert!(output.mesh.default_colors().iter().all(|c| *c == Vec4::ONE));
        assert_eq!(node.stats().orig_computations, 1);
    }

    #[test]
    fn test_mismatch_passes_mesh_through_uncolored() {
        let orig = EdgeListMesh::unit_cube();
        let deformed = EdgeListMesh::new(vec![Vec3::ZERO, Vec3::X], vec![[0, 1]]);
        let mut node = TensionNode::new();

        let output = node.compute(&orig, &deformed);

        assert!(matches!(
            output.status,
            Err(TensionError::TopologyMismatch { .. })
        ));
        assert_eq!(output.mesh.default_colors(), deformed.default_colors());
    }

    #[test]
    fn test_host_failure_warns_once_then_falls_back() {
        let orig = EdgeListMesh::unit_cube();
        let mut deformed = orig.clone();
        deformed.add_color_set(DEFAULT_COLOR_SET);
        deformed.fail_color_set_writes();
        let mut node = TensionNode::new();

        let output = node.compute(&orig, &deformed);
        assert_eq!(output.status.unwrap(), ColorAssignment::DefaultChannel);
        assert!(node.color_sets_unsupported());
        assert!(output.mesh.default_colors().iter().all(|c| c.w == 1.0));

        let output = node.compute(&orig, &deformed);
        assert_eq!(output.status.unwrap(), ColorAssignment::DefaultChannel);
    }

    #[test]
    fn test_custom_color_set_name() {
        let orig = EdgeListMesh::unit_cube();
        let mut deformed = orig.clone();
        deformed.add_color_set("stretch");
        let mut node = TensionNode::new();
        node.set_color_set_name("stretch");

        let output = node.compute(&orig, &deformed);
        assert_eq!(
            output.status.unwrap(),
            ColorAssignment::ColorSet("stretch".into())
        );
    }

    #[test]
    fn test_resized_input_does_not_disable_color_sets() {
        let orig = EdgeListMesh::unit_cube();
        let mut cube = orig.clone();
        cube.add_color_set(DEFAULT_COLOR_SET);
        let mut node = TensionNode::new();

        let output = node.compute(&orig, &cube);
        assert_eq!(
            output.status.unwrap(),
            ColorAssignment::ColorSet(DEFAULT_COLOR_SET.to_string())
        );

        // Nine vertices arrive before the change notification: cached lengths are stale.
        let positions: Vec<Vec3> = (0..9).map(|i| Vec3::new(i as f32, 0.0, 0.0)).collect();
        let edges: Vec<[u32; 2]> = (0..8).map(|i| [i, i + 1]).collect();
        let mut resized = EdgeListMesh::new(positions, edges);
        resized.add_color_set(DEFAULT_COLOR_SET);

        let output = node.compute(&orig, &resized);
        assert!(matches!(
            output.status,
            Err(TensionError::TopologyMismatch {
                orig: 8,
                deformed: 9
            })
        ));
        assert!(output.mesh.color_set(DEFAULT_COLOR_SET).unwrap().0.is_empty());
        assert!(output.mesh.default_colors().iter().all(|c| *c == Vec4::ZERO));
        assert!(!node.color_sets_unsupported());

        node.on_input_changed(InputSlot::Orig);
        node.on_input_changed(InputSlot::Deformed);
        let output = node.compute(&orig, &cube);
        assert_eq!(
            output.status.unwrap(),
            ColorAssignment::ColorSet(DEFAULT_COLOR_SET.to_string())
        );
        assert!(!node.color_sets_unsupported());
    }

    #[test]
    fn test_non_host_write_error_is_not_latched() {
        let orig = EdgeListMesh::unit_cube();
        let mut deformed = orig.clone();
        deformed.add_color_set(DEFAULT_COLOR_SET);
        deformed.lose_color_sets_on_write();
        let mut node = TensionNode::new();

        let output = node.compute(&orig, &deformed);
        assert_eq!(output.status.unwrap(), ColorAssignment::DefaultChannel);
        assert!(output.mesh.default_colors().iter().all(|c| c.w == 1.0));
        assert!(!node.color_sets_unsupported());

        let mut healthy = orig.clone();
        healthy.add_color_set(DEFAULT_COLOR_SET);
        node.on_input_changed(InputSlot::Deformed);
        let output = node.compute(&orig, &healthy);
        assert_eq!(
            output.status.unwrap(),
            ColorAssignment::ColorSet(DEFAULT_COLOR_SET.to_string())
        );
    }
}
