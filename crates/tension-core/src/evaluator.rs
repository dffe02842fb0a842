//! Tension evaluation with per-input edge-length caching.
//!
//! The evaluator owns one cached edge-length array per [`InputSlot`]. On each
//! evaluation only the slots flagged dirty are recomputed, which in the common
//! playback case (static rest pose, animated deformed pose) halves the work.

use glam::{Vec3, Vec4};

use crate::dirty::{DirtyFlags, InputSlot};
use crate::edge_length::average_edge_lengths;
use crate::error::{Result, TensionError};
use crate::gradient::Gradient;
use crate::mesh::MeshGeometry;

/// Delta of a vertex whose rest and deformed lengths match.
pub const NEUTRAL_DELTA: f32 = 0.5;

/// Counters for how often the cached arrays have been rebuilt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvaluationStats {
    /// Number of times the rest-pose array was recomputed.
    pub orig_computations: usize,
    /// Number of times the deformed-pose array was recomputed.
    pub deformed_computations: usize,
    /// Number of evaluations that produced colors.
    pub evaluations: usize,
}

/// Result of a successful evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationReport {
    /// One RGBA color per vertex, alpha always 1.
    pub colors: Vec<Vec4>,
    /// One tension delta per vertex, before gradient lookup.
    pub deltas: Vec<f32>,
    /// Vertices whose delta fell back to the degenerate sentinel.
    pub degenerate_vertices: usize,
    /// Whether this evaluation rebuilt the rest-pose array.
    pub recomputed_orig: bool,
    /// Whether this evaluation rebuilt the deformed-pose array.
    pub recomputed_deformed: bool,
}

/// Per-node cache of edge-length arrays.
#[derive(Debug, Clone, Default)]
pub struct TensionEvaluator {
    orig_lengths: Vec<f32>,
    deformed_lengths: Vec<f32>,
    stats: EvaluationStats,
}

impl TensionEvaluator {
    /// Creates an evaluator with empty caches.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached edge-length array for `slot`.
    pub fn edge_lengths(&self, slot: InputSlot) -> &[f32] {
        match slot {
            InputSlot::Orig => &self.orig_lengths,
            InputSlot::Deformed => &self.deformed_lengths,
        }
    }

    /// Returns the recomputation counters.
    pub fn stats(&self) -> EvaluationStats {
        self.stats
    }

    /// Refreshes stale caches, then maps per-vertex tension through `gradient`.
    ///
    /// `degenerate_delta` replaces any delta that would be non-finite, which
    /// happens when a rest-pose average length is zero.
    ///
    /// Fails with [`TensionError::TopologyMismatch`] when the two cached
    /// arrays differ in length. The caches and flags are still updated in that
    /// case, so the next evaluation only recomputes what changes after it.
    pub fn evaluate<M: MeshGeometry + ?Sized>(
        &mut self,
        orig: &M,
        deformed: &M,
        gradient: &Gradient,
        dirty: &mut DirtyFlags,
        degenerate_delta: f32,
    ) -> Result<EvaluationReport> {
        let recomputed_orig = dirty.is_dirty(InputSlot::Orig);
        if recomputed_orig {
            self.orig_lengths = average_edge_lengths(orig);
            self.stats.orig_computations += 1;
            dirty.clear(InputSlot::Orig);
            log::debug!(
                "recomputed {} orig edge lengths from {} edges",
                self.orig_lengths.len(),
                orig.num_edges()
            );
        }

        let recomputed_deformed = dirty.is_dirty(InputSlot::Deformed);
        if recomputed_deformed {
            self.deformed_lengths = average_edge_lengths(deformed);
            self.stats.deformed_computations += 1;
            dirty.clear(InputSlot::Deformed);
            log::debug!(
                "recomputed {} deformed edge lengths from {} edges",
                self.deformed_lengths.len(),
                deformed.num_edges()
            );
        }

        if self.orig_lengths.len() != self.deformed_lengths.len() {
            return Err(TensionError::TopologyMismatch {
                orig: self.orig_lengths.len(),
                deformed: self.deformed_lengths.len(),
            });
        }

        let mut degenerate_vertices = 0;
        let deltas: Vec<f32> = self
            .orig_lengths
            .iter()
            .zip(&self.deformed_lengths)
            .map(|(&rest, &current)| {
                tension_delta(rest, current).unwrap_or_else(|| {
                    degenerate_vertices += 1;
                    degenerate_delta
                })
            })
            .collect();

        if degenerate_vertices > 0 {
            log::warn!(
                "{degenerate_vertices} vertices have degenerate rest edges; using delta {degenerate_delta}"
            );
        }

        let colors = deltas
            .iter()
            .map(|&delta| to_rgba(gradient.evaluate(delta)))
            .collect();

        self.stats.evaluations += 1;

        Ok(EvaluationReport {
            colors,
            deltas,
            degenerate_vertices,
            recomputed_orig,
            recomputed_deformed,
        })
    }
}

/// Computes `0.5 + (rest - current) / rest`.
///
/// Returns `None` when the result is not finite (zero or non-finite rest length).
pub fn tension_delta(rest: f32, current: f32) -> Option<f32> {
    let delta = NEUTRAL_DELTA + (rest - current) / rest;
    delta.is_finite().then_some(delta)
}

fn to_rgba(rgb: Vec3) -> Vec4 {
    rgb.extend(1.0)
}
