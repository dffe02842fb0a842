//! Piecewise color gradient.
//!
//! A [`Gradient`] is an ordered list of [`ControlPoint`]s. Evaluating it at a
//! position finds the bracketing pair of points and blends their colors with
//! the lower point's [`Interpolation`] mode. Positions outside the first/last
//! point clamp to the boundary color.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TensionError};

/// Interpolation mode of a gradient segment, taken from its lower control point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Interpolation {
    /// Step: hold the lower point's color until the next point.
    None,
    /// Per-channel linear blend.
    #[default]
    Linear,
    /// Linear fraction eased through `3t^2 - 2t^3`.
    Smooth,
    /// Catmull-Rom style cubic using neighbouring points for tangents.
    Spline,
}

/// A single gradient stop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    /// Position along the gradient, in `[0, 1]`.
    pub position: f32,
    /// RGB color, each channel in `[0, 1]`.
    pub value: Vec3,
    /// How the segment starting at this point is blended.
    pub interpolation: Interpolation,
}

impl ControlPoint {
    /// Creates a control point.
    pub fn new(position: f32, value: Vec3, interpolation: Interpolation) -> Self {
        Self {
            position,
            value,
            interpolation,
        }
    }

    /// Creates a linearly interpolated control point.
    pub fn linear(position: f32, value: Vec3) -> Self {
        Self::new(position, value, Interpolation::Linear)
    }

    fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.position) {
            return Err(TensionError::InvalidControlPoint(format!(
                "position {} is outside [0, 1]",
                self.position
            )));
        }
        if !self.value.is_finite()
            || self.value.min_element() < 0.0
            || self.value.max_element() > 1.0
        {
            return Err(TensionError::InvalidControlPoint(format!(
                "color {} is outside [0, 1]",
                self.value
            )));
        }
        Ok(())
    }
}

/// An ordered, editable color gradient.
///
/// Points are kept sorted by position. Points sharing a position keep the
/// order in which they were supplied; when evaluating exactly at a shared
/// position the later one wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ControlPoint>", into = "Vec<ControlPoint>")]
pub struct Gradient {
    points: Vec<ControlPoint>,
}

impl Default for Gradient {
    /// Green at 0.0, black at 0.5, red at 1.0, all linear.
    fn default() -> Self {
        Self {
            points: vec![
                ControlPoint::linear(0.0, Vec3::new(0.0, 1.0, 0.0)),
                ControlPoint::linear(0.5, Vec3::ZERO),
                ControlPoint::linear(1.0, Vec3::new(1.0, 0.0, 0.0)),
            ],
        }
    }
}

impl TryFrom<Vec<ControlPoint>> for Gradient {
    type Error = TensionError;

    fn try_from(points: Vec<ControlPoint>) -> Result<Self> {
        Self::from_points(points)
    }
}

impl From<Gradient> for Vec<ControlPoint> {
    fn from(gradient: Gradient) -> Self {
        gradient.points
    }
}

impl Gradient {
    /// Creates a gradient with no control points. Evaluates to black.
    pub fn empty() -> Self {
        Self { points: Vec::new() }
    }

    /// Creates a gradient from control points in any order.
    pub fn from_points(mut points: Vec<ControlPoint>) -> Result<Self> {
        for point in &points {
            point.validate()?;
        }
        // Stable, so ties keep source order.
        points.sort_by(|a, b| a.position.total_cmp(&b.position));
        Ok(Self { points })
    }

    /// Returns the control points in position order.
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Returns the number of control points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the gradient has no control points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Inserts a control point, returning its index in position order.
    pub fn add_point(&mut self, point: ControlPoint) -> Result<usize> {
        point.validate()?;
        let index = self
            .points
            .partition_point(|p| p.position <= point.position);
        self.points.insert(index, point);
        Ok(index)
    }

    /// Removes and returns the control point at `index`.
    pub fn remove_point(&mut self, index: usize) -> Result<ControlPoint> {
        if index >= self.points.len() {
            return Err(TensionError::ControlPointNotFound(index));
        }
        Ok(self.points.remove(index))
    }

    /// Replaces the control point at `index`, returning its new index.
    pub fn set_point(&mut self, index: usize, point: ControlPoint) -> Result<usize> {
        if index >= self.points.len() {
            return Err(TensionError::ControlPointNotFound(index));
        }
        point.validate()?;
        self.points.remove(index);
        self.add_point(point)
    }

    /// Evaluates the gradient at `position`.
    ///
    /// Any finite or infinite position is accepted; values beyond the
    /// boundary points clamp to the boundary colors. NaN evaluates to the
    /// first color.
    pub fn evaluate(&self, position: f32) -> Vec3 {
        let (Some(first), Some(last)) = (self.points.first(), self.points.last()) else {
            return Vec3::ZERO;
        };

        if position.is_nan() || position < first.position {
            return first.value;
        }
        if position >= last.position {
            return last.value;
        }

        // first.position <= position < last.position, so 1 <= upper < len.
        let upper = self.points.partition_point(|p| p.position <= position);
        let lower = upper - 1;
        let p0 = &self.points[lower];
        let p1 = &self.points[upper];
        let t = (position - p0.position) / (p1.position - p0.position);

        match p0.interpolation {
            Interpolation::None => p0.value,
            Interpolation::Linear => p0.value.lerp(p1.value, t),
            Interpolation::Smooth => p0.value.lerp(p1.value, smoothstep(t)),
            Interpolation::Spline => self.spline(lower, t),
        }
    }

    /// Samples `n` evenly spaced colors across `[0, 1]`.
    pub fn sample_n(&self, n: usize) -> Vec<Vec3> {
        match n {
            0 => Vec::new(),
            1 => vec![self.evaluate(0.0)],
            _ => (0..n)
                .map(|i| self.evaluate(i as f32 / (n - 1) as f32))
                .collect(),
        }
    }

    /// Cubic Hermite blend of segment `lower..lower + 1`.
    ///
    /// Missing neighbours at the ends are replaced by ghost points extrapolated
    /// along the segment, so an isolated segment is exactly linear.
    fn spline(&self, lower: usize, t: f32) -> Vec3 {
        let p0 = &self.points[lower];
        let p1 = &self.points[lower + 1];

        let (x_prev, v_prev) = match lower.checked_sub(1).map(|i| &self.points[i]) {
            Some(prev) => (prev.position, prev.value),
            None => (
                2.0 * p0.position - p1.position,
                2.0 * p0.value - p1.value,
            ),
        };
        let (x_next, v_next) = match self.points.get(lower + 2) {
            Some(next) => (next.position, next.value),
            None => (
                2.0 * p1.position - p0.position,
                2.0 * p1.value - p0.value,
            ),
        };

        let width = p1.position - p0.position;
        let chord = p1.value - p0.value;
        let m0 = tangent(x_prev, v_prev, p1.position, p1.value, width, chord);
        let m1 = tangent(p0.position, p0.value, x_next, v_next, width, chord);

        let t2 = t * t;
        let t3 = t2 * t;
        let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
        let h10 = t3 - 2.0 * t2 + t;
        let h01 = -2.0 * t3 + 3.0 * t2;
        let h11 = t3 - t2;

        (p0.value * h00 + m0 * h10 + p1.value * h01 + m1 * h11).clamp(Vec3::ZERO, Vec3::ONE)
    }
}

/// Finite-difference slope between two stops, scaled to a segment of `width`.
fn tangent(xa: f32, va: Vec3, xb: f32, vb: Vec3, width: f32, chord: Vec3) -> Vec3 {
    let span = xb - xa;
    if span <= f32::EPSILON {
        // Coincident neighbours.
        return chord;
    }
    (vb - va) / span * width
}

fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}
