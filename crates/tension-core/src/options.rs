//! Persisted node configuration.

use serde::{Deserialize, Serialize};

use crate::color_assign::DEFAULT_COLOR_SET;
use crate::error::Result;
use crate::evaluator::NEUTRAL_DELTA;
use crate::gradient::Gradient;

/// User-editable settings of a tension node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TensionConfig {
    /// Color gradient that tension deltas are mapped through.
    pub gradient: Gradient,

    /// Name of the color set to write into, when the mesh has one.
    pub color_set_name: String,

    /// Delta used for vertices whose rest-pose edges have zero length.
    pub degenerate_delta: f32,
}

impl Default for TensionConfig {
    fn default() -> Self {
        Self {
            gradient: Gradient::default(),
            color_set_name: DEFAULT_COLOR_SET.to_string(),
            degenerate_delta: NEUTRAL_DELTA,
        }
    }
}

impl TensionConfig {
    /// Serializes the configuration to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
