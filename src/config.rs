//! Configuration for palette and shade/tint generation.
//!
//! The generators have two behaviours that callers may depend on either
//! way, so both are explicit settings instead of hard-coded choices:
//!
//! - [`ClampPolicy`]: whether saturation/lightness produced by palette
//!   multipliers are clamped to `[0, 100]` before conversion to RGB.
//! - [`StepNormalization`]: whether shade/tint factors are `i / (N + 1)`
//!   or fixed tenths `i / 10`.
//!
//! # Configuration Loading
//!
//! ```no_run
//! use swatch_forge::GeneratorConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = GeneratorConfig::from_json_file(Path::new("swatch.json"))?;
//!
//! // Or use defaults
//! let config = GeneratorConfig::default();
//! # Ok::<(), swatch_forge::ColorError>(())
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::steps::{DEFAULT_STEPS, TENTHS_DIVISOR};
use crate::derive::HarmonyRule;
use crate::{ColorError, Result};

/// Handling of out-of-range saturation/lightness before HSL to RGB conversion.
///
/// The RGB output is clamped to `[0, 255]` under either policy; this only
/// decides whether the HSL inputs are clamped first, which changes the
/// resulting hue/tone of over-saturated derived colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClampPolicy {
    /// Pass multiplied components through as computed
    #[default]
    Unclamped,
    /// Clamp saturation and lightness into `[0, 100]`
    Clamp,
}

/// How the interpolation factor of shade/tint step `i` is computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepNormalization {
    /// `factor = i / (N + 1)`: steps spread evenly, never reaching black/white
    #[default]
    Even,
    /// `factor = i / 10`: fixed 10% increments regardless of N
    Tenths,
}

impl StepNormalization {
    /// Interpolation factor for step `index` (1-based) out of `steps`
    pub fn factor(self, index: usize, steps: usize) -> f64 {
        match self {
            StepNormalization::Even => index as f64 / (steps + 1) as f64,
            StepNormalization::Tenths => index as f64 / TENTHS_DIVISOR,
        }
    }

    /// Largest step count this normalization supports, if bounded
    pub fn max_steps(self) -> Option<usize> {
        match self {
            StepNormalization::Even => None,
            StepNormalization::Tenths => Some(TENTHS_DIVISOR as usize),
        }
    }
}

/// Complete generator configuration.
///
/// Every field has a default, so a partial JSON document is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Clamping applied to palette-derived HSL components
    pub clamp_policy: ClampPolicy,

    /// Shade/tint interpolation factor formula
    pub normalization: StepNormalization,

    /// Number of shades and tints when the caller does not specify one
    pub default_steps: usize,

    /// Harmony rule when the caller does not specify one
    pub default_rule: HarmonyRule,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            clamp_policy: ClampPolicy::default(),
            normalization: StepNormalization::default(),
            default_steps: DEFAULT_STEPS,
            default_rule: HarmonyRule::default(),
        }
    }
}

impl GeneratorConfig {
    /// Check that the configured defaults can actually be generated
    pub fn validate(&self) -> Result<()> {
        validate_steps(self.default_steps, self.normalization)
            .map_err(|_| ColorError::invalid_parameter("default_steps", self.default_steps))
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ColorError::config_io(path, e))?;
        let config = Self::from_json_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded generator config");
        Ok(config)
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| ColorError::config_io(path, e))?;
        Ok(())
    }
}

/// Check a shade/tint step count against a normalization
pub(crate) fn validate_steps(steps: usize, normalization: StepNormalization) -> Result<()> {
    let too_many = normalization.max_steps().is_some_and(|max| steps > max);
    if steps == 0 || too_many {
        return Err(ColorError::invalid_parameter("steps", steps));
    }
    Ok(())
}
