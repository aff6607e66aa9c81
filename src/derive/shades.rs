//! Shade and tint generation by linear RGB interpolation
//!
//! Shades blend the base toward black, tints toward white. Step `i` of `N`
//! uses the factor given by the configured [`StepNormalization`]; index 0
//! of each sequence is the step closest to the base.

use serde::{Deserialize, Serialize};

use crate::color::conversion::to_channel;
use crate::color::{ColorConverter, Rgb};
use crate::config::{validate_steps, GeneratorConfig, StepNormalization};
use crate::constants::rgb::CHANNEL_MAX;
use crate::Result;

/// Darker and lighter variants of a base color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadeTintSet {
    pub base: Rgb,
    pub normalization: StepNormalization,
    /// Blends toward black, subtlest first
    pub shades: Vec<Rgb>,
    /// Blends toward white, subtlest first
    pub tints: Vec<Rgb>,
}

impl ShadeTintSet {
    /// Number of steps in each sequence
    pub fn steps(&self) -> usize {
        self.shades.len()
    }

    /// Perceptual distance (ΔE76) of every shade and tint from the base
    pub fn divergence(&self) -> (Vec<f32>, Vec<f32>) {
        let converter = ColorConverter::new();
        let from_base = |colors: &[Rgb]| {
            colors
                .iter()
                .map(|&c| converter.distance(self.base, c))
                .collect::<Vec<_>>()
        };
        (from_base(&self.shades), from_base(&self.tints))
    }
}

/// Shade/tint generator
#[derive(Debug, Clone, Copy, Default)]
pub struct ShadeTintDeriver {
    converter: ColorConverter,
    normalization: StepNormalization,
}

impl ShadeTintDeriver {
    /// Create a deriver using evenly spread `i / (N + 1)` factors
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_normalization(normalization: StepNormalization) -> Self {
        Self {
            normalization,
            ..Self::default()
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::with_normalization(config.normalization)
    }

    pub fn normalization(&self) -> StepNormalization {
        self.normalization
    }

    /// Generate `steps` shades and `steps` tints of `base`
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidParameter`](crate::ColorError::InvalidParameter)
    /// if `steps` is zero, or exceeds 10 under [`StepNormalization::Tenths`].
    pub fn derive(&self, base: Rgb, steps: usize) -> Result<ShadeTintSet> {
        validate_steps(steps, self.normalization)?;
        tracing::debug!(%base, steps, normalization = ?self.normalization, "deriving shades and tints");

        let (shades, tints): (Vec<Rgb>, Vec<Rgb>) = (1..=steps)
            .map(|i| {
                let factor = self.normalization.factor(i, steps);
                (shade(base, factor), tint(base, factor))
            })
            .unzip();

        Ok(ShadeTintSet {
            base,
            normalization: self.normalization,
            shades,
            tints,
        })
    }

    /// Generate shades and tints of a `#RRGGBB` base color
    pub fn derive_hex(&self, hex: &str, steps: usize) -> Result<ShadeTintSet> {
        let base = self.converter.hex_to_rgb(hex)?;
        self.derive(base, steps)
    }
}

fn blend(base: Rgb, f: impl Fn(f64) -> f64) -> Rgb {
    let [r, g, b] = base.channels().map(|c| to_channel(f(f64::from(c))));
    Rgb::new(r, g, b)
}

/// Blend toward black by `factor`
fn shade(base: Rgb, factor: f64) -> Rgb {
    blend(base, |c| c * (1.0 - factor))
}

/// Blend toward white by `factor`
fn tint(base: Rgb, factor: f64) -> Rgb {
    blend(base, |c| c + (CHANNEL_MAX - c) * factor)
}
