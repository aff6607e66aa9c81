//! Harmony palette derivation
//!
//! A harmony rule is a fixed table of four (hue offset, saturation factor,
//! lightness factor) variations applied to the base color in HSL space.
//! The base color is converted to HSL once; each variation is converted
//! back to RGB independently.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::{ColorConverter, Hsl, Rgb};
use crate::config::{ClampPolicy, GeneratorConfig};
use crate::constants::hsl::MONOCHROMATIC_LIGHTNESS_CAP;
use crate::constants::PALETTE_SIZE;
use crate::{ColorError, Result};

/// Strategy for selecting related colors on the color wheel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HarmonyRule {
    #[default]
    Complementary,
    Triadic,
    Analogous,
    Monochromatic,
    SplitComplementary,
}

/// One derived color of a harmony rule, relative to the base in HSL
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variation {
    /// Degrees added to the base hue (wrapped into `[0, 360)`)
    pub hue_offset: f64,
    /// Multiplier applied to base saturation
    pub saturation: f64,
    /// Multiplier applied to base lightness
    pub lightness: f64,
    /// Upper bound applied to the multiplied lightness, if any
    pub lightness_cap: Option<f64>,
}

impl Variation {
    const fn new(hue_offset: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue_offset,
            saturation,
            lightness,
            lightness_cap: None,
        }
    }

    const fn capped(self, cap: f64) -> Self {
        Self {
            lightness_cap: Some(cap),
            ..self
        }
    }

    /// Apply this variation to a base color
    pub fn apply(&self, base: Hsl) -> Hsl {
        let mut hsl = base
            .rotate(self.hue_offset)
            .scale(self.saturation, self.lightness);
        if let Some(cap) = self.lightness_cap {
            hsl.l = hsl.l.min(cap);
        }
        hsl
    }
}

const COMPLEMENTARY: [Variation; 4] = [
    Variation::new(180.0, 1.0, 1.0),
    Variation::new(0.0, 0.7, 1.2),
    Variation::new(180.0, 0.7, 1.2),
    Variation::new(0.0, 0.5, 0.8),
];

const TRIADIC: [Variation; 4] = [
    Variation::new(120.0, 1.0, 1.0),
    Variation::new(240.0, 1.0, 1.0),
    Variation::new(0.0, 0.6, 1.1),
    Variation::new(120.0, 0.6, 1.1),
];

const ANALOGOUS: [Variation; 4] = [
    Variation::new(30.0, 1.0, 1.0),
    Variation::new(-30.0, 1.0, 1.0),
    Variation::new(60.0, 0.8, 1.0),
    Variation::new(-60.0, 0.8, 1.0),
];

const MONOCHROMATIC: [Variation; 4] = [
    Variation::new(0.0, 1.0, 1.3).capped(MONOCHROMATIC_LIGHTNESS_CAP),
    Variation::new(0.0, 1.0, 0.7),
    Variation::new(0.0, 0.6, 1.0),
    Variation::new(0.0, 1.2, 0.5),
];

const SPLIT_COMPLEMENTARY: [Variation; 4] = [
    Variation::new(150.0, 1.0, 1.0),
    Variation::new(210.0, 1.0, 1.0),
    Variation::new(0.0, 0.7, 1.1),
    Variation::new(180.0, 0.5, 0.9),
];

impl HarmonyRule {
    /// Every supported rule, in display order
    pub const ALL: [HarmonyRule; 5] = [
        HarmonyRule::Complementary,
        HarmonyRule::Triadic,
        HarmonyRule::Analogous,
        HarmonyRule::Monochromatic,
        HarmonyRule::SplitComplementary,
    ];

    /// The four variations that produce this rule's derived colors
    pub fn variations(self) -> &'static [Variation; 4] {
        match self {
            HarmonyRule::Complementary => &COMPLEMENTARY,
            HarmonyRule::Triadic => &TRIADIC,
            HarmonyRule::Analogous => &ANALOGOUS,
            HarmonyRule::Monochromatic => &MONOCHROMATIC,
            HarmonyRule::SplitComplementary => &SPLIT_COMPLEMENTARY,
        }
    }

    /// Kebab-case name, as used in configuration and on the command line
    pub fn name(self) -> &'static str {
        match self {
            HarmonyRule::Complementary => "complementary",
            HarmonyRule::Triadic => "triadic",
            HarmonyRule::Analogous => "analogous",
            HarmonyRule::Monochromatic => "monochromatic",
            HarmonyRule::SplitComplementary => "split-complementary",
        }
    }
}

impl fmt::Display for HarmonyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HarmonyRule {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        HarmonyRule::ALL
            .into_iter()
            .find(|rule| rule.name() == wanted)
            .ok_or_else(|| ColorError::UnknownHarmonyRule { name: s.to_string() })
    }
}

/// Base color followed by the four colors derived from it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub rule: HarmonyRule,
    pub colors: [Rgb; PALETTE_SIZE],
}

impl Palette {
    /// The input color, always first
    pub fn base(&self) -> Rgb {
        self.colors[0]
    }

    /// The four derived colors, in table order
    pub fn derived(&self) -> &[Rgb] {
        &self.colors[1..]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rgb> {
        self.colors.iter()
    }

    /// Colors as lowercase `#rrggbb` strings
    pub fn to_hex_strings(&self) -> Vec<String> {
        self.colors.iter().map(|c| c.to_hex()).collect()
    }
}

/// Palette generator for the five harmony rules
#[derive(Debug, Clone, Copy, Default)]
pub struct PaletteDeriver {
    converter: ColorConverter,
}

impl PaletteDeriver {
    /// Create a deriver that leaves multiplied components unclamped
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clamp_policy(policy: ClampPolicy) -> Self {
        Self {
            converter: ColorConverter::with_clamp_policy(policy),
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::with_clamp_policy(config.clamp_policy)
    }

    /// Derive a palette from an RGB base color
    pub fn derive(&self, base: Rgb, rule: HarmonyRule) -> Palette {
        let policy = self.converter.clamp_policy();
        tracing::debug!(%base, %rule, ?policy, "deriving harmony palette");

        let base_hsl = self.converter.rgb_to_hsl(base);
        let mut colors = [base; PALETTE_SIZE];

        for (slot, variation) in colors[1..].iter_mut().zip(rule.variations()) {
            let hsl = variation.apply(base_hsl);
            if policy == ClampPolicy::Unclamped && hsl.is_out_of_range() {
                tracing::warn!(
                    %base,
                    %rule,
                    saturation = hsl.s,
                    lightness = hsl.l,
                    "derived color outside HSL range, passing through unclamped"
                );
            }
            *slot = self.converter.hsl_to_rgb(hsl);
            tracing::trace!(color = %slot, ?hsl, "derived palette color");
        }

        Palette { rule, colors }
    }

    /// Derive a palette from a `#RRGGBB` base color
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHex`] if `hex` is malformed.
    pub fn derive_hex(&self, hex: &str, rule: HarmonyRule) -> Result<Palette> {
        let base = self.converter.hex_to_rgb(hex)?;
        Ok(self.derive(base, rule))
    }
}
