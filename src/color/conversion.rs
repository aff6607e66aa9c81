//! Color space conversion utilities
//!
//! Provides conversions between the representations used by the tools:
//! - `#RRGGBB` hex strings to and from 8-bit RGB
//! - RGB to HSL and back (standard colorimetric formulas)
//! - RGB to CIE Lab for perceptual distance
//!
//! Every conversion that yields RGB rounds and clamps each channel into
//! `[0, 255]`, so any HSL input (including out-of-range values produced
//! by palette multipliers) maps to a renderable color.

use palette::{FromColor, Lab, Srgb};

use crate::color::model::{wrap_hue, Hsl, Rgb};
use crate::config::ClampPolicy;
use crate::constants::hsl::{HUE_PERIOD, PERCENT_MAX};
use crate::constants::rgb::{CHANNEL_MAX, HEX_DIGITS};
use crate::{ColorError, Result};

/// Converter between hex, RGB, HSL and Lab
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorConverter {
    /// Policy applied to saturation/lightness before HSL to RGB conversion
    hsl_clamp: ClampPolicy,
}

impl ColorConverter {
    /// Create a converter that passes HSL components through unclamped
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with an explicit HSL clamping policy
    pub fn with_clamp_policy(hsl_clamp: ClampPolicy) -> Self {
        Self { hsl_clamp }
    }

    pub fn clamp_policy(&self) -> ClampPolicy {
        self.hsl_clamp
    }

    /// Parse a `#RRGGBB` hex string into RGB
    ///
    /// The leading `#` is optional and digits are case-insensitive.
    /// Shorthand (`#abc`), alpha, and surrounding whitespace are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHex`] if the input does not match
    /// `#?[0-9a-fA-F]{6}`.
    pub fn hex_to_rgb(&self, hex: &str) -> Result<Rgb> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != HEX_DIGITS || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::invalid_hex(hex));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ColorError::invalid_hex(hex))
        };

        Ok(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Format real-valued channels as a lowercase `#rrggbb` string
    ///
    /// Each channel is rounded to the nearest integer and clamped into
    /// `[0, 255]`; NaN maps to 0.
    pub fn rgb_to_hex(&self, r: f64, g: f64, b: f64) -> String {
        Rgb::new(to_channel(r), to_channel(g), to_channel(b)).to_hex()
    }

    /// Convert RGB to HSL
    ///
    /// Hue is in `[0, 360)`, saturation and lightness in `[0, 100]`.
    /// Achromatic colors (all channels equal) have hue and saturation 0.
    pub fn rgb_to_hsl(&self, rgb: Rgb) -> Hsl {
        let r = f64::from(rgb.r) / CHANNEL_MAX;
        let g = f64::from(rgb.g) / CHANNEL_MAX;
        let b = f64::from(rgb.b) / CHANNEL_MAX;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if rgb.is_achromatic() {
            return Hsl::new(0.0, 0.0, l * PERCENT_MAX);
        }

        let delta = max - min;
        let s = if l > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let sector = if rgb.r >= rgb.g && rgb.r >= rgb.b {
            (g - b) / delta + if g < b { 6.0 } else { 0.0 }
        } else if rgb.g >= rgb.b {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        Hsl::new(
            wrap_hue(sector * (HUE_PERIOD / 6.0)),
            s * PERCENT_MAX,
            l * PERCENT_MAX,
        )
    }

    /// Convert HSL to RGB
    ///
    /// The hue is wrapped into `[0, 360)` first. Saturation and lightness
    /// are clamped to `[0, 100]` only under [`ClampPolicy::Clamp`]; the
    /// resulting channels are always rounded and clamped into `[0, 255]`.
    pub fn hsl_to_rgb(&self, hsl: Hsl) -> Rgb {
        let hsl = match self.hsl_clamp {
            ClampPolicy::Clamp => hsl.clamped(),
            ClampPolicy::Unclamped => hsl,
        };

        let h = wrap_hue(hsl.h) / HUE_PERIOD;
        let s = hsl.s / PERCENT_MAX;
        let l = hsl.l / PERCENT_MAX;

        if s == 0.0 {
            let gray = to_channel(l * CHANNEL_MAX);
            return Rgb::new(gray, gray, gray);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Rgb::new(
            to_channel(hue_to_channel(p, q, h + 1.0 / 3.0) * CHANNEL_MAX),
            to_channel(hue_to_channel(p, q, h) * CHANNEL_MAX),
            to_channel(hue_to_channel(p, q, h - 1.0 / 3.0) * CHANNEL_MAX),
        )
    }

    /// Convert RGB (0-255) to Lab color space under D65
    pub fn rgb_to_lab(&self, rgb: Rgb) -> Lab {
        let srgb = Srgb::new(
            rgb.r as f32 / 255.0,
            rgb.g as f32 / 255.0,
            rgb.b as f32 / 255.0,
        );
        Lab::from_color(srgb)
    }

    /// Compute Delta E (CIE76) between two Lab colors
    pub fn delta_e(&self, lab1: Lab, lab2: Lab) -> f32 {
        let dl = lab1.l - lab2.l;
        let da = lab1.a - lab2.a;
        let db = lab1.b - lab2.b;
        (dl * dl + da * da + db * db).sqrt()
    }

    /// Perceptual distance between two RGB colors
    pub fn distance(&self, a: Rgb, b: Rgb) -> f32 {
        self.delta_e(self.rgb_to_lab(a), self.rgb_to_lab(b))
    }
}

/// Piecewise helper of the HSL to RGB formula; `t` is a hue in turns
fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Round a real-valued channel and clamp it into `[0, 255]`
pub(crate) fn to_channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, CHANNEL_MAX) as u8
}
