//! Color representations shared by the converter and derivers
//!
//! [`Rgb`] is an exact 8-bit triple and is what every derivation returns.
//! [`Hsl`] carries unrounded floating-point components so that chained
//! hue rotations and scalings do not accumulate rounding error.

use std::fmt;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::constants::hsl::{HUE_PERIOD, PERCENT_MAX};

/// 8-bit sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as an `[r, g, b]` array
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Lowercase `#rrggbb` form
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// CSS functional form, e.g. `rgb(52, 152, 219)`
    pub fn to_css_rgb(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// True when all three channels are equal (no defined hue)
    pub fn is_achromatic(self) -> bool {
        self.r == self.g && self.g == self.b
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for Srgb<u8> {
    fn from(color: Rgb) -> Self {
        Srgb::new(color.r, color.g, color.b)
    }
}

impl From<Srgb<u8>> for Rgb {
    fn from(color: Srgb<u8>) -> Self {
        Self::new(color.red, color.green, color.blue)
    }
}

/// Hue/saturation/lightness color
///
/// Hue is in degrees, saturation and lightness in percent. Values produced
/// by [`ColorConverter::rgb_to_hsl`](crate::ColorConverter::rgb_to_hsl) are
/// always within `[0, 360) x [0, 100] x [0, 100]`; values produced by
/// [`Hsl::scale`] may leave that range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Rotate the hue by `degrees`, wrapping into `[0, 360)`
    pub fn rotate(self, degrees: f64) -> Self {
        Self {
            h: wrap_hue(self.h + degrees),
            ..self
        }
    }

    /// Multiply saturation and lightness without clamping
    pub fn scale(self, saturation: f64, lightness: f64) -> Self {
        Self {
            s: self.s * saturation,
            l: self.l * lightness,
            ..self
        }
    }

    /// Clamp saturation and lightness into `[0, 100]` and wrap the hue
    pub fn clamped(self) -> Self {
        Self {
            h: wrap_hue(self.h),
            s: self.s.clamp(0.0, PERCENT_MAX),
            l: self.l.clamp(0.0, PERCENT_MAX),
        }
    }

    /// True when saturation or lightness lies outside `[0, 100]`
    pub fn is_out_of_range(self) -> bool {
        !(0.0..=PERCENT_MAX).contains(&self.s) || !(0.0..=PERCENT_MAX).contains(&self.l)
    }

    /// Components rounded to whole degrees and percents
    pub fn rounded(self) -> Self {
        Self {
            h: wrap_hue(self.h.round()),
            s: self.s.round(),
            l: self.l.round(),
        }
    }

    /// CSS functional form, e.g. `hsl(204, 70%, 53%)`
    pub fn to_css(self) -> String {
        let Hsl { h, s, l } = self.rounded();
        format!("hsl({}, {}%, {}%)", h, s, l)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// Wrap a hue in degrees into `[0, 360)`
pub fn wrap_hue(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(HUE_PERIOD);
    // rem_euclid can land exactly on the period for tiny negative inputs
    if wrapped >= HUE_PERIOD {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_display_is_lowercase_hex() {
        assert_eq!(Rgb::new(52, 152, 219).to_string(), "#3498db");
        assert_eq!(Rgb::new(0, 10, 255).to_hex(), "#000aff");
    }

    #[test]
    fn test_rgb_css_form() {
        assert_eq!(Rgb::new(52, 152, 219).to_css_rgb(), "rgb(52, 152, 219)");
    }

    #[test]
    fn test_palette_interop() {
        let color = Rgb::new(1, 2, 3);
        let srgb: Srgb<u8> = color.into();
        assert_eq!((srgb.red, srgb.green, srgb.blue), (1, 2, 3));
        assert_eq!(Rgb::from(srgb), color);
    }

    #[test]
    fn test_wrap_hue() {
        assert_eq!(wrap_hue(384.0), 24.0);
        assert_eq!(wrap_hue(-30.0), 330.0);
        assert_eq!(wrap_hue(360.0), 0.0);
        assert_eq!(wrap_hue(-1e-20), 0.0);
    }

    #[test]
    fn test_rotate_wraps() {
        let hsl = Hsl::new(204.0, 70.0, 53.0).rotate(180.0);
        assert!((hsl.h - 24.0).abs() < 1e-9);

        let hsl = Hsl::new(10.0, 70.0, 53.0).rotate(-60.0);
        assert!((hsl.h - 310.0).abs() < 1e-9);
    }

    #[test]
    fn test_scale_does_not_clamp() {
        let hsl = Hsl::new(0.0, 90.0, 80.0).scale(1.2, 1.3);
        assert!(hsl.s > 100.0);
        assert!(hsl.is_out_of_range());

        let clamped = hsl.clamped();
        assert_eq!(clamped.s, 100.0);
        assert_eq!(clamped.l, 100.0);
        assert!(!clamped.is_out_of_range());
    }

    #[test]
    fn test_css_hsl_rounds() {
        let hsl = Hsl::new(204.07, 69.87, 53.14);
        assert_eq!(hsl.to_css(), "hsl(204, 70%, 53%)");
        assert_eq!(Hsl::new(359.6, 0.0, 0.0).to_css(), "hsl(0, 0%, 0%)");
    }
}
