//! # Swatch Forge
//!
//! Color conversion and palette generation for color picker tools.
//!
//! This library provides:
//! - Conversion between `#RRGGBB` hex, RGB, HSL and CIE Lab
//! - Five-color harmony palettes (complementary, triadic, analogous,
//!   monochromatic, split-complementary)
//! - Shades and tints by linear interpolation toward black and white
//! - Parsing of CSS color notations, including named colors
//!
//! All operations are pure: results are returned as values and nothing is
//! cached between calls.
//!
//! ## Example
//!
//! ```rust
//! use swatch_forge::{generate_palette, HarmonyRule};
//!
//! let palette = generate_palette("#3498db", HarmonyRule::Complementary)?;
//! assert_eq!(palette.to_hex_strings()[0], "#3498db");
//! assert_eq!(palette.to_hex_strings()[1], "#db7734");
//! # Ok::<(), swatch_forge::ColorError>(())
//! ```

use palette::Lab;
use serde::{Deserialize, Serialize};

pub mod color;
pub mod config;
pub mod constants;
pub mod derive;
pub mod error;

pub use color::{ColorConverter, Hsl, Rgb};
pub use config::{ClampPolicy, GeneratorConfig, StepNormalization};
pub use derive::{HarmonyRule, Palette, PaletteDeriver, ShadeTintDeriver, ShadeTintSet};
pub use error::{ColorError, Result};

/// Every representation of a single color, as shown by the converter tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorInfo {
    /// Lowercase `#rrggbb`
    pub hex: String,
    pub rgb: Rgb,
    /// Unrounded HSL; use [`Hsl::to_css`] for display
    pub hsl: Hsl,
    /// CIE Lab coordinates (D65)
    pub lab: Lab,
    /// CSS keyword for this exact color, if one exists
    pub name: Option<String>,
}

/// Describe a color given in any supported CSS notation
///
/// # Errors
///
/// Returns [`ColorError::UnknownColor`] if `input` is not a recognized color.
pub fn describe(input: &str) -> Result<ColorInfo> {
    let rgb = color::parse_css_color(input)?;
    let converter = ColorConverter::new();

    Ok(ColorInfo {
        hex: rgb.to_hex(),
        rgb,
        hsl: converter.rgb_to_hsl(rgb),
        lab: converter.rgb_to_lab(rgb),
        name: color::names::name_of(rgb).map(str::to_string),
    })
}

/// Derive a harmony palette from a `#RRGGBB` color with default settings
pub fn generate_palette(hex: &str, rule: HarmonyRule) -> Result<Palette> {
    PaletteDeriver::new().derive_hex(hex, rule)
}

/// Derive shades and tints of a `#RRGGBB` color with default settings
pub fn generate_shades(hex: &str, steps: usize) -> Result<ShadeTintSet> {
    ShadeTintDeriver::new().derive_hex(hex, steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_named_color() {
        let info = describe("RebeccaPurple").unwrap();
        assert_eq!(info.hex, "#663399");
        assert_eq!(info.rgb, Rgb::new(102, 51, 153));
        assert_eq!(info.hsl.to_css(), "hsl(270, 50%, 40%)");
        assert_eq!(info.name.as_deref(), Some("rebeccapurple"));
    }

    #[test]
    fn test_describe_unnamed_color() {
        let info = describe("#3498db").unwrap();
        assert_eq!(info.name, None);
        assert!(info.lab.l > 50.0 && info.lab.l < 70.0);
    }

    #[test]
    fn test_color_info_serialization() {
        let info = describe("hsl(204, 70%, 53%)").unwrap();

        let json = serde_json::to_string(&info).unwrap();
        let deserialized: ColorInfo = serde_json::from_str(&json).unwrap();

        assert_eq!(info, deserialized);
    }

    #[test]
    fn test_convenience_entry_points() {
        assert_eq!(generate_palette("#3498db", HarmonyRule::Triadic).unwrap().colors.len(), 5);
        assert_eq!(generate_shades("#3498db", 3).unwrap().steps(), 3);
        assert!(generate_palette("nope", HarmonyRule::Triadic).is_err());
    }
}
