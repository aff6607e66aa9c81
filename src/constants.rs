//! Fixed bounds and reference values for color conversion and derivation
//!
//! Channel and HSL component ranges, step-count bounds for shade/tint
//! generation, and the palette size produced by every harmony rule.

/// RGB channel bounds
pub mod rgb {
    /// Largest value an 8-bit channel can hold
    pub const CHANNEL_MAX: f64 = 255.0;

    /// Number of hexadecimal digits in a `#RRGGBB` color (without `#`)
    pub const HEX_DIGITS: usize = 6;
}

/// HSL component bounds
pub mod hsl {
    /// Hue is periodic with this period, in degrees
    pub const HUE_PERIOD: f64 = 360.0;

    /// Upper bound of saturation and lightness, in percent
    pub const PERCENT_MAX: f64 = 100.0;

    /// Cap applied to the brightened monochromatic variant
    pub const MONOCHROMATIC_LIGHTNESS_CAP: f64 = 100.0;
}

/// Shade and tint generation
pub mod steps {
    /// Smallest step count offered to users
    pub const MIN_UI_STEPS: usize = 2;

    /// Largest step count offered to users
    pub const MAX_UI_STEPS: usize = 10;

    /// Step count used when none is configured
    pub const DEFAULT_STEPS: usize = 5;

    /// Divisor of the fixed "tenths" normalization (factor = i / 10)
    pub const TENTHS_DIVISOR: f64 = 10.0;

    /// Step count of the fixed "tenths" generator
    pub const TENTHS_STEPS: usize = 9;
}

/// Number of colors in every harmony palette (base plus four derived)
pub const PALETTE_SIZE: usize = 5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_bounds() {
        assert!(steps::MIN_UI_STEPS < steps::MAX_UI_STEPS);
        assert!((steps::MIN_UI_STEPS..=steps::MAX_UI_STEPS).contains(&steps::DEFAULT_STEPS));
        assert!(steps::TENTHS_STEPS < steps::TENTHS_DIVISOR as usize);
    }

    #[test]
    fn test_component_ranges() {
        assert_eq!(rgb::CHANNEL_MAX, u8::MAX as f64);
        assert!(hsl::MONOCHROMATIC_LIGHTNESS_CAP <= hsl::PERCENT_MAX);
    }
}
