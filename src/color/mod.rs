//! Color representations and conversion
//!
//! This module handles hex/RGB/HSL conversion, perceptual distance,
//! and parsing of CSS color notations including named colors.

pub mod conversion;
pub mod model;
pub mod names;

pub use conversion::ColorConverter;
pub use model::{Hsl, Rgb};
pub use names::parse_css_color;
