//! Derivation of related colors from a base color
//!
//! Harmony palettes rotate and scale the base in HSL space; shades and
//! tints interpolate it toward black and white in RGB space.

pub mod harmony;
pub mod shades;

pub use harmony::{HarmonyRule, Palette, PaletteDeriver};
pub use shades::{ShadeTintDeriver, ShadeTintSet};
