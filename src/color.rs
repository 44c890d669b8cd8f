//! Color values for flood and drop-shadow fills.

use crate::surface_utils::{srgb, FilterPixel};
use crate::util::clamp;

/// An sRGB color, as resolved by the caller's style cascade.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    #[inline]
    pub fn new(red: u8, green: u8, blue: u8) -> Color {
        Color { red, green, blue }
    }
}

/// Resolves a flood color plus opacity to a linear premultiplied pixel.
pub fn resolve_color(color: &Color, opacity: f64) -> FilterPixel {
    let alpha = clamp(opacity, 0.0, 1.0) as f32;

    FilterPixel {
        r: srgb::linearize_byte(color.red) * alpha,
        g: srgb::linearize_byte(color.green) * alpha,
        b: srgb::linearize_byte(color.blue) * alpha,
        a: alpha,
    }
}
