//! Utility functions for dealing with sRGB colors.
//!
//! The constant values in this module are taken from
//! <http://www.color.org/chardata/rgb/srgb.xalter>

use crate::util::clamp;

// Include the byte linearization table.
include!(concat!(env!("OUT_DIR"), "/srgb-codegen.rs"));

/// Converts an sRGB color value to a linear sRGB color value (undoes the
/// gamma correction).
///
/// The input and the output are supposed to be in the [0, 1] range.
#[inline]
pub fn linearize(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Converts a linear sRGB color value to a normal sRGB color value (applies
/// the gamma correction).
///
/// The input and the output are supposed to be in the [0, 1] range.
#[inline]
pub fn unlinearize(c: f32) -> f32 {
    if c <= 0.0031308 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// Looks up the linear value for an sRGB byte.
#[inline]
pub fn linearize_byte(c: u8) -> f32 {
    LINEARIZE[usize::from(c)]
}

/// Quantizes a color value to a byte, clamping it to the [0, 1] range first.
#[inline]
pub fn to_byte(c: f32) -> u8 {
    (clamp(c, 0.0, 1.0) * 255.0).round() as u8
}
