use std::f64::consts::PI;
use std::mem;

use crate::parsers::NumberOptionalNumber;
use crate::surface_utils::shared_surface::{
    box_blur, ExclusiveFilterImage, Horizontal, SharedFilterImage, Vertical,
};

use super::context::FilterContext;
use super::{FilterError, Input};

/// The maximum gaussian blur kernel size.
///
/// The value of 500 is used in webkit.
const MAXIMUM_KERNEL_SIZE: usize = 500;

/// Resolved `feGaussianBlur` primitive for rendering.
#[derive(Clone)]
pub struct GaussianBlur {
    pub in1: Input,
    pub std_deviation: NumberOptionalNumber<f64>,
}

// We need this because NumberOptionalNumber doesn't impl Default
impl Default for GaussianBlur {
    fn default() -> GaussianBlur {
        GaussianBlur {
            in1: Default::default(),
            std_deviation: NumberOptionalNumber(0.0, 0.0),
        }
    }
}

/// Returns the box blur radius that approximates a gaussian with the given
/// standard deviation when applied three times.
fn box_blur_radius(std_deviation: f64) -> usize {
    let d = (std_deviation * 3.0 * (2.0 * PI).sqrt() / 4.0 + 0.5).floor();
    let d = d.min(MAXIMUM_KERNEL_SIZE as f64);
    d as usize / 2
}

/// Applies three box blurs to approximate the gaussian blur.
///
/// Each iteration runs a horizontal pass and then a vertical pass; the
/// working and scratch buffers are swapped in between.  An axis with a zero
/// radius is skipped.
pub(super) fn three_box_blurs(
    surface: &SharedFilterImage,
    std_x: f64,
    std_y: f64,
) -> SharedFilterImage {
    let rx = if std_x > 0.0 { box_blur_radius(std_x) } else { 0 };
    let ry = if std_y > 0.0 { box_blur_radius(std_y) } else { 0 };

    if rx == 0 && ry == 0 {
        return surface.clone();
    }

    let mut surface_buf = ExclusiveFilterImage::from_image(surface);
    let mut scratch = ExclusiveFilterImage::new(surface.width(), surface.height());

    for _ in 0..3 {
        if rx > 0 {
            box_blur::<Horizontal>(&surface_buf, &mut scratch, rx);
            mem::swap(&mut surface_buf, &mut scratch);
        }

        if ry > 0 {
            box_blur::<Vertical>(&surface_buf, &mut scratch, ry);
            mem::swap(&mut surface_buf, &mut scratch);
        }
    }

    surface_buf.share()
}

impl GaussianBlur {
    pub fn render(&self, ctx: &FilterContext) -> Result<SharedFilterImage, FilterError> {
        let input_1 = ctx.get_input(&self.in1)?;

        let NumberOptionalNumber(std_x, std_y) = self.std_deviation;

        // "A negative value or a value of zero disables the effect of
        // the given filter primitive (i.e., the result is the filter
        // input image)."
        if std_x <= 0.0 && std_y <= 0.0 {
            return Ok(input_1);
        }

        Ok(three_box_blurs(&input_1, std_x.max(0.0), std_y.max(0.0)))
    }
}
