use nalgebra::{Matrix3, Matrix4x5, Matrix5, Vector5};

use crate::parse_identifiers;
use crate::parsers::{Parse, ParseError};
use crate::surface_utils::iterators::Pixels;
use crate::surface_utils::shared_surface::{ExclusiveFilterImage, SharedFilterImage};
use crate::surface_utils::{FilterPixel, ImageDataExt};
use crate::util::clamp;

use super::context::FilterContext;
use super::{FilterError, Input};

/// Color matrix operation types.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub enum OperationType {
    #[default]
    Matrix,
    Saturate,
    HueRotate,
    LuminanceToAlpha,
}

/// Resolved `feColorMatrix` primitive for rendering.
#[derive(Clone)]
pub struct ColorMatrix {
    pub in1: Input,
    pub matrix: Matrix5<f64>,
}

impl Default for ColorMatrix {
    fn default() -> ColorMatrix {
        ColorMatrix {
            in1: Default::default(),

            // nalgebra's Default for Matrix5 is all zeroes, so we actually need this :(
            matrix: Matrix5::identity(),
        }
    }
}

impl ColorMatrix {
    /// Builds the 5×5 matrix for the given operation type and values list.
    ///
    /// An empty values list yields the operation's identity; a `matrix`
    /// list of the wrong length is zero-padded or truncated to 20 entries.
    pub fn resolve_matrix(operation_type: OperationType, values: &[f64]) -> Matrix5<f64> {
        use OperationType::*;

        match operation_type {
            Matrix => {
                if values.is_empty() {
                    Self::default_matrix()
                } else {
                    let mut padded = [0.0; 20];
                    for (dest, src) in padded.iter_mut().zip(values.iter()) {
                        *dest = *src;
                    }
                    Self::matrix_from_values(&padded)
                }
            }

            Saturate => Self::saturate_matrix(values.first().copied().unwrap_or(1.0)),

            HueRotate => {
                Self::hue_rotate_matrix(values.first().copied().unwrap_or(0.0).to_radians())
            }

            LuminanceToAlpha => Self::luminance_to_alpha_matrix(),
        }
    }

    fn matrix_from_values(values: &[f64; 20]) -> Matrix5<f64> {
        let matrix = Matrix4x5::from_row_slice(values);
        let mut matrix: Matrix5<f64> = matrix.fixed_resize(0.0);
        matrix[(4, 4)] = 1.0;
        matrix
    }

    pub fn render(&self, ctx: &FilterContext) -> Result<SharedFilterImage, FilterError> {
        let input_1 = ctx.get_input(&self.in1)?;

        let mut surface = ExclusiveFilterImage::new(input_1.width(), input_1.height());

        surface.modify(&mut |data, stride| {
            for (x, y, pixel) in Pixels::new(&input_1) {
                // Fully transparent pixels stay fully transparent.
                if pixel.a <= 0.0 {
                    continue;
                }

                let alpha = f64::from(pixel.a);
                let pixel_vec = Vector5::new(
                    f64::from(pixel.r) / alpha,
                    f64::from(pixel.g) / alpha,
                    f64::from(pixel.b) / alpha,
                    alpha,
                    1.0,
                );

                let mut new_pixel_vec = Vector5::zeros();
                self.matrix.mul_to(&pixel_vec, &mut new_pixel_vec);

                let new_alpha = clamp(new_pixel_vec[3], 0.0, 1.0);

                // Color channels are deliberately not clamped here; the
                // final sRGB conversion clamps.
                let output_pixel = FilterPixel {
                    r: (new_pixel_vec[0] * new_alpha) as f32,
                    g: (new_pixel_vec[1] * new_alpha) as f32,
                    b: (new_pixel_vec[2] * new_alpha) as f32,
                    a: new_alpha as f32,
                };

                data.set_pixel(stride, output_pixel, x, y);
            }
        });

        Ok(surface.share())
    }

    /// Compute a `type="hueRotate"` matrix.
    ///
    /// <https://drafts.fxtf.org/filter-effects/#element-attrdef-fecolormatrix-values>
    #[rustfmt::skip]
    pub fn hue_rotate_matrix(radians: f64) -> Matrix5<f64> {
        let (sin, cos) = radians.sin_cos();

        let a = Matrix3::new(
            0.213, 0.715, 0.072,
            0.213, 0.715, 0.072,
            0.213, 0.715, 0.072,
        );

        let b = Matrix3::new(
             0.787, -0.715, -0.072,
            -0.213,  0.285, -0.072,
            -0.213, -0.715,  0.928,
        );

        let c = Matrix3::new(
            -0.213, -0.715,  0.928,
             0.143,  0.140, -0.283,
            -0.787,  0.715,  0.072,
        );

        let top_left = a + b * cos + c * sin;

        let mut matrix: Matrix5<f64> = top_left.fixed_resize(0.0);
        matrix[(3, 3)] = 1.0;
        matrix[(4, 4)] = 1.0;
        matrix
    }

    /// Compute a `type="luminanceToAlpha"` matrix.
    ///
    /// <https://drafts.fxtf.org/filter-effects/#element-attrdef-fecolormatrix-values>
    #[rustfmt::skip]
    fn luminance_to_alpha_matrix() -> Matrix5<f64> {
        Matrix5::new(
            0.0,    0.0,    0.0,    0.0, 0.0,
            0.0,    0.0,    0.0,    0.0, 0.0,
            0.0,    0.0,    0.0,    0.0, 0.0,
            0.2125, 0.7154, 0.0721, 0.0, 0.0,
            0.0,    0.0,    0.0,    0.0, 1.0,
        )
    }

    /// Compute a `type="saturate"` matrix.
    ///
    /// <https://drafts.fxtf.org/filter-effects/#element-attrdef-fecolormatrix-values>
    #[rustfmt::skip]
    fn saturate_matrix(s: f64) -> Matrix5<f64> {
        Matrix5::new(
            0.213 + 0.787 * s, 0.715 - 0.715 * s, 0.072 - 0.072 * s, 0.0, 0.0,
            0.213 - 0.213 * s, 0.715 + 0.285 * s, 0.072 - 0.072 * s, 0.0, 0.0,
            0.213 - 0.213 * s, 0.715 - 0.715 * s, 0.072 + 0.928 * s, 0.0, 0.0,
            0.0,               0.0,               0.0,               1.0, 0.0,
            0.0,               0.0,               0.0,               0.0, 1.0,
        )
    }

    /// Default for `type="matrix"`.
    ///
    /// <https://drafts.fxtf.org/filter-effects/#element-attrdef-fecolormatrix-values>
    fn default_matrix() -> Matrix5<f64> {
        Matrix5::identity()
    }
}

impl Parse for OperationType {
    fn parse_str(s: &str) -> Result<Self, ParseError> {
        parse_identifiers!(
            s,
            "matrix" => OperationType::Matrix,
            "saturate" => OperationType::Saturate,
            "hueRotate" => OperationType::HueRotate,
            "luminanceToAlpha" => OperationType::LuminanceToAlpha,
        )
    }
}
