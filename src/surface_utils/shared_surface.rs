//! Shared access to the pipeline's intermediate images.

use std::cmp::{max, min};
use std::rc::Rc;

use crate::rect::Rect;
use crate::util::clamp;

use super::canvas::Canvas;
use super::srgb;
use super::{CanvasARGB, FilterPixel, PixelOps};

/// Alpha values below this are written out as fully transparent pixels.
const ALPHA_THRESHOLD: f32 = 1e-4;

/// Porter-Duff and blend operators over premultiplied pixels.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Operator {
    Over,
    In,
    Out,
    Atop,
    Xor,
    Multiply,
    Screen,
    Darken,
    Lighten,
}

impl Operator {
    fn compose_pixel(self, s: FilterPixel, d: FilterPixel) -> FilterPixel {
        use Operator::*;

        match self {
            Over | In | Out | Atop | Xor => {
                let (fa, fb) = match self {
                    Over => (1.0, 1.0 - s.a),
                    In => (d.a, 0.0),
                    Out => (1.0 - d.a, 0.0),
                    Atop => (d.a, 1.0 - s.a),
                    Xor => (1.0 - d.a, 1.0 - s.a),
                    _ => unreachable!(),
                };

                FilterPixel {
                    r: s.r * fa + d.r * fb,
                    g: s.g * fa + d.g * fb,
                    b: s.b * fa + d.b * fb,
                    a: s.a * fa + d.a * fb,
                }
            }

            Multiply | Screen | Darken | Lighten => {
                let su = s.unpremultiply();
                let du = d.unpremultiply();

                let f = |s_: f32, d_: f32| match self {
                    Multiply => s_ * d_,
                    Screen => s_ + d_ - s_ * d_,
                    Darken => s_.min(d_),
                    Lighten => s_.max(d_),
                    _ => unreachable!(),
                };

                // Premultiplied form of the blend equation.
                let channel =
                    |f_: f32, sc: f32, dc: f32| f_ * s.a * d.a + sc * (1.0 - d.a) + dc * (1.0 - s.a);

                FilterPixel {
                    r: channel(f(su.r, du.r), s.r, d.r),
                    g: channel(f(su.g, du.g), s.g, d.g),
                    b: channel(f(su.b, du.b), s.b, d.b),
                    a: s.a + d.a - s.a * d.a,
                }
            }
        }
    }
}

/// Wrapper for an immutable image of linear premultiplied pixels that
/// allows shared access.
///
/// Filter intermediates are shared between the context's named results and
/// the last-result slot.  This wrapper hands out cheap clones and doesn't
/// permit modifying the pixels, so a published result can never change
/// under a downstream primitive.
#[derive(Debug, Clone)]
pub struct SharedFilterImage {
    data: Rc<[FilterPixel]>,
    width: i32,
    height: i32,
}

/// A mutable image of linear premultiplied pixels.
///
/// This is the builder for [`SharedFilterImage`]: a primitive renders into
/// an exclusive image and then [`share`](ExclusiveFilterImage::share)s it
/// to publish the result.
#[derive(Debug)]
pub struct ExclusiveFilterImage {
    data: Vec<FilterPixel>,
    width: i32,
    height: i32,
}

impl SharedFilterImage {
    /// Creates a fully transparent image.
    ///
    /// # Panics
    /// Panics if either dimension is not positive.
    pub fn empty(width: i32, height: i32) -> SharedFilterImage {
        ExclusiveFilterImage::new(width, height).share()
    }

    /// Returns the image width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Returns the image height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Retrieves the pixel value at the given coordinates.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> FilterPixel {
        assert!(x < self.width as u32);
        assert!(y < self.height as u32);

        self.data[y as usize * self.width as usize + x as usize]
    }

    #[inline]
    pub(crate) fn data(&self) -> &[FilterPixel] {
        &self.data
    }

    /// Converts a canvas of premultiplied sRGB bytes into a linear
    /// premultiplied float image.
    ///
    /// Fully opaque pixels take their bytes straight through the
    /// linearization table; everything else is unpremultiplied, linearized
    /// and premultiplied again.
    pub fn from_canvas(canvas: &Canvas) -> SharedFilterImage {
        let width = canvas.width();
        let height = canvas.height();
        assert!(width > 0);
        assert!(height > 0);

        let mut data = vec![FilterPixel::default(); width as usize * height as usize];

        for y in 0..height {
            let row = canvas.row(y);
            let out = &mut data[y as usize * width as usize..][..width as usize];

            for (pixel, out) in row.iter().zip(out.iter_mut()) {
                *out = match pixel.a {
                    255 => FilterPixel {
                        r: srgb::linearize_byte(pixel.r),
                        g: srgb::linearize_byte(pixel.g),
                        b: srgb::linearize_byte(pixel.b),
                        a: 1.0,
                    },

                    0 => FilterPixel::default(),

                    a => {
                        let alpha = f32::from(a) / 255.0;
                        let compute = |c: u8| srgb::linearize(f32::from(c) / 255.0 / alpha) * alpha;

                        FilterPixel {
                            r: compute(pixel.r),
                            g: compute(pixel.g),
                            b: compute(pixel.b),
                            a: alpha,
                        }
                    }
                };
            }
        }

        SharedFilterImage {
            data: data.into(),
            width,
            height,
        }
    }

    /// Converts the image back to a canvas of premultiplied sRGB bytes,
    /// placed at the given extents.
    pub fn to_canvas(&self, extents: Rect) -> Canvas {
        let mut canvas = Canvas::new(self.width, self.height, extents);

        for y in 0..self.height {
            let row = &self.data[y as usize * self.width as usize..][..self.width as usize];
            let out = canvas.row_mut(y);

            for (pixel, out) in row.iter().zip(out.iter_mut()) {
                let a = clamp(pixel.a, 0.0, 1.0);

                *out = if a >= 1.0 {
                    CanvasARGB {
                        r: srgb::to_byte(srgb::unlinearize(clamp(pixel.r, 0.0, 1.0))),
                        g: srgb::to_byte(srgb::unlinearize(clamp(pixel.g, 0.0, 1.0))),
                        b: srgb::to_byte(srgb::unlinearize(clamp(pixel.b, 0.0, 1.0))),
                        a: 255,
                    }
                } else if a > ALPHA_THRESHOLD {
                    let compute = |c: f32| srgb::to_byte(srgb::unlinearize(clamp(c / a, 0.0, 1.0)) * a);

                    CanvasARGB {
                        r: compute(pixel.r),
                        g: compute(pixel.g),
                        b: compute(pixel.b),
                        a: srgb::to_byte(a),
                    }
                } else {
                    CanvasARGB::default()
                };
            }
        }

        canvas
    }

    /// Returns an image with black color and the alpha channel of this
    /// image.
    pub fn extract_alpha(&self) -> SharedFilterImage {
        let data: Vec<FilterPixel> = self
            .data
            .iter()
            .map(|pixel| FilterPixel {
                r: 0.0,
                g: 0.0,
                b: 0.0,
                a: pixel.a,
            })
            .collect();

        SharedFilterImage {
            data: data.into(),
            width: self.width,
            height: self.height,
        }
    }

    /// Returns an image of the same size filled with the given pixel.
    pub fn flood(&self, pixel: FilterPixel) -> SharedFilterImage {
        SharedFilterImage {
            data: vec![pixel; self.data.len()].into(),
            width: self.width,
            height: self.height,
        }
    }

    /// Returns the image translated by the given amount.
    ///
    /// Pixels whose source falls outside the image become transparent.
    pub fn offset(&self, dx: i32, dy: i32) -> SharedFilterImage {
        let mut output = ExclusiveFilterImage::new(self.width, self.height);

        for y in 0..self.height {
            for x in 0..self.width {
                let (sx, sy) = (x - dx, y - dy);

                if sx >= 0 && sx < self.width && sy >= 0 && sy < self.height {
                    output.data[y as usize * self.width as usize + x as usize] =
                        self.get_pixel(sx as u32, sy as u32);
                }
            }
        }

        output.share()
    }

    /// Composes this image (the source) onto `other` (the destination)
    /// with the given operator.
    ///
    /// # Panics
    /// Panics if the images have different dimensions.
    pub fn compose(&self, other: &SharedFilterImage, operator: Operator) -> SharedFilterImage {
        assert_eq!((self.width, self.height), (other.width, other.height));

        let data: Vec<FilterPixel> = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&s, &d)| operator.compose_pixel(s, d))
            .collect();

        SharedFilterImage {
            data: data.into(),
            width: self.width,
            height: self.height,
        }
    }

    /// Composes this image (the source) onto `other` (the destination)
    /// with the `arithmetic` operator.
    ///
    /// # Panics
    /// Panics if the images have different dimensions.
    pub fn compose_arithmetic(
        &self,
        other: &SharedFilterImage,
        k1: f64,
        k2: f64,
        k3: f64,
        k4: f64,
    ) -> SharedFilterImage {
        assert_eq!((self.width, self.height), (other.width, other.height));

        let (k1, k2, k3, k4) = (k1 as f32, k2 as f32, k3 as f32, k4 as f32);

        let data: Vec<FilterPixel> = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&s, &d)| {
                let a = clamp(k1 * s.a * d.a + k2 * s.a + k3 * d.a + k4, 0.0, 1.0);

                if a == 0.0 {
                    FilterPixel::default()
                } else {
                    let su = s.unpremultiply();
                    let du = d.unpremultiply();
                    let channel = |sc: f32, dc: f32| {
                        clamp(k1 * sc * dc + k2 * sc + k3 * dc + k4, 0.0, 1.0) * a
                    };

                    FilterPixel {
                        r: channel(su.r, du.r),
                        g: channel(su.g, du.g),
                        b: channel(su.b, du.b),
                        a,
                    }
                }
            })
            .collect();

        SharedFilterImage {
            data: data.into(),
            width: self.width,
            height: self.height,
        }
    }
}

impl ExclusiveFilterImage {
    /// Creates a fully transparent image.
    ///
    /// # Panics
    /// Panics if either dimension is not positive.
    pub fn new(width: i32, height: i32) -> ExclusiveFilterImage {
        assert!(width > 0);
        assert!(height > 0);

        ExclusiveFilterImage {
            data: vec![FilterPixel::default(); width as usize * height as usize],
            width,
            height,
        }
    }

    /// Creates a mutable copy of a shared image.
    pub fn from_image(image: &SharedFilterImage) -> ExclusiveFilterImage {
        ExclusiveFilterImage {
            data: image.data.to_vec(),
            width: image.width,
            height: image.height,
        }
    }

    /// Returns the image width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Returns the image height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Calls the closure with the pixel data and the row stride, in pixels.
    pub fn modify(&mut self, draw_fn: &mut dyn FnMut(&mut [FilterPixel], usize)) {
        let stride = self.width as usize;
        draw_fn(&mut self.data, stride);
    }

    /// Converts into a shared image.
    pub fn share(self) -> SharedFilterImage {
        SharedFilterImage {
            data: self.data.into(),
            width: self.width,
            height: self.height,
        }
    }
}

/// Direction of a box blur pass.
pub trait BlurDirection {
    /// Number of independent lines in this direction.
    fn lines(width: usize, height: usize) -> usize;

    /// Number of pixels in one line.
    fn length(width: usize, height: usize) -> usize;

    /// Index of the first pixel of the given line.
    fn head(line: usize, width: usize) -> usize;

    /// Index distance between neighboring pixels of a line.
    fn step(width: usize) -> usize;
}

/// Horizontal blur direction.
pub enum Horizontal {}

/// Vertical blur direction.
pub enum Vertical {}

impl BlurDirection for Horizontal {
    #[inline]
    fn lines(_width: usize, height: usize) -> usize {
        height
    }

    #[inline]
    fn length(width: usize, _height: usize) -> usize {
        width
    }

    #[inline]
    fn head(line: usize, width: usize) -> usize {
        line * width
    }

    #[inline]
    fn step(_width: usize) -> usize {
        1
    }
}

impl BlurDirection for Vertical {
    #[inline]
    fn lines(width: usize, _height: usize) -> usize {
        width
    }

    #[inline]
    fn length(_width: usize, height: usize) -> usize {
        height
    }

    #[inline]
    fn head(line: usize, _width: usize) -> usize {
        line
    }

    #[inline]
    fn step(width: usize) -> usize {
        width
    }
}

/// One box blur pass with a running window of `2 · radius + 1` pixels.
///
/// Indices past the ends of a line clamp to the nearest edge pixel, so flat
/// areas stay flat all the way to the border.  All four channels are
/// blurred identically; the input is premultiplied.
///
/// # Panics
/// Panics if `radius` is zero or the images have different dimensions.
pub fn box_blur<B: BlurDirection>(
    input: &ExclusiveFilterImage,
    output: &mut ExclusiveFilterImage,
    radius: usize,
) {
    assert!(radius > 0);
    assert_eq!((input.width, input.height), (output.width, output.height));

    let width = input.width as usize;
    let height = input.height as usize;
    let len = B::length(width, height);
    let step = B::step(width);
    let norm = 1.0 / (2 * radius + 1) as f64;

    let src = &input.data;
    let dst = &mut output.data;

    for line in 0..B::lines(width, height) {
        let head = B::head(line, width);
        let at = |i: usize| src[head + i * step];

        // Sum of the window centered on the first pixel, with the indices
        // before the start clamped to it.
        let (mut r, mut g, mut b, mut a) = (0f64, 0f64, 0f64, 0f64);
        for i in -(radius as isize)..=(radius as isize) {
            let p = at(clamp(i, 0, len as isize - 1) as usize);
            r += f64::from(p.r);
            g += f64::from(p.g);
            b += f64::from(p.b);
            a += f64::from(p.a);
        }

        for x in 0..len {
            dst[head + x * step] = FilterPixel {
                r: (r * norm) as f32,
                g: (g * norm) as f32,
                b: (b * norm) as f32,
                a: (a * norm) as f32,
            };

            let add = at(min(x + radius + 1, len - 1));
            let sub = at(max(x as isize - radius as isize, 0) as usize);
            r += f64::from(add.r) - f64::from(sub.r);
            g += f64::from(add.g) - f64::from(sub.g);
            b += f64::from(add.b) - f64::from(sub.b);
            a += f64::from(add.a) - f64::from(sub.a);
        }
    }
}
