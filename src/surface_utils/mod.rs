//! Various utilities for working with the pipeline's pixel buffers.

use std::alloc;
use std::slice;

pub mod canvas;
pub mod iterators;
pub mod shared_surface;
pub mod srgb;

/// A pixel in the pipeline's working format: linear-light premultiplied
/// RGBA with 32-bit float components.
pub type FilterPixel = rgb::RGBA<f32>;

/// A canvas pixel: premultiplied sRGB in `B,G,R,A` memory order
/// (little-endian ARGB).
pub type CanvasARGB = rgb::alt::BGRA8;

/// Analogous to `rgb::FromSlice`, to convert from `[u8]` to `[CanvasARGB]`.
#[allow(clippy::upper_case_acronyms)]
pub trait AsCanvasARGB {
    /// Reinterpret slice as `CanvasARGB` pixels.
    fn as_canvas_argb(&self) -> &[CanvasARGB];

    /// Reinterpret mutable slice as `CanvasARGB` pixels.
    fn as_canvas_argb_mut(&mut self) -> &mut [CanvasARGB];
}

// SAFETY: transmuting from [u8; 4] to CanvasARGB is based on the following assumptions:
//  * there are no invalid bit representations for BGRA
//  * four u8 and one BGRA are the same size
//  * u8 is sufficiently aligned
impl AsCanvasARGB for [u8] {
    fn as_canvas_argb(&self) -> &[CanvasARGB] {
        const LAYOUT_U8X4: alloc::Layout = alloc::Layout::new::<[u8; 4]>();
        const LAYOUT_ARGB: alloc::Layout = alloc::Layout::new::<CanvasARGB>();
        let _: [(); LAYOUT_U8X4.size()] = [(); LAYOUT_ARGB.size()];
        let _: [(); 0] = [(); LAYOUT_U8X4.align() % LAYOUT_ARGB.align()];
        unsafe { slice::from_raw_parts(self.as_ptr() as *const _, self.len() / 4) }
    }

    fn as_canvas_argb_mut(&mut self) -> &mut [CanvasARGB] {
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr() as *mut _, self.len() / 4) }
    }
}

/// Extension methods for slices of filter pixels.
pub trait ImageDataExt {
    /// Sets the pixel at the given coordinates.
    fn set_pixel(&mut self, stride: usize, pixel: FilterPixel, x: u32, y: u32);
}

impl ImageDataExt for [FilterPixel] {
    #[inline]
    fn set_pixel(&mut self, stride: usize, pixel: FilterPixel, x: u32, y: u32) {
        self[y as usize * stride + x as usize] = pixel;
    }
}

pub trait PixelOps {
    fn premultiply(self) -> Self;
    fn unpremultiply(self) -> Self;
}

impl PixelOps for FilterPixel {
    /// Returns a premultiplied value of this pixel.
    #[inline]
    fn premultiply(self) -> Self {
        Self {
            r: self.r * self.a,
            g: self.g * self.a,
            b: self.b * self.a,
            a: self.a,
        }
    }

    /// Returns an unpremultiplied value of this pixel.
    ///
    /// For a fully transparent pixel, a transparent black pixel will be returned.
    #[inline]
    fn unpremultiply(self) -> Self {
        if self.a > 0.0 {
            Self {
                r: self.r / self.a,
                g: self.g / self.a,
                b: self.b / self.a,
                a: self.a,
            }
        } else {
            Self::default()
        }
    }
}
