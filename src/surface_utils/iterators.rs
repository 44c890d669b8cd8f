//! Pixel iterators for `SharedFilterImage`.

use super::shared_surface::SharedFilterImage;
use super::FilterPixel;

/// Iterator over pixels of a `SharedFilterImage`, in row-major order.
pub struct Pixels<'a> {
    surface: &'a SharedFilterImage,
    x: u32,
    y: u32,
    offset: usize,
}

impl<'a> Pixels<'a> {
    /// Creates an iterator over the image's pixels.
    #[inline]
    pub fn new(surface: &'a SharedFilterImage) -> Self {
        Self {
            surface,
            x: 0,
            y: 0,
            offset: 0,
        }
    }
}

impl Iterator for Pixels<'_> {
    type Item = (u32, u32, FilterPixel);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        // This means we hit the end on the last iteration.
        if self.y == self.surface.height() as u32 {
            return None;
        }

        let rv = Some((self.x, self.y, self.surface.data()[self.offset]));

        self.offset += 1;
        self.x += 1;
        if self.x == self.surface.width() as u32 {
            self.x = 0;
            self.y += 1;
        }

        rv
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixels_count() {
        const WIDTH: i32 = 32;
        const HEIGHT: i32 = 64;

        let surface = SharedFilterImage::empty(WIDTH, HEIGHT);
        assert_eq!(Pixels::new(&surface).count(), (WIDTH * HEIGHT) as usize);

        let surface = SharedFilterImage::empty(1, 1);
        assert_eq!(Pixels::new(&surface).count(), 1);
    }

    #[test]
    fn pixels_coordinates_are_row_major() {
        let surface = SharedFilterImage::empty(2, 2);
        let coords: Vec<(u32, u32)> = Pixels::new(&surface).map(|(x, y, _)| (x, y)).collect();
        assert_eq!(coords, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }
}
