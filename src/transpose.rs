// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Image transposition.
//!
//! Carving a horizontal seam is exactly carving a vertical seam in
//! the transposed image.  Rather than maintain a column-major twin of
//! the seam search, the carver flips the buffer 90 degrees, runs the
//! one algorithm it has, and flips the result back.  Transposing
//! twice is the identity, which is what makes the round trip safe.

use image::{GenericImageView, ImageBuffer, Pixel, Primitive};
use itertools::iproduct;

/// Produce a new height-by-width buffer with `out[y][x] = in[x][y]`.
pub fn transpose<I, P, S>(image: &I) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let mut flipped = ImageBuffer::new(height, width);
    for (y, x) in iproduct!(0..height, 0..width) {
        flipped.put_pixel(y, x, image.get_pixel(x, y));
    }
    flipped
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn gradient(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x * 11 % 256) as u8, (y * 29 % 256) as u8, (x + y) as u8])
        })
    }

    #[test]
    fn dimensions_swap() {
        let flipped = transpose(&gradient(5, 3));
        assert_eq!(flipped.dimensions(), (3, 5));
    }

    #[test]
    fn pixels_move_across_the_diagonal() {
        let image = gradient(4, 2);
        let flipped = transpose(&image);
        for y in 0..2 {
            for x in 0..4 {
                assert_eq!(image.get_pixel(x, y), flipped.get_pixel(y, x));
            }
        }
    }

    #[test]
    fn transposing_twice_is_the_identity() {
        let image = gradient(6, 4);
        let round_trip = transpose(&transpose(&image));
        assert_eq!(round_trip.dimensions(), image.dimensions());
        assert_eq!(round_trip.into_raw(), image.into_raw());
    }
}
