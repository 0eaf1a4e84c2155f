// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Reduce a color image to a single-channel intensity buffer.
//!
//! The carver works on luminance, not color: the energy function only
//! needs a scalar per pixel.  The greyscale buffer is computed once
//! per carving phase and then carved in lockstep with the color
//! buffer, so later iterations never have to re-derive it.

use image::{GenericImageView, GrayImage, Luma, Pixel, Primitive};
use itertools::iproduct;
use num_traits::NumCast;

/// Convert any viewable image into an eight-bit intensity buffer of
/// identical dimensions, using the luminance weighting built into the
/// image crate's `to_luma`.
pub fn to_grey<I, P, S>(image: &I) -> GrayImage
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let mut grey = GrayImage::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        let luma = image.get_pixel(x, y).to_luma();
        let intensity: u8 = NumCast::from(luma.channels()[0]).unwrap();
        grey.put_pixel(x, y, Luma([intensity]));
    }
    grey
}
