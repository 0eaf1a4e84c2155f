// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image.
//!
//! Energy is a per-pixel proxy for visual importance: the sum of the
//! absolute intensity differences between the pixel's horizontal
//! neighbors and between its vertical neighbors.  High energy means
//! an edge; low energy means smooth, removable texture.  The map is
//! rebuilt in full from the intensity buffer on every carving
//! iteration; nothing is updated incrementally.

use crate::grid::Grid;
use image::GrayImage;
use itertools::iproduct;

#[inline]
fn intensity(grey: &GrayImage, x: u32, y: u32) -> i32 {
    i32::from(grey.get_pixel(x, y).0[0])
}

/// Compute the energy of every pixel in an intensity buffer.  Border
/// pixels borrow the center pixel for whichever neighbor falls off
/// the edge, so every cell has a defined value.
pub fn energy_map(grey: &GrayImage) -> Grid<u32> {
    let (width, height) = grey.dimensions();
    let (mw, mh) = (width - 1, height - 1);

    let mut energy = Grid::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        let center = intensity(grey, x, y);
        let left = if x == 0 { center } else { intensity(grey, x - 1, y) };
        let right = if x >= mw { center } else { intensity(grey, x + 1, y) };
        let up = if y == 0 { center } else { intensity(grey, x, y - 1) };
        let down = if y >= mh { center } else { intensity(grey, x, y + 1) };
        energy[(x, y)] = ((left - right).abs() + (up - down).abs()) as u32;
    }
    energy
}
