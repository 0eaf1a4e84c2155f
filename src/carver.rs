// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The carving driver.
//!
//! One iteration removes one seam: rebuild the energy map from the
//! intensity buffer, search it for the cheapest seam, and delete that
//! seam from both the color and the intensity buffer so the two stay
//! in lockstep.  The driver runs a vertical phase down to the target
//! width, transposes, runs the same phase again down to the target
//! height, and transposes back.
//!
//! Rebuilding the whole energy map each time is wasteful; only the
//! columns around the removed seam actually changed.  The cost is
//! accepted for now.  An incremental rebuild would have to leave
//! every output bit unchanged to be worth taking.

use crate::artifacts::{ArtifactSink, Orientation};
use crate::energy::energy_map;
use crate::grey::to_grey;
use crate::seam::find_vertical_seam;
use crate::transpose::transpose;
use failure::Error;
use image::{GenericImageView, ImageBuffer, Pixel, Primitive, Rgb, RgbImage};
use log::debug;

/// The color painted over seam pixels in diagnostic snapshots.
pub const SEAM_MARKER: Rgb<u8> = Rgb([255, 0, 0]);

/// Delete one vertical seam from a buffer, producing a buffer one
/// column narrower.  Row `y` keeps everything left of `seam[y]`
/// untouched and shifts everything right of it one column left.
pub fn remove_seam<I, P, S>(image: &I, seam: &[u32]) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let mut carved = ImageBuffer::new(width - 1, height);
    for y in 0..height {
        let cut = seam[y as usize];
        for x in 0..cut {
            carved.put_pixel(x, y, image.get_pixel(x, y));
        }
        for x in cut..width - 1 {
            carved.put_pixel(x, y, image.get_pixel(x + 1, y));
        }
    }
    carved
}

/// Copy an image and overwrite the seam's pixels with the marker
/// color.  Used only for diagnostic snapshots; the original buffer is
/// left alone.
pub fn paint_seam(image: &RgbImage, seam: &[u32]) -> RgbImage {
    let mut painted = image.clone();
    for (y, &x) in seam.iter().enumerate() {
        painted.put_pixel(x, y as u32, SEAM_MARKER);
    }
    painted
}

// One carving phase: shrink the buffer's width to the target, one
// seam per iteration.  The horizontal phase runs this too, on the
// transposed buffer, continuing the iteration numbering where the
// vertical phase stopped.
fn carve_phase(
    image: RgbImage,
    target_width: u32,
    orientation: Orientation,
    iteration_start: u32,
    sink: &mut Option<&mut dyn ArtifactSink>,
) -> Result<RgbImage, Error> {
    let mut current = image;
    let mut grey = to_grey(&current);
    let passes = current.width().saturating_sub(target_width);

    for i in 0..passes {
        let energy = energy_map(&grey);
        let seam = find_vertical_seam(&energy);
        debug!(
            "{:?} iteration {}: {} columns left",
            orientation,
            iteration_start + i,
            current.width() - 1
        );
        current = match sink.as_mut() {
            Some(sink) => {
                let painted = paint_seam(&current, &seam);
                let carved = remove_seam(&current, &seam);
                sink.record(iteration_start + i, orientation, &painted, &carved)?;
                carved
            }
            None => remove_seam(&current, &seam),
        };
        grey = remove_seam(&grey, &seam);
    }
    Ok(current)
}

/// Holds the image to be carved and drives the whole resize.
pub struct SeamCarver {
    image: RgbImage,
}

impl SeamCarver {
    pub fn new(image: RgbImage) -> Self {
        SeamCarver { image }
    }

    /// Carve the image down to `target_width` by `target_height`.  A
    /// target at or above the current size leaves that dimension
    /// untouched; carving never upsizes.  When a sink is supplied it
    /// receives two snapshots per removed seam.
    pub fn carve(
        self,
        target_width: u32,
        target_height: u32,
        mut sink: Option<&mut dyn ArtifactSink>,
    ) -> Result<RgbImage, Error> {
        let vertical_seams = self.image.width().saturating_sub(target_width);
        let carved = carve_phase(
            self.image,
            target_width,
            Orientation::Vertical,
            0,
            &mut sink,
        )?;
        // The transposed buffer's width is the image's height, so the
        // same phase shrinks it to the target height.
        let carved = carve_phase(
            transpose(&carved),
            target_height,
            Orientation::Horizontal,
            vertical_seams,
            &mut sink,
        )?;
        Ok(transpose(&carved))
    }
}
