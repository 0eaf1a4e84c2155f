// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Per-iteration diagnostic output.
//!
//! When enabled, every carving iteration leaves two images behind: a
//! copy of the pre-removal buffer with the chosen seam painted over
//! it, and the buffer after the removal.  Both are purely for
//! watching the carver work; nothing downstream reads them back, and
//! the numeric result is identical with or without them.

use crate::transpose::transpose;
use failure::Error;
use image::jpeg::JPEGEncoder;
use image::{ColorType, RgbImage};
use std::fs::File;
use std::path::PathBuf;

/// Which phase of the carve an iteration belongs to.  Buffers handed
/// to a sink during the horizontal phase are still in transposed
/// space; the flag tells the sink to flip them back into the viewer's
/// frame before persisting them.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// Anything that accepts the two per-iteration snapshots.  The
/// carving driver calls this once per removed seam.
pub trait ArtifactSink {
    /// `seam_frame` is the pre-removal buffer with the seam painted;
    /// `wip_frame` is the buffer after the removal.
    fn record(
        &mut self,
        iteration: u32,
        orientation: Orientation,
        seam_frame: &RgbImage,
        wip_frame: &RgbImage,
    ) -> Result<(), Error>;
}

/// A sink that writes each snapshot pair as JPEG files named
/// `iteration-<index>-seam.jpg` and `iteration-<index>-wip.jpg`,
/// with the index zero-padded to five digits.
pub struct ArtifactDirectory {
    dir: PathBuf,
}

impl ArtifactDirectory {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        ArtifactDirectory { dir: dir.into() }
    }

    fn write_jpeg(&self, filename: &str, image: &RgbImage) -> Result<(), Error> {
        let path = self.dir.join(filename);
        let mut file = File::create(&path)?;
        let raw: &[u8] = image;
        JPEGEncoder::new_with_quality(&mut file, 90).encode(
            raw,
            image.width(),
            image.height(),
            ColorType::RGB(8),
        )?;
        Ok(())
    }
}

impl ArtifactSink for ArtifactDirectory {
    fn record(
        &mut self,
        iteration: u32,
        orientation: Orientation,
        seam_frame: &RgbImage,
        wip_frame: &RgbImage,
    ) -> Result<(), Error> {
        let seam_name = format!("iteration-{:05}-seam.jpg", iteration);
        let wip_name = format!("iteration-{:05}-wip.jpg", iteration);
        match orientation {
            Orientation::Vertical => {
                self.write_jpeg(&seam_name, seam_frame)?;
                self.write_jpeg(&wip_name, wip_frame)?;
            }
            Orientation::Horizontal => {
                self.write_jpeg(&seam_name, &transpose(seam_frame))?;
                self.write_jpeg(&wip_name, &transpose(wip_frame))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgb, RgbImage};

    fn frame(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| Rgb([(x * 40) as u8, (y * 40) as u8, 128]))
    }

    #[test]
    fn vertical_snapshots_keep_their_orientation() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = ArtifactDirectory::new(dir.path());
        sink.record(0, Orientation::Vertical, &frame(4, 3), &frame(3, 3))
            .unwrap();

        let seam = image::open(dir.path().join("iteration-00000-seam.jpg")).unwrap();
        let wip = image::open(dir.path().join("iteration-00000-wip.jpg")).unwrap();
        assert_eq!(seam.dimensions(), (4, 3));
        assert_eq!(wip.dimensions(), (3, 3));
    }

    #[test]
    fn horizontal_snapshots_return_to_the_viewer_frame() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = ArtifactDirectory::new(dir.path());
        // In the horizontal phase the buffers arrive transposed.
        sink.record(12, Orientation::Horizontal, &frame(3, 5), &frame(2, 5))
            .unwrap();

        let seam = image::open(dir.path().join("iteration-00012-seam.jpg")).unwrap();
        let wip = image::open(dir.path().join("iteration-00012-wip.jpg")).unwrap();
        assert_eq!(seam.dimensions(), (5, 3));
        assert_eq!(wip.dimensions(), (5, 2));
    }

    #[test]
    fn filenames_are_zero_padded_to_five_digits() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = ArtifactDirectory::new(dir.path());
        sink.record(7, Orientation::Vertical, &frame(2, 2), &frame(1, 2))
            .unwrap();
        assert!(dir.path().join("iteration-00007-seam.jpg").exists());
        assert!(dir.path().join("iteration-00007-wip.jpg").exists());
    }
}
