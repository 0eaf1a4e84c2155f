// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image resizing by seam carving.
//!
//! Shrinking an image by cropping throws away the edges; scaling
//! distorts everything evenly.  Seam carving instead finds the
//! connected top-to-bottom path of pixels contributing the least
//! visual information, the lowest-energy seam, and removes it, one
//! pixel per row, repeating until the image reaches the requested
//! width.  Height is reduced the same way on the transposed image.
//!
//! The pipeline: [`grey::to_grey`] flattens the image to intensities
//! once per phase, [`energy::energy_map`] scores every pixel,
//! [`seam::find_vertical_seam`] runs the dynamic program, and
//! [`carver::SeamCarver`] orchestrates removal, bookkeeping, and
//! optional per-iteration diagnostics.
//!
//! The heap modules ([`heap`], [`binheap`], [`fibheap`]) are
//! independent of all of this; they share the crate but not the
//! pipeline.

pub mod artifacts;
pub mod carver;
pub mod energy;
pub mod grey;
pub mod grid;
pub mod seam;
pub mod transpose;

pub mod binheap;
pub mod fibheap;
pub mod heap;

pub use artifacts::{ArtifactDirectory, ArtifactSink, Orientation};
pub use carver::{paint_seam, remove_seam, SeamCarver, SEAM_MARKER};
pub use energy::energy_map;
pub use grey::to_grey;
pub use grid::Grid;
pub use seam::find_vertical_seam;
pub use transpose::transpose;

pub use binheap::BinaryHeap;
pub use fibheap::FibonacciHeap;
pub use heap::{Handle, Heap};
