// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! An addressable two-dimensional field of plain values.
//!
//! Both the energy map and the cumulative-cost table built during the
//! seam search are width-by-height grids of scalars, so they share
//! this one backing store rather than each reinventing the row-major
//! arithmetic.

use std::ops::{Index, IndexMut};

/// A row-major, width-by-height grid addressed by `(x, y)` pairs.
/// The content type must implement `Default` so a freshly allocated
/// grid starts out zeroed.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<P: Default + Copy> {
    pub width: u32,
    pub height: u32,
    cells: Vec<P>,
}

impl<P: Default + Copy> Grid<P> {
    /// Allocate a grid of default-valued cells.
    pub fn new(width: u32, height: u32) -> Self {
        Grid {
            width,
            height,
            cells: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major vector of cells.  The vector length
    /// must match the requested dimensions.
    pub fn from_raw(width: u32, height: u32, cells: Vec<P>) -> Self {
        assert_eq!(cells.len(), width as usize * height as usize);
        Grid {
            width,
            height,
            cells,
        }
    }

    /// Width and height as a pair, in that order.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    // The number one name of this game is to keep the index math in a
    // singular location and never, ever mess with it.  Same layout as
    // the image crate's buffers.
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for Grid<P> {
    type Output = P;

    fn index(&self, (x, y): (u32, u32)) -> &P {
        let offset = self.offset(x, y);
        &self.cells[offset]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for Grid<P> {
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let offset = self.offset(x, y);
        &mut self.cells[offset]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_zeroed_and_roundtrips() {
        let mut grid: Grid<u32> = Grid::new(3, 2);
        assert_eq!(grid.dimensions(), (3, 2));
        assert_eq!(grid[(2, 1)], 0);
        grid[(2, 1)] = 17;
        assert_eq!(grid[(2, 1)], 17);
        assert_eq!(grid[(1, 1)], 0);
    }

    #[test]
    fn from_raw_is_row_major() {
        let grid = Grid::from_raw(3, 2, vec![0u32, 1, 2, 10, 11, 12]);
        assert_eq!(grid[(0, 0)], 0);
        assert_eq!(grid[(2, 0)], 2);
        assert_eq!(grid[(0, 1)], 10);
        assert_eq!(grid[(2, 1)], 12);
    }

    #[test]
    #[should_panic]
    fn from_raw_rejects_short_vectors() {
        Grid::from_raw(3, 2, vec![0u32; 5]);
    }
}
