// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the minimum-energy vertical seam in an energy map.
//!
//! A seam is one x-coordinate per row, each within one column of the
//! next, tracing a connected top-to-bottom path.  The search is the
//! classic O(width * height) dynamic program: a forward pass builds a
//! table of cumulative minima, then a backtrace walks the cheapest
//! path back to the top row.
//!
//! Horizontal seams never appear here.  The carver transposes the
//! buffers and runs this same search, rather than maintaining a
//! second, column-major copy of the algorithm.

use crate::grid::Grid;

// Forward pass.  Each cell is its own energy plus the smallest of the
// three cumulative costs above it.  The running minimum starts at the
// straight-up cell and is replaced only on a strictly smaller
// candidate, up-left first, then up-right.
fn cumulative_costs(energy: &Grid<u32>) -> Grid<u32> {
    let (width, height) = energy.dimensions();
    let mut costs = Grid::new(width, height);

    for x in 0..width {
        costs[(x, 0)] = energy[(x, 0)];
    }
    for y in 1..height {
        for x in 0..width {
            let mut above = costs[(x, y - 1)];
            if x > 0 && costs[(x - 1, y - 1)] < above {
                above = costs[(x - 1, y - 1)];
            }
            if x < width - 1 && costs[(x + 1, y - 1)] < above {
                above = costs[(x + 1, y - 1)];
            }
            costs[(x, y)] = energy[(x, y)] + above;
        }
    }
    costs
}

/// Given an energy map, return the list of x-coordinates that, when
/// zipped with the range `(0..height)`, give the coordinates of each
/// pixel in the cheapest top-to-bottom seam.
///
/// Ties at the bottom row go to the lowest x.  During the backtrace,
/// both diagonal predecessors are compared against the straight-up
/// cell only, never against each other; when both are strictly
/// cheaper than it, the right one wins.  That right-hand preference
/// is a compatibility contract with the outputs this carver has
/// always produced, so it stays even though a symmetric three-way
/// minimum would look more natural.
pub fn find_vertical_seam(energy: &Grid<u32>) -> Vec<u32> {
    let (width, height) = energy.dimensions();
    let costs = cumulative_costs(energy);

    let mut best_x = 0;
    for x in 1..width {
        if costs[(x, height - 1)] < costs[(best_x, height - 1)] {
            best_x = x;
        }
    }

    let mut seam = vec![0u32; height as usize];
    let mut x = best_x;
    for y in (0..height).rev() {
        seam[y as usize] = x;
        if y > 0 {
            let straight = costs[(x, y - 1)];
            let mut next = x;
            if x > 0 && costs[(x - 1, y - 1)] < straight {
                next = x - 1;
            }
            if x < width - 1 && costs[(x + 1, y - 1)] < straight {
                next = x + 1;
            }
            x = next;
        }
    }
    seam
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_connected(seam: &[u32]) {
        for pair in seam.windows(2) {
            let step = (i64::from(pair[0]) - i64::from(pair[1])).abs();
            assert!(step <= 1, "seam jumps more than one column: {:?}", seam);
        }
    }

    #[test]
    fn cheap_middle_column_wins() {
        #[rustfmt::skip]
        let energy = Grid::from_raw(3, 3, vec![
            9, 1, 9,
            9, 1, 9,
            9, 1, 9,
        ]);
        let costs = cumulative_costs(&energy);
        assert_eq!(costs[(1, 2)], 3);
        assert_eq!(find_vertical_seam(&energy), [1, 1, 1]);
    }

    #[test]
    fn bottom_row_ties_go_to_the_lowest_column() {
        #[rustfmt::skip]
        let energy = Grid::from_raw(3, 2, vec![
            5, 1, 5,
            1, 5, 1,
        ]);
        // Both edges of the bottom row finish at cost 2; the leftmost
        // wins, and its predecessor is the cheap middle of the top row.
        let seam = find_vertical_seam(&energy);
        assert_connected(&seam);
        assert_eq!(seam, [1, 0]);
    }

    #[test]
    fn backtrace_prefers_the_right_diagonal() {
        #[rustfmt::skip]
        let energy = Grid::from_raw(3, 2, vec![
            1, 9, 1,
            9, 1, 9,
        ]);
        // From the bottom center, both top corners are strictly
        // cheaper than the cell straight above; the right one is
        // taken.
        assert_eq!(find_vertical_seam(&energy), [2, 1]);
    }

    #[test]
    fn chosen_bottom_cell_is_the_bottom_row_minimum() {
        #[rustfmt::skip]
        let energy = Grid::from_raw(4, 3, vec![
            3, 1, 4, 1,
            5, 9, 2, 6,
            5, 3, 5, 8,
        ]);
        let costs = cumulative_costs(&energy);
        let seam = find_vertical_seam(&energy);
        let bottom = seam[2];
        let min = (0..4).map(|x| costs[(x, 2)]).min().unwrap();
        assert_eq!(costs[(bottom, 2)], min);
        assert_connected(&seam);
    }

    #[test]
    fn seams_are_connected_on_scrambled_energies() {
        let (width, height) = (17, 23);
        let cells = (0..width * height)
            .map(|i| (i * 2654435761u64 as usize % 97) as u32)
            .collect();
        let energy = Grid::from_raw(width as u32, height as u32, cells);
        let seam = find_vertical_seam(&energy);
        assert_eq!(seam.len(), height);
        assert_connected(&seam);
        assert!(seam.iter().all(|&x| x < width as u32));
    }

    #[test]
    fn single_column_seam_is_all_zeroes() {
        let energy = Grid::from_raw(1, 4, vec![5, 5, 5, 5]);
        assert_eq!(find_vertical_seam(&energy), [0, 0, 0, 0]);
    }
}
