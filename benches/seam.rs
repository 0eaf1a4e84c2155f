// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The hot loop of a carve: one full energy rebuild plus one seam
//! search, on a buffer with plenty of texture.

use criterion::{criterion_group, criterion_main, Criterion};
use image::{GrayImage, Luma};
use imgseam::{energy_map, find_vertical_seam};

fn textured(width: u32, height: u32) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| {
        Luma([((x * 31 + y * 17 + x * y) % 251) as u8])
    })
}

fn seam_search(c: &mut Criterion) {
    let grey = textured(128, 128);
    c.bench_function("energy plus seam, 128x128", move |b| {
        b.iter(|| {
            let energy = energy_map(&grey);
            find_vertical_seam(&energy)
        })
    });
}

criterion_group!(benches, seam_search);
criterion_main!(benches);
