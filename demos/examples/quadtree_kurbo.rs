// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Feeding kurbo shapes into the quadtree through their bounding boxes.
//!
//! Run:
//! - `cargo run -p understory_examples --example quadtree_kurbo`

use kurbo::{Circle, Point, Shape};
use understory_quadtree::Quadtree;

fn main() {
    let circles: Vec<Circle> = (0..64)
        .map(|i| {
            let t = f64::from(i);
            Circle::new(Point::new(t * 12.0, (t * 0.7).sin() * 80.0), 6.0)
        })
        .collect();

    let mut qt: Quadtree<usize> = Quadtree::new();
    for (i, c) in circles.iter().enumerate() {
        qt.insert(c.bounding_box().into(), i).unwrap();
    }

    // Hit test a point: candidates from the tree, then the exact shape check.
    let probe = Point::new(240.0, (20.0_f64 * 0.7).sin() * 80.0);
    let near = kurbo::Rect::from_center_size(probe, (1.0, 1.0));
    let hits: Vec<_> = qt
        .query(near.into())
        .into_iter()
        .filter(|&i| circles[i].contains(probe))
        .collect();
    println!("probe={probe:?} -> circles {hits:?}");
}
