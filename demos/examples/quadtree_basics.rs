// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Candidate filtering with a quadtree, followed by the exact test.
//!
//! Run:
//! - `cargo run -p understory_examples --example quadtree_basics`

use understory_quadtree::{Quadtree, Rect};

fn main() {
    let rects: Vec<Rect> = (0..20)
        .map(|i| {
            let x = f64::from(i) * 7.5;
            Rect::from_xywh(x, x * 0.5, 5.0, 5.0)
        })
        .collect();

    let mut qt: Quadtree<usize> = Quadtree::new();
    for (i, r) in rects.iter().enumerate() {
        qt.insert(*r, i).unwrap();
    }

    let search = Rect::new(30.0, 10.0, 60.0, 30.0);
    let candidates = qt.query(search);
    let exact: Vec<_> = candidates
        .iter()
        .copied()
        .filter(|&i| rects[i].intersects(&search))
        .collect();
    println!(
        "search={search:?}\n  candidates={candidates:?}\n  exact={exact:?}\n  depth={} nodes={}",
        qt.depth(),
        qt.node_count()
    );
}
