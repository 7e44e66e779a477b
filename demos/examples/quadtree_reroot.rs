// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tree has no fixed extent: watch it grow as items land further out.
//!
//! Run:
//! - `cargo run -p understory_examples --example quadtree_reroot`

use understory_quadtree::{Quadtree, Rect};

fn main() {
    let mut qt: Quadtree<u32> = Quadtree::new();
    let mut placed = Vec::new();
    for (i, scale) in (0_u32..).zip([1.0, 1e3, 1e6, 1e9, 1e12, -1e4, 1e-6]) {
        let r = Rect::from_xywh(scale, scale, scale.abs() * 0.1, scale.abs() * 0.1);
        qt.insert(r, i).unwrap();
        placed.push(r);
        println!(
            "inserted {r:?}: depth={} nodes={}",
            qt.depth(),
            qt.node_count()
        );
    }

    for (i, r) in (0_u32..).zip(&placed) {
        let found = qt.query(*r).contains(&i);
        println!("item {i} retrievable: {found}");
    }

    for (i, r) in (0_u32..).zip(&placed) {
        qt.remove(*r, i);
    }
    println!("after removal: size={} nodes={}", qt.size(), qt.node_count());
}
