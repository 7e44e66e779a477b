// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Understory Quadtree: insert, query candidates, remove.

use understory_quadtree::{Quadtree, Rect};

fn main() {
    let mut qt: Quadtree<u32> = Quadtree::new();
    qt.insert(Rect::new(0.0, 0.0, 10.0, 10.0), 1).unwrap();
    qt.insert(Rect::new(5.0, 5.0, 15.0, 15.0), 2).unwrap();
    qt.insert(Rect::from_point(40.0, 40.0), 3).unwrap();

    // Candidates only; check exact overlap yourself.
    let hits = qt.query(Rect::new(6.0, 6.0, 7.0, 7.0));
    println!("candidates at (6,6)-(7,7): {hits:?}");

    qt.remove(Rect::new(0.0, 0.0, 10.0, 10.0), 1);
    println!("size={} depth={} nodes={}", qt.size(), qt.depth(), qt.node_count());
}
