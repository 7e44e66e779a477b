// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_quadtree --heading-base-level=0

//! Understory Quadtree: a dynamic, unbounded MX-CIF quadtree over 2D rectangles.
//!
//! Understory Quadtree is a primary-filter spatial index for data whose extent is not known in advance.
//!
//! - Insert and remove items keyed by an axis-aligned rectangle.
//! - Query every item whose rectangle may overlap a search rectangle.
//! - No bounding universe to configure: the tree grows downward by splitting quadrants and upward
//!   by re-rooting when an insertion does not fit.
//!
//! Queries return *candidates*. Every item whose rectangle intersects the search area is returned,
//! along with items that only share a quadrant with it; callers run their exact geometric test on
//! the result.
//!
//! It does not depend on any geometry crate. With the `kurbo` feature, [`Rect`] converts to and
//! from `kurbo::Rect`.
//!
//! # Example
//!
//! ```rust
//! use understory_quadtree::{Quadtree, Rect};
//!
//! let mut qt: Quadtree<u32> = Quadtree::new();
//! qt.insert(Rect::new(0.0, 0.0, 1.0, 1.0), 1).unwrap();
//! qt.insert(Rect::new(1e9, 1e9, 1e9 + 1.0, 1e9 + 1.0), 2).unwrap();
//!
//! // Points are legal; they are padded internally so queries terminate.
//! qt.insert(Rect::from_point(0.5, 0.5), 3).unwrap();
//!
//! let mut hits = qt.query(Rect::new(0.25, 0.25, 0.75, 0.75));
//! hits.sort_unstable();
//! assert_eq!(hits, [1, 3]);
//!
//! assert!(qt.remove(Rect::new(0.0, 0.0, 1.0, 1.0), 1));
//! assert_eq!(qt.size(), 2);
//! ```
//!
//! ## How quadrants are chosen
//!
//! Every node is a square of side `2^level` whose lower-left corner is a multiple of its side.
//! Levels and corners are computed on the IEEE-754 bit layout (see [`bits`]) rather than through
//! `log2`, so quadrant assignment is exact and identical on every platform.
//!
//! Rectangles too thin to subdivide relative to their magnitude (see [`interval`]) are filed at the
//! deepest node that already exists instead of creating new levels. Two such items can therefore
//! share an oversized node and show up as extra candidates for each other's queries.
//!
//! ### Float semantics
//!
//! Insertion rejects NaN, infinite, and inverted rectangles with [`QuadtreeError::InvalidRect`].

#![no_std]

extern crate alloc;

pub mod bits;
pub mod error;
pub mod interval;
pub mod key;
mod node;
pub mod quadtree;
mod root;
pub mod types;

pub use error::QuadtreeError;
pub use key::QuadKey;
pub use quadtree::{DEFAULT_MIN_EXTENT, Quadtree};
pub use types::{Point, Rect};
