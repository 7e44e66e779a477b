// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public [`Quadtree`] API.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::error::QuadtreeError;
use crate::root::Root;
use crate::types::Rect;

/// Padding applied to zero-size rectangles before anything has been observed.
pub const DEFAULT_MIN_EXTENT: f64 = 1.0;

/// Dynamic, unbounded MX-CIF quadtree over axis-aligned rectangles.
///
/// Items are filed under the rectangle given at insertion and returned by
/// [`Quadtree::query`] as *candidates*: every item whose rectangle intersects
/// the search area is returned, together with some that merely share a
/// quadrant with it. Callers test exact geometry themselves.
///
/// No extent needs to be configured up front. The tree grows downward by
/// splitting quadrants and upward by replacing a top-level quadrant with a
/// larger one whenever an insertion does not fit.
pub struct Quadtree<P> {
    root: Root<P>,
    min_extent: f64,
    initial_extent: f64,
}

impl<P: Copy + Debug> Default for Quadtree<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Debug> Debug for Quadtree<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Quadtree")
            .field("min_extent", &self.min_extent)
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

impl<P: Copy + Debug> Quadtree<P> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::with_min_extent(DEFAULT_MIN_EXTENT)
    }

    /// Create an empty tree that pads zero-size rectangles by `extent` until a
    /// smaller non-zero dimension is seen.
    ///
    /// Non-positive or non-finite values fall back to [`DEFAULT_MIN_EXTENT`].
    pub fn with_min_extent(extent: f64) -> Self {
        let extent = if extent.is_finite() && extent > 0.0 {
            extent
        } else {
            DEFAULT_MIN_EXTENT
        };
        Self {
            root: Root::default(),
            min_extent: extent,
            initial_extent: extent,
        }
    }

    fn collect_stats(&mut self, rect: &Rect) {
        let w = rect.width();
        if w > 0.0 && w < self.min_extent {
            self.min_extent = w;
        }
        let h = rect.height();
        if h > 0.0 && h < self.min_extent {
            self.min_extent = h;
        }
    }

    /// Insert `item` under `rect`.
    ///
    /// Fails with [`QuadtreeError::InvalidRect`] for non-finite or inverted
    /// rectangles and with [`QuadtreeError::ExponentOutOfRange`] if the
    /// rectangle is too large for any finite quadrant. The tree is unchanged on
    /// error.
    pub fn insert(&mut self, rect: Rect, item: P) -> Result<(), QuadtreeError> {
        if !rect.is_valid() {
            log::debug!("rejected invalid rectangle {rect:?}");
            return Err(QuadtreeError::InvalidRect { rect });
        }
        let min_extent = self.min_extent;
        self.collect_stats(&rect);
        let padded = rect.ensure_extent(self.min_extent);
        self.root.insert(&padded, item).inspect_err(|_| {
            self.min_extent = min_extent;
        })
    }

    /// Remove one occurrence of `item` filed under `rect`.
    ///
    /// Returns `false` if no such entry exists, including for rectangles that
    /// could never have been inserted.
    pub fn remove(&mut self, rect: Rect, item: P) -> bool
    where
        P: PartialEq,
    {
        if !rect.is_valid() {
            return false;
        }
        let padded = rect.ensure_extent(self.min_extent);
        self.root.remove(&padded, &item)
    }

    /// Candidates whose rectangle may intersect `rect`.
    ///
    /// Never misses an item that does intersect. An inverted or NaN rectangle
    /// matches nothing below the root, but items filed on the root itself are
    /// always candidates.
    pub fn query(&self, rect: Rect) -> Vec<P> {
        let mut out = Vec::new();
        self.visit(rect, |p| out.push(*p));
        out
    }

    /// Like [`Quadtree::query`], handing each candidate to `visitor`.
    pub fn visit<F: FnMut(&P)>(&self, rect: Rect, mut visitor: F) {
        self.root.visit(&rect, &mut visitor);
    }

    /// Every item in the tree.
    pub fn query_all(&self) -> Vec<P> {
        let mut out = Vec::with_capacity(self.size());
        self.root.visit_all(&mut |p: &P| out.push(*p));
        out
    }

    /// Number of items.
    pub fn size(&self) -> usize {
        self.root.size()
    }

    /// True if the tree holds no items.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Number of levels, counting the root. An empty tree has depth 1.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Number of bounded nodes currently allocated below the root.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Current padding extent for zero-size rectangles.
    pub fn min_extent(&self) -> f64 {
        self.min_extent
    }

    /// Drop all items and nodes and restore the initial padding extent.
    pub fn clear(&mut self) {
        self.root.clear();
        self.min_extent = self.initial_extent;
    }
}
