// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounded quadtree nodes stored in an arena.
//!
//! Every node is an aligned square of side `2^level`. Children sit exactly one
//! level below their parent and are created lazily. An item stays at the
//! shallowest node whose children cannot hold its rectangle whole.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::ops::{Index, IndexMut};

use crate::error::QuadtreeError;
use crate::interval::is_zero_width;
use crate::key::QuadKey;
use crate::types::{Point, Rect};

/// Index of a node in the arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeIdx(usize);

impl NodeIdx {
    const fn get(self) -> usize {
        self.0
    }
}

/// Which child of a square split at `center` holds `rect` whole.
///
/// Quadrants are numbered 0 = lower-left, 1 = lower-right, 2 = upper-left,
/// 3 = upper-right. Returns `None` when `rect` straddles the center on either
/// axis. A rectangle lying on a center line satisfies several tests; the last
/// one checked wins.
pub(crate) fn subnode_index(rect: &Rect, center: Point) -> Option<usize> {
    let mut index = None;
    if rect.min_x >= center.x {
        if rect.min_y >= center.y {
            index = Some(3);
        }
        if rect.max_y <= center.y {
            index = Some(1);
        }
    }
    if rect.max_x <= center.x {
        if rect.min_y >= center.y {
            index = Some(2);
        }
        if rect.max_y <= center.y {
            index = Some(0);
        }
    }
    index
}

/// Quadrant of `center` holding the point `p`. Total, unlike [`subnode_index`].
fn point_quadrant(p: Point, center: Point) -> usize {
    match (p.x >= center.x, p.y >= center.y) {
        (false, false) => 0,
        (true, false) => 1,
        (false, true) => 2,
        (true, true) => 3,
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Node<P> {
    bounds: Rect,
    level: i32,
    center: Point,
    children: [Option<NodeIdx>; 4],
    items: Vec<P>,
}

impl<P> Node<P> {
    fn new(bounds: Rect, level: i32) -> Self {
        Self {
            bounds,
            level,
            center: bounds.center(),
            children: [None; 4],
            items: Vec::new(),
        }
    }

    fn from_key(key: &QuadKey) -> Self {
        Self::new(key.bounds(), key.level())
    }

    /// The child square for `index`, one level down.
    ///
    /// The parent is an exact power of two, so the halves are exact too.
    fn create_child(&self, index: usize) -> Self {
        let b = &self.bounds;
        let c = self.center;
        let (min_x, max_x) = if index & 1 == 0 {
            (b.min_x, c.x)
        } else {
            (c.x, b.max_x)
        };
        let (min_y, max_y) = if index < 2 {
            (b.min_y, c.y)
        } else {
            (c.y, b.max_y)
        };
        Self::new(Rect::new(min_x, min_y, max_x, max_y), self.level - 1)
    }

    pub(crate) fn bounds(&self) -> &Rect {
        &self.bounds
    }

    pub(crate) fn level(&self) -> i32 {
        self.level
    }

    /// Whether the center lies strictly inside the bounds, so that children
    /// are smaller than this node. Fails once the side reaches the smallest
    /// subnormal step at these coordinates.
    fn is_divisible(&self) -> bool {
        let b = &self.bounds;
        let c = self.center;
        b.min_x < c.x && c.x < b.max_x && b.min_y < c.y && c.y < b.max_y
    }

    fn has_children(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }

    /// No items and no children left.
    fn is_prunable(&self) -> bool {
        self.items.is_empty() && !self.has_children()
    }

    fn reset(&mut self) {
        self.items.clear();
        self.children = [None; 4];
    }
}

/// Slab of nodes with a free list for slots released by pruning.
pub(crate) struct NodeArena<P> {
    nodes: Vec<Node<P>>,
    free_list: Vec<usize>,
}

impl<P> Default for NodeArena<P> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            free_list: Vec::new(),
        }
    }
}

impl<P> Index<NodeIdx> for NodeArena<P> {
    type Output = Node<P>;

    fn index(&self, idx: NodeIdx) -> &Node<P> {
        &self.nodes[idx.get()]
    }
}

impl<P> IndexMut<NodeIdx> for NodeArena<P> {
    fn index_mut(&mut self, idx: NodeIdx) -> &mut Node<P> {
        &mut self.nodes[idx.get()]
    }
}

impl<P: Debug> Debug for NodeArena<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NodeArena")
            .field("slots", &self.nodes.len())
            .field("free", &self.free_list.len())
            .finish_non_exhaustive()
    }
}

impl<P: Copy> NodeArena<P> {
    fn alloc(&mut self, node: Node<P>) -> NodeIdx {
        if let Some(i) = self.free_list.pop() {
            self.nodes[i] = node;
            NodeIdx(i)
        } else {
            self.nodes.push(node);
            NodeIdx(self.nodes.len() - 1)
        }
    }

    pub(crate) fn release(&mut self, idx: NodeIdx) {
        self[idx].reset();
        self.free_list.push(idx.get());
    }

    /// Number of live nodes.
    pub(crate) fn live(&self) -> usize {
        self.nodes.len() - self.free_list.len()
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.free_list.clear();
    }

    /// A new node covering both `rect` and the subtree at `existing`, with
    /// `existing` re-attached beneath it.
    ///
    /// The key is computed before anything is allocated, so a failure leaves
    /// the arena untouched.
    pub(crate) fn create_expanded(
        &mut self,
        existing: Option<NodeIdx>,
        rect: &Rect,
    ) -> Result<NodeIdx, QuadtreeError> {
        let expand = match existing {
            Some(e) => rect.union(&self[e].bounds),
            None => *rect,
        };
        let key = QuadKey::compute(&expand)?;
        let larger = self.alloc(Node::from_key(&key));
        if let Some(e) = existing {
            log::debug!(
                "quadtree grew upward from level {} to level {}",
                self[e].level(),
                key.level()
            );
            self.insert_subtree(larger, e);
        }
        Ok(larger)
    }

    /// Attach `child` below `parent`, creating intermediate levels so that each
    /// link spans exactly one level.
    fn insert_subtree(&mut self, parent: NodeIdx, child: NodeIdx) {
        debug_assert!(
            self[parent].bounds.contains(&self[child].bounds),
            "subtree must fit inside its new parent"
        );
        let child_level = self[child].level;
        // Aligned squares never straddle the center of a larger aligned
        // square, so the child's own center picks its quadrant.
        let child_center = self[child].center;
        let mut at = parent;
        loop {
            let q = point_quadrant(child_center, self[at].center);
            if child_level >= self[at].level - 1 {
                self[at].children[q] = Some(child);
                return;
            }
            let intermediate = self[at].create_child(q);
            let mid = self.alloc(intermediate);
            self[at].children[q] = Some(mid);
            at = mid;
        }
    }

    /// The node that should hold `rect`, creating children on the way down.
    ///
    /// Stops at a node too small to split further.
    fn descend_or_create(&mut self, start: NodeIdx, rect: &Rect) -> NodeIdx {
        let mut at = start;
        while let Some(q) = subnode_index(rect, self[at].center) {
            let existing = self[at].children[q];
            at = match existing {
                Some(c) => c,
                None if !self[at].is_divisible() => {
                    log::trace!("node at level {} cannot split further", self[at].level());
                    break;
                }
                None => {
                    let child = self[at].create_child(q);
                    let c = self.alloc(child);
                    self[at].children[q] = Some(c);
                    c
                }
            };
        }
        at
    }

    /// The deepest existing node that could hold `rect`. Never allocates.
    pub(crate) fn find_existing(&self, start: NodeIdx, rect: &Rect) -> NodeIdx {
        let mut at = start;
        while let Some(c) = subnode_index(rect, self[at].center).and_then(|q| self[at].children[q])
        {
            at = c;
        }
        at
    }

    /// File `item` under `tree`, which must already contain `rect`.
    ///
    /// Rectangles too thin to subdivide go to the deepest existing node rather
    /// than spawning new levels that could never separate them.
    pub(crate) fn insert_item(&mut self, tree: NodeIdx, rect: &Rect, item: P) {
        debug_assert!(
            self[tree].bounds.contains(rect),
            "insertion target must contain the rectangle"
        );
        let zero_x = is_zero_width(rect.min_x, rect.max_x);
        let zero_y = is_zero_width(rect.min_y, rect.max_y);
        let target = if zero_x || zero_y {
            let target = self.find_existing(tree, rect);
            log::trace!(
                "degenerate rectangle {rect:?} filed at level {}",
                self[target].level()
            );
            target
        } else {
            self.descend_or_create(tree, rect)
        };
        self[target].items.push(item);
    }

    /// Visit items of every node under `start` whose bounds intersect `rect`.
    pub(crate) fn visit<F: FnMut(&P)>(&self, start: NodeIdx, rect: &Rect, visitor: &mut F) {
        let mut stack = vec![start];
        while let Some(i) = stack.pop() {
            let n = &self[i];
            if !n.bounds.intersects(rect) {
                continue;
            }
            n.items.iter().for_each(&mut *visitor);
            stack.extend(n.children.iter().flatten().copied());
        }
    }

    /// Visit every item under `start`.
    pub(crate) fn visit_all<F: FnMut(&P)>(&self, start: NodeIdx, visitor: &mut F) {
        let mut stack = vec![start];
        while let Some(i) = stack.pop() {
            let n = &self[i];
            n.items.iter().for_each(&mut *visitor);
            stack.extend(n.children.iter().flatten().copied());
        }
    }

    /// Remove one occurrence of `item` from the subtree at `at`.
    ///
    /// Only descends into children whose bounds intersect `rect`, and detaches
    /// children left with no items and no children.
    pub(crate) fn remove(&mut self, at: NodeIdx, rect: &Rect, item: &P) -> bool
    where
        P: PartialEq,
    {
        if !self[at].bounds.intersects(rect) {
            return false;
        }
        for q in 0..4 {
            let Some(c) = self[at].children[q] else {
                continue;
            };
            if self.remove(c, rect, item) {
                if self[c].is_prunable() {
                    log::trace!("pruned empty node at level {}", self[c].level());
                    self[at].children[q] = None;
                    self.release(c);
                }
                return true;
            }
        }
        remove_first(&mut self[at].items, item)
    }

    /// Number of items in the subtree at `at`.
    pub(crate) fn size(&self, at: NodeIdx) -> usize {
        let n = &self[at];
        n.items.len()
            + n.children
                .iter()
                .flatten()
                .map(|&c| self.size(c))
                .sum::<usize>()
    }

    /// Number of levels in the subtree at `at`, counting `at` itself.
    pub(crate) fn depth(&self, at: NodeIdx) -> usize {
        let sub = self[at]
            .children
            .iter()
            .flatten()
            .map(|&c| self.depth(c))
            .max()
            .unwrap_or(0);
        sub + 1
    }

    /// Number of nodes in the subtree at `at`, counting `at` itself.
    pub(crate) fn node_count(&self, at: NodeIdx) -> usize {
        1 + self[at]
            .children
            .iter()
            .flatten()
            .map(|&c| self.node_count(c))
            .sum::<usize>()
    }

    pub(crate) fn is_prunable(&self, at: NodeIdx) -> bool {
        self[at].is_prunable()
    }
}

/// Remove the first element equal to `item`, keeping the order of the rest.
pub(crate) fn remove_first<P: PartialEq>(items: &mut Vec<P>, item: &P) -> bool {
    match items.iter().position(|i| i == item) {
        Some(pos) => {
            items.remove(pos);
            true
        }
        None => false,
    }
}
