// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Unbounded top of the tree, centered on the origin.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::error::QuadtreeError;
use crate::node::{NodeArena, NodeIdx, remove_first, subnode_index};
use crate::types::{Point, Rect};

const ORIGIN: Point = Point::new(0.0, 0.0);

/// Root of the quadtree.
///
/// It has no bounds of its own: each of its four children covers one quadrant
/// around the origin and is replaced by a larger node whenever an insertion
/// does not fit. Rectangles crossing an axis through the origin stay here.
pub(crate) struct Root<P> {
    arena: NodeArena<P>,
    children: [Option<NodeIdx>; 4],
    items: Vec<P>,
}

impl<P> Default for Root<P> {
    fn default() -> Self {
        Self {
            arena: NodeArena::default(),
            children: [None; 4],
            items: Vec::new(),
        }
    }
}

impl<P: Debug> Debug for Root<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Root")
            .field("items", &self.items.len())
            .field("arena", &self.arena)
            .finish_non_exhaustive()
    }
}

impl<P: Copy> Root<P> {
    pub(crate) fn insert(&mut self, rect: &Rect, item: P) -> Result<(), QuadtreeError> {
        let Some(q) = subnode_index(rect, ORIGIN) else {
            self.items.push(item);
            return Ok(());
        };
        let existing = self.children[q];
        let tree = match existing {
            Some(c) if self.arena[c].bounds().contains(rect) => c,
            existing => {
                let larger = self.arena.create_expanded(existing, rect)?;
                self.children[q] = Some(larger);
                larger
            }
        };
        self.arena.insert_item(tree, rect, item);
        Ok(())
    }

    /// Visit root items, then every child subtree whose bounds meet `rect`.
    pub(crate) fn visit<F: FnMut(&P)>(&self, rect: &Rect, visitor: &mut F) {
        self.items.iter().for_each(&mut *visitor);
        for &c in self.children.iter().flatten() {
            self.arena.visit(c, rect, visitor);
        }
    }

    pub(crate) fn visit_all<F: FnMut(&P)>(&self, visitor: &mut F) {
        self.items.iter().for_each(&mut *visitor);
        for &c in self.children.iter().flatten() {
            self.arena.visit_all(c, visitor);
        }
    }

    pub(crate) fn remove(&mut self, rect: &Rect, item: &P) -> bool
    where
        P: PartialEq,
    {
        for q in 0..4 {
            let Some(c) = self.children[q] else {
                continue;
            };
            if self.arena.remove(c, rect, item) {
                if self.arena.is_prunable(c) {
                    self.arena.release(c);
                    self.children[q] = None;
                }
                return true;
            }
        }
        remove_first(&mut self.items, item)
    }

    pub(crate) fn size(&self) -> usize {
        self.items.len()
            + self
                .children
                .iter()
                .flatten()
                .map(|&c| self.arena.size(c))
                .sum::<usize>()
    }

    /// Levels including the root itself; an empty tree has depth 1.
    pub(crate) fn depth(&self) -> usize {
        let sub = self
            .children
            .iter()
            .flatten()
            .map(|&c| self.arena.depth(c))
            .max()
            .unwrap_or(0);
        sub + 1
    }

    /// Bounded nodes below the root.
    pub(crate) fn node_count(&self) -> usize {
        self.children
            .iter()
            .flatten()
            .map(|&c| self.arena.node_count(c))
            .sum()
    }

    pub(crate) fn clear(&mut self) {
        self.arena.clear();
        self.children = [None; 4];
        self.items.clear();
    }
}
