//! Structural equality, deep cloning, and the standard container traits.
//!
//! Equality here is *structural*, not multiset: two queues are equal only if
//! their trees match node for node: same priority and value at each
//! position, same left/right topology, same chain contents in the same
//! order. Queues holding identical entries inserted in different orders
//! usually have different shapes and therefore compare unequal.
//!
//! Cloning rebuilds the node graph pre-order into a fresh compact arena, so
//! a clone shares nothing with its source and always satisfies structural
//! equality against it.

use crate::node::NIL;
use crate::queue::FifoTree;

impl<T: PartialEq> FifoTree<T> {
    /// Synchronized recursive descent; short-circuits on the first mismatch.
    fn subtree_eq(&self, a: usize, other: &Self, b: usize) -> bool {
        if a == NIL && b == NIL {
            return true;
        }
        if a == NIL || b == NIL {
            return false;
        }
        let an = &self.arena[a];
        let bn = &other.arena[b];
        an.priority == bn.priority
            && an.value == bn.value
            && self.chain_eq(an.chain, other, bn.chain)
            && self.subtree_eq(an.left, other, bn.left)
            && self.subtree_eq(self.canonical_right(a), other, other.canonical_right(b))
    }

    /// Pairwise chain walk: same length, same priorities, same values, same
    /// order.
    fn chain_eq(&self, mut a: usize, other: &Self, mut b: usize) -> bool {
        loop {
            if a == NIL && b == NIL {
                return true;
            }
            if a == NIL || b == NIL {
                return false;
            }
            let an = &self.arena[a];
            let bn = &other.arena[b];
            if an.priority != bn.priority || an.value != bn.value {
                return false;
            }
            a = an.chain;
            b = bn.chain;
        }
    }
}

impl<T: PartialEq> PartialEq for FifoTree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.subtree_eq(self.root, other, other.root)
    }
}

impl<T: Eq> Eq for FifoTree<T> {}

impl<T: Clone> FifoTree<T> {
    /// Pre-order rebuild of `src`'s subtree at `node` into this (destination)
    /// arena: the node itself, its left and right subtrees, then its chain.
    /// Parent back-references are relinked at each step.
    fn clone_subtree(&mut self, src: &FifoTree<T>, node: usize, parent: usize) -> usize {
        if node == NIL {
            return NIL;
        }
        let idx = self.alloc_slot(src.arena[node].priority, src.arena[node].value.clone());
        self.arena[idx].parent = parent;
        let left = self.clone_subtree(src, src.arena[node].left, idx);
        self.arena[idx].left = left;
        let right = self.clone_subtree(src, src.canonical_right(node), idx);
        self.arena[idx].right = right;

        let mut src_chain = src.arena[node].chain;
        let mut tail = idx;
        while src_chain != NIL {
            let link = self.alloc_slot(
                src.arena[src_chain].priority,
                src.arena[src_chain].value.clone(),
            );
            self.arena[tail].chain = link;
            tail = link;
            src_chain = src.arena[src_chain].chain;
        }
        idx
    }
}

impl<T: Clone> Clone for FifoTree<T> {
    /// Deep clone: an independent node graph with identical shape, values,
    /// priorities, and chain order. The clone's arena is freshly compacted
    /// and its traversal cursor starts idle.
    fn clone(&self) -> Self {
        let mut out = Self::new();
        out.arena.reserve_exact(self.len);
        out.root = out.clone_subtree(self, self.root, NIL);
        out.len = self.len;
        out
    }

    /// Assignment semantics: releases the destination's existing node graph,
    /// then rebuilds from `source`. (Self-assignment cannot arise: `&mut
    /// self` and `&source` may not alias.)
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.arena.reserve(source.len);
        self.root = self.clone_subtree(source, source.root, NIL);
        self.len = source.len;
    }
}

impl<T> Default for FifoTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<(i64, T)> for FifoTree<T> {
    fn extend<I: IntoIterator<Item = (i64, T)>>(&mut self, iter: I) {
        for (priority, value) in iter {
            self.enqueue(value, priority);
        }
    }
}

impl<T> FromIterator<(i64, T)> for FifoTree<T> {
    /// Builds by enqueueing in iteration order, so the resulting tree shape
    /// is exactly what the same sequence of `enqueue` calls produces.
    fn from_iter<I: IntoIterator<Item = (i64, T)>>(iter: I) -> Self {
        let mut pq = Self::new();
        pq.extend(iter);
        pq
    }
}
