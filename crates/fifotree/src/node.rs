//! Node storage for the ordered tree.
//!
//! Nodes live in a `Vec` arena owned by [`FifoTree`](crate::FifoTree) and
//! reference each other by index. `NIL` marks an absent link. The value is
//! held as `Option<T>` so removal can extract it without unsafe code; a live
//! node always holds `Some`, a recycled slot holds `None`.

/// Sentinel value for absent links.
pub(crate) const NIL: usize = usize::MAX;

/// A single entry slot in the arena.
///
/// `left`, `right`, and `chain` are owning links: each owns at most one node.
/// `parent` is a non-owning back-reference, kept consistent on every
/// structural change. Nodes appended to a duplicate chain are reachable only
/// through `chain` and carry `parent == NIL`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub(crate) struct Node<T> {
    /// Ordering key. Duplicates allowed; equal keys share one tree position.
    pub(crate) priority: i64,
    /// Payload. `None` only while the slot sits on the free list.
    pub(crate) value: Option<T>,
    /// Back-reference to the tree parent (`NIL` for the root and for chain
    /// members).
    pub(crate) parent: usize,
    /// Subtree of strictly lower priorities.
    pub(crate) left: usize,
    /// Subtree of strictly higher priorities.
    pub(crate) right: usize,
    /// Next entry with the same priority, in insertion order. Doubles as the
    /// free-list link while the slot is recycled.
    pub(crate) chain: usize,
}

impl<T> Node<T> {
    /// Fresh unlinked node holding `value`.
    pub(crate) fn new(priority: i64, value: Option<T>) -> Self {
        Self {
            priority,
            value,
            parent: NIL,
            left: NIL,
            right: NIL,
            chain: NIL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_is_unlinked() {
        let n = Node::new(7, Some("x"));
        assert_eq!(n.priority, 7);
        assert_eq!(n.value, Some("x"));
        assert_eq!(n.parent, NIL);
        assert_eq!(n.left, NIL);
        assert_eq!(n.right, NIL);
        assert_eq!(n.chain, NIL);
    }

    #[test]
    fn nil_is_out_of_range_for_any_real_arena() {
        // Vec indices are < isize::MAX, so NIL can never collide with a slot.
        assert_eq!(NIL, usize::MAX);
    }
}
