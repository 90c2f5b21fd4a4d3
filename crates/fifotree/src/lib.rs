//! fifotree: FIFO-stable priority queue over an ordered tree.
//!
//! A [`FifoTree`] stores values keyed by an integer priority and hands them
//! back in ascending-priority order. Entries that share a priority come back
//! in the order they went in: equal keys don't compete for tree positions,
//! they form an insertion-ordered side chain hanging off the single tree node
//! for that priority.
//!
//! # Architecture
//!
//! ```text
//! enqueue/dequeue → unbalanced BST keyed by priority
//!                        │ each node anchors a FIFO chain of duplicates
//! begin/next_entry → resumable in-order walk via temporary right-threads
//! iter/Display     → O(height) stack walk over the same tree
//! ```
//!
//! # Modules
//!
//! - `node`: arena slot record and the `NIL` sentinel
//! - `queue`: arena storage plus enqueue / peek / dequeue / clear
//! - `cursor`: suspendable in-order traversal (`begin` / `next_entry`)
//! - `iter`: borrowing in-order iterator and ordered-string rendering
//! - `structural`: structural equality, deep clone, container traits
//!
//! # Ordering contract
//!
//! Iteration (either flavor) and repeated [`FifoTree::dequeue`] agree: both
//! yield priorities in non-decreasing order with ties broken by insertion
//! order. Equality is *structural*: two queues are equal only if their
//! internal tree shapes match node for node, which makes equality sensitive
//! to insertion order, not just contents.
//!
//! # Example
//!
//! ```
//! use fifotree::FifoTree;
//!
//! let mut pq = FifoTree::new();
//! pq.enqueue("build", 2);
//! pq.enqueue("test", 2);
//! pq.enqueue("fetch", 1);
//!
//! assert_eq!(pq.dequeue(), Some("fetch"));
//! assert_eq!(pq.dequeue(), Some("build")); // FIFO among equal priorities
//! assert_eq!(pq.dequeue(), Some("test"));
//! assert_eq!(pq.dequeue(), None);
//! ```
//!
//! # Safety
//!
//! This crate forbids unsafe code. Nodes live in a `Vec` arena addressed by
//! index, so even a stale handle can at worst read a recycled slot.

#![forbid(unsafe_code)]

mod cursor;
mod iter;
mod node;
mod queue;
mod structural;

pub use iter::Iter;
pub use queue::FifoTree;
