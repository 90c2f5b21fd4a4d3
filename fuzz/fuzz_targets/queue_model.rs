#![no_main]

//! Differential fuzzing of the queue against a trivially-correct model.
//!
//! The model is a `BTreeMap<i64, VecDeque<u8>>`: ascending key order with a
//! FIFO queue per key is exactly the container's ordering contract. The
//! fuzzer interprets input bytes as an op stream (enqueue / dequeue / peek /
//! traversal steps / clone swaps / clear) and checks every observable
//! result against the model, including traversals abandoned mid-walk.

use std::collections::{BTreeMap, VecDeque};

use fifotree::FifoTree;
use libfuzzer_sys::fuzz_target;

#[derive(Default)]
struct Model {
    entries: BTreeMap<i64, VecDeque<u8>>,
    len: usize,
}

impl Model {
    fn enqueue(&mut self, value: u8, priority: i64) {
        self.entries.entry(priority).or_default().push_back(value);
        self.len += 1;
    }

    fn dequeue(&mut self) -> Option<(i64, u8)> {
        let (&priority, queue) = self.entries.iter_mut().next()?;
        let value = queue.pop_front()?;
        if queue.is_empty() {
            self.entries.remove(&priority);
        }
        self.len -= 1;
        Some((priority, value))
    }

    fn peek(&self) -> Option<(i64, u8)> {
        let (&priority, queue) = self.entries.iter().next()?;
        queue.front().map(|&v| (priority, v))
    }

    fn ordered(&self) -> Vec<(i64, u8)> {
        self.entries
            .iter()
            .flat_map(|(&p, q)| q.iter().map(move |&v| (p, v)))
            .collect()
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.len = 0;
    }
}

fuzz_target!(|data: &[u8]| {
    let mut pq: FifoTree<u8> = FifoTree::new();
    let mut model = Model::default();
    // Remaining steps of a suspended traversal, None when no walk is active.
    let mut walk: Option<VecDeque<(i64, u8)>> = None;

    let mut bytes = data.iter().copied();
    while let Some(op) = bytes.next() {
        match op % 8 {
            // enqueue (weighted double so structures actually grow)
            0 | 1 => {
                let value = bytes.next().unwrap_or(0);
                let priority = i64::from(bytes.next().unwrap_or(0) % 17) - 8;
                pq.enqueue(value, priority);
                model.enqueue(value, priority);
                walk = None; // mutation ends any active traversal
            }
            2 => {
                assert_eq!(pq.dequeue_entry(), model.dequeue());
                walk = None;
            }
            3 => {
                assert_eq!(pq.peek_entry().map(|(p, &v)| (p, v)), model.peek());
            }
            4 => {
                pq.begin();
                walk = Some(model.ordered().into());
            }
            5 => {
                if let Some(expected) = walk.as_mut() {
                    let got = pq.next_entry().map(|(p, &v)| (p, v));
                    assert_eq!(got, expected.pop_front());
                    if expected.is_empty() {
                        assert_eq!(pq.next_entry(), None);
                        walk = None;
                    }
                } else {
                    // No begin since the last mutation: cursor is parked.
                    assert_eq!(pq.next_entry(), None);
                }
            }
            6 => {
                // Clone mid-anything must snapshot the canonical structure.
                let snapshot = pq.clone();
                assert_eq!(snapshot.len(), model.len);
                let ordered: Vec<(i64, u8)> =
                    snapshot.iter().map(|(p, &v)| (p, v)).collect();
                assert_eq!(ordered, model.ordered());
                assert_eq!(snapshot, snapshot.clone());
            }
            _ => {
                pq.clear();
                model.clear();
                walk = None;
            }
        }
        assert_eq!(pq.len(), model.len);
    }

    // Final drain must agree entry-for-entry.
    let drained: Vec<(i64, u8)> = std::iter::from_fn(|| pq.dequeue_entry()).collect();
    assert_eq!(drained, model.ordered());
});
