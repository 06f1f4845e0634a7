//! An array-backed binary min-heap that orders the subtrees waiting to be
//! merged. Entries hold an arena index instead of the subtree itself, so the
//! heap moves three words per swap no matter how large the subtree is.

use std::cmp::Ordering;

use super::error::HuffmanError;

/// One queued subtree: its total weight and the arena index of its root.
/// `seq` is stamped by the heap when the entry arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapEntry {
    pub weight: u64,
    pub seq: usize,
    pub node: usize,
}

impl Ord for HeapEntry {
    /// Orders by weight, then by arrival. Equal weights therefore leave the
    /// queue in the order they were inserted, which makes every run over the
    /// same input produce the same tree.
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then(self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The pending-subtree queue. `entries` holds a binary heap laid out in the
/// usual flat form, children of `i` at `2i + 1` and `2i + 2`, with the
/// lightest entry at index 0.
#[derive(Debug)]
pub struct MinHeap {
    entries: Vec<HeapEntry>,
    next_seq: usize,
}

impl MinHeap {
    /// Builds a heap from `(weight, node)` pairs in one pass. The pairs are
    /// loaded as they come, then sifted down from the last parent back to
    /// the root, which is cheaper than inserting one at a time.
    pub fn from_entries(pairs: impl IntoIterator<Item = (u64, usize)>) -> Self {
        let entries: Vec<HeapEntry> = pairs
            .into_iter()
            .enumerate()
            .map(|(seq, (weight, node))| HeapEntry { weight, seq, node })
            .collect();
        let mut heap = MinHeap {
            next_seq: entries.len(),
            entries,
        };
        for i in (0..heap.entries.len() / 2).rev() {
            heap.sift_down(i);
        }
        heap
    }

    /// Adds an entry and restores heap order along its path to the root.
    pub fn insert(&mut self, weight: u64, node: usize) {
        let entry = HeapEntry {
            weight,
            seq: self.next_seq,
            node,
        };
        self.next_seq += 1;
        self.entries.push(entry);
        self.sift_up(self.entries.len() - 1);
    }

    /// Removes and returns the lightest entry. The last entry takes its
    /// place at the root and sinks back to where it belongs.
    pub fn extract_min(&mut self) -> Result<HeapEntry, HuffmanError> {
        if self.entries.is_empty() {
            return Err(HuffmanError::EmptyQueue);
        }
        let min = self.entries.swap_remove(0);
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Ok(min)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Swaps the entry at `i` toward the root until its parent is no
    /// heavier.
    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.entries[i] < self.entries[parent] {
                self.entries.swap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
    }

    /// Swaps the entry at `i` down toward the leaves until both children are
    /// no lighter.
    fn sift_down(&mut self, mut i: usize) {
        loop {
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            let mut smallest = i;
            if left < self.entries.len() && self.entries[left] < self.entries[smallest] {
                smallest = left;
            }
            if right < self.entries.len() && self.entries[right] < self.entries[smallest] {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.entries.swap(i, smallest);
            i = smallest;
        }
    }
}
