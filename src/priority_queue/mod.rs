use std::cmp::Ordering;

use crate::{Alphabet, HuffmanError, Result};

pub trait Weighted {
    fn weight(&self) -> u64;
}

#[derive(Debug)]
struct Entry<T> {
    item: T,
    weight: u64,
    seq: u64,
}

impl<T> Entry<T> {
    #[inline(always)]
    fn key(&self) -> (u64, u64) {
        (self.weight, self.seq)
    }
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Bounded binary min-heap ordered by `(weight, insertion index)`.
///
/// The insertion index is a counter stamped by [`push`](Self::push), so two items of the
/// same weight always pop in the order they were pushed. This total order makes the
/// Huffman tree shape, and therefore every code, reproducible.
#[derive(Debug)]
pub struct PriorityQueue<T> {
    heap: Vec<Entry<T>>,
    capacity: usize,
    next_seq: u64,
}

impl<T: Weighted> PriorityQueue<T> {
    pub fn new(capacity: usize) -> Self {
        Self { heap: Vec::new(), capacity, next_seq: 0 }
    }

    pub fn with_capacity(alphabet: Alphabet) -> Self {
        Self::new(alphabet.size())
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn peek_weight(&self) -> Option<u64> {
        self.heap.first().map(|e| e.weight)
    }

    /// A full queue means the caller pushed more than it popped, which is reported as
    /// `QueueOverflow`.
    pub fn push(&mut self, item: T) -> Result<()> {
        if self.heap.len() == self.capacity {
            return Err(HuffmanError::QueueOverflow { capacity: self.capacity });
        }

        let entry = Entry { weight: item.weight(), item, seq: self.next_seq };
        self.next_seq += 1;

        self.heap.push(entry);
        self.sift_up(self.heap.len() - 1);

        Ok(())
    }

    /// Returns `None` on an empty queue.
    pub fn pop(&mut self) -> Option<T> {
        if self.heap.is_empty() {
            return None;
        }

        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let min = self.heap.pop()?;

        if !self.heap.is_empty() {
            self.sift_down(0);
        }

        Some(min.item)
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.heap[i] >= self.heap[parent] {
                break;
            }
            self.heap.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.heap.len();

        loop {
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            let mut smallest = i;

            if left < n && self.heap[left] < self.heap[smallest] {
                smallest = left;
            }
            if right < n && self.heap[right] < self.heap[smallest] {
                smallest = right;
            }

            if smallest == i {
                return;
            }

            self.heap.swap(i, smallest);
            i = smallest;
        }
    }

    #[cfg(test)]
    fn is_valid_heap(&self) -> bool {
        (1..self.heap.len()).all(|i| self.heap[(i - 1) / 2] <= self.heap[i])
    }
}
