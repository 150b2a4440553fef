use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A min-ordered priority queue over `BinaryHeap`
///
/// There is no decrease-key: callers push duplicates and skip stale entries
/// when they pop them.
#[derive(Debug)]
pub struct MinQueue<T>
where
    T: Ord + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<T>>,
}

impl<T> MinQueue<T>
where
    T: Ord + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MinQueue {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries in the priority queue, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn push(&mut self, item: T) {
        self.heap.push(Reverse(item));
    }

    /// Removes the smallest entry
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|Reverse(item)| item)
    }

    /// Returns the smallest entry without removing it
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek().map(|Reverse(item)| item)
    }
}

impl<T> Default for MinQueue<T>
where
    T: Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
