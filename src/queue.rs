use core::fmt;
use std::cmp::Ordering;

use crate::error::Error;

/// Starting capacity when none is given.
const DEFAULT_CAPACITY: usize = 16;

/// Upper bound on the backing array. Growth saturates here; an enqueue on a
/// queue that is full at this capacity fails with [Error::QueueCapacity].
pub const MAX_CAPACITY: usize = i32::MAX as usize - 8;

type Comparator<T> = Box<dyn Fn(&T, &T) -> Ordering>;

/// Array-backed binary min-heap ordered by a caller-supplied comparator, or
/// by the element type's natural ordering when none is given.
///
/// [std::collections::BinaryHeap] covers the pure heap use case; this
/// structure additionally exposes linear [find](Self::find) and
/// [contains](Self::contains) over live slots together with an explicit
/// growth policy, which the A* open set relies on for its relaxation step.
///
/// There is no true decrease-key: lowering a live element's priority means
/// updating it through [find_mut](Self::find_mut) and enqueueing a fresh
/// element, leaving the stale slot in place until it is dequeued.
pub struct PriorityQueue<T> {
    items: Vec<T>,
    capacity: usize,
    compare: Option<Comparator<T>>,
}

impl<T: Ord> PriorityQueue<T> {
    /// An empty queue with default capacity and natural ordering.
    pub fn new() -> PriorityQueue<T> {
        PriorityQueue::with_capacity(DEFAULT_CAPACITY)
    }

    /// An empty queue with the given starting capacity and natural ordering.
    /// A zero capacity falls back to the default.
    pub fn with_capacity(capacity: usize) -> PriorityQueue<T> {
        let capacity = if capacity == 0 {
            DEFAULT_CAPACITY
        } else {
            capacity.min(MAX_CAPACITY)
        };
        PriorityQueue {
            items: Vec::with_capacity(capacity),
            capacity,
            compare: None,
        }
    }

    /// An empty queue ordered by `compare` instead of the natural ordering.
    /// The comparator is fixed for the lifetime of the queue.
    pub fn with_comparator<F>(compare: F) -> PriorityQueue<T>
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        PriorityQueue::with_capacity_and_comparator(DEFAULT_CAPACITY, compare)
    }

    /// An empty queue with both a starting capacity and a comparator.
    pub fn with_capacity_and_comparator<F>(capacity: usize, compare: F) -> PriorityQueue<T>
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        let mut queue = PriorityQueue::with_capacity(capacity);
        queue.compare = Some(Box::new(compare));
        queue
    }

    fn order(&self, a: &T, b: &T) -> Ordering {
        match &self.compare {
            Some(compare) => compare(a, b),
            None => a.cmp(b),
        }
    }

    /// Inserts an element, sifting it up from the tail slot. Amortized
    /// O(log n); grows the backing array when full.
    pub fn enqueue(&mut self, item: T) -> Result<(), Error> {
        if self.items.len() == self.capacity {
            self.grow()?;
        }
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
        Ok(())
    }

    /// Removes and returns the minimum element, or `None` when empty.
    /// The last element is swapped into the root slot and sifted down.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let min = self.items.pop();
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        min
    }

    /// The minimum element without removing it, or `None` when empty.
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Linear equality scan over live slots.
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    /// Linear scan returning the first element matching `predicate`, in
    /// slot order.
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().find(|item| predicate(item))
    }

    /// Like [find](Self::find) but mutable, for updating a live element in
    /// place. The heap invariant is the caller's responsibility: after
    /// lowering an element's priority, enqueue a fresh copy to restore
    /// ordering.
    pub fn find_mut<P>(&mut self, mut predicate: P) -> Option<&mut T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter_mut().find(|item| predicate(item))
    }

    /// Copies `dst.len()` elements starting at `offset` into `dst`, in slot
    /// order. Fails with [Error::QueueBounds] when the bounds do not fit the
    /// queue contents.
    pub fn copy_to(&self, dst: &mut [T], offset: usize) -> Result<(), Error>
    where
        T: Clone,
    {
        if offset >= self.items.len() || self.items.len() - offset < dst.len() {
            return Err(Error::QueueBounds);
        }
        dst.clone_from_slice(&self.items[offset..offset + dst.len()]);
        Ok(())
    }

    /// The live elements in slot order. No ordering guarantee beyond the
    /// heap invariant.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// The live elements copied out in slot order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.to_vec()
    }

    /// Drops all elements. Capacity is retained.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn grow(&mut self) -> Result<(), Error> {
        let old = self.capacity;
        let grown = if old < 64 { old + old + 2 } else { old + (old >> 1) };
        let new = grown.min(MAX_CAPACITY);
        if new <= old {
            return Err(Error::QueueCapacity);
        }
        self.items.reserve_exact(new - self.items.len());
        self.capacity = new;
        Ok(())
    }

    fn sift_up(&mut self, mut k: usize) {
        while k > 0 {
            let parent = (k - 1) >> 1;
            if self.order(&self.items[k], &self.items[parent]) == Ordering::Less {
                self.items.swap(k, parent);
                k = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut k: usize) {
        let len = self.items.len();
        let half = len >> 1;
        while k < half {
            let mut child = (k << 1) + 1;
            let right = child + 1;
            if right < len && self.order(&self.items[right], &self.items[child]) == Ordering::Less {
                child = right;
            }
            if self.order(&self.items[child], &self.items[k]) == Ordering::Less {
                self.items.swap(k, child);
                k = child;
            } else {
                break;
            }
        }
    }
}

impl<T: Ord> Default for PriorityQueue<T> {
    fn default() -> PriorityQueue<T> {
        PriorityQueue::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for PriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("items", &self.items)
            .field("capacity", &self.capacity)
            .finish()
    }
}
