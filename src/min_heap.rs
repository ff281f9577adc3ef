//! Array-backed binary min-heap.
//!
//! The heap is stored as a complete binary tree in a zero-based array:
//!
//! * left child of `i`  = `2i + 1`
//! * right child of `i` = `2i + 2`
//! * parent of `i`      = `(i - 1) / 2`
//!
//! Ordering comes from a comparison rule handed over at construction, so the
//! heap knows nothing about the shape of what it stores.

use std::cmp::Ordering;

use crate::error::{Error, Result};

/// Comparison rule used by [`MinHeap::new`] for `T: Ord`.
pub type Natural<T> = fn(&T, &T) -> Ordering;

const INITIAL_CAPACITY: usize = 16;

pub struct MinHeap<T, C = Natural<T>> {
    items: Vec<T>,
    cmp: C,
}

impl<T: Ord> MinHeap<T> {
    pub fn new() -> Self {
        Self::with_comparator(T::cmp)
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> MinHeap<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    pub fn with_comparator(cmp: C) -> Self {
        Self::with_capacity(INITIAL_CAPACITY, cmp)
    }

    pub fn with_capacity(capacity: usize, cmp: C) -> Self {
        MinHeap {
            items: Vec::with_capacity(capacity.max(1)),
            cmp,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Appends `item` at the next free slot and sifts it up.
    pub fn insert(&mut self, item: T) {
        self.ensure_extra_capacity();
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    pub fn peek_min(&self) -> Result<&T> {
        self.items.first().ok_or(Error::EmptyStructure)
    }

    /// Removes the root, moves the last element into its slot and sifts it down.
    pub fn extract_min(&mut self) -> Result<T> {
        if self.items.is_empty() {
            return Err(Error::EmptyStructure);
        }
        let min = self.items.swap_remove(0);
        self.sift_down(0);
        Ok(min)
    }

    /// Checks the order property over the whole array.
    pub fn is_heap(&self) -> bool {
        (1..self.items.len()).all(|i| {
            (self.cmp)(&self.items[Self::parent(i)], &self.items[i]) != Ordering::Greater
        })
    }

    fn parent(i: usize) -> usize {
        (i - 1) / 2
    }

    fn left(i: usize) -> usize {
        2 * i + 1
    }

    fn right(i: usize) -> usize {
        2 * i + 2
    }

    // Doubles the backing storage when full; never drops elements.
    fn ensure_extra_capacity(&mut self) {
        let len = self.items.len();
        if len == self.items.capacity() {
            self.items.reserve_exact(len.max(1));
        }
    }

    fn less(&self, a: usize, b: usize) -> bool {
        (self.cmp)(&self.items[a], &self.items[b]) == Ordering::Less
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let p = Self::parent(i);
            if !self.less(i, p) {
                break;
            }
            self.items.swap(i, p);
            i = p;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.items.len();
        loop {
            let l = Self::left(i);
            if l >= n {
                break;
            }
            let r = Self::right(i);
            let mut smaller = l;
            if r < n && self.less(r, l) {
                smaller = r;
            }
            if !self.less(smaller, i) {
                break;
            }
            self.items.swap(i, smaller);
            i = smaller;
        }
    }
}

impl<T: std::fmt::Debug, C> std::fmt::Debug for MinHeap<T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MinHeap").field("items", &self.items).finish()
    }
}
