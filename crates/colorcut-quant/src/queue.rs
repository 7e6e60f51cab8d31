//! Max-priority queue of color boxes
//!
//! Wraps a [`BinaryHeap`] whose entries carry the box's key under the active
//! [`BoxOrder`]. Keys are computed once at push time; boxes are immutable so
//! they never go stale. Equal keys pop in insertion order.

use crate::order::BoxOrder;
use crate::vbox::VBox;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct Entry<'a> {
    key: u64,
    seq: u64,
    vbox: VBox<'a>,
}

impl Ord for Entry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Larger key first; among equal keys the earlier push wins
        self.key
            .cmp(&other.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry<'_> {}

/// Priority queue that always yields the maximum box under its order
pub struct BoxQueue<'a> {
    order: BoxOrder,
    heap: BinaryHeap<Entry<'a>>,
    next_seq: u64,
}

impl<'a> BoxQueue<'a> {
    /// Create an empty queue using `order`
    pub fn new(order: BoxOrder) -> Self {
        Self {
            order,
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Active ordering policy
    #[inline]
    pub fn order(&self) -> BoxOrder {
        self.order
    }

    /// Number of queued boxes
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Insert a box
    pub fn push(&mut self, vbox: VBox<'a>) {
        let key = self.order.key(&vbox);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { key, seq, vbox });
    }

    /// Remove and return the maximum box
    pub fn pop(&mut self) -> Option<VBox<'a>> {
        self.heap.pop().map(|e| e.vbox)
    }

    /// The maximum box, without removing it
    pub fn peek(&self) -> Option<&VBox<'a>> {
        self.heap.peek().map(|e| &e.vbox)
    }

    /// Same boxes under a different order
    ///
    /// Boxes are re-inserted in their original insertion order so ties keep
    /// resolving the same way.
    pub fn reorder(self, order: BoxOrder) -> Self {
        let mut entries = self.heap.into_vec();
        entries.sort_unstable_by_key(|e| e.seq);

        let mut queue = Self::new(order);
        queue.extend(entries.into_iter().map(|e| e.vbox));
        queue
    }

    /// All boxes, maximum first
    pub fn into_boxes(self) -> Vec<VBox<'a>> {
        self.heap
            .into_sorted_vec()
            .into_iter()
            .rev()
            .map(|e| e.vbox)
            .collect()
    }
}

impl<'a> Extend<VBox<'a>> for BoxQueue<'a> {
    fn extend<I: IntoIterator<Item = VBox<'a>>>(&mut self, iter: I) {
        for vbox in iter {
            self.push(vbox);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::histogram::Histogram;
    use crate::vbox::ColorRegion;
    use colorcut_core::Rgb;

    fn sample_hist() -> Histogram {
        // red cell 0: 1 sample, red cell 10: 2 samples, red cell 20: 3 samples
        let mut pixels = vec![Rgb::new(0, 0, 0)];
        pixels.extend([Rgb::new(80, 0, 0); 2]);
        pixels.extend([Rgb::new(160, 0, 0); 3]);
        Histogram::from_pixels(&pixels, 5).unwrap()
    }

    fn red_slab(hist: &Histogram, lo: u8, hi: u8) -> VBox<'_> {
        VBox::new(ColorRegion::new(lo, hi, 0, 0, 0, 0).unwrap(), hist).unwrap()
    }

    #[test]
    fn test_pops_maximum() {
        let hist = sample_hist();
        let mut queue = BoxQueue::new(BoxOrder::Population);
        queue.push(red_slab(&hist, 10, 10));
        queue.push(red_slab(&hist, 0, 0));
        queue.push(red_slab(&hist, 20, 20));

        let counts: Vec<u64> = std::iter::from_fn(|| queue.pop())
            .map(|b| b.count(false))
            .collect();
        assert_eq!(counts, vec![3, 2, 1]);
    }

    #[test]
    fn test_ties_pop_in_insertion_order() {
        let hist = sample_hist();
        let mut queue = BoxQueue::new(BoxOrder::Population);
        // Both hold 2 samples
        queue.push(red_slab(&hist, 5, 10));
        queue.push(red_slab(&hist, 10, 15));

        assert_eq!(queue.pop().unwrap().region().bounds(crate::Channel::Red), (5, 10));
        assert_eq!(queue.pop().unwrap().region().bounds(crate::Channel::Red), (10, 15));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_reorder_switches_policy() {
        let hist = sample_hist();
        let mut queue = BoxQueue::new(BoxOrder::Population);
        // 3 samples in 1 cell vs 2 samples in 11 cells
        queue.push(red_slab(&hist, 20, 20));
        queue.push(red_slab(&hist, 5, 15));
        assert_eq!(queue.peek().unwrap().count(false), 3);

        let queue = queue.reorder(BoxOrder::PopulationVolume);
        assert_eq!(queue.order(), BoxOrder::PopulationVolume);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.peek().unwrap().count(false), 2);
    }

    #[test]
    fn test_into_boxes_max_first() {
        let hist = sample_hist();
        let mut queue = BoxQueue::new(BoxOrder::Population);
        queue.extend([red_slab(&hist, 0, 0), red_slab(&hist, 20, 20), red_slab(&hist, 10, 10)]);
        let counts: Vec<u64> = queue.into_boxes().iter().map(|b| b.count(false)).collect();
        assert_eq!(counts, vec![3, 2, 1]);
    }
}
