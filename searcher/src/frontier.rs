//! Containers which hold the frontier of a search.
//!
//! The order items come back out of these containers is what
//! distinguishes one search strategy from another.

use std::cmp::{Ord, Ordering, PartialEq, PartialOrd};
use std::collections::{BinaryHeap, VecDeque};
use std::default::Default;

/// Last in, first out.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Put an item on top of the stack.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove the most recently pushed item.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// First in, first out.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Add an item at the back of the queue.
    pub fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Remove the earliest pushed item.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Heap entry, ordered so that the heap pops the lowest priority
/// first and, among equal priorities, the earliest pushed.
#[derive(Debug, Clone)]
struct Entry<T, P> {
    priority: P,
    sequence: u64,
    item: T,
}

impl<T, P> PartialEq for Entry<T, P>
where
    P: Ord,
{
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T, P> Eq for Entry<T, P> where P: Ord {}

impl<T, P> Ord for Entry<T, P>
where
    P: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.sequence.cmp(&other.sequence))
            .reverse()
    }
}

impl<T, P> PartialOrd for Entry<T, P>
where
    P: Ord,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Lowest priority first, ties broken by insertion order.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T, P>
where
    P: Ord,
{
    heap: BinaryHeap<Entry<T, P>>,
    count: u64,
}

impl<T, P> PriorityQueue<T, P>
where
    P: Ord,
{
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            count: 0,
        }
    }

    /// Add an item with the given priority.
    pub fn push(&mut self, item: T, priority: P) {
        self.heap.push(Entry {
            priority,
            sequence: self.count,
            item,
        });
        self.count += 1;
    }

    /// Remove the item with the lowest priority.
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|entry| entry.item)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<T, P> Default for PriorityQueue<T, P>
where
    P: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
