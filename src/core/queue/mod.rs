use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Plain FIFO container: handles only ordering, no synchronization
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Create a new, empty queue
    pub(crate) fn new() -> Self {
        Self { items: VecDeque::new() }
    }

    /// Append an item at the tail
    pub(crate) fn enqueue(&mut self, item: T) {
        let len_before = self.items.len();
        self.items.push_back(item);
        // -- post op assertion: tail insertion grows the queue by exactly one
        assert_eq!(self.items.len(), len_before + 1, "Queue length must grow by 1 on enqueue");
    }

    /// Remove and return the item at the head, or None when empty
    pub(crate) fn dequeue(&mut self) -> Option<T> {
        let len_before = self.items.len();
        let result = self.items.pop_front();
        // -- post op assertion: head removal shrinks the queue only on success
        match result {
            Some(_) => assert_eq!(self.items.len(), len_before - 1, "Queue length must shrink by 1"),
            None => assert_eq!(len_before, 0, "Empty dequeue only happens on an empty queue"),
        }
        result
    }

    /// Current number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Thread-safe wrapper around the queue
pub type SafeQueue<T> = Arc<Mutex<Queue<T>>>;
