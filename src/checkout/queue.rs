use std::collections::VecDeque;

/// FIFO log of issued items, oldest issue at the front.
#[derive(Debug)]
pub struct IssueQueue<T> {
    items: VecDeque<T>,
}

impl<T> IssueQueue<T> {
    pub fn new() -> Self {
        Self { items: VecDeque::new() }
    }

    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes the oldest entry, `None` once the queue is drained.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for IssueQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
