use super::CappedVec;

/// FIFO over ids `0..size` in which every id is pending at most once.
///
/// The queue has an explicit "started" state so that the owner can tell
/// whether someone further up the call stack is already draining it.
#[derive(Clone, Debug)]
pub struct FiniteSearchQueue {
    items: CappedVec<usize>,
    top: usize,
    stored: Vec<bool>,
    is_started: bool,
}

impl FiniteSearchQueue {
    pub fn new(size: usize) -> FiniteSearchQueue {
        FiniteSearchQueue {
            items: CappedVec::new(size),
            top: 0,
            stored: vec![false; size],
            is_started: false,
        }
    }
    pub fn is_started(&self) -> bool {
        self.is_started
    }
    pub fn start(&mut self) {
        self.is_started = true;
    }
    pub fn finish(&mut self) {
        self.is_started = false;
    }
    pub fn empty(&self) -> bool {
        self.top == self.items.len()
    }
    pub fn push(&mut self, id: usize) {
        if self.stored[id] {
            return;
        }
        self.stored[id] = true;
        if self.items.is_full() {
            // at most `size` ids are pending, so compaction always frees a slot
            self.items.remove_front(self.top);
            self.top = 0;
        }
        self.items.push(id);
    }
    pub fn pop(&mut self) -> usize {
        let id = self.items[self.top];
        self.top += 1;
        self.stored[id] = false;
        if self.top == self.items.len() {
            self.items.clear();
            self.top = 0;
        }
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_fifo_and_dedup() {
        let mut queue = FiniteSearchQueue::new(5);
        assert!(queue.empty());

        queue.push(3);
        queue.push(1);
        queue.push(3);
        queue.push(4);

        assert_eq!(queue.pop(), 3);
        // 3 is no longer pending, so it goes to the back
        queue.push(3);
        assert_eq!(queue.pop(), 1);
        assert_eq!(queue.pop(), 4);
        assert_eq!(queue.pop(), 3);
        assert!(queue.empty());
    }

    #[test]
    fn test_queue_reuses_capacity() {
        let mut queue = FiniteSearchQueue::new(3);
        queue.push(0);
        queue.push(1);
        queue.push(2);
        assert_eq!(queue.pop(), 0);
        // the backing buffer is full; this push compacts it
        queue.push(0);
        assert_eq!(queue.pop(), 1);
        queue.push(1);
        assert_eq!(queue.pop(), 2);
        assert_eq!(queue.pop(), 0);
        assert_eq!(queue.pop(), 1);
        assert!(queue.empty());

        for round in 0..10 {
            queue.push(round % 3);
            assert_eq!(queue.pop(), round % 3);
        }
    }

    #[test]
    fn test_queue_started_flag() {
        let mut queue = FiniteSearchQueue::new(2);
        assert!(!queue.is_started());
        queue.start();
        assert!(queue.is_started());
        queue.push(1);
        assert!(!queue.empty());
        assert_eq!(queue.pop(), 1);
        assert!(queue.empty());
        queue.finish();
        assert!(!queue.is_started());
    }
}
