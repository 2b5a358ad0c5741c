use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Deterministic one-shot timer queue driven by a virtual millisecond clock.
///
/// Entries fire by due time; equal due times fire in scheduling order.
#[derive(Debug)]
pub struct TimerQueue<T> {
    heap: BinaryHeap<Reverse<TimerEntry<T>>>,
    next_seq: u64,
}

#[derive(Debug)]
struct TimerEntry<T> {
    due_ms: u64,
    seq: u64,
    task: T,
}

impl<T> PartialEq for TimerEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.due_ms == other.due_ms && self.seq == other.seq
    }
}

impl<T> Eq for TimerEntry<T> {}

impl<T> PartialOrd for TimerEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for TimerEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.due_ms
            .cmp(&other.due_ms)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }
}

impl<T> TimerQueue<T> {
    pub fn schedule(&mut self, due_ms: u64, task: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(TimerEntry { due_ms, seq, task }));
    }

    #[must_use]
    pub fn next_due_ms(&self) -> Option<u64> {
        self.heap.peek().map(|Reverse(entry)| entry.due_ms)
    }

    /// Pops the earliest task due at or before `until_ms`.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<(u64, T)> {
        if self.next_due_ms()? > until_ms {
            return None;
        }
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.due_ms, entry.task))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
