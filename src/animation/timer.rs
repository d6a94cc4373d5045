//! Timer queue over a virtual millisecond clock.
//!
//! Timers fire in `(due, seq)` order: earlier deadlines first, and timers
//! sharing a deadline in the order they were scheduled.

use std::collections::BTreeMap;

/// Handle for a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId {
    due: u64,
    seq: u64,
}

impl TimerId {
    /// Virtual time (ms) at which the timer fires.
    pub fn due(&self) -> u64 {
        self.due
    }
}

/// Pending timers carrying payloads of type `A`.
#[derive(Debug)]
pub struct TimerQueue<A> {
    now: u64,
    next_seq: u64,
    pending: BTreeMap<TimerId, A>,
}

impl<A> Default for TimerQueue<A> {
    fn default() -> Self {
        Self {
            now: 0,
            next_seq: 0,
            pending: BTreeMap::new(),
        }
    }
}

impl<A> TimerQueue<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Schedule `action` to fire `delay_ms` from now.
    pub fn schedule(&mut self, delay_ms: u64, action: A) -> TimerId {
        let id = TimerId {
            due: self.now.saturating_add(delay_ms),
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.pending.insert(id, action);
        id
    }

    /// Remove the earliest timer due at or before `until`, moving the clock
    /// to its deadline.
    pub fn pop_due(&mut self, until: u64) -> Option<A> {
        let (&id, _) = self.pending.first_key_value()?;
        if id.due > until {
            return None;
        }
        let action = self.pending.remove(&id)?;
        self.now = self.now.max(id.due);
        Some(action)
    }

    /// Move the clock forward to `time`. The clock never runs backwards.
    pub fn set_now(&mut self, time: u64) {
        self.now = self.now.max(time);
    }

    /// Deadline of the earliest pending timer.
    pub fn next_due(&self) -> Option<u64> {
        self.pending.keys().next().map(|id| id.due)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_in_deadline_order() {
        let mut q = TimerQueue::new();
        q.schedule(300, "c");
        q.schedule(100, "a");
        q.schedule(200, "b");

        assert_eq!(q.pop_due(1000), Some("a"));
        assert_eq!(q.now(), 100);
        assert_eq!(q.pop_due(1000), Some("b"));
        assert_eq!(q.pop_due(1000), Some("c"));
        assert_eq!(q.now(), 300);
        assert!(q.is_empty());
    }

    #[test]
    fn same_deadline_keeps_schedule_order() {
        let mut q = TimerQueue::new();
        q.schedule(0, 1);
        q.schedule(0, 2);
        q.schedule(0, 3);
        let fired: Vec<_> = std::iter::from_fn(|| q.pop_due(0)).collect();
        assert_eq!(fired, vec![1, 2, 3]);
    }

    #[test]
    fn pop_due_respects_limit() {
        let mut q = TimerQueue::new();
        q.schedule(500, ());
        assert_eq!(q.pop_due(499), None);
        assert_eq!(q.now(), 0);
        assert_eq!(q.next_due(), Some(500));
        assert_eq!(q.pop_due(500), Some(()));
    }

    #[test]
    fn schedule_is_relative_to_now() {
        let mut q = TimerQueue::new();
        q.set_now(1000);
        let id = q.schedule(50, ());
        assert_eq!(id.due(), 1050);
    }

    #[test]
    fn clock_never_runs_backwards() {
        let mut q: TimerQueue<()> = TimerQueue::new();
        q.set_now(100);
        q.set_now(50);
        assert_eq!(q.now(), 100);
    }
}
