// Time-windowed ring buffer for ordered sample streams.
// Invariants: insertion order preserved, eviction bound keyed to the
// newest sample, capacity only grows.

use tracing::debug;

use crate::model::Sample;

/// Growable ring retaining every sample within `delta` time units of
/// the most recently added one.
///
/// Callers must add samples with non-decreasing timestamps; the ring
/// does not detect violations. `delta` must be non-negative.
#[derive(Debug)]
pub struct SampleRing {
    delta: i64,
    buf: Vec<Sample>,
    cap: usize,
    head: usize,
    len: usize,
}

impl SampleRing {
    /// `size_hint` is an initial capacity guess, not a limit; it is
    /// clamped to at least one slot.
    pub fn new(delta: i64, size_hint: usize) -> Self {
        let cap = size_hint.max(1);
        Self {
            delta,
            buf: Vec::with_capacity(cap),
            cap,
            head: 0,
            len: 0,
        }
    }

    /// Appends a sample, copying `payload`, then evicts from the oldest
    /// end everything older than `t_ms - delta`. The bound is
    /// inclusive: a sample at exactly `t_ms - delta` is retained.
    pub fn add(&mut self, t_ms: i64, payload: &[u8]) {
        if self.len == self.cap {
            self.grow();
        }

        let idx = (self.head + self.len) % self.cap;
        if idx == self.buf.len() {
            self.buf.push(Sample::copied(t_ms, payload));
        } else {
            // Dead slot from an earlier eviction; reuse its allocation.
            self.buf[idx].replace_with(t_ms, payload);
        }
        self.len += 1;

        let bound = t_ms - self.delta;
        while self.buf[self.head].t_ms < bound {
            self.head = (self.head + 1) % self.cap;
            self.len -= 1;
        }
    }

    // Doubles capacity, relocating the live range to the front in order.
    fn grow(&mut self) {
        let next_cap = self.cap * 2;
        let mut next = Vec::with_capacity(next_cap);
        next.extend(self.buf.drain(self.head..));
        next.extend(self.buf.drain(..));
        self.buf = next;
        self.head = 0;
        self.cap = next_cap;
        debug!(cap = self.cap, len = self.len, "sample ring grew");
    }

    /// Ordered snapshot of the retained samples, oldest first.
    pub fn samples(&self) -> Vec<Sample> {
        self.iter().cloned().collect()
    }

    /// Borrowed ordered iteration, oldest first. Restartable and free
    /// of side effects.
    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        (0..self.len).map(move |i| &self.buf[(self.head + i) % self.cap])
    }

    /// Newest retained sample, if any.
    pub fn last(&self) -> Option<&Sample> {
        if self.len == 0 {
            return None;
        }
        Some(&self.buf[(self.head + self.len - 1) % self.cap])
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops all retained samples while keeping the current capacity.
    pub fn clear(&mut self) {
        self.buf.clear();
        self.head = 0;
        self.len = 0;
    }
}
