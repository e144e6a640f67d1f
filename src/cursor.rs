// Lookback-buffered cursor over a forward-only sample source.

use tracing::trace;

use crate::buffers::SampleRing;
use crate::constants::DEFAULT_RING_CAPACITY;
use crate::error::CursorError;
use crate::model::Sample;

/// Forward-only cursor over a time-ordered sample stream.
///
/// Implemented by the storage/query layer; the payload slice returned
/// by `at` is only guaranteed valid until the next call on the cursor.
pub trait SampleCursor {
    /// Advances one step. False means the stream is exhausted.
    fn next(&mut self) -> bool;

    /// Positions at the first sample with timestamp >= `t_ms`. False
    /// means no such sample exists. Never moves backward.
    fn seek(&mut self, t_ms: i64) -> bool;

    /// Reads the current sample. Only valid after a successful
    /// `next`/`seek`; calling it earlier may panic.
    fn at(&self) -> (i64, &[u8]);

    /// Fault reported by the source, if any.
    fn err(&self) -> Option<&CursorError>;
}

/// Wraps a delegate cursor and retains every sample it steps past that
/// lies within `delta` time units behind the current position.
///
/// The retained window trails the current sample: the current sample
/// itself is never part of the history until the cursor moves past it.
pub struct BufferedCursor<C> {
    inner: C,
    ring: SampleRing,
    current: Option<Sample>,
    exhausted: bool,
}

impl<C: SampleCursor> BufferedCursor<C> {
    pub fn new(inner: C, delta: i64) -> Self {
        Self::with_capacity(inner, delta, DEFAULT_RING_CAPACITY)
    }

    pub fn with_capacity(inner: C, delta: i64, size_hint: usize) -> Self {
        Self {
            inner,
            ring: SampleRing::new(delta, size_hint),
            current: None,
            exhausted: false,
        }
    }

    /// Moves forward until the current sample's timestamp is at least
    /// `target`. Returns true iff such a sample becomes (or already is)
    /// current. A target at or behind the current position is a no-op.
    pub fn seek(&mut self, target: i64) -> bool {
        let current_t = self.current.as_ref().map(|s| s.t_ms);
        match current_t {
            None => {
                if !self.inner.seek(target) {
                    return false;
                }
                let (t_ms, payload) = self.inner.at();
                self.current = Some(Sample::copied(t_ms, payload));
                trace!(t_ms, "adopted first position from delegate seek");
                true
            }
            Some(t_ms) if target <= t_ms => true,
            Some(_) => {
                while self.advance() {
                    if self.current.as_ref().map(|s| s.t_ms) >= Some(target) {
                        return true;
                    }
                }
                false
            }
        }
    }

    /// Steps to the next sample, pushing the one being left behind into
    /// the lookback ring. Returns false once the delegate is exhausted;
    /// exhaustion is terminal and `current` keeps its last value.
    pub fn advance(&mut self) -> bool {
        if self.exhausted {
            return false;
        }

        // The eviction bound is keyed to the sample being pushed, which
        // is the position being left, not the one about to be adopted.
        if let Some(current) = &self.current {
            self.ring.add(current.t_ms, &current.payload);
        }

        if !self.inner.next() {
            self.exhausted = true;
            return false;
        }

        let (t_ms, payload) = self.inner.at();
        match &mut self.current {
            Some(current) => current.replace_with(t_ms, payload),
            None => self.current = Some(Sample::copied(t_ms, payload)),
        }
        true
    }

    /// The active sample, or None if no position has been established.
    pub fn current(&self) -> Option<(i64, &[u8])> {
        self.current
            .as_ref()
            .map(|s| (s.t_ms, s.payload.as_slice()))
    }

    /// Ascending iteration over the retained trailing window. Excludes
    /// the current sample; restartable.
    pub fn history(&self) -> impl Iterator<Item = (i64, &[u8])> {
        self.ring.iter().map(|s| (s.t_ms, s.payload.as_slice()))
    }

    /// Newest sample in the trailing window, i.e. the position most
    /// recently stepped past.
    pub fn peek_back(&self) -> Option<(i64, &[u8])> {
        self.ring.last().map(|s| (s.t_ms, s.payload.as_slice()))
    }

    /// Forwards the delegate's error, if it reported one.
    pub fn last_error(&self) -> Option<&CursorError> {
        self.inner.err()
    }
}

// A buffered cursor is itself a valid delegate for a further layer.
impl<C: SampleCursor> SampleCursor for BufferedCursor<C> {
    fn next(&mut self) -> bool {
        self.advance()
    }

    fn seek(&mut self, t_ms: i64) -> bool {
        BufferedCursor::seek(self, t_ms)
    }

    fn at(&self) -> (i64, &[u8]) {
        match self.current() {
            Some(sample) => sample,
            None => panic!("at() called before a successful next/seek"),
        }
    }

    fn err(&self) -> Option<&CursorError> {
        self.last_error()
    }
}
