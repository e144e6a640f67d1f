// In-memory sample cursor over a fixed, ordered list.

use crate::cursor::SampleCursor;
use crate::error::CursorError;
use crate::model::Sample;

/// Trivial delegate over a pre-built sample list, ordered by timestamp.
/// Mainly useful as a stand-in source in tests.
pub struct ListCursor {
    samples: Vec<Sample>,
    idx: Option<usize>,
}

impl ListCursor {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples, idx: None }
    }
}

impl SampleCursor for ListCursor {
    fn next(&mut self) -> bool {
        let next = match self.idx {
            None => 0,
            Some(idx) => idx + 1,
        };
        self.idx = Some(next);
        next < self.samples.len()
    }

    fn seek(&mut self, t_ms: i64) -> bool {
        // Forward-only: search from the current position, never behind it.
        let from = self.idx.unwrap_or(0).min(self.samples.len());
        let offset = self.samples[from..].partition_point(|s| s.t_ms < t_ms);
        self.idx = Some(from + offset);
        from + offset < self.samples.len()
    }

    fn at(&self) -> (i64, &[u8]) {
        let idx = match self.idx {
            Some(idx) => idx,
            None => panic!("at() called before a successful next/seek"),
        };
        let sample = &self.samples[idx];
        (sample.t_ms, &sample.payload)
    }

    fn err(&self) -> Option<&CursorError> {
        None
    }
}
