// Owned timestamped sample retained by the lookback window.

use serde::{Deserialize, Serialize};

/// A single `(timestamp, payload)` pair.
///
/// The payload is opaque to the buffering layer. Sources are allowed to
/// reuse their payload storage between reads, so a `Sample` always owns
/// a private copy of the bytes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub t_ms: i64,
    pub payload: Vec<u8>,
}

impl Sample {
    /// Builds a sample by copying `payload` into owned storage.
    pub fn copied(t_ms: i64, payload: &[u8]) -> Self {
        Self {
            t_ms,
            payload: payload.to_vec(),
        }
    }

    /// Overwrites this sample in place, reusing the payload allocation.
    pub fn replace_with(&mut self, t_ms: i64, payload: &[u8]) {
        self.t_ms = t_ms;
        self.payload.clear();
        self.payload.extend_from_slice(payload);
    }
}
