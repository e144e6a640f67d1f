// Tuning constants for lookback buffering.

/// Initial ring capacity used by `BufferedCursor` when no hint is given.
pub const DEFAULT_RING_CAPACITY: usize = 16;
