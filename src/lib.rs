// Delta-windowed lookback buffering for time-ordered sample streams.

pub mod buffers;
pub mod constants;
pub mod cursor;
pub mod error;
pub mod list;
pub mod model;
