// Error surface reported by delegate cursors.

use thiserror::Error;

/// Fault encountered by the underlying sample source.
///
/// The buffering layer never produces one of these itself; it only
/// forwards what the delegate reports after a failed `next`/`seek`.
#[derive(Debug, Error)]
pub enum CursorError {
    #[error("storage read failed: {0}")]
    Storage(#[from] std::io::Error),
    #[error("corrupt sample block: {0}")]
    Corrupt(String),
}
