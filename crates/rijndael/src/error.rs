//! Library-wide error and result types.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors reported by the slice-based entry points.
///
/// The array-based API takes `[u8; 16]` inputs and cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An input slice was not exactly the size the cipher operates on.
    #[error("invalid length for {context}: expected {expected} bytes, got {got}")]
    InvalidLength {
        /// Which input was rejected.
        context: &'static str,
        /// Required length in bytes.
        expected: usize,
        /// Length actually supplied.
        got: usize,
    },
}

impl Error {
    pub(crate) fn check_len(context: &'static str, expected: usize, got: usize) -> Result<()> {
        if expected == got {
            Ok(())
        } else {
            Err(Error::InvalidLength {
                context,
                expected,
                got,
            })
        }
    }
}
