//! Error types for avena-core operations.
//!
//! The transforms in this workspace are total over well-formed image
//! buffers. The only failures are structural: a buffer that is neither
//! 2D nor 3D, a channel index past the depth, or a per-channel transform
//! whose output plane disagrees with the declared shape function.
//!
//! # Usage
//!
//! ```rust
//! use avena_core::{Error, Result};
//!
//! fn check_rank(rank: usize) -> Result<()> {
//!     if rank != 2 && rank != 3 {
//!         return Err(Error::InvalidRank { rank });
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_rank(4).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while addressing or reassembling image channels.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The buffer is not a 2D `(H, W)` or 3D `(H, W, D)` array.
    #[error("image buffer must be 2D or 3D, got rank {rank}")]
    InvalidRank {
        /// Number of axes of the offending buffer
        rank: usize,
    },

    /// A channel index is past the buffer's depth.
    #[error("channel {index} out of range for depth {depth}")]
    ChannelOutOfRange {
        /// Requested channel
        index: usize,
        /// Buffer depth
        depth: usize,
    },

    /// A per-channel transform produced a plane of an unexpected shape.
    ///
    /// Every channel must map to the plane shape the shape function
    /// declares, otherwise the channels cannot be stacked.
    #[error("channel {channel} mapped to {got_h}x{got_w}, expected {expected_h}x{expected_w}")]
    ChannelShapeMismatch {
        /// Channel index
        channel: usize,
        /// Declared plane height
        expected_h: usize,
        /// Declared plane width
        expected_w: usize,
        /// Produced plane height
        got_h: usize,
        /// Produced plane width
        got_w: usize,
    },
}

impl Error {
    /// Creates an [`Error::ChannelShapeMismatch`] error.
    #[inline]
    pub fn channel_shape_mismatch(
        channel: usize,
        expected: (usize, usize),
        got: (usize, usize),
    ) -> Self {
        Self::ChannelShapeMismatch {
            channel,
            expected_h: expected.0,
            expected_w: expected.1,
            got_h: got.0,
            got_w: got.1,
        }
    }
}
