//! # avena-core
//!
//! Core types for avena array transforms.
//!
//! - [`Sample`] - Element types an image buffer may hold
//! - [`channel`] - Channel depth, channel views, and per-channel mapping
//! - [`Error`] - Structural errors (rank, channel shape)
//!
//! ## Image buffers
//!
//! An image is a dynamic-rank [`ndarray`] array: `(H, W)` for one channel,
//! `(H, W, D)` for `D` channels. Operators take an [`ndarray::ArrayViewD`]
//! and return an owned [`ndarray::ArrayD`]; inputs are never mutated.
//!
//! ```text
//! avena-core (this crate)
//!    ^
//!    |
//!    +-- avena-ops (flips, periodic tiling, logistic mapping)
//!    +-- avena-tests (cross-crate scenarios)
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` - Enable [`channel::par_map_channels`] (enabled by default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod channel;
pub mod error;
pub mod sample;

pub use channel::{channel, channels, depth, map_channels, plane_shape};
#[cfg(feature = "parallel")]
pub use channel::par_map_channels;
pub use error::{Error, Result};
pub use sample::Sample;

/// Owned image buffer: `(H, W)` or `(H, W, D)`.
pub type Image<T> = ndarray::ArrayD<T>;

/// Borrowed image buffer: `(H, W)` or `(H, W, D)`.
pub type ImageView<'a, T> = ndarray::ArrayViewD<'a, T>;
