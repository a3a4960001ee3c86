//! # avena-ops
//!
//! Array-level image transforms built on [`avena_core`].
//!
//! # Modules
//!
//! - [`flip`] - Vertical/horizontal reflections of a channel
//! - [`tile`] - Periodic 3x3 mirror tiling
//! - [`logistic`](mod@logistic) - Sigmoid contrast remapping
//! - [`parallel`] - Channel-parallel versions (feature `parallel`)
//!
//! Every operator works on one 2D channel and is lifted to whole images
//! with [`avena_core::map_channels`], so `(H, W)` and `(H, W, D)` inputs
//! are both accepted and the depth-1 case never grows a channel axis.
//!
//! # Example
//!
//! ```rust
//! use avena_ops::{logistic, tile9_periodic};
//! use ndarray::Array3;
//!
//! let img = Array3::<f32>::from_elem((16, 16, 3), 0.25).into_dyn();
//!
//! let tiled = tile9_periodic(img.view()).unwrap();
//! assert_eq!(tiled.shape(), &[48, 48, 3]);
//!
//! let contrast = logistic(10.0, (0.0, 1.0), 0.5, img.view()).unwrap();
//! assert!(contrast.iter().all(|&v| v > 0.0 && v < 0.5));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod flip;
pub mod logistic;
pub mod tile;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use avena_core::{Error, Image, ImageView, Result, Sample};
pub use flip::{flip_horizontal, flip_vertical, rotate_180};
pub use logistic::{logistic, logistic_channel, Logistic};
pub use tile::{tile9_periodic, tile9_periodic_channel, tile9_shape, Reflection, TILE9_LAYOUT};
