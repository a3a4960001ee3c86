//! Parallel image operations using Rayon.
//!
//! Same results as the sequential operators; channels are processed on the
//! rayon pool. Worth it for deep images (many channels) of moderate size.
//!
//! # Example
//!
//! ```rust
//! use avena_ops::parallel;
//! use ndarray::Array3;
//!
//! let img = Array3::<f32>::zeros((64, 64, 8)).into_dyn();
//! let tiled = parallel::tile9_periodic(img.view()).unwrap();
//! assert_eq!(tiled.shape(), &[192, 192, 8]);
//! ```

use crate::logistic::Logistic;
use crate::tile::{tile9_periodic_channel, tile9_shape};
use avena_core::{depth, par_map_channels, Image, ImageView, Result, Sample};
use tracing::trace;

/// Parallel [`crate::tile9_periodic`].
pub fn tile9_periodic<T: Sample>(image: ImageView<'_, T>) -> Result<Image<T>> {
    let d = depth(&image)?;
    trace!(shape = ?image.shape(), depth = d, "parallel::tile9_periodic");
    par_map_channels(image, tile9_periodic_channel::<T>, tile9_shape)
}

/// Parallel [`crate::logistic`](fn@crate::logistic).
pub fn logistic<T: Sample>(
    k: f64,
    domain: (f64, f64),
    center: f64,
    image: ImageView<'_, T>,
) -> Result<Image<f64>> {
    let l = Logistic::new(k, domain, center);
    let d = depth(&image)?;
    trace!(shape = ?image.shape(), depth = d, k, "parallel::logistic");
    par_map_channels(image, |c| l.apply_channel(c), |shape| shape)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, Array3};

    #[test]
    fn test_matches_sequential() {
        let img = Array3::from_shape_fn((5, 4, 6), |(r, c, k)| (r * 31 + c * 7 + k) as f32)
            .into_dyn();
        assert_eq!(
            tile9_periodic(img.view()).unwrap(),
            crate::tile9_periodic(img.view()).unwrap()
        );
        assert_eq!(
            logistic(0.2, (0.0, 1.0), 20.0, img.view()).unwrap(),
            crate::logistic(0.2, (0.0, 1.0), 20.0, img.view()).unwrap()
        );
    }

    #[test]
    fn test_depth_one() {
        let gray = Array2::<u8>::from_elem((3, 3), 9).into_dyn();
        let out = tile9_periodic(gray.view()).unwrap();
        assert_eq!(out.shape(), &[9, 9]);
        assert!(out.iter().all(|&v| v == 9));
    }
}
