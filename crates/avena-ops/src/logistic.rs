//! Logistic (sigmoid) contrast remapping.
//!
//! Maps every sample `x` to
//!
//! ```text
//! y = 1 / (1 + exp(-k * (b - a) * (x - c)))
//! ```
//!
//! where `(a, b)` is the domain and `c` the center. The curve is S-shaped,
//! increasing for `k * (b - a) > 0`, bounded in `(0, 1)`, and passes through
//! `0.5` at `x = c`. `k * (b - a)` sets the steepness; `k = 0` flattens it to
//! a constant `0.5`.
//!
//! Samples are read as raw numbers ([`Sample::to_f64`]) and the output is
//! always `f64`, whatever the input element type.

use avena_core::{depth, map_channels, Image, ImageView, Result, Sample};
use ndarray::{Array2, ArrayView2};
use tracing::{debug, trace};

/// Default steepness.
pub const DEFAULT_K: f64 = 1.0;

/// Default domain, a normalized `[0, 1]` image.
pub const DEFAULT_DOMAIN: (f64, f64) = (0.0, 1.0);

/// Default center, mid-gray of the default domain.
pub const DEFAULT_CENTER: f64 = 0.5;

/// Parameters of a logistic remapping.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Logistic {
    /// Steepness multiplier.
    pub k: f64,
    /// Domain `(a, b)`; the curve is scaled by `b - a`.
    pub domain: (f64, f64),
    /// Inflection point `c`.
    pub center: f64,
}

impl Default for Logistic {
    fn default() -> Self {
        Self {
            k: DEFAULT_K,
            domain: DEFAULT_DOMAIN,
            center: DEFAULT_CENTER,
        }
    }
}

impl Logistic {
    /// Creates a logistic mapping.
    pub fn new(k: f64, domain: (f64, f64), center: f64) -> Self {
        Self { k, domain, center }
    }

    /// Effective steepness `k * (b - a)`.
    #[inline]
    pub fn gain(&self) -> f64 {
        self.k * (self.domain.1 - self.domain.0)
    }

    /// Maps a single value.
    #[inline]
    pub fn apply(&self, x: f64) -> f64 {
        1.0 / (1.0 + (-self.gain() * (x - self.center)).exp())
    }

    /// Maps one channel.
    pub fn apply_channel<T: Sample>(&self, x: ArrayView2<'_, T>) -> Array2<f64> {
        x.mapv(|v| self.apply(v.to_f64()))
    }

    /// Maps every channel of an image. Shape is preserved.
    pub fn apply_image<T: Sample>(&self, image: ImageView<'_, T>) -> Result<Image<f64>> {
        let d = depth(&image)?;
        trace!(
            shape = ?image.shape(),
            depth = d,
            k = self.k,
            center = self.center,
            "logistic"
        );
        let out = map_channels(image, |c| self.apply_channel(c), |shape| shape)?;
        debug!(gain = self.gain(), "Applied logistic mapping");
        Ok(out)
    }
}

/// Applies the logistic mapping to one channel.
pub fn logistic_channel<T: Sample>(
    k: f64,
    domain: (f64, f64),
    center: f64,
    x: ArrayView2<'_, T>,
) -> Array2<f64> {
    Logistic::new(k, domain, center).apply_channel(x)
}

/// Applies the logistic mapping of degree `k` to every channel of an image.
///
/// # Example
///
/// ```rust
/// use avena_ops::logistic;
/// use ndarray::array;
///
/// let img = array![[0.0f64]].into_dyn();
/// let y = logistic(1.0, (0.0, 1.0), 0.0, img.view()).unwrap();
/// assert_eq!(y[[0, 0]], 0.5);
/// ```
pub fn logistic<T: Sample>(
    k: f64,
    domain: (f64, f64),
    center: f64,
    image: ImageView<'_, T>,
) -> Result<Image<f64>> {
    Logistic::new(k, domain, center).apply_image(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::{array, Array3};

    #[test]
    fn test_center_is_half() {
        let y = logistic(1.0, (0.0, 1.0), 0.0, array![[0.0f64]].into_dyn().view()).unwrap();
        assert_eq!(y.shape(), &[1, 1]);
        assert_eq!(y[[0, 0]], 0.5);

        let l = Logistic::new(7.5, (-2.0, 3.0), 0.25);
        assert_relative_eq!(l.apply(0.25), 0.5);
    }

    #[test]
    fn test_zero_k_is_constant() {
        let x = Array2::from_shape_fn((3, 4), |(r, c)| (r * 4 + c) as f32 - 5.0);
        let y = logistic_channel(0.0, (0.0, 1.0), 0.3, x.view());
        assert!(y.iter().all(|&v| v == 0.5));
    }

    #[test]
    fn test_known_value() {
        // k * (b - a) = 2, x - c = 1 => 1 / (1 + e^-2)
        let l = Logistic::new(1.0, (0.0, 2.0), 0.0);
        assert_relative_eq!(l.apply(1.0), 0.880_797_077_977_882_3, epsilon = 1e-12);
        // Symmetric about the center.
        assert_relative_eq!(l.apply(-1.0), 1.0 - l.apply(1.0), epsilon = 1e-12);
    }

    #[test]
    fn test_bounds() {
        let params = [
            Logistic::new(1.0, (0.0, 1.0), 0.5),
            Logistic::new(0.01, (0.0, 255.0), 0.0),
            Logistic::new(-0.5, (1.0, -1.0), -2.0),
            Logistic::new(0.01, (0.0, 10.0), 0.0),
        ];
        for l in params {
            for i in -100..=100 {
                let y = l.apply(i as f64 * 0.05);
                assert!(y > 0.0 && y < 1.0, "{:?} at {} gave {}", l, i, y);
            }
        }
    }

    #[test]
    fn test_monotonic() {
        let l = Logistic::new(3.0, (0.0, 1.5), 0.2);
        let xs: Vec<f64> = (-50..=50).map(|i| i as f64 * 0.1).collect();
        for w in xs.windows(2) {
            assert!(l.apply(w[1]) > l.apply(w[0]));
        }
    }

    #[test]
    fn test_integer_input_is_raw() {
        let l = Logistic::new(0.05, (0.0, 1.0), 128.0);
        let x = array![[0u8, 128, 255]];
        let y = l.apply_channel(x.view());
        assert!(y[[0, 0]] < 0.01);
        assert_eq!(y[[0, 1]], 0.5);
        assert!(y[[0, 2]] > 0.99);
    }

    #[test]
    fn test_image_shape_preserved() {
        let img = Array3::from_shape_fn((4, 5, 3), |(r, c, k)| (r + c + k) as f32 * 0.1);
        let y = Logistic::default().apply_image(img.view().into_dyn()).unwrap();
        assert_eq!(y.shape(), &[4, 5, 3]);
        assert_relative_eq!(y[[2, 1, 2]], Logistic::default().apply(0.5));
    }

    #[test]
    fn test_channel_matches_scalar() {
        let l = Logistic::new(2.0, (0.0, 3.0), 1.0);
        let x = array![[0.0f32, 0.5], [1.0, 1.5]];
        let y = l.apply_channel(x.view());
        for ((r, c), &v) in y.indexed_iter() {
            assert_relative_eq!(v, l.apply(f64::from(x[[r, c]])));
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_params_from_json() {
        let l: Logistic = serde_json::from_str(r#"{ "k": 4.0, "center": 0.3 }"#).unwrap();
        assert_eq!(l, Logistic::new(4.0, DEFAULT_DOMAIN, 0.3));

        let l: Logistic = serde_json::from_str(r#"{ "domain": [0.0, 255.0] }"#).unwrap();
        assert_eq!(l.domain, (0.0, 255.0));
        assert_eq!(l.k, DEFAULT_K);
    }
}
