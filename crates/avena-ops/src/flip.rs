//! Reflections of a single 2D channel.
//!
//! # Operations
//!
//! - [`flip_vertical`] - Reverse row order (top-bottom mirror)
//! - [`flip_horizontal`] - Reverse column order (left-right mirror)
//! - [`rotate_180`] - Both reflections; the order does not matter
//!
//! Each returns a new owned array of the input's shape. Inputs are views and
//! are never mutated.
//!
//! # Example
//!
//! ```rust
//! use avena_ops::flip::{flip_horizontal, flip_vertical};
//! use ndarray::array;
//!
//! let x = array![[1, 2], [3, 4]];
//! assert_eq!(flip_vertical(x.view()), array![[3, 4], [1, 2]]);
//! assert_eq!(flip_horizontal(x.view()), array![[2, 1], [4, 3]]);
//! ```

use ndarray::{s, Array2, ArrayView2};

/// Flips a channel vertically: row `i` becomes row `H - 1 - i`.
///
/// ```rust
/// use avena_ops::flip::flip_vertical;
/// use ndarray::array;
///
/// let top_bottom = array![[1.0, 0.0], [0.0, 1.0], [0.5, 0.5]];
/// let flipped = flip_vertical(top_bottom.view());
/// assert_eq!(flipped.row(0), array![0.5, 0.5]); // Was bottom, now top
/// ```
pub fn flip_vertical<T: Clone>(x: ArrayView2<'_, T>) -> Array2<T> {
    x.slice(s![..;-1, ..]).to_owned()
}

/// Flips a channel horizontally: column `j` becomes column `W - 1 - j`.
pub fn flip_horizontal<T: Clone>(x: ArrayView2<'_, T>) -> Array2<T> {
    x.slice(s![.., ..;-1]).to_owned()
}

/// Rotates a channel by 180 degrees.
///
/// Equal to `flip_horizontal(flip_vertical(x))` and to
/// `flip_vertical(flip_horizontal(x))`, done in a single copy.
pub fn rotate_180<T: Clone>(x: ArrayView2<'_, T>) -> Array2<T> {
    x.slice(s![..;-1, ..;-1]).to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array2};

    fn sample_arrays() -> Vec<Array2<i32>> {
        vec![
            array![[7]],
            array![[1, 2, 3]],
            array![[1], [2], [3]],
            array![[1, 2], [3, 4]],
            Array2::from_shape_fn((4, 5), |(r, c)| (r * 10 + c) as i32),
            Array2::from_shape_fn((3, 6), |(r, c)| (r as i32 - c as i32) * 3),
            Array2::zeros((0, 3)),
        ]
    }

    #[test]
    fn test_flip_vertical_rows() {
        let x = Array2::from_shape_fn((4, 3), |(r, c)| (r * 3 + c) as i32);
        let v = flip_vertical(x.view());
        assert_eq!(v.dim(), x.dim());
        for i in 0..4 {
            assert_eq!(v.row(i), x.row(3 - i));
        }
    }

    #[test]
    fn test_flip_horizontal_columns() {
        let x = Array2::from_shape_fn((3, 5), |(r, c)| (r * 5 + c) as i32);
        let h = flip_horizontal(x.view());
        assert_eq!(h.dim(), x.dim());
        for j in 0..5 {
            assert_eq!(h.column(j), x.column(4 - j));
        }
    }

    #[test]
    fn test_involution() {
        for x in sample_arrays() {
            assert_eq!(flip_vertical(flip_vertical(x.view()).view()), x);
            assert_eq!(flip_horizontal(flip_horizontal(x.view()).view()), x);
            assert_eq!(rotate_180(rotate_180(x.view()).view()), x);
        }
    }

    #[test]
    fn test_commutative() {
        for x in sample_arrays() {
            let hv = flip_horizontal(flip_vertical(x.view()).view());
            let vh = flip_vertical(flip_horizontal(x.view()).view());
            assert_eq!(hv, vh);
            assert_eq!(rotate_180(x.view()), hv);
        }
    }

    #[test]
    fn test_rotate_180() {
        let x = array![[1, 2], [3, 4]];
        assert_eq!(rotate_180(x.view()), array![[4, 3], [2, 1]]);
    }

    #[test]
    fn test_input_untouched() {
        let x = array![[1.0f32, 2.0], [3.0, 4.0]];
        let before = x.clone();
        let _ = flip_vertical(x.view());
        let _ = flip_horizontal(x.view());
        assert_eq!(x, before);
    }
}
