//! Periodic 3x3 mirror tiling.
//!
//! [`tile9_periodic`] surrounds every channel with eight reflected copies of
//! itself, producing an array three times as tall and wide in which every
//! seam between neighbouring cells is pixel-continuous. The center cell can
//! then be filtered with periodic boundary handling without edge artifacts.
//!
//! # Layout
//!
//! ```text
//!          col 0   col 1   col 2
//! row 0  |   B   |   V   |   B   |
//! row 1  |   H   |   X   |   H   |
//! row 2  |   B   |   V   |   B   |
//!
//! X = original, V = rows reversed, H = columns reversed, B = both
//! ```
//!
//! A cell above or below `X` shares a horizontal seam with it, so it is the
//! vertical flip: its last row equals `X`'s first row. A cell beside `X`
//! shares a vertical seam and is the horizontal flip. The corners touch a
//! `V` cell on one side and an `H` cell on the other, which only the double
//! flip satisfies.
//!
//! # Example
//!
//! ```rust
//! use avena_ops::tile::tile9_periodic_channel;
//! use ndarray::{array, s};
//!
//! let x = array![[1, 2], [3, 4]];
//! let z = tile9_periodic_channel(x.view());
//! assert_eq!(z.dim(), (6, 6));
//! assert_eq!(z.slice(s![2..4, 2..4]), x);
//! assert_eq!(z.slice(s![0..2, 0..2]), array![[4, 3], [2, 1]]);
//! ```

use crate::flip::{flip_horizontal, flip_vertical, rotate_180};
use avena_core::{depth, map_channels, Image, ImageView, Result, Sample};
use ndarray::{s, Array2, ArrayView2};
use tracing::{debug, trace};

/// Which reflection of the source channel a tile cell holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reflection {
    /// The channel as is.
    Identity,
    /// Rows reversed ([`flip_vertical`]).
    Vertical,
    /// Columns reversed ([`flip_horizontal`]).
    Horizontal,
    /// Rows and columns reversed ([`rotate_180`]).
    Both,
}

impl Reflection {
    /// Applies this reflection to a channel.
    pub fn apply<T: Clone>(self, x: ArrayView2<'_, T>) -> Array2<T> {
        match self {
            Self::Identity => x.to_owned(),
            Self::Vertical => flip_vertical(x),
            Self::Horizontal => flip_horizontal(x),
            Self::Both => rotate_180(x),
        }
    }
}

/// Cell contents indexed by `[row_band][col_band]`, top-left first.
pub const TILE9_LAYOUT: [[Reflection; 3]; 3] = {
    use Reflection::*;
    [
        [Both, Vertical, Both],
        [Horizontal, Identity, Horizontal],
        [Both, Vertical, Both],
    ]
};

/// Output plane shape for a `(m, n)` channel.
#[inline]
pub fn tile9_shape((m, n): (usize, usize)) -> (usize, usize) {
    (3 * m, 3 * n)
}

/// Tiles one channel into its `(3m, 3n)` periodic mirror grid.
pub fn tile9_periodic_channel<T: Sample>(x: ArrayView2<'_, T>) -> Array2<T> {
    let (m, n) = x.dim();
    let v = flip_vertical(x);
    let h = flip_horizontal(x);
    let b = rotate_180(x);

    let mut z = Array2::from_elem(tile9_shape((m, n)), T::zero());
    for (row_band, row) in TILE9_LAYOUT.iter().enumerate() {
        for (col_band, reflection) in row.iter().enumerate() {
            let src = match reflection {
                Reflection::Identity => x.view(),
                Reflection::Vertical => v.view(),
                Reflection::Horizontal => h.view(),
                Reflection::Both => b.view(),
            };
            let (r0, c0) = (row_band * m, col_band * n);
            z.slice_mut(s![r0..r0 + m, c0..c0 + n]).assign(&src);
        }
    }
    z
}

/// Tiles every channel of an image into a 3x3 periodic mirror grid.
///
/// `(H, W)` becomes `(3H, 3W)` and `(H, W, D)` becomes `(3H, 3W, D)`.
/// The element type is preserved.
///
/// # Example
///
/// ```rust
/// use avena_ops::tile9_periodic;
/// use ndarray::Array3;
///
/// let rgb = Array3::<u8>::zeros((8, 10, 3)).into_dyn();
/// let tiled = tile9_periodic(rgb.view()).unwrap();
/// assert_eq!(tiled.shape(), &[24, 30, 3]);
/// ```
pub fn tile9_periodic<T: Sample>(image: ImageView<'_, T>) -> Result<Image<T>> {
    let d = depth(&image)?;
    trace!(shape = ?image.shape(), depth = d, "tile9_periodic");
    let out = map_channels(image, tile9_periodic_channel::<T>, tile9_shape)?;
    debug!(shape = ?out.shape(), "Tiled image into 3x3 periodic grid");
    Ok(out)
}
