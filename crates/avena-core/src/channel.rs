//! Channel iteration and reassembly for image buffers.
//!
//! An image buffer is a 2D `(H, W)` array when it has a single channel and a
//! 3D `(H, W, D)` array otherwise. Operators in this workspace are written
//! against one 2D channel at a time; this module splits a buffer into its
//! channels, runs the per-channel transform, and stacks the results back.
//!
//! # Depth
//!
//! ```text
//! (H, W)      -> depth 1, the buffer is its own channel
//! (H, W, 1)   -> depth 1, channel 0 is the single plane
//! (H, W, D)   -> depth D, channel i is the plane at index i of axis 2
//! ```
//!
//! Reassembly never introduces a trailing axis for depth 1: mapping a
//! `(H, W, 1)` buffer yields a 2D result. This is the only place the
//! depth-1 case is handled.
//!
//! # Example
//!
//! ```rust
//! use avena_core::channel::{depth, map_channels};
//! use ndarray::{Array3, ArrayView2};
//!
//! let rgb = Array3::<f32>::zeros((4, 4, 3)).into_dyn();
//! assert_eq!(depth(&rgb.view()).unwrap(), 3);
//!
//! // Transpose each channel; the shape function swaps H and W.
//! let out = map_channels(
//!     rgb.view(),
//!     |c: ArrayView2<'_, f32>| c.t().to_owned(),
//!     |(h, w)| (w, h),
//! ).unwrap();
//! assert_eq!(out.shape(), &[4, 4, 3]);
//! ```

use crate::{Error, Result, Sample};
use ndarray::{Array2, Array3, ArrayD, ArrayView2, ArrayViewD, Axis, Ix2};
use tracing::trace;

/// Returns the channel depth of an image buffer.
///
/// # Errors
///
/// [`Error::InvalidRank`] if the buffer is neither 2D nor 3D.
pub fn depth<T>(image: &ArrayViewD<'_, T>) -> Result<usize> {
    match image.shape() {
        [_, _] => Ok(1),
        [_, _, d] => Ok(*d),
        other => Err(Error::InvalidRank { rank: other.len() }),
    }
}

/// Returns the `(H, W)` shape shared by every channel.
pub fn plane_shape<T>(image: &ArrayViewD<'_, T>) -> Result<(usize, usize)> {
    depth(image)?;
    let shape = image.shape();
    Ok((shape[0], shape[1]))
}

/// Borrows channel `index` of an image buffer as a 2D view.
///
/// For a 2D buffer the only valid index is 0 and the view is the whole
/// buffer.
pub fn channel<'a, T>(image: &ArrayViewD<'a, T>, index: usize) -> Result<ArrayView2<'a, T>> {
    let d = depth(image)?;
    if index >= d {
        return Err(Error::ChannelOutOfRange { index, depth: d });
    }
    let rank = image.ndim();
    let plane = if rank == 2 {
        image.clone()
    } else {
        image.clone().index_axis_move(Axis(2), index)
    };
    plane
        .into_dimensionality::<Ix2>()
        .map_err(|_| Error::InvalidRank { rank })
}

/// Borrows every channel of an image buffer, in order.
pub fn channels<'a, T>(image: &ArrayViewD<'a, T>) -> Result<Vec<ArrayView2<'a, T>>> {
    let d = depth(image)?;
    (0..d).map(|i| channel(image, i)).collect()
}

/// Applies a per-channel transform to every channel and reassembles.
///
/// * `f` - maps one `(H, W)` channel to an `(H', W')` channel
/// * `g` - the shape function `(H, W) -> (H', W')`
///
/// The result has shape `(H', W')` for depth 1 and `(H', W', D)` otherwise.
/// Channel `i` of the output is exactly `f(channel i)`.
///
/// # Errors
///
/// - [`Error::InvalidRank`] if the buffer is neither 2D nor 3D
/// - [`Error::ChannelShapeMismatch`] if `f` disagrees with `g` on any channel
pub fn map_channels<T, U, F, G>(image: ArrayViewD<'_, T>, f: F, g: G) -> Result<ArrayD<U>>
where
    U: Sample,
    F: FnMut(ArrayView2<'_, T>) -> Array2<U>,
    G: Fn((usize, usize)) -> (usize, usize),
{
    let d = depth(&image)?;
    let shape = g(plane_shape(&image)?);
    trace!(depth = d, out_h = shape.0, out_w = shape.1, "map_channels");
    reassemble(d, shape, channels(&image)?.into_iter().map(f))
}

/// Parallel [`map_channels`]: channels are transformed on the rayon pool.
///
/// Output is identical to the sequential version.
#[cfg(feature = "parallel")]
pub fn par_map_channels<T, U, F, G>(image: ArrayViewD<'_, T>, f: F, g: G) -> Result<ArrayD<U>>
where
    T: Sync,
    U: Sample,
    F: Fn(ArrayView2<'_, T>) -> Array2<U> + Sync,
    G: Fn((usize, usize)) -> (usize, usize),
{
    use rayon::prelude::*;

    let d = depth(&image)?;
    let shape = g(plane_shape(&image)?);
    trace!(depth = d, out_h = shape.0, out_w = shape.1, "par_map_channels");
    let mapped: Vec<Array2<U>> = channels(&image)?.into_par_iter().map(&f).collect();
    reassemble(d, shape, mapped.into_iter())
}

/// Stacks mapped channels into the output buffer.
fn reassemble<U, I>(depth: usize, shape: (usize, usize), mapped: I) -> Result<ArrayD<U>>
where
    U: Sample,
    I: Iterator<Item = Array2<U>>,
{
    if depth == 1 {
        let mut planes = mapped;
        let plane = planes.next().ok_or(Error::ChannelOutOfRange { index: 0, depth })?;
        check_plane(0, &plane, shape)?;
        return Ok(plane.into_dyn());
    }

    let mut out = Array3::from_elem((shape.0, shape.1, depth), U::zero());
    for (i, plane) in mapped.enumerate() {
        check_plane(i, &plane, shape)?;
        out.index_axis_mut(Axis(2), i).assign(&plane);
    }
    Ok(out.into_dyn())
}

#[inline]
fn check_plane<U>(channel: usize, plane: &Array2<U>, shape: (usize, usize)) -> Result<()> {
    if plane.dim() != shape {
        return Err(Error::channel_shape_mismatch(channel, shape, plane.dim()));
    }
    Ok(())
}
