//! Element types an image buffer may hold.
//!
//! # Types
//!
//! - [`Sample`] - Trait for buffer element types (u8, u16, u32, i16, i32, f16, f32, f64)
//!
//! Tiling copies samples verbatim, so it only needs [`Sample::zero`] to
//! allocate its output. The logistic mapping works in `f64` and uses
//! [`Sample::to_f64`], which is a raw numeric conversion: an 8-bit value of
//! `200` becomes `200.0`, not `0.784`. Callers wanting a normalized domain
//! pick `domain`/`center` accordingly.
//!
//! # Dependencies
//!
//! - `half` crate for `f16` support

use half::f16;
use std::fmt::Debug;

/// Trait for image buffer element types.
///
/// # Example
///
/// ```
/// use avena_core::Sample;
///
/// assert_eq!(200u8.to_f64(), 200.0);
/// assert_eq!(<u16 as Sample>::zero(), 0);
/// ```
pub trait Sample: Copy + Default + Debug + PartialOrd + Send + Sync + 'static {
    /// Raw numeric value as `f64`.
    fn to_f64(self) -> f64;

    /// Additive identity, used for zero-initialized allocation.
    fn zero() -> Self;
}

macro_rules! impl_sample_int {
    ($($t:ty),*) => {
        $(
            impl Sample for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    f64::from(self)
                }

                #[inline]
                fn zero() -> Self {
                    0
                }
            }
        )*
    };
}

impl_sample_int!(u8, u16, u32, i16, i32);

impl Sample for f16 {
    #[inline]
    fn to_f64(self) -> f64 {
        f16::to_f64(self)
    }

    #[inline]
    fn zero() -> Self {
        f16::ZERO
    }
}

impl Sample for f32 {
    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }
}

impl Sample for f64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }
}
