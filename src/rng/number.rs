//! Numeric-kind dispatch for range draws.
//!
//! [`Number`] is implemented for three closed families, each keeping its
//! own arithmetic:
//!
//! - signed integers (`i8`..`i64`, `isize`): span computed in 64-bit
//!   two's-complement wrapping arithmetic
//! - unsigned integers (`u8`..`u64`, `usize`): span computed in `u64`
//! - floats (`f32`, `f64`): `min + unit * (max - min)` in their own
//!   precision
//!
//! Callers validate `min <= max` before sampling.

use std::fmt::{Debug, Display};

use crate::rng::uniform::{below, unit_f32, unit_f64};

/// A numeric type that can be drawn uniformly from an inclusive range.
pub trait Number: Copy + PartialOrd + Debug + Display + Default {
    /// Draws a value in `[min, max]` using raw words from `next`.
    ///
    /// For floats the upper end is only reached through rounding.
    #[doc(hidden)]
    fn sample(min: Self, max: Self, next: &mut dyn FnMut() -> u64) -> Self;
}

/// Draws `offset` in `[0, span]`, with a full-width span handled by a raw
/// draw.
#[inline]
fn inclusive_offset(span: u64, next: &mut dyn FnMut() -> u64) -> u64 {
    if span == u64::MAX {
        next()
    } else {
        below(span + 1, next)
    }
}

macro_rules! impl_signed {
    ($($t:ty),*) => {$(
        impl Number for $t {
            fn sample(min: Self, max: Self, next: &mut dyn FnMut() -> u64) -> Self {
                if min == max {
                    return min;
                }
                let span = (max as i64).wrapping_sub(min as i64) as u64;
                let offset = inclusive_offset(span, next);
                (min as i64).wrapping_add(offset as i64) as $t
            }
        }
    )*};
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {$(
        impl Number for $t {
            fn sample(min: Self, max: Self, next: &mut dyn FnMut() -> u64) -> Self {
                if min == max {
                    return min;
                }
                let span = (max as u64) - (min as u64);
                let offset = inclusive_offset(span, next);
                ((min as u64) + offset) as $t
            }
        }
    )*};
}

impl_signed!(i8, i16, i32, i64, isize);
impl_unsigned!(u8, u16, u32, u64, usize);

impl Number for f32 {
    fn sample(min: Self, max: Self, next: &mut dyn FnMut() -> u64) -> Self {
        if min == max {
            return min;
        }
        min + unit_f32(next()) * (max - min)
    }
}

impl Number for f64 {
    fn sample(min: Self, max: Self, next: &mut dyn FnMut() -> u64) -> Self {
        if min == max {
            return min;
        }
        min + unit_f64(next()) * (max - min)
    }
}
