// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Double-Width Intermediates
//!
//! Every supported width `W` is paired with a signed type of at least `2W`
//! bits. Exact sums, differences, products and quotients of two `W`-bit
//! values always fit in that intermediate, so a result can be computed
//! exactly and then reduced modulo `2^W` in a single step.
//!
//! The reduction is a plain truncating `as` cast, which keeps the low `W`
//! bits and reinterprets them as two's complement.

use num_traits::{PrimInt, Signed};

/// A trait for signed integers that can be widened to an intermediate type
/// twice their width and narrowed back with wraparound.
///
/// # Examples
///
/// ```rust
/// # use intmath_core::num::widen::Widen;
/// let wide = 127i8.widen() + 1i8.widen();
/// assert_eq!(wide, 128i16);
/// assert_eq!(i8::narrow(wide), -128i8);
/// ```
pub trait Widen: Sized + Copy {
    /// The intermediate type, at least twice as wide as `Self`.
    type Wide: PrimInt + Signed;

    /// Sign-extends `self` into the intermediate type.
    fn widen(self) -> Self::Wide;

    /// Reduces `wide` modulo `2^W` and reinterprets it in signed range.
    fn narrow(wide: Self::Wide) -> Self;

    /// Sign-extends `self` into an `i128`, the widest carrier used for
    /// reporting values in diagnostics.
    fn into_i128(self) -> i128;
}

macro_rules! widen_impl {
    ($t:ty, $wide:ty) => {
        impl Widen for $t {
            type Wide = $wide;

            #[inline(always)]
            fn widen(self) -> $wide {
                self as $wide
            }

            #[inline(always)]
            fn narrow(wide: $wide) -> $t {
                wide as $t
            }

            #[inline(always)]
            fn into_i128(self) -> i128 {
                self as i128
            }
        }
    };
}

widen_impl!(i8, i16);
widen_impl!(i16, i32);
widen_impl!(i32, i64);
widen_impl!(i64, i128);
widen_impl!(isize, i128);

#[cfg(test)]
mod tests {
    use super::Widen;

    #[test]
    fn test_widen_preserves_value() {
        assert_eq!(i8::MIN.widen(), -128i16);
        assert_eq!(i32::MAX.widen(), 2_147_483_647i64);
        assert_eq!(i64::MIN.widen(), -(1i128 << 63));
        assert_eq!((-1isize).widen(), -1i128);
    }

    #[test]
    fn test_narrow_wraps_modulo_width() {
        assert_eq!(i8::narrow(128), i8::MIN);
        assert_eq!(i8::narrow(-129), i8::MAX);
        assert_eq!(i16::narrow(65_536 + 5), 5);
        assert_eq!(i64::narrow(1i128 << 63), i64::MIN);
        assert_eq!(i64::narrow((1i128 << 64) - 1), -1);
    }

    #[test]
    fn test_narrow_of_widen_is_identity() {
        for v in [i32::MIN, -1, 0, 1, i32::MAX] {
            assert_eq!(i32::narrow(v.widen()), v);
        }
    }

    #[test]
    fn test_into_i128() {
        assert_eq!(i8::MIN.into_i128(), -128);
        assert_eq!(i64::MAX.into_i128(), i64::MAX as i128);
        assert_eq!(isize::MIN.into_i128(), isize::MIN as i128);
    }
}
