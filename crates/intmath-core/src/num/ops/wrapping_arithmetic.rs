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

use crate::num::widen::Widen;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// A trait for types that support wrapping negation by value.
///
/// The most negative value is a fixed point: its true negation is not
/// representable and wraps back onto itself.
///
/// # Examples
///
/// ```rust
/// # use intmath_core::num::ops::wrapping_arithmetic::WrappingNegVal;
/// assert_eq!(100i8.wrapping_neg_val(), -100);
/// assert_eq!(i8::MIN.wrapping_neg_val(), i8::MIN);
/// assert_eq!(0i8.wrapping_neg_val(), 0);
/// ```
pub trait WrappingNegVal: Sized + Neg<Output = Self> {
    /// Negates by value, wrapping around on overflow.
    fn wrapping_neg_val(self) -> Self;
}

/// A trait for types that support wrapping addition by value.
///
/// # Examples
///
/// ```rust
/// # use intmath_core::num::ops::wrapping_arithmetic::WrappingAddVal;
/// assert_eq!(i64::MAX.wrapping_add_val(1), i64::MIN);
/// assert_eq!(40i64.wrapping_add_val(2), 42);
/// ```
pub trait WrappingAddVal: Sized + Add<Self, Output = Self> {
    /// Adds by value, wrapping around on overflow.
    fn wrapping_add_val(self, v: Self) -> Self;
}

/// A trait for types that support wrapping subtraction by value.
///
/// The difference is formed directly in the wide intermediate rather than as
/// `self + (-v)`, so `v == MIN` is handled by the same single reduction as
/// every other input.
///
/// # Examples
///
/// ```rust
/// # use intmath_core::num::ops::wrapping_arithmetic::WrappingSubVal;
/// assert_eq!(i64::MIN.wrapping_sub_val(1), i64::MAX);
/// assert_eq!(i64::MAX.wrapping_sub_val(i64::MIN), -1);
/// ```
pub trait WrappingSubVal: Sized + Sub<Self, Output = Self> {
    /// Subtracts by value, wrapping around on overflow.
    fn wrapping_sub_val(self, v: Self) -> Self;
}

/// A trait for types that support wrapping multiplication by value.
///
/// The full product is taken in the wide intermediate, so products that
/// exceed the width by several multiples still reduce correctly.
///
/// # Examples
///
/// ```rust
/// # use intmath_core::num::ops::wrapping_arithmetic::WrappingMulVal;
/// assert_eq!(i64::MAX.wrapping_mul_val(i64::MAX), 1);
/// assert_eq!(i64::MAX.wrapping_mul_val(2), -2);
/// assert_eq!(i64::MIN.wrapping_mul_val(-1), i64::MIN);
/// ```
pub trait WrappingMulVal: Sized + Mul<Self, Output = Self> {
    /// Multiplies by value, wrapping around on overflow.
    fn wrapping_mul_val(self, v: Self) -> Self;
}

/// A trait for types that support truncating division by value.
///
/// The quotient is rounded toward zero, never floored. `MIN / -1` wraps to
/// `MIN`. The only failure is a zero divisor, reported as `None`.
///
/// # Examples
///
/// ```rust
/// # use intmath_core::num::ops::wrapping_arithmetic::TruncatingDivVal;
/// assert_eq!(5i64.truncating_div_val(2), Some(2));
/// assert_eq!((-5i64).truncating_div_val(2), Some(-2));
/// assert_eq!(i64::MIN.truncating_div_val(-1), Some(i64::MIN));
/// assert_eq!(1i64.truncating_div_val(0), None);
/// ```
pub trait TruncatingDivVal: Sized + Div<Self, Output = Self> {
    /// Divides by value rounding toward zero, returning `None` if `v` is zero.
    fn truncating_div_val(self, v: Self) -> Option<Self>;
}

macro_rules! wrapping_binary_impl_val {
    ($trait_name:ident, $method:ident, $t:ty, $op:tt) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self, v: $t) -> $t {
                <$t as Widen>::narrow(self.widen() $op v.widen())
            }
        }
    };
}

macro_rules! wrapping_impl_for {
    ($($t:ty),*) => {
        $(
            impl WrappingNegVal for $t {
                #[inline(always)]
                fn wrapping_neg_val(self) -> $t {
                    <$t as Widen>::narrow(-self.widen())
                }
            }

            wrapping_binary_impl_val!(WrappingAddVal, wrapping_add_val, $t, +);
            wrapping_binary_impl_val!(WrappingSubVal, wrapping_sub_val, $t, -);
            wrapping_binary_impl_val!(WrappingMulVal, wrapping_mul_val, $t, *);

            impl TruncatingDivVal for $t {
                #[inline(always)]
                fn truncating_div_val(self, v: $t) -> Option<$t> {
                    if v == 0 {
                        return None;
                    }
                    // `/` on the wide type already truncates toward zero.
                    Some(<$t as Widen>::narrow(self.widen() / v.widen()))
                }
            }
        )*
    };
}

wrapping_impl_for!(i8, i16, i32, i64, isize);
