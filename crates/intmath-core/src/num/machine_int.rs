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

//! # Machine Integer Trait
//!
//! `MachineInt` gathers, in a single alias, every bound generic callers need
//! to perform wrapping machine-integer arithmetic: the intrinsic integer
//! traits from `num_traits`, the associated constants from
//! `crate::num::constants`, the `Widen` bridge, and the by-value wrapping
//! arithmetic traits.
//!
//! It is implemented automatically for `i8`, `i16`, `i32`, `i64` and
//! `isize`. `i128` does not qualify because it has no `Widen` intermediate.

use crate::num::{
    constants::{MinusOne, PlusOne, Zero},
    ops::wrapping_arithmetic,
    widen::Widen,
};
use num_traits::{FromPrimitive, PrimInt, Signed};
use std::hash::Hash;

/// A trait alias for fixed-width signed integers usable as machine integers.
///
/// # Examples
///
/// ```rust
/// # use intmath_core::num::machine_int::MachineInt;
/// fn double<T: MachineInt>(value: T) -> T {
///     value.wrapping_add_val(value)
/// }
///
/// assert_eq!(double(i8::MAX), -2);
/// assert_eq!(double(21i64), 42);
/// ```
pub trait MachineInt:
    PrimInt
    + Signed
    + FromPrimitive
    + std::fmt::Debug
    + std::fmt::Display
    + MinusOne
    + PlusOne
    + Zero
    + Widen
    + wrapping_arithmetic::WrappingNegVal
    + wrapping_arithmetic::WrappingAddVal
    + wrapping_arithmetic::WrappingSubVal
    + wrapping_arithmetic::WrappingMulVal
    + wrapping_arithmetic::TruncatingDivVal
    + Send
    + Sync
    + Hash
    + 'static
{
}

impl<T> MachineInt for T where
    T: PrimInt
        + Signed
        + FromPrimitive
        + std::fmt::Debug
        + std::fmt::Display
        + MinusOne
        + PlusOne
        + Zero
        + Widen
        + wrapping_arithmetic::WrappingNegVal
        + wrapping_arithmetic::WrappingAddVal
        + wrapping_arithmetic::WrappingSubVal
        + wrapping_arithmetic::WrappingMulVal
        + wrapping_arithmetic::TruncatingDivVal
        + Send
        + Sync
        + Hash
        + 'static
{
}

#[cfg(test)]
mod tests {
    use super::MachineInt;

    fn bounds<T: MachineInt>() -> (i128, i128) {
        (T::min_value().into_i128(), T::max_value().into_i128())
    }

    fn is_asymmetric<T: MachineInt>() -> bool {
        let (min, max) = bounds::<T>();
        max == -min - 1
    }

    #[test]
    fn test_supported_widths_are_machine_ints() {
        assert_eq!(bounds::<i8>(), (-128, 127));
        assert_eq!(bounds::<i16>(), (-32_768, 32_767));
        assert_eq!(bounds::<i32>(), (i32::MIN as i128, i32::MAX as i128));
        assert_eq!(bounds::<i64>(), (i64::MIN as i128, i64::MAX as i128));
        assert_eq!(bounds::<isize>(), (isize::MIN as i128, isize::MAX as i128));
    }

    #[test]
    fn test_range_is_asymmetric() {
        assert!(is_asymmetric::<i8>());
        assert!(is_asymmetric::<i16>());
        assert!(is_asymmetric::<i32>());
        assert!(is_asymmetric::<i64>());
        assert!(is_asymmetric::<isize>());
    }

    #[test]
    fn test_from_i128_checks_representability() {
        assert_eq!(<i8 as num_traits::FromPrimitive>::from_i128(127), Some(127i8));
        assert_eq!(<i8 as num_traits::FromPrimitive>::from_i128(128), None);
        assert_eq!(<i64 as num_traits::FromPrimitive>::from_i128(1i128 << 63), None);
    }
}
