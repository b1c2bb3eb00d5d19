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

//! # Arithmetic Core
//!
//! Typed, unguarded wrapping arithmetic over any `MachineInt`. Every function
//! is pure and computes the exact result in the double-width intermediate
//! before reducing it modulo `2^W` once.
//!
//! | Function   | Result                                                  |
//! |------------|---------------------------------------------------------|
//! | `negate`   | `-x`, with `negate(MIN) == MIN`                          |
//! | `add`      | `x + y`                                                 |
//! | `subtract` | `x - y`, formed directly, never as `x + negate(y)`      |
//! | `multiply` | `x * y`, exact product reduced once                     |
//! | `divide`   | `x / y` rounded toward zero; `divide(MIN, -1) == MIN`   |
//!
//! Only `divide` can fail, and only with `IntMathError::DivisionByZero`.

use crate::error::{IntMathError, IntMathResult};
use intmath_core::num::machine_int::MachineInt;

/// Returns `-x`, wrapping around on overflow.
#[inline]
pub fn negate<T: MachineInt>(x: T) -> T {
    x.wrapping_neg_val()
}

/// Returns `x + y`, wrapping around on overflow.
#[inline]
pub fn add<T: MachineInt>(x: T, y: T) -> T {
    x.wrapping_add_val(y)
}

/// Returns `x - y`, wrapping around on overflow.
#[inline]
pub fn subtract<T: MachineInt>(x: T, y: T) -> T {
    x.wrapping_sub_val(y)
}

/// Returns `x * y`, wrapping around on overflow.
#[inline]
pub fn multiply<T: MachineInt>(x: T, y: T) -> T {
    x.wrapping_mul_val(y)
}

/// Returns `x / y` rounded toward zero.
///
/// # Errors
///
/// Returns `IntMathError::DivisionByZero` if `y` is zero.
#[inline]
pub fn divide<T: MachineInt>(x: T, y: T) -> IntMathResult<T> {
    x.truncating_div_val(y)
        .ok_or_else(|| IntMathError::division_by_zero(x.into_i128()))
}
