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

//! # Guarded Entry Points
//!
//! `IntMath<T>` is the public, guarded surface over the arithmetic core for a
//! chosen width `T`. Every entry point first passes each operand through the
//! input guard, in position order, and only then computes. A rejected operand
//! therefore means no arithmetic was performed.
//!
//! The free functions `negate`, `add`, `subtract`, `multiply` and `divide`
//! are the same operations at the reference width, `i64`.
//!
//! ```rust
//! use intmath::{IntMath, IntMathError};
//!
//! assert_eq!(intmath::add(i64::MAX, 1), Ok(i64::MIN));
//! assert_eq!(intmath::divide(-5, 2), Ok(-2));
//! assert!(intmath::negate(1.0).unwrap_err().is_invalid_argument());
//! assert_eq!(IntMath::<i8>::multiply(16, 16), Ok(0));
//! assert_eq!(intmath::divide(1, 0), Err(IntMathError::division_by_zero(1)));
//! ```

use crate::{
    arith,
    error::{IntMathError, IntMathResult, Rejection},
    operand::{Operand, guard},
    operation::Operation,
};
use intmath_core::num::machine_int::MachineInt;
use std::marker::PhantomData;

/// Guarded wrapping arithmetic at width `T`.
///
/// This type is never instantiated; it only namespaces the operations for a
/// given width.
#[derive(Debug, Clone, Copy)]
pub struct IntMath<T> {
    _width: PhantomData<fn() -> T>,
}

/// Guarded wrapping arithmetic at the reference width.
pub type IntMath64 = IntMath<i64>;

impl<T: MachineInt> IntMath<T> {
    /// Returns `-x`, wrapping around on overflow. `negate(MIN)` is `MIN`.
    ///
    /// # Errors
    ///
    /// Returns `IntMathError::InvalidArgument` if `x` is not a `T`.
    pub fn negate(x: impl Into<Operand>) -> IntMathResult<T> {
        Self::unary(Operation::Negate, &x.into(), arith::negate)
    }

    /// Returns `x + y`, wrapping around on overflow.
    ///
    /// # Errors
    ///
    /// Returns `IntMathError::InvalidArgument` if either operand is not a `T`.
    pub fn add(x: impl Into<Operand>, y: impl Into<Operand>) -> IntMathResult<T> {
        Self::binary(Operation::Add, &x.into(), &y.into(), |x, y| {
            Ok(arith::add(x, y))
        })
    }

    /// Returns `x - y`, wrapping around on overflow.
    ///
    /// # Errors
    ///
    /// Returns `IntMathError::InvalidArgument` if either operand is not a `T`.
    pub fn subtract(x: impl Into<Operand>, y: impl Into<Operand>) -> IntMathResult<T> {
        Self::binary(Operation::Subtract, &x.into(), &y.into(), |x, y| {
            Ok(arith::subtract(x, y))
        })
    }

    /// Returns `x * y`, wrapping around on overflow.
    ///
    /// # Errors
    ///
    /// Returns `IntMathError::InvalidArgument` if either operand is not a `T`.
    pub fn multiply(x: impl Into<Operand>, y: impl Into<Operand>) -> IntMathResult<T> {
        Self::binary(Operation::Multiply, &x.into(), &y.into(), |x, y| {
            Ok(arith::multiply(x, y))
        })
    }

    /// Returns `x / y` rounded toward zero. `divide(MIN, -1)` is `MIN`.
    ///
    /// # Errors
    ///
    /// Returns `IntMathError::InvalidArgument` if either operand is not a `T`,
    /// and `IntMathError::DivisionByZero` if `y` is zero.
    pub fn divide(x: impl Into<Operand>, y: impl Into<Operand>) -> IntMathResult<T> {
        Self::binary(Operation::Divide, &x.into(), &y.into(), arith::divide)
    }

    /// Applies `operation` to a slice of dynamically typed operands.
    ///
    /// # Errors
    ///
    /// Returns `IntMathError::InvalidArgument` if the number of operands does
    /// not match the operation's arity or if any operand is not a `T`, and
    /// `IntMathError::DivisionByZero` for a zero divisor.
    pub fn apply(operation: Operation, operands: &[Operand]) -> IntMathResult<T> {
        match (operation, operands) {
            (Operation::Negate, [x]) => Self::unary(operation, x, arith::negate),
            (Operation::Add, [x, y]) => Self::binary(operation, x, y, |x, y| Ok(arith::add(x, y))),
            (Operation::Subtract, [x, y]) => {
                Self::binary(operation, x, y, |x, y| Ok(arith::subtract(x, y)))
            }
            (Operation::Multiply, [x, y]) => {
                Self::binary(operation, x, y, |x, y| Ok(arith::multiply(x, y)))
            }
            (Operation::Divide, [x, y]) => Self::binary(operation, x, y, arith::divide),
            _ => Err(Self::arity_error(operation, operands)),
        }
    }

    #[inline(always)]
    fn unary(operation: Operation, x: &Operand, f: fn(T) -> T) -> IntMathResult<T> {
        let x = guard::<T>(operation, 0, x)?;
        Ok(f(x))
    }

    #[inline(always)]
    fn binary(
        operation: Operation,
        x: &Operand,
        y: &Operand,
        f: fn(T, T) -> IntMathResult<T>,
    ) -> IntMathResult<T> {
        let x = guard::<T>(operation, 0, x)?;
        let y = guard::<T>(operation, 1, y)?;
        f(x, y).inspect_err(|err| log::trace!("{err}"))
    }

    fn arity_error(operation: Operation, operands: &[Operand]) -> IntMathError {
        let expected = operation.arity();
        let found = operands.len();
        let reason = Rejection::Arity { expected, found };
        log::trace!("{operation}: {reason}");
        // Points at the first missing or first surplus operand.
        IntMathError::invalid_argument(operation, expected.min(found), reason)
    }
}

/// Returns `-x` at the reference width, wrapping around on overflow.
///
/// # Errors
///
/// Returns `IntMathError::InvalidArgument` if `x` is not an `i64`.
#[inline]
pub fn negate(x: impl Into<Operand>) -> IntMathResult<i64> {
    IntMath64::negate(x)
}

/// Returns `x + y` at the reference width, wrapping around on overflow.
///
/// # Errors
///
/// Returns `IntMathError::InvalidArgument` if either operand is not an `i64`.
#[inline]
pub fn add(x: impl Into<Operand>, y: impl Into<Operand>) -> IntMathResult<i64> {
    IntMath64::add(x, y)
}

/// Returns `x - y` at the reference width, wrapping around on overflow.
///
/// # Errors
///
/// Returns `IntMathError::InvalidArgument` if either operand is not an `i64`.
#[inline]
pub fn subtract(x: impl Into<Operand>, y: impl Into<Operand>) -> IntMathResult<i64> {
    IntMath64::subtract(x, y)
}

/// Returns `x * y` at the reference width, wrapping around on overflow.
///
/// # Errors
///
/// Returns `IntMathError::InvalidArgument` if either operand is not an `i64`.
#[inline]
pub fn multiply(x: impl Into<Operand>, y: impl Into<Operand>) -> IntMathResult<i64> {
    IntMath64::multiply(x, y)
}

/// Returns `x / y` at the reference width, rounded toward zero.
///
/// # Errors
///
/// Returns `IntMathError::InvalidArgument` if either operand is not an `i64`,
/// and `IntMathError::DivisionByZero` if `y` is zero.
#[inline]
pub fn divide(x: impl Into<Operand>, y: impl Into<Operand>) -> IntMathResult<i64> {
    IntMath64::divide(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: i64 = i64::MIN;
    const MAX: i64 = i64::MAX;

    fn non_integer_values() -> Vec<Operand> {
        vec![
            Operand::from(1.0),
            Operand::from(f64::INFINITY),
            Operand::from(f64::NEG_INFINITY),
            Operand::from(f64::NAN),
            Operand::Null,
            Operand::from(true),
            Operand::from(false),
            Operand::from("a"),
            Operand::object(Vec::<(String, Operand)>::new()),
            Operand::Handle(1),
            Operand::Array(Vec::new()),
        ]
    }

    fn assert_rejected(result: IntMathResult<i64>, operation: Operation, position: usize) {
        match result {
            Err(IntMathError::InvalidArgument {
                operation: op,
                position: pos,
                ..
            }) => {
                assert_eq!(op, operation);
                assert_eq!(pos, position);
            }
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_end_to_end_scenarios() {
        assert_eq!(add(MAX, 1), Ok(MIN));
        assert_eq!(multiply(MIN, -1), Ok(MIN));
        assert_eq!(divide(1, 0), Err(IntMathError::division_by_zero(1)));
        assert_eq!(divide(MIN, -1), Ok(MIN));
        assert_rejected(negate(1.0), Operation::Negate, 0);
        assert_eq!(subtract(MAX, MIN), Ok(-1));
    }

    #[test]
    fn test_negate_rejects_non_integers() {
        for value in non_integer_values() {
            assert_rejected(negate(value), Operation::Negate, 0);
        }
    }

    #[test]
    fn test_binary_operations_reject_non_integers() {
        for value in non_integer_values() {
            assert_rejected(add(value.clone(), value.clone()), Operation::Add, 0);
            assert_rejected(subtract(1, value.clone()), Operation::Subtract, 1);
            assert_rejected(multiply(value.clone(), 1), Operation::Multiply, 0);
            assert_rejected(divide(7, value.clone()), Operation::Divide, 1);
        }
    }

    #[test]
    fn test_invalid_dividend_is_reported_before_zero_divisor() {
        assert_rejected(divide(1.5, 0), Operation::Divide, 0);
        assert_rejected(divide("10", 0), Operation::Divide, 0);
    }

    #[test]
    fn test_zero_divisor_as_float_is_invalid_argument() {
        assert_rejected(divide(1, 0.0), Operation::Divide, 1);
    }

    #[test]
    fn test_out_of_range_carriers_are_rejected() {
        assert_rejected(add(u64::MAX, 0), Operation::Add, 0);
        assert_rejected(add(0, i128::MAX), Operation::Add, 1);
        assert!(IntMath::<i8>::negate(200).unwrap_err().is_invalid_argument());
        assert_eq!(IntMath::<i8>::negate(-128), Ok(i8::MIN));
    }

    #[test]
    fn test_other_widths() {
        assert_eq!(IntMath::<i8>::add(127, 1), Ok(-128));
        assert_eq!(IntMath::<i16>::subtract(i16::MIN, 1), Ok(i16::MAX));
        assert_eq!(IntMath::<i32>::multiply(i32::MAX, i32::MAX), Ok(1));
        assert_eq!(IntMath::<isize>::divide(isize::MIN, -1), Ok(isize::MIN));
        assert_eq!(
            IntMath::<i32>::divide(-7, 0),
            Err(IntMathError::division_by_zero(-7))
        );
    }

    #[test]
    fn test_apply_dispatches_every_operation() {
        let one = Operand::from(1);
        let max = Operand::from(MAX);
        assert_eq!(IntMath64::apply(Operation::Negate, &[max.clone()]), Ok(-MAX));
        assert_eq!(IntMath64::apply(Operation::Add, &[max.clone(), one.clone()]), Ok(MIN));
        assert_eq!(
            IntMath64::apply(Operation::Subtract, &[Operand::from(MIN), one.clone()]),
            Ok(MAX)
        );
        assert_eq!(IntMath64::apply(Operation::Multiply, &[max.clone(), max.clone()]), Ok(1));
        assert_eq!(
            IntMath64::apply(Operation::Divide, &[Operand::from(-5), Operand::from(2)]),
            Ok(-2)
        );
        assert!(
            IntMath64::apply(Operation::Divide, &[one, Operand::from(0)])
                .unwrap_err()
                .is_division_by_zero()
        );
    }

    #[test]
    fn test_apply_reports_arity_mismatch() {
        assert_eq!(
            IntMath64::apply(Operation::Add, &[Operand::from(1)]),
            Err(IntMathError::invalid_argument(
                Operation::Add,
                1,
                Rejection::Arity {
                    expected: 2,
                    found: 1
                }
            ))
        );
        assert_eq!(
            IntMath64::apply(Operation::Negate, &[]),
            Err(IntMathError::invalid_argument(
                Operation::Negate,
                0,
                Rejection::Arity {
                    expected: 1,
                    found: 0
                }
            ))
        );
        assert_eq!(
            IntMath64::apply(
                Operation::Negate,
                &[Operand::from(1), Operand::from("extra")]
            ),
            Err(IntMathError::invalid_argument(
                Operation::Negate,
                1,
                Rejection::Arity {
                    expected: 1,
                    found: 2
                }
            ))
        );
    }

    #[test]
    fn test_apply_arity_error_carries_operand_counts() {
        let operands = [Operand::from(1), Operand::from(2), Operand::from(3)];
        match IntMath64::apply(Operation::Add, &operands) {
            Err(IntMathError::InvalidArgument {
                operation,
                position,
                reason: Rejection::Arity { expected, found },
            }) => {
                assert_eq!(operation, Operation::Add);
                assert_eq!(position, 2);
                assert_eq!(expected, 2);
                assert_eq!(found, 3);
            }
            other => panic!("expected an arity error, got {:?}", other),
        }
    }

    #[test]
    fn test_division_by_zero_only_from_divide() {
        for op in Operation::ALL {
            let operands: Vec<Operand> = (0..op.arity()).map(|_| Operand::from(0)).collect();
            let result = IntMath64::apply(op, &operands);
            assert_eq!(result.is_err(), op == Operation::Divide);
        }
    }
}
