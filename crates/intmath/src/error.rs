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

//! Error signals for guarded arithmetic.
//!
//! There are exactly two disjoint failure kinds. `InvalidArgument` is raised
//! by the input guard before any arithmetic runs, and `DivisionByZero` is
//! raised by `divide` alone, when the divisor is exactly zero. Neither is
//! ever replaced by a sentinel result.

use crate::{operand::OperandKind, operation::Operation};

/// Why an operand was refused by the input guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The operand is not an integer at all (float, bool, null, string, ...).
    NotAnInteger(OperandKind),
    /// The operand is an integer that does not fit in the target width.
    OutOfRange {
        /// The rejected value.
        value: i128,
        /// The smallest representable value of the target width.
        min: i128,
        /// The largest representable value of the target width.
        max: i128,
    },
    /// The number of operands does not match the operation's arity.
    Arity {
        /// The number of operands the operation takes.
        expected: usize,
        /// The number of operands supplied.
        found: usize,
    },
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAnInteger(kind) => write!(f, "expected an integer, found {kind}"),
            Self::OutOfRange { value, min, max } => {
                write!(f, "integer {value} is outside the range [{min}, {max}]")
            }
            Self::Arity { expected, found } => {
                write!(f, "expected {expected} operand(s), found {found}")
            }
        }
    }
}

/// The error type for guarded arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntMathError {
    /// An operand is not representable as the target machine integer.
    InvalidArgument {
        /// The operation that was attempted.
        operation: Operation,
        /// The zero-based position of the offending operand.
        position: usize,
        /// Why the operand was refused.
        reason: Rejection,
    },
    /// The divisor of a division was zero.
    DivisionByZero {
        /// The operation that was attempted; always `Operation::Divide`.
        operation: Operation,
        /// The dividend, sign-extended to `i128`.
        dividend: i128,
    },
}

/// A specialized `Result` type for guarded arithmetic.
pub type IntMathResult<T> = Result<T, IntMathError>;

impl IntMathError {
    /// Creates an `InvalidArgument` error.
    #[inline]
    pub fn invalid_argument(operation: Operation, position: usize, reason: Rejection) -> Self {
        Self::InvalidArgument {
            operation,
            position,
            reason,
        }
    }

    /// Creates a `DivisionByZero` error for the given dividend.
    #[inline]
    pub fn division_by_zero(dividend: i128) -> Self {
        Self::DivisionByZero {
            operation: Operation::Divide,
            dividend,
        }
    }

    /// Returns the operation that failed.
    #[inline]
    pub fn operation(&self) -> Operation {
        match self {
            Self::InvalidArgument { operation, .. } | Self::DivisionByZero { operation, .. } => {
                *operation
            }
        }
    }

    /// Returns `true` if this is an `InvalidArgument` error.
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Returns `true` if this is a `DivisionByZero` error.
    #[inline]
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::DivisionByZero { .. })
    }
}

impl std::fmt::Display for IntMathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument {
                operation,
                position,
                reason,
            } => write!(
                f,
                "Invalid argument #{} to {}: {}",
                position + 1,
                operation,
                reason
            ),
            Self::DivisionByZero {
                operation,
                dividend,
            } => write!(f, "Division by zero in {}: {} / 0", operation, dividend),
        }
    }
}

impl std::error::Error for IntMathError {}
