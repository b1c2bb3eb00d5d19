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

//! # IntMath
//!
//! Deterministic, portable two's-complement arithmetic for fixed-width signed
//! integers. Negation, addition, subtraction, multiplication and division
//! wrap around on overflow exactly as machine integers do, and division
//! rounds toward zero.
//!
//! ## Modules
//!
//! - `operand`: The input guard. `Operand` carries values from untyped
//!   boundaries; `guard` accepts only integers representable at the target
//!   width and refuses everything else with `InvalidArgument`.
//! - `arith`: The typed arithmetic core over any `MachineInt`.
//! - `int_math`: Guarded entry points, `IntMath<T>` for any width and free
//!   functions at the reference width `i64`.
//! - `operation`: The `Operation` descriptor used for dispatch and errors.
//! - `error`: `IntMathError`, with its two kinds `InvalidArgument` and
//!   `DivisionByZero`.
//!
//! ## Edge cases
//!
//! - `negate(MIN) == MIN`
//! - `add(MAX, 1) == MIN` and `subtract(MIN, 1) == MAX`
//! - `multiply(MAX, MAX) == 1`
//! - `divide(MIN, -1) == MIN` and `divide(-5, 2) == -2`
//! - `divide(x, 0)` fails with `DivisionByZero`
//! - `negate(1.0)` fails with `InvalidArgument`

pub mod arith;
pub mod error;
pub mod int_math;
pub mod operand;
pub mod operation;

pub use error::{IntMathError, IntMathResult, Rejection};
pub use int_math::{IntMath, IntMath64, add, divide, multiply, negate, subtract};
pub use intmath_core::num::machine_int::MachineInt;
pub use operand::{Operand, OperandKind};
pub use operation::Operation;
