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

//! # Numeric Foundations
//!
//! Traits and utilities for fixed-width signed integer arithmetic that wraps
//! around on overflow.
//!
//! ## Submodules
//!
//! - `constants`: Associated-constant traits (`MinusOne`, `Zero`, `PlusOne`)
//!   implemented for the supported signed integer types.
//! - `widen`: The `Widen` trait pairing each width `W` with a `2W`
//!   intermediate, so exact results can be reduced modulo `2^W` exactly once.
//! - `ops`: By-value wrapping arithmetic traits for negation, addition,
//!   subtraction, multiplication, and truncating division.
//! - `machine_int`: The `MachineInt` trait alias gathering all bounds needed
//!   by generic callers.
//!
//! ## Supported widths
//!
//! `i8`, `i16`, `i32`, `i64` and `isize`. `i128` is excluded because there is
//! no native intermediate twice its width.

pub mod constants;
pub mod machine_int;
pub mod ops;
pub mod widen;
