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

//! # IntMath Core
//!
//! Numeric foundations for deterministic, two's-complement wrapping
//! arithmetic over fixed-width signed integers. Everything here is pure and
//! allocation-free; the guarded public surface lives in the `intmath` crate.
//!
//! ## Modules
//!
//! - `num`: Associated-constant traits (`MinusOne`, `Zero`, `PlusOne`), the
//!   `Widen` bridge to a double-width intermediate, by-value wrapping
//!   arithmetic traits, and the `MachineInt` bound collecting all of them.
//!
//! ## Purpose
//!
//! Reproducing hardware overflow behavior exactly, on every platform, without
//! reaching for checked or saturating primitives that would alter the result.
//!
//! Refer to each module for detailed APIs and examples.

pub mod num;
