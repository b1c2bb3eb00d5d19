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

//! Input guard for guarded arithmetic.
//!
//! Callers at an untyped boundary hand over `Operand` values. The guard turns
//! each one into a machine integer of the target width or refuses it with
//! `IntMathError::InvalidArgument`, before any arithmetic is attempted.
//!
//! Only `Operand::Int` can pass, and only if the value fits the target width.
//! Floating-point values are always refused, including integral ones such as
//! `1.0`, as are NaN, infinities, booleans, null, strings, arrays, objects
//! and handles. Nothing is coerced.

use crate::{
    error::{IntMathError, IntMathResult, Rejection},
    operation::Operation,
};
use intmath_core::num::{machine_int::MachineInt, widen::Widen};

/// A dynamically typed value offered as an operand.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// An integer. Carried as `i128` so that values outside the target width
    /// can still be represented and reported.
    Int(i128),
    /// A floating-point number, including NaN and the infinities.
    Float(f64),
    /// A boolean.
    Bool(bool),
    /// The absence of a value.
    Null,
    /// A string. Numeric strings are not parsed.
    Str(String),
    /// An ordered collection.
    Array(Vec<Operand>),
    /// A keyed collection.
    Object(Vec<(String, Operand)>),
    /// An opaque resource handle.
    Handle(u64),
}

/// The type tag of an `Operand`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandKind {
    Int,
    Float,
    Bool,
    Null,
    Str,
    Array,
    Object,
    Handle,
}

impl OperandKind {
    /// Returns the lowercase name of the kind.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Null => "null",
            Self::Str => "string",
            Self::Array => "array",
            Self::Object => "object",
            Self::Handle => "handle",
        }
    }
}

impl std::fmt::Display for OperandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Operand {
    /// Creates an `Operand::Object` from key/value pairs.
    pub fn object<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Operand>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Returns the type tag of this operand.
    #[inline]
    pub fn kind(&self) -> OperandKind {
        match self {
            Self::Int(_) => OperandKind::Int,
            Self::Float(_) => OperandKind::Float,
            Self::Bool(_) => OperandKind::Bool,
            Self::Null => OperandKind::Null,
            Self::Str(_) => OperandKind::Str,
            Self::Array(_) => OperandKind::Array,
            Self::Object(_) => OperandKind::Object,
            Self::Handle(_) => OperandKind::Handle,
        }
    }

    /// Returns the integer payload, if this operand is an integer.
    #[inline]
    pub fn as_int(&self) -> Option<i128> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }
}

macro_rules! operand_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand {
                #[inline(always)]
                fn from(v: $t) -> Self {
                    Self::Int(v as i128)
                }
            }
        )*
    };
}

operand_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl From<f64> for Operand {
    #[inline(always)]
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<f32> for Operand {
    #[inline(always)]
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<bool> for Operand {
    #[inline(always)]
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<()> for Operand {
    #[inline(always)]
    fn from(_: ()) -> Self {
        Self::Null
    }
}

impl From<&str> for Operand {
    fn from(v: &str) -> Self {
        Self::Str(v.to_owned())
    }
}

impl From<String> for Operand {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl<T: Into<Operand>> From<Vec<T>> for Operand {
    fn from(v: Vec<T>) -> Self {
        Self::Array(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Operand>> From<Option<T>> for Operand {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

/// Validates `operand` as a machine integer of width `T`.
///
/// `position` is the zero-based index of the operand within `operation`.
///
/// # Examples
///
/// ```rust
/// # use intmath::{operand::{guard, Operand}, operation::Operation};
/// assert_eq!(guard::<i8>(Operation::Add, 0, &Operand::from(-128)), Ok(-128i8));
/// assert!(guard::<i8>(Operation::Add, 0, &Operand::from(128)).is_err());
/// assert!(guard::<i64>(Operation::Add, 1, &Operand::from(1.0)).is_err());
/// ```
pub fn guard<T: MachineInt>(
    operation: Operation,
    position: usize,
    operand: &Operand,
) -> IntMathResult<T> {
    let reason = match operand {
        Operand::Int(value) => match T::from_i128(*value) {
            Some(v) => return Ok(v),
            None => Rejection::OutOfRange {
                value: *value,
                min: T::min_value().into_i128(),
                max: T::max_value().into_i128(),
            },
        },
        other => Rejection::NotAnInteger(other.kind()),
    };

    log::trace!("{operation}: rejected operand #{position}: {reason}");
    Err(IntMathError::invalid_argument(operation, position, reason))
}
