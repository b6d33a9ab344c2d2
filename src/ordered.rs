//! Three-way comparison across the primitive ordered kinds.
//!
//! Every [`Ordered`] value exposes its representation as an [`OrderedRepr`], a closed set of
//! primitive kinds. Comparison dispatches on that representation, so newtypes over a primitive
//! compare exactly like the primitive they wrap, including against the bare primitive itself.
//!
//! Comparing two values of different kinds (say an `i32` against an `i64`, or a `bool` against a
//! `u8`) is a contract violation. [`compare`] panics on it, [`try_compare`] reports it.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use num_traits::Float;

/// Representation of an ordered value, one variant per supported primitive kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OrderedRepr<'a> {
    Bool(bool),
    Char(char),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    Usize(usize),
    F32(f32),
    F64(f64),
    Str(&'a str),
}

impl OrderedRepr<'_> {
    /// Name of the primitive kind, as spelled in Rust.
    pub fn kind(&self) -> &'static str {
        match self {
            OrderedRepr::Bool(_) => "bool",
            OrderedRepr::Char(_) => "char",
            OrderedRepr::I8(_) => "i8",
            OrderedRepr::I16(_) => "i16",
            OrderedRepr::I32(_) => "i32",
            OrderedRepr::I64(_) => "i64",
            OrderedRepr::I128(_) => "i128",
            OrderedRepr::Isize(_) => "isize",
            OrderedRepr::U8(_) => "u8",
            OrderedRepr::U16(_) => "u16",
            OrderedRepr::U32(_) => "u32",
            OrderedRepr::U64(_) => "u64",
            OrderedRepr::U128(_) => "u128",
            OrderedRepr::Usize(_) => "usize",
            OrderedRepr::F32(_) => "f32",
            OrderedRepr::F64(_) => "f64",
            OrderedRepr::Str(_) => "str",
        }
    }
}

impl fmt::Display for OrderedRepr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderedRepr::Bool(v) => write!(f, "{v}"),
            OrderedRepr::Char(v) => write!(f, "{v:?}"),
            OrderedRepr::I8(v) => write!(f, "{v}"),
            OrderedRepr::I16(v) => write!(f, "{v}"),
            OrderedRepr::I32(v) => write!(f, "{v}"),
            OrderedRepr::I64(v) => write!(f, "{v}"),
            OrderedRepr::I128(v) => write!(f, "{v}"),
            OrderedRepr::Isize(v) => write!(f, "{v}"),
            OrderedRepr::U8(v) => write!(f, "{v}"),
            OrderedRepr::U16(v) => write!(f, "{v}"),
            OrderedRepr::U32(v) => write!(f, "{v}"),
            OrderedRepr::U64(v) => write!(f, "{v}"),
            OrderedRepr::U128(v) => write!(f, "{v}"),
            OrderedRepr::Usize(v) => write!(f, "{v}"),
            OrderedRepr::F32(v) => write!(f, "{v}"),
            OrderedRepr::F64(v) => write!(f, "{v}"),
            OrderedRepr::Str(v) => write!(f, "{v:?}"),
        }
    }
}

/// A value with a natural total order inherited from one primitive kind.
///
/// Implemented for all integer and float primitives, `bool`, `char`, `str` and `String`, and for
/// references and smart pointers to any `Ordered` value. Newtypes opt in with [`impl_ordered!`].
///
/// [`impl_ordered!`]: crate::impl_ordered
pub trait Ordered {
    fn ordered_repr(&self) -> OrderedRepr<'_>;
}

/// Error returned by [`try_compare`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CompareError {
    #[error("cannot compare values of different kinds: {left} and {right}")]
    KindMismatch {
        left: &'static str,
        right: &'static str,
    },
}

/// Compares `x` and `y` by the natural order of their primitive kind.
///
/// Returns `Less`, `Equal` or `Greater`, which cast to `-1`, `0` and `1` with `as i8`.
///
/// Floats order like IEEE numbers, except that NaN equals NaN and sorts before every other value,
/// which keeps the relation total. `-0.0` and `0.0` compare equal.
///
/// # Panics
///
/// Panics if `x` and `y` have different representation kinds.
#[inline]
pub fn compare<X, Y>(x: &X, y: &Y) -> Ordering
where
    X: Ordered + ?Sized,
    Y: Ordered + ?Sized,
{
    match try_compare(x, y) {
        Ok(ord) => ord,
        Err(err) => panic!("{err}"),
    }
}

/// Like [`compare`], but reports a kind mismatch instead of panicking.
pub fn try_compare<X, Y>(x: &X, y: &Y) -> Result<Ordering, CompareError>
where
    X: Ordered + ?Sized,
    Y: Ordered + ?Sized,
{
    use OrderedRepr::*;

    let ord = match (x.ordered_repr(), y.ordered_repr()) {
        (Bool(a), Bool(b)) => a.cmp(&b),
        (Char(a), Char(b)) => a.cmp(&b),
        (I8(a), I8(b)) => a.cmp(&b),
        (I16(a), I16(b)) => a.cmp(&b),
        (I32(a), I32(b)) => a.cmp(&b),
        (I64(a), I64(b)) => a.cmp(&b),
        (I128(a), I128(b)) => a.cmp(&b),
        (Isize(a), Isize(b)) => a.cmp(&b),
        (U8(a), U8(b)) => a.cmp(&b),
        (U16(a), U16(b)) => a.cmp(&b),
        (U32(a), U32(b)) => a.cmp(&b),
        (U64(a), U64(b)) => a.cmp(&b),
        (U128(a), U128(b)) => a.cmp(&b),
        (Usize(a), Usize(b)) => a.cmp(&b),
        (F32(a), F32(b)) => compare_float(a, b),
        (F64(a), F64(b)) => compare_float(a, b),
        (Str(a), Str(b)) => a.cmp(b),
        (left, right) => {
            return Err(CompareError::KindMismatch {
                left: left.kind(),
                right: right.kind(),
            })
        }
    };

    Ok(ord)
}

fn compare_float<F: Float>(a: F, b: F) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => {
            if a < b {
                Ordering::Less
            } else if a > b {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        }
    }
}

macro_rules! ordered_primitive_impl {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Ordered for $ty {
                #[inline]
                fn ordered_repr(&self) -> OrderedRepr<'_> {
                    OrderedRepr::$variant(*self)
                }
            }
        )*
    };
}

ordered_primitive_impl!(
    bool => Bool,
    char => Char,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
    f32 => F32,
    f64 => F64,
);

impl Ordered for str {
    #[inline]
    fn ordered_repr(&self) -> OrderedRepr<'_> {
        OrderedRepr::Str(self)
    }
}

impl Ordered for String {
    #[inline]
    fn ordered_repr(&self) -> OrderedRepr<'_> {
        OrderedRepr::Str(self.as_str())
    }
}

impl Ordered for Cow<'_, str> {
    #[inline]
    fn ordered_repr(&self) -> OrderedRepr<'_> {
        OrderedRepr::Str(self.as_ref())
    }
}

impl Ordered for OrderedRepr<'_> {
    #[inline]
    fn ordered_repr(&self) -> OrderedRepr<'_> {
        *self
    }
}

impl<T: Ordered + ?Sized> Ordered for &T {
    #[inline]
    fn ordered_repr(&self) -> OrderedRepr<'_> {
        (**self).ordered_repr()
    }
}

impl<T: Ordered + ?Sized> Ordered for &mut T {
    #[inline]
    fn ordered_repr(&self) -> OrderedRepr<'_> {
        (**self).ordered_repr()
    }
}

impl<T: Ordered + ?Sized> Ordered for Box<T> {
    #[inline]
    fn ordered_repr(&self) -> OrderedRepr<'_> {
        (**self).ordered_repr()
    }
}

impl<T: Ordered + ?Sized> Ordered for Rc<T> {
    #[inline]
    fn ordered_repr(&self) -> OrderedRepr<'_> {
        (**self).ordered_repr()
    }
}

impl<T: Ordered + ?Sized> Ordered for Arc<T> {
    #[inline]
    fn ordered_repr(&self) -> OrderedRepr<'_> {
        (**self).ordered_repr()
    }
}

/// Implements [`Ordered`] for single field tuple structs by forwarding to the wrapped value.
///
/// ```ignore
/// struct Score(u32);
/// struct Flag(bool);
///
/// utilkit::impl_ordered!(Score, Flag);
/// ```
///
/// [`Ordered`]: crate::Ordered
#[macro_export]
macro_rules! impl_ordered {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Ordered for $ty {
                #[inline]
                fn ordered_repr(&self) -> $crate::OrderedRepr<'_> {
                    $crate::Ordered::ordered_repr(&self.0)
                }
            }
        )+
    };
}
