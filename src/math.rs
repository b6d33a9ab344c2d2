//! Generic integer and float arithmetic helpers.

use num_traits::{Float, Num, NumCast, PrimInt, Signed, Unsigned};

/// Quotient and remainder of `n / d`.
///
/// The quotient truncates toward zero and the remainder takes the sign of the dividend:
///
/// ```text
/// div_mod(5, 3)   == (1, 2)
/// div_mod(-5, 3)  == (-1, -2)
/// div_mod(5, -3)  == (-1, 2)
/// div_mod(-5, -3) == (1, -2)
/// ```
///
/// # Panics
///
/// Panics if `d` is zero.
#[inline]
pub fn div_mod<I: PrimInt>(n: I, d: I) -> (I, I) {
    (n / d, n % d)
}

/// Mathematical modulo of `x / d`, always in `[0, |d|)`.
///
/// Works for integers and floats alike, `positive_mod(-5, 3) == 1` and
/// `positive_mod(-7.5, 5.0) == 2.5`. `positive_mod(i32::MIN, -1) == 0` instead of overflowing.
///
/// # Panics
///
/// Panics if `d` is an integer zero.
#[inline]
pub fn positive_mod<R>(x: R, d: R) -> R
where
    R: Num + PartialOrd + Copy,
{
    let zero = R::zero();
    let one = R::one();

    // `MIN % -1` overflows for signed integers, `x % 1` has the same value.
    let rem = if d < zero && d + one == zero {
        x % one
    } else {
        x % d
    };

    if rem >= zero {
        return rem;
    }

    let abs_d = if d < zero { zero - d } else { d };
    let wrapped = rem + abs_d;

    // A tiny negative float remainder rounds up to `|d|` itself.
    if wrapped >= abs_d {
        zero
    } else {
        wrapped
    }
}

/// `a - b`, clamped to zero instead of wrapping around.
#[inline]
pub fn sub_unsigned<N>(a: N, b: N) -> N
where
    N: Unsigned + PartialOrd + Copy,
{
    if a > b {
        a - b
    } else {
        N::zero()
    }
}

/// Largest integer less than or equal to `x`, converted to `I`.
///
/// `None` if `x` is NaN, infinite, or out of range for `I`.
#[inline]
pub fn floor<I: NumCast, F: Float>(x: F) -> Option<I> {
    I::from(x.floor())
}

/// Smallest integer greater than or equal to `x`, converted to `I`.
#[inline]
pub fn ceil<I: NumCast, F: Float>(x: F) -> Option<I> {
    I::from(x.ceil())
}

/// Nearest integer to `x`, rounding half away from zero, converted to `I`.
#[inline]
pub fn round<I: NumCast, F: Float>(x: F) -> Option<I> {
    I::from(x.round())
}

/// Integer part of `x`, converted to `I`.
#[inline]
pub fn trunc<I: NumCast, F: Float>(x: F) -> Option<I> {
    I::from(x.trunc())
}

/// Nearest integer to `x`, rounding ties to even, converted to `I`.
#[inline]
pub fn round_to_even<I: NumCast, F: Float>(x: F) -> Option<I> {
    I::from(round_ties_even(x))
}

fn round_ties_even<F: Float>(x: F) -> F {
    let two = F::one() + F::one();
    let half = F::one() / two;

    if (x - x.trunc()).abs() == half {
        two * (x / two).round()
    } else {
        x.round()
    }
}

/// Absolute value of a signed integer or float.
///
/// # Panics
///
/// Overflows for the minimum value of a signed integer type, like [`i32::abs`].
#[inline]
pub fn abs<R: Signed>(x: R) -> R {
    x.abs()
}

/// `(x - start) % (end - start) + start`.
///
/// The remainder takes the sign of `x - start`, so values below `start` are not wrapped into
/// `[start, end)`: `repeat(12, 0, 10) == 2` but `repeat(3, 5, 10) == 3`. Use [`wrap`] to always
/// land inside the range. For unsigned types `x` must not be smaller than `start`.
#[inline]
pub fn repeat<R>(x: R, start: R, end: R) -> R
where
    R: Num + Copy,
{
    (x - start) % (end - start) + start
}

/// Wraps `x` into `[start, end)`, for values on either side of the range.
///
/// `wrap(3, 5, 10) == 8`, `wrap(-1.0, 0.0, 360.0) == 359.0`. For unsigned types `x` must not be
/// smaller than `start`.
#[inline]
pub fn wrap<R>(x: R, start: R, end: R) -> R
where
    R: Num + PartialOrd + Copy,
{
    positive_mod(x - start, end - start) + start
}
