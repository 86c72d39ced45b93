use log::{debug, trace};
use num::traits::PrimInt;

use crate::{
    number_theory::square_root_engine_trait::IntegerSquareRootEngine,
    prelude::ErrorsIsqrt,
};

/// Computes the integer square root of a non-negative `i32` using binary search.
///
/// The integer square root of `x` is defined as the largest integer `r`
/// such that:
///
/// ```text
/// r * r <= x
/// ```
///
/// # Algorithm
/// 1. `0` and `1` are their own roots and are returned directly.
/// 2. Otherwise the closed range `[1, x]` is searched:
///    - `mid = start + (end - start) / 2`, which cannot overflow `start + end`.
///    - `mid * mid` is computed in `i64`, wide enough for `i32::MAX` squared.
///    - An exact square returns `mid` immediately.
///    - A square below `x` records `mid` as the best candidate and searches the upper half.
///    - A square above `x` searches the lower half.
/// 3. When the range is exhausted the best candidate is returned.
///
/// # Properties
/// - **Time Complexity:** O(log x)
/// - **Space Complexity:** O(1)
/// - **Pure:** no state is kept between calls
///
/// # Errors
/// Returns [`ErrorsIsqrt::InvalidArgument`] if `x < 0`.
///
/// # Examples
/// ```
/// use lib_isqrt::number_theory::integer_square_root::my_sqrt;
///
/// assert_eq!(my_sqrt(8), Ok(2));
/// assert_eq!(my_sqrt(2147395599), Ok(46339));
/// assert!(my_sqrt(-1).is_err());
/// ```
pub fn my_sqrt(x: i32) -> Result<i32, ErrorsIsqrt> {
    if x < 0 {
        debug!("my_sqrt rejected negative input {x}");
        return Err(ErrorsIsqrt::InvalidArgument("x must be non-negative"));
    }
    if x == 0 || x == 1 {
        return Ok(x);
    }

    let target = i64::from(x);
    let mut start: i32 = 1;
    let mut end: i32 = x;
    let mut ans: i32 = 0;

    while start <= end {
        let mid = start + (end - start) / 2;
        trace!("my_sqrt({x}): start={start} end={end} mid={mid}");

        let square = i64::from(mid) * i64::from(mid);
        if square == target {
            return Ok(mid);
        }
        if square < target {
            ans = mid;
            start = mid + 1;
        } else {
            end = mid - 1;
        }
    }

    Ok(ans)
}

fn reject_negative<T: PrimInt>(n: T) -> Result<(), ErrorsIsqrt> {
    if n < T::zero() {
        debug!("integer square root rejected a negative input");
        return Err(ErrorsIsqrt::InvalidArgument("n must be non-negative"));
    }
    Ok(())
}

/// Computes the integer square root of any primitive integer using binary search.
///
/// Same search as [`my_sqrt`], but generic over `u8`..`u128` and `i8`..`i128`.
/// There is no wider type to square into for 128-bit inputs, so the square is
/// taken with `checked_mul`; an overflowing square is larger than any `n` and
/// sends the search into the lower half.
///
/// # Errors
/// Returns [`ErrorsIsqrt::InvalidArgument`] if `n` is negative.
pub fn integer_square_root_binary_search<T: PrimInt>(n: T) -> Result<T, ErrorsIsqrt> {
    reject_negative(n)?;
    let one = T::one();
    if n <= one {
        return Ok(n);
    }
    let two = one + one;

    let mut low = one;
    let mut high = n;
    let mut result = T::zero();
    let mut iterations: u32 = 0;

    while low <= high {
        iterations += 1;
        let mid = low + (high - low) / two;

        match mid.checked_mul(&mid) {
            Some(square) if square == n => {
                trace!("binary search hit an exact square after {iterations} iterations");
                return Ok(mid);
            }
            Some(square) if square < n => {
                result = mid;
                low = mid + one;
            }
            _ => {
                high = mid - one;
            }
        }
    }

    trace!("binary search exhausted its range after {iterations} iterations");
    Ok(result)
}

/// Computes the integer square root of any primitive integer using the
/// Newton–Raphson method (faster)
///
/// Uses the iteration
///
/// ```text
/// x_{k+1} = (x_k + n / x_k) / 2
/// ```
///
/// starting from a power of two no smaller than `sqrt(n)`. From there the
/// iterates decrease strictly until they reach `floor(sqrt(n))`, so the first
/// iterate that does not decrease ends the loop. Converges in `O(log log n)`
/// iterations and never overflows: `x_0 + n / x_0` stays below twice the
/// starting power of two.
///
/// # Errors
/// Returns [`ErrorsIsqrt::InvalidArgument`] if `n` is negative.
pub fn integer_square_root_newton<T: PrimInt>(n: T) -> Result<T, ErrorsIsqrt> {
    reject_negative(n)?;
    let one = T::one();
    if n <= one {
        return Ok(n);
    }
    let two = one + one;

    let bit_length = T::zero().count_zeros() - n.leading_zeros();
    let mut x = one << (bit_length.div_ceil(2) as usize);
    let mut iterations: u32 = 0;

    loop {
        iterations += 1;
        let next = (x + n / x) / two;
        if next >= x {
            trace!("newton converged after {iterations} iterations");
            return Ok(x);
        }
        x = next;
    }
}

/// Checks that `r` is the floor square root of `n`, i.e.
///
/// ```text
/// r * r <= n < (r + 1) * (r + 1)
/// ```
///
/// without overflowing. Negative `n` or `r` never qualify.
pub fn is_floor_square_root<T: PrimInt>(n: T, r: T) -> bool {
    if n < T::zero() || r < T::zero() {
        return false;
    }
    let fits_below = r.checked_mul(&r).is_some_and(|square| square <= n);
    let next_exceeds = match r.checked_add(&T::one()) {
        Some(next) => next.checked_mul(&next).map_or(true, |square| square > n),
        None => true,
    };
    fits_below && next_exceeds
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BinarySearchEngine;

impl IntegerSquareRootEngine for BinarySearchEngine {
    fn name(&self) -> &'static str {
        "binary_search"
    }

    fn isqrt<T: PrimInt>(&self, n: T) -> Result<T, ErrorsIsqrt> {
        integer_square_root_binary_search(n)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NewtonRaphsonEngine;

impl IntegerSquareRootEngine for NewtonRaphsonEngine {
    fn name(&self) -> &'static str {
        "newton_raphson"
    }

    fn isqrt<T: PrimInt>(&self, n: T) -> Result<T, ErrorsIsqrt> {
        integer_square_root_newton(n)
    }
}
