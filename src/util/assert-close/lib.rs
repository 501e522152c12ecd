/* ************************************************************************ **
** This file is part of smallmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Approximate equality assertions for floats, complex numbers, and
//! (possibly nested) arrays and slices of them.
//!
//! ```
//! # #[macro_use] extern crate smallmat_assert_close;
//! # fn main() {
//! assert_close!(abs=1e-12, [[1.0, 2.0], [3.0, 4.0]], [[1.0, 2.0], [3.0, 4.0 + 1e-14]]);
//! # }
//! ```

use num_complex::Complex;

pub const DEFAULT_NONZERO_TOL: f64 = 1e-9;

#[macro_export]
macro_rules! assert_close {
    ($($t:tt)*) => {
        $crate::assert_close_impl!{@parsing [$($t)*] [[@rel $crate::DEFAULT_NONZERO_TOL] [@abs 0.0]]}
    };
}

#[macro_export]
macro_rules! debug_assert_close {
    ($($t:tt)*) => {{
        #[cfg(debug_assertions)] {
            $crate::assert_close!{$($t)*}
        }
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! assert_close_impl {
    (@parsing [rel=$tol:expr, $($rest:tt)*] [$($assignment:tt)*]) => {
        $crate::assert_close_impl!(@parsing [$($rest)*] [$($assignment)* [@rel $tol]]);
    };
    (@parsing [abs=$tol:expr, $($rest:tt)*] [$($assignment:tt)*]) => {
        $crate::assert_close_impl!(@parsing [$($rest)*] [$($assignment)* [@abs $tol]]);
    };
    (@parsing [$a:expr, $b:expr $(,)*] $assignments:tt) => {
        $crate::assert_close_impl!(@expand $assignments [@comp $a, $b] [@fmt "not nearly equal!"])
    };
    (@parsing [$a:expr, $b:expr, $($fmt:tt)+] $assignments:tt) => {
        $crate::assert_close_impl!(@expand $assignments [@comp $a, $b] [@fmt $($fmt)+])
    };
    (@expand [$($assignment:tt)*] [@comp $a:expr, $b:expr] [@fmt $($fmt:tt)+] ) => {
        #[allow(unused_mut)]
        #[allow(unused_assignments)]
        {
            let a = $a;
            let b = $b;

            let mut abs;
            let mut rel;
            $(
                $crate::assert_close_impl!{@stmt::assign [abs, rel] $assignment}
            )*

            if let Err(e) = $crate::CheckClose::check_close(&a, &b, $crate::Tolerances { abs, rel }) {
                panic!(
                "{} (tolerances: rel={}, abs={})\n left: {:?}\nright: {:?}\n{}",
                 format!($($fmt)*), rel, abs, a, b, e);
            }
        }
    };
    (@stmt::assign [$abs:ident, $rel:ident] [@abs $tol:expr]) => { $abs = $tol; };
    (@stmt::assign [$abs:ident, $rel:ident] [@rel $tol:expr]) => { $rel = $tol; };
}

#[doc(hidden)]
#[inline]
pub fn __is_close(a: f64, b: f64, Tolerances { abs, rel }: Tolerances) -> bool {
    // Implementation from Python 3.5.
    // https://hg.python.org/cpython/file/tip/Modules/mathmodule.c#l1993
    assert!(rel >= 0.0);
    assert!(abs >= 0.0);

    // catch infinities of same sign
    if a == b { return true; }

    // catch infinities of opposite sign, avoiding infinite relative tolerance
    if a.is_infinite() || b.is_infinite() { return false; }

    // case for general values and NaN.
    (a - b).abs() < abs.max(rel * a.abs()).max(rel * b.abs())
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

/// The first pair of scalars found to differ.
///
/// Complex numbers are compared one part at a time, so these are always
/// real numbers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("failed at:\n  left: {left:?}\n right: {right:?}\n   tol: {tol:?}")]
pub struct CheckCloseError {
    pub left: f64,
    pub right: f64,
    pub tol: Tolerances,
}

pub trait CheckClose<Rhs: ?Sized = Self> {
    /// Test that all values of self and other are close.
    fn check_close(&self, other: &Rhs, tol: Tolerances) -> Result<(), CheckCloseError>;
}

impl CheckClose for f64 {
    #[inline]
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError> {
        if __is_close(*self, *other, tol) {
            Ok(())
        } else {
            Err(CheckCloseError { left: *self, right: *other, tol })
        }
    }
}

impl CheckClose for f32 {
    #[inline]
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>
    { f64::from(*self).check_close(&f64::from(*other), tol) }
}

impl<T: CheckClose> CheckClose for Complex<T> {
    #[inline]
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError> {
        self.re.check_close(&other.re, tol)?;
        self.im.check_close(&other.im, tol)
    }
}

impl<'a, T: ?Sized + CheckClose> CheckClose for &'a T {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>
    { CheckClose::check_close(*self, *other, tol) }
}

impl<T: CheckClose> CheckClose for [T] {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError> {
        assert_eq!(self.len(), other.len());
        self.iter().zip(other)
            .map(|(a, b)| a.check_close(b, tol))
            .collect()
    }
}

impl<T: CheckClose, const N: usize> CheckClose for [T; N] {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>
    { (&self[..]).check_close(&other[..], tol) }
}

impl<T: CheckClose> CheckClose for Vec<T> {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>
    { (&self[..]).check_close(&other[..], tol) }
}
