/* ************************************************************************ **
** This file is part of smallmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! The two LAPACK entry points needed to invert a small square matrix.
//!
//! Both routines operate in place on a column-major buffer and report
//! their status through a LAPACK-style `info` code:
//!
//! * `0` on success;
//! * negative if an argument was invalid;
//! * `+k` if `U(k,k)` (1-based) is exactly zero.
//!
//! Calls are forwarded to LAPACKe.

extern crate lapack_src;

#[cfg(test)]
#[macro_use]
extern crate smallmat_assert_close;

use num_complex::Complex;

pub type Result<T> = std::result::Result<T, LapackError>;

/// A nonzero `info` status from `getrf` or `getri`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LapackError {
    /// Negative status. This is always a bug in the caller.
    #[error("bad arg number {arg} to {routine}")]
    BadArgument { routine: &'static str, arg: i32 },

    /// Positive status. `index` is the 1-based index of the zero pivot.
    #[error("matrix is singular ({routine} info={index})")]
    Singular { routine: &'static str, index: i32 },
}

/// Turn a LAPACK `info` status into a `Result`.
pub fn check_info(routine: &'static str, info: i32) -> Result<()> {
    match info {
        0 => Ok(()),
        info if info < 0 => Err(LapackError::BadArgument { routine, arg: -info }),
        index => Err(LapackError::Singular { routine, index }),
    }
}

/// Plain numeric types that the factorization routines are defined for.
///
/// This trait is sealed; it is implemented for `f32`, `f64`, and
/// `Complex` of each.
pub trait Lapack: Copy + Send + Sync + 'static + private::Sealed {
    /// Name used for this type's `getrf` in error messages.
    const GETRF: &'static str;
    /// Name used for this type's `getri` in error messages.
    const GETRI: &'static str;

    /// LU factorization with partial pivoting of the `m x n` column-major
    /// matrix `a`, in place.
    ///
    /// `ipiv` receives `min(m, n)` 1-based row indices; row `i` was
    /// interchanged with row `ipiv[i]`.
    fn getrf(m: i32, n: i32, a: &mut [Self], lda: i32, ipiv: &mut [i32]) -> i32;

    /// Compute the inverse from the output of `getrf`, in place.
    ///
    /// `work` is scratch space of at least `n` elements.
    fn getri(n: i32, a: &mut [Self], lda: i32, ipiv: &[i32], work: &mut [Self]) -> i32;
}

mod private {
    pub trait Sealed { }
}

macro_rules! impl_lapack {
    ($($T:ty => [$getrf:ident, $getri_work:ident];)+) => {$(
        impl private::Sealed for $T { }

        impl Lapack for $T {
            const GETRF: &'static str = stringify!($getrf);
            const GETRI: &'static str = stringify!($getri_work);

            fn getrf(m: i32, n: i32, a: &mut [Self], lda: i32, ipiv: &mut [i32]) -> i32 {
                // lapacke hates size-zero arrays.
                if m == 0 || n == 0 {
                    return 0;
                }
                let layout = ::lapacke::Layout::ColumnMajor;
                unsafe { ::lapacke::$getrf(layout, m, n, a, lda, ipiv) }
            }

            fn getri(n: i32, a: &mut [Self], lda: i32, ipiv: &[i32], work: &mut [Self]) -> i32 {
                if n == 0 {
                    return 0;
                }
                let layout = ::lapacke::Layout::ColumnMajor;
                let lwork = work.len() as i32;
                unsafe { ::lapacke::$getri_work(layout, n, a, lda, ipiv, work, lwork) }
            }
        }
    )+};
}

impl_lapack!{
    f32 => [sgetrf, sgetri_work];
    f64 => [dgetrf, dgetri_work];
    Complex<f32> => [cgetrf, cgetri_work];
    Complex<f64> => [zgetrf, zgetri_work];
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;
    use rand::Rng;
    use std::ops::{Add, Mul};

    // column-major product of two n x n matrices
    fn matmul<T>(n: usize, a: &[T], b: &[T]) -> Vec<T>
    where T: Copy + Zero + Add<Output=T> + Mul<Output=T>,
    {
        let mut out = vec![T::zero(); n * n];
        for j in 0..n {
            for k in 0..n {
                for i in 0..n {
                    out[i + j * n] = out[i + j * n] + a[i + k * n] * b[k + j * n];
                }
            }
        }
        out
    }

    fn eye(n: usize) -> Vec<f64> {
        (0..n * n).map(|k| if k % (n + 1) == 0 { 1.0 } else { 0.0 }).collect()
    }

    fn invert<T: Lapack>(n: usize, a: &mut [T]) -> Result<()> {
        let mut ipiv = vec![0; n];
        let mut work = a[..n].to_vec();
        check_info(T::GETRF, T::getrf(n as i32, n as i32, a, n as i32, &mut ipiv))?;
        check_info(T::GETRI, T::getri(n as i32, a, n as i32, &ipiv, &mut work))?;
        Ok(())
    }

    #[test]
    fn info_codes() {
        assert_eq!(check_info("dgetrf", 0), Ok(()));
        assert_eq!(
            check_info("dgetrf", -4),
            Err(LapackError::BadArgument { routine: "dgetrf", arg: 4 }),
        );
        assert_eq!(
            check_info("dgetri", 2),
            Err(LapackError::Singular { routine: "dgetri", index: 2 }),
        );
        assert_eq!(
            LapackError::BadArgument { routine: "dgetrf", arg: 4 }.to_string(),
            "bad arg number 4 to dgetrf",
        );
    }

    #[test]
    fn known_inverse() {
        // [[1, 2], [3, 4]], column-major
        let mut a = vec![1.0f64, 3.0, 2.0, 4.0];
        invert(2, &mut a).unwrap();
        assert_close!(abs=1e-13, &a[..], &[-2.0, 1.5, 1.0, -0.5][..]);
    }

    #[test]
    fn pivoting_is_required() {
        // zero in the leading position; fails without row interchanges
        let mut a = vec![
            0.0f64, 1.0, 0.0,
            2.0, 0.0, 0.0,
            0.0, 0.0, 4.0,
        ];
        let orig = a.clone();
        invert(3, &mut a).unwrap();
        assert_close!(abs=1e-13, &matmul(3, &orig, &a)[..], &eye(3)[..]);
    }

    #[test]
    fn random_inverse() {
        let mut rng = rand::thread_rng();
        for n in 1..=8 {
            for _ in 0..20 {
                // diagonally dominant, so well-conditioned
                let orig: Vec<f64> = (0..n * n).map(|k| {
                    let diag = if k % (n + 1) == 0 { n as f64 } else { 0.0 };
                    diag + rng.gen_range(-1.0..1.0)
                }).collect();
                let mut a = orig.clone();
                invert(n, &mut a).unwrap();
                assert_close!(abs=1e-10, &matmul(n, &orig, &a)[..], &eye(n)[..]);
                assert_close!(abs=1e-10, &matmul(n, &a, &orig)[..], &eye(n)[..]);
            }
        }
    }

    #[test]
    fn complex_inverse() {
        let c = |re, im| Complex::new(re, im);
        // [[1+i, 2], [0, 3-i]], column-major
        let orig = vec![c(1.0f64, 1.0), c(0.0, 0.0), c(2.0, 0.0), c(3.0, -1.0)];
        let mut a = orig.clone();
        invert(2, &mut a).unwrap();

        let prod = matmul(2, &orig, &a);
        let expected = [c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0)];
        assert_close!(abs=1e-13, &prod[..], &expected[..]);
    }

    #[test]
    fn f32_inverse() {
        let orig = vec![4.0f32, 1.0, 2.0, 3.0];
        let mut a = orig.clone();
        invert(2, &mut a).unwrap();
        assert_close!(abs=1e-6, &matmul(2, &orig, &a)[..], &[1.0f32, 0.0, 0.0, 1.0][..]);
    }

    #[test]
    fn singular() {
        let mut a = vec![1.0f64, 2.0, 2.0, 4.0];
        match invert(2, &mut a) {
            Err(LapackError::Singular { index: 2, .. }) => {},
            r => panic!("unexpected result: {:?}", r),
        }

        let mut a = vec![0.0f64; 9];
        match invert(3, &mut a) {
            Err(LapackError::Singular { index: 1, .. }) => {},
            r => panic!("unexpected result: {:?}", r),
        }
    }

    #[test]
    fn getri_rejects_small_workspace() {
        let mut a = vec![2.0f64, 0.0, 0.0, 2.0];
        let mut ipiv = [0; 2];
        assert_eq!(f64::getrf(2, 2, &mut a, 2, &mut ipiv), 0);
        assert!(f64::getri(2, &mut a, 2, &ipiv, &mut [0.0]) < 0);
    }

    #[test]
    fn getrf_rejects_bad_lda() {
        let mut a = vec![1.0f64; 4];
        let mut ipiv = [0; 2];
        assert!(f64::getrf(2, 2, &mut a, 1, &mut ipiv) < 0);
    }
}
