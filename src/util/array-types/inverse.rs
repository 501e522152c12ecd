/* ************************************************************************ **
** This file is part of smallmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Matrix inversion.
//!
//! Inversion commutes with both negation and conjugation, so everything
//! here works on the stored numbers and wraps the result back up in the
//! input's element type.  Inverting a `Mat<N, N, Negator<f64>>` therefore
//! costs no more than inverting a `Mat<N, N, f64>`.

use crate::error::{InverseError, Result};
use crate::traits::{Element, Scalar, StdT};
use crate::types::*;

use num_traits::Zero;
use slice_of_array::prelude::*;
use smallmat_linalg::{check_info, Lapack, LapackError};

/// Inverse of a square matrix.
///
/// Sizes up to 3 use closed forms based on the adjugate.  Larger matrices
/// go through [`lapack_inverse`].
///
/// Fails if the matrix is singular.  A closed form also fails if the
/// reciprocal of the determinant is not finite, so the output never
/// contains an infinity or NaN that wasn't in the input.
pub fn inverse<const N: usize, E: Element>(m: &Mat<N, N, E>) -> Result<Mat<N, N, E>> {
    let a = m.map(Element::raw).0;
    match N {
        1 => {
            let inv = reciprocal(a[0][0], N)?;
            Ok(wrap([[inv]]))
        },
        2 => {
            let ood = reciprocal(a[0][0] * a[1][1] - a[0][1] * a[1][0], N)?;
            Ok(wrap([
                [ood * a[1][1], -ood * a[0][1]],
                [-ood * a[1][0], ood * a[0][0]],
            ]))
        },
        3 => {
            // cofactors along the first row are shared with the determinant
            let d00 = a[1][1] * a[2][2] - a[1][2] * a[2][1];
            let d01 = a[1][0] * a[2][2] - a[1][2] * a[2][0];
            let d02 = a[1][0] * a[2][1] - a[1][1] * a[2][0];
            let ood = reciprocal(a[0][0] * d00 - a[0][1] * d01 + a[0][2] * d02, N)?;

            let d10 = a[0][1] * a[2][2] - a[0][2] * a[2][1];
            let d11 = a[0][0] * a[2][2] - a[0][2] * a[2][0];
            let d12 = a[0][0] * a[2][1] - a[0][1] * a[2][0];
            let d20 = a[0][1] * a[1][2] - a[0][2] * a[1][1];
            let d21 = a[0][0] * a[1][2] - a[0][2] * a[1][0];
            let d22 = a[0][0] * a[1][1] - a[0][1] * a[1][0];
            Ok(wrap([
                [ood * d00, -ood * d10, ood * d20],
                [-ood * d01, ood * d11, -ood * d21],
                [ood * d02, -ood * d12, ood * d22],
            ]))
        },
        _ => {
            trace!("inverting {}x{} matrix by LU decomposition", N, N);
            lapack_inverse(m)
        },
    }
}

/// Inverse of a square matrix, by LU decomposition with partial pivoting.
///
/// This is what [`inverse`] uses for sizes above 3, but it can be called
/// for any size to get the more numerically stable algorithm.
///
/// Fails if the decomposition finds an exactly zero pivot.
pub fn lapack_inverse<const N: usize, E: Element>(m: &Mat<N, N, E>) -> Result<Mat<N, N, E>> {
    let raw = m.map(Element::raw);
    if N == 1 {
        let inv = reciprocal(raw[0][0], N)?;
        return Ok(Mat::from_fn(|_, _| E::from_raw(inv)));
    }

    // transposing the rows gives a column-major buffer
    let mut a = raw.t().0;
    let mut ipiv = [0; N];
    let mut work = [<StdT<E> as Zero>::zero(); N];
    let n = N as i32;

    let info = <StdT<E> as Lapack>::getrf(n, n, a[..].flat_mut(), n, &mut ipiv);
    check(<StdT<E> as Lapack>::GETRF, info, N)?;

    let info = <StdT<E> as Lapack>::getri(n, a[..].flat_mut(), n, &ipiv, &mut work);
    check(<StdT<E> as Lapack>::GETRI, info, N)?;

    Ok(Mat::from_fn(|r, c| E::from_raw(a[c][r])))
}

impl<const N: usize, E: Element> Mat<N, N, E> {
    /// See [`inverse`].
    #[inline(always)]
    pub fn invert(&self) -> Result<Self>
    { inverse(self) }
}

// ---------------------------------------------------------------------------

fn reciprocal<S: Scalar>(det: S, dim: usize) -> Result<S> {
    let singular = || {
        debug!("cannot invert {}x{} matrix with determinant {:?}", dim, dim, det);
        InverseError::SingularMatrix { dim, source: None }
    };
    if det == S::zero() {
        return Err(singular());
    }
    let ood = S::one() / det;
    if !ood.is_finite() {
        return Err(singular());
    }
    Ok(ood)
}

fn check(routine: &'static str, info: i32, dim: usize) -> Result<()> {
    match check_info(routine, info) {
        Ok(()) => Ok(()),
        Err(LapackError::BadArgument { routine, arg }) => {
            panic!("bad arg number {} to {}", arg, routine);
        },
        Err(e @ LapackError::Singular { .. }) => {
            debug!("{}", e);
            Err(InverseError::SingularMatrix { dim, source: Some(e) })
        },
    }
}

// Reinterpret stored numbers from an `N x N` closed form as the input's
// element type.
#[inline(always)]
fn wrap<const N: usize, const K: usize, E: Element>(out: [[StdT<E>; K]; K]) -> Mat<N, N, E> {
    debug_assert_eq!(N, K);
    Mat::from_fn(|r, c| E::from_raw(out[r][c]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;
    use rand::Rng;

    #[test]
    fn inverse_1() {
        assert_eq!(inverse(&Mat([[4.0f64]])).unwrap(), Mat([[0.25]]));
        assert_eq!(lapack_inverse(&Mat([[-2.0f32]])).unwrap(), Mat([[-0.5]]));
    }

    #[test]
    fn inverse_2() {
        let m = Mat([[7.0f64, 2.0], [-11.0, 4.0]]);
        let expected = Mat([[2.0 / 25.0, -1.0 / 25.0], [11.0 / 50.0, 7.0 / 50.0]]);
        assert_close!(abs=1e-15, inverse(&m).unwrap().0, expected.0);
        assert_close!(abs=1e-15, lapack_inverse(&m).unwrap().0, expected.0);

        let m = Mat([[2.0f64, 0.0], [0.0, 4.0]]);
        assert_eq!(m.invert().unwrap(), Mat([[0.5, 0.0], [0.0, 0.25]]));
    }

    #[test]
    fn inverse_3() {
        let m = Mat([[1.0f64, 2.0, 4.0], [5.0, 2.0, 1.0], [3.0, 6.0, 3.0]]);
        let expected = Mat([
            [0.0, 1.0 / 4.0, -1.0 / 12.0],
            [-1.0 / 6.0, -1.0 / 8.0, 19.0 / 72.0],
            [1.0 / 3.0, 0.0, -1.0 / 9.0],
        ]);
        assert_close!(abs=1e-14, inverse(&m).unwrap().0, expected.0);
        assert_close!(abs=1e-14, lapack_inverse(&m).unwrap().0, expected.0);
    }

    #[test]
    fn larger_sizes_use_lu() {
        let mut rng = rand::thread_rng();
        for _ in 0..10 {
            // diagonally dominant, so comfortably invertible
            let m = Mat::<5, 5>::from_fn(|r, c| {
                let x: f64 = rng.gen_range(-1.0..1.0);
                if r == c { x + 10.0 } else { x }
            });
            let inv = inverse(&m).unwrap();
            assert_close!(abs=1e-12, (m * inv).0, Mat::<5, 5>::eye().0);
            assert_close!(abs=1e-12, (inv * m).0, Mat::<5, 5>::eye().0);
        }
    }

    #[test]
    fn views_are_preserved() {
        let m = Mat([[1.0f64, 2.0], [3.0, 4.0]]);
        let inv = inverse(&m.negated()).unwrap();
        // stored numbers are the inverse of the stored numbers
        assert_eq!(inv.map(|x| x.0), inverse(&m).unwrap());
        assert_close!(abs=1e-15, (m.negated() * inv).0, Mat::<2, 2>::eye().0);

        let z = Mat::<4, 4, _>::from_fn(|r, c| {
            Complex::new(0.1 * (r + 2 * c) as f64, if r == c { 10.0 } else { 0.5 })
        });
        let zc = z.conjugated();
        let inv = inverse(&zc).unwrap();
        let product = zc * inv;
        assert_close!(abs=1e-12, product.0, Mat::<4, 4, Complex<f64>>::eye().0);
    }

    #[test]
    #[should_panic(expected = "bad arg number 3 to dgetri")]
    fn bad_argument_is_a_bug() {
        let _ = check("dgetri", -3, 4);
    }

    #[test]
    fn singular_info_is_an_error() {
        match check("zgetrf", 2, 4) {
            Err(InverseError::SingularMatrix { dim: 4, source: Some(LapackError::Singular { index: 2, .. }) }) => {},
            r => panic!("unexpected result: {:?}", r),
        }
        assert_eq!(check("zgetri", 0, 4), Ok(()));
    }

    #[test]
    fn singular() {
        let err = inverse(&Mat([[1.0f64, 2.0], [2.0, 4.0]])).unwrap_err();
        assert_eq!(err, InverseError::SingularMatrix { dim: 2, source: None });

        assert!(inverse(&Mat([[0.0f64]])).is_err());
        assert!(inverse(&Mat::<3, 3>::zero()).is_err());
        // a tiny determinant whose reciprocal overflows
        assert!(inverse(&Mat([[1e-160f64, 0.0], [0.0, 1e-160]])).is_err());

        let m = Mat([
            [1.0f64, 2.0, 3.0, 4.0],
            [2.0, 4.0, 6.0, 8.0],
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
        ]);
        match inverse(&m) {
            Err(InverseError::SingularMatrix { dim: 4, source: Some(LapackError::Singular { .. }) }) => {},
            r => panic!("unexpected result: {:?}", r),
        }
        assert!(lapack_inverse(&Mat([[1.0f64, 1.0], [1.0, 1.0]])).is_err());
    }
}
