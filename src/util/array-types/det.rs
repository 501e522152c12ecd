/* ************************************************************************ **
** This file is part of smallmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::traits::{Element, Scalar, StdT};
use crate::types::*;

/// Determinant of a square matrix.
///
/// Sizes up to 3 use closed forms.  Larger matrices are expanded by
/// cofactors along the first row down to 3x3 minors, which costs `O(N!)`
/// and is less accurate than going through an LU decomposition; it is
/// only meant for the small sizes these types are designed for.
#[inline]
pub fn det<const N: usize, E: Element>(m: &Mat<N, N, E>) -> StdT<E> {
    let a = m.map(Element::value).0;
    match N {
        0..=3 => closed_form(N, |r, c| a[r][c]),
        _ => expand_first_row(&a, 0, &std::array::from_fn::<_, N, _>(|c| c), 3),
    }
}

/// Determinant by cofactor expansion all the way down to `1x1` minors.
///
/// For sizes 2 and 3 this performs exactly the same operations as [`det`].
pub fn cofactor_det<const N: usize, E: Element>(m: &Mat<N, N, E>) -> StdT<E> {
    let a = m.map(Element::value).0;
    expand_first_row(&a, 0, &std::array::from_fn::<_, N, _>(|c| c), 1)
}

impl<const N: usize, E: Element> Mat<N, N, E> {
    /// See [`det`].
    #[inline(always)]
    pub fn det(&self) -> StdT<E>
    { det(self) }
}

// Determinant of the square submatrix of `a` made of rows `row..` and the
// given columns. Minors no larger than `leaf` use a closed form.
fn expand_first_row<S: Scalar, const N: usize>(
    a: &[[S; N]; N],
    row: usize,
    cols: &[usize],
    leaf: usize,
) -> S {
    let k = cols.len();
    debug_assert_eq!(row + k, N);
    if k <= leaf {
        return closed_form(k, |r, c| a[row + r][cols[c]]);
    }

    let mut minor_cols = [0; N];
    let mut acc = S::zero();
    for skip in 0..k {
        let mut len = 0;
        for (i, &c) in cols.iter().enumerate() {
            if i != skip {
                minor_cols[len] = c;
                len += 1;
            }
        }
        let term = a[row][cols[skip]] * expand_first_row(a, row + 1, &minor_cols[..len], leaf);
        acc = match skip {
            0 => term,
            _ if skip % 2 == 1 => acc - term,
            _ => acc + term,
        };
    }
    acc
}

fn closed_form<S: Scalar, F>(n: usize, a: F) -> S
where F: Fn(usize, usize) -> S,
{
    match n {
        0 => S::one(),
        1 => a(0, 0),
        2 => a(0, 0) * a(1, 1) - a(0, 1) * a(1, 0),
        3 => {
            a(0, 0) * (a(1, 1) * a(2, 2) - a(1, 2) * a(2, 1))
                - a(0, 1) * (a(1, 0) * a(2, 2) - a(1, 2) * a(2, 0))
                + a(0, 2) * (a(1, 0) * a(2, 1) - a(1, 1) * a(2, 0))
        },
        _ => unreachable!("no closed form for {}x{} determinant", n, n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;
    use rand::Rng;

    #[test]
    fn small() {
        assert_eq!(det(&Mat([[3.0f64]])), 3.0);
        assert_eq!(det(&Mat([[2.0f64, 0.0], [0.0, 4.0]])), 8.0);
        assert_eq!(det(&Mat([[1.0f64, 2.0], [3.0, 4.0]])), -2.0);
        assert_eq!(Mat([[1.0f64, 2.0, 4.0], [5.0, 2.0, 1.0], [3.0, 6.0, 3.0]]).det(), 72.0);
    }

    #[test]
    fn larger() {
        let m = Mat([
            [2.0f64, 0.0, 0.0, 0.0],
            [0.0, 3.0, 0.0, 0.0],
            [0.0, 0.0, 4.0, 0.0],
            [1.0, 1.0, 1.0, 5.0],
        ]);
        assert_eq!(det(&m), 120.0);

        // swapping two rows negates it
        let swapped = Mat([m[1], m[0], m[2], m[3]]);
        assert_eq!(det(&swapped), -120.0);

        let m5 = Mat::<5, 5>::from_fn(|r, c| if r == c { 2.0 } else if c == r + 1 { 1.0 } else { 0.0 });
        assert_eq!(det(&m5), 32.0);
    }

    #[test]
    fn closed_forms_match_expansion() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let m2 = Mat::<2, 2>::from_fn(|_, _| rng.gen_range(-5.0..5.0));
            let m3 = Mat::<3, 3>::from_fn(|_, _| rng.gen_range(-5.0..5.0));
            assert_eq!(det(&m2), cofactor_det(&m2));
            assert_eq!(det(&m3), cofactor_det(&m3));

            let m5 = Mat::<5, 5>::from_fn(|_, _| rng.gen_range(-5.0..5.0));
            assert_close!(abs=1e-9, rel=1e-9, det(&m5), cofactor_det(&m5));
        }
    }

    #[test]
    fn views_and_complex() {
        let m = Mat([[1.0f64, 2.0], [3.0, 4.0]]);
        assert_eq!(det(&m.negated()), -2.0);
        assert_eq!(det(&m.negated().drop_row::<1>(0).drop_col::<1>(0)), -4.0);

        let i = Complex::new(0.0f64, 1.0);
        let z = Mat([[i, Complex::new(0.0, 0.0)], [Complex::new(0.0, 0.0), i]]);
        assert_eq!(det(&z), Complex::new(-1.0, 0.0));
        assert_eq!(det(&z.conjugated()), Complex::new(-1.0, 0.0));
        assert_eq!(det(&z.h()), Complex::new(-1.0, 0.0));
    }
}
