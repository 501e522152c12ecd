/* ************************************************************************ **
** This file is part of smallmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Arithmetic operators.
//!
//! Unlike `dot` and `outer`, the `*` operators never conjugate anything.

use crate::traits::{Element, Scalar, Promote, AddT, MulT, StdT, HermT};
use crate::types::*;

use num_complex::Complex;
use std::cmp::Ordering;
use std::ops::{Add, Sub, Mul, Neg};

/// `f(0) + f(1) + ... + f(n - 1)`, accumulated left to right.
#[inline(always)]
pub(crate) fn sum_by<S: Scalar, F>(n: usize, mut f: F) -> S
where F: FnMut(usize) -> S,
{
    if n == 0 {
        return S::zero();
    }
    let mut acc = f(0);
    for k in 1..n {
        acc = acc + f(k);
    }
    acc
}

// ---------------------------------------------------------------------------
// same-shape add/sub

// NOTE: Unlike the operators on plain arrays of a single type, these are
//       generic over a pair of element types, and the output type comes
//       from `Promote`.
gen_each!{
    @{Vn}
    impl_v_add_sub!({$Vn:ident}) => {
        // vector + vector
        impl<const N: usize, E1, E2> Add<$Vn<N, E2>> for $Vn<N, E1>
        where E1: Promote<E2>, E2: Element,
        {
            type Output = $Vn<N, AddT<E1, E2>>;

            #[inline]
            fn add(self, other: $Vn<N, E2>) -> Self::Output
            { $Vn::from_fn(|k| self[k].add_promote(other[k])) }
        }

        // vector - vector
        impl<const N: usize, E1, E2> Sub<$Vn<N, E2>> for $Vn<N, E1>
        where E1: Promote<E2>, E2: Element,
        {
            type Output = $Vn<N, AddT<E1, E2>>;

            #[inline]
            fn sub(self, other: $Vn<N, E2>) -> Self::Output
            { $Vn::from_fn(|k| self[k].sub_promote(other[k])) }
        }

        // -vector
        impl<const N: usize, E: Element> Neg for $Vn<N, E> {
            type Output = $Vn<N, StdT<E>>;

            #[inline]
            fn neg(self) -> Self::Output
            { self.map(Element::neg_value) }
        }
    }
}

impl<const M: usize, const N: usize, E1, E2> Add<Mat<M, N, E2>> for Mat<M, N, E1>
where E1: Promote<E2>, E2: Element,
{
    type Output = Mat<M, N, AddT<E1, E2>>;

    #[inline]
    fn add(self, other: Mat<M, N, E2>) -> Self::Output
    { Mat::from_fn(|r, c| self[r][c].add_promote(other[r][c])) }
}

impl<const M: usize, const N: usize, E1, E2> Sub<Mat<M, N, E2>> for Mat<M, N, E1>
where E1: Promote<E2>, E2: Element,
{
    type Output = Mat<M, N, AddT<E1, E2>>;

    #[inline]
    fn sub(self, other: Mat<M, N, E2>) -> Self::Output
    { Mat::from_fn(|r, c| self[r][c].sub_promote(other[r][c])) }
}

impl<const M: usize, const N: usize, E: Element> Neg for Mat<M, N, E> {
    type Output = Mat<M, N, StdT<E>>;

    #[inline]
    fn neg(self) -> Self::Output
    { self.map(Element::neg_value) }
}

// Hermitian plus Hermitian is Hermitian, so these can work on storage.
impl<const N: usize, const L: usize, E1, E2> Add<SymMat<N, L, E2>> for SymMat<N, L, E1>
where E1: Promote<E2>, E2: Element,
{
    type Output = SymMat<N, L, AddT<E1, E2>>;

    #[inline]
    fn add(self, other: SymMat<N, L, E2>) -> Self::Output {
        SymMat::new(
            std::array::from_fn(|i| self.diag[i].add_promote(other.diag[i])),
            std::array::from_fn(|i| self.lower[i].add_promote(other.lower[i])),
        )
    }
}

impl<const N: usize, const L: usize, E1, E2> Sub<SymMat<N, L, E2>> for SymMat<N, L, E1>
where E1: Promote<E2>, E2: Element,
{
    type Output = SymMat<N, L, AddT<E1, E2>>;

    #[inline]
    fn sub(self, other: SymMat<N, L, E2>) -> Self::Output {
        SymMat::new(
            std::array::from_fn(|i| self.diag[i].sub_promote(other.diag[i])),
            std::array::from_fn(|i| self.lower[i].sub_promote(other.lower[i])),
        )
    }
}

impl<const N: usize, const L: usize, E: Element> Neg for SymMat<N, L, E> {
    type Output = SymMat<N, L, StdT<E>>;

    #[inline]
    fn neg(self) -> Self::Output
    { SymMat::new(self.diag.map(Element::neg_value), self.lower.map(Element::neg_value)) }
}

// ---------------------------------------------------------------------------
// scaling by a plain number

gen_each!{
    @{Vn}
    // NOTE: the orphan rules prevent us from impl-ing these ops "for S" so
    //       we must generate a separate impl for each plain number type rather
    //       than being generic over S: Scalar
    @{scalar}
    impl_v_scalar_ops!({$Vn:ident} {$S:ty}) => {
        // vector * scalar
        impl<const N: usize, E> Mul<$S> for $Vn<N, E>
        where E: Promote<$S>,
        {
            type Output = $Vn<N, MulT<E, $S>>;

            #[inline]
            fn mul(self, scalar: $S) -> Self::Output
            { self.map(|x| x.mul_promote(scalar)) }
        }

        // scalar * vector
        impl<const N: usize, E: Element> Mul<$Vn<N, E>> for $S
        where $S: Promote<E>,
        {
            type Output = $Vn<N, MulT<$S, E>>;

            #[inline]
            fn mul(self, vector: $Vn<N, E>) -> Self::Output
            { vector.map(|x| <$S as Promote<E>>::mul_promote(self, x)) }
        }
    }
}

gen_each!{
    @{scalar}
    impl_m_scalar_ops!({$S:ty}) => {
        // matrix * scalar
        impl<const M: usize, const N: usize, E> Mul<$S> for Mat<M, N, E>
        where E: Promote<$S>,
        {
            type Output = Mat<M, N, MulT<E, $S>>;

            #[inline]
            fn mul(self, scalar: $S) -> Self::Output
            { self.map(|x| x.mul_promote(scalar)) }
        }

        // scalar * matrix
        impl<const M: usize, const N: usize, E: Element> Mul<Mat<M, N, E>> for $S
        where $S: Promote<E>,
        {
            type Output = Mat<M, N, MulT<$S, E>>;

            #[inline]
            fn mul(self, matrix: Mat<M, N, E>) -> Self::Output
            { matrix.map(|x| <$S as Promote<E>>::mul_promote(self, x)) }
        }
    }
}

// A complex factor would break the Hermitian symmetry.
gen_each!{
    @{real}
    impl_sym_scalar_ops!({$S:ty}) => {
        // symmat * scalar
        impl<const N: usize, const L: usize, E> Mul<$S> for SymMat<N, L, E>
        where E: Promote<$S>,
        {
            type Output = SymMat<N, L, MulT<E, $S>>;

            #[inline]
            fn mul(self, scalar: $S) -> Self::Output {
                SymMat::new(
                    self.diag.map(|x| x.mul_promote(scalar)),
                    self.lower.map(|x| x.mul_promote(scalar)),
                )
            }
        }

        // scalar * symmat
        impl<const N: usize, const L: usize, E: Element> Mul<SymMat<N, L, E>> for $S
        where $S: Promote<E>,
        {
            type Output = SymMat<N, L, MulT<$S, E>>;

            #[inline]
            fn mul(self, matrix: SymMat<N, L, E>) -> Self::Output {
                SymMat::new(
                    matrix.diag.map(|x| <$S as Promote<E>>::mul_promote(self, x)),
                    matrix.lower.map(|x| <$S as Promote<E>>::mul_promote(self, x)),
                )
            }
        }
    }
}

// ---------------------------------------------------------------------------
// conforming products

// row * vector
impl<const N: usize, E1, E2> Mul<Vector<N, E2>> for Row<N, E1>
where E1: Promote<E2>, E2: Element,
{
    type Output = MulT<E1, E2>;

    #[inline]
    fn mul(self, vector: Vector<N, E2>) -> Self::Output
    { sum_by(N, |k| self[k].mul_promote(vector[k])) }
}

// vector * row
impl<const M: usize, const N: usize, E1, E2> Mul<Row<N, E2>> for Vector<M, E1>
where E1: Promote<E2>, E2: Element,
{
    type Output = Mat<M, N, MulT<E1, E2>>;

    #[inline]
    fn mul(self, row: Row<N, E2>) -> Self::Output
    { Mat::from_fn(|r, c| self[r].mul_promote(row[c])) }
}

// matrix * vector
impl<const M: usize, const N: usize, E1, E2> Mul<Vector<N, E2>> for Mat<M, N, E1>
where E1: Promote<E2>, E2: Element,
{
    type Output = Vector<M, MulT<E1, E2>>;

    #[inline]
    fn mul(self, vector: Vector<N, E2>) -> Self::Output
    { Vector::from_fn(|r| sum_by(N, |c| self[r][c].mul_promote(vector[c]))) }
}

// row * matrix
impl<const M: usize, const N: usize, E1, E2> Mul<Mat<M, N, E2>> for Row<M, E1>
where E1: Promote<E2>, E2: Element,
{
    type Output = Row<N, MulT<E1, E2>>;

    #[inline]
    fn mul(self, matrix: Mat<M, N, E2>) -> Self::Output
    { Row::from_fn(|c| sum_by(M, |r| self[r].mul_promote(matrix[r][c]))) }
}

// matrix * matrix
impl<const M: usize, const K: usize, const N: usize, E1, E2> Mul<Mat<K, N, E2>> for Mat<M, K, E1>
where E1: Promote<E2>, E2: Element,
{
    type Output = Mat<M, N, MulT<E1, E2>>;

    #[inline]
    fn mul(self, other: Mat<K, N, E2>) -> Self::Output
    { Mat::from_fn(|r, c| sum_by(K, |k| self[r][k].mul_promote(other[k][c]))) }
}

// symmat * vector
//
// Elements above the diagonal are the Hermitian transposes of stored ones,
// so they have a different element type; the second bound says that
// multiplying by them produces the same plain number type.
impl<const N: usize, const L: usize, E1, E2> Mul<Vector<N, E2>> for SymMat<N, L, E1>
where
    E1: Promote<E2>,
    HermT<E1>: Promote<E2, Mul = MulT<E1, E2>>,
    E2: Element,
{
    type Output = Vector<N, MulT<E1, E2>>;

    #[inline]
    fn mul(self, v: Vector<N, E2>) -> Self::Output {
        let d = |i: usize| <E1 as Promote<E2>>::mul_promote(self.diag[i], v[i]);
        let l = |i: usize, j: usize| <E1 as Promote<E2>>::mul_promote(self.elt_lower(i, j), v[j]);
        let u = |i: usize, j: usize| <HermT<E1> as Promote<E2>>::mul_promote(self.elt_upper(i, j), v[j]);

        match N {
            1 => Vector::from_fn(|_| d(0)),
            2 => {
                let out = [
                    d(0) + u(0, 1),
                    l(1, 0) + d(1),
                ];
                Vector::from_fn(|i| out[i])
            },
            3 => {
                let out = [
                    d(0) + u(0, 1) + u(0, 2),
                    l(1, 0) + d(1) + u(1, 2),
                    l(2, 0) + l(2, 1) + d(2),
                ];
                Vector::from_fn(|i| out[i])
            },
            _ => Vector::from_fn(|i| sum_by(N, |j| match j.cmp(&i) {
                Ordering::Less => l(i, j),
                Ordering::Equal => d(i),
                Ordering::Greater => u(i, j),
            })),
        }
    }
}

// row * symmat
impl<const N: usize, const L: usize, E1, E2> Mul<SymMat<N, L, E2>> for Row<N, E1>
where
    E1: Promote<E2> + Promote<HermT<E2>, Mul = MulT<E1, E2>>,
    E2: Element,
{
    type Output = Row<N, MulT<E1, E2>>;

    #[inline]
    fn mul(self, s: SymMat<N, L, E2>) -> Self::Output {
        // (i, j) is the position in the matrix; the row supplies element i
        let d = |j: usize| <E1 as Promote<E2>>::mul_promote(self[j], s.diag[j]);
        let l = |i: usize, j: usize| <E1 as Promote<E2>>::mul_promote(self[i], s.elt_lower(i, j));
        let u = |i: usize, j: usize| <E1 as Promote<HermT<E2>>>::mul_promote(self[i], s.elt_upper(i, j));

        match N {
            1 => Row::from_fn(|_| d(0)),
            2 => {
                let out = [
                    d(0) + l(1, 0),
                    u(0, 1) + d(1),
                ];
                Row::from_fn(|j| out[j])
            },
            3 => {
                let out = [
                    d(0) + l(1, 0) + l(2, 0),
                    u(0, 1) + d(1) + l(2, 1),
                    u(0, 2) + u(1, 2) + d(2),
                ];
                Row::from_fn(|j| out[j])
            },
            _ => Row::from_fn(|j| sum_by(N, |i| match i.cmp(&j) {
                Ordering::Less => u(i, j),
                Ordering::Equal => d(j),
                Ordering::Greater => l(i, j),
            })),
        }
    }
}

// The products of two matrices where either one is symmetric work on the
// logical values, so they are always dense.

// matrix * symmat
impl<const M: usize, const N: usize, const L: usize, E1, E2> Mul<SymMat<N, L, E2>> for Mat<M, N, E1>
where E1: Promote<StdT<E2>>, E2: Element,
{
    type Output = Mat<M, N, MulT<E1, StdT<E2>>>;

    #[inline]
    fn mul(self, s: SymMat<N, L, E2>) -> Self::Output
    { Mat::from_fn(|r, c| sum_by(N, |k| self[r][k].mul_promote(s.value_at(k, c)))) }
}

// symmat * matrix
impl<const N: usize, const L: usize, const C: usize, E1, E2> Mul<Mat<N, C, E2>> for SymMat<N, L, E1>
where StdT<E1>: Promote<E2>, E1: Element, E2: Element,
{
    type Output = Mat<N, C, MulT<StdT<E1>, E2>>;

    #[inline]
    fn mul(self, m: Mat<N, C, E2>) -> Self::Output
    { Mat::from_fn(|r, c| sum_by(N, |k| self.value_at(r, k).mul_promote(m[k][c]))) }
}

// symmat * symmat
impl<const N: usize, const L1: usize, const L2: usize, E1, E2> Mul<SymMat<N, L2, E2>> for SymMat<N, L1, E1>
where StdT<E1>: Promote<StdT<E2>>, E1: Element, E2: Element,
{
    type Output = Mat<N, N, MulT<StdT<E1>, StdT<E2>>>;

    #[inline]
    fn mul(self, other: SymMat<N, L2, E2>) -> Self::Output
    { Mat::from_fn(|r, c| sum_by(N, |k| self.value_at(r, k).mul_promote(other.value_at(k, c)))) }
}

// ---------------------------------------------------------------------------
