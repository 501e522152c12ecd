/* ************************************************************************ **
** This file is part of smallmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Non-conforming ("broadcast") products.
//!
//! When the shapes given to `*` do not conform, the product is taken
//! elementwise.  The result has the shape of the more composite operand
//! (or of the left one, for two vectors), and a vector operand is matched
//! up with whichever dimension of the matrix has its length:
//!
//! * `Vector * Vector` and `Row * Row`: elementwise.
//! * `Vector<R> * Mat<R, C>` and `Mat<R, C> * Vector<R>`: row `r` is scaled
//!   by element `r`.
//! * `Mat<R, C> * Row<C>` and `Row<C> * Mat<R, C>`: column `c` is scaled
//!   by element `c`.
//! * `Vector<N> * SymMat<N>` and `SymMat<N> * Row<N>`: like the above,
//!   producing a dense `Mat`.
//!
//! When no length lines up at all, each element of the less composite
//! operand multiplies the whole of the other one, and the results are
//! nested inside the shape of the more composite operand (the left one,
//! if they are equally composite):
//!
//! * `Vector<M> * Vector<N>` is a `Vector<M, Vector<N>>` for `M != N`, and
//!   likewise for rows.  `Row<N> * Vector<M>` is a `Row<N, Vector<M>>`.
//! * `Vector<K> * Mat<R, C>` for `K != R` is a `Mat<R, C, Vector<K>>`, with
//!   `out[r][c][k] = v[k] * m[r][c]`.  The other vector/matrix orders are
//!   nested the same way whenever the length is not otherwise used.
//! * A vector of the wrong length times a `SymMat<N>` is a
//!   `Mat<N, N, Vector<K>>` (or `Row<K>`).
//! * `Mat<R, C> * SymMat<D>` for `C != D` is a `Mat<R, C, Mat<D, D>>`.
//!
//! Where a conforming product exists for the same pair of types, that is
//! the one you get.  Thus `Mat<R, C> * Vector<R>` and `Row<C> * Mat<R, C>`
//! are only implemented for `R != C`.  The impls that involve concrete
//! lengths exist only for sizes up to 6.

use crate::traits::{Element, Promote, MulT, StdT};
use crate::types::*;

use std::ops::Mul;

// vector ⊙ vector
gen_each!{
    @{Vn}
    impl_v_elementwise!({$Vn:ident}) => {
        impl<const N: usize, E1, E2> Mul<$Vn<N, E2>> for $Vn<N, E1>
        where E1: Promote<E2>, E2: Element,
        {
            type Output = $Vn<N, MulT<E1, E2>>;

            #[inline]
            fn mul(self, other: $Vn<N, E2>) -> Self::Output
            { $Vn::from_fn(|k| self[k].mul_promote(other[k])) }
        }
    }
}

// column vector * matrix; scales rows
impl<const R: usize, const C: usize, E1, E2> Mul<Mat<R, C, E2>> for Vector<R, E1>
where E1: Promote<E2>, E2: Element,
{
    type Output = Mat<R, C, MulT<E1, E2>>;

    #[inline]
    fn mul(self, m: Mat<R, C, E2>) -> Self::Output
    { Mat::from_fn(|r, c| self[r].mul_promote(m[r][c])) }
}

// matrix * row; scales columns
impl<const R: usize, const C: usize, E1, E2> Mul<Row<C, E2>> for Mat<R, C, E1>
where E1: Promote<E2>, E2: Element,
{
    type Output = Mat<R, C, MulT<E1, E2>>;

    #[inline]
    fn mul(self, row: Row<C, E2>) -> Self::Output
    { Mat::from_fn(|r, c| self[r][c].mul_promote(row[c])) }
}

// The other orders collide with conforming products when the matrix is
// square, so they are generated for distinct sizes only.
gen_each!{
    @{m!=n}
    impl_m_broadcast!({$R:tt $C:tt}) => {
        // matrix * column vector; scales rows
        impl<E1, E2> Mul<Vector<$R, E2>> for Mat<$R, $C, E1>
        where E1: Promote<E2>, E2: Element,
        {
            type Output = Mat<$R, $C, MulT<E1, E2>>;

            #[inline]
            fn mul(self, v: Vector<$R, E2>) -> Self::Output
            { Mat::from_fn(|r, c| self[r][c].mul_promote(v[r])) }
        }

        // row * matrix; scales columns
        impl<E1, E2> Mul<Mat<$R, $C, E2>> for Row<$C, E1>
        where E1: Promote<E2>, E2: Element,
        {
            type Output = Mat<$R, $C, MulT<E1, E2>>;

            #[inline]
            fn mul(self, m: Mat<$R, $C, E2>) -> Self::Output
            { Mat::from_fn(|r, c| self[c].mul_promote(m[r][c])) }
        }
    }
}

// column vector * symmat; scales rows
impl<const N: usize, const L: usize, E1, E2> Mul<SymMat<N, L, E2>> for Vector<N, E1>
where E1: Promote<StdT<E2>>, E2: Element,
{
    type Output = Mat<N, N, MulT<E1, StdT<E2>>>;

    #[inline]
    fn mul(self, s: SymMat<N, L, E2>) -> Self::Output
    { Mat::from_fn(|r, c| self[r].mul_promote(s.value_at(r, c))) }
}

// symmat * row; scales columns
impl<const N: usize, const L: usize, E1, E2> Mul<Row<N, E2>> for SymMat<N, L, E1>
where StdT<E1>: Promote<E2>, E1: Element, E2: Element,
{
    type Output = Mat<N, N, MulT<StdT<E1>, E2>>;

    #[inline]
    fn mul(self, row: Row<N, E2>) -> Self::Output
    { Mat::from_fn(|r, c| self.value_at(r, c).mul_promote(row[c])) }
}

// ---------------------------------------------------------------------------
// mismatched lengths

// vector ⊗ vector of another length
gen_each!{
    @{Vn}
    @{m!=n}
    impl_v_nested!({$Vn:ident} {$M:tt $N:tt}) => {
        impl<E1, E2> Mul<$Vn<$N, E2>> for $Vn<$M, E1>
        where E1: Promote<E2>, E2: Element,
        {
            type Output = $Vn<$M, $Vn<$N, MulT<E1, E2>>>;

            #[inline]
            fn mul(self, other: $Vn<$N, E2>) -> Self::Output
            { $Vn::from_fn(|i| $Vn::from_fn(|j| self[i].mul_promote(other[j]))) }
        }
    }
}

gen_each!{
    @{m!=n}
    impl_mismatch!({$M:tt $N:tt}) => {
        // row * column vector of another length
        impl<E1, E2> Mul<Vector<$M, E2>> for Row<$N, E1>
        where E1: Promote<E2>, E2: Element,
        {
            type Output = Row<$N, Vector<$M, MulT<E1, E2>>>;

            #[inline]
            fn mul(self, v: Vector<$M, E2>) -> Self::Output
            { Row::from_fn(|i| Vector::from_fn(|j| self[i].mul_promote(v[j]))) }
        }

        // column vector * matrix with a different number of rows
        impl<const C: usize, E1, E2> Mul<Mat<$N, C, E2>> for Vector<$M, E1>
        where E1: Promote<E2>, E2: Element,
        {
            type Output = Mat<$N, C, Vector<$M, MulT<E1, E2>>>;

            #[inline]
            fn mul(self, m: Mat<$N, C, E2>) -> Self::Output
            { Mat::from_fn(|r, c| Vector::from_fn(|k| self[k].mul_promote(m[r][c]))) }
        }

        // matrix * row with a different number of columns
        impl<const R: usize, E1, E2> Mul<Row<$N, E2>> for Mat<R, $M, E1>
        where E1: Promote<E2>, E2: Element,
        {
            type Output = Mat<R, $M, Row<$N, MulT<E1, E2>>>;

            #[inline]
            fn mul(self, row: Row<$N, E2>) -> Self::Output
            { Mat::from_fn(|r, c| Row::from_fn(|k| self[r][c].mul_promote(row[k]))) }
        }

        // column vector * symmat of another size
        impl<const L: usize, E1, E2> Mul<SymMat<$N, L, E2>> for Vector<$M, E1>
        where E1: Promote<StdT<E2>>, E2: Element,
        {
            type Output = Mat<$N, $N, Vector<$M, MulT<E1, StdT<E2>>>>;

            #[inline]
            fn mul(self, s: SymMat<$N, L, E2>) -> Self::Output
            { Mat::from_fn(|r, c| Vector::from_fn(|k| self[k].mul_promote(s.value_at(r, c)))) }
        }

        // row * symmat of another size
        impl<const L: usize, E1, E2> Mul<SymMat<$N, L, E2>> for Row<$M, E1>
        where E1: Promote<StdT<E2>>, E2: Element,
        {
            type Output = Mat<$N, $N, Row<$M, MulT<E1, StdT<E2>>>>;

            #[inline]
            fn mul(self, s: SymMat<$N, L, E2>) -> Self::Output
            { Mat::from_fn(|r, c| Row::from_fn(|k| self[k].mul_promote(s.value_at(r, c)))) }
        }

        // symmat * column vector of another size
        impl<const L: usize, E1, E2> Mul<Vector<$M, E2>> for SymMat<$N, L, E1>
        where StdT<E1>: Promote<E2>, E1: Element, E2: Element,
        {
            type Output = Mat<$N, $N, Vector<$M, MulT<StdT<E1>, E2>>>;

            #[inline]
            fn mul(self, v: Vector<$M, E2>) -> Self::Output
            { Mat::from_fn(|r, c| Vector::from_fn(|k| self.value_at(r, c).mul_promote(v[k]))) }
        }

        // symmat * row of another size
        impl<const L: usize, E1, E2> Mul<Row<$M, E2>> for SymMat<$N, L, E1>
        where StdT<E1>: Promote<E2>, E1: Element, E2: Element,
        {
            type Output = Mat<$N, $N, Row<$M, MulT<StdT<E1>, E2>>>;

            #[inline]
            fn mul(self, row: Row<$M, E2>) -> Self::Output
            { Mat::from_fn(|r, c| Row::from_fn(|k| self.value_at(r, c).mul_promote(row[k]))) }
        }

        // matrix * symmat that does not conform
        impl<const R: usize, const L: usize, E1, E2> Mul<SymMat<$N, L, E2>> for Mat<R, $M, E1>
        where E1: Promote<StdT<E2>>, E2: Element,
        {
            type Output = Mat<R, $M, Mat<$N, $N, MulT<E1, StdT<E2>>>>;

            #[inline]
            fn mul(self, s: SymMat<$N, L, E2>) -> Self::Output {
                Mat::from_fn(|r, c| {
                    let e = self[r][c];
                    Mat::from_fn(|i, j| e.mul_promote(s.value_at(i, j)))
                })
            }
        }
    }
}

// The remaining vector/matrix orders need a length that matches neither
// dimension of the matrix.
gen_each!{
    @{r c !k}
    impl_m_nested!({$R:tt $C:tt [$($K:tt)*]}) => {
        $(
            // matrix * column vector
            impl<E1, E2> Mul<Vector<$K, E2>> for Mat<$R, $C, E1>
            where E1: Promote<E2>, E2: Element,
            {
                type Output = Mat<$R, $C, Vector<$K, MulT<E1, E2>>>;

                #[inline]
                fn mul(self, v: Vector<$K, E2>) -> Self::Output
                { Mat::from_fn(|r, c| Vector::from_fn(|k| self[r][c].mul_promote(v[k]))) }
            }

            // row * matrix
            impl<E1, E2> Mul<Mat<$R, $C, E2>> for Row<$K, E1>
            where E1: Promote<E2>, E2: Element,
            {
                type Output = Mat<$R, $C, Row<$K, MulT<E1, E2>>>;

                #[inline]
                fn mul(self, m: Mat<$R, $C, E2>) -> Self::Output
                { Mat::from_fn(|r, c| Row::from_fn(|k| self[k].mul_promote(m[r][c]))) }
            }
        )*
    }
}
