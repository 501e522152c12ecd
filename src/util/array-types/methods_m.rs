/* ************************************************************************ **
** This file is part of smallmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Small fixed-size matrix types.
//!
//! `Mat` is stored as an array of rows, and `SymMat` stores only what it
//! needs of its lower half.

use crate::traits::{Element, Scalar, HermT, StdT};
use crate::types::*;
use crate::views::{Negator, Conjugate};

use num_traits::Zero;

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

impl<const M: usize, const N: usize, E> Mat<M, N, E> {
    /// Construct a matrix from a function on `(row, col)` indices.
    #[inline(always)]
    pub fn from_fn<F>(mut f: F) -> Self
    where F: FnMut(usize, usize) -> E,
    {
        let () = AssertNonEmpty::<M>::OK;
        let () = AssertNonEmpty::<N>::OK;
        Mat(std::array::from_fn(|r| std::array::from_fn(|c| f(r, c))))
    }

    /// Construct a matrix from its rows.
    #[inline(always)]
    pub fn from_rows(rows: [Row<N, E>; M]) -> Self
    { Mat(rows.map(|r| r.0)) }

    /// Construct a matrix from its columns.
    #[inline]
    pub fn from_cols(cols: [Vector<M, E>; N]) -> Self
    where E: Copy,
    { Mat::from_fn(|r, c| cols[c][r]) }

    /// Apply a function to each element.
    #[inline]
    pub fn map<B, F>(self, mut f: F) -> Mat<M, N, B>
    where F: FnMut(E) -> B,
    { Mat(self.0.map(|row| row.map(&mut f))) }
}

impl<const M: usize, const N: usize, E: Copy> Mat<M, N, E> {
    /// Get a row.
    #[inline(always)]
    pub fn row(&self, r: usize) -> Row<N, E>
    { Row(self.0[r]) }

    /// Get a column.
    #[inline]
    pub fn col(&self, c: usize) -> Vector<M, E>
    { Vector::from_fn(|r| self.0[r][c]) }

    /// Positional transpose. (does not conjugate)
    #[inline]
    pub fn t(&self) -> Mat<N, M, E>
    { Mat::from_fn(|r, c| self.0[c][r]) }

    /// The submatrix with row `r` removed.
    ///
    /// `K` must be `M - 1`. (this is checked at compile time)
    #[inline]
    pub fn drop_row<const K: usize>(&self, r: usize) -> Mat<K, N, E> {
        let () = AssertOneLess::<M, K>::OK;
        assert!(r < M, "row {} out of range for {} rows", r, M);
        Mat::from_fn(|i, j| self.0[if i < r { i } else { i + 1 }][j])
    }

    /// The submatrix with column `c` removed.
    ///
    /// `K` must be `N - 1`. (this is checked at compile time)
    #[inline]
    pub fn drop_col<const K: usize>(&self, c: usize) -> Mat<M, K, E> {
        let () = AssertOneLess::<N, K>::OK;
        assert!(c < N, "column {} out of range for {} columns", c, N);
        Mat::from_fn(|i, j| self.0[i][if j < c { j } else { j + 1 }])
    }
}

impl<const M: usize, const N: usize, E: Element> Mat<M, N, E> {
    /// Construct the zero matrix.
    #[inline]
    pub fn zero() -> Self
    { Mat::from_fn(|_, _| E::from_raw(Zero::zero())) }

    /// Hermitian transpose.
    #[inline]
    pub fn h(&self) -> Mat<N, M, HermT<E>>
    { Mat::from_fn(|r, c| self.0[c][r].transpose()) }

    /// Reinterpret the elements as negated, without touching them.
    #[inline(always)]
    pub fn negated(self) -> Mat<M, N, Negator<E>>
    { self.map(Negator) }

    /// Materialize the logical values of the elements.
    #[inline]
    pub fn values(self) -> Mat<M, N, StdT<E>>
    { self.map(Element::value) }
}

impl<const M: usize, const N: usize, C: Scalar> Mat<M, N, C> {
    /// Reinterpret the elements as conjugated, without touching them.
    #[inline(always)]
    pub fn conjugated(self) -> Mat<M, N, Conjugate<C>>
    { self.map(Conjugate) }
}

impl<const N: usize, C: Scalar> Mat<N, N, C> {
    /// Construct the identity matrix.
    #[inline]
    pub fn eye() -> Self
    { Mat::from_fn(|r, c| if r == c { C::one() } else { C::zero() }) }
}

// ---------------------------------------------------------------------------

impl<const N: usize, const L: usize, E: Element> SymMat<N, L, E> {
    /// Construct from the diagonal and the packed strict lower triangle.
    ///
    /// The lower triangle is packed by rows:
    /// `[(1,0), (2,0), (2,1), (3,0), ...]`.
    #[inline]
    pub fn new(diag: [E; N], lower: [E; L]) -> Self {
        let () = AssertPacked::<N, L>::OK;
        SymMat { diag, lower }
    }

    /// Construct from a function on `(row, col)` indices of the lower half,
    /// including the diagonal. It is only called with `row >= col`.
    #[inline]
    pub fn from_lower_fn<F>(mut f: F) -> Self
    where F: FnMut(usize, usize) -> E,
    {
        let diag = std::array::from_fn(|i| f(i, i));
        let mut index = 0;
        let lower = std::array::from_fn(|_| {
            // walk the packed triangle in storage order
            let (i, j) = packed_position(index);
            index += 1;
            f(i, j)
        });
        SymMat::new(diag, lower)
    }

    /// Construct the zero matrix.
    #[inline]
    pub fn zero() -> Self
    { SymMat::from_lower_fn(|_, _| E::from_raw(Zero::zero())) }

    /// The diagonal.
    #[inline(always)]
    pub fn diag(&self) -> &[E; N]
    { &self.diag }

    /// The packed strict lower triangle.
    #[inline(always)]
    pub fn lower(&self) -> &[E; L]
    { &self.lower }

    /// A stored element of the strict lower triangle. Requires `i > j`.
    #[inline(always)]
    pub fn elt_lower(&self, i: usize, j: usize) -> E {
        debug_assert!(j < i && i < N);
        self.lower[packed_index(i, j)]
    }

    /// An element of the strict upper triangle. Requires `i < j`.
    ///
    /// This is the Hermitian transpose of the stored element `(j, i)`.
    #[inline(always)]
    pub fn elt_upper(&self, i: usize, j: usize) -> HermT<E>
    { self.elt_lower(j, i).transpose() }

    /// The logical value of any element.
    #[inline]
    pub fn value_at(&self, i: usize, j: usize) -> StdT<E> {
        assert!(i < N && j < N, "index ({}, {}) out of range for {}x{}", i, j, N, N);
        if i == j {
            self.diag[i].value()
        } else if i > j {
            self.elt_lower(i, j).value()
        } else {
            self.elt_upper(i, j).value()
        }
    }

    /// Expand into a dense matrix of logical values.
    #[inline]
    pub fn to_mat(&self) -> Mat<N, N, StdT<E>>
    { Mat::from_fn(|i, j| self.value_at(i, j)) }

    /// Reinterpret the elements as negated, without touching them.
    #[inline]
    pub fn negated(self) -> SymMat<N, L, Negator<E>>
    { SymMat::new(self.diag.map(Negator), self.lower.map(Negator)) }
}

impl<const N: usize, const L: usize, C: Scalar> SymMat<N, L, C> {
    /// Construct the identity matrix.
    #[inline]
    pub fn eye() -> Self
    { SymMat::new([C::one(); N], [C::zero(); L]) }
}

// -------------------------- END PUBLIC API ---------------------------------

/// Storage index of the lower element `(i, j)`, `i > j`.
#[inline(always)]
pub(crate) fn packed_index(i: usize, j: usize) -> usize
{ i * (i - 1) / 2 + j }

// Inverse of `packed_index`.
fn packed_position(index: usize) -> (usize, usize) {
    let mut i = 1;
    while packed_index(i + 1, 0) <= index {
        i += 1;
    }
    (i, index - packed_index(i, 0))
}

// ---------------------------------------------------------------------------
