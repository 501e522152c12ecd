/* ************************************************************************ **
** This file is part of smallmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::ops::{Deref, DerefMut};
use std::fmt;

// ---------------------------------------------------------------------------

/// A column vector of fixed length.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Vector<const N: usize, E = f64>(pub [E; N]);

/// A row vector (covector) of fixed length.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Row<const N: usize, E = f64>(pub [E; N]);

/// A dense `M x N` matrix, stored as an array of rows.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Mat<const M: usize, const N: usize, E = f64>(pub [[E; N]; M]);

/// A Hermitian `N x N` matrix.
///
/// Only the diagonal and the strictly lower triangle are stored.
/// `L` must be `N * (N - 1) / 2`; the aliases [`SymMat1`] through
/// [`SymMat6`] fill it in.
///
/// The lower triangle is packed by rows, so that the lower element `(i, j)`
/// (with `i > j`) lives at index `i * (i - 1) / 2 + j`.  An upper element
/// `(i, j)` is never stored; it is the Hermitian transpose of the lower
/// element `(j, i)`.
///
/// The diagonal is stored in full, as the element type; for complex
/// elements it should be real for the matrix to really be Hermitian,
/// but this is not enforced.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct SymMat<const N: usize, const L: usize, E = f64> {
    pub(crate) diag: [E; N],
    pub(crate) lower: [E; L],
}

pub type SymMat1<E = f64> = SymMat<1, 0, E>;
pub type SymMat2<E = f64> = SymMat<2, 1, E>;
pub type SymMat3<E = f64> = SymMat<3, 3, E>;
pub type SymMat4<E = f64> = SymMat<4, 6, E>;
pub type SymMat5<E = f64> = SymMat<5, 10, E>;
pub type SymMat6<E = f64> = SymMat<6, 15, E>;

// ---------------------------------------------------------------------------
// Compile-time shape checks.
//
// These are associated consts so that they are evaluated (and can fail)
// once per monomorphized size.  Use them as `let () = AssertNonEmpty::<N>::OK;`.

pub(crate) struct AssertNonEmpty<const N: usize>;

impl<const N: usize> AssertNonEmpty<N> {
    pub(crate) const OK: () = assert!(N > 0, "containers must have at least one element");
}

pub(crate) struct AssertPacked<const N: usize, const L: usize>;

impl<const N: usize, const L: usize> AssertPacked<N, L> {
    pub(crate) const OK: () = assert!(
        N > 0 && L == N * (N - 1) / 2,
        "SymMat<N, L> requires L == N * (N - 1) / 2",
    );
}

pub(crate) struct AssertOneLess<const N: usize, const K: usize>;

impl<const N: usize, const K: usize> AssertOneLess<N, K> {
    pub(crate) const OK: () = assert!(K > 0 && K + 1 == N, "dimension must shrink by exactly one");
}

// ---------------------------------------------------------------------------
// All types behave generally like their backing array type.

gen_each!{
    [
        {Vector [const N: usize] [N] E [E; N]}
        {Row [const N: usize] [N] E [E; N]}
        {Mat [const M: usize, const N: usize] [M, N] E [[E; N]; M]}
    ]
    for_each!(
        {$Cn:ident [$($params:tt)*] [$($args:tt)*] $T:ident $Array:ty}
    ) => {
        impl<$($params)*, $T> Deref for $Cn<$($args)*, $T> {
            type Target = $Array;

            #[inline(always)]
            fn deref(&self) -> &Self::Target
            { &self.0 }
        }

        impl<$($params)*, $T> DerefMut for $Cn<$($args)*, $T> {
            #[inline(always)]
            fn deref_mut(&mut self) -> &mut Self::Target
            { &mut self.0 }
        }

        // Fix a paper cut not solved by Deref, which is that many methods
        // take `I: IntoIterator`.
        impl<'a, $($params)*, $T> IntoIterator for &'a $Cn<$($args)*, $T> {
            type Item = <&'a $Array as IntoIterator>::Item;
            type IntoIter = <&'a $Array as IntoIterator>::IntoIter;

            #[inline(always)]
            fn into_iter(self) -> Self::IntoIter
            { self.0.iter() }
        }

        impl<'a, $($params)*, $T> IntoIterator for &'a mut $Cn<$($args)*, $T> {
            type Item = <&'a mut $Array as IntoIterator>::Item;
            type IntoIter = <&'a mut $Array as IntoIterator>::IntoIter;

            #[inline(always)]
            fn into_iter(self) -> Self::IntoIter
            { self.0.iter_mut() }
        }

        // forward the debug impl without a surrounding "Vector(...)", which
        // makes the debug output valid JSON and Python for many types.
        impl<$($params)*, $T: fmt::Debug> fmt::Debug for $Cn<$($args)*, $T> {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
            { fmt::Debug::fmt(&self.0, f) }
        }
    }
}

impl<const N: usize, const L: usize, E: fmt::Debug> fmt::Debug for SymMat<N, L, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymMat")
            .field("diag", &self.diag)
            .field("lower", &self.lower)
            .finish()
    }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_is_the_array() {
        assert_eq!(format!("{:?}", Vector([1.0, 2.0])), "[1.0, 2.0]");
        assert_eq!(format!("{:?}", Row([1, 2])), "[1, 2]");
        assert_eq!(format!("{:?}", Mat([[1, 2], [3, 4]])), "[[1, 2], [3, 4]]");
    }

    #[test]
    fn deref_and_iterate() {
        let mut v = Vector([1, 2, 3]);
        v[1] = 5;
        assert_eq!(v.iter().sum::<i32>(), 9);
        for x in &mut v {
            *x *= 2;
        }
        assert_eq!(v.0, [2, 10, 6]);

        let m = Mat([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(m[1][2], 6);
        assert_eq!((&m).into_iter().count(), 2);
    }
}
