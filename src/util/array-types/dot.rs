/* ************************************************************************ **
** This file is part of smallmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::ops::sum_by;
use crate::traits::{Element, Promote, MulT, DotT, HermT};
use crate::types::*;

/// Vectors of either orientation, viewed as columns.
///
/// Rows are converted by positional transpose; nothing is conjugated.
pub trait AsColumn<const N: usize>: Copy {
    type Elem: Element;

    fn as_column(self) -> Vector<N, Self::Elem>;
}

impl<const N: usize, E: Element> AsColumn<N> for Vector<N, E> {
    type Elem = E;

    #[inline(always)]
    fn as_column(self) -> Vector<N, E> { self }
}

impl<const N: usize, E: Element> AsColumn<N> for Row<N, E> {
    type Elem = E;

    #[inline(always)]
    fn as_column(self) -> Vector<N, E> { self.t() }
}

/// Inner product, conjugating the first argument.
///
/// This is `sum(a[i].transpose() * b[i])`, summed in index order, for any
/// orientation of either argument.  `Row * Vector` is the same sum without
/// the conjugation.
#[inline]
pub fn dot<const N: usize, A, B>(a: A, b: B) -> DotT<A::Elem, B::Elem>
where
    A: AsColumn<N>,
    B: AsColumn<N>,
    HermT<A::Elem>: Promote<B::Elem>,
{
    let (a, b) = (a.as_column(), b.as_column());
    sum_by(N, |k| a[k].transpose().mul_promote(b[k]))
}

/// Outer product, conjugating the second argument.
///
/// Row `i` of the output is `a[i] * b.h()`.  `Vector * Row` is the same
/// product without the conjugation.
#[inline]
pub fn outer<const M: usize, const N: usize, A, B>(a: A, b: B) -> Mat<M, N, MulT<A::Elem, HermT<B::Elem>>>
where
    A: AsColumn<M>,
    B: AsColumn<N>,
    A::Elem: Promote<HermT<B::Elem>>,
{
    let (a, b) = (a.as_column(), b.as_column());
    Mat::from_fn(|i, j| a[i].mul_promote(b[j].transpose()))
}
