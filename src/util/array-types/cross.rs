/* ************************************************************************ **
** This file is part of smallmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Cross products, and the matrices that represent them.
//!
//! Nothing here conjugates.  Rows and columns may be mixed freely; a 3D
//! cross product is a `Row` if either argument is one.

use crate::dot::AsColumn;
use crate::traits::{Element, Promote, MulT, StdT};
use crate::types::*;

use num_traits::Zero;
use std::ops::Rem;

/// Types that have a cross product with `Rhs`.
pub trait Cross<Rhs> {
    type Output;

    fn cross(self, rhs: Rhs) -> Self::Output;
}

/// Cross product.
///
/// For 3-vectors this is `(a1 b2 - a2 b1, a2 b0 - a0 b2, a0 b1 - a1 b0)`.
/// For 2-vectors it is the scalar `a0 b1 - a1 b0`.
///
/// `a % b` is the same thing.
#[inline(always)]
pub fn cross<A, B>(a: A, b: B) -> A::Output
where A: Cross<B>,
{ a.cross(b) }

gen_each!{
    [
        {Vector Vector Vector}
        {Vector Row Row}
        {Row Vector Row}
        {Row Row Row}
    ]
    impl_cross!({$A:ident $B:ident $Out:ident}) => {
        impl<E1, E2> Cross<$B<3, E2>> for $A<3, E1>
        where E1: Promote<E2>, E2: Element,
        {
            type Output = $Out<3, MulT<E1, E2>>;

            #[inline]
            fn cross(self, b: $B<3, E2>) -> Self::Output {
                let a = self;
                $Out([
                    a[1].mul_promote(b[2]) - a[2].mul_promote(b[1]),
                    a[2].mul_promote(b[0]) - a[0].mul_promote(b[2]),
                    a[0].mul_promote(b[1]) - a[1].mul_promote(b[0]),
                ])
            }
        }

        impl<E1, E2> Cross<$B<2, E2>> for $A<2, E1>
        where E1: Promote<E2>, E2: Element,
        {
            type Output = MulT<E1, E2>;

            #[inline]
            fn cross(self, b: $B<2, E2>) -> Self::Output
            { self[0].mul_promote(b[1]) - self[1].mul_promote(b[0]) }
        }

        impl<E1, E2> Rem<$B<3, E2>> for $A<3, E1>
        where E1: Promote<E2>, E2: Element,
        {
            type Output = $Out<3, MulT<E1, E2>>;

            #[inline(always)]
            fn rem(self, b: $B<3, E2>) -> Self::Output
            { self.cross(b) }
        }

        impl<E1, E2> Rem<$B<2, E2>> for $A<2, E1>
        where E1: Promote<E2>, E2: Element,
        {
            type Output = MulT<E1, E2>;

            #[inline(always)]
            fn rem(self, b: $B<2, E2>) -> Self::Output
            { self.cross(b) }
        }
    }
}

// ---------------------------------------------------------------------------

/// Vectors that have a cross product matrix.
pub trait CrossMat {
    type Output;

    fn cross_mat(self) -> Self::Output;
}

/// The matrix form of the cross product.
///
/// For a 3-vector this is the skew matrix `M` with `M * w == v % w`:
///
/// ```text
///   [  0  -z   y ]
///   [  z   0  -x ]
///   [ -y   x   0 ]
/// ```
///
/// For a 2-vector it is the row `(-v1, v0)`, so that `M * w == v % w`
/// holds there too.
///
/// A negated view gets its negations folded in; no element is negated twice.
#[inline(always)]
pub fn cross_mat<V: CrossMat>(v: V) -> V::Output
{ v.cross_mat() }

gen_each!{
    @{Vn}
    impl_cross_mat!({$Vn:ident}) => {
        impl<E: Element> CrossMat for $Vn<3, E> {
            type Output = Mat<3, 3, StdT<E>>;

            #[inline]
            fn cross_mat(self) -> Self::Output {
                let zero = <StdT<E> as Zero>::zero();
                let [x, y, z] = self.0;
                Mat([
                    [zero, z.neg_value(), y.value()],
                    [z.value(), zero, x.neg_value()],
                    [y.neg_value(), x.value(), zero],
                ])
            }
        }

        impl<E: Element> CrossMat for $Vn<2, E> {
            type Output = Row<2, StdT<E>>;

            #[inline]
            fn cross_mat(self) -> Self::Output
            { Row([self[1].neg_value(), self[0].value()]) }
        }
    }
}

/// The square of the cross product matrix, negated.
///
/// This is the symmetric matrix `S` with `S * w == -(v % (v % w))`, which
/// turns up in the parallel axis theorem for inertia.
///
/// The diagonal is `(y² + z², x² + z², x² + y²)` and the lower triangle is
/// `(-xy, -xz, -yz)`.  Squares are not magnitudes, so for complex input the
/// result is only the right matrix when `v` is real.
#[inline]
pub fn cross_mat_sq<V>(v: V) -> SymMat3<StdT<V::Elem>>
where V: AsColumn<3>,
{
    let [x, y, z] = v.as_column().0;
    let (xx, yy, zz) = (x.square_value(), y.square_value(), z.square_value());
    let (nx, ny) = (x.neg_value(), y.neg_value());
    let (y, z) = (y.value(), z.value());
    SymMat::new(
        [yy + zz, xx + zz, xx + yy],
        [nx * y, nx * z, ny * z],
    )
}
