/* ************************************************************************ **
** This file is part of smallmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::traits::{Element, Scalar, HermT, StdT};
use crate::types::*;
use crate::views::{Negator, Conjugate};

use num_traits::Zero;

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

gen_each!{
    @{Vn_Tn}
    for_each!(
        {$Vn:ident $Tn:ident}
    ) => {
        impl<const N: usize, E> $Vn<N, E> {
            /// Construct a fixed-size vector from a function on indices.
            #[inline(always)]
            pub fn from_fn<F>(f: F) -> Self
            where F: FnMut(usize) -> E,
            {
                let () = AssertNonEmpty::<N>::OK;
                $Vn(std::array::from_fn(f))
            }

            /// Apply a function to each element.
            #[inline]
            pub fn map<B, F>(self, f: F) -> $Vn<N, B>
            where F: FnMut(E) -> B,
            { $Vn(self.0.map(f)) }

            /// Positional transpose.
            ///
            /// This only changes the orientation; elements are not conjugated.
            #[inline(always)]
            pub fn t(self) -> $Tn<N, E>
            { $Tn(self.0) }
        }

        impl<const N: usize, E: Element> $Vn<N, E> {
            /// Get a zero vector.
            #[inline]
            pub fn zero() -> Self
            { Self::from_fn(|_| E::from_raw(Zero::zero())) }

            /// Hermitian transpose.
            ///
            /// Changes the orientation and transposes each element.  For complex
            /// elements, this wraps them in a `Conjugate` and costs nothing.
            #[inline]
            pub fn h(self) -> $Tn<N, HermT<E>>
            { $Tn(self.0.map(Element::transpose)) }

            /// Reinterpret the elements as negated, without touching them.
            #[inline(always)]
            pub fn negated(self) -> $Vn<N, Negator<E>>
            { self.map(Negator) }

            /// Materialize the logical values of the elements.
            #[inline]
            pub fn values(self) -> $Vn<N, StdT<E>>
            { self.map(Element::value) }
        }

        impl<const N: usize, C: Scalar> $Vn<N, C> {
            /// Reinterpret the elements as conjugated, without touching them.
            #[inline(always)]
            pub fn conjugated(self) -> $Vn<N, Conjugate<C>>
            { self.map(Conjugate) }

            /// Get a basis vector.
            #[inline]
            pub fn axis_unit(i: usize) -> Self {
                assert!(i < N, "Invalid axis for {}d vector: {}", N, i);
                Self::from_fn(|k| if k == i { C::one() } else { C::zero() })
            }
        }
    }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;

    #[test]
    fn orientation() {
        let v = Vector([1.0, 2.0, 3.0]);
        let r: Row<3> = v.t();
        assert_eq!(r.0, v.0);
        assert_eq!(r.t(), v);
    }

    #[test]
    fn hermitian_transpose() {
        let v = Vector([Complex::new(1.0f64, 2.0), Complex::new(3.0, -4.0)]);
        let h = v.h();
        assert_eq!(h.values().0, [Complex::new(1.0, -2.0), Complex::new(3.0, 4.0)]);
        // twice is the identity, and no flops were spent
        assert_eq!(h.h(), v);

        let real = Row([1.0f64, 2.0]);
        assert_eq!(real.h(), Vector([1.0, 2.0]));
    }

    #[test]
    fn views() {
        let v = Vector([1.0f64, -2.0]);
        assert_eq!(v.negated().values(), Vector([-1.0, 2.0]));
        assert_eq!(v.negated().0[0].raw(), 1.0);

        let z = Row([Complex::new(0.0f64, 1.0)]);
        assert_eq!(z.conjugated().values(), Row([Complex::new(0.0, -1.0)]));
    }

    #[test]
    fn constructors() {
        assert_eq!(Vector::<3>::zero(), Vector([0.0; 3]));
        assert_eq!(Row::<3, f32>::axis_unit(1), Row([0.0, 1.0, 0.0]));
        assert_eq!(Vector::<4, usize>::from_fn(|i| i * i), Vector([0, 1, 4, 9]));
        assert_eq!(Vector([1i32, 2]).map(|x| x as f64 / 2.0), Vector([0.5, 1.0]));
    }

    #[test]
    #[should_panic(expected = "Invalid axis")]
    fn bad_axis() {
        let _ = Vector::<2>::axis_unit(2);
    }
}
