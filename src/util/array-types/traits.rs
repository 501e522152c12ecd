/* ************************************************************************ **
** This file is part of smallmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

// Traits exposed in public interfaces,
// implemented on finite sets of types rather than more general
//  generic bounds in order to reduce coupling with client crates.

use num_complex::Complex;
use num_traits::{Zero, One};
use smallmat_linalg::Lapack;

use std::fmt::Debug;
use std::ops::{Add, Sub, Mul, Div, Neg};

/// Anything that can be stored in one of the containers.
///
/// An element has a *logical value*, which is always a plain number
/// (`StdNumber`).  For plain numbers this is the value itself; for the
/// views [`Negator`] and [`Conjugate`] it is computed from the stored number
/// on demand.
///
/// [`Negator`]: crate::Negator
/// [`Conjugate`]: crate::Conjugate
pub trait Element: Copy + Debug + Send + Sync + 'static {
    /// The plain number type behind this element, with any views stripped.
    type StdNumber: Scalar;

    /// Type of the Hermitian transpose.
    type THerm: Element<StdNumber = Self::StdNumber>;

    /// Hermitian transpose; the complex conjugate for a scalar.
    ///
    /// This never costs a flop. Complex numbers are wrapped in a
    /// [`Conjugate`](crate::Conjugate) rather than having their imaginary
    /// part negated.
    fn transpose(self) -> Self::THerm;

    /// The logical value.
    fn value(self) -> Self::StdNumber;

    /// The negated logical value.
    ///
    /// Views that already hold a negation produce this without a flop.
    #[inline(always)]
    fn neg_value(self) -> Self::StdNumber { -self.value() }

    /// The square (not the squared magnitude) of the logical value.
    #[inline(always)]
    fn square_value(self) -> Self::StdNumber {
        let x = self.value();
        x * x
    }

    /// The stored number, ignoring any negation or conjugation.
    fn raw(self) -> Self::StdNumber;

    /// Wrap a stored number in the same views as `Self`.
    ///
    /// `E::from_raw(x).raw() == x` for every element type.
    fn from_raw(raw: Self::StdNumber) -> Self;
}

/// Hermitian transpose type of an element.
pub type HermT<E> = <E as Element>::THerm;
/// Plain number type of an element.
pub type StdT<E> = <E as Element>::StdNumber;

pub use self::scalar::Scalar;
mod scalar {
    use super::*;

    /// A plain number: `f32`, `f64`, `Complex<f32>` or `Complex<f64>`.
    ///
    /// This is the type of every computed result; views only ever appear
    /// as the element types of inputs.
    ///
    /// This trait is sealed to avoid accidental commitments.
    pub trait Scalar
        : Element<StdNumber = Self>
        + Lapack
        + PartialEq + Zero + One
        + Add<Output=Self> + Sub<Output=Self> + Mul<Output=Self>
        + Div<Output=Self> + Neg<Output=Self>
        + Sealed
    {
        /// Complex conjugate. Identity for reals.
        fn conj(self) -> Self;

        /// False if any part is infinite or NaN.
        fn is_finite(self) -> bool;
    }

    pub(crate) use self::private::Sealed;
    pub(crate) mod private {
        pub trait Sealed { }
    }
}

gen_each!{
    @{real}
    for_each!({$T:ty}) => {
        impl scalar::Sealed for $T { }

        impl Element for $T {
            type StdNumber = $T;
            type THerm = $T;

            #[inline(always)] fn transpose(self) -> $T { self }
            #[inline(always)] fn value(self) -> $T { self }
            #[inline(always)] fn raw(self) -> $T { self }
            #[inline(always)] fn from_raw(raw: $T) -> $T { raw }
        }

        impl Scalar for $T {
            #[inline(always)] fn conj(self) -> $T { self }
            #[inline(always)] fn is_finite(self) -> bool { <$T>::is_finite(self) }
        }

        impl scalar::Sealed for Complex<$T> { }

        impl Element for Complex<$T> {
            type StdNumber = Complex<$T>;
            type THerm = crate::Conjugate<Complex<$T>>;

            #[inline(always)] fn transpose(self) -> Self::THerm { crate::Conjugate(self) }
            #[inline(always)] fn value(self) -> Self { self }
            #[inline(always)] fn raw(self) -> Self { self }
            #[inline(always)] fn from_raw(raw: Self) -> Self { raw }
        }

        impl Scalar for Complex<$T> {
            #[inline(always)] fn conj(self) -> Self { Complex::conj(&self) }
            #[inline(always)] fn is_finite(self) -> bool { Complex::is_finite(self) }
        }
    };
}

// ---------------------------------------------------------------------------

/// Element type promotion for mixed arithmetic.
///
/// `Add` and `Mul` are the plain number types produced by adding or
/// multiplying `Self` with `Rhs`.  The mapping is symmetric:
/// `MulT<A, B>` and `MulT<B, A>` are always the same type.
///
/// Views are materialized before the arithmetic, so the results are always
/// [`Scalar`]s.
pub trait Promote<Rhs: Element>: Element {
    type Add: Scalar;
    type Mul: Scalar;

    fn add_promote(self, rhs: Rhs) -> Self::Add;
    fn sub_promote(self, rhs: Rhs) -> Self::Add;
    fn mul_promote(self, rhs: Rhs) -> Self::Mul;
}

/// Type of `a + b` for elements `a: A` and `b: B`.
pub type AddT<A, B> = <A as Promote<B>>::Add;
/// Type of `a * b` for elements `a: A` and `b: B`.
pub type MulT<A, B> = <A as Promote<B>>::Mul;
/// Type of `dot(a, b)` for vectors with elements `A` and `B`.
pub type DotT<A, B> = MulT<HermT<A>, B>;

// Lossless conversion of a plain number into a wider plain number.
trait Widen<T> {
    fn widen(self) -> T;
}

impl<T: Scalar> Widen<T> for T {
    #[inline(always)] fn widen(self) -> T { self }
}

impl Widen<f64> for f32 {
    #[inline(always)] fn widen(self) -> f64 { f64::from(self) }
}

impl Widen<Complex<f32>> for f32 {
    #[inline(always)] fn widen(self) -> Complex<f32> { Complex::new(self, 0.0) }
}

impl Widen<Complex<f64>> for f32 {
    #[inline(always)] fn widen(self) -> Complex<f64> { Complex::new(f64::from(self), 0.0) }
}

impl Widen<Complex<f64>> for f64 {
    #[inline(always)] fn widen(self) -> Complex<f64> { Complex::new(self, 0.0) }
}

impl Widen<Complex<f64>> for Complex<f32> {
    #[inline(always)]
    fn widen(self) -> Complex<f64> { Complex::new(f64::from(self.re), f64::from(self.im)) }
}

macro_rules! promote_plain {
    ($($A:ty, $B:ty => $C:ty;)+) => {$(
        impl Promote<$B> for $A {
            type Add = $C;
            type Mul = $C;

            #[inline(always)]
            fn add_promote(self, rhs: $B) -> $C
            { Widen::<$C>::widen(self) + Widen::<$C>::widen(rhs) }

            #[inline(always)]
            fn sub_promote(self, rhs: $B) -> $C
            { Widen::<$C>::widen(self) - Widen::<$C>::widen(rhs) }

            #[inline(always)]
            fn mul_promote(self, rhs: $B) -> $C
            { Widen::<$C>::widen(self) * Widen::<$C>::widen(rhs) }
        }
    )+};
}

promote_plain!{
    f32, f32 => f32;
    f32, f64 => f64;
    f32, Complex<f32> => Complex<f32>;
    f32, Complex<f64> => Complex<f64>;

    f64, f32 => f64;
    f64, f64 => f64;
    f64, Complex<f32> => Complex<f64>;
    f64, Complex<f64> => Complex<f64>;

    Complex<f32>, f32 => Complex<f32>;
    Complex<f32>, f64 => Complex<f64>;
    Complex<f32>, Complex<f32> => Complex<f32>;
    Complex<f32>, Complex<f64> => Complex<f64>;

    Complex<f64>, f32 => Complex<f64>;
    Complex<f64>, f64 => Complex<f64>;
    Complex<f64>, Complex<f32> => Complex<f64>;
    Complex<f64>, Complex<f64> => Complex<f64>;
}
