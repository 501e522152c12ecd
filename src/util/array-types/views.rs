/* ************************************************************************ **
** This file is part of smallmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Zero-cost element views.
//!
//! A view stores a number and reinterprets it.  Negating or conjugating a
//! whole container is then just a change of type, and the flop is paid
//! (or folded away) only when a value is actually used.

use crate::traits::{Element, Scalar, Promote, AddT, MulT};

use num_complex::Complex;

/// An element whose logical value is the negation of the stored one.
#[derive(Copy, Clone, PartialEq, Debug)]
#[repr(transparent)]
pub struct Negator<E>(pub E);

/// A plain number whose logical value is the complex conjugate of the
/// stored one.
#[derive(Copy, Clone, PartialEq, Debug)]
#[repr(transparent)]
pub struct Conjugate<C>(pub C);

impl<E: Element> Element for Negator<E> {
    type StdNumber = E::StdNumber;
    type THerm = Negator<E::THerm>;

    #[inline(always)]
    fn transpose(self) -> Self::THerm { Negator(self.0.transpose()) }

    #[inline(always)]
    fn value(self) -> E::StdNumber { self.0.neg_value() }

    // the double negation cancels
    #[inline(always)]
    fn neg_value(self) -> E::StdNumber { self.0.value() }

    #[inline(always)]
    fn square_value(self) -> E::StdNumber { self.0.square_value() }

    #[inline(always)]
    fn raw(self) -> E::StdNumber { self.0.raw() }

    #[inline(always)]
    fn from_raw(raw: E::StdNumber) -> Self { Negator(E::from_raw(raw)) }
}

impl<C: Scalar> Element for Conjugate<C> {
    type StdNumber = C;
    type THerm = C;

    #[inline(always)]
    fn transpose(self) -> C { self.0 }

    #[inline(always)]
    fn value(self) -> C { self.0.conj() }

    #[inline(always)]
    fn raw(self) -> C { self.0 }

    #[inline(always)]
    fn from_raw(raw: C) -> Self { Conjugate(raw) }
}

// ---------------------------------------------------------------------------
// Promotion. A view always materializes and promotes as its plain number.

impl<E: Element, R: Element> Promote<R> for Negator<E>
where E::StdNumber: Promote<R>,
{
    type Add = AddT<E::StdNumber, R>;
    type Mul = MulT<E::StdNumber, R>;

    #[inline(always)]
    fn add_promote(self, rhs: R) -> Self::Add
    { <E::StdNumber as Promote<R>>::add_promote(self.value(), rhs) }

    #[inline(always)]
    fn sub_promote(self, rhs: R) -> Self::Add
    { <E::StdNumber as Promote<R>>::sub_promote(self.value(), rhs) }

    #[inline(always)]
    fn mul_promote(self, rhs: R) -> Self::Mul
    { <E::StdNumber as Promote<R>>::mul_promote(self.value(), rhs) }
}

impl<C: Scalar, R: Element> Promote<R> for Conjugate<C>
where C: Promote<R>,
{
    type Add = AddT<C, R>;
    type Mul = MulT<C, R>;

    #[inline(always)]
    fn add_promote(self, rhs: R) -> Self::Add
    { <C as Promote<R>>::add_promote(self.value(), rhs) }

    #[inline(always)]
    fn sub_promote(self, rhs: R) -> Self::Add
    { <C as Promote<R>>::sub_promote(self.value(), rhs) }

    #[inline(always)]
    fn mul_promote(self, rhs: R) -> Self::Mul
    { <C as Promote<R>>::mul_promote(self.value(), rhs) }
}

gen_each!{
    @{scalar}
    for_each!({$P:ty}) => {
        impl<E: Element> Promote<Negator<E>> for $P
        where $P: Promote<E::StdNumber>,
        {
            type Add = AddT<$P, E::StdNumber>;
            type Mul = MulT<$P, E::StdNumber>;

            #[inline(always)]
            fn add_promote(self, rhs: Negator<E>) -> Self::Add
            { <$P as Promote<E::StdNumber>>::add_promote(self, rhs.value()) }

            #[inline(always)]
            fn sub_promote(self, rhs: Negator<E>) -> Self::Add
            { <$P as Promote<E::StdNumber>>::sub_promote(self, rhs.value()) }

            #[inline(always)]
            fn mul_promote(self, rhs: Negator<E>) -> Self::Mul
            { <$P as Promote<E::StdNumber>>::mul_promote(self, rhs.value()) }
        }

        impl<C: Scalar> Promote<Conjugate<C>> for $P
        where $P: Promote<C>,
        {
            type Add = AddT<$P, C>;
            type Mul = MulT<$P, C>;

            #[inline(always)]
            fn add_promote(self, rhs: Conjugate<C>) -> Self::Add
            { <$P as Promote<C>>::add_promote(self, rhs.value()) }

            #[inline(always)]
            fn sub_promote(self, rhs: Conjugate<C>) -> Self::Add
            { <$P as Promote<C>>::sub_promote(self, rhs.value()) }

            #[inline(always)]
            fn mul_promote(self, rhs: Conjugate<C>) -> Self::Mul
            { <$P as Promote<C>>::mul_promote(self, rhs.value()) }
        }
    };
}
