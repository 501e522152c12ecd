/* ************************************************************************ **
** This file is part of smallmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Small, fixed-size vectors and matrices.
//!
//! Shapes are part of the type: `Vector<N, E>` is a column, `Row<N, E>` is a
//! row, `Mat<M, N, E>` is dense and `SymMat<N, L, E>` is Hermitian.  Products
//! between them are chosen by shape, and the element type of every result
//! comes from [`Promote`], so that e.g. an `f32` matrix times a complex
//! vector produces a complex vector.
//!
//! Elements may also be the views [`Negator`] and [`Conjugate`], which let
//! a container be negated or conjugated without touching its data.

#[macro_use]
extern crate log;

#[cfg(test)]
#[macro_use]
extern crate smallmat_assert_close;

#[macro_use]
mod macros;

mod traits;
mod views;
mod types;
mod methods_v;
mod methods_m;
mod ops;
mod broadcast;
mod dot;
mod cross;
mod det;
mod inverse;
mod error;

pub use crate::traits::{Element, Scalar, Promote};
pub use crate::traits::{AddT, MulT, DotT, HermT, StdT};
pub use crate::views::{Negator, Conjugate};

pub use crate::types::{Vector, Row, Mat, SymMat};
pub use crate::types::{SymMat1, SymMat2, SymMat3, SymMat4, SymMat5, SymMat6};

pub use crate::dot::{dot, outer, AsColumn};
pub use crate::cross::{cross, cross_mat, cross_mat_sq, Cross, CrossMat};
pub use crate::det::{det, cofactor_det};
pub use crate::inverse::{inverse, lapack_inverse};
pub use crate::error::{InverseError, Result};

pub use num_complex::Complex;
