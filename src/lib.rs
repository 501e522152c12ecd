/* ************************************************************************ **
** This file is part of smallmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Fixed-size linear algebra over mixed element types.
//!
//! This crate only gathers up the workspace members:
//!
//! * `smallmat-array-types` has the containers and every operation on them;
//! * `smallmat-linalg` has the LU routines used for larger inverses.

pub use smallmat_array_types::*;

pub mod linalg {
    pub use smallmat_linalg::{check_info, Lapack, LapackError};
}
