/* ************************************************************************ **
** This file is part of smallmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use smallmat_linalg::LapackError;

pub type Result<T> = std::result::Result<T, InverseError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InverseError {
    /// Inversion was impossible or numerically meaningless.
    ///
    /// `source` is present when the factorization is what noticed.
    #[error("cannot invert singular {dim}x{dim} matrix")]
    SingularMatrix {
        dim: usize,
        #[source]
        source: Option<LapackError>,
    },
}
