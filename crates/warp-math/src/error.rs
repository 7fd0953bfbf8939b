// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Precondition failures reported by the checked (`try_*`) math entry points.
///
/// The unchecked counterparts treat these as contract violations instead:
/// they assert in debug builds and produce non-finite values in release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// A scalar divisor was exactly zero.
    #[error("division by zero scalar")]
    DivideByZero,
    /// A vector or quaternion with zero magnitude was normalised or inverted.
    #[error("zero-length value cannot be normalized or inverted")]
    ZeroLength,
    /// A matrix with zero (or non-finite) determinant was inverted.
    #[error("matrix is singular")]
    SingularMatrix,
}
