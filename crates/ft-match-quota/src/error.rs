//! Error types for the quota match extension.

use ft_core::XtError;
use thiserror::Error;

/// User-input errors raised while building a quota match.
#[derive(Debug, Clone, Error)]
pub enum QuotaError {
    /// Argument is not a decimal byte count the engine accepts.
    #[error("quota invalid: '{0}'")]
    InvalidQuota(String),

    /// The mandatory option was never supplied.
    #[error("quota: the --quota argument must be specified")]
    MissingQuota,
}

impl From<QuotaError> for XtError {
    fn from(err: QuotaError) -> Self {
        XtError::ParameterProblem(err.to_string())
    }
}
