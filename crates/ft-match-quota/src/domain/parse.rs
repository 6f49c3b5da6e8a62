//! Strict parsing of the quota threshold argument.

use crate::domain::descriptor::MAX_QUOTA;
use crate::error::QuotaError;

/// Parse a byte threshold from its decimal token.
///
/// Strict base-10: the whole token must be digits, no locale forms, no
/// partial parse. Values above [`MAX_QUOTA`] are rejected because the
/// engine reserves the maximum representable value.
pub fn parse_quota(arg: &str) -> Result<u64, QuotaError> {
    let value: u64 = arg
        .parse()
        .map_err(|_| QuotaError::InvalidQuota(arg.to_string()))?;

    if value > MAX_QUOTA {
        return Err(QuotaError::InvalidQuota(arg.to_string()));
    }

    Ok(value)
}
