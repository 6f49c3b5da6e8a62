//! The quota descriptor and its wire codec.
//!
//! Wire layout dictated by the enforcement engine ABI, little-endian:
//!
//! ```text
//! offset  0..8    quota      u64   byte threshold
//! offset  8       flags      u8    bit 0 = invert
//! offset  9..16   padding          engine ABI alignment
//! offset 16..24   counter    u64   runtime state, engine-owned
//! ```
//!
//! The counter tail is excluded from the user-visible size: the
//! configuration path never inspects it, and this crate never touches it.

use ft_core::{xt_align, DescriptorLayout, XtError};

/// Flags bit 0: match when the counter condition is negated.
pub const QUOTA_INVERT: u8 = 0x01;

/// Highest accepted threshold. The engine reserves `u64::MAX` internally,
/// so the valid range is `[0, 2^64 - 2]`.
pub const MAX_QUOTA: u64 = u64::MAX - 1;

const QUOTA_OFFSET: usize = 0;
const FLAGS_OFFSET: usize = 8;

/// User-visible record size: quota + flags, padded to ABI alignment.
const USERSPACE_SIZE: usize = xt_align(FLAGS_OFFSET + 1);

/// Full wire size: user-visible prefix plus the engine's runtime counter.
const WIRE_SIZE: usize = USERSPACE_SIZE + 8;

/// Typed view of the quota match descriptor.
///
/// Populated exactly once during rule construction; afterwards only read by
/// the listing and saving paths. The engine-owned runtime counter is not
/// part of this view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotaDescriptor {
    /// Byte threshold, in `[0, MAX_QUOTA]`.
    pub quota: u64,
    /// Negated match semantics.
    pub invert: bool,
}

impl QuotaDescriptor {
    /// Declared wire sizes for this descriptor.
    #[must_use]
    pub fn layout() -> DescriptorLayout {
        DescriptorLayout {
            wire_size: WIRE_SIZE,
            userspace_size: USERSPACE_SIZE,
        }
    }

    /// Encode into a host-allocated descriptor buffer.
    ///
    /// Only the user-visible fields are written; padding and the engine's
    /// counter tail are left as the host zeroed them.
    pub fn encode(&self, buf: &mut [u8]) -> Result<(), XtError> {
        Self::layout().check_buffer(buf)?;

        buf[QUOTA_OFFSET..QUOTA_OFFSET + 8].copy_from_slice(&self.quota.to_le_bytes());
        buf[FLAGS_OFFSET] = if self.invert { QUOTA_INVERT } else { 0 };
        Ok(())
    }

    /// Decode the user-visible fields from a stored descriptor buffer.
    pub fn decode(buf: &[u8]) -> Result<Self, XtError> {
        Self::layout().check_buffer(buf)?;

        let mut quota_bytes = [0u8; 8];
        quota_bytes.copy_from_slice(&buf[QUOTA_OFFSET..QUOTA_OFFSET + 8]);

        Ok(Self {
            quota: u64::from_le_bytes(quota_bytes),
            invert: buf[FLAGS_OFFSET] & QUOTA_INVERT != 0,
        })
    }
}
