//! Descriptor layout rules imposed by the enforcement engine ABI.
//!
//! A match descriptor is a fixed-size binary record the host allocates once
//! per rule and hands to the engine by value. The user-visible prefix is what
//! the configuration path may inspect and compare; the tail past
//! `userspace_size` is runtime state owned by the engine.

use serde::Serialize;

use crate::errors::XtError;

/// Engine ABI alignment for descriptor records.
pub const ALIGNMENT: usize = 8;

/// Round `len` up to the engine ABI alignment.
#[must_use]
pub const fn xt_align(len: usize) -> usize {
    (len + ALIGNMENT - 1) & !(ALIGNMENT - 1)
}

/// Declared sizes of a match descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DescriptorLayout {
    /// Full on-wire record size, including engine-owned runtime fields.
    pub wire_size: usize,
    /// User-visible prefix size, excluding trailing runtime-only fields.
    pub userspace_size: usize,
}

impl DescriptorLayout {
    /// Validate a declared layout against the engine ABI rules.
    pub fn new(wire_size: usize, userspace_size: usize) -> Result<Self, XtError> {
        if wire_size == 0 {
            return Err(XtError::InvalidLayout(
                "wire size must be nonzero".to_string(),
            ));
        }
        if wire_size != xt_align(wire_size) {
            return Err(XtError::InvalidLayout(format!(
                "wire size {wire_size} is not {ALIGNMENT}-byte aligned"
            )));
        }
        if userspace_size != xt_align(userspace_size) {
            return Err(XtError::InvalidLayout(format!(
                "userspace size {userspace_size} is not {ALIGNMENT}-byte aligned"
            )));
        }
        if userspace_size > wire_size {
            return Err(XtError::InvalidLayout(format!(
                "userspace size {userspace_size} exceeds wire size {wire_size}"
            )));
        }
        Ok(Self {
            wire_size,
            userspace_size,
        })
    }

    /// Check a descriptor buffer against this layout.
    pub fn check_buffer(&self, data: &[u8]) -> Result<(), XtError> {
        if data.len() != self.wire_size {
            return Err(XtError::DescriptorSize {
                got: data.len(),
                expected: self.wire_size,
            });
        }
        Ok(())
    }
}
