//! Protocol family identifiers for match extensions.

use serde::{Deserialize, Serialize};

/// Protocol family a match extension is registered for.
///
/// Family-agnostic extensions register as `Unspec` and are offered to rules
/// of every family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProtocolFamily {
    /// Usable from any protocol family.
    Unspec,
    /// IPv4 rules only.
    Ipv4,
    /// IPv6 rules only.
    Ipv6,
}

impl ProtocolFamily {
    /// Stable name used in logs and status output.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unspec => "unspec",
            Self::Ipv4 => "ipv4",
            Self::Ipv6 => "ipv6",
        }
    }

    /// Whether an extension of this family is usable from `rule_family`.
    #[must_use]
    pub fn covers(&self, rule_family: ProtocolFamily) -> bool {
        *self == Self::Unspec || *self == rule_family
    }
}
