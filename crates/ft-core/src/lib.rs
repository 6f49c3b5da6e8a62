//! # Ferrotables Core
//!
//! Shared framework types for the Ferrotables rule compiler: the surfaces a
//! match extension conforms to and the registry the host populates at startup.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every cross-crate type (option schema,
//!   descriptor layout rules, extension trait, errors) is defined here.
//! - **Bytes at the Boundary**: extensions exchange descriptors with the host
//!   as raw fixed-layout records; typed views live inside each extension.
//! - **Explicit Registration**: the registry is constructed and populated by
//!   host startup code, never by load-time side effects.

pub mod descriptor;
pub mod errors;
pub mod extension;
pub mod family;
pub mod options;
pub mod registry;

pub use descriptor::{xt_align, DescriptorLayout, ALIGNMENT};
pub use errors::XtError;
pub use extension::{MatchExtension, OptionsSeen, ParseContext};
pub use family::ProtocolFamily;
pub use options::{check_inverse, find_option, OptionSpec, TABLE_END};
pub use registry::{MatchInfo, MatchRegistry};
