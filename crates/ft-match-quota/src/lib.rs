//! # Quota Match Extension
//!
//! Matches traffic against a byte-count quota enforced by the packet engine.
//! This crate owns the userspace half of the contract: it turns
//! `[!] --quota <bytes>` into the engine's fixed binary descriptor and
//! renders the stored descriptor back for listing and saving.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): the typed descriptor, its wire codec, and
//!   strict threshold parsing. No I/O.
//! - **Extension Layer** (`extension.rs`): the [`ft_core::MatchExtension`]
//!   implementation wiring the domain into the host's capability bundle.
//!
//! The runtime byte counter at the tail of the wire record belongs to the
//! enforcement engine; nothing in this crate reads or writes it.

pub mod domain;
pub mod error;
pub mod extension;

pub use domain::{parse_quota, QuotaDescriptor, MAX_QUOTA, QUOTA_INVERT};
pub use error::QuotaError;
pub use extension::{QuotaMatch, OPT_QUOTA};
