//! # Ferrotables Runtime
//!
//! Host startup for the rule compiler: extension configuration and explicit
//! registry construction.
//!
//! ## Startup Sequence
//!
//! 1. Initialize logging (env-filter, `FT_LOG` override)
//! 2. Load the extension configuration (defaults, then environment)
//! 3. Validate the configuration
//! 4. Build the match registry and register every enabled extension
//! 5. Report the registry snapshot
//!
//! Registration is an explicit startup action here; extensions contribute
//! data and callbacks only, never load-time side effects.

pub mod config;
pub mod wiring;

pub use config::ExtensionConfig;
pub use wiring::build_registry;
