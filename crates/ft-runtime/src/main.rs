//! Ferrotables rule compiler host entry point.
//!
//! Brings up logging, loads the extension configuration, populates the match
//! registry, and reports what this build can express. Rule construction
//! itself is driven per-invocation by the compiler front end; this binary
//! owns the startup half of that contract.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ft_runtime::{build_registry, ExtensionConfig};

fn main() -> Result<()> {
    // FT_LOG overrides the default filter, mirroring RUST_LOG conventions.
    let filter = EnvFilter::try_from_env("FT_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting Ferrotables rule compiler host");

    let config = ExtensionConfig::from_env();
    let registry = build_registry(&config).context("failed to build match registry")?;

    let snapshot =
        serde_json::to_string(&registry.describe()).context("failed to encode registry snapshot")?;
    info!("[Runtime] Registered matches: {snapshot}");

    // FT_HELP=1 prints each extension's usage text, as the compiler front
    // end would for `-m <name> --help`.
    if std::env::var("FT_HELP").map(|v| v == "1").unwrap_or(false) {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        for name in registry.names() {
            let extension = registry.get(name)?;
            extension.help(&mut out)?;
            out.flush()?;
        }
    }

    Ok(())
}
