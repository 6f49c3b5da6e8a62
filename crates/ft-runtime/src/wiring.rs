//! Registry wiring: the explicit startup registration of match extensions.

use std::sync::Arc;

use ft_core::{MatchRegistry, XtError};
use ft_match_quota::QuotaMatch;
use tracing::info;

use crate::config::ExtensionConfig;

/// Build the match registry and register every enabled extension.
///
/// This is the single place extensions become visible to rule construction;
/// nothing registers itself as a side effect of being linked in.
pub fn build_registry(config: &ExtensionConfig) -> Result<MatchRegistry, XtError> {
    config.validate()?;

    let registry = MatchRegistry::new();

    if config.is_enabled("quota") {
        registry.register(Arc::new(QuotaMatch::new()))?;
    } else {
        info!("[Wiring] Skipping disabled match extension: quota");
    }

    info!(
        "[Wiring] Registry ready with {} match extension(s)",
        registry.len()
    );
    Ok(registry)
}
