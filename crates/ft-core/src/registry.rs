//! # Match Registry
//!
//! Name-keyed registry of match extensions, populated explicitly by host
//! startup code. Registration validates the declared descriptor layout
//! before an extension becomes visible to rule construction.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::XtError;
use crate::extension::MatchExtension;
use crate::family::ProtocolFamily;

/// Serializable snapshot of one registered extension.
#[derive(Debug, Clone, Serialize)]
pub struct MatchInfo {
    /// Extension name.
    pub name: &'static str,
    /// Protocol family restriction.
    pub family: ProtocolFamily,
    /// Full on-wire descriptor size.
    pub wire_size: usize,
    /// User-visible descriptor size.
    pub userspace_size: usize,
}

/// Central registry of match extensions.
///
/// Populated once during startup; rule construction only reads it.
pub struct MatchRegistry {
    /// Registered extensions by name.
    matches: RwLock<HashMap<&'static str, Arc<dyn MatchExtension>>>,
    /// Registration order, for stable listing.
    order: RwLock<Vec<&'static str>>,
}

impl MatchRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            matches: RwLock::new(HashMap::new()),
            order: RwLock::new(Vec::new()),
        }
    }

    /// Register a match extension.
    ///
    /// Validates the declared layout and rejects duplicate names.
    pub fn register(&self, extension: Arc<dyn MatchExtension>) -> Result<(), XtError> {
        let name = extension.name();
        let layout = extension.layout();

        // Re-run the layout checks so a bad declaration fails at startup,
        // not when the first rule is built.
        let layout = crate::descriptor::DescriptorLayout::new(layout.wire_size, layout.userspace_size)?;

        let mut matches = self.matches.write();
        if matches.contains_key(name) {
            warn!("[Registry] Match extension '{}' already registered", name);
            return Err(XtError::DuplicateMatch(name));
        }

        info!(
            "[Registry] Registering match '{}' (family {}, {} wire bytes, {} user-visible)",
            name,
            extension.family().name(),
            layout.wire_size,
            layout.userspace_size,
        );

        matches.insert(name, extension);
        self.order.write().push(name);
        Ok(())
    }

    /// Look up an extension by name.
    pub fn get(&self, name: &str) -> Result<Arc<dyn MatchExtension>, XtError> {
        self.matches
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| XtError::UnknownMatch(name.to_string()))
    }

    /// Check whether an extension is registered.
    #[must_use]
    pub fn is_registered(&self, name: &str) -> bool {
        self.matches.read().contains_key(name)
    }

    /// Registered extension names in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.order.read().clone()
    }

    /// Number of registered extensions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.read().len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.read().is_empty()
    }

    /// Snapshot of all registered extensions, in registration order.
    #[must_use]
    pub fn describe(&self) -> Vec<MatchInfo> {
        let matches = self.matches.read();
        self.order
            .read()
            .iter()
            .filter_map(|name| matches.get(name))
            .map(|ext| {
                let layout = ext.layout();
                MatchInfo {
                    name: ext.name(),
                    family: ext.family(),
                    wire_size: layout.wire_size,
                    userspace_size: layout.userspace_size,
                }
            })
            .collect()
    }
}

impl Default for MatchRegistry {
    fn default() -> Self {
        Self::new()
    }
}
