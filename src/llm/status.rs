//! Process-wide provider enabled flags.
//!
//! A provider starts enabled, is switched off by the dispatcher after an
//! auth/payment failure, and only comes back when [`ProviderFlags::reset_all`]
//! is called.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use super::provider::ProviderId;

/// Shared enabled-flag store. Cheap to clone via `Arc`.
pub struct ProviderFlags {
    enabled: RwLock<BTreeMap<ProviderId, bool>>,
}

impl ProviderFlags {
    /// All providers enabled.
    pub fn new() -> Arc<Self> {
        let enabled = ProviderId::PRIORITY.into_iter().map(|id| (id, true)).collect();
        Arc::new(Self {
            enabled: RwLock::new(enabled),
        })
    }

    pub async fn is_enabled(&self, id: ProviderId) -> bool {
        self.enabled.read().await.get(&id).copied().unwrap_or(true)
    }

    /// Disable a provider. Returns `true` if it was enabled before.
    pub async fn disable(&self, id: ProviderId) -> bool {
        let mut enabled = self.enabled.write().await;
        let was_enabled = enabled.insert(id, false).unwrap_or(true);
        if was_enabled {
            warn!(provider = %id, "Provider disabled until flags are reset");
        }
        was_enabled
    }

    /// Re-enable every provider.
    pub async fn reset_all(&self) {
        let mut enabled = self.enabled.write().await;
        for flag in enabled.values_mut() {
            *flag = true;
        }
        info!("All provider flags reset");
    }

    /// Point-in-time copy of every flag.
    pub async fn snapshot(&self) -> BTreeMap<ProviderId, bool> {
        self.enabled.read().await.clone()
    }
}
