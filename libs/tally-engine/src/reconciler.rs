use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use tally_api::{TopicCategory, TopicDescriptor, TopicProvisioner};

use crate::config::ReconcilerConfig;
use crate::error::EngineError;

/// Static category → provisioner mapping. One provisioner per category,
/// injected at construction; no global registry.
pub struct CategoryProvisioners {
    pub entity: Arc<dyn TopicProvisioner>,
    pub event: Arc<dyn TopicProvisioner>,
    pub error_event: Arc<dyn TopicProvisioner>,
}

impl CategoryProvisioners {
    fn for_category(&self, category: TopicCategory) -> &dyn TopicProvisioner {
        match category {
            TopicCategory::Entity => self.entity.as_ref(),
            TopicCategory::Event => self.event.as_ref(),
            TopicCategory::ErrorEvent => self.error_event.as_ref(),
        }
    }
}

/// Reconciliation cache in front of the broker's topic-management API.
///
/// Remembers the last retention applied per topic and forwards an ensure
/// call to the matching provisioner only when the desired retention differs
/// from the memoized one. The memo is a cache of intent, not verified broker
/// state — it drifts if topics are reconfigured out-of-band. Entries live
/// for the lifetime of the reconciler; there is no eviction and no expiry.
pub struct RetentionReconciler {
    provisioners: CategoryProvisioners,
    /// Topic name → last applied retention (ms). One mutex guards the whole
    /// table and is held across the provisioner await, so the check-then-act
    /// in `ensure_topic` is atomic and concurrent ensures serialize.
    memo: Mutex<HashMap<String, u64>>,
}

impl RetentionReconciler {
    pub fn new(provisioners: CategoryProvisioners) -> Self {
        Self {
            provisioners,
            memo: Mutex::new(HashMap::new()),
        }
    }

    /// Insert or overwrite the memo entry for `name` without contacting the
    /// broker. Returns the previously stored retention, if any.
    pub async fn add_topic(&self, name: &str, retention_ms: u64) -> Option<u64> {
        self.memo.lock().await.insert(name.to_string(), retention_ms)
    }

    /// Drop the memo entry for `name`, returning the stored retention if one
    /// existed. Never contacts the broker; absence is not an error.
    pub async fn remove_topic(&self, name: &str) -> Option<u64> {
        self.memo.lock().await.remove(name)
    }

    /// Last retention applied to `name`, if the reconciler has seen one.
    pub async fn retention_ms(&self, name: &str) -> Option<u64> {
        self.memo.lock().await.get(name).copied()
    }

    /// True when there is no entry for `name` or the stored value differs
    /// from `retention_ms`.
    pub async fn has_different_retention(&self, name: &str, retention_ms: u64) -> bool {
        self.memo.lock().await.get(name) != Some(&retention_ms)
    }

    /// Prime the memo table from a seed configuration. No broker calls;
    /// existing entries are overwritten. Returns the number of seeds applied.
    pub async fn seed(&self, config: &ReconcilerConfig) -> usize {
        let mut memo = self.memo.lock().await;
        for seed in &config.topics {
            memo.insert(seed.name.clone(), seed.retention_ms);
        }
        config.topics.len()
    }

    /// Ensure the descriptor's topic carries `retention_ms` on the broker.
    ///
    /// No-op when the memoized retention already matches. Otherwise the
    /// provisioner for the descriptor's category is invoked; on success the
    /// memo is updated, on failure it is left untouched so a later call with
    /// the same retention retries (failures are never cached).
    pub async fn ensure_topic(
        &self,
        descriptor: &TopicDescriptor,
        retention_ms: u64,
    ) -> Result<(), EngineError> {
        let mut memo = self.memo.lock().await;
        if memo.get(descriptor.name()) == Some(&retention_ms) {
            tracing::debug!(
                topic = %descriptor.name(),
                retention_ms,
                "topic already ensured with this retention"
            );
            return Ok(());
        }

        let provisioner = self.provisioners.for_category(descriptor.category());
        provisioner.ensure_topic(descriptor, retention_ms).await?;

        memo.insert(descriptor.name().to_string(), retention_ms);
        tracing::info!(
            topic = %descriptor.name(),
            category = %descriptor.category(),
            retention_ms,
            "ensured topic"
        );
        Ok(())
    }
}
