use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::error::ProvisionError;

/// Category of a topic. Each category is provisioned by its own external
/// service; the set is closed and dispatch over it is exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicCategory {
    Entity,
    Event,
    ErrorEvent,
}

impl std::fmt::Display for TopicCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TopicCategory::Entity => f.write_str("entity"),
            TopicCategory::Event => f.write_str("event"),
            TopicCategory::ErrorEvent => f.write_str("error_event"),
        }
    }
}

/// Identifies a topic by name and carries its category tag.
///
/// Name composition and validation happen upstream; consumers treat the
/// descriptor as an opaque bag and never mutate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicDescriptor {
    name: String,
    category: TopicCategory,
}

impl TopicDescriptor {
    pub fn new(name: impl Into<String>, category: TopicCategory) -> Self {
        Self { name: name.into(), category }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> TopicCategory {
        self.category
    }
}

// ---------------------------------------------------------------------------
// Provisioner trait — broker-facing capability, one instance per category
// ---------------------------------------------------------------------------

/// Creates or reconfigures topics on the broker's administrative API.
///
/// Implementations may perform network calls; `ensure_topic` blocks (async)
/// for the duration of the broker round-trip. No timeout is imposed here —
/// cancellation and retry policy belong to the implementation.
pub trait TopicProvisioner: Send + Sync {
    /// Create the topic if absent, or adjust its retention if present.
    /// Broker failures surface as `ProvisionError`, never swallowed.
    fn ensure_topic<'a>(
        &'a self,
        descriptor: &'a TopicDescriptor,
        retention_ms: u64,
    ) -> Pin<Box<dyn Future<Output = Result<(), ProvisionError>> + Send + 'a>>;
}
