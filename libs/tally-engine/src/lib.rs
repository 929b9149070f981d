pub mod config;
pub mod error;
pub mod reconciler;

pub use config::{ReconcilerConfig, TopicSeed};
pub use error::EngineError;
pub use reconciler::{CategoryProvisioners, RetentionReconciler};
