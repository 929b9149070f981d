pub mod error;
pub mod topic;

pub use error::{ErrorKind, ProvisionError};
pub use topic::{TopicCategory, TopicDescriptor, TopicProvisioner};
