use std::fmt;

/// Error kind for provisioner errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Io,
    Broker,
    Logic,
}

/// Provisioner error — returned by `TopicProvisioner::ensure_topic`.
#[derive(Debug, Clone)]
pub struct ProvisionError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ProvisionError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self { kind: ErrorKind::Config, message: msg.into() }
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self { kind: ErrorKind::Io, message: msg.into() }
    }

    /// Broker-side rejection (authorization, invalid config, quota).
    pub fn broker(msg: impl Into<String>) -> Self {
        Self { kind: ErrorKind::Broker, message: msg.into() }
    }

    pub fn logic(msg: impl Into<String>) -> Self {
        Self { kind: ErrorKind::Logic, message: msg.into() }
    }

    /// Add context to the error, preserving the original ErrorKind.
    ///
    /// Produces: `"context: original message"`.
    pub fn with_context(self, ctx: impl fmt::Display) -> Self {
        Self {
            kind: self.kind,
            message: format!("{ctx}: {}", self.message),
        }
    }
}

impl fmt::Display for ProvisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ProvisionError {}

// ---------------------------------------------------------------------------
// From impls: standard error types → ProvisionError with correct ErrorKind
// ---------------------------------------------------------------------------

impl From<std::io::Error> for ProvisionError {
    fn from(e: std::io::Error) -> Self {
        Self::io(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_context_preserves_kind() {
        let err = ProvisionError::broker("policy violation").with_context("topic 'orders'");
        assert_eq!(err.kind, ErrorKind::Broker);
        assert_eq!(err.message, "topic 'orders': policy violation");
    }

    #[test]
    fn io_errors_map_to_io_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = ProvisionError::from(io);
        assert_eq!(err.kind, ErrorKind::Io);
    }
}
