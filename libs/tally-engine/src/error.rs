use tally_api::ProvisionError;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("config error: {0}")]
    Config(String),

    #[error("provisioner error: {0}")]
    Provision(#[from] ProvisionError),
}

impl EngineError {
    /// Add context to the error.
    ///
    /// For `Provision`, context is added to the inner `ProvisionError`
    /// so its kind is preserved. For `Config`, context is prepended.
    pub fn with_context(self, ctx: impl std::fmt::Display) -> Self {
        match self {
            EngineError::Provision(e) => EngineError::Provision(e.with_context(ctx)),
            EngineError::Config(msg) => EngineError::Config(format!("{ctx}: {msg}")),
        }
    }
}
