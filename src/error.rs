use thiserror::Error;

/// Failure classes surfaced to the user. Everything exits non-zero; there is
/// no retry or recovery path.
#[derive(Debug, Error)]
pub enum StackDeployError {
    #[error("usage error: {0}")]
    Usage(String),

    #[error("template error: {0}")]
    Parse(String),

    #[error("template error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("provider error: {0}")]
    Provider(String),
}

impl StackDeployError {
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }
}
