use thiserror::Error;

/// Invalid behavior configuration, reported when a behavior is constructed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("collapse threshold must be greater than zero")]
    ZeroThreshold,
    #[error("{0} label must not be empty")]
    EmptyLabel(&'static str),
    #[error("{0} class must not be empty")]
    EmptyClass(&'static str),
    #[error("reveal threshold {0} is outside 0.0..=1.0")]
    InvalidRevealThreshold(f32),
}

/// Reject an empty class name.
pub(crate) fn require_class(value: &str, what: &'static str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        Err(ConfigError::EmptyClass(what))
    } else {
        Ok(())
    }
}
