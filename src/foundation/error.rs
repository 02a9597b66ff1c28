use crate::validate::Defects;

/// Convenience result type used across the crate.
pub type TrophicResult<T> = Result<T, TrophicError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum TrophicError {
    /// The network failed validation. Carries every defect found in one sweep.
    #[error("invalid trophic network:\n{0}")]
    Invalid(Defects),

    /// A configuration value cannot be used to lay out a network.
    #[error("configuration error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TrophicError {
    /// Build a [`TrophicError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`TrophicError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Defects carried by an [`TrophicError::Invalid`] value, if any.
    pub fn defects(&self) -> Option<&Defects> {
        match self {
            Self::Invalid(d) => Some(d),
            _ => None,
        }
    }
}

impl From<Defects> for TrophicError {
    fn from(value: Defects) -> Self {
        Self::Invalid(value)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
